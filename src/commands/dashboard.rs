//! Aggregate-statistics dashboard for one period.

use anyhow::Result;
use colored::Colorize;

use crate::core::{Period, Statistics};
use crate::io::client::ApiClient;
use crate::stats;

const BAR_WIDTH: usize = 32;

pub fn run(period: Period, base_url: &str) -> Result<()> {
    let client = ApiClient::new(base_url);
    let runtime = super::runtime()?;
    let records = runtime.block_on(client.list_all())?;

    let summary = stats::summarize(&records, period);
    print_summary(period, &summary, records.len());
    Ok(())
}

fn period_label(period: Period) -> &'static str {
    match period {
        Period::Today => "today",
        Period::Week => "this week",
        Period::Month => "this month",
    }
}

fn print_summary(period: Period, summary: &Statistics, all_time_total: usize) {
    println!("{}", format!("Appointments {}", period_label(period)).bold());
    println!();
    println!("  Total:      {:>4}   (all time: {all_time_total})", summary.total);
    println!("  Scheduled:  {:>4}", summary.scheduled);
    println!("  Confirmed:  {:>4}", summary.confirmed);
    println!("  Completed:  {:>4}", summary.completed);
    println!("  Cancelled:  {:>4}", summary.cancelled);
    println!();

    if summary.total == 0 {
        println!("No data for this period");
        return;
    }

    println!("{}", "Status distribution".bold());
    print_bar("scheduled", summary.scheduled, summary.total);
    print_bar("confirmed", summary.confirmed, summary.total);
    print_bar("completed", summary.completed, summary.total);
    print_bar("cancelled", summary.cancelled, summary.total);
    println!();

    println!("{}", "Key metrics".bold());
    println!("  Unique patients:   {}", summary.unique_patients);
    println!(
        "  Completion rate:   {}",
        format!("{:.1}%", summary.completion_rate).green()
    );
    println!(
        "  Cancellation rate: {}",
        format!("{:.1}%", summary.cancellation_rate).red()
    );
}

fn print_bar(label: &str, count: usize, total: usize) {
    let filled = if total == 0 {
        0
    } else {
        count * BAR_WIDTH / total
    };
    let bar: String = "█".repeat(filled) + &"░".repeat(BAR_WIDTH - filled);
    println!("  {label:<10} {bar} {count}");
}
