//! Dashboard aggregation over an in-memory appointment collection:
//! bucket by period, count per status, derive rates and unique-patient
//! cardinality.

pub mod period;

pub use period::period_range;

use crate::core::{Appointment, AppointmentStatus, Period, Statistics};
use chrono::{Local, NaiveDateTime};
use std::collections::HashSet;

/// Summarize `records` for `period` relative to an injected instant.
pub fn summarize_at(records: &[Appointment], period: Period, now: NaiveDateTime) -> Statistics {
    let (start, end) = period_range(period, now);
    let in_period: Vec<&Appointment> = records
        .iter()
        .filter(|r| r.scheduled_at >= start && r.scheduled_at < end)
        .collect();

    let count = |status: AppointmentStatus| in_period.iter().filter(|r| r.status == status).count();

    let total = in_period.len();
    let scheduled = count(AppointmentStatus::Scheduled);
    let confirmed = count(AppointmentStatus::Confirmed);
    let cancelled = count(AppointmentStatus::Cancelled);
    let completed = count(AppointmentStatus::Completed);

    // Phone is the stable patient identity, not the display name.
    let unique_patients = in_period
        .iter()
        .map(|r| r.phone.as_str())
        .collect::<HashSet<_>>()
        .len();

    Statistics {
        total,
        scheduled,
        confirmed,
        cancelled,
        completed,
        unique_patients,
        completion_rate: rate(completed, total),
        cancellation_rate: rate(cancelled, total),
    }
}

/// Summarize against the wall clock.
pub fn summarize(records: &[Appointment], period: Period) -> Statistics {
    summarize_at(records, period, Local::now().naive_local())
}

// Percentage rounded to one decimal; zero total short-circuits so the
// rate is always well-defined.
fn rate(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = part as f64 / total as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}
