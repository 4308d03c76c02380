//! The appointment list view: fetch, filter, sort, render.

use anyhow::Result;
use chrono::NaiveDate;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use crate::cli::{SortArg, StatusArg};
use crate::core::{Appointment, AppointmentStatus, FilterState};
use crate::io::client::ApiClient;
use crate::pipeline;

pub struct ListConfig {
    pub phone: Option<String>,
    pub status: Option<StatusArg>,
    pub search: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub doctor: Option<String>,
    pub sort: SortArg,
    pub facets: bool,
}

impl ListConfig {
    fn filter_state(&self) -> FilterState {
        FilterState {
            status: self.status.into(),
            search: self.search.clone().unwrap_or_default(),
            date_from: self.from,
            date_to: self.to,
            doctor: self.doctor.clone().unwrap_or_default(),
            sort: self.sort.into(),
        }
    }
}

pub fn run(config: ListConfig, base_url: &str) -> Result<()> {
    let client = ApiClient::new(base_url);
    let runtime = super::runtime()?;

    let records = match &config.phone {
        Some(phone) => runtime.block_on(client.list_by_patient(phone))?,
        None => runtime.block_on(client.list_all())?,
    };

    if config.facets {
        print_facets(&records);
        return Ok(());
    }

    let view = pipeline::view(&records, &config.filter_state());
    print_appointments(&view);
    Ok(())
}

fn print_facets(records: &[Appointment]) {
    let doctors = pipeline::distinct_doctors(records);
    if doctors.is_empty() {
        println!("No doctors on file");
        return;
    }
    for doctor in doctors {
        println!("{doctor}");
    }
}

fn print_appointments(view: &[Appointment]) {
    if view.is_empty() {
        println!("No appointments match the current filters");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(["ID", "Patient", "Phone", "Date", "Time", "Doctor", "Status"]);

    for cita in view {
        table.add_row([
            cita.id.to_string(),
            cita.patient_name.clone(),
            cita.phone.clone(),
            cita.scheduled_at.format("%Y-%m-%d").to_string(),
            cita.scheduled_at.format("%H:%M").to_string(),
            cita.doctor.clone(),
            colored_status(cita.status),
        ]);
    }

    println!("{table}");
    println!("{} appointments found", view.len());
}

pub(crate) fn colored_status(status: AppointmentStatus) -> String {
    let label = status.label();
    match status {
        AppointmentStatus::Scheduled => label.blue().to_string(),
        AppointmentStatus::Confirmed => label.green().to_string(),
        AppointmentStatus::Cancelled => label.red().to_string(),
        AppointmentStatus::Completed => label.dimmed().to_string(),
    }
}
