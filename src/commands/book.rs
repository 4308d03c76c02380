//! Book a new appointment through the backend.

use anyhow::Result;
use chrono::NaiveDateTime;
use colored::Colorize;

use crate::core::errors::Error;
use crate::core::NewAppointment;
use crate::io::client::ApiClient;

pub struct BookConfig {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub datetime: NaiveDateTime,
    pub doctor: String,
}

pub fn run(config: BookConfig, base_url: &str) -> Result<()> {
    let client = ApiClient::new(base_url);
    let runtime = super::runtime()?;

    let request = NewAppointment {
        patient_name: config.name,
        phone: config.phone,
        email: config.email,
        scheduled_at: config.datetime,
        doctor: config.doctor,
    };

    match runtime.block_on(client.create(&request)) {
        Ok(created) => {
            println!(
                "{} Appointment {} booked for {} with {} on {}",
                "✓".green(),
                created.id,
                created.patient_name,
                created.doctor,
                created.scheduled_at.format("%Y-%m-%d %H:%M"),
            );
            println!("A WhatsApp confirmation has been sent to the patient");
            Ok(())
        }
        Err(err @ Error::Validation { .. }) => {
            eprintln!("{} {err}", "✗".red());
            anyhow::bail!("appointment was not booked")
        }
        Err(err) => Err(err.into()),
    }
}
