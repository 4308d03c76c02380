//! Request a scheduled -> cancelled transition for one appointment.
//!
//! The backend owns the transition rules; if the appointment is
//! already cancelled or completed it rejects the request and the
//! failure is surfaced verbatim. On success the record is refetched
//! rather than trusting local state.

use anyhow::Result;
use colored::Colorize;

use crate::core::errors::Error;
use crate::io::client::ApiClient;

pub fn run(id: i64, yes: bool, base_url: &str) -> Result<()> {
    if !yes && !super::confirm(&format!("Cancel appointment {id}?"))? {
        println!("Aborted");
        return Ok(());
    }

    let client = ApiClient::new(base_url);
    let runtime = super::runtime()?;

    match runtime.block_on(client.cancel(id)) {
        Ok(_) => {}
        Err(err @ (Error::Conflict { .. } | Error::Validation { .. })) => {
            eprintln!("{} {err}", "✗".red());
            anyhow::bail!("appointment {id} was not cancelled")
        }
        Err(err) => return Err(err.into()),
    }

    // Refetch so the reported state is server truth, not the response
    // we happened to get back.
    let records = runtime.block_on(client.list_all())?;
    match records.iter().find(|r| r.id == id) {
        Some(record) => println!(
            "{} Appointment {id} is now {}",
            "✓".green(),
            super::list::colored_status(record.status)
        ),
        None => println!("{} Appointment {id} cancelled", "✓".green()),
    }
    Ok(())
}
