//! Connectivity panel for the backend and its messaging integration.

use anyhow::Result;
use colored::Colorize;

use crate::io::client::{ApiClient, HealthStatus};

pub fn run(base_url: &str) -> Result<()> {
    let client = ApiClient::new(base_url);
    let runtime = super::runtime()?;
    let health = runtime.block_on(client.health());

    println!("{}", "Appointment service".bold());
    println!("  Endpoint: {base_url}");
    match &health {
        HealthStatus::Connected => {
            println!("  Backend:  {}", "connected".green());
            println!("  WhatsApp reminders: {}", "active".green());
        }
        HealthStatus::Degraded(reason) => {
            println!("  Backend:  {}", "degraded".red());
            println!("  Reason:   {reason}");
        }
    }

    if let HealthStatus::Degraded(_) = health {
        anyhow::bail!("appointment service is not healthy");
    }
    Ok(())
}
