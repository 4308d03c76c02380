//! Doctor directory management.

use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use crate::cli::DoctorsCommands;
use crate::core::{Doctor, NewDoctor};
use crate::io::client::ApiClient;

pub fn run(command: DoctorsCommands, base_url: &str) -> Result<()> {
    let client = ApiClient::new(base_url);
    let runtime = super::runtime()?;

    match command {
        DoctorsCommands::List { all, search } => {
            let doctors = runtime.block_on(client.list_doctors(!all))?;
            let visible = filter_doctors(&doctors, search.as_deref().unwrap_or(""));
            print_doctors(&visible);
        }
        DoctorsCommands::Add {
            name,
            specialty,
            phone,
            email,
        } => {
            let created = runtime.block_on(client.create_doctor(&NewDoctor {
                name,
                specialty,
                phone,
                email,
            }))?;
            println!("{} Doctor {} ({}) added", "✓".green(), created.name, created.id);
        }
        DoctorsCommands::Update {
            id,
            name,
            specialty,
            phone,
            email,
        } => {
            let updated = runtime.block_on(client.update_doctor(
                id,
                &NewDoctor {
                    name,
                    specialty,
                    phone,
                    email,
                },
            ))?;
            println!("{} Doctor {} updated", "✓".green(), updated.name);
        }
        DoctorsCommands::Remove { id, yes } => {
            if !yes && !super::confirm(&format!("Remove doctor {id} from the directory?"))? {
                println!("Aborted");
                return Ok(());
            }
            runtime.block_on(client.delete_doctor(id))?;
            println!("{} Doctor {id} removed", "✓".green());
        }
    }
    Ok(())
}

/// Client-side search over name and specialty, case-insensitive.
fn filter_doctors<'a>(doctors: &'a [Doctor], search: &str) -> Vec<&'a Doctor> {
    let needle = search.to_lowercase();
    doctors
        .iter()
        .filter(|d| {
            needle.is_empty()
                || d.name.to_lowercase().contains(&needle)
                || d.specialty.to_lowercase().contains(&needle)
        })
        .collect()
}

fn print_doctors(doctors: &[&Doctor]) {
    if doctors.is_empty() {
        println!("No doctors match");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(["ID", "Name", "Specialty", "Phone", "Email", "Status"]);

    for doctor in doctors {
        table.add_row([
            doctor.id.to_string(),
            doctor.name.clone(),
            doctor.specialty.clone(),
            doctor.phone.clone().unwrap_or_default(),
            doctor.email.clone().unwrap_or_default(),
            doctor.status.to_string(),
        ]);
    }

    println!("{table}");
    println!("{} doctors", doctors.len());
}
