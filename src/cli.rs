use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand, ValueEnum};

use crate::core::{AppointmentStatus, Period, SortMode, StatusFilter};

#[derive(Parser, Debug)]
#[command(name = "citadash")]
#[command(about = "Terminal client for the medical appointment service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Backend base URL (falls back to CITADASH_API_URL, then localhost)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Plain output: no colors
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show aggregate statistics for a period
    Dashboard {
        /// Period to aggregate over
        #[arg(short, long, value_enum, default_value = "today")]
        period: PeriodArg,
    },

    /// List appointments, optionally filtered and sorted
    List {
        /// Only this patient's appointments (lookup by phone)
        #[arg(long)]
        phone: Option<String>,

        /// Only appointments with this status
        #[arg(short, long, value_enum)]
        status: Option<StatusArg>,

        /// Free-text search over patient name, phone and doctor
        #[arg(long)]
        search: Option<String>,

        /// Earliest appointment date (inclusive), e.g. 2026-09-01
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Latest appointment date (inclusive)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Only appointments with this doctor (partial match)
        #[arg(long)]
        doctor: Option<String>,

        /// Sort order
        #[arg(long, value_enum, default_value = "date-desc")]
        sort: SortArg,

        /// Print the distinct doctor names instead of the list
        #[arg(long)]
        facets: bool,
    },

    /// Book a new appointment
    Book {
        /// Patient name
        #[arg(long)]
        name: String,

        /// Patient phone in international format, e.g. +521234567890
        #[arg(long)]
        phone: String,

        /// Optional contact email
        #[arg(long)]
        email: Option<String>,

        /// Appointment date and time, e.g. 2026-09-02T09:30
        #[arg(long, value_parser = parse_datetime)]
        datetime: NaiveDateTime,

        /// Doctor name
        #[arg(long)]
        doctor: String,
    },

    /// Cancel a scheduled appointment
    Cancel {
        /// Appointment id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Manage the doctor directory
    Doctors {
        #[command(subcommand)]
        command: DoctorsCommands,
    },

    /// Check backend connectivity
    Status,
}

#[derive(Subcommand, Debug)]
pub enum DoctorsCommands {
    /// List doctors (active only by default)
    List {
        /// Include inactive doctors
        #[arg(long)]
        all: bool,

        /// Filter by name or specialty (partial match)
        #[arg(long)]
        search: Option<String>,
    },

    /// Add a doctor to the directory
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        specialty: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },

    /// Update an existing doctor
    Update {
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        specialty: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },

    /// Remove a doctor from the directory
    Remove {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PeriodArg {
    Today,
    Week,
    Month,
}

impl From<PeriodArg> for Period {
    fn from(p: PeriodArg) -> Self {
        match p {
            PeriodArg::Today => Period::Today,
            PeriodArg::Week => Period::Week,
            PeriodArg::Month => Period::Month,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Scheduled,
    Confirmed,
    Cancelled,
    Completed,
}

impl From<StatusArg> for AppointmentStatus {
    fn from(s: StatusArg) -> Self {
        match s {
            StatusArg::Scheduled => AppointmentStatus::Scheduled,
            StatusArg::Confirmed => AppointmentStatus::Confirmed,
            StatusArg::Cancelled => AppointmentStatus::Cancelled,
            StatusArg::Completed => AppointmentStatus::Completed,
        }
    }
}

impl From<Option<StatusArg>> for StatusFilter {
    fn from(s: Option<StatusArg>) -> Self {
        match s {
            None => StatusFilter::All,
            Some(arg) => StatusFilter::Only(arg.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    DateDesc,
    DateAsc,
    NameAsc,
    NameDesc,
}

impl From<SortArg> for SortMode {
    fn from(s: SortArg) -> Self {
        match s {
            SortArg::DateDesc => SortMode::DateDesc,
            SortArg::DateAsc => SortMode::DateAsc,
            SortArg::NameAsc => SortMode::NameAsc,
            SortArg::NameDesc => SortMode::NameDesc,
        }
    }
}

/// Accept datetimes with or without seconds.
fn parse_datetime(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|_| format!("invalid datetime '{s}', expected e.g. 2026-09-02T09:30"))
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_list_command() {
        let cli = Cli::parse_from([
            "citadash", "list", "--status", "cancelled", "--search", "perez", "--sort", "name-asc",
        ]);

        match cli.command {
            Commands::List {
                status,
                search,
                sort,
                ..
            } => {
                assert_eq!(status, Some(StatusArg::Cancelled));
                assert_eq!(search.as_deref(), Some("perez"));
                assert_eq!(sort, SortArg::NameAsc);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parsing_book_command() {
        let cli = Cli::parse_from([
            "citadash",
            "book",
            "--name",
            "Juan Pérez",
            "--phone",
            "+521234567890",
            "--datetime",
            "2026-09-02T09:30",
            "--doctor",
            "Dra. García",
        ]);

        match cli.command {
            Commands::Book { datetime, email, .. } => {
                assert_eq!(datetime.to_string(), "2026-09-02 09:30:00");
                assert!(email.is_none());
            }
            _ => panic!("Expected Book command"),
        }
    }

    #[test]
    fn test_cli_parsing_doctors_subcommand() {
        let cli = Cli::parse_from(["citadash", "doctors", "list", "--all"]);

        match cli.command {
            Commands::Doctors {
                command: DoctorsCommands::List { all, search },
            } => {
                assert!(all);
                assert!(search.is_none());
            }
            _ => panic!("Expected Doctors List command"),
        }
    }

    #[test]
    fn test_global_url_flag() {
        let cli = Cli::parse_from(["citadash", "status", "--url", "http://backend:9090"]);
        assert_eq!(cli.url.as_deref(), Some("http://backend:9090"));
    }

    #[test]
    fn test_status_filter_conversion() {
        assert_eq!(StatusFilter::from(None::<StatusArg>), StatusFilter::All);
        assert_eq!(
            StatusFilter::from(Some(StatusArg::Completed)),
            StatusFilter::Only(AppointmentStatus::Completed)
        );
    }

    #[test]
    fn test_datetime_parser_accepts_both_precisions() {
        assert!(parse_datetime("2026-09-02T09:30").is_ok());
        assert!(parse_datetime("2026-09-02T09:30:15").is_ok());
        assert!(parse_datetime("tomorrow").is_err());
    }
}
