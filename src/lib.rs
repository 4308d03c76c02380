// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod pipeline;
pub mod stats;

// Re-export commonly used types
pub use crate::core::errors::{Error, Result};
pub use crate::core::{
    Appointment, AppointmentStatus, Doctor, DoctorStatus, FilterState, NewAppointment, NewDoctor,
    Period, SortMode, Statistics, StatusFilter,
};

pub use crate::pipeline::{distinct_doctors, view};

pub use crate::stats::{period_range, summarize, summarize_at};

pub use crate::io::client::ApiClient;
