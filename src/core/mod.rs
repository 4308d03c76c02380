pub mod errors;
pub mod types;

pub use types::{
    Appointment, AppointmentStatus, Doctor, DoctorStatus, FilterState, NewAppointment, NewDoctor,
    Period, SortMode, Statistics, StatusFilter,
};
