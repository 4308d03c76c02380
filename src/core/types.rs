//! Core data model shared by the pipeline, the aggregation engine and
//! the HTTP client.
//!
//! The backend speaks Spanish camelCase on the wire (`nombrePaciente`,
//! `fechaHora`, ...) and serializes datetimes as zoneless ISO-8601
//! local datetimes, so timestamps are `NaiveDateTime` end to end.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of an appointment. Transitions are owned by the
/// backend; this client only ever requests scheduled -> cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[serde(rename = "PROGRAMADA")]
    Scheduled,
    #[serde(rename = "CONFIRMADA")]
    Confirmed,
    #[serde(rename = "CANCELADA")]
    Cancelled,
    #[serde(rename = "COMPLETADA")]
    Completed,
}

impl AppointmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One appointment as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    #[serde(rename = "nombrePaciente")]
    pub patient_name: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "fechaHora")]
    pub scheduled_at: NaiveDateTime,
    pub doctor: String,
    #[serde(rename = "estado")]
    pub status: AppointmentStatus,
    #[serde(rename = "creadoEn", default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Payload for booking a new appointment.
#[derive(Debug, Clone, Serialize)]
pub struct NewAppointment {
    #[serde(rename = "nombrePaciente")]
    pub patient_name: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "fechaHora")]
    pub scheduled_at: NaiveDateTime,
    pub doctor: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoctorStatus {
    #[serde(rename = "ACTIVO")]
    Active,
    #[serde(rename = "INACTIVO")]
    Inactive,
}

impl fmt::Display for DoctorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        })
    }
}

/// Directory entry for a practitioner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "especialidad")]
    pub specialty: String,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "estado")]
    pub status: DoctorStatus,
    #[serde(rename = "creadoEn", default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(rename = "actualizadoEn", default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Payload for creating or updating a directory entry.
#[derive(Debug, Clone, Serialize)]
pub struct NewDoctor {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "especialidad")]
    pub specialty: String,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Status dimension of a filter: either pass everything or pass one
/// concrete status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AppointmentStatus),
}

/// Total order applied to a filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Latest appointment first (the default view).
    #[default]
    DateDesc,
    DateAsc,
    NameAsc,
    NameDesc,
}

/// Ephemeral view state for an appointment list. Unset fields are
/// no-op passes; `Default` matches everything and sorts latest-first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub status: StatusFilter,
    /// Matched case-insensitively against patient name and doctor,
    /// and as a raw substring against the phone number.
    pub search: String,
    /// Inclusive lower bound on the date component of `scheduled_at`.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the date component of `scheduled_at`.
    pub date_to: Option<NaiveDate>,
    /// Case-insensitive substring match against the doctor name.
    pub doctor: String,
    pub sort: SortMode,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every filter dimension, keeping the sort mode.
    pub fn clear(&mut self) {
        let sort = self.sort;
        *self = Self {
            sort,
            ..Self::default()
        };
    }

    /// True when no filter dimension is active.
    pub fn is_unfiltered(&self) -> bool {
        self.status == StatusFilter::All
            && self.search.is_empty()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.doctor.is_empty()
    }
}

/// Named, clock-relative range used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    Today,
    Week,
    Month,
}

/// Aggregate counts and rates for one period. Rates are percentages
/// already rounded to one decimal place.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub scheduled: usize,
    pub confirmed: usize,
    pub cancelled: usize,
    pub completed: usize,
    pub unique_patients: usize,
    pub completion_rate: f64,
    pub cancellation_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_backend_spelling() {
        let json = serde_json::to_string(&AppointmentStatus::Scheduled).unwrap();
        assert_eq!(json, "\"PROGRAMADA\"");
        let back: AppointmentStatus = serde_json::from_str("\"COMPLETADA\"").unwrap();
        assert_eq!(back, AppointmentStatus::Completed);
    }

    #[test]
    fn appointment_deserializes_backend_payload() {
        let json = r#"{
            "id": 7,
            "nombrePaciente": "Juan Pérez",
            "telefono": "+521234567890",
            "email": null,
            "fechaHora": "2026-09-02T09:30:00",
            "doctor": "Dra. García",
            "estado": "CONFIRMADA",
            "creadoEn": "2026-08-30T12:00:00"
        }"#;

        let cita: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(cita.patient_name, "Juan Pérez");
        assert_eq!(cita.status, AppointmentStatus::Confirmed);
        assert_eq!(cita.scheduled_at.to_string(), "2026-09-02 09:30:00");
        assert!(cita.email.is_none());
    }

    #[test]
    fn new_appointment_omits_missing_email() {
        let req = NewAppointment {
            patient_name: "Ana".into(),
            phone: "+52111".into(),
            email: None,
            scheduled_at: "2026-09-02T09:30:00".parse().unwrap(),
            doctor: "Dr. Lee".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("email").is_none());
        assert_eq!(json["nombrePaciente"], "Ana");
    }

    #[test]
    fn clear_keeps_sort_mode() {
        let mut state = FilterState {
            status: StatusFilter::Only(AppointmentStatus::Cancelled),
            search: "perez".into(),
            sort: SortMode::NameAsc,
            ..FilterState::default()
        };
        state.clear();
        assert!(state.is_unfiltered());
        assert_eq!(state.sort, SortMode::NameAsc);
    }
}
