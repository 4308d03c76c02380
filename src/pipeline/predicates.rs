//! Pure predicate functions for filtering appointments.
//!
//! Each predicate checks one dimension of a [`FilterState`] and is a
//! pure function of (state, record). An unset dimension always passes,
//! so [`passes_filters`] is the logical AND of the active filters.

use crate::core::{Appointment, FilterState, StatusFilter};

/// Check the status dimension: `All` passes everything, otherwise the
/// record status must match exactly.
#[inline]
pub fn matches_status(record: &Appointment, filter: StatusFilter) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Only(status) => record.status == status,
    }
}

/// Check the free-text search. Case-insensitive substring against
/// patient name and doctor; raw substring against the phone number so
/// a partial "+52..." query keeps working.
#[inline]
pub fn matches_search(record: &Appointment, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    record.patient_name.to_lowercase().contains(&needle)
        || record.phone.contains(search)
        || record.doctor.to_lowercase().contains(&needle)
}

/// Check the calendar-date range against the date component of
/// `scheduled_at`. Both bounds are inclusive.
#[inline]
pub fn matches_date_range(record: &Appointment, state: &FilterState) -> bool {
    let date = record.scheduled_at.date();
    if let Some(from) = state.date_from {
        if date < from {
            return false;
        }
    }
    if let Some(to) = state.date_to {
        if date > to {
            return false;
        }
    }
    true
}

/// Check the doctor facet: case-insensitive substring match.
#[inline]
pub fn matches_doctor(record: &Appointment, doctor: &str) -> bool {
    doctor.is_empty() || record.doctor.to_lowercase().contains(&doctor.to_lowercase())
}

/// True iff the record passes every active filter dimension.
pub fn passes_filters(record: &Appointment, state: &FilterState) -> bool {
    matches_status(record, state.status)
        && matches_search(record, &state.search)
        && matches_date_range(record, state)
        && matches_doctor(record, &state.doctor)
}
