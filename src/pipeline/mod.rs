//! Read-side transform backing the appointment list views: an
//! order-preserving filter followed by a stable sort, plus the
//! distinct-doctor facet that populates the doctor selector.
//!
//! Everything here is pure; callers re-run the pipeline whenever the
//! records or the filter state change.

pub mod predicates;
pub mod sort;

use crate::core::{Appointment, FilterState};
use std::collections::BTreeSet;

/// Produce the filtered, sorted view of `records` for one filter state.
pub fn view(records: &[Appointment], state: &FilterState) -> Vec<Appointment> {
    let mut filtered: Vec<Appointment> = records
        .iter()
        .filter(|r| predicates::passes_filters(r, state))
        .cloned()
        .collect();
    sort::sort_records(&mut filtered, state.sort);
    filtered
}

/// Unique non-empty doctor names, sorted ascending (case-sensitive).
pub fn distinct_doctors(records: &[Appointment]) -> Vec<String> {
    let set: BTreeSet<&str> = records
        .iter()
        .map(|r| r.doctor.as_str())
        .filter(|d| !d.is_empty())
        .collect();
    set.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AppointmentStatus, SortMode, StatusFilter};

    fn record(id: i64, doctor: &str, when: &str, status: AppointmentStatus) -> Appointment {
        Appointment {
            id,
            patient_name: format!("Paciente {id}"),
            phone: format!("+52{id}"),
            email: None,
            scheduled_at: when.parse().unwrap(),
            doctor: doctor.to_string(),
            status,
            created_at: None,
        }
    }

    #[test]
    fn default_state_only_reorders() {
        let records = vec![
            record(1, "Dr. Lee", "2026-09-01T09:00:00", AppointmentStatus::Scheduled),
            record(2, "Dra. García", "2026-09-03T09:00:00", AppointmentStatus::Cancelled),
            record(3, "Dr. Lee", "2026-09-02T09:00:00", AppointmentStatus::Completed),
        ];
        let out = view(&records, &FilterState::default());
        assert_eq!(out.len(), 3);
        let ids: Vec<_> = out.iter().map(|r| r.id).collect();
        assert_eq!(ids, [2, 3, 1]);
    }

    #[test]
    fn doctor_filter_narrows_to_one() {
        let records = vec![
            record(1, "Dr. Lee", "2026-09-01T09:00:00", AppointmentStatus::Scheduled),
            record(2, "Dra. García", "2026-09-02T09:00:00", AppointmentStatus::Scheduled),
            record(3, "Dr. Soto", "2026-09-03T09:00:00", AppointmentStatus::Scheduled),
        ];
        let state = FilterState {
            doctor: "lee".into(),
            ..FilterState::default()
        };
        let out = view(&records, &state);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 1);
    }

    #[test]
    fn status_and_sort_compose() {
        let records = vec![
            record(1, "Dr. Lee", "2026-09-01T09:00:00", AppointmentStatus::Scheduled),
            record(2, "Dr. Lee", "2026-09-02T09:00:00", AppointmentStatus::Cancelled),
            record(3, "Dr. Lee", "2026-09-03T09:00:00", AppointmentStatus::Scheduled),
        ];
        let state = FilterState {
            status: StatusFilter::Only(AppointmentStatus::Scheduled),
            sort: SortMode::DateAsc,
            ..FilterState::default()
        };
        let ids: Vec<_> = view(&records, &state).iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn facet_deduplicates_and_sorts() {
        let records = vec![
            record(1, "Dr. Lee", "2026-09-01T09:00:00", AppointmentStatus::Scheduled),
            record(2, "Dra. García", "2026-09-02T09:00:00", AppointmentStatus::Scheduled),
            record(3, "Dr. Lee", "2026-09-03T09:00:00", AppointmentStatus::Scheduled),
            record(4, "", "2026-09-04T09:00:00", AppointmentStatus::Scheduled),
        ];
        assert_eq!(distinct_doctors(&records), ["Dr. Lee", "Dra. García"]);
    }
}
