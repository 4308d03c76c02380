//! Sort-mode comparators for the appointment view.
//!
//! `slice::sort_by` is stable, so records with equal keys keep their
//! relative input order under every mode.

use crate::core::{Appointment, SortMode};
use std::cmp::Ordering;

/// Compare two records under the given sort mode.
pub fn compare(a: &Appointment, b: &Appointment, mode: SortMode) -> Ordering {
    match mode {
        SortMode::DateDesc => b.scheduled_at.cmp(&a.scheduled_at),
        SortMode::DateAsc => a.scheduled_at.cmp(&b.scheduled_at),
        SortMode::NameAsc => name_key(&a.patient_name).cmp(&name_key(&b.patient_name)),
        SortMode::NameDesc => name_key(&b.patient_name).cmp(&name_key(&a.patient_name)),
    }
}

/// Sort a filtered view in place.
pub fn sort_records(records: &mut [Appointment], mode: SortMode) {
    records.sort_by(|a, b| compare(a, b, mode));
}

// Unicode lowercase fold as the collation key; the original backend
// stores plain names, for which this agrees with its locale compare.
fn name_key(name: &str) -> String {
    name.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AppointmentStatus;

    fn at(id: i64, name: &str, when: &str) -> Appointment {
        Appointment {
            id,
            patient_name: name.to_string(),
            phone: "+52".to_string(),
            email: None,
            scheduled_at: when.parse().unwrap(),
            doctor: "Dr. Lee".to_string(),
            status: AppointmentStatus::Scheduled,
            created_at: None,
        }
    }

    #[test]
    fn date_desc_puts_latest_first() {
        let mut records = vec![
            at(1, "Ana", "2026-09-01T09:00:00"),
            at(2, "Luis", "2026-09-03T09:00:00"),
            at(3, "Mar", "2026-09-02T09:00:00"),
        ];
        sort_records(&mut records, SortMode::DateDesc);
        let ids: Vec<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, [2, 3, 1]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut records = vec![
            at(1, "beatriz", "2026-09-01T09:00:00"),
            at(2, "Álvaro", "2026-09-01T09:00:00"),
            at(3, "ana", "2026-09-01T09:00:00"),
        ];
        sort_records(&mut records, SortMode::NameAsc);
        let names: Vec<_> = records.iter().map(|r| r.patient_name.as_str()).collect();
        assert_eq!(names, ["ana", "beatriz", "Álvaro"]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let mut records = vec![
            at(1, "Ana", "2026-09-01T09:00:00"),
            at(2, "Ana", "2026-09-01T09:00:00"),
            at(3, "Ana", "2026-09-01T09:00:00"),
        ];
        for mode in [
            SortMode::DateDesc,
            SortMode::DateAsc,
            SortMode::NameAsc,
            SortMode::NameDesc,
        ] {
            sort_records(&mut records, mode);
            let ids: Vec<_> = records.iter().map(|r| r.id).collect();
            assert_eq!(ids, [1, 2, 3], "unstable under {mode:?}");
        }
    }
}
