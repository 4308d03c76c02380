//! Period-to-range mapping for the dashboard.
//!
//! A [`Period`] plus a reference instant derives a half-open
//! `[start, end)` interval. The instant is injected so the aggregation
//! engine stays deterministic under test.

use crate::core::Period;
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

/// Derive the `[start, end)` interval for `period` relative to `now`.
/// Weeks start on Monday, matching the backend's locale.
pub fn period_range(period: Period, now: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let today = now.date();
    let (first, last_exclusive) = match period {
        Period::Today => (today, today + Days::new(1)),
        Period::Week => {
            let monday = today - Days::new(today.weekday().num_days_from_monday() as u64);
            (monday, monday + Days::new(7))
        }
        Period::Month => {
            let first = today.with_day(1).expect("day 1 exists in every month");
            (first, next_month(first))
        }
    };
    (
        first.and_hms_opt(0, 0, 0).expect("midnight is valid"),
        last_exclusive.and_hms_opt(0, 0, 0).expect("midnight is valid"),
    )
}

fn next_month(first_of_month: NaiveDate) -> NaiveDate {
    let (year, month) = if first_of_month.month() == 12 {
        (first_of_month.year() + 1, 1)
    } else {
        (first_of_month.year(), first_of_month.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of month exists")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        s.parse().unwrap()
    }

    #[test]
    fn today_spans_one_calendar_day() {
        let (start, end) = period_range(Period::Today, dt("2026-08-31T14:22:05"));
        assert_eq!(start, dt("2026-08-31T00:00:00"));
        assert_eq!(end, dt("2026-09-01T00:00:00"));
    }

    #[test]
    fn week_starts_on_monday() {
        // 2026-08-31 is a Monday; a Sunday later that week anchors back to it
        let (start, end) = period_range(Period::Week, dt("2026-09-06T08:00:00"));
        assert_eq!(start, dt("2026-08-31T00:00:00"));
        assert_eq!(end, dt("2026-09-07T00:00:00"));

        let (start, _) = period_range(Period::Week, dt("2026-08-31T00:00:00"));
        assert_eq!(start, dt("2026-08-31T00:00:00"));
    }

    #[test]
    fn month_covers_first_to_first() {
        let (start, end) = period_range(Period::Month, dt("2026-08-15T10:00:00"));
        assert_eq!(start, dt("2026-08-01T00:00:00"));
        assert_eq!(end, dt("2026-09-01T00:00:00"));
    }

    #[test]
    fn december_rolls_into_next_year() {
        let (start, end) = period_range(Period::Month, dt("2026-12-31T23:59:59"));
        assert_eq!(start, dt("2026-12-01T00:00:00"));
        assert_eq!(end, dt("2027-01-01T00:00:00"));
    }
}
