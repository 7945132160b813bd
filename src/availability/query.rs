//! Pure availability queries over a set of blocked ranges.
//!
//! No I/O and no mutation: the same inputs and the same reference day
//! always produce the same output. The public entry points use the
//! current local date; the `_from` variants take an explicit reference
//! day and are what callers with their own notion of "today" (and the
//! tests) should use.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::availability::snapshot::{BlockedRange, DayAvailability};
use crate::constants::SEARCH_HORIZON_DAYS;

/// The earliest window of consecutive free nights found by
/// [`next_available_run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableRun {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Whether `date` is open for booking given `blocked`.
///
/// Past dates outside every range report `true`; hiding history is the
/// rendering layer's call (e.g. disabled calendar cells).
pub fn is_available(date: NaiveDate, blocked: &[BlockedRange]) -> bool {
    !blocked.iter().any(|range| range.contains(date))
}

/// Per-day availability for the next `horizon_days` days, starting today.
pub fn build_calendar(blocked: &[BlockedRange], horizon_days: i64) -> Vec<DayAvailability> {
    build_calendar_from(blocked, Local::now().date_naive(), horizon_days)
}

/// Per-day availability for `horizon_days` consecutive days starting at
/// `today`. A zero or negative horizon yields an empty calendar.
pub fn build_calendar_from(
    blocked: &[BlockedRange],
    today: NaiveDate,
    horizon_days: i64,
) -> Vec<DayAvailability> {
    if horizon_days <= 0 {
        return Vec::new();
    }

    today
        .iter_days()
        .take(horizon_days as usize)
        .map(|date| DayAvailability {
            date,
            available: is_available(date, blocked),
        })
        .collect()
}

/// The earliest run of at least `min_nights` consecutive free nights
/// within the default search horizon, or `None` if no run fits.
pub fn next_available_run(blocked: &[BlockedRange], min_nights: i64) -> Option<AvailableRun> {
    next_available_run_from(blocked, Local::now().date_naive(), min_nights)
}

/// Like [`next_available_run`], scanning forward from `today`.
pub fn next_available_run_from(
    blocked: &[BlockedRange],
    today: NaiveDate,
    min_nights: i64,
) -> Option<AvailableRun> {
    next_available_run_within(blocked, today, min_nights, SEARCH_HORIZON_DAYS)
}

/// Like [`next_available_run_from`], with an explicit search horizon.
///
/// The scan is strictly forward: the first run to reach `min_nights`
/// wins, and its reported `end` is the day at position `min_nights - 1`.
/// `min_nights <= 0` is treated as a one-night stay.
pub fn next_available_run_within(
    blocked: &[BlockedRange],
    today: NaiveDate,
    min_nights: i64,
    horizon_days: i64,
) -> Option<AvailableRun> {
    let min_nights = min_nights.max(1);

    let mut run_start: Option<NaiveDate> = None;
    let mut nights = 0;

    for day in build_calendar_from(blocked, today, horizon_days) {
        if day.available {
            let start = *run_start.get_or_insert(day.date);
            nights += 1;
            if nights >= min_nights {
                return Some(AvailableRun {
                    start,
                    end: day.date,
                });
            }
        } else {
            run_start = None;
            nights = 0;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn blocked(ranges: &[(NaiveDate, NaiveDate)]) -> Vec<BlockedRange> {
        ranges
            .iter()
            .map(|&(start, end)| BlockedRange::new(start, end))
            .collect()
    }

    #[test]
    fn checkout_day_is_open_for_a_new_arrival() {
        let ranges = blocked(&[(date(2026, 1, 10), date(2026, 1, 15))]);

        assert!(!is_available(date(2026, 1, 10), &ranges));
        assert!(!is_available(date(2026, 1, 14), &ranges));
        assert!(is_available(date(2026, 1, 15), &ranges));
    }

    #[test]
    fn dates_outside_every_range_are_available_even_in_the_past() {
        let ranges = blocked(&[(date(2026, 6, 1), date(2026, 6, 10))]);

        assert!(is_available(date(2020, 1, 1), &ranges));
        assert!(is_available(date(2026, 5, 31), &ranges));
    }

    #[test]
    fn overlapping_ranges_block_a_date_covered_by_either() {
        let ranges = blocked(&[
            (date(2026, 1, 1), date(2026, 1, 8)),
            (date(2026, 1, 5), date(2026, 1, 12)),
        ]);

        assert!(!is_available(date(2026, 1, 7), &ranges));
        assert!(!is_available(date(2026, 1, 10), &ranges));
        assert!(is_available(date(2026, 1, 12), &ranges));
    }

    #[test]
    fn calendar_covers_exactly_the_requested_horizon() {
        let today = date(2026, 3, 1);
        let days = build_calendar_from(&[], today, 90);

        assert_eq!(days.len(), 90);
        assert_eq!(days[0].date, today);
        assert_eq!(days[89].date, date(2026, 5, 29));
        assert!(days.iter().all(|d| d.available));
    }

    #[test]
    fn calendar_with_nonpositive_horizon_is_empty() {
        let today = date(2026, 3, 1);

        assert!(build_calendar_from(&[], today, 0).is_empty());
        assert!(build_calendar_from(&[], today, -5).is_empty());
    }

    #[test]
    fn calendar_marks_blocked_days() {
        let today = date(2026, 1, 1);
        let ranges = blocked(&[(date(2026, 1, 3), date(2026, 1, 5))]);
        let days = build_calendar_from(&ranges, today, 7);

        let flags: Vec<bool> = days.iter().map(|d| d.available).collect();
        assert_eq!(flags, vec![true, true, false, false, true, true, true]);
    }

    #[test]
    fn calendar_is_deterministic_for_a_fixed_reference_day() {
        let today = date(2026, 1, 1);
        let ranges = blocked(&[(date(2026, 1, 3), date(2026, 1, 5))]);

        assert_eq!(
            build_calendar_from(&ranges, today, 30),
            build_calendar_from(&ranges, today, 30)
        );
    }

    #[test]
    fn first_sufficient_gap_between_bookings_wins() {
        // Blocked Jan 1–4 and Jan 7–8; the Jan 5–6 gap is the first run
        // of two consecutive free days.
        let today = date(2026, 1, 1);
        let ranges = blocked(&[
            (date(2026, 1, 1), date(2026, 1, 5)),
            (date(2026, 1, 7), date(2026, 1, 9)),
        ]);

        let run = next_available_run_from(&ranges, today, 2).expect("run exists");
        assert_eq!(run.start, date(2026, 1, 5));
        assert_eq!(run.end, date(2026, 1, 6));
    }

    #[test]
    fn a_short_gap_is_skipped_in_favor_of_the_next_long_enough_one() {
        let today = date(2026, 1, 1);
        let ranges = blocked(&[
            (date(2026, 1, 1), date(2026, 1, 5)),
            // one free day on Jan 5, then blocked again
            (date(2026, 1, 6), date(2026, 1, 10)),
        ]);

        let run = next_available_run_from(&ranges, today, 3).expect("run exists");
        assert_eq!(run.start, date(2026, 1, 10));
        assert_eq!(run.end, date(2026, 1, 12));
    }

    #[test]
    fn nonpositive_min_nights_means_a_single_free_day() {
        let today = date(2026, 1, 1);
        let ranges = blocked(&[(date(2026, 1, 1), date(2026, 1, 5))]);

        for min_nights in [0, -3] {
            let run = next_available_run_from(&ranges, today, min_nights).expect("run exists");
            assert_eq!(run.start, date(2026, 1, 5));
            assert_eq!(run.end, date(2026, 1, 5));
        }
    }

    #[test]
    fn fully_blocked_horizon_yields_none() {
        let today = date(2026, 1, 1);
        let ranges = blocked(&[(date(2026, 1, 1), date(2027, 1, 1))]);

        assert_eq!(next_available_run_from(&ranges, today, 2), None);
    }

    #[test]
    fn run_must_fit_inside_the_search_horizon() {
        let today = date(2026, 1, 1);
        // Free days exist, but never two in a row within 30 days.
        let ranges: Vec<BlockedRange> = (0..20)
            .map(|i| {
                let start = today + chrono::Duration::days(i * 2);
                BlockedRange::new(start, start + chrono::Duration::days(1))
            })
            .collect();

        assert_eq!(next_available_run_within(&ranges, today, 2, 30), None);
        assert!(next_available_run_within(&ranges, today, 2, 60).is_some());
    }
}
