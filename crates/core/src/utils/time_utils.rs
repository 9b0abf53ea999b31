use chrono::{NaiveDate, NaiveDateTime};

/// Strips the time-of-day from an instant, leaving the calendar day it falls on.
///
/// All spend bucketing goes through this so that two expenses on the same day
/// land in the same bucket regardless of their timestamps.
pub fn calendar_day(instant: NaiveDateTime) -> NaiveDate {
    instant.date()
}

/// Number of calendar days in `[start, end]`, counting both ends.
///
/// Returns zero or a negative count when `start` is after `end`; callers that
/// divide by the result decide their own fallback.
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    start.iter_days().take_while(|day| *day <= end).collect()
}
