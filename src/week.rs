// Week window derivation for the availability calendar
// Pure functions of the reference date; navigation is just +/- 7 days and
// is exactly invertible.

use chrono::{Datelike, Duration, Local, NaiveDate};

// Most recent Sunday on or before the reference date (Sunday-start weeks,
// matching the calendar the front desk uses)
pub fn week_start(reference: NaiveDate) -> NaiveDate {
    reference - Duration::days(reference.weekday().num_days_from_sunday() as i64)
}

// The 7 consecutive days starting from the week start
pub fn week_days(reference: NaiveDate) -> [NaiveDate; 7] {
    let start = week_start(reference);
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

pub fn next_week(reference: NaiveDate) -> NaiveDate {
    reference + Duration::days(7)
}

pub fn previous_week(reference: NaiveDate) -> NaiveDate {
    reference - Duration::days(7)
}

// Re-anchor to the week containing the present date
pub fn reset_to_today() -> NaiveDate {
    Local::now().date_naive()
}
