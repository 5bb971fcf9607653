//! English calendar wording: weekday names and ordinal day suffixes.

use chrono::{Datelike, NaiveDate};

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Weekday name for an index counted from Sunday (0) to Saturday (6).
pub fn day_name(index: usize) -> Option<&'static str> {
    DAY_NAMES.get(index).copied()
}

/// Weekday name of a calendar date.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Ordinal suffix for a day of the month: `st`, `nd`, `rd` or `th`.
pub fn date_suffix(day: u32) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

/// Writes a day-of-month field with its ordinal suffix, dropping one
/// leading zero: `"03"` becomes `"3rd"`.
pub fn with_date_suffix(day: &str) -> String {
    let day = day.strip_prefix('0').unwrap_or(day);
    let suffix = day.parse().map_or("th", date_suffix);
    format!("{day}{suffix}")
}
