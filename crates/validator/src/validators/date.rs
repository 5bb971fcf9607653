//! Calendar date validator for `dd/mm/yyyy` and `yyyy-mm-dd` style strings.
//!
//! Either `-` or `/` may separate the components, and the two separators do
//! not have to agree (`12/05-2024` is accepted). A date is valid only if it
//! exists on the calendar as written: `31/09/2024` is rejected rather than
//! rolled over to the 1st of October.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Days, NaiveDate};
use regex::Regex;

use crate::error::FormatError;
use crate::foundation::{Validate, ValidationError};

const MIN_FULL_YEAR: i32 = 100;

static DAY_MONTH_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}[-/][0-9]{2}[-/][0-9]{4}$").unwrap());

static YEAR_MONTH_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}[-/][0-9]{2}[-/][0-9]{2}$").unwrap());

// ============================================================================
// LAYOUT
// ============================================================================

/// Component order of a textual date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateLayout {
    /// `dd/mm/yyyy` or `dd-mm-yyyy`.
    DayMonthYear,
    /// `yyyy-mm-dd` or `yyyy/mm/dd`.
    YearMonthDay,
}

impl DateLayout {
    /// The format name this layout is registered under.
    pub const fn format_name(self) -> &'static str {
        match self {
            Self::DayMonthYear => "date_dd_mm_yyyy",
            Self::YearMonthDay => "date_yyyy_mm_dd",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::DayMonthYear => &DAY_MONTH_YEAR,
            Self::YearMonthDay => &YEAR_MONTH_DAY,
        }
    }
}

impl FromStr for DateLayout {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date_dd_mm_yyyy" => Ok(Self::DayMonthYear),
            "date_yyyy_mm_dd" => Ok(Self::YearMonthDay),
            other => Err(FormatError::UnknownFormat(other.to_owned())),
        }
    }
}

// ============================================================================
// DATE PARTS
// ============================================================================

/// Year, month and day read from a date string, not yet checked against
/// the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateParts {
    /// Reads the three components if `input` has the layout's shape.
    pub fn parse(input: &str, layout: DateLayout) -> Option<Self> {
        if !layout.pattern().is_match(input) {
            return None;
        }

        let mut components = input.split(['-', '/']);
        let first = components.next()?;
        let second = components.next()?;
        let third = components.next()?;

        let (year, month, day) = match layout {
            DateLayout::DayMonthYear => (third, second, first),
            DateLayout::YearMonthDay => (first, second, third),
        };

        Some(Self {
            year: year.parse().ok()?,
            month: month.parse().ok()?,
            day: day.parse().ok()?,
        })
    }

    /// The calendar date, or `None` when the components would roll over.
    ///
    /// Years below 100 are rejected: lenient parsers read them as
    /// two-digit years, so `0050` never survives a round trip.
    pub fn to_date(self) -> Option<NaiveDate> {
        if self.year < MIN_FULL_YEAR {
            return None;
        }
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// The date a lenient calendar lands on.
    ///
    /// A day past the end of the month carries into the next one
    /// (`31/02/2030` is the 3rd of March), and years 0-49 and 50-99 are
    /// read as 2000-2049 and 1950-1999. Months outside 1-12 and days
    /// outside 1-31 have no date.
    pub fn to_rolled_date(self) -> Option<NaiveDate> {
        if !(1..=31).contains(&self.day) {
            return None;
        }
        let year = match self.year {
            0..=49 => self.year + 2000,
            50..=99 => self.year + 1900,
            year => year,
        };
        NaiveDate::from_ymd_opt(year, self.month, 1)?
            .checked_add_days(Days::new(u64::from(self.day - 1)))
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates that a string is a real calendar date in a given layout.
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::Validate;
/// use formcheck_validator::validators::{CalendarDate, DateLayout};
///
/// let ymd = CalendarDate::new(DateLayout::YearMonthDay);
/// assert!(ymd.is_valid("2024-02-29"));
/// assert!(!ymd.is_valid("2023-02-29"));
/// assert!(!ymd.is_valid("29/02/2024"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    layout: DateLayout,
}

impl CalendarDate {
    #[must_use]
    pub fn new(layout: DateLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> DateLayout {
        self.layout
    }
}

impl Validate for CalendarDate {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let parts = DateParts::parse(input, self.layout)
            .ok_or_else(|| ValidationError::invalid_format("", self.layout.format_name()))?;

        if parts.to_date().is_none() {
            return Err(ValidationError::new(
                "invalid_date",
                format!(
                    "{:04}-{:02}-{:02} is not a calendar date",
                    parts.year, parts.month, parts.day
                ),
            )
            .with_param("expected", self.layout.format_name()));
        }

        Ok(())
    }
}

/// Returns `true` if `input` is a real calendar date in `layout`.
pub fn validate_date(input: &str, layout: DateLayout) -> bool {
    CalendarDate::new(layout).is_valid(input)
}
