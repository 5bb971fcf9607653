//! Future date validator for `dd/mm/yyyy` strings.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

use crate::foundation::{Validate, ValidationError};
use crate::validators::date::{DateLayout, DateParts};

static FUTURE_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").unwrap());

/// Validates that a `dd/mm/yyyy` date falls strictly after today.
///
/// Only `/` is accepted as a separator. Today itself is not in the future.
/// Days past the end of a month roll into the next one, so `31/02/2030`
/// is read as the 3rd of March (see [`DateParts::to_rolled_date`]).
/// By default "today" is the local calendar date at the moment of the
/// call; [`FutureDate::relative_to`] pins it.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use formcheck_validator::foundation::Validate;
/// use formcheck_validator::validators::FutureDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let v = FutureDate::relative_to(today);
/// assert!(v.is_valid("02/06/2025"));
/// assert!(!v.is_valid("01/06/2025"));
/// assert!(!v.is_valid("02-06-2025"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FutureDate {
    today: Option<NaiveDate>,
}

impl FutureDate {
    /// Compares against the local date at validation time.
    #[must_use]
    pub fn new() -> Self {
        Self { today: None }
    }

    /// Compares against a fixed date instead of the clock.
    #[must_use]
    pub fn relative_to(today: NaiveDate) -> Self {
        Self { today: Some(today) }
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl Validate for FutureDate {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if !FUTURE_DATE_REGEX.is_match(input) {
            return Err(ValidationError::invalid_format("", "futuredate"));
        }

        let date = DateParts::parse(input, DateLayout::DayMonthYear)
            .and_then(DateParts::to_rolled_date)
            .ok_or_else(|| {
                ValidationError::new("invalid_date", "Month or day out of range")
                    .with_param("expected", "futuredate")
            })?;

        let today = self.today();
        if date <= today {
            return Err(
                ValidationError::new("not_in_future", "Date must be after today")
                    .with_param("today", today.format("%d/%m/%Y").to_string()),
            );
        }

        Ok(())
    }
}

/// Returns `true` if `input` is a `dd/mm/yyyy` date after today.
pub fn future_date(input: &str) -> bool {
    FutureDate::new().is_valid(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn pinned() -> FutureDate {
        FutureDate::relative_to(NaiveDate::from_ymd_opt(2024, 2, 28).unwrap())
    }

    #[test]
    fn test_strictly_after_today() {
        let v = pinned();
        assert!(v.is_valid("29/02/2024"));
        assert!(v.is_valid("01/01/2030"));
        assert!(!v.is_valid("28/02/2024"));
        assert!(!v.is_valid("27/02/2024"));
    }

    #[test]
    fn test_rejects_other_layouts() {
        let v = pinned();
        assert_eq!(
            v.validate("2030-01-01").unwrap_err().code,
            "invalid_format"
        );
        assert!(!v.is_valid("01-01-2030"));
        assert!(!v.is_valid("1/1/2030"));
    }

    #[test]
    fn test_month_overflow_rolls_forward() {
        let v = FutureDate::relative_to(NaiveDate::from_ymd_opt(2030, 3, 2).unwrap());
        assert!(v.is_valid("31/02/2030"));

        let v = FutureDate::relative_to(NaiveDate::from_ymd_opt(2030, 3, 3).unwrap());
        assert!(!v.is_valid("31/02/2030"));
    }

    #[test]
    fn test_rejects_out_of_range_components() {
        for input in ["01/13/2030", "00/01/2030", "32/01/2030"] {
            let error = pinned().validate(input).unwrap_err();
            assert_eq!(error.code, "invalid_date", "{input}");
        }
    }

    #[test]
    fn test_two_digit_years() {
        let v = pinned();
        assert!(v.is_valid("01/01/0030"));
        assert!(!v.is_valid("01/01/0050"));
    }

    #[test]
    fn test_not_in_future_reports_today() {
        let error = pinned().validate("01/01/2000").unwrap_err();
        assert_eq!(error.code, "not_in_future");
        assert_eq!(error.param("today"), Some("28/02/2024"));
    }

    #[test]
    fn test_clock_default() {
        let today = Local::now().date_naive();
        let far_future = today.checked_add_days(Days::new(400)).unwrap();

        assert!(!future_date(&today.format("%d/%m/%Y").to_string()));
        assert!(future_date(&far_future.format("%d/%m/%Y").to_string()));
    }
}
