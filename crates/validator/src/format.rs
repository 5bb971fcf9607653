//! Name-based dispatch to the right validator.
//!
//! A format name resolves to a [`Format`]; [`Formats`] holds the
//! configured validators and runs them.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::config::FormatConfig;
use crate::correct::Transform;
use crate::error::{FormatError, FormatResult};
use crate::foundation::{Validate, ValidationResult};
use crate::rules::PatternRule;
use crate::validators::{CalendarDate, CreditCard, DateLayout, FutureDate, RuleMatch};

// ============================================================================
// FORMAT
// ============================================================================

/// Every format [`validate`](crate::validate) understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// One of the regex rules.
    Rule(PatternRule),
    /// `dd/mm/yyyy` strictly after today.
    FutureDate,
    /// Card number with issuer, length and Luhn checks.
    CreditCard,
    /// Calendar date in the given layout.
    Date(DateLayout),
}

impl Format {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rule(rule) => rule.name(),
            Self::FutureDate => "futuredate",
            Self::CreditCard => "creditcard",
            Self::Date(layout) => layout.format_name(),
        }
    }

    /// Every registered format name.
    pub fn names() -> impl Iterator<Item = &'static str> {
        PatternRule::ALL
            .into_iter()
            .map(PatternRule::name)
            .chain(["futuredate", "creditcard"])
            .chain([DateLayout::DayMonthYear, DateLayout::YearMonthDay].map(DateLayout::format_name))
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rule) = PatternRule::from_name(s) {
            return Ok(Self::Rule(rule));
        }
        match s {
            "futuredate" => Ok(Self::FutureDate),
            "creditcard" => Ok(Self::CreditCard),
            other => other.parse().map(Self::Date),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// DISPATCHER
// ============================================================================

/// Configured entry point for validation and autocorrection.
///
/// # Examples
///
/// ```
/// use formcheck_validator::{FormatConfig, Formats};
///
/// let formats = Formats::new(FormatConfig::strict());
/// assert_eq!(formats.validate("test@example.com", "email"), Ok(true));
/// assert_eq!(formats.validate("1000380000000004", "creditcard"), Ok(false));
/// assert!(formats.validate("x", "zipcode").is_err());
/// assert_eq!(formats.autocorrect("sw1a1aa", "postcode").as_deref(), Ok("SW1A 1AA"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Formats {
    config: FormatConfig,
    credit_card: CreditCard,
}

impl Formats {
    #[must_use]
    pub fn new(config: FormatConfig) -> Self {
        Self {
            config,
            credit_card: config.credit_card(),
        }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Validates trimmed `input` against `format`, explaining any rejection.
    pub fn check(&self, input: &str, format: Format) -> ValidationResult<()> {
        let input = input.trim();
        let result = match format {
            Format::Rule(rule) => RuleMatch::new(rule).validate(input),
            Format::FutureDate => FutureDate::new().validate(input),
            Format::CreditCard => self.credit_card.validate(input),
            Format::Date(layout) => CalendarDate::new(layout).validate(input),
        };
        trace!(format = %format, valid = result.is_ok(), "validated input");
        result
    }

    /// `true` if trimmed `input` satisfies `format`.
    pub fn is_valid(&self, input: &str, format: Format) -> bool {
        self.check(input, format).is_ok()
    }

    /// Validates `input` against the format registered as `format_name`.
    pub fn validate(&self, input: &str, format_name: &str) -> FormatResult<bool> {
        let format = format_name.parse::<Format>().inspect_err(|_| {
            debug!(format = format_name, "rejecting unknown format name");
        })?;
        Ok(self.is_valid(input, format))
    }

    /// Applies the transform registered as `transform_name` to `input`.
    pub fn autocorrect(&self, input: &str, transform_name: &str) -> FormatResult<String> {
        let transform = transform_name.parse::<Transform>().inspect_err(|_| {
            debug!(transform = transform_name, "rejecting unknown transform name");
        })?;
        trace!(transform = %transform, "applying transform");
        Ok(transform.apply(input))
    }
}
