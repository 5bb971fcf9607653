//! # formcheck-validator
//!
//! Named-format validation and autocorrection for user-entered text.
//!
//! ## Quick Start
//!
//! ```
//! use formcheck_validator::{autocorrect, validate};
//!
//! assert_eq!(validate("test@example.com", "email"), Ok(true));
//! assert_eq!(validate("2024-02-30", "date_yyyy_mm_dd"), Ok(false));
//! assert_eq!(autocorrect("sw1a1aa", "postcode").as_deref(), Ok("SW1A 1AA"));
//! assert!(validate("x", "zipcode").is_err());
//! ```
//!
//! ## Structured errors
//!
//! Every validator implements [`Validate`](foundation::Validate), which
//! explains a rejection with a [`ValidationError`](foundation::ValidationError).
//! The [`validator!`] macro declares new ones.
//!
//! ## Built-in formats
//!
//! - **Rules**: see [`PatternRule`](rules::PatternRule)
//! - **Dates**: `date_dd_mm_yyyy`, `date_yyyy_mm_dd`, `futuredate`
//! - **Cards**: `creditcard`
//!
//! Transforms for [`autocorrect`] are listed on [`Transform`](correct::Transform).

pub mod calendar;
pub mod config;
pub mod correct;
pub mod error;
pub mod ext;
pub mod format;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;
pub mod validators;

pub use calendar::{date_suffix, day_name, with_date_suffix};
pub use config::FormatConfig;
pub use error::{FormatError, FormatResult};
pub use ext::FormatExt;
pub use format::{Format, Formats};
pub use validators::{DateLayout, creditcard, future_date, postcode, validate_date};

/// Validates `input` against the format registered as `format_name`.
///
/// Input is trimmed first. Unknown names are an error, never `false`.
pub fn validate(input: &str, format_name: &str) -> FormatResult<bool> {
    Formats::default().validate(input, format_name)
}

/// Rewrites `input` with the transform registered as `transform_name`.
pub fn autocorrect(input: &str, transform_name: &str) -> FormatResult<String> {
    Formats::default().autocorrect(input, transform_name)
}
