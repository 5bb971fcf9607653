//! Built-in format validators
//!
//! Each validator implements [`Validate`](crate::foundation::Validate) over
//! `str` and has a boolean free function for quick checks.
//!
//! # Categories
//!
//! - **Rules**: [`RuleMatch`] wraps any named regex rule
//! - **Dates**: [`CalendarDate`], [`FutureDate`]
//! - **Postcodes**: [`Postcode`] with structural classification
//! - **Cards**: [`CreditCard`], [`Luhn`]

pub mod credit_card;
pub mod date;
pub mod future_date;
pub mod pattern;
pub mod postcode;

pub use credit_card::{
    CARD_TYPES, CardType, CreditCard, Luhn, SANDBOX_NUMBERS, creditcard, luhn, luhn_valid,
    normalize_card_number,
};
pub use date::{CalendarDate, DateLayout, DateParts, validate_date};
pub use future_date::{FutureDate, future_date};
pub use pattern::{RuleMatch, matches_rule};
pub use postcode::{POSTCODE_PATTERNS, Postcode, PostcodeKind, PostcodePattern, postcode};
