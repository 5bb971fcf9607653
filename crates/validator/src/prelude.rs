//! Prelude module for convenient imports.
//!
//! Provides a single `use formcheck_validator::prelude::*;` import that
//! brings in the entry points, traits and validators.
//!
//! # Examples
//!
//! ```
//! use formcheck_validator::prelude::*;
//!
//! assert!(matches_rule(PatternRule::Userid).is_valid("user_01"));
//! assert_eq!("JOHN".autocorrect_as("to_lower_case").as_deref(), Ok("john"));
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{Validate, ValidationError, ValidationResult};

// ============================================================================
// ENTRY POINTS
// ============================================================================

pub use crate::config::FormatConfig;
pub use crate::correct::Transform;
pub use crate::error::{FormatError, FormatResult};
pub use crate::ext::FormatExt;
pub use crate::format::{Format, Formats};
pub use crate::rules::PatternRule;
pub use crate::{autocorrect, validate};

// ============================================================================
// VALIDATORS
// ============================================================================

pub use crate::validators::{
    CalendarDate, CardType, CreditCard, DateLayout, DateParts, FutureDate, Luhn, Postcode,
    PostcodeKind, RuleMatch, creditcard, future_date, luhn, matches_rule, postcode,
    validate_date,
};
