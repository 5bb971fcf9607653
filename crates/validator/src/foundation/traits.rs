//! Core traits for the validation system

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every format validator implements.
///
/// `validate` explains a rejection with a [`ValidationError`]; `is_valid`
/// collapses that to the plain yes/no answer most form code wants.
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::Validate;
/// use formcheck_validator::validators::CreditCard;
///
/// let card = CreditCard::new();
/// assert!(card.is_valid("4111111111111111"));
/// assert!(card.validate("4111111111111112").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns `true` when [`validate`](Self::validate) succeeds.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

// ============================================================================
// TESTS
// ============================================================================
