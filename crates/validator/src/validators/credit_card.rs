//! Payment card number validator.
//!
//! A number is valid when its prefix identifies a known issuer, its length
//! is one that issuer uses, and it passes the Luhn checksum.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};

/// Well-known sandbox numbers accepted without any checks.
pub const SANDBOX_NUMBERS: [&str; 2] = ["1000380000000004", "1000350000000536"];

// ============================================================================
// CARD TYPES
// ============================================================================

/// A card issuer, identified by the leading digits of its numbers.
#[derive(Debug)]
pub struct CardType {
    pub name: &'static str,
    prefix: Regex,
    pub valid_lengths: &'static [usize],
}

impl CardType {
    fn new(name: &'static str, prefix: &str, valid_lengths: &'static [usize]) -> Self {
        Self {
            name,
            prefix: Regex::new(prefix).expect("card prefix patterns are valid"),
            valid_lengths,
        }
    }

    /// The first issuer whose prefix matches `number`.
    ///
    /// Table order decides overlapping prefixes, so `visa_electron` wins
    /// over `visa` for `4508...`.
    pub fn detect(number: &str) -> Option<&'static CardType> {
        CARD_TYPES.iter().find(|card| card.prefix.is_match(number))
    }

    pub fn accepts_length(&self, length: usize) -> bool {
        self.valid_lengths.contains(&length)
    }
}

/// Known issuers in detection order.
pub static CARD_TYPES: LazyLock<Vec<CardType>> = LazyLock::new(|| {
    vec![
        CardType::new("amex", r"^3[47]", &[15]),
        CardType::new("diners_club_carte_blanche", r"^30[0-5]", &[14]),
        CardType::new("diners_club_international", r"^36", &[14]),
        CardType::new("jcb", r"^35(?:2[89]|[3-8][0-9])", &[16]),
        CardType::new("laser", r"^(?:6304|670[69]|6771)", &[16, 17, 18, 19]),
        CardType::new("visa_electron", r"^(?:4026|417500|4508|4844|491(?:3|7))", &[16]),
        CardType::new("visa", r"^4", &[16]),
        CardType::new("mastercard", r"^5[1-5]", &[16]),
        CardType::new(
            "maestro",
            r"^(?:50|(?:5[6-9]|6[0-9])[0-9]{4}[0-9]{6,13})",
            &[12, 13, 14, 15, 16, 17, 18, 19],
        ),
        CardType::new(
            "discover",
            r"^(?:6011|622(?:12[6-9]|1[3-9][0-9]|[2-8][0-9]{2}|9[0-1][0-9]|92[0-5]|64[4-9])|65)",
            &[16],
        ),
    ]
});

// ============================================================================
// LUHN
// ============================================================================

/// `true` if `number` is all ASCII digits and its Luhn sum is a multiple of 10.
pub fn luhn_valid(number: &str) -> bool {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = number
        .bytes()
        .rev()
        .enumerate()
        .map(|(position, byte)| {
            let digit = u32::from(byte - b'0');
            if position % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();

    sum % 10 == 0
}

crate::validator! {
    /// Validates the Luhn (mod 10) checksum of a digit string.
    pub Luhn for str;
    rule(input) { luhn_valid(input) }
    error(input) { ValidationError::new("luhn_checksum", "Checksum digit does not match") }
    fn luhn();
}

/// Removes the spaces and dashes people type between digit groups.
pub fn normalize_card_number(number: &str) -> String {
    number.chars().filter(|c| !matches!(c, ' ' | '-')).collect()
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates credit and debit card numbers.
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::Validate;
/// use formcheck_validator::validators::CreditCard;
///
/// let card = CreditCard::new();
/// assert!(card.is_valid("4111111111111111"));
/// assert!(card.is_valid("378282246310005"));
/// assert!(!card.is_valid("4111 1111 1111 1111"));
/// assert!(CreditCard::new().normalizing().is_valid("4111 1111 1111 1111"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CreditCard {
    sandbox_numbers: bool,
    normalize: bool,
}

impl CreditCard {
    /// Strict digits-only matching, sandbox numbers accepted.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sandbox_numbers: true,
            normalize: false,
        }
    }

    /// Rejects [`SANDBOX_NUMBERS`] unless they pass the normal checks.
    #[must_use = "builder methods must be chained or built"]
    pub fn without_sandbox_numbers(mut self) -> Self {
        self.sandbox_numbers = false;
        self
    }

    /// Strips spaces and dashes before checking.
    #[must_use = "builder methods must be chained or built"]
    pub fn normalizing(mut self) -> Self {
        self.normalize = true;
        self
    }

    /// The issuer of a number that passes validation.
    pub fn issuer(&self, number: &str) -> Option<&'static CardType> {
        if !self.is_valid(number) {
            return None;
        }
        CardType::detect(&self.prepare(number))
    }

    fn prepare<'a>(&self, number: &'a str) -> Cow<'a, str> {
        if self.normalize {
            Cow::Owned(normalize_card_number(number))
        } else {
            Cow::Borrowed(number)
        }
    }
}

impl Default for CreditCard {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for CreditCard {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let number = self.prepare(input);

        if self.sandbox_numbers && SANDBOX_NUMBERS.contains(&number.as_ref()) {
            tracing::debug!("accepting sandbox card number");
            return Ok(());
        }

        let card_type = CardType::detect(&number).ok_or_else(|| {
            ValidationError::new("unknown_issuer", "Card number prefix matches no known issuer")
        })?;

        luhn().validate(&number)?;

        if !card_type.accepts_length(number.len()) {
            return Err(ValidationError::new(
                "invalid_length",
                format!("Wrong number of digits for {}", card_type.name),
            )
            .with_param("issuer", card_type.name)
            .with_param("length", number.len().to_string()));
        }

        Ok(())
    }
}

/// Returns `true` if `number` is a valid card number.
pub fn creditcard(number: &str) -> bool {
    CreditCard::new().is_valid(number)
}
