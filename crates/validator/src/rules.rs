//! Named regular-expression rules.
//!
//! Every rule is anchored at both ends and compiled once into a static
//! table indexed by [`PatternRule`]. Look-around is not available in the
//! `regex` crate, so `password` pairs a length pattern with explicit
//! character-class checks in [`PatternRule::is_match`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// A fixed, regex-backed format rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternRule {
    /// Loose `local@domain.tld` address.
    Email,
    /// Optionally signed integer.
    IntegerAny,
    /// Unsigned integer.
    IntegerPositive,
    /// Integer with a mandatory leading `-`.
    IntegerNegative,
    /// ASCII lowercase letters.
    LettersLower,
    /// ASCII uppercase letters.
    LettersUpper,
    /// Uppercase letters and parentheses.
    LettersMixed,
    /// ASCII letters of either case.
    SingleWord,
    /// ASCII letters and hyphens.
    SingleWordHyphens,
    /// ASCII letters and digits.
    Alphanumeric,
    /// 3 to 20 word characters.
    Userid,
    /// 6 to 30 characters with a digit, a lowercase and an uppercase letter.
    Password,
    /// Single-regex UK postcode check (see [`crate::validators::Postcode`] for the strict one).
    Postcode,
    /// 10 to 20 digits, spaces, dashes or parentheses with an optional leading `+`.
    Phone,
}

impl PatternRule {
    /// All rules, in table order.
    pub const ALL: [Self; 14] = [
        Self::Email,
        Self::IntegerAny,
        Self::IntegerPositive,
        Self::IntegerNegative,
        Self::LettersLower,
        Self::LettersUpper,
        Self::LettersMixed,
        Self::SingleWord,
        Self::SingleWordHyphens,
        Self::Alphanumeric,
        Self::Userid,
        Self::Password,
        Self::Postcode,
        Self::Phone,
    ];

    /// The format name this rule is registered under.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::IntegerAny => "integer_any",
            Self::IntegerPositive => "integer_positive",
            Self::IntegerNegative => "integer_negative",
            Self::LettersLower => "letters_lower",
            Self::LettersUpper => "letters_upper",
            Self::LettersMixed => "letters_mixed",
            Self::SingleWord => "single_word",
            Self::SingleWordHyphens => "single_word_hyphens",
            Self::Alphanumeric => "alphanumeric",
            Self::Userid => "userid",
            Self::Password => "password",
            Self::Postcode => "postcode",
            Self::Phone => "phone",
        }
    }

    /// Exact, case-sensitive lookup by format name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rule| rule.name() == name)
    }

    const fn source(self) -> &'static str {
        match self {
            Self::Email => r"^[a-zA-Z0-9_.\-+]+@(?:[a-zA-Z0-9\-]+\.)+(?:[a-zA-Z0-9]{2,4})+$",
            Self::IntegerAny => r"^-?[0-9]+$",
            Self::IntegerPositive => r"^[0-9]+$",
            Self::IntegerNegative => r"^-[0-9]+$",
            Self::LettersLower => r"^[a-z]+$",
            Self::LettersUpper => r"^[A-Z]+$",
            Self::LettersMixed => r"^[(A-Z)]+$",
            Self::SingleWord => r"^[a-zA-Z]+$",
            Self::SingleWordHyphens => r"^[a-zA-Z\-]+$",
            Self::Alphanumeric => r"^[a-zA-Z0-9]+$",
            Self::Userid => r"^[A-Za-z0-9_]{3,20}$",
            Self::Password => r"^.{6,30}$",
            Self::Postcode => r"^[a-zA-Z]{1,2}[0-9]{1,2}\s?[0-9][a-zA-Z]{1,2}$",
            Self::Phone => r"^\+?[0-9\-\s()]{10,20}$",
        }
    }

    /// The compiled regular expression behind this rule.
    pub fn pattern(self) -> &'static Regex {
        &RULES[self as usize]
    }

    /// Matches the trimmed input against the whole rule.
    pub fn is_match(self, input: &str) -> bool {
        let input = input.trim();
        if !self.pattern().is_match(input) {
            return false;
        }
        match self {
            Self::Password => has_password_classes(input),
            _ => true,
        }
    }
}

impl fmt::Display for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static RULES: LazyLock<[Regex; 14]> = LazyLock::new(|| {
    PatternRule::ALL.map(|rule| Regex::new(rule.source()).expect("rule patterns are valid"))
});

fn has_password_classes(input: &str) -> bool {
    input.chars().any(|c| c.is_ascii_digit())
        && input.chars().any(|c| c.is_ascii_lowercase())
        && input.chars().any(|c| c.is_ascii_uppercase())
}

/// Looks up the compiled pattern for a rule name.
///
/// Returns `None` for names that are not regex rules, including the
/// specialized formats such as `creditcard`.
pub fn pattern_for(name: &str) -> Option<&'static Regex> {
    PatternRule::from_name(name).map(PatternRule::pattern)
}
