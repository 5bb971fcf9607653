//! Autocorrect transforms.
//!
//! A [`Transform`] rewrites input into a canonical form. Unlike validation,
//! transforms do not trim their input.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::FormatError;
use crate::validators::Postcode;

const NAME_SEPARATORS: [char; 3] = ['-', '\'', '.'];

// A word stops at whitespace and at every name separator, so a later
// separator pass never lowercases a capital set by an earlier one.
static NAME_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w[^\s\-'.]*").unwrap());

/// A named rewrite applied by [`autocorrect`](crate::autocorrect).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Lowercase everything, then uppercase the first character.
    CapitalizeFirst,
    /// Uppercase everything.
    Capitalize,
    /// Lowercases, same as [`Transform::ToLowerCase`].
    ToUpperCase,
    /// Lowercase everything.
    ToLowerCase,
    /// Keep ASCII letters only.
    Alpha,
    /// Remove space characters.
    RemoveSpaces,
    /// Remove leading `0` characters.
    StripLeadingZeros,
    /// Keep ASCII letters and digits only.
    Alphanumeric,
    /// Keep digits, `-` and `.`.
    Numbers,
    /// Keep digits only.
    Numeric,
    /// Title-case a personal name across `-`, `'` and `.` boundaries.
    Name,
    /// Normalize a UK postcode, leaving unrecognized input unchanged.
    Postcode,
}

impl Transform {
    /// All transforms, in registration order.
    pub const ALL: [Self; 12] = [
        Self::CapitalizeFirst,
        Self::Capitalize,
        Self::ToUpperCase,
        Self::ToLowerCase,
        Self::Alpha,
        Self::RemoveSpaces,
        Self::StripLeadingZeros,
        Self::Alphanumeric,
        Self::Numbers,
        Self::Numeric,
        Self::Name,
        Self::Postcode,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::CapitalizeFirst => "capitalize_first",
            Self::Capitalize => "capitalize",
            Self::ToUpperCase => "to_upper_case",
            Self::ToLowerCase => "to_lower_case",
            Self::Alpha => "alpha",
            Self::RemoveSpaces => "remove_spaces",
            Self::StripLeadingZeros => "strip_leading_zeros",
            Self::Alphanumeric => "alphanumeric",
            Self::Numbers => "numbers",
            Self::Numeric => "numeric",
            Self::Name => "name",
            Self::Postcode => "postcode",
        }
    }

    /// Applies the transform.
    pub fn apply(self, input: &str) -> String {
        match self {
            Self::CapitalizeFirst => capitalize_first(input),
            Self::Capitalize => input.to_uppercase(),
            // to_upper_case lowercases as well.
            Self::ToUpperCase | Self::ToLowerCase => input.to_lowercase(),
            Self::Alpha => keep(input, |c| c.is_ascii_alphabetic()),
            Self::RemoveSpaces => keep(input, |c| c != ' '),
            Self::StripLeadingZeros => input.trim_start_matches('0').to_owned(),
            Self::Alphanumeric => keep(input, |c| c.is_ascii_alphanumeric()),
            Self::Numbers => keep(input, |c| c.is_ascii_digit() || c == '-' || c == '.'),
            Self::Numeric => keep(input, |c| c.is_ascii_digit()),
            Self::Name => title_case_name(input),
            Self::Postcode => Postcode::normalize(input).unwrap_or_else(|| input.to_owned()),
        }
    }
}

impl FromStr for Transform {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|transform| transform.name() == s)
            .ok_or_else(|| FormatError::UnknownTransform(s.to_owned()))
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn keep(input: &str, predicate: impl Fn(char) -> bool) -> String {
    input.chars().filter(|&c| predicate(c)).collect()
}

/// Lowercases `input`, then uppercases the first occurrence of its
/// original first character.
///
/// An input that already starts with a capital therefore comes back fully
/// lowercased: the original capital no longer occurs in the lowered text.
fn capitalize_first(input: &str) -> String {
    let lowered = input.to_lowercase();
    match input.chars().next() {
        Some(first) => {
            let upper: String = first.to_uppercase().collect();
            lowered.replacen(first, &upper, 1)
        }
        None => lowered,
    }
}

fn title_case_word(caps: &Captures<'_>) -> String {
    let word = &caps[0];
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut titled: String = first.to_uppercase().collect();
            titled.push_str(&chars.as_str().to_lowercase());
            titled
        }
        None => String::new(),
    }
}

/// Title-cases a personal name.
///
/// The name is split on each of `-`, `'` and `.` in turn, every word of
/// every segment is title-cased, and the segments are joined back with the
/// same separator.
pub fn title_case_name(name: &str) -> String {
    NAME_SEPARATORS
        .iter()
        .fold(name.to_owned(), |name, &separator| {
            name.split(separator)
                .map(|segment| NAME_WORD.replace_all(segment, title_case_word).into_owned())
                .collect::<Vec<_>>()
                .join(separator.to_string().as_str())
        })
}
