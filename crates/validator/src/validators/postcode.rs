//! UK postcode validator and normalizer.
//!
//! Follows Royal Mail's positional letter rules for the standard forms, and
//! also recognizes BFPO, GIR 0AA, the overseas territories (`XXXX 1ZZ`) and
//! Anguilla (`AI-2640`).
//!
//! Each pattern captures an `outward` and an `inward` group. Normalization
//! uppercases both and joins them with a single space.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};

// Permitted letters depend on their position in the postcode.
const ALPHA1: &str = "[abcdefghijklmnoprstuwyz]";
const ALPHA2: &str = "[abcdefghklmnopqrstuvwxy]";
const ALPHA3: &str = "[abcdefghjkpmnrstuvwxy]";
const ALPHA4: &str = "[abehmnprvwxy]";
const ALPHA5: &str = "[abdefghjlnpqrstuwxyz]";
const BFPO_ALPHA5: &str = "[abdefghjlnpqrst]";
const BFPO_ALPHA6: &str = "[abdefghjlnpqrstuwzyz]";

const ANGUILLA: &str = "AI-2640";

// ============================================================================
// PATTERN TABLE
// ============================================================================

/// Which structural form a postcode matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostcodeKind {
    /// `BF1` followed by a BFPO inward code.
    BfpoArea,
    /// `AN NAA`, `ANN NAA`, `AAN NAA` or `AANN NAA`.
    Standard,
    /// `ANA NAA`.
    StandardLetterDistrict,
    /// `AANA NAA`.
    StandardLetterSubDistrict,
    /// The `GIR 0AA` exception.
    Girobank,
    /// `BFPO` followed by up to four digits.
    BfpoNumber,
    /// `BFPO c/o` followed by up to three digits.
    BfpoCareOf,
    /// Four letters followed by `1ZZ`.
    OverseasTerritory,
    /// `AI-2640`.
    Anguilla,
}

impl fmt::Display for PostcodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BfpoArea => "bfpo_area",
            Self::Standard => "standard",
            Self::StandardLetterDistrict => "standard_ana",
            Self::StandardLetterSubDistrict => "standard_aana",
            Self::Girobank => "girobank",
            Self::BfpoNumber => "bfpo_number",
            Self::BfpoCareOf => "bfpo_care_of",
            Self::OverseasTerritory => "overseas_territory",
            Self::Anguilla => "anguilla",
        };
        f.write_str(name)
    }
}

/// One structural postcode form.
#[derive(Debug)]
pub struct PostcodePattern {
    pub kind: PostcodeKind,
    regex: Regex,
}

impl PostcodePattern {
    fn new(kind: PostcodeKind, body: &str) -> Self {
        // ASCII-only case folding: `[k]` must not match U+212A KELVIN SIGN.
        let regex = Regex::new(&format!("(?i-u)^{body}$")).expect("postcode patterns are valid");
        Self { kind, regex }
    }

    /// Splits `raw` into its outward and inward codes if it has this form.
    pub fn split<'a>(&self, raw: &'a str) -> Option<(&'a str, &'a str)> {
        let caps = self.regex.captures(raw)?;
        Some((caps.name("outward")?.as_str(), caps.name("inward")?.as_str()))
    }
}

/// Postcode forms in match priority order.
pub static POSTCODE_PATTERNS: LazyLock<Vec<PostcodePattern>> = LazyLock::new(|| {
    let inward = format!(r"(?P<inward>[0-9]{ALPHA5}{{2}})");
    vec![
        PostcodePattern::new(
            PostcodeKind::BfpoArea,
            &format!(r"(?P<outward>bf1)\s*(?P<inward>[0-6]{BFPO_ALPHA5}{BFPO_ALPHA6})"),
        ),
        PostcodePattern::new(
            PostcodeKind::Standard,
            &format!(r"(?P<outward>{ALPHA1}{ALPHA2}?[0-9]{{1,2}})\s*{inward}"),
        ),
        PostcodePattern::new(
            PostcodeKind::StandardLetterDistrict,
            &format!(r"(?P<outward>{ALPHA1}[0-9]{ALPHA3})\s*{inward}"),
        ),
        PostcodePattern::new(
            PostcodeKind::StandardLetterSubDistrict,
            &format!(r"(?P<outward>{ALPHA1}{ALPHA2}[0-9]{ALPHA4})\s*{inward}"),
        ),
        PostcodePattern::new(
            PostcodeKind::Girobank,
            r"(?P<outward>GIR)\s*(?P<inward>0AA)",
        ),
        PostcodePattern::new(
            PostcodeKind::BfpoNumber,
            r"(?P<outward>bfpo)\s*(?P<inward>[0-9]{1,4})",
        ),
        PostcodePattern::new(
            PostcodeKind::BfpoCareOf,
            r"(?P<outward>bfpo)\s*(?P<inward>c/o\s*[0-9]{1,3})",
        ),
        PostcodePattern::new(
            PostcodeKind::OverseasTerritory,
            r"(?P<outward>[A-Z]{4})\s*(?P<inward>1ZZ)",
        ),
        PostcodePattern::new(PostcodeKind::Anguilla, r"(?P<outward>ai)-(?P<inward>2640)"),
    ]
});

static CARE_OF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"C/O\s*").unwrap());

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates and normalizes UK postcodes.
///
/// The input is matched as given; surrounding whitespace makes it invalid.
///
/// # Examples
///
/// ```
/// use formcheck_validator::validators::Postcode;
///
/// assert_eq!(Postcode::normalize("sw1a1aa").as_deref(), Some("SW1A 1AA"));
/// assert_eq!(Postcode::normalize("bfpo  c/o 12").as_deref(), Some("BFPO c/o 12"));
/// assert_eq!(Postcode::normalize("ai-2640").as_deref(), Some("AI-2640"));
/// assert_eq!(Postcode::normalize("not a postcode"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Postcode;

impl Postcode {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The form `raw` matched, along with its outward and inward codes.
    pub fn classify(raw: &str) -> Option<(PostcodeKind, &str, &str)> {
        POSTCODE_PATTERNS.iter().find_map(|pattern| {
            pattern
                .split(raw)
                .map(|(outward, inward)| (pattern.kind, outward, inward))
        })
    }

    /// The canonical spelling of `raw`, or `None` if it is not a postcode.
    pub fn normalize(raw: &str) -> Option<String> {
        let (kind, outward, inward) = Self::classify(raw)?;
        tracing::trace!(kind = %kind, "matched postcode form");

        if raw.to_uppercase() == ANGUILLA {
            return Some(ANGUILLA.to_owned());
        }

        let joined = format!("{} {}", outward.to_uppercase(), inward.to_uppercase());
        Some(CARE_OF.replace(&joined, "c/o ").into_owned())
    }
}

impl Validate for Postcode {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match Self::classify(input) {
            Some(_) => Ok(()),
            None => Err(ValidationError::invalid_format("", "postcode")),
        }
    }
}

/// Normalizes a UK postcode; `None` if `input` is not one.
pub fn postcode(input: &str) -> Option<String> {
    Postcode::normalize(input)
}
