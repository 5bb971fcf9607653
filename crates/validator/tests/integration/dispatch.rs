//! Integration test: format name dispatch

use formcheck_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("email", "a.b@example.org", true)]
#[case("integer_any", "-12", true)]
#[case("integer_positive", "12", true)]
#[case("integer_negative", "12", false)]
#[case("letters_lower", "abc", true)]
#[case("letters_upper", "abc", false)]
#[case("letters_mixed", "(ABC)", true)]
#[case("single_word", "Word", true)]
#[case("single_word_hyphens", "two-words", true)]
#[case("alphanumeric", "abc123", true)]
#[case("userid", "jo", false)]
#[case("password", "Passw0rd", true)]
#[case("password", "password", false)]
#[case("postcode", "M1 1AE", true)]
#[case("postcode", "SW1A 1AA", false)]
#[case("phone", "+44 (0)20 7946 0000", true)]
#[case("phone", "12345", false)]
#[case("date_dd_mm_yyyy", "31/12/2024", true)]
#[case("date_yyyy_mm_dd", "2024/12/31", true)]
#[case("creditcard", "378282246310005", true)]
fn test_every_format_dispatches(#[case] format: &str, #[case] input: &str, #[case] expected: bool) {
    assert_eq!(validate(input, format), Ok(expected), "{format}: {input}");
}

#[rstest]
#[case("zipcode")]
#[case("")]
#[case("Email")]
#[case("date")]
fn test_unknown_format_is_an_error(#[case] format: &str) {
    assert_eq!(
        validate("anything", format),
        Err(FormatError::UnknownFormat(format.to_owned()))
    );
}

#[test]
fn test_every_registered_name_resolves() {
    for name in Format::names() {
        assert!(validate("", name).is_ok(), "{name}");
    }
}

#[test]
fn test_check_explains_rejection() {
    let formats = Formats::default();

    let error = formats
        .check("not-an-email", Format::Rule(PatternRule::Email))
        .unwrap_err();
    assert_eq!(error.code, "invalid_format");
    assert_eq!(error.param("expected"), Some("email"));

    let error = formats.check("9111111111111111", Format::CreditCard).unwrap_err();
    assert_eq!(error.code, "unknown_issuer");
}

#[test]
fn test_ext_trait_matches_free_functions() {
    for (input, format) in [("abc", "letters_lower"), ("ABC", "letters_lower"), ("x", "nope")] {
        assert_eq!(input.validate_as(format), validate(input, format));
    }
}

#[test]
fn test_dispatch_with_subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();

    assert_eq!(validate("42", "integer_positive"), Ok(true));
    assert!(validate("42", "integer").is_err());
}
