//! Integration test: configured dispatch

use formcheck_validator::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_strict_rejects_sandbox_numbers() {
    let formats = Formats::new(FormatConfig::strict());
    assert_eq!(formats.validate("1000380000000004", "creditcard"), Ok(false));
    assert_eq!(formats.validate("1000350000000536", "creditcard"), Ok(false));
    assert_eq!(formats.validate("4111111111111111", "creditcard"), Ok(true));
}

#[test]
fn test_normalizing_accepts_grouped_digits() {
    let config: FormatConfig =
        serde_json::from_str(r#"{ "normalize_card_numbers": true }"#).unwrap();
    let formats = Formats::new(config);

    assert_eq!(formats.validate("4111 1111 1111 1111", "creditcard"), Ok(true));
    assert_eq!(formats.validate("5555-5555-5555-4444", "creditcard"), Ok(true));
    assert_eq!(validate("4111 1111 1111 1111", "creditcard"), Ok(false));
}

#[test]
fn test_default_matches_free_functions() {
    let formats = Formats::default();
    assert_eq!(formats.config(), &FormatConfig::default());
    for (input, format) in [
        ("1000380000000004", "creditcard"),
        ("2024-02-29", "date_yyyy_mm_dd"),
        ("Secret1", "password"),
    ] {
        assert_eq!(formats.validate(input, format), validate(input, format));
    }
}

#[test]
fn test_config_does_not_affect_other_formats() {
    let formats = Formats::new(FormatConfig::strict());
    assert_eq!(formats.validate("test@example.com", "email"), Ok(true));
    assert_eq!(formats.autocorrect("gir0aa", "postcode").as_deref(), Ok("GIR 0AA"));
}
