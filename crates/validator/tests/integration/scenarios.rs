//! Integration test: end-to-end scenarios through the free functions

use formcheck_validator::{
    DateLayout, autocorrect, creditcard, postcode, validate, validate_date,
};
use pretty_assertions::assert_eq;

#[test]
fn test_email_signup() {
    assert_eq!(validate("test@example.com", "email"), Ok(true));
    assert_eq!(validate("  test@example.com\t", "email"), Ok(true));
    assert_eq!(validate("test@@example.com", "email"), Ok(false));
}

#[test]
fn test_leap_day() {
    assert_eq!(validate("2024-02-29", "date_yyyy_mm_dd"), Ok(true));
    assert_eq!(validate("2024-02-30", "date_yyyy_mm_dd"), Ok(false));
    assert!(validate_date("29/02/2024", DateLayout::DayMonthYear));
    assert!(!validate_date("29/02/2023", DateLayout::DayMonthYear));
}

#[test]
fn test_card_checkout() {
    assert!(creditcard("4111111111111111"));
    assert_eq!(validate("4111111111111111", "creditcard"), Ok(true));
    assert!(!creditcard("4111111111111112"));
    assert!(!creditcard(""));
}

#[test]
fn test_sandbox_cards_pass_by_default() {
    assert!(creditcard("1000380000000004"));
    assert!(creditcard("1000350000000536"));
    assert_eq!(validate(" 1000380000000004 ", "creditcard"), Ok(true));
}

#[test]
fn test_postcode_entry() {
    assert_eq!(postcode("sw1a1aa").as_deref(), Some("SW1A 1AA"));
    assert_eq!(autocorrect("sw1a1aa", "postcode").as_deref(), Ok("SW1A 1AA"));
    assert_eq!(postcode("nowhere"), None);
}

#[test]
fn test_postcode_rule_is_looser_shape_check() {
    // The single-regex rule has no letter after the district digits.
    assert_eq!(validate("SW1A 1AA", "postcode"), Ok(false));
    assert_eq!(postcode("SW1A 1AA").as_deref(), Some("SW1A 1AA"));

    assert_eq!(validate("M1 1AE", "postcode"), Ok(true));
    assert_eq!(postcode("M1 1AE").as_deref(), Some("M1 1AE"));
}

#[test]
fn test_name_entry() {
    assert_eq!(
        autocorrect("o'brien-smith", "name").as_deref(),
        Ok("O'Brien-Smith")
    );
}

#[test]
fn test_future_date_rejects_the_past() {
    assert_eq!(validate("01/01/2000", "futuredate"), Ok(false));
    assert_eq!(validate("01/01/9999", "futuredate"), Ok(true));
    assert_eq!(validate("9999-01-01", "futuredate"), Ok(false));
    assert_eq!(validate("31/02/9998", "futuredate"), Ok(true));
    assert_eq!(validate("01/13/9998", "futuredate"), Ok(false));
}
