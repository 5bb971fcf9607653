//! Integration test: autocorrect transforms

use formcheck_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("capitalize_first", "jOHN", "John")]
#[case("capitalize", "john", "JOHN")]
#[case("to_upper_case", "John", "john")]
#[case("to_lower_case", "John", "john")]
#[case("alpha", "J0hn!", "Jhn")]
#[case("remove_spaces", "AB 12 CD", "AB12CD")]
#[case("strip_leading_zeros", "0042", "42")]
#[case("alphanumeric", "AB-12 CD", "AB12CD")]
#[case("numbers", "Total: -12.50 GBP", "-12.50")]
#[case("numeric", "07700-900-123", "07700900123")]
#[case("name", "JEAN-LUC PICARD", "Jean-Luc Picard")]
#[case("postcode", "ec1a1bb", "EC1A 1BB")]
#[case("postcode", "unknown", "unknown")]
fn test_transforms(#[case] transform: &str, #[case] input: &str, #[case] expected: &str) {
    assert_eq!(autocorrect(input, transform).as_deref(), Ok(expected));
}

#[test]
fn test_capitalize_first_on_capitalized_input() {
    assert_eq!(autocorrect("Hello", "capitalize_first").as_deref(), Ok("hello"));
}

#[test]
fn test_transforms_keep_whitespace() {
    assert_eq!(autocorrect("  abc  ", "capitalize").as_deref(), Ok("  ABC  "));
}

#[test]
fn test_unknown_transform_is_an_error() {
    assert_eq!(
        autocorrect("x", "title_case"),
        Err(FormatError::UnknownTransform("title_case".to_owned()))
    );
    assert_eq!(
        "x".autocorrect_as("title_case").unwrap_err().to_string(),
        "unknown transform 'title_case'"
    );
}

#[test]
fn test_every_transform_is_registered() {
    for transform in Transform::ALL {
        assert!(autocorrect("abc", transform.name()).is_ok(), "{transform}");
    }
}
