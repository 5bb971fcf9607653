//! Method-call syntax for the free functions.

use crate::error::FormatResult;

/// Extension trait for validating and correcting string slices in place.
///
/// # Examples
///
/// ```
/// use formcheck_validator::FormatExt;
///
/// assert_eq!("test@example.com".validate_as("email"), Ok(true));
/// assert_eq!("o'brien-smith".autocorrect_as("name").as_deref(), Ok("O'Brien-Smith"));
/// ```
pub trait FormatExt {
    /// See [`validate`](crate::validate).
    fn validate_as(&self, format_name: &str) -> FormatResult<bool>;

    /// See [`autocorrect`](crate::autocorrect).
    fn autocorrect_as(&self, transform_name: &str) -> FormatResult<String>;
}

impl FormatExt for str {
    fn validate_as(&self, format_name: &str) -> FormatResult<bool> {
        crate::validate(self, format_name)
    }

    fn autocorrect_as(&self, transform_name: &str) -> FormatResult<String> {
        crate::autocorrect(self, transform_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;

    #[test]
    fn test_owned_string_derefs() {
        let input = String::from(" 07700 900123 ");
        assert_eq!(input.validate_as("phone"), Ok(true));
        assert_eq!(input.autocorrect_as("numeric").as_deref(), Ok("07700900123"));
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(
            "x".validate_as("nope"),
            Err(FormatError::UnknownFormat("nope".into()))
        );
        assert_eq!(
            "x".autocorrect_as("nope"),
            Err(FormatError::UnknownTransform("nope".into()))
        );
    }
}
