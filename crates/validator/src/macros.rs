//! Declarative validators.
//!
//! [`validator!`] declares a validator struct and its
//! [`Validate`](crate::foundation::Validate) implementation in one block,
//! with an optional factory function. The rule is a boolean expression; the
//! error block only runs when the rule is false.
//!
//! # Examples
//!
//! ```rust,ignore
//! use formcheck_validator::validator;
//! use formcheck_validator::foundation::ValidationError;
//!
//! // Stateless: a unit struct, the factory takes no arguments
//! validator! {
//!     pub DigitsOnly for str;
//!     rule(input) { !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) }
//!     error(input) { ValidationError::invalid_format("", "digits") }
//!     fn digits_only();
//! }
//!
//! // Configured: the factory takes the fields in declaration order
//! validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MaxChars { max: usize } for str;
//!     rule(self, input) { input.chars().count() <= self.max }
//!     error(self, input) { ValidationError::new("max_chars", "too long") }
//!     fn max_chars;
//! }
//! ```

/// Declares a validator struct and implements `Validate` for it.
///
/// Unit validators derive `Debug, Clone, Copy, PartialEq, Eq, Hash, Default`
/// and their factory is a `const fn`. Validators with fields derive
/// `Debug, Clone`, get a `new` constructor over every field, and their
/// factory forwards to `new`.
#[macro_export]
macro_rules! validator {
    // Unit struct, optional factory.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        $(fn $factory:ident();)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    return Ok(());
                }
                let $einp = $inp;
                Err($err)
            }
        }

        $(
            #[must_use]
            $vis const fn $factory() -> $name { $name }
        )?
    };

    // Fields, with a factory taking the same arguments as `new`.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident;
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory($($field: $fty),+) -> $name {
            $name::new($($field),+)
        }
    };

    // Fields, no factory.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    return Ok(());
                }
                let $einp = $inp;
                Err($err)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidationError};

    crate::validator! {
        DigitsOnly for str;
        rule(input) { !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) }
        error(input) { ValidationError::invalid_format("", "digits") }
        fn digits_only();
    }

    crate::validator! {
        #[derive(PartialEq, Eq)]
        MaxChars { max: usize } for str;
        rule(self, input) { input.chars().count() <= self.max }
        error(self, input) {
            ValidationError::new("max_chars", "too long").with_param("max", self.max.to_string())
        }
        fn max_chars;
    }

    crate::validator! {
        Exactly { expected: &'static str } for str;
        rule(self, input) { input == self.expected }
        error(self, input) { ValidationError::new("mismatch", format!("got {input}")) }
    }

    #[test]
    fn test_unit_validator() {
        assert!(digits_only().is_valid("0123"));
        assert_eq!(digits_only().validate("12a").unwrap_err().code, "invalid_format");
        assert_eq!(DigitsOnly, DigitsOnly::default());
    }

    #[test]
    fn test_field_validator_factory() {
        let v = max_chars(3);
        assert_eq!(v, MaxChars::new(3));
        assert!(v.is_valid("abc"));
        assert_eq!(v.validate("abcd").unwrap_err().param("max"), Some("3"));
    }

    #[test]
    fn test_error_block_sees_input() {
        let error = Exactly::new("yes").validate("no").unwrap_err();
        assert_eq!(error.message, "got no");
    }
}
