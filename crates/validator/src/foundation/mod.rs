//! Core validation types and traits
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`]
//!
//! Every validator in [`crate::validators`] implements [`Validate`] over
//! `str`, so they can be stored behind `&dyn Validate<Input = str>` and
//! chosen at runtime by the format dispatcher.

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::Validate;

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
