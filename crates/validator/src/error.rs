//! Errors for requests the library cannot interpret.
//!
//! A rejected input is never an error here: it is `false` (or a
//! [`ValidationError`](crate::foundation::ValidationError)). These variants
//! mean the caller asked for something that does not exist.

/// Errors from format and transform lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// No validation format is registered under this name.
    #[error("unknown format '{0}'")]
    UnknownFormat(String),

    /// No autocorrect transform is registered under this name.
    #[error("unknown transform '{0}'")]
    UnknownTransform(String),
}

/// Result type for name-based lookups.
pub type FormatResult<T> = Result<T, FormatError>;
