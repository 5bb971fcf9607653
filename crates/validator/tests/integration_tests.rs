//! Integration tests for formcheck-validator
//!
//! These tests drive the public entry points the way a form handler would.

mod integration {
    mod autocorrect;
    mod configured;
    mod dispatch;
    mod scenarios;
}

// Re-export for test runner
pub use integration::*;
