//! Regex rule validators
//!
//! Wraps a [`PatternRule`] so it can be used through [`Validate`](crate::foundation::Validate).

use crate::foundation::ValidationError;
use crate::rules::PatternRule;

crate::validator! {
    /// Validates that the trimmed input matches a named regex rule.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub RuleMatch { rule: PatternRule } for str;
    rule(self, input) { self.rule.is_match(input) }
    error(self, input) { ValidationError::invalid_format("", self.rule.name()) }
    fn matches_rule;
}
