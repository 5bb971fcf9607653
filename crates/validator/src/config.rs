//! Validator configuration.
//!
//! Every field has a default, so partial configuration documents
//! deserialize cleanly.

use serde::{Deserialize, Serialize};

use crate::validators::CreditCard;

const SANDBOX_CARDS_VAR: &str = "FORMCHECK_SANDBOX_CARDS";
const NORMALIZE_CARDS_VAR: &str = "FORMCHECK_NORMALIZE_CARDS";

/// Tunables for [`Formats`](crate::Formats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Accept the well-known sandbox card numbers without checks.
    pub sandbox_cards: bool,
    /// Strip spaces and dashes from card numbers before checking.
    pub normalize_card_numbers: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            sandbox_cards: true,
            normalize_card_numbers: false,
        }
    }
}

impl FormatConfig {
    /// Production configuration: sandbox card numbers are rejected.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            sandbox_cards: false,
            ..Self::default()
        }
    }

    /// Create configuration from environment variables
    ///
    /// Reads `FORMCHECK_SANDBOX_CARDS` and `FORMCHECK_NORMALIZE_CARDS`
    /// (`1`/`true`/`yes`/`on` or `0`/`false`/`no`/`off`). Unset or
    /// unrecognized values keep the default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| lookup(name).as_deref().and_then(parse_flag);
        let mut config = Self::default();

        if let Some(flag) = read(SANDBOX_CARDS_VAR) {
            config.sandbox_cards = flag;
        }
        if let Some(flag) = read(NORMALIZE_CARDS_VAR) {
            config.normalize_card_numbers = flag;
        }

        config
    }

    /// The card validator this configuration describes.
    pub fn credit_card(&self) -> CreditCard {
        let mut card = CreditCard::new();
        if !self.sandbox_cards {
            card = card.without_sandbox_numbers();
        }
        if self.normalize_card_numbers {
            card = card.normalizing();
        }
        card
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
