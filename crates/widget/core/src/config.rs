//! Widget display configuration and loaders.
//!
//! This module contains presentation settings that are shared across
//! different hosts (terminal, graphical, etc.).

use std::env;

/// Static display settings for a table widget.
///
/// Rendering is a pure function of the host data plus this configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Heading shown above every state.
    pub title: String,
    /// Prefix used when formatting prices and totals.
    pub currency_symbol: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: "Customer Table".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_TITLE` - Widget heading (default: "Customer Table")
    /// - `TABLE_CURRENCY_SYMBOL` - Price prefix (default: "$")
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(title) = read_env_string("TABLE_TITLE") {
            config.title = title;
        }
        if let Some(symbol) = read_env_string("TABLE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }
}

fn read_env_string(key: &str) -> Option<String> {
    let value = env::var(key).ok()?;
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
