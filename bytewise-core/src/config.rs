//! # Presentation Configuration
//!
//! Controls how lesson pages are laid out. Lesson content (the numbers, the
//! strings, the containers) is fixed; only the framing is configurable.

use std::fmt;

/// Minimum width of the `=` rule framing each section
pub const MIN_RULE_WIDTH: usize = 20;

/// Maximum width of the `=` rule framing each section
pub const MAX_RULE_WIDTH: usize = 120;

/// Rendering configuration for lesson pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderConfig {
    /// Number of `=` characters in a section rule (20-120)
    pub rule_width: usize,
    /// Append the celebratory emoji to closing banners
    pub emoji: bool,
}

impl RenderConfig {
    /// Default configuration: 50-wide rules, emoji on
    pub const DEFAULT: Self = Self {
        rule_width: 50,
        emoji: true,
    };

    /// Create a new configuration with validation
    pub const fn new(rule_width: usize, emoji: bool) -> Result<Self, ConfigError> {
        if rule_width < MIN_RULE_WIDTH || rule_width > MAX_RULE_WIDTH {
            return Err(ConfigError::InvalidRuleWidth(rule_width));
        }

        Ok(Self { rule_width, emoji })
    }

    /// Section rule, e.g. `"=====..."`
    pub fn rule(&self) -> String {
        "=".repeat(self.rule_width)
    }

    /// Attach the trailing emoji to `text` when enabled
    pub fn decorate(&self, text: &str, emoji: &str) -> String {
        if self.emoji {
            format!("{} {}", text, emoji)
        } else {
            text.to_string()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rule_width < MIN_RULE_WIDTH || self.rule_width > MAX_RULE_WIDTH {
            return Err(ConfigError::InvalidRuleWidth(self.rule_width));
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for RenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RenderConfig {{ rule_width: {}, emoji: {} }}",
            self.rule_width,
            if self.emoji { "on" } else { "off" },
        )
    }
}

/// Configuration error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("rule_width must be in range [20, 120], got {0}")]
    InvalidRuleWidth(usize),
}
