//! # Error Types for Bytewise

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LessonError {
    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    // Conversion errors
    #[error("Empty input: no digits to convert")]
    EmptyInput,

    #[error("Invalid digit {digit:?} for base {radix}")]
    InvalidDigit { digit: char, radix: u32 },

    #[error("Invalid radix: {0} (valid range: 2-36)")]
    InvalidRadix(u32),

    #[error("Value does not fit in 64 bits: {input}")]
    Overflow { input: String },

    // Bitwise errors
    #[error("Invalid bit width: {0} (valid range: 1-64)")]
    InvalidWidth(u32),

    // Color errors
    #[error("Invalid color: {0:?} (expected #RRGGBB)")]
    InvalidColor(String),

    // Rendering errors
}

impl LessonError {
    /// Check if this error came from malformed user-supplied text
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            LessonError::EmptyInput
                | LessonError::InvalidDigit { .. }
                | LessonError::Overflow { .. }
                | LessonError::InvalidColor(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, LessonError>;
