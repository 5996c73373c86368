//! # Bytewise Lessons
//!
//! Renders each beginner lesson as a page of plain text.
//!
//! ## Example
//!
//! ```rust
//! use bytewise_core::RenderConfig;
//! use bytewise_lessons::{render, Lesson};
//!
//! let page = render(Lesson::BinaryHex, &RenderConfig::DEFAULT).unwrap();
//! assert!(page.contains("Hex Color: #FF6496"));
//! ```

pub mod error;
pub mod page;
pub mod data_types;
pub mod binary_hex;
pub mod memory;

pub use error::{RenderError, Result};

use bytewise_core::RenderConfig;
use std::fmt;
use std::str::FromStr;

/// The three lessons, in teaching order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lesson {
    DataTypes,
    BinaryHex,
    Memory,
}

impl Lesson {
    pub const ALL: [Lesson; 3] = [Lesson::DataTypes, Lesson::BinaryHex, Lesson::Memory];

    /// Short name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Lesson::DataTypes => "types",
            Lesson::BinaryHex => "binary",
            Lesson::Memory => "memory",
        }
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lesson {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "types" | "data-types" => Ok(Lesson::DataTypes),
            "binary" | "binary-hex" => Ok(Lesson::BinaryHex),
            "memory" | "memory-refs" => Ok(Lesson::Memory),
            other => Err(RenderError::UnknownLesson(other.to_string())),
        }
    }
}

/// Render one lesson page
pub fn render(lesson: Lesson, config: &RenderConfig) -> Result<String> {
    config.validate().map_err(bytewise_core::LessonError::from)?;
    tracing::info!(%lesson, "rendering lesson");
    match lesson {
        Lesson::DataTypes => data_types::render(config),
        Lesson::BinaryHex => binary_hex::render(config),
        Lesson::Memory => memory::render(config),
    }
}
