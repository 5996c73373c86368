//! Lesson rendering errors

use bytewise_core::LessonError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unknown lesson: {0:?} (expected types, binary or memory)")]
    UnknownLesson(String),

    #[error(transparent)]
    Lesson(#[from] LessonError),

    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
