//! Error types for the quiz engine.

use cq_units::ConversionError;

/// Failures that are bugs in the caller, not mistakes by the learner.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuizError {
    #[error("Conversion failed: {0}")]
    Conversion(#[from] ConversionError),
}

/// Result type for quiz operations.
pub type QuizResult<T> = Result<T, QuizError>;
