//! Shared application service layer for convquiz.
//!
//! Settings loading, attempt files and batch checking live here so the CLI
//! stays a thin presentation layer.

pub mod attempts;
pub mod batch;
pub mod config;
pub mod error;

// Re-export key types for convenience
pub use attempts::{AttemptFile, load_attempts, parse_attempts};
pub use batch::{AttemptOutcome, BatchReport, BatchSummary, check_attempts};
pub use config::{DECIMAL_PLACES_ENV, QuizSettings};
pub use error::{AppError, AppResult};
