//! cq-quiz: the answer-checking engine.
//!
//! A check runs validate -> convert -> judge and ends in one of three verdicts.
//! The presentation layer drives a [`VerdictController`] and only ever sees a
//! [`Verdict`]; invalid numeric input never surfaces as an error.

pub mod attempt;
pub mod controller;
pub mod error;
pub mod judge;
pub mod validate;
pub mod verdict;

pub use attempt::QuizAttempt;
pub use controller::VerdictController;
pub use error::{QuizError, QuizResult};
pub use judge::{DEFAULT_DECIMAL_PLACES, rounded_answers_match};
pub use validate::{is_valid_input, parse_input};
pub use verdict::Verdict;
