//! Tolerance comparison between the computed answer and the learner's answer.

use cq_core::{Real, to_fixed};

/// Decimal places the controller compares at unless configured otherwise.
pub const DEFAULT_DECIMAL_PLACES: usize = 1;

/// True when both answers render identically at `decimal_places` decimals.
///
/// Rendering is [`cq_core::to_fixed`]: round half away from zero on the exact
/// stored value, no sign on an all-zero result. Non-finite answers never match.
pub fn rounded_answers_match(correct: Real, student: Real, decimal_places: usize) -> bool {
    if !correct.is_finite() || !student.is_finite() {
        return false;
    }
    to_fixed(correct, decimal_places) == to_fixed(student, decimal_places)
}
