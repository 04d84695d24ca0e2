//! The editable state of one quiz attempt.

use cq_units::ConversionFamily;
use serde::{Deserialize, Serialize};

/// Raw form values of one attempt, exactly as typed or selected.
///
/// Nothing here is validated; the controller decides what the text means when
/// a check is requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizAttempt {
    pub conversion_family: ConversionFamily,
    pub input_value: String,
    pub input_unit: String,
    pub target_unit: String,
    pub student_answer: String,
}

impl QuizAttempt {
    pub fn new(family: ConversionFamily) -> Self {
        Self {
            conversion_family: family,
            ..Self::default()
        }
    }

    /// Builder-style helper mostly used by tests and batch files.
    pub fn with_values(
        family: ConversionFamily,
        input_value: impl Into<String>,
        input_unit: impl Into<String>,
        target_unit: impl Into<String>,
        student_answer: impl Into<String>,
    ) -> Self {
        Self {
            conversion_family: family,
            input_value: input_value.into(),
            input_unit: input_unit.into(),
            target_unit: target_unit.into(),
            student_answer: student_answer.into(),
        }
    }
}
