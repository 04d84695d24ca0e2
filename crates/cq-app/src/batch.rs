//! Check a list of attempts, each with its own fresh controller.

use cq_core::{Real, to_fixed};
use cq_quiz::{QuizAttempt, Verdict};
use cq_units::UnitConverter;
use serde::Serialize;
use std::fmt::Write as _;

use crate::config::QuizSettings;
use crate::error::{AppError, AppResult};

/// One judged attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttemptOutcome {
    pub attempt: QuizAttempt,
    pub verdict: Verdict,
    /// Converted input value; absent when the input value was not a number.
    pub expected: Option<Real>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub invalid: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub decimal_places: usize,
    pub outcomes: Vec<AttemptOutcome>,
    pub summary: BatchSummary,
}

/// Judge every attempt. Attempts are independent; the first contract
/// violation (e.g. a unit outside the attempt's family) aborts the batch.
pub fn check_attempts<C: UnitConverter>(
    settings: &QuizSettings,
    converter: &C,
    attempts: &[QuizAttempt],
) -> AppResult<BatchReport> {
    let mut outcomes = Vec::with_capacity(attempts.len());
    let mut summary = BatchSummary::default();

    for (index, attempt) in attempts.iter().enumerate() {
        let mut controller = settings.controller(converter).with_attempt(attempt.clone());
        let as_attempt_error = |source| AppError::Attempt { index, source };

        let verdict = controller.check_answer().map_err(as_attempt_error)?;
        let expected = controller.expected_answer().map_err(as_attempt_error)?;

        summary.total += 1;
        match verdict {
            Verdict::Correct => summary.correct += 1,
            Verdict::Incorrect => summary.incorrect += 1,
            Verdict::Invalid => summary.invalid += 1,
        }
        outcomes.push(AttemptOutcome {
            attempt: attempt.clone(),
            verdict,
            expected,
        });
    }

    tracing::info!(
        total = summary.total,
        correct = summary.correct,
        incorrect = summary.incorrect,
        invalid = summary.invalid,
        "batch checked"
    );

    Ok(BatchReport {
        decimal_places: settings.decimal_places,
        outcomes,
        summary,
    })
}

impl BatchReport {
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One line per attempt plus a summary line.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (i, outcome) in self.outcomes.iter().enumerate() {
            let a = &outcome.attempt;
            let expected = outcome
                .expected
                .map(|v| to_fixed(v, self.decimal_places))
                .unwrap_or_else(|| "-".to_string());
            let _ = writeln!(
                out,
                "#{i:<3} {:<9} {} {} -> {}: answered {:?}, expected {expected}",
                outcome.verdict, a.input_value, a.input_unit, a.target_unit, a.student_answer,
            );
        }
        let s = &self.summary;
        let _ = write!(
            out,
            "{} checked: {} correct, {} incorrect, {} invalid",
            s.total, s.correct, s.incorrect, s.invalid
        );
        out
    }
}
