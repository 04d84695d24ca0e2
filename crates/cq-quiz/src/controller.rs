//! Orchestrates validate -> convert -> judge for a single attempt.

use crate::attempt::QuizAttempt;
use crate::error::QuizResult;
use crate::judge::{DEFAULT_DECIMAL_PLACES, rounded_answers_match};
use crate::validate::parse_input;
use crate::verdict::Verdict;
use cq_core::{MAX_DECIMAL_PLACES, Real};
use cq_units::{
    ConversionError, ConversionFamily, UnitConverter, UomConverter, convert_units, family_of,
    find_unit,
};

/// Owns one attempt and its most recent verdict.
///
/// `verdict()` is `None` until the first check and after [`clear`](Self::clear),
/// which also returns the attempt to a blank one in the default family.
/// Every check re-evaluates from the current attempt; no outcome is sticky.
/// Checks take `&mut self`, so two checks on one attempt cannot interleave.
#[derive(Debug)]
pub struct VerdictController<C = UomConverter> {
    converter: C,
    decimal_places: usize,
    default_family: ConversionFamily,
    attempt: QuizAttempt,
    verdict: Option<Verdict>,
}

impl Default for VerdictController<UomConverter> {
    fn default() -> Self {
        Self::new(UomConverter::new())
    }
}

impl<C: UnitConverter> VerdictController<C> {
    pub fn new(converter: C) -> Self {
        Self {
            converter,
            decimal_places: DEFAULT_DECIMAL_PLACES,
            default_family: ConversionFamily::default(),
            attempt: QuizAttempt::default(),
            verdict: None,
        }
    }

    /// Compare at `places` decimals instead of the default (clamped to the
    /// renderer's maximum).
    pub fn with_decimal_places(mut self, places: usize) -> Self {
        self.decimal_places = places.min(MAX_DECIMAL_PLACES);
        self
    }

    /// Family a blank attempt starts in, now and after every `clear`.
    pub fn with_default_family(mut self, family: ConversionFamily) -> Self {
        self.default_family = family;
        self.attempt = QuizAttempt::new(family);
        self
    }

    /// Start from an existing attempt rather than a blank one.
    pub fn with_attempt(mut self, attempt: QuizAttempt) -> Self {
        self.attempt = attempt;
        self
    }

    pub fn decimal_places(&self) -> usize {
        self.decimal_places
    }

    pub fn default_family(&self) -> ConversionFamily {
        self.default_family
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }

    pub fn attempt(&self) -> &QuizAttempt {
        &self.attempt
    }

    pub fn attempt_mut(&mut self) -> &mut QuizAttempt {
        &mut self.attempt
    }

    pub fn set_family(&mut self, family: ConversionFamily) {
        self.attempt.conversion_family = family;
    }

    pub fn set_input_value(&mut self, raw: impl Into<String>) {
        self.attempt.input_value = raw.into();
    }

    pub fn set_input_unit(&mut self, code: impl Into<String>) {
        self.attempt.input_unit = code.into();
    }

    pub fn set_target_unit(&mut self, code: impl Into<String>) {
        self.attempt.target_unit = code.into();
    }

    pub fn set_student_answer(&mut self, raw: impl Into<String>) {
        self.attempt.student_answer = raw.into();
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    /// Verdict as display text; empty before the first check.
    pub fn result_label(&self) -> &'static str {
        self.verdict.map(Verdict::as_str).unwrap_or("")
    }

    /// Judge the current attempt and store the verdict.
    ///
    /// Unparseable numeric fields give `Ok(Verdict::Invalid)` without touching
    /// the converter. A unit outside the active family, or any other
    /// conversion failure, is returned as an error and leaves no verdict.
    pub fn check_answer(&mut self) -> QuizResult<Verdict> {
        self.verdict = None;

        let (Some(answer), Some(input)) = (
            parse_input(&self.attempt.student_answer),
            parse_input(&self.attempt.input_value),
        ) else {
            tracing::debug!(
                input_value = %self.attempt.input_value,
                student_answer = %self.attempt.student_answer,
                "attempt has non-numeric input"
            );
            self.verdict = Some(Verdict::Invalid);
            return Ok(Verdict::Invalid);
        };

        let real_answer = self.convert(input)?;
        let verdict = if rounded_answers_match(real_answer, answer, self.decimal_places) {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        };

        tracing::debug!(
            family = %self.attempt.conversion_family,
            from = %self.attempt.input_unit,
            to = %self.attempt.target_unit,
            real_answer,
            answer,
            %verdict,
            "checked attempt"
        );
        self.verdict = Some(verdict);
        Ok(verdict)
    }

    /// The converted value the learner should have entered, if the input value
    /// is a number. Does not change the verdict.
    pub fn expected_answer(&self) -> QuizResult<Option<Real>> {
        match parse_input(&self.attempt.input_value) {
            Some(input) => Ok(Some(self.convert(input)?)),
            None => Ok(None),
        }
    }

    /// Replace the attempt with a blank one in the default family and forget
    /// the verdict.
    pub fn clear(&mut self) {
        self.attempt = QuizAttempt::new(self.default_family);
        self.verdict = None;
    }

    fn convert(&self, input: Real) -> QuizResult<Real> {
        let attempt = &self.attempt;
        let family = attempt.conversion_family;

        let result = ensure_in_family(family, &attempt.input_unit)
            .and_then(|()| ensure_in_family(family, &attempt.target_unit))
            .and_then(|()| {
                convert_units(
                    &self.converter,
                    input,
                    &attempt.input_unit,
                    &attempt.target_unit,
                )
            });

        result.map_err(|err| {
            tracing::error!(
                backend = self.converter.name(),
                %family,
                from = %attempt.input_unit,
                to = %attempt.target_unit,
                error = %err,
                "conversion request violated the unit registry contract"
            );
            err.into()
        })
    }
}

fn ensure_in_family(family: ConversionFamily, code: &str) -> Result<(), ConversionError> {
    if find_unit(family, code).is_some() {
        return Ok(());
    }
    if family_of(code).is_some() {
        Err(ConversionError::NotInFamily {
            code: code.to_string(),
            family,
        })
    } else {
        Err(ConversionError::UnknownUnit {
            code: code.to_string(),
        })
    }
}
