//! Acceptance rule for numbers typed by the learner.

use cq_core::Real;

/// Parse a raw form value into a finite number.
///
/// Surrounding whitespace is ignored. Empty or blank text, text that is not a
/// decimal number, and the spellings `NaN`/`inf` are rejected.
pub fn parse_input(raw: &str) -> Option<Real> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<Real>().ok().filter(|v| v.is_finite())
}

/// Whether `raw` is an acceptable number. Pure.
pub fn is_valid_input(raw: &str) -> bool {
    parse_input(raw).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_blank() {
        assert!(!is_valid_input(""));
        assert!(!is_valid_input("   "));
    }

    #[test]
    fn rejects_words() {
        assert!(!is_valid_input("woof"));
        assert!(!is_valid_input("BOOOOO"));
        assert!(!is_valid_input("12 degrees"));
        assert!(!is_valid_input("1,5"));
    }

    #[test]
    fn rejects_non_finite() {
        assert!(!is_valid_input("NaN"));
        assert!(!is_valid_input("inf"));
        assert!(!is_valid_input("-infinity"));
        assert!(!is_valid_input("1e999"));
    }

    #[test]
    fn accepts_numbers() {
        for raw in ["34", "2", "-2.5", "-12.5", "0", ".5", "5.", "+7", "1e3", "  34 "] {
            assert!(is_valid_input(raw), "{raw:?} should be valid");
        }
    }

    #[test]
    fn parse_returns_value() {
        assert_eq!(parse_input(" -12.5\n"), Some(-12.5));
        assert_eq!(parse_input("1e3"), Some(1000.0));
        assert_eq!(parse_input("woof"), None);
    }
}
