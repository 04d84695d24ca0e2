//! Attempt files: a YAML list of attempts to check in one go.
//!
//! ```yaml
//! attempts:
//!   - conversion_family: temperature
//!     input_value: "0"
//!     input_unit: degC
//!     target_unit: degF
//!     student_answer: "32"
//! ```

use cq_quiz::QuizAttempt;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptFile {
    #[serde(default)]
    pub attempts: Vec<QuizAttempt>,
}

pub fn parse_attempts(content: &str) -> AppResult<Vec<QuizAttempt>> {
    let file: AttemptFile = serde_yaml::from_str(content)?;
    Ok(file.attempts)
}

pub fn load_attempts(path: &Path) -> AppResult<Vec<QuizAttempt>> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let attempts = parse_attempts(&content)?;
    tracing::info!(path = %path.display(), count = attempts.len(), "loaded attempts");
    Ok(attempts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cq_units::ConversionFamily;

    #[test]
    fn parses_list() {
        let yaml = r#"
attempts:
  - conversion_family: volume
    input_value: "10"
    input_unit: gallon
    target_unit: litre
    student_answer: "37.85"
  - input_value: "0"
"#;
        let attempts = parse_attempts(yaml).unwrap();
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].conversion_family, ConversionFamily::Volume);
        assert_eq!(attempts[0].student_answer, "37.85");
        assert_eq!(attempts[1].conversion_family, ConversionFamily::Temperature);
        assert!(attempts[1].input_unit.is_empty());
    }

    #[test]
    fn rejects_unknown_family() {
        let yaml = "attempts:\n  - conversion_family: length\n";
        assert!(matches!(parse_attempts(yaml), Err(AppError::Yaml(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_attempts(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }
}
