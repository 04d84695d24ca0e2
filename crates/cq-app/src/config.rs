//! Quiz settings file.
//!
//! ```yaml
//! decimal_places: 1
//! default_family: temperature
//! ```
//!
//! Every key is optional. [`DECIMAL_PLACES_ENV`] overrides `decimal_places`.

use cq_core::check_decimal_places;
use cq_quiz::{DEFAULT_DECIMAL_PLACES, VerdictController};
use cq_units::{ConversionFamily, UnitConverter};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Environment variable that overrides the comparison precision.
pub const DECIMAL_PLACES_ENV: &str = "CQ_DECIMAL_PLACES";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuizSettings {
    /// Decimal places both answers are rounded to before comparing.
    pub decimal_places: usize,
    /// Family a new attempt starts in.
    pub default_family: ConversionFamily,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            default_family: ConversionFamily::default(),
        }
    }
}

impl QuizSettings {
    /// Load settings from a YAML file and validate them.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let settings = Self::from_yaml_str(&content)?;
        tracing::debug!(path = %path.display(), ?settings, "loaded quiz settings");
        Ok(settings)
    }

    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        // an empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = serde_yaml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> AppResult<()> {
        check_decimal_places(self.decimal_places)?;
        Ok(())
    }

    /// Apply [`DECIMAL_PLACES_ENV`] if it is set.
    pub fn with_env_overrides(self) -> AppResult<Self> {
        let raw = std::env::var(DECIMAL_PLACES_ENV).ok();
        self.with_decimal_places_override(raw.as_deref())
    }

    /// Apply a raw decimal places override; `None` keeps the current value.
    pub fn with_decimal_places_override(mut self, raw: Option<&str>) -> AppResult<Self> {
        let Some(raw) = raw else {
            return Ok(self);
        };
        let places: usize = raw.trim().parse().map_err(|_| {
            AppError::Settings(format!(
                "{DECIMAL_PLACES_ENV} must be a non-negative integer, got '{raw}'"
            ))
        })?;
        self.decimal_places = check_decimal_places(places)?;
        Ok(self)
    }

    /// Controller with these settings; its attempt starts, and clears back to,
    /// a blank one in the default family.
    pub fn controller<C: UnitConverter>(&self, converter: C) -> VerdictController<C> {
        VerdictController::new(converter)
            .with_decimal_places(self.decimal_places)
            .with_default_family(self.default_family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cq_quiz::QuizAttempt;
    use cq_units::UomConverter;

    #[test]
    fn defaults() {
        let settings = QuizSettings::default();
        assert_eq!(settings.decimal_places, 1);
        assert_eq!(settings.default_family, ConversionFamily::Temperature);
        assert_eq!(QuizSettings::from_yaml_str("").unwrap(), settings);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let settings = QuizSettings::from_yaml_str("default_family: volume\n").unwrap();
        assert_eq!(settings.decimal_places, 1);
        assert_eq!(settings.default_family, ConversionFamily::Volume);
    }

    #[test]
    fn rejects_out_of_range_precision() {
        let err = QuizSettings::from_yaml_str("decimal_places: 101\n").unwrap_err();
        assert!(matches!(
            err,
            AppError::Core(cq_core::CoreError::DecimalPlaces { places: 101, .. })
        ));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = QuizSettings::from_yaml_str("tolerance: 0.1\n").unwrap_err();
        assert!(matches!(err, AppError::Yaml(_)));
    }

    #[test]
    fn decimal_override() {
        let base = QuizSettings::default();
        assert_eq!(base.with_decimal_places_override(None).unwrap(), base);
        assert_eq!(
            base.with_decimal_places_override(Some(" 3 "))
                .unwrap()
                .decimal_places,
            3
        );
        assert!(base.with_decimal_places_override(Some("two")).is_err());
        assert!(base.with_decimal_places_override(Some("-1")).is_err());
        assert!(base.with_decimal_places_override(Some("500")).is_err());
    }

    #[test]
    fn controller_uses_settings() {
        let settings = QuizSettings {
            decimal_places: 2,
            default_family: ConversionFamily::Volume,
        };
        let controller = settings.controller(UomConverter);
        assert_eq!(controller.decimal_places(), 2);
        assert_eq!(
            controller.attempt().conversion_family,
            ConversionFamily::Volume
        );
    }

    #[test]
    fn clear_keeps_configured_family() {
        let settings = QuizSettings {
            decimal_places: 1,
            default_family: ConversionFamily::Volume,
        };
        let mut controller = settings.controller(UomConverter);
        controller.set_input_value("10");
        controller.set_input_unit("cup");
        controller.set_target_unit("gallon");
        controller.set_student_answer("0.6");
        controller.check_answer().unwrap();

        controller.clear();
        assert_eq!(
            controller.attempt(),
            &QuizAttempt::new(ConversionFamily::Volume)
        );
        assert_eq!(controller.verdict(), None);
    }
}
