//! Unit conversion errors.

use crate::registry::ConversionFamily;
use cq_core::CoreError;
use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConversionError>;

/// Errors raised when a conversion request breaks the registry contract.
///
/// None of these are user mistakes: the presentation layer is only supposed to
/// offer codes from the registry for the active family.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Code is not in any catalog.
    #[error("Unknown unit code '{code}'")]
    UnknownUnit { code: String },

    /// Code exists but belongs to a different family than the one in use.
    #[error("Unit '{code}' is not a {family} unit")]
    NotInFamily {
        code: String,
        family: ConversionFamily,
    },

    /// Source and target units come from different families.
    #[error("Cannot convert between '{from}' and '{to}': different conversion families")]
    FamilyMismatch { from: String, to: String },

    /// Numeric failure (e.g. overflow to infinity).
    #[error(transparent)]
    Numeric(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ConversionError::UnknownUnit {
            code: "furlong".into(),
        };
        assert!(err.to_string().contains("furlong"));

        let err = ConversionError::NotInFamily {
            code: "cup".into(),
            family: ConversionFamily::Temperature,
        };
        assert_eq!(err.to_string(), "Unit 'cup' is not a temperature unit");
    }

    #[test]
    fn core_error_lifts() {
        let err: ConversionError = CoreError::NonFinite {
            what: "converted value",
            value: f64::INFINITY,
        }
        .into();
        assert!(matches!(err, ConversionError::Numeric(_)));
    }
}
