//! Conversion capability trait and the checked entry point used by the quiz.

use crate::error::{ConversionError, ConvertResult};
use crate::registry::family_of;
use cq_core::{Real, ensure_finite};

/// Converts a magnitude tagged with one unit code into another unit code.
///
/// Implementations only need to honour codes from the registry; callers go
/// through [`convert_units`], which screens codes and families first.
/// Must be `Send + Sync` so a controller holding one can cross threads.
pub trait UnitConverter: Send + Sync {
    /// Backend name, used in log output.
    fn name(&self) -> &str;

    /// Re-express `magnitude` (in `from`) in `to`.
    fn convert(&self, magnitude: Real, from: &str, to: &str) -> ConvertResult<Real>;
}

impl<T: UnitConverter + ?Sized> UnitConverter for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn convert(&self, magnitude: Real, from: &str, to: &str) -> ConvertResult<Real> {
        (**self).convert(magnitude, from, to)
    }
}

impl<T: UnitConverter + ?Sized> UnitConverter for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn convert(&self, magnitude: Real, from: &str, to: &str) -> ConvertResult<Real> {
        (**self).convert(magnitude, from, to)
    }
}

/// Convert `value` from `from` to `to` through `converter`.
///
/// Both codes must be registry codes of the same family. Converting a unit to
/// itself returns `value` untouched without consulting the backend, so the
/// identity holds exactly. A non-finite result is an error.
pub fn convert_units<C>(converter: &C, value: Real, from: &str, to: &str) -> ConvertResult<Real>
where
    C: UnitConverter + ?Sized,
{
    let from_family = family_of(from).ok_or_else(|| ConversionError::UnknownUnit {
        code: from.to_string(),
    })?;
    let to_family = family_of(to).ok_or_else(|| ConversionError::UnknownUnit {
        code: to.to_string(),
    })?;
    if from_family != to_family {
        return Err(ConversionError::FamilyMismatch {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    if from == to {
        return Ok(value);
    }

    let converted = converter.convert(value, from, to)?;
    Ok(ensure_finite(converted, "converted value")?)
}
