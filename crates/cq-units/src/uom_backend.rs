//! Default conversion backend built on `uom` quantities.
//!
//! Every conversion passes through the SI quantity (`ThermodynamicTemperature`
//! in kelvin, `Volume` in cubic metres), so any pair of units within a family
//! is supported without a pairwise table.

use crate::convert::UnitConverter;
use crate::error::{ConversionError, ConvertResult};
use cq_core::Real;
use cq_core::units::constants::{CUBIC_FOOT_M3, CUBIC_INCH_M3, CUP_M3, GALLON_M3, TABLESPOON_M3};
use cq_core::units::{Temperature, Volume, litres, m3};
use uom::si::thermodynamic_temperature::{
    degree_celsius, degree_fahrenheit, degree_rankine, kelvin,
};
use uom::si::volume::{cubic_meter, liter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
}

impl TemperatureUnit {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "degC" => Some(Self::Celsius),
            "degF" => Some(Self::Fahrenheit),
            "K" => Some(Self::Kelvin),
            "degR" => Some(Self::Rankine),
            _ => None,
        }
    }

    fn quantity(self, v: Real) -> Temperature {
        match self {
            Self::Celsius => Temperature::new::<degree_celsius>(v),
            Self::Fahrenheit => Temperature::new::<degree_fahrenheit>(v),
            Self::Kelvin => Temperature::new::<kelvin>(v),
            Self::Rankine => Temperature::new::<degree_rankine>(v),
        }
    }

    fn magnitude(self, t: Temperature) -> Real {
        match self {
            Self::Celsius => t.get::<degree_celsius>(),
            Self::Fahrenheit => t.get::<degree_fahrenheit>(),
            Self::Kelvin => t.get::<kelvin>(),
            Self::Rankine => t.get::<degree_rankine>(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VolumeUnit {
    CubicFeet,
    CubicInches,
    Cups,
    Gallons,
    Liters,
    Tablespoons,
}

impl VolumeUnit {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "cuft" => Some(Self::CubicFeet),
            "cuin" => Some(Self::CubicInches),
            "cup" => Some(Self::Cups),
            "gallon" => Some(Self::Gallons),
            "litre" => Some(Self::Liters),
            "tablespoon" => Some(Self::Tablespoons),
            _ => None,
        }
    }

    /// Size of one unit in m³; `None` for units uom defines exactly.
    fn cubic_meters(self) -> Option<Real> {
        match self {
            Self::CubicFeet => Some(CUBIC_FOOT_M3),
            Self::CubicInches => Some(CUBIC_INCH_M3),
            Self::Cups => Some(CUP_M3),
            Self::Gallons => Some(GALLON_M3),
            Self::Tablespoons => Some(TABLESPOON_M3),
            Self::Liters => None,
        }
    }

    fn quantity(self, v: Real) -> Volume {
        match self.cubic_meters() {
            Some(factor) => m3(v * factor),
            None => litres(v),
        }
    }

    fn magnitude(self, q: Volume) -> Real {
        match self.cubic_meters() {
            Some(factor) => q.get::<cubic_meter>() / factor,
            None => q.get::<liter>(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tagged {
    Temperature(TemperatureUnit),
    Volume(VolumeUnit),
}

fn resolve(code: &str) -> ConvertResult<Tagged> {
    TemperatureUnit::from_code(code)
        .map(Tagged::Temperature)
        .or_else(|| VolumeUnit::from_code(code).map(Tagged::Volume))
        .ok_or_else(|| ConversionError::UnknownUnit {
            code: code.to_string(),
        })
}

/// Conversion backend using `uom` SI quantities.
#[derive(Debug, Clone, Copy, Default)]
pub struct UomConverter;

impl UomConverter {
    pub fn new() -> Self {
        Self
    }
}

impl UnitConverter for UomConverter {
    fn name(&self) -> &str {
        "uom"
    }

    fn convert(&self, magnitude: Real, from: &str, to: &str) -> ConvertResult<Real> {
        match (resolve(from)?, resolve(to)?) {
            (Tagged::Temperature(src), Tagged::Temperature(dst)) => {
                Ok(dst.magnitude(src.quantity(magnitude)))
            }
            (Tagged::Volume(src), Tagged::Volume(dst)) => Ok(dst.magnitude(src.quantity(magnitude))),
            _ => Err(ConversionError::FamilyMismatch {
                from: from.to_string(),
                to: to.to_string(),
            }),
        }
    }
}
