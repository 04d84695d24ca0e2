//! Static catalogs of the units a quiz may ask about.
//!
//! Order within a catalog is the presentation order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A unit's conversion code paired with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitDescriptor {
    /// Code understood by the converter (e.g. `degC`)
    pub code: &'static str,
    /// Human-readable label (e.g. `Celsius`)
    pub label: &'static str,
}

impl UnitDescriptor {
    const fn new(code: &'static str, label: &'static str) -> Self {
        Self { code, label }
    }
}

impl fmt::Display for UnitDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.code)
    }
}

/// Closed group of mutually convertible units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionFamily {
    #[default]
    Temperature,
    Volume,
}

impl ConversionFamily {
    pub const ALL: [ConversionFamily; 2] = [Self::Temperature, Self::Volume];

    /// Display label for menus.
    pub fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Volume => "Volume",
        }
    }

    /// Units of this family in presentation order.
    pub fn units(self) -> &'static [UnitDescriptor] {
        units_for(self)
    }
}

impl fmt::Display for ConversionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "temperature"),
            Self::Volume => write!(f, "volume"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown conversion family '{0}' (expected 'temperature' or 'volume')")]
pub struct ParseFamilyError(pub String);

impl FromStr for ConversionFamily {
    type Err = ParseFamilyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "temperature" => Ok(Self::Temperature),
            "volume" => Ok(Self::Volume),
            _ => Err(ParseFamilyError(s.to_string())),
        }
    }
}

pub static TEMPERATURE_UNITS: [UnitDescriptor; 4] = [
    UnitDescriptor::new("degC", "Celsius"),
    UnitDescriptor::new("degF", "Fahrenheit"),
    UnitDescriptor::new("K", "Kelvin"),
    UnitDescriptor::new("degR", "Rankine"),
];

// cup and gallon are US liquid measures
pub static VOLUME_UNITS: [UnitDescriptor; 6] = [
    UnitDescriptor::new("cuft", "Cubic Feet"),
    UnitDescriptor::new("cuin", "Cubic Inches"),
    UnitDescriptor::new("cup", "Cups"),
    UnitDescriptor::new("gallon", "Gallons"),
    UnitDescriptor::new("litre", "Liters"),
    UnitDescriptor::new("tablespoon", "Tablespoons"),
];

pub fn units_for(family: ConversionFamily) -> &'static [UnitDescriptor] {
    match family {
        ConversionFamily::Temperature => &TEMPERATURE_UNITS,
        ConversionFamily::Volume => &VOLUME_UNITS,
    }
}

/// Look up `code` within one family. Codes are case-sensitive (`K` is Kelvin).
pub fn find_unit(family: ConversionFamily, code: &str) -> Option<&'static UnitDescriptor> {
    units_for(family).iter().find(|u| u.code == code)
}

/// Family that owns `code`, if any.
pub fn family_of(code: &str) -> Option<ConversionFamily> {
    ConversionFamily::ALL
        .into_iter()
        .find(|family| find_unit(*family, code).is_some())
}
