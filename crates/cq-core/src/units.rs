// cq-core/src/units.rs

use uom::si::f64::{ThermodynamicTemperature as UomThermodynamicTemperature, Volume as UomVolume};

// Public canonical unit types (SI, f64)
pub type Temperature = UomThermodynamicTemperature;
pub type Volume = UomVolume;

#[inline]
pub fn m3(v: f64) -> Volume {
    use uom::si::volume::cubic_meter;
    Volume::new::<cubic_meter>(v)
}

#[inline]
pub fn litres(v: f64) -> Volume {
    use uom::si::volume::liter;
    Volume::new::<liter>(v)
}

/// US customary volume units expressed in cubic metres.
///
/// Derived from the international inch (0.0254 m) and the 231 in³ US gallon.
/// The cup is the 236.5882 mL figure quoted by conversion tables.
pub mod constants {
    pub const CUBIC_INCH_M3: f64 = 1.638_706_4e-5;
    pub const CUBIC_FOOT_M3: f64 = 2.831_684_659_2e-2;
    pub const GALLON_M3: f64 = 3.785_411_784e-3;
    pub const CUP_M3: f64 = 2.365_882e-4;
    pub const TABLESPOON_M3: f64 = 1.478_676_478_125e-5;
}
