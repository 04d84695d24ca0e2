//! cq-units: unit catalogs and unit conversion for convquiz.
//!
//! Provides:
//! - The unit registry: per-family, ordered catalogs of supported units
//! - The `UnitConverter` capability trait
//! - `UomConverter`, the default backend built on `uom`
//!
//! # Architecture
//!
//! The quiz engine only ever talks to `UnitConverter`. The backend that knows the
//! actual conversion factors sits behind that trait so it can be swapped or faked
//! in tests.
//!
//! # Example
//!
//! ```
//! use cq_units::{UomConverter, convert_units};
//!
//! let f = convert_units(&UomConverter::new(), 100.0, "degC", "degF").unwrap();
//! assert!((f - 212.0).abs() < 1e-9);
//! ```

pub mod convert;
pub mod error;
pub mod registry;
pub mod uom_backend;

// Re-exports for ergonomics
pub use convert::{UnitConverter, convert_units};
pub use error::{ConversionError, ConvertResult};
pub use registry::{
    ConversionFamily, ParseFamilyError, TEMPERATURE_UNITS, UnitDescriptor, VOLUME_UNITS,
    family_of, find_unit, units_for,
};
pub use uom_backend::UomConverter;
