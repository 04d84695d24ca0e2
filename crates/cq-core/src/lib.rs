//! cq-core: stable foundation for convquiz.
//!
//! Contains:
//! - units (uom SI types, constructors and US customary volume factors)
//! - numeric (Real, finiteness checks, fixed-decimal rounding)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
