//! hs-core: stable foundation for hydrostat.
//!
//! Contains:
//! - units (uom types, SI constructors, CGS getters, physical constants)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{HsError, HsResult};
pub use numeric::*;
pub use units::*;
