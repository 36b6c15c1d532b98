//! Hydrostatic-equilibrium atmosphere profiles.
//!
//! A profile is a single outward sweep from the base of a stratified column:
//! density comes from the closed-form solution of the chosen closure
//! (isothermal or isentropic), pressure from a trapezoidal discretization of
//! `dP/dr = -rho g`, and temperature from an equation-of-state solve at each
//! point.
//!
//! ```
//! use hs_eos::{Composition, GammaLawEos, Species};
//! use hs_model::{ClosureMode, ModelParameters, ProfileBuilder};
//!
//! let eos = GammaLawEos::new(5.0 / 3.0).unwrap();
//! let params = ModelParameters {
//!     base_density: 1e7,
//!     base_pressure: 2.4e25,
//!     composition: Composition::pure(Species::He4),
//! };
//! let profile = ProfileBuilder::new(&eos)
//!     .build(100, 0.0, 1e8, &params, ClosureMode::Isothermal, -2.45e10)
//!     .unwrap();
//! assert_eq!(profile.len(), 100);
//! ```

pub mod builder;
pub mod closure;
pub mod error;
pub mod grid;
pub mod parallel;
pub mod profile;
pub mod set;

pub use builder::{DEFAULT_CAPACITY, DEFAULT_TEMPERATURE_GUESS, ModelParameters, ProfileBuilder};
pub use closure::{BaseState, ClosureMode, DensityLaw};
pub use error::{ModelError, ModelResult};
pub use grid::Grid;
pub use profile::{AtmosphereProfile, Field, ProfilePoint};
pub use set::ProfileSet;
