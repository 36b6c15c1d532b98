//! hs-eos: equation-of-state collaborators for hydrostat.
//!
//! Provides:
//! - Nuclear species definitions (H1, He4, C12, ...)
//! - Mass-fraction compositions and mean molecular weights
//! - `EquationOfState` trait: recover a consistent thermodynamic state from
//!   (density, pressure), (density, temperature) or (density, energy)
//! - Gamma-law ideal gas backend
//! - Ideal gas plus radiation backend (Newton solve in temperature)
//!
//! All quantities are CGS.
//!
//! # Example
//!
//! ```
//! use hs_eos::{Composition, EosInput, EquationOfState, GammaLawEos, Species};
//!
//! let eos = GammaLawEos::new(5.0 / 3.0).unwrap();
//! let comp = Composition::pure(Species::He4);
//! let state = eos
//!     .solve(EosInput::RhoP { rho: 1e7, p: 2.4e25 }, &comp, 1000.0)
//!     .unwrap();
//! assert!(state.t > 0.0);
//! ```

pub mod composition;
pub mod error;
pub mod gamma_law;
pub mod model;
pub mod radiation;
pub mod species;

pub use composition::{Composition, Ionization};
pub use error::{EosError, EosResult};
pub use gamma_law::GammaLawEos;
pub use model::{EosInput, EosState, EquationOfState};
pub use radiation::{IdealGasRadiationEos, TemperatureSolveConfig};
pub use species::Species;
