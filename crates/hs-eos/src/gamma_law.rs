//! Gamma-law ideal gas.
//!
//! ```text
//! p = (gamma - 1) rho e
//! p = rho k T / (mu m_u)
//! ```
//!
//! Every input pair has a closed form, so the temperature guess is unused.

use crate::composition::{Composition, Ionization};
use crate::error::{EosError, EosResult};
use crate::model::{EosInput, EosState, EquationOfState, validation};
use hs_core::numeric::Real;
use hs_core::units::constants::{K_B, M_U};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaLawEos {
    gamma: Real,
    ionization: Ionization,
}

impl GammaLawEos {
    /// Gamma-law gas of neutral atoms. `gamma` must be finite and above one.
    pub fn new(gamma: Real) -> EosResult<Self> {
        if !gamma.is_finite() || gamma <= 1.0 {
            return Err(EosError::InvalidArg {
                what: "gamma must be finite and greater than 1",
            });
        }
        Ok(Self {
            gamma,
            ionization: Ionization::Neutral,
        })
    }

    pub fn with_ionization(mut self, ionization: Ionization) -> Self {
        self.ionization = ionization;
        self
    }

    pub fn gamma(&self) -> Real {
        self.gamma
    }

    pub fn ionization(&self) -> Ionization {
        self.ionization
    }
}

impl EquationOfState for GammaLawEos {
    fn name(&self) -> &str {
        "gamma_law"
    }

    fn solve(&self, input: EosInput, comp: &Composition, _t_guess: Real) -> EosResult<EosState> {
        validation::validate_input(&input)?;
        validation::validate_composition(comp)?;

        // k / (mu m_u): specific gas constant
        let r_spec = K_B / (comp.mean_molecular_weight(self.ionization) * M_U);
        let gm1 = self.gamma - 1.0;

        let state = match input {
            EosInput::RhoP { rho, p } => EosState {
                rho,
                p,
                t: p / (rho * r_spec),
                e: p / (gm1 * rho),
            },
            EosInput::RhoT { rho, t } => {
                let p = rho * r_spec * t;
                EosState {
                    rho,
                    p,
                    t,
                    e: p / (gm1 * rho),
                }
            }
            EosInput::RhoE { rho, e } => {
                let p = gm1 * rho * e;
                EosState {
                    rho,
                    p,
                    t: p / (rho * r_spec),
                    e,
                }
            }
        };

        validation::validate_state(state)
    }
}
