//! Density closures.
//!
//! Hydrostatic balance alone does not fix how density falls with height. The
//! closure supplies that relation, and each one has a closed-form density at
//! any offset from the base:
//!
//! ```text
//! isothermal:  rho(r) = rho0 exp(-(r - r0) / H),          H = p0 / rho0 / |g|
//! isentropic:  rho(r) = rho0 (g rho0 (gamma-1) (r - r0) / (gamma p0) + 1)^(1/(gamma-1))
//! ```
//!
//! In the isentropic law `g` is the downward acceleration `-|g|`.

use crate::error::{ModelError, ModelResult};
use hs_core::numeric::Real;

/// Relation between density and pressure used to close the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClosureMode {
    Isothermal,
    Isentropic,
}

impl std::fmt::Display for ClosureMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClosureMode::Isothermal => f.write_str("isothermal"),
            ClosureMode::Isentropic => f.write_str("isentropic"),
        }
    }
}

/// State at the base of the atmosphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseState {
    pub radius: Real,
    pub density: Real,
    pub pressure: Real,
}

/// A closure resolved against a base state, ready to evaluate per point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DensityLaw {
    Isothermal { scale_height: Real },
    Isentropic { gamma: Real },
}

impl DensityLaw {
    /// Pressure scale height of an isothermal ideal-gas atmosphere.
    pub fn scale_height(base: &BaseState, gravity: Real) -> Real {
        base.pressure / base.density / gravity.abs()
    }

    /// Effective polytropic exponent from the base specific internal energy.
    ///
    /// Exact for a gamma-law gas; an estimate for anything else.
    pub fn polytropic_gamma(base: &BaseState, energy: Real) -> Real {
        base.pressure / (base.density * energy) + 1.0
    }

    /// Resolve `mode` once per build.
    ///
    /// `energy` is the specific internal energy the EOS returned at the base.
    /// A polytrope with `gamma <= 1` has no finite density exponent and is
    /// rejected here rather than per point.
    pub fn resolve(
        mode: ClosureMode,
        base: &BaseState,
        gravity: Real,
        energy: Real,
    ) -> ModelResult<Self> {
        match mode {
            ClosureMode::Isothermal => Ok(DensityLaw::Isothermal {
                scale_height: Self::scale_height(base, gravity),
            }),
            ClosureMode::Isentropic => {
                let gamma = Self::polytropic_gamma(base, energy);
                if !gamma.is_finite() || gamma <= 1.0 {
                    return Err(ModelError::UnphysicalProfile {
                        index: 0,
                        quantity: "polytropic exponent",
                        inputs: (base.pressure, energy),
                    });
                }
                Ok(DensityLaw::Isentropic { gamma })
            }
        }
    }

    /// Density at radius `r` (point `index`, used for error reporting).
    pub fn density(
        &self,
        base: &BaseState,
        r: Real,
        gravity: Real,
        index: usize,
    ) -> ModelResult<Real> {
        let (rho, inputs) = match *self {
            DensityLaw::Isothermal { scale_height } => {
                let dr = r - base.radius;
                (base.density * (-dr / scale_height).exp(), (dr, scale_height))
            }
            DensityLaw::Isentropic { gamma } => {
                let g = -gravity.abs();
                let term = g * base.density * (gamma - 1.0) * (r - base.radius)
                    / (gamma * base.pressure)
                    + 1.0;
                let exponent = 1.0 / (gamma - 1.0);
                if term <= 0.0 {
                    return Err(ModelError::UnphysicalProfile {
                        index,
                        quantity: "density",
                        inputs: (term, exponent),
                    });
                }
                (base.density * term.powf(exponent), (term, exponent))
            }
        };

        if !rho.is_finite() || rho <= 0.0 {
            return Err(ModelError::UnphysicalProfile {
                index,
                quantity: "density",
                inputs,
            });
        }
        Ok(rho)
    }
}

/// Trapezoidal step of `dP/dr = -rho |g|` from point `index - 1` to `index`.
pub(crate) fn hydrostatic_pressure(
    p_prev: Real,
    rho_prev: Real,
    rho: Real,
    dx: Real,
    gravity: Real,
    index: usize,
) -> ModelResult<Real> {
    let drop = dx * 0.5 * (rho + rho_prev) * gravity.abs();
    let p = p_prev - drop;
    if !p.is_finite() || p <= 0.0 {
        return Err(ModelError::UnphysicalProfile {
            index,
            quantity: "pressure",
            inputs: (p_prev, drop),
        });
    }
    Ok(p)
}
