//! Monatomic ideal gas plus blackbody radiation.
//!
//! ```text
//! p = rho k T / (mu m_u) + a T^4 / 3
//! e = 3/2 k T / (mu m_u) + a T^4 / rho
//! ```
//!
//! Given (rho, p) or (rho, e) the temperature is found by Newton iteration
//! seeded from the caller's guess. Both residuals are increasing and convex in
//! T, so iterates from the right approach the root monotonically. Each term
//! alone bounds the root from above (gas-only or radiation-only temperature),
//! and iterates are kept at or below the smaller bound.

use crate::composition::{Composition, Ionization};
use crate::error::{EosError, EosResult};
use crate::model::{EosInput, EosState, EquationOfState, validation};
use hs_core::numeric::Real;
use hs_core::units::constants::{A_RAD, K_B, M_U};
use tracing::trace;

/// Temperature iteration settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureSolveConfig {
    /// Maximum Newton iterations
    pub max_iterations: usize,
    /// Relative tolerance on the temperature update
    pub rel_tol: Real,
}

impl Default for TemperatureSolveConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            rel_tol: 1e-12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IdealGasRadiationEos {
    ionization: Ionization,
    solve_config: TemperatureSolveConfig,
}

impl IdealGasRadiationEos {
    pub fn new(ionization: Ionization) -> Self {
        Self {
            ionization,
            solve_config: TemperatureSolveConfig::default(),
        }
    }

    pub fn with_solve_config(mut self, config: TemperatureSolveConfig) -> Self {
        self.solve_config = config;
        self
    }

    fn pressure(rho: Real, t: Real, r_spec: Real) -> Real {
        rho * r_spec * t + A_RAD * t.powi(4) / 3.0
    }

    fn energy(rho: Real, t: Real, r_spec: Real) -> Real {
        1.5 * r_spec * t + A_RAD * t.powi(4) / rho
    }

    /// Newton iteration on `residual(T) -> (f, df/dT)`, with the root known to
    /// lie in `(0, t_max]`.
    fn solve_temperature<F>(
        &self,
        residual: F,
        t_guess: Real,
        t_max: Real,
        what: &'static str,
    ) -> EosResult<Real>
    where
        F: Fn(Real) -> (Real, Real),
    {
        if !t_max.is_finite() || t_max <= 0.0 {
            return Err(EosError::NonPhysical { what });
        }
        let mut t = t_guess.min(t_max);
        for iter in 0..self.solve_config.max_iterations {
            let (f, dfdt) = residual(t);
            if !f.is_finite() || !dfdt.is_finite() || dfdt <= 0.0 {
                return Err(EosError::NonPhysical { what });
            }

            let mut t_new = t - f / dfdt;
            // Stay positive; the residuals are only meaningful for T > 0
            if t_new <= 0.0 {
                t_new = 0.1 * t;
            }
            t_new = t_new.min(t_max);

            if (t_new - t).abs() <= self.solve_config.rel_tol * t_new {
                trace!(what, iterations = iter + 1, t = t_new, "temperature converged");
                return Ok(t_new);
            }
            t = t_new;
        }

        Err(EosError::ConvergenceFailed {
            what,
            iterations: self.solve_config.max_iterations,
        })
    }
}

impl EquationOfState for IdealGasRadiationEos {
    fn name(&self) -> &str {
        "ideal_gas_radiation"
    }

    fn solve(&self, input: EosInput, comp: &Composition, t_guess: Real) -> EosResult<EosState> {
        validation::validate_input(&input)?;
        validation::validate_composition(comp)?;

        let r_spec = K_B / (comp.mean_molecular_weight(self.ionization) * M_U);

        let state = match input {
            EosInput::RhoT { rho, t } => EosState {
                rho,
                p: Self::pressure(rho, t, r_spec),
                t,
                e: Self::energy(rho, t, r_spec),
            },
            EosInput::RhoP { rho, p } => {
                if !t_guess.is_finite() || t_guess <= 0.0 {
                    return Err(EosError::InvalidArg {
                        what: "temperature guess must be positive and finite",
                    });
                }
                let t = self.solve_temperature(
                    |t| {
                        (
                            Self::pressure(rho, t, r_spec) - p,
                            rho * r_spec + 4.0 * A_RAD * t.powi(3) / 3.0,
                        )
                    },
                    t_guess,
                    (p / (rho * r_spec)).min((3.0 * p / A_RAD).powf(0.25)),
                    "temperature from (rho, p)",
                )?;
                EosState {
                    rho,
                    p,
                    t,
                    e: Self::energy(rho, t, r_spec),
                }
            }
            EosInput::RhoE { rho, e } => {
                if !t_guess.is_finite() || t_guess <= 0.0 {
                    return Err(EosError::InvalidArg {
                        what: "temperature guess must be positive and finite",
                    });
                }
                let t = self.solve_temperature(
                    |t| {
                        (
                            Self::energy(rho, t, r_spec) - e,
                            1.5 * r_spec + 4.0 * A_RAD * t.powi(3) / rho,
                        )
                    },
                    t_guess,
                    (e / (1.5 * r_spec)).min((e * rho / A_RAD).powf(0.25)),
                    "temperature from (rho, e)",
                )?;
                EosState {
                    rho,
                    p: Self::pressure(rho, t, r_spec),
                    t,
                    e,
                }
            }
        };

        validation::validate_state(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::Species;
    use hs_core::numeric::{Tolerances, nearly_equal};

    fn helium() -> Composition {
        Composition::pure(Species::He4)
    }

    #[test]
    fn gas_dominated_limit_matches_ideal_gas() {
        let eos = IdealGasRadiationEos::new(Ionization::Neutral);
        // Cold and dense: radiation pressure negligible
        let s = eos
            .solve(EosInput::RhoP { rho: 1.0, p: 1e10 }, &helium(), 1000.0)
            .unwrap();
        let t_gas = 1e10 * 4.0 * M_U / K_B;
        assert!((s.t / t_gas - 1.0).abs() < 1e-6, "t = {}", s.t);
    }

    #[test]
    fn rho_p_then_rho_t_reproduces_pressure() {
        let eos = IdealGasRadiationEos::new(Ionization::Full);
        let s = eos
            .solve(EosInput::RhoP { rho: 1e7, p: 2.4e25 }, &helium(), 1000.0)
            .unwrap();
        let back = eos
            .solve(EosInput::RhoT { rho: 1e7, t: s.t }, &helium(), 1000.0)
            .unwrap();
        assert!(nearly_equal(back.p, 2.4e25, Tolerances { abs: 0.0, rel: 1e-9 }));
    }

    #[test]
    fn rho_e_inverts_energy() {
        let eos = IdealGasRadiationEos::new(Ionization::Neutral);
        let s = eos
            .solve(EosInput::RhoT { rho: 1e-2, t: 5e7 }, &helium(), 1000.0)
            .unwrap();
        let back = eos
            .solve(EosInput::RhoE { rho: 1e-2, e: s.e }, &helium(), 1000.0)
            .unwrap();
        assert!(nearly_equal(back.t, 5e7, Tolerances { abs: 0.0, rel: 1e-9 }));
    }

    #[test]
    fn converges_from_far_guess() {
        let eos = IdealGasRadiationEos::new(Ionization::Neutral);
        let input = EosInput::RhoP { rho: 1e-3, p: 1e14 };
        let a = eos.solve(input, &helium(), 1000.0).unwrap();
        let b = eos.solve(input, &helium(), 1e10).unwrap();
        assert!(nearly_equal(a.t, b.t, Tolerances { abs: 0.0, rel: 1e-9 }));
    }

    #[test]
    fn radiation_dominated_converges_quickly_from_cold_seed() {
        // Gas-only temperature here is ~1e22 K, radiation-only ~4.5e6 K
        let eos = IdealGasRadiationEos::new(Ionization::Neutral).with_solve_config(
            TemperatureSolveConfig {
                max_iterations: 20,
                rel_tol: 1e-12,
            },
        );
        let p = 1e10;
        let s = eos
            .solve(EosInput::RhoP { rho: 1e-20, p }, &helium(), 1000.0)
            .unwrap();
        let t_rad = (3.0 * p / A_RAD).powf(0.25);
        assert!(s.t <= t_rad);
        assert!((s.t / t_rad - 1.0).abs() < 1e-6, "t = {}", s.t);

        let back = eos
            .solve(EosInput::RhoT { rho: 1e-20, t: s.t }, &helium(), 1000.0)
            .unwrap();
        assert!(nearly_equal(back.p, p, Tolerances { abs: 0.0, rel: 1e-9 }));
    }

    #[test]
    fn radiation_dominated_energy_inverts_from_cold_seed() {
        let eos = IdealGasRadiationEos::new(Ionization::Neutral);
        let s = eos
            .solve(EosInput::RhoT { rho: 1e-18, t: 2e6 }, &helium(), 1000.0)
            .unwrap();
        let back = eos
            .solve(EosInput::RhoE { rho: 1e-18, e: s.e }, &helium(), 1000.0)
            .unwrap();
        assert!(nearly_equal(back.t, 2e6, Tolerances { abs: 0.0, rel: 1e-9 }));
    }

    #[test]
    fn iteration_cap_reports_convergence_failure() {
        let eos = IdealGasRadiationEos::new(Ionization::Neutral).with_solve_config(
            TemperatureSolveConfig {
                max_iterations: 1,
                rel_tol: 1e-12,
            },
        );
        let err = eos
            .solve(EosInput::RhoP { rho: 1e7, p: 2.4e25 }, &helium(), 1000.0)
            .unwrap_err();
        assert!(matches!(err, EosError::ConvergenceFailed { iterations: 1, .. }));
    }

    #[test]
    fn bad_guess_rejected() {
        let eos = IdealGasRadiationEos::new(Ionization::Neutral);
        let err = eos
            .solve(EosInput::RhoP { rho: 1.0, p: 1.0 }, &helium(), -5.0)
            .unwrap_err();
        assert!(matches!(err, EosError::InvalidArg { .. }));
    }
}
