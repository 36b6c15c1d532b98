//! Equation-of-state trait and validation helpers.

use crate::composition::Composition;
use crate::error::EosResult;
use hs_core::numeric::Real;

/// Which pair of variables is known when calling the EOS.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EosInput {
    /// Density [g/cm^3] and pressure [dyn/cm^2].
    RhoP { rho: Real, p: Real },
    /// Density [g/cm^3] and temperature [K].
    RhoT { rho: Real, t: Real },
    /// Density [g/cm^3] and specific internal energy [erg/g].
    RhoE { rho: Real, e: Real },
}

impl EosInput {
    pub fn rho(&self) -> Real {
        match *self {
            EosInput::RhoP { rho, .. } | EosInput::RhoT { rho, .. } | EosInput::RhoE { rho, .. } => {
                rho
            }
        }
    }
}

/// A consistent thermodynamic state returned by an EOS solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EosState {
    /// Density [g/cm^3]
    pub rho: Real,
    /// Pressure [dyn/cm^2]
    pub p: Real,
    /// Temperature [K]
    pub t: Real,
    /// Specific internal energy [erg/g]
    pub e: Real,
}

/// Trait for equation-of-state backends.
///
/// Implementations must be thread-safe (Send + Sync) so profile points can be
/// solved in parallel. A solve has no side effects; the same inputs always
/// give the same state.
pub trait EquationOfState: Send + Sync {
    /// Get the backend name (for logging).
    fn name(&self) -> &str;

    /// Solve for the full state from two known variables and a composition.
    ///
    /// `t_guess` seeds any temperature iteration. Backends with a closed form
    /// ignore it.
    fn solve(&self, input: EosInput, comp: &Composition, t_guess: Real) -> EosResult<EosState>;
}

impl<E: EquationOfState + ?Sized> EquationOfState for &E {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn solve(&self, input: EosInput, comp: &Composition, t_guess: Real) -> EosResult<EosState> {
        (**self).solve(input, comp, t_guess)
    }
}

/// Validation helpers shared by backends.
pub(crate) mod validation {
    use super::*;
    use hs_core::numeric::{ensure_finite, ensure_positive};

    pub fn validate_input(input: &EosInput) -> EosResult<()> {
        ensure_positive(input.rho(), "density must be positive and finite")?;
        match *input {
            EosInput::RhoP { p, .. } => {
                ensure_positive(p, "pressure must be positive and finite")?;
            }
            EosInput::RhoT { t, .. } => {
                ensure_positive(t, "temperature must be positive and finite")?;
            }
            EosInput::RhoE { e, .. } => {
                ensure_positive(e, "internal energy must be positive and finite")?;
            }
        }
        Ok(())
    }

    pub fn validate_composition(comp: &Composition) -> EosResult<()> {
        if comp.is_empty() {
            return Err(crate::EosError::InvalidArg {
                what: "empty composition",
            });
        }
        ensure_positive(comp.sum(), "mass fractions must have a positive sum")?;
        Ok(())
    }

    pub fn validate_state(state: EosState) -> EosResult<EosState> {
        ensure_positive(state.p, "pressure must be positive and finite")?;
        ensure_positive(state.t, "temperature must be positive and finite")?;
        ensure_finite(state.e, "internal energy must be finite")?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;
    use crate::species::Species;

    #[test]
    fn validate_inputs() {
        assert!(validate_input(&EosInput::RhoP { rho: 1.0, p: 1.0 }).is_ok());
        assert!(validate_input(&EosInput::RhoP { rho: 0.0, p: 1.0 }).is_err());
        assert!(validate_input(&EosInput::RhoP { rho: 1.0, p: -1.0 }).is_err());
        assert!(validate_input(&EosInput::RhoT { rho: 1.0, t: f64::NAN }).is_err());
        assert!(validate_input(&EosInput::RhoE { rho: 1.0, e: 0.0 }).is_err());
    }

    #[test]
    fn validate_states() {
        let good = EosState {
            rho: 1.0,
            p: 1.0,
            t: 1.0,
            e: 1.0,
        };
        assert!(validate_state(good).is_ok());
        assert!(validate_state(EosState { t: 0.0, ..good }).is_err());
        assert!(validate_state(EosState { e: f64::INFINITY, ..good }).is_err());
    }

    #[test]
    fn composition_must_have_mass() {
        let comp = Composition::new_mass_fractions(vec![(Species::He4, 0.0)]).unwrap();
        assert!(validate_composition(&comp).is_err());
        assert!(validate_composition(&Composition::pure(Species::He4)).is_ok());
    }
}
