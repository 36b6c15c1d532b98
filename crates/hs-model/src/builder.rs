//! Outward hydrostatic integration.

use crate::closure::{BaseState, ClosureMode, DensityLaw, hydrostatic_pressure};
use crate::error::{ModelError, ModelResult};
use crate::grid::Grid;
use crate::profile::AtmosphereProfile;
use hs_core::numeric::Real;
use hs_eos::{Composition, EosInput, EquationOfState};
use tracing::{debug, info};

/// Largest profile a builder accepts unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 10_000;

/// Temperature seed handed to every EOS solve.
pub const DEFAULT_TEMPERATURE_GUESS: Real = 1000.0;

/// Conditions at the base of the atmosphere.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParameters {
    pub base_density: Real,
    pub base_pressure: Real,
    /// Mass fractions, copied unchanged to every point.
    pub composition: Composition,
}

/// Everything fixed before the first point above the base is integrated.
pub(crate) struct Calibration {
    pub grid: Grid,
    pub radius: Vec<Real>,
    pub base: BaseState,
    pub base_temperature: Real,
    pub law: DensityLaw,
}

/// Builds hydrostatic profiles against an equation of state.
///
/// Every EOS call uses the same temperature seed rather than the previous
/// point's solution, so points can be solved in any order.
#[derive(Clone, Copy)]
pub struct ProfileBuilder<'a> {
    eos: &'a dyn EquationOfState,
    capacity: usize,
    temperature_guess: Real,
}

impl<'a> ProfileBuilder<'a> {
    pub fn new(eos: &'a dyn EquationOfState) -> Self {
        Self {
            eos,
            capacity: DEFAULT_CAPACITY,
            temperature_guess: DEFAULT_TEMPERATURE_GUESS,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_temperature_guess(mut self, t_guess: Real) -> Self {
        self.temperature_guess = t_guess;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn temperature_guess(&self) -> Real {
        self.temperature_guess
    }

    pub fn eos(&self) -> &'a dyn EquationOfState {
        self.eos
    }

    /// Build a profile of `npts` cells over `[r_min, r_max]`.
    ///
    /// Calls the EOS `npts + 1` times: once to calibrate at the base, then
    /// once per point. Any failure aborts the whole build.
    pub fn build(
        &self,
        npts: usize,
        r_min: Real,
        r_max: Real,
        params: &ModelParameters,
        closure: ClosureMode,
        gravity: Real,
    ) -> ModelResult<AtmosphereProfile> {
        let cal = self.calibrate(npts, r_min, r_max, params, closure, gravity)?;
        let comp = &params.composition;
        let dx = cal.grid.dx();

        let mut density = Vec::with_capacity(npts);
        let mut pressure = Vec::with_capacity(npts);
        let mut temperature = Vec::with_capacity(npts);
        density.push(cal.base.density);
        pressure.push(cal.base.pressure);
        temperature.push(cal.base_temperature);

        for j in 1..npts {
            let rho = cal.law.density(&cal.base, cal.radius[j], gravity, j)?;
            let p = hydrostatic_pressure(pressure[j - 1], density[j - 1], rho, dx, gravity, j)?;
            let t = self.temperature(rho, p, comp, j)?;

            density.push(rho);
            pressure.push(p);
            temperature.push(t);
        }

        Ok(self.finish(cal, params, closure, density, pressure, temperature))
    }

    /// Eager checks, grid, base EOS call and closure resolution.
    pub(crate) fn calibrate(
        &self,
        npts: usize,
        r_min: Real,
        r_max: Real,
        params: &ModelParameters,
        closure: ClosureMode,
        gravity: Real,
    ) -> ModelResult<Calibration> {
        if npts > self.capacity {
            return Err(ModelError::CapacityExceeded {
                requested: npts,
                capacity: self.capacity,
            });
        }
        validate_parameters(params, gravity)?;
        let grid = Grid::new(npts, r_min, r_max)?;
        let radius = grid.centers();

        let base = BaseState {
            radius: radius[0],
            density: params.base_density,
            pressure: params.base_pressure,
        };

        let state = self
            .eos
            .solve(
                EosInput::RhoP {
                    rho: base.density,
                    p: base.pressure,
                },
                &params.composition,
                self.temperature_guess,
            )
            .map_err(|source| ModelError::EosFailure { index: 0, source })?;

        let law = DensityLaw::resolve(closure, &base, gravity, state.e)?;
        debug!(
            eos = self.eos.name(),
            %closure,
            dx = grid.dx(),
            base_temperature = state.t,
            base_energy = state.e,
            law = ?law,
            "calibrated atmosphere base"
        );

        Ok(Calibration {
            grid,
            radius,
            base,
            base_temperature: state.t,
            law,
        })
    }

    /// Temperature at point `index` from its density and pressure.
    pub(crate) fn temperature(
        &self,
        rho: Real,
        p: Real,
        comp: &Composition,
        index: usize,
    ) -> ModelResult<Real> {
        self.eos
            .solve(EosInput::RhoP { rho, p }, comp, self.temperature_guess)
            .map(|state| state.t)
            .map_err(|source| ModelError::EosFailure { index, source })
    }

    pub(crate) fn finish(
        &self,
        cal: Calibration,
        params: &ModelParameters,
        closure: ClosureMode,
        density: Vec<Real>,
        pressure: Vec<Real>,
        temperature: Vec<Real>,
    ) -> AtmosphereProfile {
        let n = density.len();
        info!(
            npts = cal.grid.npts(),
            %closure,
            r_min = cal.grid.r_min(),
            r_max = cal.grid.r_max(),
            top_density = density[n - 1],
            top_pressure = pressure[n - 1],
            "built hydrostatic profile"
        );

        AtmosphereProfile::from_columns(
            params.composition.species(),
            &params.composition.fractions(),
            cal.radius,
            density,
            pressure,
            temperature,
        )
    }
}

fn validate_parameters(params: &ModelParameters, gravity: Real) -> ModelResult<()> {
    if !params.base_density.is_finite() || params.base_density <= 0.0 {
        return Err(ModelError::InvalidInput {
            what: "base density must be positive and finite",
        });
    }
    if !params.base_pressure.is_finite() || params.base_pressure <= 0.0 {
        return Err(ModelError::InvalidInput {
            what: "base pressure must be positive and finite",
        });
    }
    if !gravity.is_finite() {
        return Err(ModelError::InvalidInput {
            what: "gravity must be finite",
        });
    }
    if params.composition.is_empty() {
        return Err(ModelError::InvalidInput {
            what: "composition must list at least one species",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hs_eos::{GammaLawEos, Species};

    fn params() -> ModelParameters {
        ModelParameters {
            base_density: 1e-3,
            base_pressure: 1e6,
            composition: Composition::pure(Species::He4),
        }
    }

    #[test]
    fn defaults() {
        let eos = GammaLawEos::new(1.4).unwrap();
        let builder = ProfileBuilder::new(&eos);
        assert_eq!(builder.capacity(), DEFAULT_CAPACITY);
        assert_eq!(builder.temperature_guess(), 1000.0);
        assert_eq!(builder.eos().name(), "gamma_law");
    }

    #[test]
    fn single_point_profile_is_the_base() {
        let eos = GammaLawEos::new(1.4).unwrap();
        let profile = ProfileBuilder::new(&eos)
            .build(1, 0.0, 10.0, &params(), ClosureMode::Isentropic, -1e3)
            .unwrap();
        assert_eq!(profile.len(), 1);
        assert_eq!(profile.radius(), &[5.0]);
        assert_eq!(profile.density(), &[1e-3]);
        assert_eq!(profile.pressure(), &[1e6]);
    }

    #[test]
    fn non_finite_gravity_rejected() {
        let eos = GammaLawEos::new(1.4).unwrap();
        let err = ProfileBuilder::new(&eos)
            .build(10, 0.0, 10.0, &params(), ClosureMode::Isothermal, f64::NAN)
            .unwrap_err();
        assert!(matches!(err, ModelError::InvalidInput { .. }));
    }

    #[test]
    fn capacity_checked_before_inputs() {
        let eos = GammaLawEos::new(1.4).unwrap();
        let mut bad = params();
        bad.base_density = -1.0;
        let err = ProfileBuilder::new(&eos)
            .with_capacity(5)
            .build(6, 0.0, 10.0, &bad, ClosureMode::Isothermal, -1.0)
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::CapacityExceeded {
                requested: 6,
                capacity: 5
            }
        );
    }
}
