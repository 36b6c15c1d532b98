//! Three-pass parallel build.
//!
//! Densities are closed form per point and temperatures depend only on their
//! own point once pressure is known, so both run on the rayon pool. Only the
//! pressure recurrence stays sequential. The result is bit-identical to
//! [`ProfileBuilder::build`], and a failing build reports the same error: the
//! lowest failing point wins, EOS failures included.

use crate::builder::{ModelParameters, ProfileBuilder};
use crate::closure::{ClosureMode, hydrostatic_pressure};
use crate::error::{ModelError, ModelResult};
use crate::profile::AtmosphereProfile;
use hs_core::numeric::Real;
use rayon::prelude::*;

impl ProfileBuilder<'_> {
    /// Parallel counterpart of [`ProfileBuilder::build`].
    pub fn build_parallel(
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

        // Pass 1: densities
        let densities: Vec<ModelResult<Real>> = (1..npts)
            .into_par_iter()
            .map(|j| cal.law.density(&cal.base, cal.radius[j], gravity, j))
            .collect();

        // Pass 2: pressure recurrence, stopping at the first bad point
        let mut density = Vec::with_capacity(npts);
        let mut pressure = Vec::with_capacity(npts);
        density.push(cal.base.density);
        pressure.push(cal.base.pressure);

        let mut arithmetic_failure: Option<ModelError> = None;
        for (offset, rho) in densities.into_iter().enumerate() {
            let j = offset + 1;
            let step = rho.and_then(|rho| {
                hydrostatic_pressure(pressure[j - 1], density[j - 1], rho, dx, gravity, j)
                    .map(|p| (rho, p))
            });
            match step {
                Ok((rho, p)) => {
                    density.push(rho);
                    pressure.push(p);
                }
                Err(err) => {
                    arithmetic_failure = Some(err);
                    break;
                }
            }
        }

        // Pass 3: temperatures for every point that made it through pass 2
        let temperatures: Vec<ModelResult<Real>> = (1..density.len())
            .into_par_iter()
            .map(|j| self.temperature(density[j], pressure[j], comp, j))
            .collect();

        let mut temperature = Vec::with_capacity(npts);
        temperature.push(cal.base_temperature);
        for t in temperatures {
            // any EOS failure here sits below the arithmetic failure index
            temperature.push(t?);
        }
        if let Some(err) = arithmetic_failure {
            return Err(err);
        }

        Ok(self.finish(cal, params, closure, density, pressure, temperature))
    }
}
