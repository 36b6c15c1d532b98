//! Cell-centred radial grid.

use crate::error::{ModelError, ModelResult};
use hs_core::numeric::Real;

/// Uniform grid of `npts` cells spanning `[r_min, r_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    npts: usize,
    r_min: Real,
    r_max: Real,
    dx: Real,
}

impl Grid {
    pub fn new(npts: usize, r_min: Real, r_max: Real) -> ModelResult<Self> {
        if npts == 0 {
            return Err(ModelError::InvalidInput {
                what: "point count must be at least 1",
            });
        }
        if !r_min.is_finite() || !r_max.is_finite() {
            return Err(ModelError::InvalidInput {
                what: "grid bounds must be finite",
            });
        }
        if r_max <= r_min {
            return Err(ModelError::InvalidInput {
                what: "r_max must be greater than r_min",
            });
        }

        let grid = Self {
            npts,
            r_min,
            r_max,
            dx: (r_max - r_min) / npts as Real,
        };
        // cells narrower than the float spacing at r_min collapse onto each other
        if grid.dx <= 0.0 || (1..npts).any(|i| grid.center(i) <= grid.center(i - 1)) {
            return Err(ModelError::InvalidInput {
                what: "cell width too small to resolve distinct radii",
            });
        }
        Ok(grid)
    }

    pub fn npts(&self) -> usize {
        self.npts
    }

    pub fn r_min(&self) -> Real {
        self.r_min
    }

    pub fn r_max(&self) -> Real {
        self.r_max
    }

    /// Cell width.
    pub fn dx(&self) -> Real {
        self.dx
    }

    /// Centre of cell `i`.
    pub fn center(&self, i: usize) -> Real {
        self.r_min + (i as Real + 0.5) * self.dx
    }

    /// All cell centres, base first.
    pub fn centers(&self) -> Vec<Real> {
        let mut r: Vec<Real> = (0..self.npts).map(|i| self.center(i)).collect();
        // base cell pinned explicitly
        r[0] = self.r_min + 0.5 * self.dx;
        r
    }
}
