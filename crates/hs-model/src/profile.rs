//! The atmosphere profile table.

use hs_core::numeric::Real;
use hs_eos::Species;
use std::fmt::Write as _;

/// Column selector for profile lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Radius,
    Density,
    Pressure,
    Temperature,
    /// Mass fraction of the k-th species column.
    MassFraction(usize),
}

/// One row of the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint<'a> {
    pub index: usize,
    pub radius: Real,
    pub density: Real,
    pub pressure: Real,
    pub temperature: Real,
    pub mass_fractions: &'a [Real],
}

/// Hydrostatic profile: `len()` points ordered by increasing radius, index 0
/// at the base.
///
/// Radii are evenly spaced cell centres; density and pressure are positive
/// everywhere. Built only by [`ProfileBuilder`](crate::ProfileBuilder).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtmosphereProfile {
    species: Vec<Species>,
    radius: Vec<Real>,
    density: Vec<Real>,
    pressure: Vec<Real>,
    temperature: Vec<Real>,
    /// Row-major `[point][species]`.
    mass_fractions: Vec<Real>,
}

impl AtmosphereProfile {
    /// Assemble from columns of equal length; every row gets `fractions`.
    pub(crate) fn from_columns(
        species: Vec<Species>,
        fractions: &[Real],
        radius: Vec<Real>,
        density: Vec<Real>,
        pressure: Vec<Real>,
        temperature: Vec<Real>,
    ) -> Self {
        debug_assert_eq!(species.len(), fractions.len());
        debug_assert_eq!(radius.len(), density.len());
        debug_assert_eq!(radius.len(), pressure.len());
        debug_assert_eq!(radius.len(), temperature.len());

        let mass_fractions = fractions.repeat(radius.len());
        Self {
            species,
            radius,
            density,
            pressure,
            temperature,
            mass_fractions,
        }
    }

    pub fn len(&self) -> usize {
        self.radius.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radius.is_empty()
    }

    /// Species in mass-fraction column order.
    pub fn species(&self) -> &[Species] {
        &self.species
    }

    pub fn radius(&self) -> &[Real] {
        &self.radius
    }

    pub fn density(&self) -> &[Real] {
        &self.density
    }

    pub fn pressure(&self) -> &[Real] {
        &self.pressure
    }

    pub fn temperature(&self) -> &[Real] {
        &self.temperature
    }

    /// Mass fractions at point `index`, one per species.
    pub fn mass_fractions(&self, index: usize) -> Option<&[Real]> {
        let n = self.species.len();
        self.mass_fractions.get(index * n..(index + 1) * n)
    }

    /// Value of `field` at point `index`.
    pub fn value(&self, index: usize, field: Field) -> Option<Real> {
        match field {
            Field::Radius => self.radius.get(index).copied(),
            Field::Density => self.density.get(index).copied(),
            Field::Pressure => self.pressure.get(index).copied(),
            Field::Temperature => self.temperature.get(index).copied(),
            Field::MassFraction(k) => self.mass_fractions(index)?.get(k).copied(),
        }
    }

    pub fn point(&self, index: usize) -> Option<ProfilePoint<'_>> {
        Some(ProfilePoint {
            index,
            radius: *self.radius.get(index)?,
            density: self.density[index],
            pressure: self.pressure[index],
            temperature: self.temperature[index],
            mass_fractions: self.mass_fractions(index)?,
        })
    }

    pub fn points(&self) -> impl Iterator<Item = ProfilePoint<'_>> + '_ {
        (0..self.len()).filter_map(|i| self.point(i))
    }

    /// Linear interpolation of `field` at radius `r`.
    ///
    /// Outside the span of cell centres the end value is returned. `None` only
    /// for an unknown species column.
    pub fn interpolate(&self, r: Real, field: Field) -> Option<Real> {
        let n = self.len();
        if n == 0 {
            return None;
        }
        if r <= self.radius[0] {
            return self.value(0, field);
        }
        if r >= self.radius[n - 1] {
            return self.value(n - 1, field);
        }

        // first centre strictly above r; 1 <= hi <= n-1 here
        let hi = self.radius.partition_point(|&ri| ri <= r);
        let lo = hi - 1;
        let (r_lo, r_hi) = (self.radius[lo], self.radius[hi]);
        let (v_lo, v_hi) = (self.value(lo, field)?, self.value(hi, field)?);
        let w = (r - r_lo) / (r_hi - r_lo);
        Some(v_lo + w * (v_hi - v_lo))
    }

    /// Render as CSV with a header row. Species columns are named `X(<key>)`.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("radius,density,pressure,temperature");
        for sp in &self.species {
            let _ = write!(csv, ",X({})", sp.key());
        }
        csv.push('\n');

        for p in self.points() {
            let _ = write!(
                csv,
                "{:e},{:e},{:e},{:e}",
                p.radius, p.density, p.pressure, p.temperature
            );
            for x in p.mass_fractions {
                let _ = write!(csv, ",{:e}", x);
            }
            csv.push('\n');
        }
        csv
    }
}
