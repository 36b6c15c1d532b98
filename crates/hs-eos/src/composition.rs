//! Composition by mass fraction.

use crate::error::{EosError, EosResult};
use crate::species::Species;
use hs_core::numeric::Real;

/// How the mean molecular weight counts free electrons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Ionization {
    /// Neutral atoms: mu = abar.
    #[default]
    Neutral,
    /// Fully ionized: 1/mu = sum X (1 + Z) / A.
    Full,
}

/// Composition defined by mass fractions, one per species.
///
/// Fractions are stored exactly as supplied. Making them sum to one is the
/// caller's job; `sum()` is available for checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    items: Vec<(Species, Real)>,
}

impl Composition {
    /// Create a pure-species composition.
    pub fn pure(species: Species) -> Self {
        Self {
            items: vec![(species, 1.0)],
        }
    }

    /// Create a composition from mass fractions.
    ///
    /// Rejects an empty list, repeated species, and fractions that are
    /// negative or non-finite.
    pub fn new_mass_fractions(fractions: Vec<(Species, Real)>) -> EosResult<Self> {
        if fractions.is_empty() {
            return Err(EosError::InvalidArg {
                what: "empty composition",
            });
        }

        for (i, (species, frac)) in fractions.iter().enumerate() {
            if !frac.is_finite() {
                return Err(EosError::NonPhysical {
                    what: "non-finite mass fraction",
                });
            }
            if *frac < 0.0 {
                return Err(EosError::NonPhysical {
                    what: "negative mass fraction",
                });
            }
            if fractions[..i].iter().any(|(s, _)| s == species) {
                return Err(EosError::InvalidArg {
                    what: "species listed twice",
                });
            }
        }

        Ok(Self { items: fractions })
    }

    /// Get mass fraction of a species (0.0 if not present).
    pub fn mass_fraction(&self, species: Species) -> Real {
        self.items
            .iter()
            .find(|(s, _)| *s == species)
            .map(|(_, x)| *x)
            .unwrap_or(0.0)
    }

    /// Iterate over species and their mass fractions, in the supplied order.
    pub fn iter(&self) -> impl Iterator<Item = (Species, Real)> + '_ {
        self.items.iter().copied()
    }

    /// Species in column order.
    pub fn species(&self) -> Vec<Species> {
        self.items.iter().map(|(s, _)| *s).collect()
    }

    /// Mass fractions in column order.
    pub fn fractions(&self) -> Vec<Real> {
        self.items.iter().map(|(_, x)| *x).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn sum(&self) -> Real {
        self.items.iter().map(|(_, x)| x).sum()
    }

    /// Mean mass number: 1/abar = sum X/A.
    pub fn abar(&self) -> Real {
        let inv: Real = self
            .items
            .iter()
            .map(|(s, x)| x / s.mass_number())
            .sum();
        1.0 / inv
    }

    /// Mean charge: zbar = abar * sum X Z / A.
    pub fn zbar(&self) -> Real {
        let zsum: Real = self
            .items
            .iter()
            .map(|(s, x)| x * s.charge() / s.mass_number())
            .sum();
        self.abar() * zsum
    }

    /// Mean molecular weight in atomic mass units.
    pub fn mean_molecular_weight(&self, ionization: Ionization) -> Real {
        match ionization {
            Ionization::Neutral => self.abar(),
            Ionization::Full => {
                let inv: Real = self
                    .items
                    .iter()
                    .map(|(s, x)| x * (1.0 + s.charge()) / s.mass_number())
                    .sum();
                1.0 / inv
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hs_core::numeric::{Tolerances, nearly_equal};

    #[test]
    fn pure_composition() {
        let comp = Composition::pure(Species::He4);
        assert_eq!(comp.mass_fraction(Species::He4), 1.0);
        assert_eq!(comp.mass_fraction(Species::C12), 0.0);
        assert_eq!(comp.len(), 1);
    }

    #[test]
    fn fractions_are_not_renormalized() {
        let comp =
            Composition::new_mass_fractions(vec![(Species::C12, 0.3), (Species::O16, 0.6)])
                .unwrap();
        assert_eq!(comp.fractions(), vec![0.3, 0.6]);
        assert!((comp.sum() - 0.9).abs() < 1e-15);
    }

    #[test]
    fn column_order_follows_input() {
        let comp =
            Composition::new_mass_fractions(vec![(Species::O16, 0.5), (Species::C12, 0.5)])
                .unwrap();
        assert_eq!(comp.species(), vec![Species::O16, Species::C12]);
    }

    #[test]
    fn invalid_inputs_rejected() {
        assert!(Composition::new_mass_fractions(vec![]).is_err());
        assert!(Composition::new_mass_fractions(vec![(Species::He4, -0.1)]).is_err());
        assert!(Composition::new_mass_fractions(vec![(Species::He4, f64::NAN)]).is_err());
        assert!(
            Composition::new_mass_fractions(vec![(Species::He4, 0.5), (Species::He4, 0.5)])
                .is_err()
        );
    }

    #[test]
    fn helium_molecular_weights() {
        let comp = Composition::pure(Species::He4);
        let tol = Tolerances::default();
        assert!(nearly_equal(comp.abar(), 4.0, tol));
        assert!(nearly_equal(comp.zbar(), 2.0, tol));
        assert!(nearly_equal(comp.mean_molecular_weight(Ionization::Neutral), 4.0, tol));
        assert!(nearly_equal(
            comp.mean_molecular_weight(Ionization::Full),
            4.0 / 3.0,
            tol
        ));
    }

    #[test]
    fn carbon_oxygen_abar() {
        let comp =
            Composition::new_mass_fractions(vec![(Species::C12, 0.5), (Species::O16, 0.5)])
                .unwrap();
        // 1/abar = 0.5/12 + 0.5/16
        let expected = 1.0 / (0.5 / 12.0 + 0.5 / 16.0);
        assert!(nearly_equal(comp.abar(), expected, Tolerances::default()));
    }
}
