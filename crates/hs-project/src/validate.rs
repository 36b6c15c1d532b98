//! Problem validation logic.

use crate::schema::{CompositionDef, EosDef, ModelDef, ProblemDef};
use hs_eos::Species;
use std::collections::HashSet;

/// Newest problem file version this crate reads.
pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_problem(problem: &ProblemDef) -> Result<(), ValidationError> {
    if problem.version == 0 || problem.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: problem.version,
        });
    }

    if !problem.gravity.is_finite() {
        return Err(invalid("gravity", problem.gravity, "must be finite"));
    }

    if let Some(t) = problem.temperature_guess
        && (!t.is_finite() || t <= 0.0)
    {
        return Err(invalid("temperature_guess", t, "must be positive"));
    }

    if problem.capacity == Some(0) {
        return Err(invalid("capacity", 0, "must be at least 1"));
    }

    match problem.eos {
        EosDef::GammaLaw { gamma, .. } => {
            if !gamma.is_finite() || gamma <= 1.0 {
                return Err(invalid("eos.gamma", gamma, "must be greater than 1"));
            }
        }
        EosDef::IdealGasRadiation { .. } => {}
    }

    let mut ids = HashSet::new();
    for model in &problem.models {
        if !ids.insert(&model.id) {
            return Err(ValidationError::DuplicateId {
                id: model.id.clone(),
                context: "models".to_string(),
            });
        }
        validate_model(problem, model)?;
    }

    Ok(())
}

fn validate_model(problem: &ProblemDef, model: &ModelDef) -> Result<(), ValidationError> {
    let field = |name: &str| format!("models.{}.{}", model.id, name);

    if model.grid.npts == 0 {
        return Err(invalid(field("grid.npts"), 0, "must be at least 1"));
    }
    if let Some(capacity) = problem.capacity
        && model.grid.npts > capacity
    {
        return Err(invalid(
            field("grid.npts"),
            model.grid.npts,
            &format!("exceeds capacity {capacity}"),
        ));
    }
    if !model.grid.r_min.is_finite() || !model.grid.r_max.is_finite() {
        return Err(invalid(
            field("grid"),
            format!("[{}, {}]", model.grid.r_min, model.grid.r_max),
            "bounds must be finite",
        ));
    }
    if model.grid.r_max <= model.grid.r_min {
        return Err(invalid(
            field("grid.r_max"),
            model.grid.r_max,
            "must be greater than r_min",
        ));
    }
    if !model.base.density.is_finite() || model.base.density <= 0.0 {
        return Err(invalid(field("base.density"), model.base.density, "must be positive"));
    }
    if !model.base.pressure.is_finite() || model.base.pressure <= 0.0 {
        return Err(invalid(
            field("base.pressure"),
            model.base.pressure,
            "must be positive",
        ));
    }

    match &model.composition {
        CompositionDef::Pure { species } => {
            validate_species(&field("composition"), species)?;
        }
        CompositionDef::Mixture { fractions } => {
            if fractions.is_empty() {
                return Err(invalid(field("composition"), "[]", "no species listed"));
            }
            let mut seen = HashSet::new();
            for item in fractions {
                let sp = validate_species(&field("composition"), &item.species)?;
                if !seen.insert(sp) {
                    return Err(ValidationError::DuplicateId {
                        id: item.species.clone(),
                        context: field("composition"),
                    });
                }
                if !item.mass_fraction.is_finite() || item.mass_fraction < 0.0 {
                    return Err(invalid(
                        field(&format!("composition.{}", item.species)),
                        item.mass_fraction,
                        "mass fraction must be non-negative",
                    ));
                }
            }
        }
    }

    Ok(())
}

fn validate_species(field: &str, key: &str) -> Result<Species, ValidationError> {
    key.parse::<Species>()
        .map_err(|reason| invalid(field, key, reason))
}

fn invalid(
    field: impl Into<String>,
    value: impl ToString,
    reason: &str,
) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.into(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::*;

    fn problem() -> ProblemDef {
        ProblemDef {
            version: 1,
            name: "test".to_string(),
            units: UnitSystemDef::Cgs,
            gravity: -2.45e10,
            eos: EosDef::GammaLaw {
                gamma: 5.0 / 3.0,
                ionization: IonizationDef::Neutral,
            },
            temperature_guess: None,
            capacity: None,
            models: vec![ModelDef {
                id: "m1".to_string(),
                grid: GridDef {
                    npts: 100,
                    r_min: 0.0,
                    r_max: 1e8,
                },
                base: BaseDef {
                    density: 1e7,
                    pressure: 2.4e25,
                },
                composition: CompositionDef::Pure {
                    species: "He4".to_string(),
                },
                closure: ClosureDef::Isothermal,
            }],
        }
    }

    #[test]
    fn valid_problem_passes() {
        validate_problem(&problem()).unwrap();
    }

    #[test]
    fn future_version_rejected() {
        let mut p = problem();
        p.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_problem(&p),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn duplicate_model_ids_rejected() {
        let mut p = problem();
        p.models.push(p.models[0].clone());
        assert!(matches!(
            validate_problem(&p),
            Err(ValidationError::DuplicateId { .. })
        ));
    }

    #[test]
    fn unknown_species_rejected() {
        let mut p = problem();
        p.models[0].composition = CompositionDef::Pure {
            species: "Xx99".to_string(),
        };
        let err = validate_problem(&p).unwrap_err();
        assert!(err.to_string().contains("Xx99"));
    }

    #[test]
    fn degenerate_gamma_rejected() {
        let mut p = problem();
        p.eos = EosDef::GammaLaw {
            gamma: 1.0,
            ionization: IonizationDef::Neutral,
        };
        assert!(validate_problem(&p).is_err());
    }

    #[test]
    fn inverted_grid_rejected() {
        let mut p = problem();
        p.models[0].grid.r_max = -1.0;
        let err = validate_problem(&p).unwrap_err();
        assert!(err.to_string().contains("models.m1.grid.r_max"));
    }

    #[test]
    fn npts_over_capacity_rejected() {
        let mut p = problem();
        p.capacity = Some(50);
        assert!(validate_problem(&p).is_err());
    }

    #[test]
    fn repeated_mixture_species_rejected() {
        let mut p = problem();
        p.models[0].composition = CompositionDef::Mixture {
            fractions: vec![
                SpeciesFractionDef {
                    species: "He4".to_string(),
                    mass_fraction: 0.5,
                },
                SpeciesFractionDef {
                    species: "he4".to_string(),
                    mass_fraction: 0.5,
                },
            ],
        };
        assert!(matches!(
            validate_problem(&p),
            Err(ValidationError::DuplicateId { .. })
        ));
    }
}
