//! Turn a problem definition into builder inputs and profiles.

use crate::schema::{
    ClosureDef, CompositionDef, EosDef, IonizationDef, ModelDef, ProblemDef, UnitSystemDef,
};
use crate::{ProjectError, ProjectResult};
use hs_core::numeric::Real;
use hs_core::units::{cgs, kg_per_m3, m, mps2, pa};
use hs_eos::{Composition, EquationOfState, GammaLawEos, IdealGasRadiationEos, Ionization, Species};
use hs_model::{ClosureMode, ModelParameters, ProfileBuilder, ProfileSet};
use tracing::{info, warn};

/// Mass fractions further than this from unity are reported.
const COMPOSITION_SUM_TOL: Real = 1e-6;

/// One model with every quantity in CGS.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledModel {
    pub id: String,
    pub npts: usize,
    pub r_min: Real,
    pub r_max: Real,
    pub params: ModelParameters,
    pub closure: ClosureMode,
    pub gravity: Real,
}

impl From<IonizationDef> for Ionization {
    fn from(def: IonizationDef) -> Self {
        match def {
            IonizationDef::Neutral => Ionization::Neutral,
            IonizationDef::Full => Ionization::Full,
        }
    }
}

impl From<ClosureDef> for ClosureMode {
    fn from(def: ClosureDef) -> Self {
        match def {
            ClosureDef::Isothermal => ClosureMode::Isothermal,
            ClosureDef::Isentropic => ClosureMode::Isentropic,
        }
    }
}

pub fn compile_eos(def: &EosDef) -> ProjectResult<Box<dyn EquationOfState>> {
    Ok(match *def {
        EosDef::GammaLaw { gamma, ionization } => {
            Box::new(GammaLawEos::new(gamma)?.with_ionization(ionization.into()))
        }
        EosDef::IdealGasRadiation { ionization } => {
            Box::new(IdealGasRadiationEos::new(ionization.into()))
        }
    })
}

pub fn compile_composition(def: &CompositionDef) -> ProjectResult<Composition> {
    let parse = |key: &str| {
        key.parse::<Species>()
            .map_err(|_| ProjectError::UnknownSpecies(key.to_string()))
    };
    match def {
        CompositionDef::Pure { species } => Ok(Composition::pure(parse(species)?)),
        CompositionDef::Mixture { fractions } => {
            let items = fractions
                .iter()
                .map(|f| Ok((parse(&f.species)?, f.mass_fraction)))
                .collect::<ProjectResult<Vec<_>>>()?;
            Ok(Composition::new_mass_fractions(items)?)
        }
    }
}

pub fn compile_model(problem: &ProblemDef, model: &ModelDef) -> ProjectResult<CompiledModel> {
    let composition = compile_composition(&model.composition)?;
    let sum = composition.sum();
    if (sum - 1.0).abs() > COMPOSITION_SUM_TOL {
        warn!(model = %model.id, sum, "mass fractions do not sum to one");
    }

    let (r_min, r_max, density, pressure, gravity) = match problem.units {
        UnitSystemDef::Cgs => (
            model.grid.r_min,
            model.grid.r_max,
            model.base.density,
            model.base.pressure,
            problem.gravity,
        ),
        UnitSystemDef::Si => (
            cgs::length(m(model.grid.r_min)),
            cgs::length(m(model.grid.r_max)),
            cgs::density(kg_per_m3(model.base.density)),
            cgs::pressure(pa(model.base.pressure)),
            cgs::accel(mps2(problem.gravity)),
        ),
    };

    Ok(CompiledModel {
        id: model.id.clone(),
        npts: model.grid.npts,
        r_min,
        r_max,
        params: ModelParameters {
            base_density: density,
            base_pressure: pressure,
            composition,
        },
        closure: model.closure.into(),
        gravity,
    })
}

/// Builder configured from the problem's optional overrides.
pub fn configure_builder<'a>(
    problem: &ProblemDef,
    eos: &'a dyn EquationOfState,
) -> ProfileBuilder<'a> {
    let mut builder = ProfileBuilder::new(eos);
    if let Some(capacity) = problem.capacity {
        builder = builder.with_capacity(capacity);
    }
    if let Some(t_guess) = problem.temperature_guess {
        builder = builder.with_temperature_guess(t_guess);
    }
    builder
}

/// Build one model of the problem by id.
pub fn build_model(
    problem: &ProblemDef,
    model_id: &str,
    parallel: bool,
) -> ProjectResult<hs_model::AtmosphereProfile> {
    let model = problem
        .models
        .iter()
        .find(|m| m.id == model_id)
        .ok_or_else(|| ProjectError::ModelNotFound(model_id.to_string()))?;
    let eos = compile_eos(&problem.eos)?;
    let builder = configure_builder(problem, eos.as_ref());
    run(&builder, &compile_model(problem, model)?, parallel)
}

/// Build every model of the problem into a set keyed by model id.
pub fn build_problem(problem: &ProblemDef, parallel: bool) -> ProjectResult<ProfileSet> {
    crate::validate_problem(problem)?;
    let eos = compile_eos(&problem.eos)?;
    let builder = configure_builder(problem, eos.as_ref());

    let mut set = ProfileSet::new();
    for model in &problem.models {
        let compiled = compile_model(problem, model)?;
        let profile = run(&builder, &compiled, parallel)?;
        set.insert(compiled.id, profile)?;
    }
    info!(problem = %problem.name, models = set.len(), "problem built");
    Ok(set)
}

fn run(
    builder: &ProfileBuilder<'_>,
    model: &CompiledModel,
    parallel: bool,
) -> ProjectResult<hs_model::AtmosphereProfile> {
    let built = if parallel {
        builder.build_parallel(
            model.npts,
            model.r_min,
            model.r_max,
            &model.params,
            model.closure,
            model.gravity,
        )
    } else {
        builder.build(
            model.npts,
            model.r_min,
            model.r_max,
            &model.params,
            model.closure,
            model.gravity,
        )
    };
    built.map_err(|source| {
        warn!(
            model = %model.id,
            point = ?source.index(),
            error = %source,
            "profile build failed"
        );
        ProjectError::Build {
            model: model.id.clone(),
            source,
        }
    })
}
