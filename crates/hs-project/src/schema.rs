//! Problem file schema.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProblemDef {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub units: UnitSystemDef,
    /// Gravitational acceleration; only its magnitude is used.
    pub gravity: f64,
    pub eos: EosDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_guess: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,
    #[serde(default)]
    pub models: Vec<ModelDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystemDef {
    #[default]
    Cgs,
    Si,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EosDef {
    GammaLaw {
        gamma: f64,
        #[serde(default)]
        ionization: IonizationDef,
    },
    IdealGasRadiation {
        #[serde(default)]
        ionization: IonizationDef,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum IonizationDef {
    #[default]
    Neutral,
    Full,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelDef {
    pub id: String,
    pub grid: GridDef,
    pub base: BaseDef,
    pub composition: CompositionDef,
    pub closure: ClosureDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridDef {
    pub npts: usize,
    pub r_min: f64,
    pub r_max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BaseDef {
    pub density: f64,
    pub pressure: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CompositionDef {
    Pure { species: String },
    Mixture { fractions: Vec<SpeciesFractionDef> },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeciesFractionDef {
    pub species: String,
    pub mass_fraction: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClosureDef {
    Isothermal,
    Isentropic,
}
