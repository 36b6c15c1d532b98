//! hs-project: problem file format, validation and profile construction.

pub mod compile;
pub mod schema;
pub mod validate;

pub use compile::{
    CompiledModel, build_model, build_problem, compile_composition, compile_eos, compile_model,
    configure_builder,
};
pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_problem};

use hs_eos::EosError;
use hs_model::ModelError;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("EOS error: {0}")]
    Eos(#[from] EosError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Failed to build model {model}: {source}")]
    Build { model: String, source: ModelError },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<ProblemDef> {
    let content = std::fs::read_to_string(path)?;
    let problem: ProblemDef = serde_yaml::from_str(&content)?;
    validate_problem(&problem)?;
    Ok(problem)
}

pub fn save_yaml(path: &std::path::Path, problem: &ProblemDef) -> ProjectResult<()> {
    validate_problem(problem)?;
    let content = serde_yaml::to_string(problem)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<ProblemDef> {
    let content = std::fs::read_to_string(path)?;
    let problem: ProblemDef = serde_json::from_str(&content)?;
    validate_problem(&problem)?;
    Ok(problem)
}

pub fn save_json(path: &std::path::Path, problem: &ProblemDef) -> ProjectResult<()> {
    validate_problem(problem)?;
    let content = serde_json::to_string_pretty(problem)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` as JSON, anything else as YAML.
pub fn load(path: &std::path::Path) -> ProjectResult<ProblemDef> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        _ => load_yaml(path),
    }
}
