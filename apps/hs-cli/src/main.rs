use clap::{Parser, Subcommand, ValueEnum};
use hs_core::units::{cgs, m};
use hs_model::{AtmosphereProfile, Field};
use hs_project::{ProblemDef, ProjectError};
use std::path::{Path, PathBuf};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "hydrostat")]
#[command(about = "Hydrostatic atmosphere profiles for simulation initial conditions", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate problem file syntax and values
    Validate {
        /// Path to the problem file (YAML or JSON)
        problem_path: PathBuf,
    },
    /// List models in a problem
    Models {
        /// Path to the problem file (YAML or JSON)
        problem_path: PathBuf,
    },
    /// Build profiles and write them out
    Build {
        /// Path to the problem file (YAML or JSON)
        problem_path: PathBuf,
        /// Only build this model (defaults to all)
        #[arg(long)]
        model: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Solve densities and temperatures on the thread pool
        #[arg(long)]
        parallel: bool,
    },
    /// Print the interpolated state at a radius
    Interp {
        /// Path to the problem file (YAML or JSON)
        problem_path: PathBuf,
        /// Model ID
        model_id: String,
        /// Radius in the problem's length unit
        radius: f64,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logging setup failed: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };
    // stderr, so profiles can be piped from stdout
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Validate { problem_path } => cmd_validate(&problem_path),
        Commands::Models { problem_path } => cmd_models(&problem_path),
        Commands::Build {
            problem_path,
            model,
            format,
            output,
            parallel,
        } => cmd_build(
            &problem_path,
            model.as_deref(),
            format,
            output.as_deref(),
            parallel,
        ),
        Commands::Interp {
            problem_path,
            model_id,
            radius,
        } => cmd_interp(&problem_path, &model_id, radius),
    }
}

fn cmd_validate(problem_path: &Path) -> CliResult<()> {
    println!("Validating problem: {}", problem_path.display());
    let problem = hs_project::load(problem_path)?;
    println!(
        "✓ Problem '{}' is valid ({} models)",
        problem.name,
        problem.models.len()
    );
    Ok(())
}

fn cmd_models(problem_path: &Path) -> CliResult<()> {
    let problem = hs_project::load(problem_path)?;

    if problem.models.is_empty() {
        println!("No models found in problem");
    } else {
        println!("Models in problem:");
        for model in &problem.models {
            println!(
                "  {} - {:?}, {} points over [{}, {}]",
                model.id, model.closure, model.grid.npts, model.grid.r_min, model.grid.r_max
            );
        }
    }
    Ok(())
}

fn cmd_build(
    problem_path: &Path,
    model: Option<&str>,
    format: Format,
    output: Option<&Path>,
    parallel: bool,
) -> CliResult<()> {
    let problem = hs_project::load(problem_path)?;
    debug!(problem = %problem.name, ?model, parallel, "building profiles");

    let rendered = match model {
        Some(id) => {
            let profile = hs_project::build_model(&problem, id, parallel)?;
            match format {
                Format::Csv => profile.to_csv(),
                Format::Json => serde_json::to_string_pretty(&profile)?,
            }
        }
        None => {
            let set = hs_project::build_problem(&problem, parallel)?;
            match format {
                Format::Csv => {
                    let mut csv = String::new();
                    for (id, profile) in set.iter() {
                        csv.push_str(&format!("# model: {}\n", id));
                        csv.push_str(&profile.to_csv());
                    }
                    csv
                }
                Format::Json => serde_json::to_string_pretty(&set)?,
            }
        }
    };

    if let Some(path) = output {
        std::fs::write(path, rendered)?;
        println!("✓ Wrote profiles to {}", path.display());
    } else {
        print!("{}", rendered);
    }
    Ok(())
}

fn cmd_interp(problem_path: &Path, model_id: &str, radius: f64) -> CliResult<()> {
    let problem = hs_project::load(problem_path)?;
    let profile = hs_project::build_model(&problem, model_id, false)?;
    // profiles are stored in CGS
    let r = radius_in_cgs(&problem, radius);
    print_state(&profile, r);
    Ok(())
}

fn radius_in_cgs(problem: &ProblemDef, radius: f64) -> f64 {
    match problem.units {
        hs_project::UnitSystemDef::Cgs => radius,
        hs_project::UnitSystemDef::Si => cgs::length(m(radius)),
    }
}

fn print_state(profile: &AtmosphereProfile, r: f64) {
    let value = |field| profile.interpolate(r, field).unwrap_or(f64::NAN);
    println!("radius      = {:e} cm", r);
    println!("density     = {:e} g/cm^3", value(Field::Density));
    println!("pressure    = {:e} dyn/cm^2", value(Field::Pressure));
    println!("temperature = {:e} K", value(Field::Temperature));
    for (k, sp) in profile.species().iter().enumerate() {
        println!("X({:<4})     = {}", sp.key(), value(Field::MassFraction(k)));
    }
}
