//! # impact_cli
//!
//! Command-line driver for `impact_core`. Reads JSON inputs, runs the engine
//! and prints JSON to stdout. Logs go to stderr and honor `RUST_LOG`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use impact_core::regression::DatasetCategory;
use impact_core::{
    calculate_project, CalcError, CalcResult, EngineSettings, GoldenDataset, ProductCatalog, ProjectInventory,
    RegressionHarness,
};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Project the environmental and financial impact of switching to reusable foodware."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate every report for one inventory.
    Calculate {
        /// Project inventory JSON
        #[arg(long)]
        inventory: PathBuf,
        /// Product catalog JSON
        #[arg(long)]
        catalog: PathBuf,
        /// Engine settings JSON
        #[arg(long)]
        settings: Option<PathBuf>,
    },
    /// Capture a golden dataset from a live run.
    Capture {
        #[arg(long)]
        inventory: PathBuf,
        #[arg(long)]
        catalog: PathBuf,
        /// Dataset id
        #[arg(long)]
        id: String,
        /// project, single_use, reusable, dishwashing, bottle_station or transportation
        #[arg(long, default_value = "project")]
        category: String,
        /// Overrides the settings' default tolerance
        #[arg(long)]
        tolerance: Option<f64>,
        #[arg(long)]
        settings: Option<PathBuf>,
    },
    /// Replay golden datasets; exits 1 if any fails.
    Regress {
        /// JSON array of golden datasets
        #[arg(long)]
        datasets: PathBuf,
        #[arg(long)]
        catalog: PathBuf,
        #[arg(long)]
        settings: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    if let Err(error) = init_tracing() {
        eprintln!("error: {error}");
        return ExitCode::FAILURE;
    }

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("error [{}]: {error}", error.error_code());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("impact_core=info".parse()?)
                .add_directive("impact_cli=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Returns `Ok(false)` when a regression run has failures.
fn run(cli: Cli) -> CalcResult<bool> {
    match cli.command {
        Command::Calculate {
            inventory,
            catalog,
            settings,
        } => {
            let inventory: ProjectInventory = load_json(&inventory)?;
            let catalog: ProductCatalog = load_json(&catalog)?;
            let settings = load_settings(settings.as_deref())?;
            let results = calculate_project(&inventory, &catalog, &settings)?;
            print_json(&results)?;
            Ok(true)
        }
        Command::Capture {
            inventory,
            catalog,
            id,
            category,
            tolerance,
            settings,
        } => {
            let category: DatasetCategory = category.parse()?;
            let inventory: ProjectInventory = load_json(&inventory)?;
            let harness = RegressionHarness::new(load_json(&catalog)?, load_settings(settings.as_deref())?);
            let mut dataset = GoldenDataset::capture(id, category, &inventory, &harness)?;
            if let Some(tolerance) = tolerance {
                dataset = dataset.with_tolerance(tolerance);
            }
            dataset.validate()?;
            print_json(&dataset)?;
            Ok(true)
        }
        Command::Regress {
            datasets,
            catalog,
            settings,
        } => {
            let datasets: Vec<GoldenDataset> = load_json(&datasets)?;
            let harness = RegressionHarness::new(load_json(&catalog)?, load_settings(settings.as_deref())?);
            let report = harness.run_batch(&datasets);
            info!(run_id = %report.run_id, passed = report.passed, failed = report.failed, "regression complete");
            print_json(&report)?;
            Ok(report.all_passed())
        }
    }
}

fn load_settings(path: Option<&Path>) -> CalcResult<EngineSettings> {
    path.map_or_else(|| Ok(EngineSettings::default()), load_json::<EngineSettings>)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> CalcResult<T> {
    let data = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(serde_json::from_str(&data)?)
}

fn print_json<T: Serialize>(value: &T) -> CalcResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
