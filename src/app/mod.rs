//! # App
//!
//! The command line entry point. A device file is read, the domain ensemble is sampled and the
//! requested calculation is dispatched, with results written to the `results` directory.

mod calculations;
mod configuration;
mod error;
mod telemetry;
mod tracker;

pub(crate) use configuration::Configuration;
pub(crate) use tracker::ProgressTracker;

use crate::{
    device::{BuildInfoDesk, Device},
    ferroelectric::DomainEnsemble,
    potential::Potential,
    solver::SolverBuilder,
};
use clap::{ArgEnum, Parser};
use color_eyre::eyre::eyre;
use nalgebra::RealField;
use rand::{rngs::StdRng, SeedableRng};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

const RESULTS_DIRECTORY: &str = "results";

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct App {
    /// The device file
    file_path: Option<PathBuf>,
    #[clap(arg_enum, short, long, default_value = "info")]
    log_level: LogLevel,
    #[clap(arg_enum, short, long, default_value = "sweep")]
    calculation: Calculation,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ArgEnum)]
pub(crate) enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ArgEnum)]
pub(crate) enum Calculation {
    /// A hysteresis sweep carrying the switching history from bias to bias
    Sweep,
    /// The same biases, each solved from the pristine ensemble
    Independent,
    /// The potential profile along the stack at a single bias
    Profile,
}

/// Parses the command line, reads the device and configuration, and runs the requested calculation
pub fn run<T>() -> color_eyre::Result<()>
where
    T: Copy + DeserializeOwned + RealField + Send + Sync,
{
    color_eyre::install()?;
    let cli = App::parse();

    std::fs::create_dir_all(RESULTS_DIRECTORY)?;
    let (subscriber, _guard) = telemetry::get_subscriber(cli.log_level, RESULTS_DIRECTORY);
    telemetry::init_subscriber(subscriber);

    let term = console::Term::stdout();

    let config: Configuration<T> = Configuration::build()?;

    let path = cli
        .file_path
        .ok_or_else(|| eyre!("A file path needs to be passed."))?;
    tracing::info!("Reading device from {}", path.display());
    let device: Device<T> = Device::build(path)?;
    let name = device.name();
    let stack = device.build_device_stack()?;
    let potential = Potential::new(stack)?;

    let mut rng = StdRng::seed_from_u64(config.ensemble.seed);
    let ensemble = DomainEnsemble::sample(&config.ensemble.parameters(), &mut rng)?;

    let mut solver = SolverBuilder::new()
        .with_ensemble(&ensemble)
        .with_potential(&potential)
        .with_convergence_settings(&config.solver)
        .build();

    let results = Path::new(RESULTS_DIRECTORY);
    tracing::info!("Running a {:?} calculation for {}", cli.calculation, name);
    match cli.calculation {
        Calculation::Sweep => {
            calculations::sweep_calculation(&mut solver, &config, results, &name, &term)?
        }
        Calculation::Independent => {
            calculations::independent_calculation(&solver, &config, results, &name)?
        }
        Calculation::Profile => {
            calculations::profile_calculation(&mut solver, &config, results, &name)?
        }
    }

    Ok(())
}
