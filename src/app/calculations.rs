//! # Calculations
//!
//! Delegated functions from `App` to run hysteresis sweeps and potential profiles, and to write
//! their results to the results directory
//!

use super::{error::FerroDiodeError, Configuration, ProgressTracker};
use crate::{
    postprocessor::LoopSummary,
    potential::{PotentialKind, Profile, ProfileGrid},
    solver::{SelfConsistentSolver, Sweep},
    units,
};
use nalgebra::RealField;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

/// Runs the history-dependent sweep, reporting progress on `term`
pub(crate) fn sweep_calculation<T: Copy + RealField>(
    solver: &mut SelfConsistentSolver<T>,
    config: &Configuration<T>,
    results: &Path,
    name: &str,
    term: &console::Term,
) -> Result<(), FerroDiodeError> {
    let voltages = config.sweep.voltages().build()?;
    tracing::info!("Hysteresis sweep over {} points", voltages.len());
    let mut tracker = ProgressTracker::new(term, voltages.len());
    let sweep = solver.solve_sweep_with_observer(&voltages, &mut tracker)?;
    if tracker.not_converged() > 0 {
        tracing::warn!(
            "{} of {} points did not converge",
            tracker.not_converged(),
            voltages.len()
        );
    }

    let summary = LoopSummary::from_sweep(&sweep);
    if let Some(voltage) = summary.mean_coercive_voltage() {
        tracing::info!("Mean coercive voltage {} V", voltage);
    }
    if let Some(polarization) = summary.mean_remanent_polarization() {
        tracing::info!("Mean remanent polarization {} uC/cm^2", polarization);
    }
    tracing::info!("Loop area {} uC/cm^2 V", summary.loop_area.abs());

    write_sweep(&results_path(results, name, "sweep"), name, &sweep)
}

/// Runs every point of the sweep from the initial ensemble, in parallel
pub(crate) fn independent_calculation<T: Copy + RealField + Send + Sync>(
    solver: &SelfConsistentSolver<T>,
    config: &Configuration<T>,
    results: &Path,
    name: &str,
) -> Result<(), FerroDiodeError> {
    let voltages = config.sweep.voltages().build()?;
    tracing::info!("Independent calculation over {} points", voltages.len());
    let sweep = solver.solve_independent(&voltages)?;
    write_sweep(&results_path(results, name, "independent"), name, &sweep)
}

/// Solves at the configured bias and samples every potential along the stack
pub(crate) fn profile_calculation<T: Copy + RealField>(
    solver: &mut SelfConsistentSolver<T>,
    config: &Configuration<T>,
    results: &Path,
    name: &str,
) -> Result<(), FerroDiodeError> {
    let solution = solver.solve(config.profile.voltage)?;
    let potential = solver.potential();
    let grid = ProfileGrid::padded(
        potential,
        units::nm_to_bohr(config.profile.padding),
        units::nm_to_bohr(config.profile.resolution),
    )?;
    tracing::info!(
        "Sampling the potential at {} V on {} points",
        solution.voltage,
        grid.len()
    );
    let profiles = PotentialKind::ALL
        .iter()
        .map(|&kind| potential.profile(kind, &grid))
        .collect::<Vec<_>>();
    write_profiles(&results_path(results, name, "profile"), name, &profiles)
}

fn results_path(results: &Path, name: &str, calculation: &str) -> PathBuf {
    results.join(format!("{}_{}.dat", name, calculation))
}

fn create(path: &Path) -> Result<std::fs::File, FerroDiodeError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(std::fs::File::create(path)?)
}

fn write_sweep<T: Copy + RealField>(
    path: &Path,
    name: &str,
    sweep: &Sweep<T>,
) -> Result<(), FerroDiodeError> {
    let mut file = create(path)?;
    writeln!(file, "# {} written {}", name, chrono::Local::now().to_rfc3339())?;
    writeln!(
        file,
        "# voltage (V), polarization (uC/cm^2), change (uC/cm^2), field (MV/cm), iterations, converged"
    )?;
    for solution in sweep.iter() {
        writeln!(
            file,
            "{}, {}, {}, {}, {}, {}",
            solution.voltage,
            solution.polarization_uc_per_cm2(),
            solution.change_uc_per_cm2(),
            solution.field_mv_per_cm(),
            solution.iterations,
            solution.is_converged()
        )?;
    }
    tracing::info!("Wrote {}", path.display());
    Ok(())
}

fn write_profiles<T: Copy + RealField>(
    path: &Path,
    name: &str,
    profiles: &[Profile<T>],
) -> Result<(), FerroDiodeError> {
    let mut file = create(path)?;
    writeln!(file, "# {} written {}", name, chrono::Local::now().to_rfc3339())?;
    let columns = profiles
        .iter()
        .map(|profile| format!("{} (eV)", profile.kind))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(file, "# position (nm), {}", columns)?;

    let first = match profiles.first() {
        Some(first) => first,
        None => return Ok(()),
    };
    for (index, &position) in first.positions.iter().enumerate() {
        let values = profiles
            .iter()
            .map(|profile| units::hartree_to_ev(profile.values[index]).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(file, "{}, {}", units::bohr_to_nm(position), values)?;
    }
    tracing::info!("Wrote {}", path.display());
    Ok(())
}
