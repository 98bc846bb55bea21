//! # Solver
//!
//! The self-consistent loop coupling the `Potential` to the `DomainEnsemble`.
//!
//! For a single bias the loop alternates between the electrostatics, which yields the field in
//! the ferroelectric for the current polarization, and the ensemble, which switches the domains
//! driven by that field. The loop terminates when the mean change in polarization falls within
//! the tolerance, or when the iteration budget is exhausted. The latter is not an error: the
//! best available solution is returned, marked as `Status::NotConverged`.
//!
//! The solver owns both the ensemble and the potential, so the state of the ensemble carries
//! over from one bias to the next. Sweeps are therefore history dependent, which is what
//! produces the hysteresis loop.

mod convergence;
mod methods;
mod sweep;

pub use convergence::Convergence;
pub use methods::SelfConsistent;
pub use sweep::{Sweep, SweepObserver, VoltageSweep};

use crate::{ferroelectric::DomainEnsemble, potential::Potential, units};
use nalgebra::RealField;
use std::marker::PhantomData;

/// Builder for the `SelfConsistentSolver`
pub struct SolverBuilder<T, RefEnsemble, RefPotential, RefConvergenceSettings> {
    ensemble: RefEnsemble,
    potential: RefPotential,
    convergence_settings: RefConvergenceSettings,
    marker: PhantomData<T>,
}

impl<T> SolverBuilder<T, (), (), ()> {
    /// Initialise an empty SolverBuilder
    pub fn new() -> Self {
        Self {
            ensemble: (),
            potential: (),
            convergence_settings: (),
            marker: PhantomData,
        }
    }
}

impl<T> Default for SolverBuilder<T, (), (), ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, RefEnsemble, RefPotential, RefConvergenceSettings>
    SolverBuilder<T, RefEnsemble, RefPotential, RefConvergenceSettings>
{
    /// Attach the `DomainEnsemble` in the state the solver should start from
    pub fn with_ensemble<Ensemble>(
        self,
        ensemble: &Ensemble,
    ) -> SolverBuilder<T, &Ensemble, RefPotential, RefConvergenceSettings> {
        SolverBuilder {
            ensemble,
            potential: self.potential,
            convergence_settings: self.convergence_settings,
            marker: PhantomData,
        }
    }

    /// Attach the `Potential` of the device
    pub fn with_potential<Potential>(
        self,
        potential: &Potential,
    ) -> SolverBuilder<T, RefEnsemble, &Potential, RefConvergenceSettings> {
        SolverBuilder {
            ensemble: self.ensemble,
            potential,
            convergence_settings: self.convergence_settings,
            marker: PhantomData,
        }
    }

    /// Attach the iteration budget and tolerance
    pub fn with_convergence_settings<ConvergenceSettings>(
        self,
        convergence_settings: &ConvergenceSettings,
    ) -> SolverBuilder<T, RefEnsemble, RefPotential, &ConvergenceSettings> {
        SolverBuilder {
            ensemble: self.ensemble,
            potential: self.potential,
            convergence_settings,
            marker: PhantomData,
        }
    }
}

impl<'a, T: Copy + RealField>
    SolverBuilder<T, &'a DomainEnsemble<T>, &'a Potential<T>, &'a Convergence<T>>
{
    /// Build the solver, which takes its own copies of the ensemble and the potential
    pub fn build(self) -> SelfConsistentSolver<T> {
        SelfConsistentSolver {
            ensemble: self.ensemble.clone(),
            initial_ensemble: self.ensemble.clone(),
            potential: self.potential.clone(),
            maximum_iterations: self.convergence_settings.maximum_iterations(),
            tolerance: units::polarization_to_atomic(self.convergence_settings.tolerance()),
        }
    }
}

/// The outcome of a single self-consistent solve
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// The change in polarization fell within the tolerance
    Converged,
    /// The iteration budget was exhausted before the change fell within the tolerance
    NotConverged,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Status::Converged => write!(f, "converged"),
            Status::NotConverged => write!(f, "not converged"),
        }
    }
}

/// The self-consistent state of the device at a single bias
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Solution<T> {
    /// The applied bias in volts
    pub voltage: T,
    /// The average polarization of the ensemble, in atomic units
    pub polarization: T,
    /// The mean change in polarization on the final update, in atomic units
    pub change: T,
    /// The field in the ferroelectric for the final polarization, in atomic units
    pub field: T,
    /// The number of updates after the initial one
    pub iterations: usize,
    /// The status
    pub status: Status,
}

impl<T: Copy + RealField> Solution<T> {
    /// The average polarization in uC / cm^2
    pub fn polarization_uc_per_cm2(&self) -> T {
        units::atomic_to_polarization(self.polarization)
    }

    /// The final change in polarization in uC / cm^2
    pub fn change_uc_per_cm2(&self) -> T {
        units::atomic_to_polarization(self.change)
    }

    /// The field in the ferroelectric in MV / cm
    pub fn field_mv_per_cm(&self) -> T {
        units::atomic_to_field(self.field)
    }

    /// Whether the solution met the tolerance
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}

/// Fixed-point solver for the polarization of the ferroelectric
#[derive(Clone, Debug)]
pub struct SelfConsistentSolver<T: RealField> {
    ensemble: DomainEnsemble<T>,
    /// The ensemble as it was handed to the builder, restored by `reset`
    initial_ensemble: DomainEnsemble<T>,
    potential: Potential<T>,
    maximum_iterations: usize,
    /// The convergence tolerance in atomic units
    tolerance: T,
}

impl<T: Copy + RealField> SelfConsistentSolver<T> {
    /// Restores the ensemble to its initial state, discarding the switching history
    pub fn reset(&mut self) {
        self.ensemble = self.initial_ensemble.clone();
    }

    /// The ensemble as it stands after the last solve
    pub fn ensemble(&self) -> &DomainEnsemble<T> {
        &self.ensemble
    }

    /// The initial ensemble
    pub fn initial_ensemble(&self) -> &DomainEnsemble<T> {
        &self.initial_ensemble
    }

    /// The potential, consistent with the last solution
    pub fn potential(&self) -> &Potential<T> {
        &self.potential
    }

    /// The maximum iterations
    pub fn maximum_iterations(&self) -> usize {
        self.maximum_iterations
    }

    /// The tolerance in atomic units
    pub fn tolerance(&self) -> T {
        self.tolerance
    }
}
