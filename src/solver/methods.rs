use super::{SelfConsistentSolver, Solution, Status};
use crate::{error::NumericalError, units};
use nalgebra::RealField;

/// The fixed-point iteration between the electrostatics and the domain ensemble
pub trait SelfConsistent<T>
where
    T: RealField,
{
    /// Recompute the field in the ferroelectric from the current polarization at the bias
    /// `voltage`, and drive the ensemble with it, returning the mean change in polarization
    fn single_iteration(&mut self, voltage: T) -> Result<T, NumericalError>;
    /// Confirm whether the change in polarization is within the tolerance
    fn is_loop_converged(&self, change: T) -> bool;
    /// Run the self-consistent loop at a bias of `voltage` volts until convergence or until the
    /// iteration budget is exhausted
    ///
    /// The returned solution carries `voltage` as it was passed in.
    fn run_loop(&mut self, voltage: T) -> Result<Solution<T>, NumericalError>;
}

impl<T: Copy + RealField> SelfConsistent<T> for SelfConsistentSolver<T> {
    fn single_iteration(&mut self, voltage: T) -> Result<T, NumericalError> {
        self.potential
            .recompute(voltage, self.ensemble.average_polarization())?;
        Ok(self.ensemble.update(self.potential.ferroelectric_field()))
    }

    fn is_loop_converged(&self, change: T) -> bool {
        change.abs() <= self.tolerance
    }

    fn run_loop(&mut self, voltage: T) -> Result<Solution<T>, NumericalError> {
        let bias = units::volts_to_atomic(voltage);
        let mut change = self.single_iteration(bias)?;
        let mut iterations = 0;
        let status = loop {
            if self.is_loop_converged(change) {
                break Status::Converged;
            }
            if iterations >= self.maximum_iterations {
                break Status::NotConverged;
            }
            change = self.single_iteration(bias)?;
            iterations += 1;
            tracing::debug!(
                "Iteration {iterations}: polarization change {}",
                units::atomic_to_polarization(change)
            );
        };

        // Leave the potential consistent with the final polarization
        let polarization = self.ensemble.average_polarization();
        self.potential.recompute(bias, polarization)?;

        Ok(Solution {
            voltage,
            polarization,
            change,
            field: self.potential.ferroelectric_field(),
            iterations,
            status,
        })
    }
}

impl<T: Copy + RealField> SelfConsistentSolver<T> {
    /// Solves for the self-consistent polarization at a bias of `voltage` volts
    ///
    /// Exhausting the iteration budget is reported through `Solution::status` and a warning,
    /// and leaves the solver ready for the next bias.
    pub fn solve(&mut self, voltage: T) -> Result<Solution<T>, NumericalError> {
        let solution = self.run_loop(voltage)?;
        match solution.status {
            Status::Converged => tracing::info!(
                "Converged at {} V in {} iterations: polarization {} uC/cm^2",
                voltage,
                solution.iterations,
                solution.polarization_uc_per_cm2()
            ),
            Status::NotConverged => tracing::warn!(
                "Failed to converge at {} V in {} iterations: final change {} uC/cm^2",
                voltage,
                solution.iterations,
                solution.change_uc_per_cm2()
            ),
        }
        Ok(solution)
    }
}
