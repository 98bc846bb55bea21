use nalgebra::RealField;
use serde::Deserialize;

/// Settings for the self-consistent loop
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct Convergence<T> {
    /// The number of iterations allowed after the initial update
    pub maximum_iterations: usize,
    /// The largest mean change in polarization, in uC / cm^2, accepted as converged
    pub tolerance: T,
}

impl<T: Copy + RealField> Convergence<T> {
    /// Creates a new instance from its parts
    pub fn new(maximum_iterations: usize, tolerance: T) -> Self {
        Self {
            maximum_iterations,
            tolerance,
        }
    }

    /// The maximum iterations
    pub fn maximum_iterations(&self) -> usize {
        self.maximum_iterations
    }

    /// The tolerance in uC / cm^2
    pub fn tolerance(&self) -> T {
        self.tolerance
    }
}
