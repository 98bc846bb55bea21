use super::{SelfConsistentSolver, Solution};
use crate::error::{BuildError, NumericalError};
use nalgebra::RealField;
use rayon::prelude::*;
use std::ops::Deref;

/// The largest number of steps a single sweep branch may take
const MAXIMUM_SWEEP_STEPS: usize = 1_000_000;

/// Receives each solution of a sweep as it is produced
pub trait SweepObserver<T> {
    fn observe(&mut self, index: usize, solution: &Solution<T>);
}

impl<T, F> SweepObserver<T> for F
where
    F: FnMut(usize, &Solution<T>),
{
    fn observe(&mut self, index: usize, solution: &Solution<T>) {
        self(index, solution)
    }
}

/// The solutions of a sweep, in the order the biases were supplied
#[derive(Clone, Debug, PartialEq)]
pub struct Sweep<T>(Vec<Solution<T>>);

impl<T> Deref for Sweep<T> {
    type Target = [Solution<T>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> FromIterator<Solution<T>> for Sweep<T> {
    fn from_iter<I: IntoIterator<Item = Solution<T>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sweep<T> {
    type Item = Solution<T>;
    type IntoIter = std::vec::IntoIter<Solution<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T: Copy + RealField> Sweep<T> {
    /// The applied biases in volts
    pub fn voltages(&self) -> Vec<T> {
        self.0.iter().map(|solution| solution.voltage).collect()
    }

    /// The polarizations in uC / cm^2
    pub fn polarizations(&self) -> Vec<T> {
        self.0
            .iter()
            .map(|solution| solution.polarization_uc_per_cm2())
            .collect()
    }

    /// The number of points which exhausted the iteration budget
    pub fn number_not_converged(&self) -> usize {
        self.0
            .iter()
            .filter(|solution| !solution.is_converged())
            .count()
    }

    /// The solutions, consuming the sweep
    pub fn into_inner(self) -> Vec<Solution<T>> {
        self.0
    }
}

/// Builder for a symmetric bias sweep from `-amplitude` to `amplitude`
///
/// Every bias is computed from its index, so the points do not accumulate rounding error. When
/// `step` does not divide the span the sweep stops at the last bias short of `amplitude`. With
/// the return pass the sweep descends back to `-amplitude` without repeating the apex.
#[derive(Copy, Clone, Debug)]
pub struct VoltageSweep<T> {
    amplitude: T,
    step: T,
    return_pass: bool,
}

impl<T: Copy + RealField> VoltageSweep<T> {
    /// A sweep from `-amplitude` to `amplitude` volts in increments of `step`
    pub fn new(amplitude: T, step: T) -> Self {
        Self {
            amplitude,
            step,
            return_pass: false,
        }
    }

    /// Descend back to `-amplitude` after reaching the apex
    pub fn with_return_pass(mut self, return_pass: bool) -> Self {
        self.return_pass = return_pass;
        self
    }

    /// The biases of the sweep, in volts
    pub fn build(&self) -> Result<Vec<T>, BuildError> {
        if !(self.amplitude.is_finite() && self.amplitude >= T::zero()) {
            return Err(BuildError::Grid(
                "the sweep amplitude must be finite and non-negative".into(),
            ));
        }
        if !(self.step.is_finite() && self.step > T::zero()) {
            return Err(BuildError::Grid(
                "the sweep step must be finite and positive".into(),
            ));
        }
        let span = (self.amplitude + self.amplitude) / self.step;
        if span > T::from_usize(MAXIMUM_SWEEP_STEPS).unwrap() {
            return Err(BuildError::Grid("the sweep has too many points".into()));
        }
        // Tolerate a span a few ulps short of a whole number of steps
        let span = (span * (T::one() + T::from_f64(1e-9).unwrap())).floor();
        let number_of_steps = nalgebra::try_convert::<T, f64>(span)
            .map(|n| n as usize)
            .ok_or_else(|| BuildError::Grid("the sweep has too many points".into()))?;

        let at = |index: usize| {
            (-self.amplitude + T::from_usize(index).unwrap() * self.step).min(self.amplitude)
        };
        let mut voltages: Vec<T> = (0..=number_of_steps).map(at).collect();
        if self.return_pass {
            voltages.extend((0..number_of_steps).rev().map(at));
        }
        Ok(voltages)
    }
}

impl<T: Copy + RealField> SelfConsistentSolver<T> {
    /// Solves each bias in `voltages` in turn, carrying the ensemble over from one to the next
    pub fn solve_sweep(&mut self, voltages: &[T]) -> Result<Sweep<T>, NumericalError> {
        self.solve_sweep_with_observer(voltages, &mut |_: usize, _: &Solution<T>| {})
    }

    /// As `solve_sweep`, handing each solution to `observer` as it is produced
    pub fn solve_sweep_with_observer<Observer: SweepObserver<T> + ?Sized>(
        &mut self,
        voltages: &[T],
        observer: &mut Observer,
    ) -> Result<Sweep<T>, NumericalError> {
        let mut solutions = Vec::with_capacity(voltages.len());
        for (index, &voltage) in voltages.iter().enumerate() {
            let solution = self.solve(voltage)?;
            observer.observe(index, &solution);
            solutions.push(solution);
        }
        let sweep = Sweep(solutions);
        tracing::info!(
            "Sweep of {} points complete, {} not converged",
            sweep.len(),
            sweep.number_not_converged()
        );
        Ok(sweep)
    }
}

impl<T: Copy + RealField + Send + Sync> SelfConsistentSolver<T> {
    /// Solves every bias independently, each from the initial ensemble
    ///
    /// No switching history is carried between points, so there is no hysteresis and the points
    /// are solved in parallel. The state of `self` is untouched.
    pub fn solve_independent(&self, voltages: &[T]) -> Result<Sweep<T>, NumericalError> {
        let solutions = voltages
            .par_iter()
            .map(|&voltage| {
                let mut solver = self.clone();
                solver.reset();
                solver.solve(voltage)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Sweep(solutions))
    }
}

#[cfg(test)]
mod test {
    use super::VoltageSweep;
    use crate::error::BuildError;
    use approx::assert_relative_eq;

    #[test]
    fn sweep_is_symmetric_and_inclusive() {
        let voltages = VoltageSweep::new(5., 0.1).build().unwrap();
        assert_eq!(voltages.len(), 101);
        assert_eq!(voltages[0], -5.);
        assert_relative_eq!(voltages[50], 0., epsilon = 1e-12);
        assert_relative_eq!(voltages[100], 5., epsilon = 1e-12);
    }

    #[test]
    fn return_pass_does_not_repeat_the_apex() {
        let voltages = VoltageSweep::new(1., 0.5)
            .with_return_pass(true)
            .build()
            .unwrap();
        assert_eq!(voltages, vec![-1., -0.5, 0., 0.5, 1., 0.5, 0., -0.5, -1.]);
    }

    #[test]
    fn zero_amplitude_is_a_single_point() {
        let voltages = VoltageSweep::new(0., 0.1).with_return_pass(true).build().unwrap();
        assert_eq!(voltages, vec![0.]);
    }

    #[test]
    fn a_step_that_does_not_divide_the_span_stays_within_the_amplitude() {
        let voltages = VoltageSweep::new(1., 0.3)
            .with_return_pass(true)
            .build()
            .unwrap();
        assert_eq!(voltages.len(), 13);
        assert!(voltages.iter().all(|voltage: &f64| voltage.abs() <= 1.));
        assert_relative_eq!(voltages[6], 0.8, epsilon = 1e-12);

        let voltages = VoltageSweep::new(1., 0.75).build().unwrap();
        assert_eq!(voltages, vec![-1., -0.25, 0.5]);
    }

    #[test]
    fn an_excessive_number_of_points_is_rejected() {
        assert!(matches!(
            VoltageSweep::new(1e12, 1e-12).build(),
            Err(BuildError::Grid(_))
        ));
        assert!(matches!(
            VoltageSweep::new(1., f64::MIN_POSITIVE).build(),
            Err(BuildError::Grid(_))
        ));
    }

    #[test]
    fn invalid_steps_are_rejected() {
        assert!(matches!(VoltageSweep::new(1., 0.).build(), Err(BuildError::Grid(_))));
        assert!(matches!(VoltageSweep::new(-1., 0.1).build(), Err(BuildError::Grid(_))));
    }
}
