use crate::solver::{Solution, SweepObserver};
use nalgebra::RealField;

/// Reports the progress of a sweep on the terminal, overwriting a single status line
pub(crate) struct ProgressTracker<'a> {
    term: &'a console::Term,
    number_of_points: usize,
    not_converged: usize,
}

impl<'a> ProgressTracker<'a> {
    pub(crate) fn new(term: &'a console::Term, number_of_points: usize) -> Self {
        Self {
            term,
            number_of_points,
            not_converged: 0,
        }
    }

    pub(crate) fn not_converged(&self) -> usize {
        self.not_converged
    }

    fn write_status<T: Copy + RealField>(
        &self,
        index: usize,
        solution: &Solution<T>,
    ) -> std::io::Result<()> {
        self.term.clear_line()?;
        self.term.write_str(&format!(
            "[{}/{}] {:.2} V: {:.2} uC/cm^2 ({}, {} iterations)",
            index + 1,
            self.number_of_points,
            solution.voltage,
            solution.polarization_uc_per_cm2(),
            solution.status,
            solution.iterations,
        ))?;
        if index + 1 == self.number_of_points {
            self.term.write_line("")?;
        }
        Ok(())
    }
}

impl<T: Copy + RealField> SweepObserver<T> for ProgressTracker<'_> {
    fn observe(&mut self, index: usize, solution: &Solution<T>) {
        if !solution.is_converged() {
            self.not_converged += 1;
        }
        if let Err(e) = self.write_status(index, solution) {
            tracing::debug!("Failed to write progress to the terminal: {e}");
        }
    }
}

#[cfg(test)]
mod test {
    use super::ProgressTracker;
    use crate::solver::{Solution, Status, SweepObserver};

    #[test]
    fn unconverged_points_are_counted() {
        let term = console::Term::buffered_stdout();
        let mut tracker = ProgressTracker::new(&term, 3);
        for (index, status) in [Status::Converged, Status::NotConverged, Status::NotConverged]
            .into_iter()
            .enumerate()
        {
            let solution = Solution {
                voltage: index as f64,
                polarization: 0.,
                change: 0.,
                field: 0.,
                iterations: 1,
                status,
            };
            tracker.observe(index, &solution);
        }
        assert_eq!(tracker.not_converged(), 2);
    }
}
