//! # Postprocessor
//!
//! Figures of merit of a hysteresis loop, extracted from a completed sweep in practical units.

use crate::solver::Sweep;
use itertools::Itertools;
use nalgebra::RealField;

/// The direction in which the bias was moving when a crossing occurred
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Rising
    Rising,
    /// Falling
    Falling,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Direction::Rising => write!(f, "rising"),
            Direction::Falling => write!(f, "falling"),
        }
    }
}

/// A value interpolated at a crossing of the loop
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Crossing<T> {
    /// The value
    pub value: T,
    /// The direction
    pub direction: Direction,
}

/// Summary of a hysteresis loop
#[derive(Clone, Debug, PartialEq)]
pub struct LoopSummary<T> {
    /// Biases in volts at which the polarization changes sign
    pub coercive_voltages: Vec<Crossing<T>>,
    /// Polarizations in uC / cm^2 at which the bias changes sign
    pub remanent_polarizations: Vec<Crossing<T>>,
    /// The line integral of the polarization over the bias in uC / cm^2 V, whose magnitude is
    /// the area enclosed by a closed loop
    pub loop_area: T,
}

impl<T: Copy + RealField> LoopSummary<T> {
    /// Walks consecutive pairs of solutions, linearly interpolating every crossing
    pub fn from_sweep(sweep: &Sweep<T>) -> Self {
        let points = sweep
            .iter()
            .map(|solution| (solution.voltage, solution.polarization_uc_per_cm2()))
            .collect::<Vec<_>>();

        let mut coercive_voltages = Vec::new();
        let mut remanent_polarizations = Vec::new();
        let mut loop_area = T::zero();

        for (&(v0, p0), &(v1, p1)) in points.iter().tuple_windows() {
            if v1 == v0 {
                continue;
            }
            let direction = if v1 > v0 {
                Direction::Rising
            } else {
                Direction::Falling
            };

            if changes_sign(p0, p1) {
                coercive_voltages.push(Crossing {
                    value: v0 - p0 * (v1 - v0) / (p1 - p0),
                    direction,
                });
            }
            if changes_sign(v0, v1) {
                remanent_polarizations.push(Crossing {
                    value: p0 - v0 * (p1 - p0) / (v1 - v0),
                    direction,
                });
            }
            loop_area += (p0 + p1) * (v1 - v0) / (T::one() + T::one());
        }

        Self {
            coercive_voltages,
            remanent_polarizations,
            loop_area,
        }
    }

    /// The mean magnitude of the coercive voltages, if the loop has any
    pub fn mean_coercive_voltage(&self) -> Option<T> {
        mean_magnitude(&self.coercive_voltages)
    }

    /// The mean magnitude of the remanent polarizations, if the loop has any
    pub fn mean_remanent_polarization(&self) -> Option<T> {
        mean_magnitude(&self.remanent_polarizations)
    }
}

/// Whether the segment from `a` to `b` leaves a value of one sign for zero or the other sign
///
/// A value landing exactly on zero counts as a crossing on the segment that arrives there, not
/// on the one that leaves.
fn changes_sign<T: Copy + RealField>(a: T, b: T) -> bool {
    (a < T::zero() && b >= T::zero()) || (a > T::zero() && b <= T::zero())
}

fn mean_magnitude<T: Copy + RealField>(crossings: &[Crossing<T>]) -> Option<T> {
    if crossings.is_empty() {
        return None;
    }
    let total = crossings
        .iter()
        .fold(T::zero(), |acc, crossing| acc + crossing.value.abs());
    Some(total / T::from_usize(crossings.len()).unwrap())
}
