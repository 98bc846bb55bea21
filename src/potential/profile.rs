use super::Potential;
use crate::error::BuildError;
use nalgebra::RealField;
use ndarray::Array1;

/// The largest number of points a profile grid may hold
const MAXIMUM_PROFILE_POINTS: usize = 10_000_000;

/// The potentials which may be sampled along the stack
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PotentialKind {
    /// The electrostatic potential from the applied bias and polarization
    Electrostatic,
    /// The conduction band offsets
    Barrier,
    /// The potential from the work function difference
    BuiltIn,
    /// The sum of the other three
    Total,
}

impl std::fmt::Display for PotentialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PotentialKind::Electrostatic => write!(f, "electrostatic"),
            PotentialKind::Barrier => write!(f, "barrier"),
            PotentialKind::BuiltIn => write!(f, "built_in"),
            PotentialKind::Total => write!(f, "total"),
        }
    }
}

impl PotentialKind {
    /// Every kind, in the order they are written out
    pub const ALL: [PotentialKind; 4] = [
        PotentialKind::Electrostatic,
        PotentialKind::Barrier,
        PotentialKind::BuiltIn,
        PotentialKind::Total,
    ];

    /// Resolves the kind to the method evaluating it
    pub fn evaluator<T: Copy + RealField>(&self) -> fn(&Potential<T>, T) -> T {
        match self {
            PotentialKind::Electrostatic => Potential::electrostatic_potential,
            PotentialKind::Barrier => Potential::barrier_potential,
            PotentialKind::BuiltIn => Potential::built_in_potential,
            PotentialKind::Total => Potential::total_potential,
        }
    }
}

/// A uniform grid of positions along the stack
#[derive(Clone, Debug)]
pub struct ProfileGrid<T> {
    positions: Array1<T>,
}

impl<T: Copy + RealField> ProfileGrid<T> {
    /// Covers the stack and `padding` of bulk electrode on either side, spaced by `resolution`
    ///
    /// The last point is the final multiple of `resolution` short of the padded end.
    pub fn padded(potential: &Potential<T>, padding: T, resolution: T) -> Result<Self, BuildError> {
        if !(resolution.is_finite() && resolution > T::zero()) {
            return Err(BuildError::Grid(
                "the profile resolution must be finite and positive".into(),
            ));
        }
        if !(padding.is_finite() && padding >= T::zero()) {
            return Err(BuildError::Grid(
                "the profile padding must be finite and non-negative".into(),
            ));
        }
        let start = -padding;
        let span = potential.regions().length() + padding + padding;
        let number_of_points = (span / resolution).ceil();
        if number_of_points > T::from_usize(MAXIMUM_PROFILE_POINTS).unwrap() {
            return Err(BuildError::Grid("the profile grid is too large".into()));
        }
        let number_of_points = nalgebra::try_convert::<T, f64>(number_of_points)
            .map(|n| n as usize)
            .ok_or_else(|| BuildError::Grid("the profile grid is too large".into()))?;
        let positions = Array1::from_iter(
            (0..number_of_points).map(|index| start + T::from_usize(index).unwrap() * resolution),
        );
        Ok(Self { positions })
    }

    /// The positions
    pub fn positions(&self) -> &Array1<T> {
        &self.positions
    }

    /// The number of points
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether there are no elements
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// A potential sampled on a grid
#[derive(Clone, Debug)]
pub struct Profile<T> {
    /// The kind
    pub kind: PotentialKind,
    /// Positions in Bohr
    pub positions: Array1<T>,
    /// Values in Hartree
    pub values: Array1<T>,
}
