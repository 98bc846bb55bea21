//! Sampling of the per-domain parameters
//!
//! Every domain is characterised by a single composition ratio, drawn from a normal
//! distribution. The saturation polarization and coercive field of the domain follow from the
//! ratio through an `AffineMap`, either fitted to requested moments or taken from the empirical
//! relations measured for AlScN films.

use crate::{error::BuildError, units};
use nalgebra::RealField;
use rand::Rng;
use rand_distr::StandardNormal;
use serde::Deserialize;

/// The first two moments of a normal distribution
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct Moments<T> {
    /// The mean
    pub mean: T,
    /// The standard deviation
    pub standard_deviation: T,
}

impl<T: Copy + RealField> Moments<T> {
    /// Creates a new instance from its parts
    pub fn new(mean: T, standard_deviation: T) -> Self {
        Self {
            mean,
            standard_deviation,
        }
    }

    fn validate(&self, quantity: &str) -> Result<(), BuildError> {
        if !self.mean.is_finite() {
            return Err(BuildError::Distribution(format!(
                "the mean {quantity} must be finite"
            )));
        }
        if !self.standard_deviation.is_finite() || self.standard_deviation < T::zero() {
            return Err(BuildError::Distribution(format!(
                "the {quantity} standard deviation must be finite and non-negative"
            )));
        }
        Ok(())
    }

    /// Draws `count` samples using the supplied random source
    ///
    /// Samples are drawn in `f64` and cast to `T`, so a given seed yields the same sequence
    /// regardless of the scalar type.
    pub(crate) fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<T> {
        (0..count)
            .map(|_| {
                let z: f64 = rng.sample(StandardNormal);
                self.mean + self.standard_deviation * T::from_f64(z).unwrap()
            })
            .collect()
    }
}

/// A map `y = |slope * x + intercept|` from the composition ratio to a domain property
///
/// The absolute value removes the unphysical negative tail of the distribution.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AffineMap<T> {
    slope: T,
    intercept: T,
}

impl<T: Copy + RealField> AffineMap<T> {
    /// Creates a new instance from its parts
    pub fn new(slope: T, intercept: T) -> Self {
        Self { slope, intercept }
    }

    /// The map carrying a normal distribution with moments `source` onto one with moments `target`
    pub fn matching(source: &Moments<T>, target: &Moments<T>) -> Result<Self, BuildError> {
        if source.standard_deviation == T::zero() {
            return Err(BuildError::Distribution(
                "a target distribution cannot be matched to a composition ratio with zero spread"
                    .into(),
            ));
        }
        let slope = target.standard_deviation / source.standard_deviation;
        let intercept = target.mean - slope * source.mean;
        Ok(Self { slope, intercept })
    }

    /// The empirical saturation polarization of AlScN, `333.33 r - 400` uC / cm^2
    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    pub fn empirical_saturation_polarization() -> Self {
        Self::new(
            units::polarization_to_atomic(333.33),
            units::polarization_to_atomic(-400.),
        )
    }

    /// The empirical coercive field of AlScN, `3.16 r - 1.1` MV / cm
    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    pub fn empirical_coercive_field() -> Self {
        Self::new(units::field_to_atomic(3.16), units::field_to_atomic(-1.1))
    }

    /// Maps the composition ratio `x` to the domain property
    pub fn apply(&self, x: T) -> T {
        (self.slope * x + self.intercept).abs()
    }

    /// The slope
    pub fn slope(&self) -> T {
        self.slope
    }

    /// The intercept
    pub fn intercept(&self) -> T {
        self.intercept
    }
}

/// The parameters from which a `DomainEnsemble` is sampled
///
/// The optional moments are in atomic units. When they are absent the empirical relations
/// are used for the corresponding property.
#[derive(Clone, Debug, PartialEq)]
pub struct EnsembleParameters<T> {
    /// The number of domains
    pub number_of_domains: usize,
    /// The composition ratio from which every domain property follows
    pub composition_ratio: Moments<T>,
    /// Requested saturation polarization moments, in atomic units
    pub saturation_polarization: Option<Moments<T>>,
    /// Requested coercive field moments, in atomic units
    pub coercive_field: Option<Moments<T>>,
}

impl<T: Copy + RealField> EnsembleParameters<T> {
    /// Parameters using the empirical relations for both domain properties
    pub fn empirical(number_of_domains: usize, composition_ratio: Moments<T>) -> Self {
        Self {
            number_of_domains,
            composition_ratio,
            saturation_polarization: None,
            coercive_field: None,
        }
    }

    /// Fits the saturation polarization map to `moments` instead of the empirical relation
    pub fn with_saturation_polarization(mut self, moments: Moments<T>) -> Self {
        self.saturation_polarization = Some(moments);
        self
    }

    /// Fits the coercive field map to `moments` instead of the empirical relation
    pub fn with_coercive_field(mut self, moments: Moments<T>) -> Self {
        self.coercive_field = Some(moments);
        self
    }

    /// Checks the parameters and resolves the two maps from the composition ratio
    pub(crate) fn maps(&self) -> Result<(AffineMap<T>, AffineMap<T>), BuildError> {
        if self.number_of_domains == 0 {
            return Err(BuildError::EmptyEnsemble);
        }
        self.composition_ratio.validate("composition ratio")?;

        let saturation_polarization = match &self.saturation_polarization {
            Some(target) => {
                target.validate("saturation polarization")?;
                AffineMap::matching(&self.composition_ratio, target)?
            }
            None => AffineMap::empirical_saturation_polarization(),
        };
        let coercive_field = match &self.coercive_field {
            Some(target) => {
                target.validate("coercive field")?;
                AffineMap::matching(&self.composition_ratio, target)?
            }
            None => AffineMap::empirical_coercive_field(),
        };
        Ok((saturation_polarization, coercive_field))
    }
}

#[cfg(test)]
mod test {
    use super::{AffineMap, EnsembleParameters, Moments};
    use crate::{error::BuildError, units};
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn matched_map_carries_the_source_moments_onto_the_target() {
        let source = Moments::new(0.6, 0.05);
        let target = Moments::new(20., 2.);
        let map = AffineMap::matching(&source, &target).unwrap();
        assert_relative_eq!(map.apply(0.6), 20., epsilon = 1e-12);
        assert_relative_eq!(map.apply(0.65), 22., epsilon = 1e-12);
        assert_relative_eq!(map.slope(), 40., epsilon = 1e-12);
    }

    #[test]
    fn negative_values_are_reflected() {
        let map = AffineMap::new(1., -1.);
        assert_relative_eq!(map.apply(0.25), 0.75);
    }

    #[test]
    fn empirical_relations_match_the_published_fits() {
        let polarization = AffineMap::<f64>::empirical_saturation_polarization();
        assert_relative_eq!(
            units::atomic_to_polarization(polarization.apply(1.5)),
            99.995,
            max_relative = 1e-10
        );
        let field = AffineMap::<f64>::empirical_coercive_field();
        assert_relative_eq!(
            units::atomic_to_field(field.apply(0.6)),
            0.796,
            max_relative = 1e-10
        );
    }

    #[test]
    fn a_zero_spread_composition_cannot_be_matched() {
        let parameters = EnsembleParameters::empirical(10, Moments::new(0.6, 0.))
            .with_saturation_polarization(Moments::new(20., 2.));
        assert!(matches!(parameters.maps(), Err(BuildError::Distribution(_))));
        // The empirical relations need no spread
        assert!(EnsembleParameters::empirical(10, Moments::new(0.6, 0.))
            .maps()
            .is_ok());
    }

    #[test]
    fn negative_standard_deviation_is_rejected() {
        let parameters = EnsembleParameters::empirical(10, Moments::new(0.6, -0.05));
        assert!(matches!(parameters.maps(), Err(BuildError::Distribution(_))));
    }

    #[test]
    fn sampling_is_reproducible() {
        let moments = Moments::new(0.6, 0.05);
        let first: Vec<f64> = moments.sample(64, &mut StdRng::seed_from_u64(7));
        let second: Vec<f64> = moments.sample(64, &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
        let other: Vec<f64> = moments.sample(64, &mut StdRng::seed_from_u64(8));
        assert_ne!(first, other);
    }
}
