//! # Ferroelectric
//!
//! A Preisach-type model of the ferroelectric layer. The layer is represented as an ensemble
//! of independent bistable domains, each of which switches when the field in the layer exceeds
//! its own coercive field. No coupling between domains is modelled: the macroscopic hysteresis
//! loop emerges from the spread of coercive fields across the ensemble.
//!
//! All fields and polarizations are in atomic units.

mod distribution;

pub use distribution::{AffineMap, EnsembleParameters, Moments};

use crate::error::BuildError;
use nalgebra::RealField;
use rand::Rng;

/// The polarization direction of a single domain
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    /// Polarized along the positive field direction
    Up,
    /// Down
    Down,
}

impl State {
    /// The sign of the polarization, `+1` or `-1`
    pub fn sign<T: RealField>(&self) -> T {
        match self {
            State::Up => T::one(),
            State::Down => -T::one(),
        }
    }
}

/// A single bistable domain
#[derive(Clone, Debug, PartialEq)]
pub struct Domain<T> {
    coercive_field: T,
    saturation_polarization: T,
    state: State,
}

impl<T: Copy + RealField> Domain<T> {
    /// A domain in the `Up` state
    pub fn new(coercive_field: T, saturation_polarization: T) -> Self {
        Self {
            coercive_field,
            saturation_polarization,
            state: State::Up,
        }
    }

    /// Switches the domain if `field` reaches its coercive field, returning the change in polarization
    pub fn update(&mut self, field: T) -> T {
        let previous = self.state;
        match self.state {
            State::Up if field <= -self.coercive_field => self.state = State::Down,
            State::Down if field >= self.coercive_field => self.state = State::Up,
            _ => {}
        }
        (self.state.sign::<T>() - previous.sign::<T>()) * self.saturation_polarization
    }

    /// The signed polarization of the domain
    pub fn polarization(&self) -> T {
        self.state.sign::<T>() * self.saturation_polarization
    }

    /// The coercive field
    pub fn coercive_field(&self) -> T {
        self.coercive_field
    }

    /// The saturation polarization
    pub fn saturation_polarization(&self) -> T {
        self.saturation_polarization
    }

    /// The state
    pub fn state(&self) -> State {
        self.state
    }
}

/// A non-empty population of independent domains
#[derive(Clone, Debug, PartialEq)]
pub struct DomainEnsemble<T> {
    domains: Vec<Domain<T>>,
    composition_ratios: Vec<T>,
}

impl<T: Copy + RealField> DomainEnsemble<T> {
    /// Samples an ensemble from `parameters`, drawing from `rng`
    ///
    /// The random source is owned by the caller, so identical seeds and parameters always
    /// reproduce the same ensemble. Every domain starts in the `Up` state.
    pub fn sample<R: Rng + ?Sized>(
        parameters: &EnsembleParameters<T>,
        rng: &mut R,
    ) -> Result<Self, BuildError> {
        let (saturation_polarization, coercive_field) = parameters.maps()?;
        let composition_ratios = parameters
            .composition_ratio
            .sample(parameters.number_of_domains, rng);
        let domains = composition_ratios
            .iter()
            .map(|&ratio| Domain::new(coercive_field.apply(ratio), saturation_polarization.apply(ratio)))
            .collect();
        tracing::debug!(
            "Sampled an ensemble of {} domains",
            parameters.number_of_domains
        );
        Ok(Self {
            domains,
            composition_ratios,
        })
    }

    /// Builds an ensemble from explicit domains
    pub fn from_domains(domains: Vec<Domain<T>>) -> Result<Self, BuildError> {
        if domains.is_empty() {
            return Err(BuildError::EmptyEnsemble);
        }
        if domains.iter().any(|domain| {
            !(domain.coercive_field >= T::zero() && domain.saturation_polarization >= T::zero())
        }) {
            return Err(BuildError::Distribution(
                "every domain must have a non-negative coercive field and saturation polarization"
                    .into(),
            ));
        }
        Ok(Self {
            domains,
            composition_ratios: Vec::new(),
        })
    }

    /// Drives every domain with `field`, returning the mean change in polarization
    pub fn update(&mut self, field: T) -> T {
        let change = self
            .domains
            .iter_mut()
            .fold(T::zero(), |acc, domain| acc + domain.update(field));
        change / self.count()
    }

    /// The macroscopic polarization, the mean of the signed domain polarizations
    pub fn average_polarization(&self) -> T {
        self.domains
            .iter()
            .fold(T::zero(), |acc, domain| acc + domain.polarization())
            / self.count()
    }

    /// The largest saturation polarization in the ensemble, bounding `average_polarization`
    pub fn maximum_saturation_polarization(&self) -> T {
        self.domains
            .iter()
            .map(|domain| domain.saturation_polarization)
            .fold(T::zero(), T::max)
    }

    /// The mean saturation polarization over the domains
    pub fn mean_saturation_polarization(&self) -> T {
        self.domains
            .iter()
            .fold(T::zero(), |acc, domain| acc + domain.saturation_polarization)
            / self.count()
    }

    /// The largest coercive field in the ensemble
    pub fn maximum_coercive_field(&self) -> T {
        self.domains
            .iter()
            .map(|domain| domain.coercive_field)
            .fold(T::zero(), T::max)
    }

    /// The smallest coercive field in the ensemble
    pub fn minimum_coercive_field(&self) -> T {
        self.domains
            .iter()
            .map(|domain| domain.coercive_field)
            .fold(self.domains[0].coercive_field, T::min)
    }

    /// The domains
    pub fn domains(&self) -> &[Domain<T>] {
        &self.domains
    }

    /// The sampled composition ratios, empty for an ensemble built from explicit domains
    pub fn composition_ratios(&self) -> &[T] {
        &self.composition_ratios
    }

    /// The number of domains
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Whether there are no elements
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    fn count(&self) -> T {
        T::from_usize(self.domains.len()).unwrap()
    }
}

#[cfg(test)]
mod test {
    use super::{Domain, DomainEnsemble, EnsembleParameters, Moments, State};
    use crate::{error::BuildError, units};
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn empirical(seed: u64) -> DomainEnsemble<f64> {
        let parameters = EnsembleParameters::empirical(1000, Moments::new(0.6, 0.05));
        DomainEnsemble::sample(&parameters, &mut StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn domains_switch_at_their_coercive_field() {
        let mut domain = Domain::new(1., 2.);
        assert_eq!(domain.update(-0.99), 0.);
        assert_eq!(domain.state(), State::Up);
        assert_eq!(domain.update(-1.), -4.);
        assert_eq!(domain.state(), State::Down);
        assert_eq!(domain.update(0.5), 0.);
        assert_eq!(domain.update(1.), 4.);
        assert_eq!(domain.polarization(), 2.);
    }

    #[test]
    fn empty_ensembles_are_rejected() {
        let parameters = EnsembleParameters::empirical(0, Moments::new(0.6, 0.05));
        assert!(matches!(
            DomainEnsemble::<f64>::sample(&parameters, &mut StdRng::seed_from_u64(0)),
            Err(BuildError::EmptyEnsemble)
        ));
        assert!(matches!(
            DomainEnsemble::<f64>::from_domains(vec![]),
            Err(BuildError::EmptyEnsemble)
        ));
    }

    #[test]
    fn a_fresh_ensemble_is_fully_up() {
        let ensemble = empirical(0);
        assert_eq!(ensemble.len(), 1000);
        assert!(ensemble.domains().iter().all(|domain| domain.state() == State::Up));
        assert_relative_eq!(
            ensemble.average_polarization(),
            ensemble.mean_saturation_polarization(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn sub_coercive_fields_change_nothing() {
        let mut ensemble = empirical(1);
        let field = 0.5 * ensemble.minimum_coercive_field();
        let before = ensemble.clone();
        assert_eq!(ensemble.update(-field), 0.);
        assert_eq!(ensemble.update(field), 0.);
        assert_eq!(ensemble, before);
    }

    #[test]
    fn identical_seeds_give_identical_trajectories() {
        let mut first = empirical(42);
        let mut second = empirical(42);
        assert_eq!(first, second);
        let fields = [-1.6e-7, 2e-8, 1.5e-7, -3e-8];
        for field in fields {
            assert_eq!(first.update(field), second.update(field));
            assert_eq!(first.average_polarization(), second.average_polarization());
        }
        assert_ne!(first, empirical(43));
    }

    #[test]
    fn saturated_ensembles_do_not_switch_twice() {
        let mut ensemble = empirical(3);
        let field = -ensemble.maximum_coercive_field();
        let change = ensemble.update(field);
        assert_relative_eq!(
            change,
            -2. * ensemble.mean_saturation_polarization(),
            max_relative = 1e-12
        );
        assert_eq!(ensemble.update(field), 0.);
        assert!(ensemble.domains().iter().all(|domain| domain.state() == State::Down));
    }

    #[test]
    fn override_moments_set_the_domain_distribution() {
        let parameters = EnsembleParameters::empirical(20_000, Moments::new(0.6, 0.05))
            .with_saturation_polarization(Moments::new(
                units::polarization_to_atomic(20.),
                units::polarization_to_atomic(2.),
            ))
            .with_coercive_field(Moments::new(
                units::field_to_atomic(1.),
                units::field_to_atomic(0.1),
            ));
        let ensemble =
            DomainEnsemble::<f64>::sample(&parameters, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_relative_eq!(
            units::atomic_to_polarization(ensemble.mean_saturation_polarization()),
            20.,
            max_relative = 1e-2
        );
        let mean_field = ensemble
            .domains()
            .iter()
            .map(|domain| domain.coercive_field())
            .sum::<f64>()
            / ensemble.len() as f64;
        assert_relative_eq!(units::atomic_to_field(mean_field), 1., max_relative = 1e-2);
    }

    #[test]
    fn empirical_domain_properties_are_non_negative() {
        let parameters = EnsembleParameters::empirical(2000, Moments::new(1.2, 0.5));
        let ensemble =
            DomainEnsemble::<f64>::sample(&parameters, &mut StdRng::seed_from_u64(11)).unwrap();
        assert!(ensemble.domains().iter().all(|domain| {
            domain.coercive_field() >= 0. && domain.saturation_polarization() >= 0.
        }));
    }

    proptest! {
        #[test]
        fn polarization_stays_within_the_saturation_bound(
            seed in any::<u64>(),
            fields in proptest::collection::vec(-4e-7f64..4e-7, 1..40),
        ) {
            let parameters = EnsembleParameters::empirical(200, Moments::new(0.6, 0.05));
            let mut ensemble =
                DomainEnsemble::sample(&parameters, &mut StdRng::seed_from_u64(seed)).unwrap();
            let bound = ensemble.maximum_saturation_polarization();
            for field in fields {
                let before = ensemble.average_polarization();
                let change = ensemble.update(field);
                let after = ensemble.average_polarization();
                prop_assert!((before + change - after).abs() <= 1e-12 * bound.max(1.));
                prop_assert!(after.abs() <= bound * (1. + 1e-12));
                prop_assert!(ensemble
                    .domains()
                    .iter()
                    .all(|domain| matches!(domain.state(), State::Up | State::Down)));
            }
        }
    }
}
