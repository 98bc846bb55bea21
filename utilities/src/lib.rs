//! Shared fixtures for the integration tests and benchmarks

use ferrodiode::{
    device::{BuildInfoDesk, Device},
    ferroelectric::{DomainEnsemble, EnsembleParameters, Moments},
    potential::Potential,
    solver::{Convergence, SelfConsistentSolver, SolverBuilder},
};
use rand::{rngs::StdRng, SeedableRng};

/// Platinum electrodes either side of 10 nm of AlScN, with no barrier or dead layer
pub const STABLE_STRUCTURE: &str = r#"
    [top_electrode]
    material = "Pt"

    [bottom_electrode]
    material = "Pt"

    [insulator]
    material = "Al2O3"
    thickness = 0.0

    [ferroelectric]
    material = "AlScN"
    thickness = 10.0
"#;

/// As `STABLE_STRUCTURE` with a 1 nm alumina barrier, on which the loop does not settle
pub const OSCILLATING_STRUCTURE: &str = r#"
    [top_electrode]
    material = "Pt"

    [bottom_electrode]
    material = "Pt"

    [insulator]
    material = "Al2O3"
    thickness = 1.0

    [ferroelectric]
    material = "AlScN"
    thickness = 10.0
"#;

pub fn construct_potential(structure: &str) -> Potential<f64> {
    let device: Device<f64> = Device::from_toml(structure).unwrap();
    let stack = device.build_device_stack().unwrap();
    Potential::new(stack).unwrap()
}

/// Samples an ensemble of `number_of_domains` at a composition ratio of 0.6 +- 0.05
pub fn construct_ensemble(number_of_domains: usize, seed: u64) -> DomainEnsemble<f64> {
    let parameters = EnsembleParameters::empirical(number_of_domains, Moments::new(0.6, 0.05));
    DomainEnsemble::sample(&parameters, &mut StdRng::seed_from_u64(seed)).unwrap()
}

pub fn construct_solver(
    structure: &str,
    number_of_domains: usize,
    seed: u64,
    convergence: Convergence<f64>,
) -> SelfConsistentSolver<f64> {
    SolverBuilder::new()
        .with_ensemble(&construct_ensemble(number_of_domains, seed))
        .with_potential(&construct_potential(structure))
        .with_convergence_settings(&convergence)
        .build()
}
