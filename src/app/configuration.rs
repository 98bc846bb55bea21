use crate::{
    ferroelectric::{EnsembleParameters, Moments},
    solver::{Convergence, VoltageSweep},
    units,
};
use color_eyre::eyre::eyre;
use config::{Config, File};
use nalgebra::RealField;
use serde::{de::DeserializeOwned, Deserialize};
use std::env;

#[derive(Debug, Deserialize)]
pub(crate) struct Configuration<T> {
    pub(crate) solver: Convergence<T>,
    pub(crate) ensemble: EnsembleConfiguration<T>,
    pub(crate) sweep: SweepConfiguration<T>,
    pub(crate) profile: ProfileConfiguration<T>,
}

/// Sampling parameters for the domain ensemble, in practical units
#[derive(Debug, Deserialize)]
pub(crate) struct EnsembleConfiguration<T> {
    pub(crate) seed: u64,
    pub(crate) number_of_domains: usize,
    pub(crate) composition_ratio: Moments<T>,
    /// In uC / cm^2
    pub(crate) saturation_polarization: Option<Moments<T>>,
    /// In MV / cm
    pub(crate) coercive_field: Option<Moments<T>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SweepConfiguration<T> {
    /// In volts
    pub(crate) amplitude: T,
    pub(crate) step: T,
    pub(crate) return_pass: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProfileConfiguration<T> {
    /// In volts
    pub(crate) voltage: T,
    /// In nm
    pub(crate) padding: T,
    pub(crate) resolution: T,
}

impl<T: DeserializeOwned> Configuration<T> {
    pub(crate) fn build() -> color_eyre::Result<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // The default settings for the simulation which we use in the general case
            .add_source(File::with_name(".config/default"))
            // The override settings which may be set by the user, optional
            .add_source(File::with_name(&format!(".config/{}", run_mode)).required(false))
            .build()?;

        s.try_deserialize()
            .map_err(|e| eyre!(format!("Failed to deserialize the config file: {:?}", e)))
    }
}

impl<T: Copy + RealField> EnsembleConfiguration<T> {
    /// The sampling parameters in atomic units
    pub(crate) fn parameters(&self) -> EnsembleParameters<T> {
        let atomic = |moments: &Moments<T>, convert: fn(T) -> T| {
            Moments::new(convert(moments.mean), convert(moments.standard_deviation))
        };
        EnsembleParameters {
            number_of_domains: self.number_of_domains,
            composition_ratio: self.composition_ratio,
            saturation_polarization: self
                .saturation_polarization
                .as_ref()
                .map(|moments| atomic(moments, units::polarization_to_atomic)),
            coercive_field: self
                .coercive_field
                .as_ref()
                .map(|moments| atomic(moments, units::field_to_atomic)),
        }
    }
}

impl<T: Copy + RealField> SweepConfiguration<T> {
    pub(crate) fn voltages(&self) -> VoltageSweep<T> {
        VoltageSweep::new(self.amplitude, self.step).with_return_pass(self.return_pass)
    }
}
