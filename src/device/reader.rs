use super::info_desk::{ElectrodeMaterial, FerroelectricMaterial, InsulatorMaterial};
use color_eyre::eyre::eyre;
use config::{Config, File, FileFormat};
use serde::{de::DeserializeOwned, Deserialize};
use std::path::PathBuf;

/// The user-facing description of a diode, with lengths in nm and polarizations in uC / cm^2
#[derive(Debug, Deserialize)]
pub struct Device<T> {
    pub(crate) name: Option<String>,
    pub(crate) top_electrode: ElectrodeLayer<T>,
    pub(crate) bottom_electrode: ElectrodeLayer<T>,
    pub(crate) insulator: InsulatorLayer<T>,
    pub(crate) ferroelectric: FerroelectricLayer<T>,
    pub(crate) dead_layer: Option<DeadLayer<T>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ElectrodeLayer<T> {
    pub(crate) material: ElectrodeMaterial,
    /// Overrides the tabulated or derived screening length
    pub(crate) screening_length: Option<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InsulatorLayer<T> {
    pub(crate) material: InsulatorMaterial,
    pub(crate) thickness: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FerroelectricLayer<T> {
    pub(crate) material: FerroelectricMaterial,
    pub(crate) thickness: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeadLayer<T> {
    pub(crate) thickness: T,
    pub(crate) polarization: Option<T>,
    pub(crate) dielectric_constant: Option<T>,
}

impl<T: DeserializeOwned> Device<T> {
    /// Reads a device from the TOML file at `path`
    pub fn build(path: PathBuf) -> color_eyre::Result<Self> {
        let s = Config::builder().add_source(File::from(path)).build()?;
        s.try_deserialize()
            .map_err(|e| eyre!("Failed to deserialize device: {:?}", e))
    }

    /// Reads a device from an in-memory TOML document
    pub fn from_toml(contents: &str) -> color_eyre::Result<Self> {
        let s = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?;
        s.try_deserialize()
            .map_err(|e| eyre!("Failed to deserialize device: {:?}", e))
    }
}

impl<T> Device<T> {
    /// The device name, defaulting to the materials in stack order
    pub fn name(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            format!(
                "{}-{}-{}-{}",
                self.top_electrode.material,
                self.ferroelectric.material,
                self.insulator.material,
                self.bottom_electrode.material
            )
        })
    }
}

#[cfg(test)]
mod test {
    use super::Device;
    use crate::{
        device::{BuildInfoDesk, LayerKind},
        error::BuildError,
        units,
    };
    use approx::assert_relative_eq;

    const DEVICE: &str = r#"
        [top_electrode]
        material = "Ag"

        [bottom_electrode]
        material = "Pt"
        screening_length = 0.1

        [insulator]
        material = "Al2O3"
        thickness = 1.0

        [ferroelectric]
        material = "AlScN"
        thickness = 10.0

        [dead_layer]
        thickness = 0.5
        polarization = 5.0
    "#;

    #[test]
    fn device_file_is_read_into_atomic_units() {
        let device: Device<f64> = Device::from_toml(DEVICE).unwrap();
        assert_eq!(device.name(), "Ag-AlScN-Al2O3-Pt");
        let stack = device.build_device_stack().unwrap();
        assert_relative_eq!(units::bohr_to_nm(stack.ferroelectric().thickness()), 10., max_relative = 1e-12);
        assert_relative_eq!(
            units::bohr_to_nm(stack.bottom_electrode().screening_length()),
            0.1,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            units::atomic_to_polarization(stack.dead_layer_polarization()),
            5.,
            max_relative = 1e-12
        );
    }

    #[test]
    fn dead_layer_may_be_omitted() {
        let contents = DEVICE.split("[dead_layer]").next().unwrap();
        let device: Device<f64> = Device::from_toml(contents).unwrap();
        let stack = device.build_device_stack().unwrap();
        assert_eq!(stack.dead_layer().thickness(), 0.);
        assert_eq!(stack.dead_layer_polarization(), 0.);
    }

    #[test]
    fn unknown_materials_fail_to_deserialize() {
        let contents = DEVICE.replace("\"AlScN\"", "\"PZT\"");
        assert!(Device::<f64>::from_toml(&contents).is_err());
    }

    #[test]
    fn zero_ferroelectric_thickness_fails_to_build() {
        let contents = DEVICE.replace("thickness = 10.0", "thickness = 0.0");
        let device: Device<f64> = Device::from_toml(&contents).unwrap();
        assert!(matches!(
            device.build_device_stack(),
            Err(BuildError::NonPositiveThickness(LayerKind::Ferroelectric))
        ));
    }
}
