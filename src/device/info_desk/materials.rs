use super::{ElectrodeInfoDesk, FerroelectricInfoDesk, InsulatorInfoDesk};
use crate::units;
use nalgebra::RealField;

#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[non_exhaustive]
/// Enum with all implemented metal electrodes
///
/// As materials may be added in future this is labelled as `non_exhaustive`
pub enum ElectrodeMaterial {
    /// Silver
    Ag,
    /// Copper
    Cu,
    /// Platinum
    Pt,
    /// Titanium
    Ti,
    /// Palladium
    Pd,
    /// Aluminium
    Al,
    /// A fictitious electrode for testing
    Test,
}

impl std::fmt::Display for ElectrodeMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ElectrodeMaterial::Ag => write!(f, "Ag"),
            ElectrodeMaterial::Cu => write!(f, "Cu"),
            ElectrodeMaterial::Pt => write!(f, "Pt"),
            ElectrodeMaterial::Ti => write!(f, "Ti"),
            ElectrodeMaterial::Pd => write!(f, "Pd"),
            ElectrodeMaterial::Al => write!(f, "Al"),
            ElectrodeMaterial::Test => write!(f, "Test"),
        }
    }
}

impl ElectrodeMaterial {
    /// Builds an instance of `ElectrodeInfoDesk` for the given `ElectrodeMaterial` variant
    pub fn get_info<T: Copy + RealField>(&self) -> ElectrodeInfoDesk<T> {
        match self {
            ElectrodeMaterial::Ag => ElectrodeInfoDesk::silver(),
            ElectrodeMaterial::Cu => ElectrodeInfoDesk::copper(),
            ElectrodeMaterial::Pt => ElectrodeInfoDesk::platinum(),
            ElectrodeMaterial::Ti => ElectrodeInfoDesk::titanium(),
            ElectrodeMaterial::Pd => ElectrodeInfoDesk::palladium(),
            ElectrodeMaterial::Al => ElectrodeInfoDesk::aluminium(),
            ElectrodeMaterial::Test => ElectrodeInfoDesk::test(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[non_exhaustive]
/// Enum with all implemented insulating barrier materials
pub enum InsulatorMaterial {
    /// Alumina
    Al2O3,
    /// A low permittivity interfacial layer
    DeadLayer,
    /// Hafnia
    HfO2,
    /// Titania
    TiO2,
    /// Silica
    SiO2,
    /// Hexagonal boron nitride
    #[serde(rename = "hBN")]
    HexagonalBoronNitride,
}

impl std::fmt::Display for InsulatorMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            InsulatorMaterial::Al2O3 => write!(f, "Al2O3"),
            InsulatorMaterial::DeadLayer => write!(f, "DeadLayer"),
            InsulatorMaterial::HfO2 => write!(f, "HfO2"),
            InsulatorMaterial::TiO2 => write!(f, "TiO2"),
            InsulatorMaterial::SiO2 => write!(f, "SiO2"),
            InsulatorMaterial::HexagonalBoronNitride => write!(f, "hBN"),
        }
    }
}

impl InsulatorMaterial {
    /// Builds an instance of `InsulatorInfoDesk` for the given `InsulatorMaterial` variant
    pub fn get_info<T: Copy + RealField>(&self) -> InsulatorInfoDesk<T> {
        match self {
            InsulatorMaterial::Al2O3 => InsulatorInfoDesk::alumina(),
            InsulatorMaterial::DeadLayer => InsulatorInfoDesk::dead_layer(),
            InsulatorMaterial::HfO2 => InsulatorInfoDesk::hafnia(),
            InsulatorMaterial::TiO2 => InsulatorInfoDesk::titania(),
            InsulatorMaterial::SiO2 => InsulatorInfoDesk::silica(),
            InsulatorMaterial::HexagonalBoronNitride => InsulatorInfoDesk::hexagonal_boron_nitride(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[non_exhaustive]
/// Enum with all implemented ferroelectrics
pub enum FerroelectricMaterial {
    /// Scandium-alloyed aluminium nitride
    AlScN,
}

impl std::fmt::Display for FerroelectricMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            FerroelectricMaterial::AlScN => write!(f, "AlScN"),
        }
    }
}

impl FerroelectricMaterial {
    /// Builds an instance of `FerroelectricInfoDesk` for the given `FerroelectricMaterial` variant
    pub fn get_info<T: Copy + RealField>(&self) -> FerroelectricInfoDesk<T> {
        match self {
            FerroelectricMaterial::AlScN => FerroelectricInfoDesk::aluminium_scandium_nitride(),
        }
    }
}

impl<T: Copy + RealField> ElectrodeInfoDesk<T> {
    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn silver() -> Self {
        Self {
            density: units::density_to_atomic(5.86e28),
            fermi_energy: units::ev_to_hartree(5.49),
            work_function: units::ev_to_hartree(4.26),
            screening_length: None,
            dielectric_constant: 5.,
            effective_mass: 1.,
        }
    }

    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn copper() -> Self {
        Self {
            density: units::density_to_atomic(8.47e28),
            fermi_energy: units::ev_to_hartree(7.),
            work_function: units::ev_to_hartree(4.7),
            screening_length: None,
            dielectric_constant: 2.5,
            effective_mass: 1.,
        }
    }

    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn platinum() -> Self {
        Self {
            density: units::density_to_atomic(7e28),
            fermi_energy: units::ev_to_hartree(6.1399),
            work_function: units::ev_to_hartree(5.65),
            screening_length: Some(units::nm_to_bohr(0.05)),
            dielectric_constant: 8.,
            effective_mass: 1.,
        }
    }

    // The titanium, palladium and aluminium screening lengths are tabulated in Bohr
    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn titanium() -> Self {
        Self {
            density: units::density_to_atomic(7e28),
            fermi_energy: units::ev_to_hartree(4.354),
            work_function: units::ev_to_hartree(4.33),
            screening_length: Some(0.1),
            dielectric_constant: 1.,
            effective_mass: 1.,
        }
    }

    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn palladium() -> Self {
        Self {
            density: units::density_to_atomic(7e28),
            fermi_energy: units::ev_to_hartree(4.354),
            work_function: units::ev_to_hartree(5.3),
            screening_length: Some(0.1),
            dielectric_constant: 1.,
            effective_mass: 1.,
        }
    }

    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn aluminium() -> Self {
        Self {
            density: units::density_to_atomic(7e28),
            fermi_energy: units::ev_to_hartree(4.354),
            work_function: units::ev_to_hartree(4.08),
            screening_length: Some(0.1),
            dielectric_constant: 1.,
            effective_mass: 1.,
        }
    }

    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn test() -> Self {
        Self {
            density: units::density_to_atomic(7e28),
            fermi_energy: units::ev_to_hartree(4.354),
            work_function: units::ev_to_hartree(4.08),
            screening_length: Some(1.),
            dielectric_constant: 1.,
            effective_mass: 1.,
        }
    }
}

impl<T: Copy + RealField> InsulatorInfoDesk<T> {
    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn alumina() -> Self {
        Self {
            dielectric_constant: 9.3,
            electron_affinity: units::ev_to_hartree(0.5),
            effective_mass: 0.4,
        }
    }

    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn dead_layer() -> Self {
        Self {
            dielectric_constant: 8.,
            electron_affinity: units::ev_to_hartree(1.5),
            effective_mass: 0.3,
        }
    }

    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn hafnia() -> Self {
        Self {
            dielectric_constant: 16.64,
            electron_affinity: units::ev_to_hartree(2.0),
            effective_mass: 0.11,
        }
    }

    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn titania() -> Self {
        Self {
            dielectric_constant: 89.8,
            electron_affinity: units::ev_to_hartree(1.59),
            effective_mass: 5.,
        }
    }

    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn silica() -> Self {
        Self {
            dielectric_constant: 3.9,
            electron_affinity: units::ev_to_hartree(0.95),
            effective_mass: 0.3,
        }
    }

    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn hexagonal_boron_nitride() -> Self {
        Self {
            dielectric_constant: 3.76,
            electron_affinity: units::ev_to_hartree(2.3),
            effective_mass: 0.5,
        }
    }
}

impl<T: Copy + RealField> FerroelectricInfoDesk<T> {
    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn aluminium_scandium_nitride() -> Self {
        Self {
            dielectric_constant: 16.,
            electron_affinity: units::ev_to_hartree(1.),
            effective_mass: 0.3,
        }
    }
}
