//! Generates and returns compile-time defined material properties
//!
//! This module defines the material enums which represent all materials implemented
//! in the simulation software, and the `DeviceStack` which collects the parameters of a
//! single metal-insulator-ferroelectric-insulator-metal diode in atomic units.

mod materials;

pub use materials::{ElectrodeMaterial, FerroelectricMaterial, InsulatorMaterial};

use super::{reader::Device, LayerKind, Region, RegionTable};
use crate::{
    constants::{ELECTRON_CHARGE, EPSILON_0},
    error::BuildError,
    units,
};
use nalgebra::RealField;

/// Tabulated properties of a metal electrode, in atomic units
#[derive(Clone, Debug)]
pub struct ElectrodeInfoDesk<T: RealField> {
    /// Free carrier density
    pub(crate) density: T,
    pub(crate) fermi_energy: T,
    pub(crate) work_function: T,
    /// Tabulated screening length, if `None` the Thomas-Fermi length is derived from the density
    pub(crate) screening_length: Option<T>,
    /// Static lattice dielectric constant
    pub(crate) dielectric_constant: T,
    pub(crate) effective_mass: T,
}

/// Tabulated properties of an insulating barrier, in atomic units
#[derive(Clone, Debug)]
pub struct InsulatorInfoDesk<T: RealField> {
    pub(crate) dielectric_constant: T,
    pub(crate) electron_affinity: T,
    pub(crate) effective_mass: T,
}

/// Tabulated properties of a ferroelectric, in atomic units
#[derive(Clone, Debug)]
pub struct FerroelectricInfoDesk<T: RealField> {
    pub(crate) dielectric_constant: T,
    pub(crate) electron_affinity: T,
    pub(crate) effective_mass: T,
}

/// An electrode as it enters the electrostatics
#[derive(Clone, Debug, PartialEq)]
pub struct Electrode<T: RealField> {
    pub(crate) work_function: T,
    pub(crate) fermi_energy: T,
    pub(crate) dielectric_constant: T,
    pub(crate) screening_length: T,
    pub(crate) effective_mass: T,
}

impl<T: Copy + RealField> Electrode<T> {
    /// Builds an electrode from its tabulated properties
    ///
    /// The `screening_length` override takes precedence over the tabulated value, and when
    /// neither is present the Thomas-Fermi screening length is derived from the density.
    pub fn from_info_desk(info_desk: &ElectrodeInfoDesk<T>, screening_length: Option<T>) -> Self {
        let screening_length = screening_length
            .or(info_desk.screening_length)
            .unwrap_or_else(|| thomas_fermi_screening_length(info_desk));
        Self {
            work_function: info_desk.work_function,
            fermi_energy: info_desk.fermi_energy,
            dielectric_constant: info_desk.dielectric_constant,
            screening_length,
            effective_mass: info_desk.effective_mass,
        }
    }

    /// The work function, in Hartree
    pub fn work_function(&self) -> T {
        self.work_function
    }

    /// The fermi energy
    pub fn fermi_energy(&self) -> T {
        self.fermi_energy
    }

    /// The screening length in Bohr, tabulated, overridden or derived
    pub fn screening_length(&self) -> T {
        self.screening_length
    }

    /// The dielectric constant
    pub fn dielectric_constant(&self) -> T {
        self.dielectric_constant
    }
}

/// The Thomas-Fermi screening length `sqrt(2 k e_0 E_F / 3 e^2 n_0)`, evaluated in SI and returned in Bohr
#[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
fn thomas_fermi_screening_length<T: Copy + RealField>(info_desk: &ElectrodeInfoDesk<T>) -> T {
    let epsilon_0 = T::from_f64(EPSILON_0).unwrap();
    let charge = T::from_f64(ELECTRON_CHARGE).unwrap();
    let length_squared = info_desk.dielectric_constant
        * 2.
        * epsilon_0
        * units::hartree_to_joule(info_desk.fermi_energy)
        / (3. * charge * charge * units::atomic_to_density(info_desk.density));
    units::m_to_bohr(length_squared.sqrt())
}

/// A planar layer between the two electrodes
#[derive(Clone, Debug, PartialEq)]
pub struct Layer<T: RealField> {
    pub(crate) thickness: T,
    pub(crate) dielectric_constant: T,
    pub(crate) electron_affinity: T,
    pub(crate) effective_mass: T,
}

impl<T: Copy + RealField> Layer<T> {
    /// A layer from explicit parameters, all in atomic units
    pub fn new(thickness: T, dielectric_constant: T, electron_affinity: T, effective_mass: T) -> Self {
        Self {
            thickness,
            dielectric_constant,
            electron_affinity,
            effective_mass,
        }
    }

    /// An insulating layer of the catalogued material
    pub fn insulator(info_desk: &InsulatorInfoDesk<T>, thickness: T) -> Self {
        Self::new(
            thickness,
            info_desk.dielectric_constant,
            info_desk.electron_affinity,
            info_desk.effective_mass,
        )
    }

    /// The ferroelectric
    pub fn ferroelectric(info_desk: &FerroelectricInfoDesk<T>, thickness: T) -> Self {
        Self::new(
            thickness,
            info_desk.dielectric_constant,
            info_desk.electron_affinity,
            info_desk.effective_mass,
        )
    }

    /// The interfacial dead layer shares the band parameters of the ferroelectric, by default with half its permittivity
    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    pub fn dead_layer(
        info_desk: &FerroelectricInfoDesk<T>,
        thickness: T,
        dielectric_constant: Option<T>,
    ) -> Self {
        Self::new(
            thickness,
            dielectric_constant.unwrap_or(info_desk.dielectric_constant / 2.),
            info_desk.electron_affinity,
            info_desk.effective_mass,
        )
    }

    /// The thickness in Bohr
    pub fn thickness(&self) -> T {
        self.thickness
    }

    /// The dielectric constant
    pub fn dielectric_constant(&self) -> T {
        self.dielectric_constant
    }

    /// The electron affinity
    pub fn electron_affinity(&self) -> T {
        self.electron_affinity
    }
}

/// Struct holding all the geometric and material information of the diode
///
/// The stack is ordered from the top electrode: top electrode, insulator, ferroelectric,
/// dead layer, bottom electrode. All quantities are in atomic units.
#[derive(Clone, Debug)]
pub struct DeviceStack<T: RealField> {
    pub(crate) name: String,
    pub(crate) top: Electrode<T>,
    pub(crate) bottom: Electrode<T>,
    pub(crate) insulator: Layer<T>,
    pub(crate) ferroelectric: Layer<T>,
    pub(crate) dead_layer: Layer<T>,
    /// The dead layer carries no spontaneous polarization unless one is requested
    pub(crate) dead_layer_polarization: T,
    /// Cached sum of the insulator, ferroelectric and dead layer thicknesses
    pub(crate) barrier_thickness: T,
}

impl<T: Copy + RealField> DeviceStack<T> {
    /// Validates and assembles a stack
    pub fn new(
        name: String,
        top: Electrode<T>,
        bottom: Electrode<T>,
        insulator: Layer<T>,
        ferroelectric: Layer<T>,
        dead_layer: Layer<T>,
        dead_layer_polarization: T,
    ) -> Result<Self, BuildError> {
        validate_thickness(LayerKind::Insulator, insulator.thickness)?;
        validate_thickness(LayerKind::Ferroelectric, ferroelectric.thickness)?;
        validate_thickness(LayerKind::DeadLayer, dead_layer.thickness)?;
        if ferroelectric.thickness == T::zero() {
            return Err(BuildError::NonPositiveThickness(LayerKind::Ferroelectric));
        }
        for (kind, electrode) in [
            (LayerKind::TopElectrode, &top),
            (LayerKind::BottomElectrode, &bottom),
        ] {
            validate_positive(kind, "screening length", electrode.screening_length)?;
            validate_positive(kind, "dielectric constant", electrode.dielectric_constant)?;
        }
        for (kind, layer) in [
            (LayerKind::Insulator, &insulator),
            (LayerKind::Ferroelectric, &ferroelectric),
            (LayerKind::DeadLayer, &dead_layer),
        ] {
            validate_positive(kind, "dielectric constant", layer.dielectric_constant)?;
        }
        if !dead_layer_polarization.is_finite() {
            return Err(BuildError::Material(
                "the dead layer polarization must be finite".into(),
            ));
        }

        let barrier_thickness = insulator.thickness + ferroelectric.thickness + dead_layer.thickness;
        Ok(Self {
            name,
            top,
            bottom,
            insulator,
            ferroelectric,
            dead_layer,
            dead_layer_polarization,
            barrier_thickness,
        })
    }

    /// Updates the ferroelectric and dead layer thicknesses, refreshing the cached barrier thickness
    ///
    /// Quantities derived from the geometry by other structures are not updated here, the
    /// `Potential` delegates to this method and rebuilds its own caches.
    pub fn set_thicknesses(
        &mut self,
        ferroelectric_thickness: T,
        dead_layer_thickness: T,
    ) -> Result<(), BuildError> {
        validate_thickness(LayerKind::Ferroelectric, ferroelectric_thickness)?;
        validate_thickness(LayerKind::DeadLayer, dead_layer_thickness)?;
        if ferroelectric_thickness == T::zero() {
            return Err(BuildError::NonPositiveThickness(LayerKind::Ferroelectric));
        }
        self.ferroelectric.thickness = ferroelectric_thickness;
        self.dead_layer.thickness = dead_layer_thickness;
        self.barrier_thickness =
            self.insulator.thickness + self.ferroelectric.thickness + self.dead_layer.thickness;
        Ok(())
    }

    /// The electron effective mass at position `x`, measured from the outer edge of the top screening region
    pub fn effective_mass(&self, x: T) -> T {
        match self.regions().locate(x).region {
            Region::TopContact | Region::TopScreening => self.top.effective_mass,
            Region::Insulator => self.insulator.effective_mass,
            Region::Ferroelectric => self.ferroelectric.effective_mass,
            Region::DeadLayer => self.dead_layer.effective_mass,
            Region::BottomScreening | Region::BottomContact => self.bottom.effective_mass,
        }
    }

    /// The ordered table of region boundaries for this stack
    pub fn regions(&self) -> RegionTable<T> {
        RegionTable::from_stack(self)
    }

    /// The name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The top electrode
    pub fn top_electrode(&self) -> &Electrode<T> {
        &self.top
    }

    /// The bottom electrode
    pub fn bottom_electrode(&self) -> &Electrode<T> {
        &self.bottom
    }

    /// The insulator
    pub fn insulator(&self) -> &Layer<T> {
        &self.insulator
    }

    /// The ferroelectric
    pub fn ferroelectric(&self) -> &Layer<T> {
        &self.ferroelectric
    }

    /// The dead layer, of zero thickness when the device has none
    pub fn dead_layer(&self) -> &Layer<T> {
        &self.dead_layer
    }

    /// The fixed polarization of the dead layer, in atomic units
    pub fn dead_layer_polarization(&self) -> T {
        self.dead_layer_polarization
    }

    /// The barrier thickness
    pub fn barrier_thickness(&self) -> T {
        self.barrier_thickness
    }
}

fn validate_thickness<T: Copy + RealField>(kind: LayerKind, thickness: T) -> Result<(), BuildError> {
    if thickness.is_finite() && thickness >= T::zero() {
        Ok(())
    } else {
        Err(BuildError::InvalidThickness(kind))
    }
}

fn validate_positive<T: Copy + RealField>(
    kind: LayerKind,
    quantity: &str,
    value: T,
) -> Result<(), BuildError> {
    if value.is_finite() && value > T::zero() {
        Ok(())
    } else {
        Err(BuildError::Material(format!(
            "the {kind} must have a positive {quantity}"
        )))
    }
}

/// A helper trait to build an instance of `DeviceStack`
pub trait BuildInfoDesk<T: RealField> {
    /// Looks up every material in the catalog and assembles a validated `DeviceStack`
    fn build_device_stack(&self) -> Result<DeviceStack<T>, BuildError>;
}

impl<T: Copy + RealField> BuildInfoDesk<T> for Device<T> {
    fn build_device_stack(&self) -> Result<DeviceStack<T>, BuildError> {
        let ferroelectric_info = self.ferroelectric.material.get_info::<T>();
        let insulator_info = self.insulator.material.get_info::<T>();

        let top = Electrode::from_info_desk(
            &self.top_electrode.material.get_info(),
            self.top_electrode.screening_length.map(units::nm_to_bohr),
        );
        let bottom = Electrode::from_info_desk(
            &self.bottom_electrode.material.get_info(),
            self.bottom_electrode.screening_length.map(units::nm_to_bohr),
        );
        let insulator = Layer::insulator(&insulator_info, units::nm_to_bohr(self.insulator.thickness));
        let ferroelectric = Layer::ferroelectric(
            &ferroelectric_info,
            units::nm_to_bohr(self.ferroelectric.thickness),
        );
        let (dead_layer, dead_layer_polarization) = match &self.dead_layer {
            Some(dead_layer) => (
                Layer::dead_layer(
                    &ferroelectric_info,
                    units::nm_to_bohr(dead_layer.thickness),
                    dead_layer.dielectric_constant,
                ),
                dead_layer
                    .polarization
                    .map(units::polarization_to_atomic)
                    .unwrap_or_else(T::zero),
            ),
            None => (
                Layer::dead_layer(&ferroelectric_info, T::zero(), None),
                T::zero(),
            ),
        };

        DeviceStack::new(
            self.name(),
            top,
            bottom,
            insulator,
            ferroelectric,
            dead_layer,
            dead_layer_polarization,
        )
    }
}

#[cfg(test)]
mod test {
    use super::{DeviceStack, Electrode, ElectrodeMaterial, FerroelectricMaterial, InsulatorMaterial, Layer};
    use crate::{device::LayerKind, error::BuildError, units};
    use approx::assert_relative_eq;

    fn stack(insulator_nm: f64, ferroelectric_nm: f64, dead_layer_nm: f64) -> Result<DeviceStack<f64>, BuildError> {
        let platinum = Electrode::from_info_desk(&ElectrodeMaterial::Pt.get_info(), None);
        let alscn = FerroelectricMaterial::AlScN.get_info();
        DeviceStack::new(
            "Pt-AlScN-Al2O3-Pt".into(),
            platinum.clone(),
            platinum,
            Layer::insulator(&InsulatorMaterial::Al2O3.get_info(), units::nm_to_bohr(insulator_nm)),
            Layer::ferroelectric(&alscn, units::nm_to_bohr(ferroelectric_nm)),
            Layer::dead_layer(&alscn, units::nm_to_bohr(dead_layer_nm), None),
            0.,
        )
    }

    #[test]
    fn silver_screening_length_is_derived_from_the_thomas_fermi_expression() {
        let silver = Electrode::<f64>::from_info_desk(&ElectrodeMaterial::Ag.get_info(), None);
        // sqrt(2 * 5 * e_0 * 5.49 eV / (3 e^2 * 5.86e28 m^-3)) ~ 0.1314 nm
        assert_relative_eq!(units::bohr_to_nm(silver.screening_length()), 0.1314, max_relative = 1e-3);
    }

    #[test]
    fn screening_length_override_takes_precedence_over_the_catalog() {
        let platinum = Electrode::<f64>::from_info_desk(&ElectrodeMaterial::Pt.get_info(), Some(3.));
        assert_relative_eq!(platinum.screening_length(), 3.);
        let titanium = Electrode::<f64>::from_info_desk(&ElectrodeMaterial::Ti.get_info(), None);
        assert_relative_eq!(titanium.screening_length(), 0.1);
    }

    #[test]
    fn barrier_thickness_is_the_sum_of_the_inner_layers() {
        let stack = stack(1., 10., 0.5).unwrap();
        assert_relative_eq!(units::bohr_to_nm(stack.barrier_thickness()), 11.5, max_relative = 1e-12);
    }

    #[test]
    fn dead_layer_defaults_to_half_the_ferroelectric_permittivity() {
        let stack = stack(1., 10., 0.5).unwrap();
        assert_relative_eq!(stack.dead_layer().dielectric_constant(), 8.);
        assert_relative_eq!(
            stack.dead_layer().electron_affinity(),
            stack.ferroelectric().electron_affinity()
        );
    }

    #[test]
    fn zero_thickness_ferroelectric_is_rejected() {
        assert!(matches!(
            stack(1., 0., 0.5),
            Err(BuildError::NonPositiveThickness(LayerKind::Ferroelectric))
        ));
    }

    #[test]
    fn negative_thickness_is_rejected() {
        assert!(matches!(
            stack(-1., 10., 0.5),
            Err(BuildError::InvalidThickness(LayerKind::Insulator))
        ));
        assert!(matches!(
            stack(1., 10., f64::NAN),
            Err(BuildError::InvalidThickness(LayerKind::DeadLayer))
        ));
    }

    #[test]
    fn zero_thickness_insulator_and_dead_layer_are_allowed() {
        assert!(stack(0., 10., 0.).is_ok());
    }

    #[test]
    fn thickness_update_refreshes_the_barrier_thickness() {
        let mut stack = stack(1., 10., 0.5).unwrap();
        stack
            .set_thicknesses(units::nm_to_bohr(5.), units::nm_to_bohr(1.))
            .unwrap();
        assert_relative_eq!(units::bohr_to_nm(stack.barrier_thickness()), 7., max_relative = 1e-12);
        assert!(stack.set_thicknesses(0., 1.).is_err());
        // A rejected update leaves the stack untouched
        assert_relative_eq!(units::bohr_to_nm(stack.barrier_thickness()), 7., max_relative = 1e-12);
    }

    #[test]
    fn effective_mass_follows_the_layer_order() {
        let stack = stack(1., 10., 1.).unwrap();
        let screening = 5. * stack.top_electrode().screening_length();
        let insulator = units::nm_to_bohr(1.);
        let ferroelectric = units::nm_to_bohr(10.);
        assert_relative_eq!(stack.effective_mass(-1.), 1.);
        assert_relative_eq!(stack.effective_mass(screening + 0.5 * insulator), 0.4);
        assert_relative_eq!(stack.effective_mass(screening + insulator + 1.), 0.3);
        assert_relative_eq!(
            stack.effective_mass(screening + insulator + ferroelectric + 1.),
            0.3
        );
        assert_relative_eq!(stack.effective_mass(1e6), 1.);
    }
}
