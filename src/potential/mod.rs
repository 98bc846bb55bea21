// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Potential
//!
//! The one-dimensional electrostatics of the diode. The electrodes, barrier layers and the
//! polarized ferroelectric are treated as capacitors in series: charge balance fixes the
//! surface charge density on the electrodes, from which the voltage drop and field in each
//! layer follow directly.
//!
//! The derived quantities are held in a `PotentialState` which is only refreshed by an explicit
//! call to `Potential::recompute`. The polarization is an argument of that call, so the state is
//! always a function of the inputs it was last handed, and the self-consistent solver which owns
//! the `Potential` sequences the calls.
//!
//! Positions are measured from the outer edge of the top electrode screening region, which
//! extends five screening lengths into the metal.

mod profile;

pub use profile::{PotentialKind, Profile, ProfileGrid};

use crate::{
    device::{DeviceStack, LayerKind, Region, RegionTable},
    error::{BuildError, NumericalError},
    units,
};
use nalgebra::RealField;

/// A quantity evaluated in each of the three layers between the electrodes
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayerValues<T> {
    /// The insulator
    pub insulator: T,
    /// The ferroelectric
    pub ferroelectric: T,
    /// The dead layer
    pub dead_layer: T,
}

impl<T: Copy + RealField> LayerValues<T> {
    fn zero() -> Self {
        Self {
            insulator: T::zero(),
            ferroelectric: T::zero(),
            dead_layer: T::zero(),
        }
    }
}

/// The quantities derived on the last call to `Potential::recompute`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PotentialState<T> {
    /// The applied bias, in atomic units
    pub voltage: T,
    /// The ferroelectric polarization the state was computed for
    pub polarization: T,
    /// The charge density on the electrode surfaces
    pub surface_charge_density: T,
    /// The electrostatic voltage drop across each layer
    pub electrostatic: LayerValues<T>,
    /// The total field in each layer, including the built-in contribution
    pub field: LayerValues<T>,
    /// The potential at the interface between the top screening region and the insulator
    pub top_interface: T,
}

/// The electrostatic model of a single `DeviceStack`
#[derive(Clone, Debug)]
pub struct Potential<T: RealField> {
    stack: DeviceStack<T>,
    regions: RegionTable<T>,
    /// Band offsets of each layer, independent of the bias
    barrier_heights: LayerValues<T>,
    /// Static split of the work function difference across the layers
    built_in: LayerValues<T>,
    state: PotentialState<T>,
}

impl<T: Copy + RealField> Potential<T> {
    /// Takes ownership of the stack, evaluating the static drops and an unbiased, unpolarized state
    pub fn new(stack: DeviceStack<T>) -> Result<Self, NumericalError> {
        let regions = stack.regions();
        let barrier_heights = barrier_heights(&stack);
        let built_in = built_in_drops(&stack);
        let mut potential = Self {
            stack,
            regions,
            barrier_heights,
            built_in,
            state: PotentialState {
                voltage: T::zero(),
                polarization: T::zero(),
                surface_charge_density: T::zero(),
                electrostatic: LayerValues::zero(),
                field: LayerValues::zero(),
                top_interface: T::zero(),
            },
        };
        potential.recompute(T::zero(), T::zero())?;
        Ok(potential)
    }

    /// Solves the series-capacitor problem for the bias `voltage` and ferroelectric `polarization`
    ///
    /// Both arguments are in atomic units. The result is a pure function of the arguments and
    /// the stack, so repeated calls with the same inputs leave the state unchanged.
    pub fn recompute(&mut self, voltage: T, polarization: T) -> Result<(), NumericalError> {
        let epsilon_0 = units::epsilon_0::<T>();
        let stack = &self.stack;
        let (top, bottom) = (&stack.top, &stack.bottom);
        let (insulator, ferroelectric, dead_layer) =
            (&stack.insulator, &stack.ferroelectric, &stack.dead_layer);
        let dead_layer_polarization = stack.dead_layer_polarization;

        let surface_charge_density = (dead_layer_polarization * dead_layer.thickness
            / dead_layer.dielectric_constant
            + polarization * ferroelectric.thickness / ferroelectric.dielectric_constant
            + epsilon_0 * voltage)
            / (top.screening_length / top.dielectric_constant
                + bottom.screening_length / bottom.dielectric_constant
                + dead_layer.thickness / dead_layer.dielectric_constant
                + ferroelectric.thickness / ferroelectric.dielectric_constant
                + insulator.thickness / insulator.dielectric_constant);

        let electrostatic = LayerValues {
            insulator: surface_charge_density / (insulator.dielectric_constant * epsilon_0)
                * insulator.thickness,
            ferroelectric: (surface_charge_density - polarization)
                / (ferroelectric.dielectric_constant * epsilon_0)
                * ferroelectric.thickness,
            dead_layer: (surface_charge_density - dead_layer_polarization)
                / (dead_layer.dielectric_constant * epsilon_0)
                * dead_layer.thickness,
        };
        let top_interface =
            surface_charge_density * top.screening_length / (epsilon_0 * top.dielectric_constant);

        // The barrier layers may be absent, in which case they carry no field
        let mut field = LayerValues::zero();
        if insulator.thickness != T::zero() {
            field.insulator =
                (electrostatic.insulator + self.built_in.insulator) / insulator.thickness;
        }
        if dead_layer.thickness != T::zero() {
            field.dead_layer =
                (electrostatic.dead_layer + self.built_in.dead_layer) / dead_layer.thickness;
        }
        if ferroelectric.thickness == T::zero() {
            return Err(NumericalError::DegenerateLayer(LayerKind::Ferroelectric));
        }
        field.ferroelectric =
            (electrostatic.ferroelectric + self.built_in.ferroelectric) / ferroelectric.thickness;
        if !field.ferroelectric.is_finite() {
            return Err(NumericalError::NonFiniteField(LayerKind::Ferroelectric));
        }

        self.state = PotentialState {
            voltage,
            polarization,
            surface_charge_density,
            electrostatic,
            field,
            top_interface,
        };
        Ok(())
    }

    /// Updates the ferroelectric and dead layer thicknesses
    ///
    /// The region table and built-in drops are rebuilt. The derived state is left as it was,
    /// and is stale until the next call to `recompute`.
    pub fn set_thicknesses(
        &mut self,
        ferroelectric_thickness: T,
        dead_layer_thickness: T,
    ) -> Result<(), BuildError> {
        self.stack
            .set_thicknesses(ferroelectric_thickness, dead_layer_thickness)?;
        self.regions = self.stack.regions();
        self.built_in = built_in_drops(&self.stack);
        Ok(())
    }

    /// The total field in the ferroelectric layer, the quantity which drives domain switching
    pub fn ferroelectric_field(&self) -> T {
        self.state.field.ferroelectric
    }

    /// The quantities derived on the last call to `recompute`
    pub fn state(&self) -> &PotentialState<T> {
        &self.state
    }

    /// The stack
    pub fn stack(&self) -> &DeviceStack<T> {
        &self.stack
    }

    /// The regions
    pub fn regions(&self) -> &RegionTable<T> {
        &self.regions
    }

    /// The band offsets of the insulator, ferroelectric and dead layer
    pub fn barrier_heights(&self) -> &LayerValues<T> {
        &self.barrier_heights
    }

    /// The share of the work function difference dropped across each layer
    pub fn built_in_drops(&self) -> &LayerValues<T> {
        &self.built_in
    }

    /// The electrostatic potential at `x`, decaying exponentially into the electrodes
    pub fn electrostatic_potential(&self, x: T) -> T {
        let located = self.regions.locate(x);
        let state = &self.state;
        let drops = &state.electrostatic;
        let (top, bottom) = (&self.stack.top, &self.stack.bottom);
        match located.region {
            Region::TopContact => T::zero(),
            Region::TopScreening => {
                let width = self.regions.top_interface();
                state.top_interface
                    * (-(width - located.offset).abs() / top.screening_length).exp()
            }
            Region::Insulator => {
                state.top_interface
                    + located.offset / self.stack.insulator.thickness * drops.insulator
            }
            Region::Ferroelectric => {
                state.top_interface
                    + drops.insulator
                    + located.offset / self.stack.ferroelectric.thickness * drops.ferroelectric
            }
            Region::DeadLayer => {
                state.top_interface
                    + drops.insulator
                    + drops.ferroelectric
                    + located.offset / self.stack.dead_layer.thickness * drops.dead_layer
            }
            Region::BottomScreening => {
                -state.surface_charge_density
                    * bottom.screening_length
                    * (-located.offset.abs() / bottom.screening_length).exp()
                    / (units::epsilon_0::<T>() * bottom.dielectric_constant)
                    + state.voltage
            }
            Region::BottomContact => state.voltage,
        }
    }

    /// The conduction band offset at `x`, independent of the bias
    pub fn barrier_potential(&self, x: T) -> T {
        let (top, bottom) = (&self.stack.top, &self.stack.bottom);
        match self.regions.locate(x).region {
            Region::TopContact | Region::TopScreening => T::zero(),
            Region::Insulator => top.fermi_energy + self.barrier_heights.insulator,
            Region::Ferroelectric => bottom.fermi_energy + self.barrier_heights.ferroelectric,
            Region::DeadLayer => bottom.fermi_energy + self.barrier_heights.dead_layer,
            Region::BottomScreening | Region::BottomContact => {
                top.fermi_energy - bottom.fermi_energy
            }
        }
    }

    /// The potential from the electrode work function difference, linear across each layer
    pub fn built_in_potential(&self, x: T) -> T {
        let located = self.regions.locate(x);
        let drops = &self.built_in;
        match located.region {
            Region::Insulator => located.offset / self.stack.insulator.thickness * drops.insulator,
            Region::Ferroelectric => {
                drops.insulator
                    + located.offset / self.stack.ferroelectric.thickness * drops.ferroelectric
            }
            Region::DeadLayer => {
                drops.insulator
                    + drops.ferroelectric
                    + located.offset / self.stack.dead_layer.thickness * drops.dead_layer
            }
            _ => T::zero(),
        }
    }

    /// The superposition of the electrostatic, barrier and built-in potentials
    pub fn total_potential(&self, x: T) -> T {
        self.electrostatic_potential(x) + self.barrier_potential(x) + self.built_in_potential(x)
    }

    /// Samples the potential of the requested kind on every point of `grid`
    pub fn profile(&self, kind: PotentialKind, grid: &ProfileGrid<T>) -> Profile<T> {
        let evaluate = kind.evaluator::<T>();
        Profile {
            kind,
            positions: grid.positions().clone(),
            values: grid.positions().mapv(|x| evaluate(self, x)),
        }
    }
}

fn barrier_heights<T: Copy + RealField>(stack: &DeviceStack<T>) -> LayerValues<T> {
    LayerValues {
        insulator: stack.top.work_function - stack.insulator.electron_affinity,
        ferroelectric: stack.bottom.work_function - stack.ferroelectric.electron_affinity,
        dead_layer: stack.bottom.work_function - stack.dead_layer.electron_affinity,
    }
}

/// Splits the work function difference across the layers in proportion to `t / k`
fn built_in_drops<T: Copy + RealField>(stack: &DeviceStack<T>) -> LayerValues<T> {
    let difference = stack.bottom.work_function - stack.top.work_function;
    let (t_i, k_i) = (stack.insulator.thickness, stack.insulator.dielectric_constant);
    let (t_fe, k_fe) = (stack.ferroelectric.thickness, stack.ferroelectric.dielectric_constant);
    let (t_dl, k_dl) = (stack.dead_layer.thickness, stack.dead_layer.dielectric_constant);
    LayerValues {
        insulator: difference * t_i / (t_i + k_i / k_fe * t_fe + k_i / k_dl * t_dl),
        ferroelectric: difference * t_fe / (t_fe + k_fe / k_i * t_i + k_fe / k_dl * t_dl),
        dead_layer: difference * t_dl / (t_dl + k_dl / k_fe * t_fe + k_dl / k_i * t_i),
    }
}

#[cfg(test)]
mod test {
    use super::Potential;
    use crate::{
        device::{DeviceStack, Electrode, Layer, Region},
        device::info_desk::{ElectrodeMaterial, FerroelectricMaterial, InsulatorMaterial},
        units,
    };
    use approx::assert_relative_eq;

    fn stack(
        top: ElectrodeMaterial,
        insulator_nm: f64,
        dead_layer_nm: f64,
        dead_layer_polarization: f64,
    ) -> DeviceStack<f64> {
        let alscn = FerroelectricMaterial::AlScN.get_info();
        DeviceStack::new(
            "test".into(),
            Electrode::from_info_desk(&top.get_info(), None),
            Electrode::from_info_desk(&ElectrodeMaterial::Pt.get_info(), None),
            Layer::insulator(&InsulatorMaterial::Al2O3.get_info(), units::nm_to_bohr(insulator_nm)),
            Layer::ferroelectric(&alscn, units::nm_to_bohr(10.)),
            Layer::dead_layer(&alscn, units::nm_to_bohr(dead_layer_nm), None),
            units::polarization_to_atomic(dead_layer_polarization),
        )
        .unwrap()
    }

    fn interfaces(potential: &Potential<f64>) -> Vec<f64> {
        let stack = potential.stack();
        let mut position = potential.regions().top_interface();
        let mut positions = vec![position];
        for thickness in [
            stack.insulator().thickness(),
            stack.ferroelectric().thickness(),
            stack.dead_layer().thickness(),
        ] {
            position += thickness;
            positions.push(position);
        }
        positions
    }

    #[test]
    fn recompute_is_a_pure_function_of_its_inputs() {
        let mut potential = Potential::new(stack(ElectrodeMaterial::Ag, 1., 0.5, 5.)).unwrap();
        let polarization = units::polarization_to_atomic(-80.);
        potential.recompute(units::volts_to_atomic(1.5), polarization).unwrap();
        let first = *potential.state();
        potential.recompute(units::volts_to_atomic(-3.), 0.).unwrap();
        potential.recompute(units::volts_to_atomic(1.5), polarization).unwrap();
        assert_eq!(&first, potential.state());
    }

    #[test]
    fn absent_barrier_layers_carry_no_field() {
        let mut potential = Potential::new(stack(ElectrodeMaterial::Ag, 0., 0., 0.)).unwrap();
        potential
            .recompute(units::volts_to_atomic(2.), units::polarization_to_atomic(50.))
            .unwrap();
        let state = potential.state();
        assert_eq!(state.field.insulator, 0.);
        assert_eq!(state.field.dead_layer, 0.);
        assert!(state.field.ferroelectric.is_finite());
        assert_eq!(potential.built_in_drops().insulator, 0.);
    }

    #[test]
    fn electrostatic_drops_sum_to_the_applied_bias() {
        let mut potential = Potential::new(stack(ElectrodeMaterial::Pt, 1., 0.5, 0.)).unwrap();
        let voltage = units::volts_to_atomic(2.);
        potential
            .recompute(voltage, units::polarization_to_atomic(30.))
            .unwrap();
        let bottom = potential.stack().bottom_electrode();
        let state = potential.state();
        let bottom_screening = state.surface_charge_density * bottom.screening_length()
            / (units::epsilon_0::<f64>() * bottom.dielectric_constant());
        let total = state.top_interface
            + state.electrostatic.insulator
            + state.electrostatic.ferroelectric
            + state.electrostatic.dead_layer
            + bottom_screening;
        assert_relative_eq!(total, voltage, max_relative = 1e-10);
    }

    #[test]
    fn electrostatic_potential_is_continuous_across_the_layers() {
        let mut potential = Potential::new(stack(ElectrodeMaterial::Ag, 1., 0.5, 5.)).unwrap();
        potential
            .recompute(units::volts_to_atomic(1.), units::polarization_to_atomic(100.))
            .unwrap();
        let delta = 1e-9;
        let interfaces = interfaces(&potential);
        for &x in &interfaces {
            assert_relative_eq!(
                potential.electrostatic_potential(x),
                potential.electrostatic_potential(x + delta),
                epsilon = 1e-6
            );
        }
        // The built-in potential is referenced to each electrode, so only the inner interfaces are continuous
        for &x in &interfaces[..3] {
            assert_relative_eq!(
                potential.built_in_potential(x),
                potential.built_in_potential(x + delta),
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn potentials_extrapolate_as_constants_beyond_the_stack() {
        let mut potential = Potential::new(stack(ElectrodeMaterial::Ag, 1., 0.5, 0.)).unwrap();
        let voltage = units::volts_to_atomic(0.7);
        potential.recompute(voltage, 0.).unwrap();
        let far = 1e3 * potential.regions().length();
        assert_eq!(potential.electrostatic_potential(-far), 0.);
        assert_eq!(potential.electrostatic_potential(far), voltage);
        assert_eq!(potential.built_in_potential(far), 0.);
        assert_eq!(potential.regions().locate(far).region, Region::BottomContact);
    }

    #[test]
    fn total_potential_is_the_superposition_of_the_parts() {
        let mut potential = Potential::new(stack(ElectrodeMaterial::Cu, 1., 0.5, 0.)).unwrap();
        potential
            .recompute(units::volts_to_atomic(-1.), units::polarization_to_atomic(-60.))
            .unwrap();
        let length = potential.regions().length();
        for index in 0..=50 {
            let x = length * index as f64 / 50.;
            assert_relative_eq!(
                potential.total_potential(x),
                potential.electrostatic_potential(x)
                    + potential.barrier_potential(x)
                    + potential.built_in_potential(x)
            );
        }
    }

    #[test]
    fn identical_electrodes_have_no_built_in_potential() {
        let potential = Potential::new(stack(ElectrodeMaterial::Pt, 1., 0.5, 0.)).unwrap();
        let drops = potential.built_in_drops();
        assert_eq!(drops.insulator, 0.);
        assert_eq!(drops.ferroelectric, 0.);
        assert_eq!(drops.dead_layer, 0.);
    }

    #[test]
    fn built_in_drops_sum_to_the_work_function_difference() {
        let potential = Potential::new(stack(ElectrodeMaterial::Ag, 1., 0.5, 0.)).unwrap();
        let drops = potential.built_in_drops();
        let difference = units::ev_to_hartree(5.65 - 4.26);
        assert_relative_eq!(
            drops.insulator + drops.ferroelectric + drops.dead_layer,
            difference,
            max_relative = 1e-10
        );
    }

    #[test]
    fn positive_polarization_opposes_the_field_in_the_ferroelectric() {
        let mut potential = Potential::new(stack(ElectrodeMaterial::Pt, 0., 0., 0.)).unwrap();
        potential.recompute(0., units::polarization_to_atomic(100.)).unwrap();
        assert!(potential.ferroelectric_field() < 0.);
        potential.recompute(0., units::polarization_to_atomic(-100.)).unwrap();
        assert!(potential.ferroelectric_field() > 0.);
    }

    #[test]
    fn thickness_updates_rebuild_the_regions() {
        let mut potential = Potential::new(stack(ElectrodeMaterial::Ag, 1., 0.5, 0.)).unwrap();
        let before = potential.regions().length();
        potential
            .set_thicknesses(units::nm_to_bohr(5.), units::nm_to_bohr(1.))
            .unwrap();
        assert_relative_eq!(
            before - potential.regions().length(),
            units::nm_to_bohr(4.5),
            max_relative = 1e-10
        );
        assert!(potential.set_thicknesses(0., 0.).is_err());
    }
}
