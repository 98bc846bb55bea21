//! # Units
//!
//! Conversions between practical units and the Hartree atomic units used inside the solver.
//!
//! Every physical quantity stored by the device stack, the domain ensemble and the potential
//! is held in atomic units: energies in Hartree, lengths in Bohr, polarizations in `e / a_0^2`
//! and fields in `E_h / (e a_0)`. Values only leave atomic units at the edge of the program,
//! when they are read from a device file or written to a results file.

use crate::constants::{
    ATOMIC_CURRENT_IN_UA, ATOMIC_FIELD_IN_MV_PER_CM, BOHR_IN_CM, BOHR_IN_METRE, BOHR_IN_UM,
    ELECTRON_CHARGE, HARTREE_IN_EV, HARTREE_IN_JOULE, MICROCOULOMB_CHARGE,
};
use nalgebra::RealField;

fn cast<T: RealField>(value: f64) -> T {
    T::from_f64(value).expect("Physical constant must fit in T")
}

/// The vacuum permittivity in atomic units, `1 / 4 pi`
pub fn epsilon_0<T: Copy + RealField>() -> T {
    T::one() / (T::pi() * cast(4.))
}

/// Converts from eV to Hartree
pub fn ev_to_hartree<T: RealField>(energy: T) -> T {
    energy / cast(HARTREE_IN_EV)
}

/// Converts from Hartree to eV
pub fn hartree_to_ev<T: RealField>(energy: T) -> T {
    energy * cast(HARTREE_IN_EV)
}

/// Converts from nm to Bohr
pub fn nm_to_bohr<T: RealField>(length: T) -> T {
    length / cast(BOHR_IN_METRE * 1e9)
}

/// Converts from Bohr to nm
pub fn bohr_to_nm<T: RealField>(length: T) -> T {
    length * cast(BOHR_IN_METRE * 1e9)
}

/// Converts from m to Bohr
pub fn m_to_bohr<T: RealField>(length: T) -> T {
    length / cast(BOHR_IN_METRE)
}

/// Converts from Bohr to m
pub fn bohr_to_m<T: RealField>(length: T) -> T {
    length * cast(BOHR_IN_METRE)
}

/// Converts an applied bias in volts to the potential energy of an electron in Hartree
pub fn volts_to_atomic<T: RealField>(voltage: T) -> T {
    voltage / cast(HARTREE_IN_EV)
}

/// Converts a potential energy in Hartree to a bias in volts
pub fn atomic_to_volts<T: RealField>(voltage: T) -> T {
    voltage * cast(HARTREE_IN_EV)
}

/// Converts a polarization in uC / cm^2 to atomic units
pub fn polarization_to_atomic<T: RealField>(polarization: T) -> T {
    polarization / cast(MICROCOULOMB_CHARGE) * cast(BOHR_IN_CM * BOHR_IN_CM)
}

/// Converts an atomic polarization to uC / cm^2
pub fn atomic_to_polarization<T: RealField>(polarization: T) -> T {
    polarization * cast(MICROCOULOMB_CHARGE) / cast(BOHR_IN_CM * BOHR_IN_CM)
}

/// Converts a polarization in uC / cm^2 to C / m^2
pub fn uc_per_cm2_to_c_per_m2<T: RealField>(polarization: T) -> T {
    polarization / cast(1e2)
}

/// Converts a number density in m^-3 to atomic units
pub fn density_to_atomic<T: RealField>(density: T) -> T {
    density * cast(BOHR_IN_METRE * BOHR_IN_METRE * BOHR_IN_METRE)
}

/// Converts an atomic number density to m^-3
pub fn atomic_to_density<T: RealField>(density: T) -> T {
    density / cast(BOHR_IN_METRE * BOHR_IN_METRE * BOHR_IN_METRE)
}

/// Converts from Hartree to joules
pub fn hartree_to_joule<T: RealField>(energy: T) -> T {
    energy * cast(HARTREE_IN_JOULE)
}

/// Converts from joule to Hartree
pub fn joule_to_hartree<T: RealField>(energy: T) -> T {
    energy / cast(HARTREE_IN_JOULE)
}

/// Converts from joule to eV
pub fn joule_to_ev<T: RealField>(energy: T) -> T {
    energy / cast(ELECTRON_CHARGE)
}

/// Converts from eV to joule
pub fn ev_to_joule<T: RealField>(energy: T) -> T {
    energy * cast(ELECTRON_CHARGE)
}

/// Converts an electric field in MV / cm to atomic units
pub fn field_to_atomic<T: RealField>(field: T) -> T {
    field / cast(ATOMIC_FIELD_IN_MV_PER_CM)
}

/// Converts an atomic electric field to MV / cm
pub fn atomic_to_field<T: RealField>(field: T) -> T {
    field * cast(ATOMIC_FIELD_IN_MV_PER_CM)
}

/// Converts an atomic current density to uA / um^2
pub fn atomic_to_current_density<T: RealField>(current_density: T) -> T {
    current_density * cast(ATOMIC_CURRENT_IN_UA) / cast(BOHR_IN_UM * BOHR_IN_UM)
}
