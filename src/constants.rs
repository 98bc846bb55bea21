// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Constants
//!
//! Defines physical constants used in the simulation

pub const ELECTRON_CHARGE: f64 = 1.602176634e-19; // Single electron charge in C
pub const EPSILON_0: f64 = 8.8541878128e-12; // Permitivitty of free space in F / m

pub const HARTREE_IN_EV: f64 = 27.21138624598853; // Hartree energy in eV
pub const HARTREE_IN_JOULE: f64 = 4.359744722207185e-18; // Hartree energy in J
pub const BOHR_IN_METRE: f64 = 5.2917721090380e-11; // Bohr radius in m
pub const BOHR_IN_CM: f64 = 5.291772109038e-9; // Bohr radius in cm
pub const BOHR_IN_UM: f64 = 5.291772109038e-5; // Bohr radius in um
pub const ATOMIC_FIELD_IN_MV_PER_CM: f64 = 5.1422067476378e3; // Atomic unit of field in MV / cm
pub const ATOMIC_CURRENT_IN_UA: f64 = 6.62361823751013e3; // Atomic unit of current in uA
pub const MICROCOULOMB_CHARGE: f64 = 1.602176634e-13; // Electron charge in uC
