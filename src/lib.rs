// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Ferrodiode is a simulator for the polarization hysteresis of ferroelectric tunnel junctions
//!
//! # Overview
//! A ferroelectric tunnel junction is a stack of a top electrode, an insulating barrier, a thin
//! ferroelectric film, an optional non-switching dead layer and a bottom electrode. The
//! ferroelectric is modelled as an ensemble of independent bistable domains whose saturation
//! polarizations and coercive fields are drawn from distributions parameterised by the alloy
//! composition, after the Preisach model.
//!
//! At each applied bias the electrostatics of the stack fix the field in the ferroelectric from
//! the current average polarization, and that field in turn switches domains. Iterating the two
//! until the polarization stops changing gives the self-consistent state at that bias. Sweeping the
//! bias up and back down while carrying the ensemble over from point to point traces the
//! hysteresis loop.
//!
//! # Usage
//! Ferrodiode is distributed as a binary crate, and is intended to be run from the command line.
//! To run the software first define a structure in a `.toml` file:
//!
//! ```toml
//! [top_electrode]
//! material = "Pt"
//!
//! [bottom_electrode]
//! material = "Pt"
//!
//! [insulator]
//! material = "Al2O3"
//! thickness = 0.0
//!
//! [ferroelectric]
//! material = "AlScN"
//! thickness = 10.0
//! ```
//!
//! where lengths are in nanometres, and an optional `[dead_layer]` table adds a non-switching
//! layer beneath the ferroelectric. Numerical settings are read from `.config/default.toml`.

#![warn(missing_docs)]
#![allow(clippy::type_complexity)]

/// The command line global application, tracing and display primitives
pub mod app;

/// Physical constants
mod constants;

/// Device description and the assembled layer stack
pub mod device;

/// Error handling
pub mod error;

/// Switching domains and their ensemble
pub mod ferroelectric;

/// Figures of merit of a hysteresis loop
pub mod postprocessor;

/// Electrostatics of the stack
pub mod potential;

/// The self-consistent field and polarization loop
pub mod solver;

/// Conversions between practical and atomic units
pub mod units;
