// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::device::LayerKind;
use miette::Diagnostic;

#[derive(thiserror::Error, Debug, Diagnostic)]
/// Errors raised while constructing the device stack or the domain ensemble
///
/// These are always fatal: a structure which fails to build is never handed to the solver.
pub enum BuildError {
    /// An ensemble was requested with no domains
    #[error("the domain ensemble must contain at least one domain")]
    #[diagnostic(code(ferrodiode::build::empty_ensemble))]
    EmptyEnsemble,
    /// Invalid moments of a sampling distribution
    #[error("{0}")]
    #[diagnostic(code(ferrodiode::build::distribution))]
    Distribution(String),
    /// A negative or non-finite layer thickness
    #[error("the {0} must have a finite, non-negative thickness")]
    #[diagnostic(code(ferrodiode::build::thickness))]
    InvalidThickness(LayerKind),
    /// A layer which must be present was given zero thickness
    #[error("the {0} must have a positive thickness")]
    #[diagnostic(code(ferrodiode::build::thickness))]
    NonPositiveThickness(LayerKind),
    /// A non-positive screening length, permittivity or similar material parameter
    #[error("{0}")]
    #[diagnostic(code(ferrodiode::build::material))]
    Material(String),
    /// Invalid parameters for a bias sweep or profile grid
    #[error("{0}")]
    #[diagnostic(code(ferrodiode::build::grid))]
    Grid(String),
}

#[derive(thiserror::Error, Debug, Diagnostic)]
/// Errors raised when the electrostatics produce a value the solver cannot continue from
pub enum NumericalError {
    /// A field was requested across a layer of zero thickness
    #[error("the field in the {0} divides by a zero layer thickness")]
    #[diagnostic(code(ferrodiode::numerical::degenerate_layer))]
    DegenerateLayer(LayerKind),
    /// The field evaluated to infinity or NaN
    #[error("the field in the {0} is not finite")]
    #[diagnostic(code(ferrodiode::numerical::non_finite))]
    NonFiniteField(LayerKind),
}
