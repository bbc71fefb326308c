/////////////////////////////////////////////////////////////////////////////////////////////
//
// Declares traits for kernel evaluation and shared kernel parameter sets.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::kernel_helpers::KernelParams;
use faer::RowRef;

/// Evaluates a kernel function between a target and source point.
///
/// Implementors define how the kernel is computed given two
/// [`faer::RowRef<f64>`](https://docs.rs/faer/latest/faer/row/type.RowRef.html)
/// arguments representing the target and source locations. The row length is
/// the spatial dimension, so a single trait covers any number of dimensions.
pub trait KernelFunction {
    fn evaluate(&self, target: RowRef<f64>, source: RowRef<f64>) -> f64;
}

/// Converts a shared [`KernelParams`] configuration into a concrete kernel type.
pub trait KernelFromParams: Sized {
    /// Constructs `Self` from a set of uniform kernel parameters.
    fn from_params(p: &KernelParams) -> Self;
}
