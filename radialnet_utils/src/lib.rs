/////////////////////////////////////////////////////////////////////////////////////////////
//
// Re-exports kernel types, parameters, and helper functions used across the radialnet crates.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # Utilities for the [`radialnet`] crate
//!
//! Provides the Gaussian RBF kernel, the shared kernel parameter set, and
//! distance and kernel matrix helpers built on
//! [`faer`](https://docs.rs/faer/latest/faer/) row references.
mod kernel_helpers;
mod kernels;
mod traits;
mod utils;

pub use {
    kernel_helpers::{KernelParams, KernelParamsBuilder},
    kernels::GaussianRbfKernel,
    traits::{KernelFromParams, KernelFunction},
    utils::{get_distance, get_distance_sq, get_kernel_matrix},
};
