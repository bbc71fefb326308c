/////////////////////////////////////////////////////////////////////////////////////////////
//
// Exposes the public API and high-level documentation for dense RBF network evaluation.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # Dense Gaussian RBF network evaluation.
//!
//! An RBF network assigns each point in a fixed set a weight, and evaluates
//! at any target location the weighted sum of a radial kernel against every
//! source point:
//!
//! `y(x) = sum_j w_j * phi(|x - p_j|)`
//!
//! This crate evaluates such networks densely, with an **O(N·M·D)** double
//! loop over the `N` source and `M` target points in `D` dimensions. Each
//! output row is independent of the others, so an optional
//! [`rayon`](https://docs.rs/rayon/latest/rayon/)-parallel path is provided
//! for larger point sets.
//!
//! Built on [`faer`](https://docs.rs/faer/latest/faer/) matrices: points are
//! stored one row per point, one column per dimension.
//!
//! # Examples
//!
//! ```
//! use radialnet::{RbfNetwork, generate_constant_points, constant_weights};
//! use radialnet_utils::KernelParams;
//!
//! // 1000 identical points in 5D, unit weights, unit bandwidth
//! let points = generate_constant_points(1000, 5, 1.0);
//! let weights = constant_weights(1000, 1.0);
//! let params = KernelParams::builder().bandwidth(1.0).build();
//!
//! let network = RbfNetwork::builder(points, weights, params).build();
//! let outputs = network.evaluate_at_source();
//!
//! // Every pairwise distance is zero, so each output is the weight sum.
//! assert_eq!(outputs[(0, 0)], 1000.0);
//! ```
mod network;

mod points;

pub use {
    network::{RbfNetwork, RbfNetworkBuilder},
    points::{
        constant_weights, generate_constant_points, generate_random_points,
        generate_random_weights,
    },
};
