/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines shared helpers for constant and random point and weight generation.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use faer::Mat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a matrix of points with every coordinate set to `value`.
///
/// # Parameters
/// - `n`: Number of points to generate (rows in the output matrix).
/// - `d`: Number of spatial dimensions per point (columns in the output matrix).
/// - `value`: The coordinate value assigned to every entry.
///
/// # Returns
/// A `Mat<f64>` of shape `(n, d)`.
pub fn generate_constant_points(n: usize, d: usize, value: f64) -> Mat<f64> {
    Mat::from_fn(n, d, |_, _| value)
}

/// Generate a matrix of random points in the unit hypercube.
///
/// # Parameters
/// - `n`: Number of points to generate (rows in the output matrix).
/// - `d`: Number of spatial dimensions per point (columns in the output matrix).
/// - `seed`: Optional random seed.
///   - If `Some(seed)` is provided, the same sequence of points will be generated
///     deterministically across runs and platforms (useful for reproducible tests).
///   - If `None`, the generator is seeded from the operating system's randomness source.
///
/// # Returns
/// A `Mat<f64>` of shape `(n, d)` where each element lies in `[0.0, 1.0)`.
///
/// # Example
/// ```
/// use radialnet::generate_random_points;
///
/// // Generate 100 reproducible 5D points
/// let pts = generate_random_points(100, 5, Some(42));
/// assert_eq!(pts.ncols(), 5);
/// ```
pub fn generate_random_points(n: usize, d: usize, seed: Option<u64>) -> Mat<f64> {
    let mut rng = match seed.is_some() {
        true => StdRng::seed_from_u64(seed.unwrap()),
        false => StdRng::from_os_rng(),
    };

    let source_points = Mat::from_fn(n, d, |_, _| rng.random_range(0.0..1.0));

    source_points
}

/// Generate a column of `n` weights all set to `value`.
pub fn constant_weights(n: usize, value: f64) -> Mat<f64> {
    Mat::from_fn(n, 1, |_, _| value)
}

/// Generate a column of `n` random weights in `[0.0, 1.0)`.
///
/// Seeding behaves as in [`generate_random_points`].
pub fn generate_random_weights(n: usize, seed: Option<u64>) -> Mat<f64> {
    let mut rng = match seed.is_some() {
        true => StdRng::seed_from_u64(seed.unwrap()),
        false => StdRng::from_os_rng(),
    };

    Mat::from_fn(n, 1, |_, _| rng.random_range(0.0..1.0))
}
