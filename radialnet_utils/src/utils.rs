/////////////////////////////////////////////////////////////////////////////////////////////
//
// Supplies distance helpers and dense kernel matrix assembly over faer matrices.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::KernelFunction;
use faer::{Mat, RowRef};

/// Calculates the euclidean distance between two points.
///
/// Accumulates squared coordinate differences, then takes a single square
/// root per pair.
///
/// # Examples
///
/// ```
/// use faer::mat;
/// use radialnet_utils::get_distance;
///
/// let points = mat![
///     [1.0, 2.0],
///     [4.0, 6.0],
/// ];
///
/// let target = points.row(0);
/// let source = points.row(1);
///
/// let dist = get_distance(target, source);
///
/// assert_eq!(dist, 5.0);
/// ```
#[inline(always)]
pub fn get_distance(target: RowRef<f64>, source: RowRef<f64>) -> f64 {
    let mut dist = 0.0;
    for (t, s) in target.iter().zip(source.iter()) {
        let diff = t - s;
        dist += diff * diff;
    }
    dist.sqrt()
}

/// Returns the squared Euclidean distance between two points.
#[inline(always)]
pub fn get_distance_sq(target: RowRef<f64>, source: RowRef<f64>) -> f64 {
    let mut dist = 0.0;
    for (t, s) in target.iter().zip(source.iter()) {
        let diff = t - s;
        dist += diff * diff;
    }
    dist
}

/// Builds a dense kernel matrix using a typed kernel function.
///
/// Entry `(i, j)` is the kernel evaluated between target point `i` and source
/// point `j`. The output is explicitly zeroed before entries are written.
#[inline(always)]
pub fn get_kernel_matrix<K>(
    target_points: &Mat<f64>,
    source_points: &Mat<f64>,
    kernel_function: &K,
) -> Mat<f64>
where
    K: KernelFunction,
{
    let m = target_points.shape().0;
    let n = source_points.shape().0;

    let mut kernel_matrix = Mat::<f64>::zeros(m, n);

    for j in 0..n {
        let source = source_points.row(j);

        for i in 0..m {
            let target = target_points.row(i);

            kernel_matrix[(i, j)] = kernel_function.evaluate(target, source);
        }
    }

    kernel_matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GaussianRbfKernel;
    use faer::mat;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_points(n: usize, dim: usize, seed: u64) -> Mat<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        Mat::from_fn(n, dim, |_, _| rng.random_range(0.0..1.0))
    }

    #[test]
    fn distance_known_values() {
        let points = mat![
            [0.0, 0.0, 0.0],
            [2.0, 3.0, 6.0f64],
        ];

        assert_eq!(get_distance(points.row(0), points.row(1)), 7.0);
        assert_eq!(get_distance_sq(points.row(0), points.row(1)), 49.0);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let points = random_points(10, 5, 42);
        for i in 0..points.nrows() {
            assert_eq!(get_distance(points.row(i), points.row(i)), 0.0);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let points = random_points(50, 5, 123);
        for i in 0..points.nrows() {
            for j in 0..points.nrows() {
                let forward = get_distance(points.row(i), points.row(j));
                let backward = get_distance(points.row(j), points.row(i));
                assert_eq!(forward, backward);
            }
        }
    }

    #[test]
    fn kernel_matrix_is_symmetric_with_unit_diagonal() {
        let points = random_points(30, 3, 7);
        let kernel = GaussianRbfKernel::new(2.0);

        let matrix = get_kernel_matrix(&points, &points, &kernel);

        for i in 0..points.nrows() {
            assert_eq!(matrix[(i, i)], 1.0);
            for j in 0..points.nrows() {
                assert_eq!(matrix[(i, j)], matrix[(j, i)]);
            }
        }
    }
}
