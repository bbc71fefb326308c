/////////////////////////////////////////////////////////////////////////////////////////////
//
// Implements the dense RBF network evaluator and its builder.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use faer::Mat;
use radialnet_utils::{GaussianRbfKernel, KernelFromParams, KernelFunction, KernelParams};
use rayon::prelude::*;

/// A weighted Gaussian RBF network over a fixed set of source points.
///
/// Each source point carries one weight, and evaluation at a target location
/// sums the kernel against every source point:
///
/// `y(x) = sum_j w_j * phi(|x - p_j|)`
///
/// The self pair (target equal to a source point) needs no special casing:
/// its distance is zero, `phi(0) = 1`, and the term contributes exactly that
/// point's weight regardless of bandwidth.
///
/// Evaluation is a pure function of the stored points, weights, and kernel
/// parameters. NaN and infinite inputs propagate through IEEE-754 arithmetic
/// without validation.
#[derive(Debug)]
pub struct RbfNetwork {
    /// Source point locations, one row per point and one column per dimension.
    pub point_locations: Mat<f64>,

    /// Per-point weights as a single column, matching `point_locations` rows.
    pub point_weights: Mat<f64>,

    /// Kernel parameters shared by every evaluation.
    pub kernel_params: KernelParams,

    parallel: bool,
}

impl RbfNetwork {
    /// Begins building an [`RbfNetwork`] from source points, weights, and
    /// kernel parameters.
    pub fn builder(
        point_locations: Mat<f64>,
        point_weights: Mat<f64>,
        kernel_params: KernelParams,
    ) -> RbfNetworkBuilder {
        RbfNetworkBuilder {
            point_locations,
            point_weights,
            kernel_params,
            parallel: false,
        }
    }

    /// Evaluates the network at its own source points.
    ///
    /// Returns an `(n, 1)` matrix where row `i` holds
    /// `sum_j w_j * phi(|p_i - p_j|)` over all `n` source points, including
    /// the `j = i` self term.
    pub fn evaluate_at_source(&self) -> Mat<f64> {
        self.evaluate(&self.point_locations)
    }

    /// Evaluates the network at the supplied target points.
    ///
    /// # Panics
    /// Panics if the target dimensionality differs from the source points.
    pub fn evaluate(&self, target_points: &Mat<f64>) -> Mat<f64> {
        assert_eq!(
            target_points.ncols(),
            self.point_locations.ncols(),
            "Target and source points must have the same dimensionality."
        );

        let kernel = GaussianRbfKernel::from_params(&self.kernel_params);

        match self.parallel {
            true => evaluate_parallel(
                target_points,
                &self.point_locations,
                &self.point_weights,
                &kernel,
            ),
            false => evaluate_serial(
                target_points,
                &self.point_locations,
                &self.point_weights,
                &kernel,
            ),
        }
    }
}

/// Builder for [`RbfNetwork`] that validates input shapes on `build`.
#[derive(Debug)]
pub struct RbfNetworkBuilder {
    point_locations: Mat<f64>,
    point_weights: Mat<f64>,
    kernel_params: KernelParams,
    parallel: bool,
}

impl RbfNetworkBuilder {
    /// Selects between the serial and rayon-parallel evaluation paths.
    ///
    /// Both paths compute each output row independently, so they produce
    /// identical results; the parallel path only pays off for larger point
    /// sets.
    pub fn parallel(mut self, v: bool) -> Self {
        self.parallel = v;
        self
    }

    /// Finalises the builder into an [`RbfNetwork`].
    ///
    /// # Panics
    /// Panics if the weights are not a single column with one row per source
    /// point.
    pub fn build(self) -> RbfNetwork {
        assert_eq!(
            self.point_weights.nrows(),
            self.point_locations.nrows(),
            "Points and weights must have same length."
        );
        assert_eq!(
            self.point_weights.ncols(),
            1,
            "Weights must be a single column."
        );

        RbfNetwork {
            point_locations: self.point_locations,
            point_weights: self.point_weights,
            kernel_params: self.kernel_params,
            parallel: self.parallel,
        }
    }
}

/// Accumulates the weighted kernel sum for a single target row.
#[inline(always)]
fn accumulate_row<K>(
    target_points: &Mat<f64>,
    source_points: &Mat<f64>,
    weights: &Mat<f64>,
    kernel: &K,
    row: usize,
) -> f64
where
    K: KernelFunction,
{
    let target = target_points.row(row);

    let mut acc = 0.0;
    for j in 0..source_points.nrows() {
        acc += weights[(j, 0)] * kernel.evaluate(target, source_points.row(j));
    }

    acc
}

fn evaluate_serial<K>(
    target_points: &Mat<f64>,
    source_points: &Mat<f64>,
    weights: &Mat<f64>,
    kernel: &K,
) -> Mat<f64>
where
    K: KernelFunction,
{
    let m = target_points.nrows();

    // Outputs start from an explicit zero accumulator for every row.
    let mut outputs = Mat::<f64>::zeros(m, 1);

    for i in 0..m {
        outputs[(i, 0)] = accumulate_row(target_points, source_points, weights, kernel, i);
    }

    outputs
}

fn evaluate_parallel<K>(
    target_points: &Mat<f64>,
    source_points: &Mat<f64>,
    weights: &Mat<f64>,
    kernel: &K,
) -> Mat<f64>
where
    K: KernelFunction + Sync,
{
    let m = target_points.nrows();

    let rows: Vec<f64> = (0..m)
        .into_par_iter()
        .map(|i| accumulate_row(target_points, source_points, weights, kernel, i))
        .collect();

    Mat::from_fn(m, 1, |i, _| rows[i])
}
