/////////////////////////////////////////////////////////////////////////////////////////////
//
// Implements the Gaussian RBF kernel and its faer-compatible evaluation.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::{KernelFromParams, KernelFunction, KernelParams};
use faer::RowRef;

/// Gaussian RBF kernel with `phi(r) = exp(-(bandwidth * r)^2)`.
#[derive(Clone, Debug, Copy)]
pub struct GaussianRbfKernel {
    // user input
    pub bandwidth: f64,

    // derived (computed once)
    b2: f64, // bandwidth^2
}

impl GaussianRbfKernel {
    #[inline(always)]
    pub fn new(bandwidth: f64) -> Self {
        Self {
            bandwidth,
            b2: bandwidth * bandwidth,
        }
    }

    #[inline(always)]
    pub fn phi(&self, r: f64) -> f64 {
        let s = r * self.bandwidth;
        (-(s * s)).exp()
    }

    /// Evaluates the kernel from a squared distance, skipping the square root.
    #[inline(always)]
    pub fn eval_r2(&self, r2: f64) -> f64 {
        (-(self.b2 * r2)).exp()
    }
}

impl KernelFunction for GaussianRbfKernel {
    #[inline(always)]
    fn evaluate(&self, target: RowRef<f64>, source: RowRef<f64>) -> f64 {
        let r = crate::get_distance(target, source);
        self.phi(r)
    }
}

impl KernelFromParams for GaussianRbfKernel {
    #[inline(always)]
    fn from_params(p: &KernelParams) -> Self {
        GaussianRbfKernel::new(p.bandwidth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faer::mat;

    #[test]
    fn phi_at_zero_distance_is_one_for_any_bandwidth() {
        for bandwidth in [0.0, 1.0, 10.0, -3.0] {
            let kernel = GaussianRbfKernel::new(bandwidth);
            assert_eq!(kernel.phi(0.0), 1.0);
        }
    }

    #[test]
    fn zero_bandwidth_is_one_at_any_distance() {
        let kernel = GaussianRbfKernel::new(0.0);
        for r in [0.0, 0.5, 1.0, 100.0] {
            assert_eq!(kernel.phi(r), 1.0);
        }
    }

    #[test]
    fn negative_bandwidth_matches_positive() {
        // Only bandwidth^2 enters the kernel.
        let pos = GaussianRbfKernel::new(2.0);
        let neg = GaussianRbfKernel::new(-2.0);
        for r in [0.1, 0.7, 3.0] {
            assert_eq!(pos.phi(r), neg.phi(r));
        }
    }

    #[test]
    fn eval_r2_is_consistent_with_phi() {
        let kernel = GaussianRbfKernel::new(1.5);
        for r in [0.0, 0.25, 1.0, 4.0] {
            let diff = (kernel.eval_r2(r * r) - kernel.phi(r)).abs();
            assert!(diff < 1e-15, "diff={diff} at r={r}");
        }
    }

    #[test]
    fn evaluate_uses_euclidean_distance() {
        let points = mat![
            [0.0, 0.0],
            [3.0, 4.0f64],
        ];

        let kernel = GaussianRbfKernel::new(1.0);
        let value = kernel.evaluate(points.row(0), points.row(1));

        // r = 5, phi = exp(-25)
        assert!((value - (-25.0f64).exp()).abs() < 1e-18);
    }

    #[test]
    fn from_params_forwards_bandwidth() {
        let params = KernelParams::builder().bandwidth(0.5).build();
        let kernel = GaussianRbfKernel::from_params(&params);
        assert_eq!(kernel.bandwidth, 0.5);
    }
}
