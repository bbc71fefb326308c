/////////////////////////////////////////////////////////////////////////////////////////////
//
// Provides parameter and builder types for configuring RBF kernels.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use serde::{Deserialize, Serialize};

/// Shared parameter set for the kernels in this crate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KernelParams {
    /// Controls how quickly the kernel decays with distance from each point.
    /// Larger values restrict influence to a local neighborhood, while smaller
    /// values produce smoother, broader effects.
    ///
    /// No validation is applied: zero and negative values are accepted, and a
    /// bandwidth of zero makes every kernel evaluation equal to one.
    pub bandwidth: f64,
}

impl KernelParams {
    /// Begins building a [`KernelParams`] instance.
    pub fn builder() -> KernelParamsBuilder {
        KernelParamsBuilder { bandwidth: 1.0 }
    }
}

/// Builder for [`KernelParams`] that provides sensible defaults.
#[derive(Debug, Clone, Copy)]
pub struct KernelParamsBuilder {
    bandwidth: f64,
}

impl KernelParamsBuilder {
    /// Sets the `bandwidth` parameter on the builder.
    pub fn bandwidth(mut self, v: f64) -> Self {
        self.bandwidth = v;
        self
    }

    /// Finalises the builder into a [`KernelParams`] value.
    pub fn build(self) -> KernelParams {
        KernelParams {
            bandwidth: self.bandwidth,
        }
    }
}
