/////////////////////////////////////////////////////////////////////////////////////////////
//
// Microbenchmark that evaluates a fixed all-ones Gaussian RBF network and prints Y[0].
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use radialnet::{RbfNetwork, constant_weights, generate_constant_points};
use radialnet_utils::KernelParams;
use std::error::Error;
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn Error>> {
    // Fixed inputs: 1000 identical points in 5D, unit weights, unit bandwidth
    let dimensions = 5usize;
    let num_points = 1000usize;

    let points = generate_constant_points(num_points, dimensions, 1.0);
    let weights = constant_weights(num_points, 1.0);
    let kernel_params = KernelParams::builder().bandwidth(1.0).build();

    let network = RbfNetwork::builder(points, weights, kernel_params).build();
    let outputs = network.evaluate_at_source();

    // Every pairwise distance is zero, so the expected value is the weight sum: 1000.000000
    let mut stdout = io::stdout();
    write!(stdout, "{:.6} ", outputs[(0, 0)])?;
    stdout.flush()?;

    Ok(())
}
