/////////////////////////////////////////////////////////////////////////////////////////////
//
// Timing table comparing serial and parallel dense RBF network evaluation across N.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

// Run with: cargo run --bin scaling_benchmark --release

use radialnet::{RbfNetwork, generate_random_points, generate_random_weights};
use radialnet_utils::KernelParams;
use std::time::Instant;

fn main() {
    println!("=== Dense RBF Network Scaling Test ===\n");

    let dimensions = 5;
    let test_sizes = vec![250, 500, 1000, 2000, 4000];

    println!(
        "{:<10} {:<14} {:<14} {:<18}",
        "N", "Serial(s)", "Parallel(s)", "Serial/(N^2 * D)"
    );
    println!("{}", "-".repeat(56));

    for n in test_sizes {
        let points = generate_random_points(n, dimensions, Some(42));
        let weights = generate_random_weights(n, Some(7));
        let kernel_params = KernelParams::builder().bandwidth(10.0).build();

        let serial = RbfNetwork::builder(points.clone(), weights.clone(), kernel_params)
            .build();
        let start = Instant::now();
        let serial_outputs = serial.evaluate_at_source();
        let serial_elapsed = start.elapsed().as_secs_f64();

        let parallel = RbfNetwork::builder(points, weights, kernel_params)
            .parallel(true)
            .build();
        let start = Instant::now();
        let parallel_outputs = parallel.evaluate_at_source();
        let parallel_elapsed = start.elapsed().as_secs_f64();

        assert_eq!(serial_outputs, parallel_outputs);

        let n_f64 = n as f64;
        let normalized = serial_elapsed / (n_f64 * n_f64 * dimensions as f64) * 1e9;

        println!(
            "{:<10} {:<14.3} {:<14.3} {:<18.3}",
            n, serial_elapsed, parallel_elapsed, normalized
        );
    }

    println!("\nIf the rightmost column stays roughly constant, complexity is O(N^2 * D)");
}
