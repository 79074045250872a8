//! Fuzz target for filter updates with structured input.
//!
//! Exercises construction, prediction, and correction across arbitrary
//! grid shapes, displacements (including the i64 extremes), and noise
//! parameters (including NaN and infinities). The filter must reject bad
//! parameters with an error and never panic; successful runs must return
//! a normalized belief.

#![no_main]

use arbitrary::Arbitrary;
use gridloc_core::filter::{Color, GridFilter, MotionCommand, World};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzRun {
    rows: u8,
    cols: u8,
    cells: Vec<bool>,
    steps: Vec<(i64, i64, bool)>,
    sensor_right: f64,
    p_move: f64,
}

fuzz_target!(|input: FuzzRun| {
    let rows = (input.rows % 16) as usize + 1;
    let cols = (input.cols % 16) as usize + 1;

    let grid: Vec<Vec<Color>> = (0..rows)
        .map(|i| {
            (0..cols)
                .map(|j| {
                    let bit = input
                        .cells
                        .get(i * cols + j)
                        .copied()
                        .unwrap_or(i % 2 == 0);
                    if bit {
                        Color::Green
                    } else {
                        Color::Red
                    }
                })
                .collect()
        })
        .collect();
    let world = World::from_rows(&grid).expect("generated grid is rectangular");

    // Construction must reject NaN and out-of-range noise with an error
    let Ok(filter) = GridFilter::new(world, input.sensor_right, input.p_move) else {
        return;
    };

    let bound = input.steps.len().min(32);
    let mut motions = Vec::with_capacity(bound);
    let mut measurements = Vec::with_capacity(bound);
    for &(dy, dx, hit) in input.steps.iter().take(32) {
        motions.push(MotionCommand::new(dy, dx));
        measurements.push(if hit { Color::Green } else { Color::Red });
    }

    // A run either fails cleanly (degenerate belief) or stays normalized
    if let Ok(belief) = filter.run(&motions, &measurements) {
        let sum = belief.sum();
        assert!(
            (sum - 1.0).abs() < 1e-6,
            "belief sum {sum} after {} steps",
            motions.len()
        );
        assert!(belief.as_slice().iter().all(|p| p.is_finite()));
    }
});
