// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use circle_pack::geometry::{Circle, Region, OVERLAP_TOLERANCE};
use circle_pack::state::PlacedCircle;
use circle_pack::{solve, Packing, Problem, SolverConfig};
use itertools::Itertools;

pub fn problem(width: f64, height: f64, radii: &[f64]) -> Problem {
    Problem {
        width,
        height,
        radii: radii.to_vec(),
    }
}

/// Default configuration with a weighting and a placement cap.
pub fn capped(weighting: f64, max_circles: usize) -> SolverConfig {
    SolverConfig {
        weighting,
        max_circles: Some(max_circles),
        ..SolverConfig::default()
    }
}

/// Solve, panicking on configuration errors.
pub fn run(problem: &Problem, config: SolverConfig) -> Packing {
    solve(problem, config).unwrap_or_else(|e| panic!("solve failed: {}", e))
}

/// Assert that every circle is inside `region` and no two overlap.
pub fn assert_valid_packing(region: &Region, circles: &[PlacedCircle]) {
    for (index, placed) in circles.iter().enumerate() {
        assert!(
            region.contains(&placed.circle),
            "circle {} out of bounds: {:?}",
            index,
            placed.circle
        );
    }
    for ((i, a), (j, b)) in circles.iter().enumerate().tuple_combinations() {
        assert!(
            !a.circle.overlaps(&b.circle, OVERLAP_TOLERANCE),
            "circles {} and {} overlap: {:?} {:?}",
            i,
            j,
            a.circle,
            b.circle
        );
    }
}

/// The plain circles of a placed list.
pub fn circles(placed: &[PlacedCircle]) -> Vec<Circle> {
    placed.iter().map(|p| p.circle).collect()
}
