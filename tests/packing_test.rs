// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end packing runs.
//!
//! These tests validate that a run:
//! - starts in a corner
//! - never places a circle out of bounds or overlapping another
//! - only keeps the prefix with the best score
//! - stops for the expected reason

mod common;

use circle_pack::geometry::Circle;
use circle_pack::state::Counters;
use circle_pack::{PackError, Solver, SolverConfig, Termination};
use common::{assert_valid_packing, capped, problem, run};

#[test]
fn test_first_circle_in_a_corner() {
    // The bottom-right corner is evaluated first and scores as perfect.
    let packing = run(&problem(100.0, 100.0, &[10.0, 5.0]), capped(1.0, 1));
    assert_eq!(packing.circles.len(), 1);
    assert_eq!(packing.circles[0].circle, Circle::new(90.0, 90.0, 10.0));
    assert_eq!(packing.circles[0].type_index, 0);
    assert_eq!(packing.statistics.get(Counters::PerfectMatches), 1);
}

#[test]
fn test_first_circle_top_left_without_perfect_score() {
    // With no perfect candidate the first of the tied corners wins.
    let config = SolverConfig {
        perfect_score: 10.0,
        ..capped(1.0, 1)
    };
    let packing = run(&problem(100.0, 100.0, &[10.0, 5.0]), config);
    assert_eq!(packing.circles[0].circle, Circle::new(10.0, 10.0, 10.0));
    assert_eq!(packing.statistics.get(Counters::PerfectMatches), 0);
}

#[test]
fn test_perfect_candidates_are_found_in_full_runs() {
    let problem = problem(300.0, 200.0, &[12.0, 5.0]);
    let packing = run(&problem, capped(1.0, 200));
    assert_valid_packing(&packing.region, &packing.circles);
    assert!(packing.statistics.get(Counters::PerfectMatches) > 0);
}

#[test]
fn test_centres_stay_inside() {
    let packing = run(&problem(100.0, 100.0, &[10.0]), capped(1.0, 40));
    for placed in &packing.circles {
        assert!((10.0..=90.0).contains(&placed.circle.cx));
        assert!((10.0..=90.0).contains(&placed.circle.cy));
    }
}

#[test]
fn test_full_run_is_valid() {
    let problem = problem(80.0, 50.0, &[7.0, 4.0, 2.5, 4.0]);
    let packing = run(&problem, SolverConfig::default());

    assert_valid_packing(&packing.region, &packing.circles);
    assert!(packing.termination.is_some());
    assert!(packing.count_at_best > 0);
    assert!(packing.count_at_best <= packing.circles.len());
    for placed in &packing.circles {
        assert_eq!(placed.circle.r, problem.radii[placed.type_index]);
    }
}

#[test]
fn test_every_weighting_is_valid() {
    let problem = problem(120.0, 70.0, &[9.0, 5.0, 3.0, 1.5]);
    for weighting in [0.0, 0.5, 1.0, 1.5, 2.0] {
        let packing = run(&problem, capped(weighting, 150));
        assert_valid_packing(&packing.region, &packing.circles);
    }
}

#[test]
fn test_uniform_weighting_balances_counts() {
    let problem = problem(200.0, 200.0, &[8.0, 4.0]);
    let packing = run(&problem, capped(0.0, 100));

    let large = packing.circles.iter().filter(|p| p.type_index == 0).count();
    let small = packing.circles.len() - large;
    // Both types get a turn every pass while both still fit.
    assert!(large.abs_diff(small) <= 1, "{} vs {}", large, small);
}

#[test]
fn test_radius_weighting_favours_large_circles() {
    let problem = problem(400.0, 400.0, &[10.0, 2.5]);
    let packing = run(&problem, capped(1.0, 50));

    let large = packing.circles.iter().filter(|p| p.type_index == 0).count();
    let small = packing.circles.len() - large;
    // Four large turns for each small one.
    assert!(large >= 3 * small, "{} vs {}", large, small);
}

#[test]
fn test_small_region_is_exhausted() {
    let packing = run(&problem(30.0, 30.0, &[9.0, 6.0]), SolverConfig::default());
    assert_eq!(packing.termination, Some(Termination::Exhausted));
    assert_valid_packing(&packing.region, &packing.circles);
    assert!(packing.statistics.get(Counters::SkippedTypes) >= 2);
}

#[test]
fn test_single_type_keeps_nothing() {
    // Diversity is zero with one type, so the best score is never beaten.
    let packing = run(&problem(50.0, 50.0, &[5.0]), SolverConfig::default());
    assert!(!packing.circles.is_empty());
    assert_eq!(packing.count_at_best, 0);
    assert!(packing.retained().is_empty());
}

#[test]
fn test_plateau_termination() {
    let config = SolverConfig {
        checkpoint_interval: 5,
        ..SolverConfig::default()
    };
    let packing = run(&problem(300.0, 300.0, &[12.0, 3.0]), config);
    match packing.termination {
        Some(Termination::Plateau) => {
            let n = packing.checkpoints.len();
            assert!(n >= 2);
            assert_eq!(
                packing.checkpoints[n - 1].best.score,
                packing.checkpoints[n - 2].best.score
            );
            assert_eq!(packing.circles.len() % 5, 0);
        }
        Some(Termination::Exhausted) => {}
        other => panic!("unexpected termination {:?}", other),
    }
}

#[test]
fn test_best_never_decreases() {
    let config = SolverConfig {
        checkpoint_interval: 10,
        plateau_checkpoints: 1000,
        ..SolverConfig::default()
    };
    let packing = run(&problem(90.0, 60.0, &[6.0, 4.0, 2.0]), config);

    let scores: Vec<f64> = packing.checkpoints.iter().map(|c| c.best.score).collect();
    assert!(!scores.is_empty());
    assert!(scores.windows(2).all(|w| w[0] <= w[1]));
    assert!(scores.iter().all(|&s| s <= packing.score()));
    for checkpoint in &packing.checkpoints {
        assert!(checkpoint.current_score <= checkpoint.best.score);
    }
}

#[test]
fn test_invalid_weighting_is_rejected() {
    for weighting in [-0.1, 2.01, f64::NAN] {
        let result = Solver::new(
            &problem(10.0, 10.0, &[1.0]),
            SolverConfig::with_weighting(weighting),
        );
        assert!(matches!(result, Err(PackError::WeightingOutOfRange { .. })));
    }
}
