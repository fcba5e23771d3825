// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solver facade.
//!
//! Builds the predicate program
//!
//! ```text
//! Initialize -> Placement -> Report -> Suspend
//! ```
//!
//! runs it over a fresh [`SearchContext`] and collects the [`Packing`].
//!
//! # Example
//!
//! ```
//! use circle_pack::config::SolverConfig;
//! use circle_pack::io::Problem;
//! use circle_pack::solver::Solver;
//!
//! let problem = Problem { width: 60.0, height: 40.0, radii: vec![8.0, 3.0] };
//! let packing = Solver::new(&problem, SolverConfig::default()).unwrap().run();
//! assert!(packing.count_at_best <= packing.circles.len());
//! ```

use crate::config::SolverConfig;
use crate::context::{MemoizedData, SearchContext};
use crate::engine::EngineBuilder;
use crate::error::PackError;
use crate::geometry::Region;
use crate::io::Problem;
use crate::predicates::{InitializePredicate, PlacementPredicate, ReportPredicate, SuspendPredicate};
use crate::state::{Checkpoint, PlacedCircle, Snapshot, Statistics, Termination};
use std::fmt::Debug;
use std::path::Path;

/// Hook called after every scheduling pass.
///
/// Observers see the placed circles but cannot change them; a run with or
/// without an observer places the same circles.
pub trait PassObserver: Debug {
    /// `pass` counts from 0; `placed` is every circle committed so far.
    fn after_pass(&mut self, pass: usize, placed: &[PlacedCircle]);
}

/// Logs the number of placed circles every `every` passes.
#[derive(Debug)]
pub struct ProgressObserver {
    every: usize,
}

impl ProgressObserver {
    pub fn new(every: usize) -> Self {
        Self {
            every: every.max(1),
        }
    }
}

impl PassObserver for ProgressObserver {
    fn after_pass(&mut self, pass: usize, placed: &[PlacedCircle]) {
        if (pass + 1) % self.every == 0 {
            log::debug!("Pass {}: {} circles placed", pass + 1, placed.len());
        }
    }
}

/// Result of a run.
#[derive(Debug)]
pub struct Packing {
    pub region: Region,

    /// Every circle placed, in placement order.
    pub circles: Vec<PlacedCircle>,

    /// Number of leading circles at which the best score was reached.
    pub count_at_best: usize,

    /// Coverage, diversity and score at `count_at_best`.
    pub best: Snapshot,

    /// Why the loop stopped; `None` only if the program failed.
    pub termination: Option<Termination>,

    /// Best score at every plateau checkpoint.
    pub checkpoints: Vec<Checkpoint>,

    pub statistics: Statistics,
}

impl Packing {
    /// The circles that make up the result: the first `count_at_best` placed.
    pub fn retained(&self) -> &[PlacedCircle] {
        &self.circles[..self.count_at_best]
    }

    pub fn coverage(&self) -> f64 {
        self.best.coverage
    }

    pub fn diversity(&self) -> f64 {
        self.best.diversity
    }

    /// `coverage * diversity` of the retained circles.
    pub fn score(&self) -> f64 {
        self.best.score
    }

    /// Write the retained circles in output format.
    pub fn write_output<P: AsRef<Path>>(&self, path: P) -> Result<(), PackError> {
        crate::io::write_output(path, self.retained())
    }

    /// Draw the retained circles as SVG.
    pub fn write_svg<P: AsRef<Path>>(&self, path: P) -> Result<(), PackError> {
        crate::io::write_svg(path, &self.region, self.retained())
    }
}

/// A validated problem, ready to run.
#[derive(Debug)]
pub struct Solver {
    memo: MemoizedData,
    observer: Option<Box<dyn PassObserver>>,
}

impl Solver {
    /// Validate `config` and `problem`. Fails before any computation.
    pub fn new(problem: &Problem, config: SolverConfig) -> Result<Self, PackError> {
        Ok(Self {
            memo: MemoizedData::new(problem, config)?,
            observer: None,
        })
    }

    /// Attach an observer called after every scheduling pass.
    pub fn with_observer(mut self, observer: Box<dyn PassObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Run the packing to termination.
    pub fn run(self) -> Packing {
        let region = self.memo.region;
        let mut ctx = SearchContext::with_memo(self.memo);
        let placement = match self.observer {
            Some(observer) => PlacementPredicate::with_observer(observer),
            None => PlacementPredicate::new(),
        };
        let engine = EngineBuilder::new()
            .add(Box::new(InitializePredicate))
            .add(Box::new(placement))
            .add(Box::new(ReportPredicate))
            .terminal(Box::new(SuspendPredicate))
            .build();
        // No predicate in this program fails, so it always ends suspended.
        let suspended = engine.search(&mut ctx);
        debug_assert!(suspended.is_some());

        let best = ctx.state.metrics.best();
        Packing {
            region,
            circles: ctx.state.arena.placed().to_vec(),
            count_at_best: best.circles,
            best,
            termination: ctx.state.termination,
            checkpoints: ctx.state.metrics.checkpoints().to_vec(),
            statistics: ctx.statistics,
        }
    }
}

/// Validate and run in one step.
pub fn solve(problem: &Problem, config: SolverConfig) -> Result<Packing, PackError> {
    Ok(Solver::new(problem, config)?.run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Counters;

    fn problem() -> Problem {
        Problem {
            width: 100.0,
            height: 100.0,
            radii: vec![10.0, 5.0],
        }
    }

    #[test]
    fn test_run_with_limit() {
        let config = SolverConfig {
            max_circles: Some(20),
            ..SolverConfig::default()
        };
        let packing = solve(&problem(), config).unwrap();
        assert_eq!(packing.circles.len(), 20);
        assert_eq!(packing.termination, Some(Termination::Limit));
        assert!(packing.count_at_best <= 20);
        assert_eq!(packing.retained().len(), packing.count_at_best);
        assert_eq!(packing.statistics.get(Counters::Placements), 20);
        assert!((packing.score() - packing.coverage() * packing.diversity()).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_weighting_fails_before_running() {
        let result = Solver::new(&problem(), SolverConfig::with_weighting(2.5));
        assert!(matches!(result, Err(PackError::WeightingOutOfRange { .. })));
    }

    #[test]
    fn test_progress_observer_does_not_change_result() {
        let config = SolverConfig {
            max_circles: Some(30),
            ..SolverConfig::default()
        };
        let plain = solve(&problem(), config.clone()).unwrap();
        let observed = Solver::new(&problem(), config)
            .unwrap()
            .with_observer(Box::new(ProgressObserver::new(1)))
            .run();
        assert_eq!(plain.circles, observed.circles);
    }
}
