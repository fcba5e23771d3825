// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate engine.
//!
//! The engine runs predicates in sequence over a [`SearchContext`]. The
//! packing is greedy, so there is no backtracking: each predicate either
//! advances, repeats itself with the next round, or stops the program.
//!
//! 1. Call try_pred(round) on the current predicate
//! 2. If Success: advance to next predicate, round 0
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Failure: stop, the program has no result
//! 5. If Suspend: pause and return control to caller
//!
//! # Example
//!
//! ```
//! use circle_pack::config::SolverConfig;
//! use circle_pack::context::SearchContext;
//! use circle_pack::engine::EngineBuilder;
//! use circle_pack::io::Problem;
//! use circle_pack::predicates::{InitializePredicate, SuspendPredicate};
//!
//! let problem = Problem { width: 100.0, height: 100.0, radii: vec![10.0, 5.0] };
//! let mut ctx = SearchContext::new(&problem, SolverConfig::default()).unwrap();
//! let engine = EngineBuilder::new()
//!     .add(Box::new(InitializePredicate))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! // Engine is consumed, returns Some(engine) if suspended
//! assert!(engine.search(&mut ctx).is_some());
//! assert_eq!(ctx.state.connections.len(), 4);
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;

/// Engine that runs predicates in order, with rounds.
#[derive(Debug)]
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Statistics: number of try_pred calls.
    try_count: u64,
}

impl SearchEngine {
    fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            try_count: 0,
        }
    }

    /// Run the program from its first predicate.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended - the result is in `ctx`
    /// - `None` if a predicate failed
    ///
    /// # Panics
    ///
    /// Panics if a terminal predicate returns Success, running off the end
    /// of the program.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        self.try_count = 0;
        let mut index = 0;
        let mut round = 0;

        loop {
            let Some(predicate) = self.predicates.get_mut(index) else {
                panic!(
                    "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                     All programs must terminate with a FAIL or SUSPEND predicate."
                );
            };
            self.try_count += 1;
            match predicate.try_pred(ctx, round) {
                PredicateResult::Success => {
                    index += 1;
                    round = 0;
                }
                PredicateResult::SuccessSamePredicate => {
                    round += 1;
                }
                PredicateResult::Failure => {
                    log::debug!("{} failed at round {}", predicate.name(), round);
                    return None;
                }
                PredicateResult::Suspend => {
                    return Some(self);
                }
            }
        }
    }

    /// Number of try_pred calls made by the last search.
    pub fn statistics(&self) -> u64 {
        self.try_count
    }
}

/// Builder for [`SearchEngine`] programs.
///
/// A program is a sequence of predicates closed by a [`TerminalPredicate`];
/// only a closed program can be built.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Close the program with a terminal predicate.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedBuilder {
        self.predicates.push(predicate);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

/// A closed program, ready to build.
#[derive(Debug)]
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}
