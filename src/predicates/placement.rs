// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! PlacementPredicate - the scheduling loop.
//!
//! Each round is one scheduling pass over all circle types. The predicate
//! repeats itself until the pass reports a [`Termination`](crate::state::Termination),
//! which it stores in the context before advancing.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::solver::PassObserver;
use crate::state::run_pass;

#[derive(Debug, Default)]
pub struct PlacementPredicate {
    /// Called after every pass; never changes the packing.
    observer: Option<Box<dyn PassObserver>>,
}

impl PlacementPredicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observer(observer: Box<dyn PassObserver>) -> Self {
        Self {
            observer: Some(observer),
        }
    }
}

impl Predicate for PlacementPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        if ctx.state.termination.is_some() {
            return PredicateResult::Success;
        }
        if round == 0 {
            log::info!("Starting computation");
        }

        let termination = run_pass(&ctx.memo, &mut ctx.state, &mut ctx.statistics);
        if let Some(observer) = self.observer.as_mut() {
            observer.after_pass(round, ctx.state.arena.placed());
        }

        match termination {
            None => PredicateResult::SuccessSamePredicate,
            Some(reason) => {
                log::info!(
                    "Stopped after {} passes and {} circles: {}",
                    round + 1,
                    ctx.state.placed_count(),
                    reason
                );
                ctx.state.termination = Some(reason);
                PredicateResult::Success
            }
        }
    }

    fn name(&self) -> &str {
        "Placement"
    }
}
