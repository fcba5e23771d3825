// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! InitializePredicate - seeds the active connection set.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::seed_corners;

/// Activates the four corner connections.
///
/// Runs exactly once (round 0 only), before any placement. A context that
/// already has connections is left unchanged.
#[derive(Debug)]
pub struct InitializePredicate;

impl Predicate for InitializePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        assert_eq!(
            round, 0,
            "InitializePredicate must be called exactly once with round=0"
        );
        if ctx.state.connections.is_empty() {
            seed_corners(&ctx.memo, &mut ctx.state);
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Initialize"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::io::Problem;

    fn context() -> SearchContext {
        let problem = Problem {
            width: 50.0,
            height: 50.0,
            radii: vec![4.0],
        };
        SearchContext::new(&problem, SolverConfig::default()).unwrap()
    }

    #[test]
    fn test_initialize_round_0() {
        let mut ctx = context();
        let mut pred = InitializePredicate;

        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Success);
        assert_eq!(ctx.state.connections.len(), 4);

        // Idempotent.
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Success);
        assert_eq!(ctx.state.connections.len(), 4);
    }

    #[test]
    #[should_panic(expected = "must be called exactly once with round=0")]
    fn test_initialize_round_1_panics() {
        let mut ctx = context();
        let mut pred = InitializePredicate;
        pred.try_pred(&mut ctx, 1);
    }
}
