// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ReportPredicate - logs the outcome of the placement loop.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};

#[derive(Debug)]
pub struct ReportPredicate;

impl Predicate for ReportPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let best = ctx.state.metrics.best();
        log::info!(
            "Result: Max: {} = {} * {} ({} circles)",
            best.score,
            best.coverage,
            best.diversity,
            best.circles
        );
        for (name, value) in ctx.statistics.entries() {
            log::debug!("{}: {}", name, value);
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Report"
    }
}
