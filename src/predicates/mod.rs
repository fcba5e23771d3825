// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Packing predicates.
//!
//! A packing run is the program
//!
//! ```text
//! Initialize -> Placement (one round per scheduling pass) -> Report -> Suspend
//! ```
//!
//! # Organization
//!
//! - `initialize`: InitializePredicate seeds the corner connections
//! - `placement`: PlacementPredicate runs scheduling passes until termination
//! - `report`: ReportPredicate logs the result
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod initialize;
pub mod placement;
pub mod report;

pub use initialize::InitializePredicate;
pub use placement::PlacementPredicate;
pub use report::ReportPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate.
///
/// Always fails: the engine stops and reports no result.
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate.
///
/// Hands control back to the caller with the context holding the result.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
