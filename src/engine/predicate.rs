// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for the packing engine.
//!
//! The engine works by running predicates in sequence. A predicate can
//! advance to the next one, repeat itself with the next round, fail, or
//! suspend the engine.
//!
//! # Example
//!
//! ```
//! use circle_pack::engine::{Predicate, PredicateResult};
//! use circle_pack::context::SearchContext;
//!
//! #[derive(Debug)]
//! struct ThreeRounds;
//!
//! impl Predicate for ThreeRounds {
//!     fn try_pred(&mut self, _ctx: &mut SearchContext, round: usize) -> PredicateResult {
//!         if round < 2 {
//!             PredicateResult::SuccessSamePredicate
//!         } else {
//!             PredicateResult::Success
//!         }
//!     }
//!
//!     fn name(&self) -> &str {
//!         "ThreeRounds"
//!     }
//! }
//! ```

use crate::context::SearchContext;
use std::fmt::Debug;

/// Result of attempting a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Predicate succeeded. Move to next predicate in sequence.
    Success,

    /// Predicate succeeded but stay at same predicate with next round.
    /// Allows a single predicate to execute many times (e.g., once per pass).
    SuccessSamePredicate,

    /// Predicate failed. The program stops without a result.
    Failure,

    /// Suspend execution. Engine returns control with state preserved.
    Suspend,
}

/// A terminal predicate that ends a program.
///
/// Terminal predicates are FAIL or SUSPEND - they never return Success.
/// [`EngineBuilder`](super::EngineBuilder) only builds programs ending with one.
pub trait TerminalPredicate: Predicate {}

/// Trait for predicates run by the engine.
///
/// # Lifecycle
///
/// 1. Engine calls `try_pred` with round 0
/// 2. If SuccessSamePredicate: engine calls `try_pred` again with the next round
/// 3. If Success: engine advances to next predicate
/// 4. If Failure or Suspend: engine stops
pub trait Predicate: Debug {
    /// Try this predicate for a given round.
    ///
    /// The round starts at 0 and increments each time the predicate returns
    /// `SuccessSamePredicate`.
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult;

    /// Optional: Get a name for this predicate (for logging).
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
