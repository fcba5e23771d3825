// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the core data structure that combines:
//! - Tier 1 (MEMO): the validated problem (region, radius catalog, configuration)
//! - Tier 2 (DYNAMIC): circles, connections, type scheduling state and metrics
//!
//! Several contexts can be built from clones of the same MEMO data, e.g. to run
//! one packing per weighting.

mod dynamic;
mod memoized;

pub use dynamic::DynamicState;
pub use memoized::MemoizedData;

use crate::config::SolverConfig;
use crate::error::PackError;
use crate::io::Problem;
use crate::state::Statistics;

/// Search context combining MEMO and DYNAMIC state.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     memo: MemoizedData,     // Tier 1: immutable
///     state: DynamicState,    // Tier 2: mutable, append-only
///     statistics: Statistics, // counters, never read by the search
/// }
/// ```
#[derive(Debug)]
pub struct SearchContext {
    pub memo: MemoizedData,
    pub state: DynamicState,
    pub statistics: Statistics,
}

impl SearchContext {
    /// Validate the input and configuration and build a fresh context.
    pub fn new(problem: &Problem, config: SolverConfig) -> Result<Self, PackError> {
        Ok(Self::with_memo(MemoizedData::new(problem, config)?))
    }

    /// Create a search context with existing MEMO data.
    pub fn with_memo(memo: MemoizedData) -> Self {
        let state = DynamicState::new(&memo);
        Self {
            memo,
            state,
            statistics: Statistics::new(),
        }
    }
}
