// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state and the operations of the placement loop.
//!
//! - `arena`: append-only storage of candidate and placed circles
//! - `scheduler`: per-type weight credit and turn taking
//! - `search`: candidate search, commit, invalidation and the scheduling pass
//! - `metrics`: coverage, diversity, best score and plateau detection
//! - `statistics`: counters for reporting

pub mod arena;
pub mod metrics;
pub mod scheduler;
pub mod search;
pub mod statistics;

pub use arena::{CircleArena, PlacedCircle};
pub use metrics::{Checkpoint, MetricTracker, Progress, Snapshot};
pub use search::{commit, run_pass, seed_corners, select_candidate, Termination};
pub use statistics::{Counters, Statistics};
