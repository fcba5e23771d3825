// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Greedy packing of circles from a fixed catalog of radii into a rectangle.
//!
//! Every new circle is tangent to what is already there: a corner, a wall and
//! a placed circle, or two placed circles. Circle types take turns according
//! to a weighting between uniform and size-proportional scheduling; each turn
//! places the best-scoring candidate of that type's radius. The run keeps the
//! prefix of placements with the best `coverage * diversity` score.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! - the region and the radius catalog
//! - the solver configuration
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! - the circle arena (candidates and placed circles, append-only)
//! - the active connections, each with a per-radius candidate cache
//! - per-type scheduling state and the running metrics
//!
//! # Packing Algorithm
//!
//! A short predicate program drives the run:
//!
//! 1. **InitializePredicate**: activate the four corner connections
//! 2. **PlacementPredicate**: one scheduling pass per round, until termination
//! 3. **ReportPredicate**: log the best score
//!
//! Candidate evaluation is lazy: a connection computes its tangent circle for
//! a radius only when that radius is searched for, and a placement only
//! resets cache entries of nearby connections for the placed radius.

pub mod catalog;
pub mod config;
pub mod connection;
pub mod context;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod io;
pub mod predicates;
pub mod solver;
pub mod state;

// Re-export commonly used types
pub use config::SolverConfig;
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use error::PackError;
pub use io::Problem;
pub use solver::{solve, Packing, PassObserver, ProgressObserver, Solver};
pub use state::Termination;
