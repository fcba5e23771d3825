// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Candidate search, commit and the scheduling pass.
//!
//! # Candidate search for one radius
//!
//! 1. Forward scan of the active connections for a cached perfect entry.
//! 2. Backward scan evaluating every stale entry, stopping at the first perfect one.
//! 3. Otherwise the first connection with the highest score wins; a best score
//!    of zero means nothing of this radius fits anywhere.
//!
//! A cached winner is re-checked against the placed circles before commit,
//! since invalidation only resets entries for the radius just placed.
//!
//! # Commit
//!
//! The winning circle is placed, connections near it have their entry for its
//! radius reset, its four successors join the active set and the set is
//! re-sorted by [`Connection::schedule_order`].

use std::fmt;

use super::metrics::Progress;
use super::scheduler;
use super::statistics::{Counters, Statistics};
use crate::catalog::Rank;
use crate::connection::{Connection, Scene, Slot};
use crate::context::{DynamicState, MemoizedData};
use crate::geometry::Corner;
use strum::IntoEnumIterator;

/// Why the placement loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The active connection set is empty.
    NoConnections,
    /// The best score did not improve over the configured number of checkpoints.
    Plateau,
    /// Every circle type failed to find a placement since the last commit.
    Exhausted,
    /// The configured maximum number of circles was placed.
    Limit,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::NoConnections => write!(f, "no connections left"),
            Termination::Plateau => write!(f, "score plateau"),
            Termination::Exhausted => write!(f, "no circle type fits"),
            Termination::Limit => write!(f, "circle limit reached"),
        }
    }
}

/// Activate the four corner connections, in the order
/// top-left, top-right, bottom-left, bottom-right.
pub fn seed_corners(memo: &MemoizedData, state: &mut DynamicState) {
    for corner in Corner::iter() {
        let connection = Connection::new(Slot::Corner(corner), 0, &memo.catalog);
        state.activate(connection);
    }
}

/// Index of the connection whose candidate at `rank` should be placed next.
///
/// `None` when no connection has a feasible candidate of that radius.
pub fn select_candidate(
    memo: &MemoizedData,
    state: &mut DynamicState,
    stats: &mut Statistics,
    rank: Rank,
) -> Option<usize> {
    loop {
        let index = find_best(memo, state, stats, rank)?;
        let connection = &mut state.connections[index];
        let fits = connection
            .candidate(rank)
            .circle()
            .is_some_and(|id| state.arena.fits(&memo.region, state.arena.circle(id), None));
        if fits {
            return Some(index);
        }
        connection.take_proposal(rank);
        stats.increment(Counters::StaleCommitsRejected);
    }
}

fn find_best(
    memo: &MemoizedData,
    state: &mut DynamicState,
    stats: &mut Statistics,
    rank: Rank,
) -> Option<usize> {
    if let Some(index) = state
        .connections
        .iter()
        .position(|c| c.candidate(rank).is_perfect())
    {
        stats.increment(Counters::CacheHits);
        stats.increment(Counters::PerfectMatches);
        return Some(index);
    }

    let mut scene = Scene {
        region: &memo.region,
        catalog: &memo.catalog,
        connection_weight: memo.config.connection_weight,
        perfect_score: memo.config.perfect_score,
        arena: &mut state.arena,
    };
    for index in (0..state.connections.len()).rev() {
        let connection = &mut state.connections[index];
        if !connection.candidate(rank).is_stale() {
            continue;
        }
        stats.increment(Counters::CandidatesEvaluated);
        if connection.evaluate(rank, &mut scene).is_perfect() {
            stats.increment(Counters::PerfectMatches);
            return Some(index);
        }
    }

    let mut best: Option<(usize, f64)> = None;
    for (index, connection) in state.connections.iter().enumerate() {
        let score = connection.candidate(rank).score();
        if score > best.map_or(0.0, |(_, s)| s) {
            best = Some((index, score));
        }
    }
    best.map(|(index, _)| index)
}

/// Place the candidate at `rank` of connection `index` as a circle of type
/// `types[type_pos]`.
pub fn commit(
    memo: &MemoizedData,
    state: &mut DynamicState,
    stats: &mut Statistics,
    index: usize,
    type_pos: usize,
) -> Progress {
    let rank = state.types[type_pos].rank;
    let Some(proposal) = state.connections[index].take_proposal(rank) else {
        return Progress::Continue;
    };
    let circle_type = &mut state.types[type_pos];
    circle_type.count += 1;
    let placed = state.arena.place(proposal.circle, circle_type.index);
    stats.increment(Counters::Placements);
    log::trace!(
        "Placed circle {} of type {} at ({}, {}) r={}",
        state.arena.placed().len(),
        placed.type_index,
        placed.circle.cx,
        placed.circle.cy,
        placed.circle.r
    );

    let circles = state.arena.circles();
    for connection in state.connections.iter_mut() {
        if connection.may_be_affected_by(&placed.circle, &memo.catalog, &memo.region, circles)
            && connection.invalidate(rank)
        {
            stats.increment(Counters::Invalidations);
        }
    }

    for spawned in proposal.spawned {
        state.activate(spawned);
    }
    state.connections.sort_by(|a, b| a.schedule_order(b));
    state.failed_since_commit.fill(false);

    let placed_count = state.placed_count();
    state.metrics.record(
        placed.circle.area(),
        state.types.iter().map(|t| t.count),
        placed_count,
    )
}

/// One scheduling pass: credit every type, then try each type that has a turn.
///
/// Returns the reason to stop, if the loop should stop.
pub fn run_pass(
    memo: &MemoizedData,
    state: &mut DynamicState,
    stats: &mut Statistics,
) -> Option<Termination> {
    if reached_limit(memo, state) {
        return Some(Termination::Limit);
    }
    stats.increment(Counters::Passes);
    scheduler::step_weights(&mut state.types, memo.config.weighting);

    for type_pos in 0..state.types.len() {
        if state.connections.is_empty() {
            return Some(Termination::NoConnections);
        }
        if !scheduler::take_turn(&mut state.types[type_pos]) {
            continue;
        }

        let rank = state.types[type_pos].rank;
        let Some(index) = select_candidate(memo, state, stats, rank) else {
            stats.increment(Counters::SkippedTypes);
            log::debug!(
                "No place for type {} (r={})",
                state.types[type_pos].index,
                state.types[type_pos].radius
            );
            state.failed_since_commit[type_pos] = true;
            if state.failed_since_commit.iter().all(|&failed| failed) {
                return Some(Termination::Exhausted);
            }
            continue;
        };

        if commit(memo, state, stats, index, type_pos) == Progress::Plateau {
            return Some(Termination::Plateau);
        }
        if reached_limit(memo, state) {
            return Some(Termination::Limit);
        }
    }
    None
}

fn reached_limit(memo: &MemoizedData, state: &DynamicState) -> bool {
    memo.config
        .max_circles
        .is_some_and(|limit| state.placed_count() >= limit)
}
