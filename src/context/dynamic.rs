// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable packing state (Tier 2: DYNAMIC).

use crate::catalog::{build_types, CircleType};
use crate::connection::Connection;
use crate::state::{CircleArena, MetricTracker, Termination};

use super::MemoizedData;

/// Mutable packing state (Tier 2: DYNAMIC).
///
/// Everything the placement loop changes. Nothing here is ever undone:
/// circles and connections are only appended.
#[derive(Debug)]
pub struct DynamicState {
    /// Candidate and placed circles.
    pub arena: CircleArena,

    /// Active connections, kept in schedule order.
    pub connections: Vec<Connection>,

    /// Circle types, largest radius first, with their counts and credit.
    pub types: Vec<CircleType>,

    pub metrics: MetricTracker,

    /// Sequence number for the next connection to join the active set.
    pub next_seq: usize,

    /// Per type (same order as `types`): failed to place since the last commit.
    pub failed_since_commit: Vec<bool>,

    /// Set once the placement loop has stopped.
    pub termination: Option<Termination>,
}

impl DynamicState {
    /// Create initial dynamic state from MEMO data: no circles, no connections.
    pub fn new(memo: &MemoizedData) -> Self {
        let types = build_types(&memo.radii, &memo.catalog);
        Self {
            arena: CircleArena::new(),
            connections: Vec::new(),
            failed_since_commit: vec![false; types.len()],
            types,
            metrics: MetricTracker::new(
                memo.region.area(),
                memo.config.checkpoint_interval,
                memo.config.plateau_checkpoints,
            ),
            next_seq: 0,
            termination: None,
        }
    }

    /// Add a connection to the active set, assigning its sequence number.
    pub fn activate(&mut self, mut connection: Connection) {
        connection.seq = self.next_seq;
        self.next_seq += 1;
        self.connections.push(connection);
    }

    /// Number of committed circles.
    pub fn placed_count(&self) -> usize {
        self.arena.placed().len()
    }
}
