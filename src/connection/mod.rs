// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Connections: the slots where a new tangent circle can be inserted.
//!
//! A connection is a corner, a placed circle resting on a wall, or a pair of
//! placed circles. Each one carries
//! - `max_rank`: the largest catalog radius known to still fit, which only shrinks
//! - a per-rank cache of [`Candidate`]s, filled lazily
//!
//! Connections refer to circles by [`CircleId`] into the circle arena, so a
//! circle can be shared by any number of connections without ownership cycles.
//!
//! # Modules
//!
//! - `candidate`: the cache entry state machine and candidate evaluation
//! - `pruning`: max-radius shrinking
//! - `influence`: which connections a newly placed circle can disturb

pub mod candidate;
pub mod influence;
pub mod pruning;

pub use candidate::{Candidate, Proposal, Scene};

use crate::catalog::{RadiusCatalog, Rank};
use crate::geometry::{tangent, Circle, CircleId, Corner, Region, Wall};
use std::cmp::Ordering;

/// The geometric context of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// One of the four corners of the rectangle.
    Corner(Corner),

    /// A placed circle touching `wall`; `left` selects the direction along the wall.
    Wall {
        circle: CircleId,
        wall: Wall,
        left: bool,
    },

    /// Two placed circles; `left` selects which side of the line of centres.
    Pair {
        first: CircleId,
        second: CircleId,
        left: bool,
    },
}

impl Slot {
    /// Ordering of variants used when sorting the active connections.
    pub fn variant_order(&self) -> u8 {
        match self {
            Slot::Corner(_) => 0,
            Slot::Wall { .. } => 1,
            Slot::Pair { .. } => 2,
        }
    }

    /// The circle of radius `r` this slot would hold, before any feasibility check.
    ///
    /// `None` when no tangent circle of that radius exists (circles too far apart).
    pub fn tangent(&self, r: f64, circles: &[Circle], region: &Region) -> Option<Circle> {
        match *self {
            Slot::Corner(corner) => Some(tangent::from_corner(corner, r, region)),
            Slot::Wall { circle, wall, left } => Some(tangent::from_wall(
                &circles[circle],
                r,
                wall,
                left,
                region,
            )),
            Slot::Pair {
                first,
                second,
                left,
            } => tangent::from_circle_pair(&circles[first], &circles[second], r, left),
        }
    }

    /// The four slots created by placing circle `new` in this slot.
    ///
    /// - corner: both directions along each of the two corner walls
    /// - wall: both sides against the supporting circle, both directions along the wall
    /// - pair: both sides against each of the two circles
    pub fn successors(&self, new: CircleId) -> [Slot; 4] {
        let wall = |wall, left| Slot::Wall {
            circle: new,
            wall,
            left,
        };
        let pair = |other, left| Slot::Pair {
            first: new,
            second: other,
            left,
        };
        match *self {
            Slot::Corner(corner) => {
                let [vertical, horizontal] = corner.walls();
                [
                    wall(vertical, true),
                    wall(vertical, false),
                    wall(horizontal, true),
                    wall(horizontal, false),
                ]
            }
            Slot::Wall {
                circle, wall: w, ..
            } => [
                pair(circle, true),
                pair(circle, false),
                wall(w, true),
                wall(w, false),
            ],
            Slot::Pair { first, second, .. } => [
                pair(first, true),
                pair(first, false),
                pair(second, true),
                pair(second, false),
            ],
        }
    }
}

/// A slot plus its capacity bound and per-radius candidate cache.
#[derive(Debug)]
pub struct Connection {
    pub slot: Slot,

    /// Rank of the largest radius still known to fit. Never decreases.
    max_rank: Rank,

    /// Number of placed circles when this connection was created.
    pub born: usize,

    /// Position in which this connection joined the active set.
    pub seq: usize,

    /// Candidate per catalog rank.
    cache: Vec<Candidate>,
}

impl Connection {
    /// A fresh connection: full capacity, every cache entry stale.
    pub fn new(slot: Slot, born: usize, catalog: &RadiusCatalog) -> Self {
        Self {
            slot,
            max_rank: 0,
            born,
            seq: 0,
            cache: (0..catalog.len()).map(|_| Candidate::default()).collect(),
        }
    }

    /// Rank of the largest radius still known to fit here.
    #[inline]
    pub fn max_rank(&self) -> Rank {
        self.max_rank
    }

    /// The cached candidate for radius rank `rank`.
    #[inline]
    pub fn candidate(&self, rank: Rank) -> &Candidate {
        &self.cache[rank]
    }

    /// Mark the candidate at `rank` for re-derivation.
    ///
    /// Returns true if a live entry was reset. Stale entries stay stale and
    /// infeasible entries stay infeasible: placements only ever remove space.
    pub fn invalidate(&mut self, rank: Rank) -> bool {
        if !matches!(self.cache[rank], Candidate::Feasible { .. }) {
            return false;
        }
        let entry = std::mem::take(&mut self.cache[rank]);
        self.cache[rank] = Candidate::NeedsRecompute(entry.into_proposal());
        true
    }

    /// Remove the proposal at `rank`, leaving the entry infeasible.
    ///
    /// Used on commit (the proposal's circle is now placed) and when a cached
    /// candidate turns out to overlap a newer placement.
    pub fn take_proposal(&mut self, rank: Rank) -> Option<Proposal> {
        std::mem::replace(&mut self.cache[rank], Candidate::Infeasible).into_proposal()
    }

    /// Order of the active connection list: smallest capacity first, then
    /// variant, then arrival.
    pub fn schedule_order(&self, other: &Connection) -> Ordering {
        other
            .max_rank
            .cmp(&self.max_rank)
            .then_with(|| self.slot.variant_order().cmp(&other.slot.variant_order()))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}
