// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The per-connection, per-radius candidate cache.
//!
//! # State machine
//!
//! ```text
//!                 evaluate (valid)
//! NeedsRecompute ─────────────────► Feasible
//!       ▲  │                           │
//!       │  │ evaluate (invalid)        │ invalidate
//!       │  ▼                           │
//!       │ Infeasible ◄── take_proposal ┘
//!       └──────────────────────────────┘
//! ```
//!
//! An entry that has been `Feasible` keeps its memoized circle while stale, so
//! re-evaluation only re-validates that circle and re-prunes its successors.
//! `Infeasible` is final: placements only ever remove free space.

use super::{Connection, Slot};
use crate::catalog::{RadiusCatalog, Rank};
use crate::geometry::{CircleId, Region};
use crate::state::CircleArena;

/// A memoized placement: the tangent circle and the connections it would spawn.
#[derive(Debug)]
pub struct Proposal {
    /// The circle, stored in the arena but not yet placed.
    pub circle: CircleId,

    /// The four successor connections, already pruned.
    pub spawned: Vec<Connection>,
}

/// Cache entry for one connection at one catalog radius.
#[derive(Debug)]
pub enum Candidate {
    /// Must be (re)derived before use. Holds the memoized proposal, if any.
    NeedsRecompute(Option<Proposal>),

    /// No valid circle of this radius fits here.
    Infeasible,

    /// A valid placement with its heuristic score.
    ///
    /// `perfect` means the score reached the configured perfect score.
    Feasible {
        proposal: Proposal,
        score: f64,
        perfect: bool,
    },
}

impl Default for Candidate {
    fn default() -> Self {
        Candidate::NeedsRecompute(None)
    }
}

impl Candidate {
    #[inline]
    pub fn is_stale(&self) -> bool {
        matches!(self, Candidate::NeedsRecompute(_))
    }

    #[inline]
    pub fn is_perfect(&self) -> bool {
        matches!(self, Candidate::Feasible { perfect: true, .. })
    }

    /// Heuristic score; zero for anything that is not feasible.
    #[inline]
    pub fn score(&self) -> f64 {
        match self {
            Candidate::Feasible { score, .. } => *score,
            _ => 0.0,
        }
    }

    /// The memoized circle, if any.
    pub fn circle(&self) -> Option<CircleId> {
        match self {
            Candidate::NeedsRecompute(Some(proposal)) | Candidate::Feasible { proposal, .. } => {
                Some(proposal.circle)
            }
            _ => None,
        }
    }

    pub(super) fn into_proposal(self) -> Option<Proposal> {
        match self {
            Candidate::NeedsRecompute(proposal) => proposal,
            Candidate::Feasible { proposal, .. } => Some(proposal),
            Candidate::Infeasible => None,
        }
    }
}

/// Everything a candidate evaluation reads, plus the arena it may grow.
#[derive(Debug)]
pub struct Scene<'a> {
    pub region: &'a Region,
    pub catalog: &'a RadiusCatalog,
    pub connection_weight: f64,
    pub perfect_score: f64,
    pub arena: &'a mut CircleArena,
}

/// Heuristic value of a proposal from the capacity of its successors.
///
/// Each spawned connection contributes `weight * (1 - rank / size)`, where
/// `size` counts the zero sentinel. The proposal is perfect when the score
/// reaches `perfect_score`.
pub fn rate(
    spawned: &[Connection],
    catalog: &RadiusCatalog,
    weight: f64,
    perfect_score: f64,
) -> (f64, bool) {
    let size = catalog.size_with_sentinel() as f64;
    let score: f64 = spawned
        .iter()
        .map(|conn| weight * (1.0 - conn.max_rank() as f64 / size))
        .sum();
    (score, score >= perfect_score)
}

impl Connection {
    /// Bring the cache entry at `rank` up to date and return it.
    ///
    /// A cache hit returns immediately. A stale entry without a memo has its
    /// tangent circle built and validated; a stale entry with a memo has its
    /// circle re-validated against circles placed since. In both cases the
    /// spawned connections are pruned and the entry rescored.
    pub fn evaluate(&mut self, rank: Rank, scene: &mut Scene<'_>) -> &Candidate {
        if self.cache[rank].is_stale() {
            let memo = std::mem::take(&mut self.cache[rank]).into_proposal();
            self.cache[rank] = self.recompute(rank, memo, scene);
        }
        &self.cache[rank]
    }

    fn recompute(&self, rank: Rank, memo: Option<Proposal>, scene: &mut Scene<'_>) -> Candidate {
        let mut proposal = match memo {
            Some(proposal) => {
                let circle = *scene.arena.circle(proposal.circle);
                if !scene.arena.fits(scene.region, &circle, None) {
                    return Candidate::Infeasible;
                }
                proposal
            }
            None => match self.propose(rank, scene) {
                Some(proposal) => proposal,
                None => return Candidate::Infeasible,
            },
        };

        let pending = *scene.arena.circle(proposal.circle);
        for spawned in &mut proposal.spawned {
            spawned.shrink_max_rank(scene.catalog, scene.region, scene.arena, Some(&pending));
        }

        let (score, perfect) = rate(
            &proposal.spawned,
            scene.catalog,
            scene.connection_weight,
            scene.perfect_score,
        );
        Candidate::Feasible {
            proposal,
            score,
            perfect,
        }
    }

    /// Build the tangent circle at `rank` and its successors, if it is valid.
    fn propose(&self, rank: Rank, scene: &mut Scene<'_>) -> Option<Proposal> {
        let r = scene.catalog.radius(rank);
        let circle = self.slot.tangent(r, scene.arena.circles(), scene.region)?;
        if !scene.arena.fits(scene.region, &circle, None) {
            return None;
        }

        let born = scene.arena.placed().len();
        let id = scene.arena.add(circle);
        let spawned = self
            .slot
            .successors(id)
            .into_iter()
            .map(|slot: Slot| Connection::new(slot, born, scene.catalog))
            .collect();
        Some(Proposal {
            circle: id,
            spawned,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Circle, Corner};

    fn scene<'a>(
        region: &'a Region,
        catalog: &'a RadiusCatalog,
        arena: &'a mut CircleArena,
    ) -> Scene<'a> {
        Scene {
            region,
            catalog,
            connection_weight: 0.4,
            perfect_score: 1.0,
            arena,
        }
    }

    fn setup() -> (Region, RadiusCatalog, CircleArena) {
        (
            Region::new(100.0, 100.0),
            RadiusCatalog::new([20.0, 10.0, 5.0]),
            CircleArena::new(),
        )
    }

    #[test]
    fn test_corner_candidate_is_feasible() {
        let (region, catalog, mut arena) = setup();
        let mut conn = Connection::new(Slot::Corner(Corner::TopLeft), 0, &catalog);
        let mut scene = scene(&region, &catalog, &mut arena);

        let candidate = conn.evaluate(1, &mut scene);
        assert!(matches!(candidate, Candidate::Feasible { .. }));
        let id = candidate.circle().unwrap();
        assert_eq!(*arena.circle(id), Circle::new(10.0, 10.0, 10.0));

        if let Candidate::Feasible { proposal, .. } = conn.candidate(1) {
            assert_eq!(proposal.spawned.len(), 4);
            for spawned in &proposal.spawned {
                assert!(matches!(spawned.slot, Slot::Wall { circle, .. } if circle == id));
            }
        }
    }

    #[test]
    fn test_blocked_corner_is_infeasible() {
        let (region, catalog, mut arena) = setup();
        let blocker = arena.add(Circle::new(20.0, 20.0, 15.0));
        arena.place(blocker, 0);

        let mut conn = Connection::new(Slot::Corner(Corner::TopLeft), 0, &catalog);
        let mut scene = scene(&region, &catalog, &mut arena);
        assert!(matches!(conn.evaluate(0, &mut scene), Candidate::Infeasible));
        assert_eq!(conn.candidate(0).score(), 0.0);
    }

    #[test]
    fn test_memo_revalidated_after_invalidation() {
        let (region, catalog, mut arena) = setup();
        let mut conn = Connection::new(Slot::Corner(Corner::BottomLeft), 0, &catalog);
        {
            let mut scene = scene(&region, &catalog, &mut arena);
            conn.evaluate(2, &mut scene);
        }
        let memo = conn.candidate(2).circle().unwrap();
        let circles_before = arena.circles().len();

        // Still valid: invalidation keeps the memo and re-evaluation reuses it.
        assert!(conn.invalidate(2));
        assert!(conn.candidate(2).is_stale());
        {
            let mut scene = scene(&region, &catalog, &mut arena);
            assert!(matches!(conn.evaluate(2, &mut scene), Candidate::Feasible { .. }));
        }
        assert_eq!(conn.candidate(2).circle(), Some(memo));
        assert_eq!(arena.circles().len(), circles_before);

        // Now block it.
        let blocker = arena.add(Circle::new(5.0, 90.0, 4.0));
        arena.place(blocker, 0);
        assert!(conn.invalidate(2));
        let mut scene = scene(&region, &catalog, &mut arena);
        assert!(matches!(conn.evaluate(2, &mut scene), Candidate::Infeasible));
        assert!(!conn.invalidate(2));
    }

    #[test]
    fn test_rate() {
        let catalog = RadiusCatalog::new([3.0, 2.0, 1.0]);
        let slot = Slot::Corner(Corner::TopLeft);
        let mut spawned: Vec<Connection> =
            (0..4).map(|_| Connection::new(slot, 0, &catalog)).collect();

        let (score, perfect) = rate(&spawned, &catalog, 0.4, 1.0);
        assert!(perfect);
        assert!((score - 1.6).abs() < 1e-12);

        spawned[0].max_rank = 2;
        spawned[1].max_rank = catalog.sentinel();
        let (score, perfect) = rate(&spawned, &catalog, 0.4, 1.0);
        assert!(perfect);
        let expected = 0.4 * (1.0 - 2.0 / 4.0) + 0.4 * (1.0 - 3.0 / 4.0) + 0.8;
        assert!((score - expected).abs() < 1e-12);

        // Two dead successors, as a corner circle always has.
        spawned[0].max_rank = catalog.sentinel();
        let (score, perfect) = rate(&spawned, &catalog, 0.4, 1.0);
        assert!(!perfect);
        assert!((score - 0.8).abs() < 1e-12);
        assert!(rate(&spawned, &catalog, 0.4, 0.8).1);
    }
}
