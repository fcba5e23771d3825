// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context and incremented by the placement
//! search as it goes. They never influence the result.

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(EnumCountMacro, EnumIter, IntoStaticStr, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Scheduling passes over all circle types.
    Passes,
    /// Circles committed.
    Placements,
    /// Stale cache entries brought up to date.
    CandidatesEvaluated,
    /// Candidate searches answered by a cached perfect entry.
    CacheHits,
    /// Cache entries reset after a nearby placement.
    Invalidations,
    /// Candidate searches ended by a perfect entry.
    PerfectMatches,
    /// Type attempts that found no valid placement.
    SkippedTypes,
    /// Cached winners rejected at commit because a newer circle overlaps them.
    StaleCommitsRejected,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Every counter with its name, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        Counters::iter().map(move |counter| (<&'static str>::from(counter), self.get(counter)))
    }
}
