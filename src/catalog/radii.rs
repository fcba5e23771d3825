// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The radius catalog: distinct allowed radii, largest first.

use itertools::Itertools;

/// Position of a radius in the [`RadiusCatalog`]. Rank 0 is the largest radius.
///
/// The rank equal to [`RadiusCatalog::len`] is the zero sentinel: "no radius fits".
pub type Rank = usize;

/// Distinct circle radii sorted in descending order, plus a zero sentinel.
///
/// Equal radii collapse onto one rank, so every per-radius table in the
/// solver is indexed by rank rather than by floating-point value.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusCatalog {
    radii: Vec<f64>,
}

impl RadiusCatalog {
    /// Build a catalog from radii in any order; duplicates are removed.
    pub fn new<I: IntoIterator<Item = f64>>(radii: I) -> Self {
        let radii = radii
            .into_iter()
            .sorted_by(|a, b| b.total_cmp(a))
            .dedup()
            .collect();
        Self { radii }
    }

    /// Number of distinct radii (excluding the sentinel).
    pub fn len(&self) -> usize {
        self.radii.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    /// Rank of the zero sentinel.
    #[inline]
    pub fn sentinel(&self) -> Rank {
        self.radii.len()
    }

    /// Number of ranks including the sentinel.
    pub fn size_with_sentinel(&self) -> usize {
        self.radii.len() + 1
    }

    /// Radius at `rank`; the sentinel maps to `0.0`.
    #[inline]
    pub fn radius(&self, rank: Rank) -> f64 {
        self.radii.get(rank).copied().unwrap_or(0.0)
    }

    /// The rank of `radius`, if it is in the catalog. `0.0` maps to the sentinel.
    pub fn rank_of(&self, radius: f64) -> Option<Rank> {
        if radius == 0.0 {
            return Some(self.sentinel());
        }
        self.radii.iter().position(|&r| r == radius)
    }

    /// The largest radius.
    pub fn largest(&self) -> f64 {
        self.radius(0)
    }

    pub fn radii(&self) -> &[f64] {
        &self.radii
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_and_deduplicated() {
        let catalog = RadiusCatalog::new([3.0, 10.0, 3.0, 5.0, 10.0]);
        assert_eq!(catalog.radii(), &[10.0, 5.0, 3.0]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.size_with_sentinel(), 4);
    }

    #[test]
    fn test_rank_lookup() {
        let catalog = RadiusCatalog::new([3.0, 10.0, 5.0]);
        assert_eq!(catalog.rank_of(10.0), Some(0));
        assert_eq!(catalog.rank_of(5.0), Some(1));
        assert_eq!(catalog.rank_of(3.0), Some(2));
        assert_eq!(catalog.rank_of(0.0), Some(3));
        assert_eq!(catalog.rank_of(4.0), None);
    }

    #[test]
    fn test_sentinel_radius_is_zero() {
        let catalog = RadiusCatalog::new([7.0]);
        assert_eq!(catalog.sentinel(), 1);
        assert_eq!(catalog.radius(catalog.sentinel()), 0.0);
        assert_eq!(catalog.largest(), 7.0);
    }
}
