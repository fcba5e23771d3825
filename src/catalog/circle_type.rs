// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Circle types: one per line of the input catalog.

use super::radii::{RadiusCatalog, Rank};

/// A kind of circle the packer may place.
///
/// `index`, `radius`, `rank` and `size_multiplier` are fixed at creation.
/// `count` and `weight` are scheduling state, mutated every pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleType {
    /// Position in the input file. Written to the output as the type index.
    pub index: usize,
    pub radius: f64,
    /// Rank of `radius` in the catalog.
    pub rank: Rank,
    /// `radius / largest radius`.
    pub size_multiplier: f64,
    /// Circles of this type placed so far.
    pub count: u64,
    /// Fractional scheduling credit. Accumulates across passes, never resets.
    pub weight: f64,
}

/// Build circle types from radii in input order, sorted by descending radius.
///
/// The sort is stable, so types with equal radii keep their input order.
pub fn build_types(radii: &[f64], catalog: &RadiusCatalog) -> Vec<CircleType> {
    let largest = catalog.largest();
    let mut types: Vec<CircleType> = radii
        .iter()
        .enumerate()
        .map(|(index, &radius)| CircleType {
            index,
            radius,
            rank: catalog
                .rank_of(radius)
                .unwrap_or_else(|| catalog.sentinel()),
            size_multiplier: radius / largest,
            count: 0,
            weight: 0.0,
        })
        .collect();
    types.sort_by(|a, b| b.radius.total_cmp(&a.radius));
    types
}
