// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Append-only storage for every circle the solver materializes.
//!
//! Candidate circles and placed circles live in the same arena so that a
//! candidate's spawned connections can name it by id before it is placed.
//! Nothing is ever removed or moved.

use crate::geometry::{Circle, CircleId, Region};

/// A circle committed to the packing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedCircle {
    /// Arena id of the circle.
    pub id: CircleId,
    pub circle: Circle,
    /// Input index of the circle's type.
    pub type_index: usize,
}

#[derive(Debug, Default)]
pub struct CircleArena {
    /// Every materialized circle, indexed by id.
    circles: Vec<Circle>,
    /// Committed circles in placement order.
    placed: Vec<PlacedCircle>,
}

impl CircleArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a circle and return its id.
    pub fn add(&mut self, circle: Circle) -> CircleId {
        self.circles.push(circle);
        self.circles.len() - 1
    }

    #[inline]
    pub fn circle(&self, id: CircleId) -> &Circle {
        &self.circles[id]
    }

    /// All materialized circles, indexed by id.
    #[inline]
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Committed circles in placement order.
    #[inline]
    pub fn placed(&self) -> &[PlacedCircle] {
        &self.placed
    }

    /// Commit circle `id` with the given type.
    pub fn place(&mut self, id: CircleId, type_index: usize) -> PlacedCircle {
        let placed = PlacedCircle {
            id,
            circle: self.circles[id],
            type_index,
        };
        self.placed.push(placed);
        placed
    }

    /// True if `circle` is in bounds and clear of every placed circle and of `pending`.
    pub fn fits(&self, region: &Region, circle: &Circle, pending: Option<&Circle>) -> bool {
        region.is_valid_placement(
            circle,
            self.placed.iter().map(|p| &p.circle).chain(pending),
        )
    }
}
