// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The rectangular packing region and the feasibility test.
//!
//! [`Region::is_valid_placement`] is the single source of truth for geometric
//! feasibility: every candidate, pruning probe and commit goes through it.

use super::circle::{Circle, Corner};
#[cfg(test)]
use super::circle::Wall;

/// Absolute tolerance on squared centre distance when testing overlap.
///
/// Absorbs the floating-point error of tangent constructions.
pub const OVERLAP_TOLERANCE: f64 = 1e-10;

/// An axis-aligned rectangle `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub width: f64,
    pub height: f64,
}

/// A reason why a set of circles is not a valid packing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Violation {
    /// Circle `index` crosses the boundary.
    OutOfBounds { index: usize },
    /// Circles `first` and `second` overlap.
    Overlap { first: usize, second: usize },
}

impl Region {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// True if `circle` lies entirely inside the rectangle.
    pub fn contains(&self, circle: &Circle) -> bool {
        circle.cx.is_finite()
            && circle.cy.is_finite()
            && circle.cx >= circle.r
            && circle.cy >= circle.r
            && circle.cx + circle.r <= self.width
            && circle.cy + circle.r <= self.height
    }

    /// True if `circle` is inside the bounds and overlaps none of `placed`.
    pub fn is_valid_placement<'a, I>(&self, circle: &Circle, placed: I) -> bool
    where
        I: IntoIterator<Item = &'a Circle>,
    {
        self.contains(circle)
            && placed
                .into_iter()
                .all(|other| !circle.overlaps(other, OVERLAP_TOLERANCE))
    }

    /// Centre of a circle of radius `r` wedged into `corner`.
    pub fn corner_center(&self, corner: Corner, r: f64) -> (f64, f64) {
        match corner {
            Corner::TopLeft => (r, r),
            Corner::TopRight => (self.width - r, r),
            Corner::BottomLeft => (r, self.height - r),
            Corner::BottomRight => (self.width - r, self.height - r),
        }
    }

    /// Find the first reason `circles` is not a valid packing, if any.
    ///
    /// Each circle is checked against the bounds and against every other circle.
    pub fn first_violation(&self, circles: &[Circle]) -> Option<Violation> {
        for (index, circle) in circles.iter().enumerate() {
            if !self.contains(circle) {
                return Some(Violation::OutOfBounds { index });
            }
            for (other, placed) in circles.iter().enumerate().skip(index + 1) {
                if circle.overlaps(placed, OVERLAP_TOLERANCE) {
                    return Some(Violation::Overlap {
                        first: index,
                        second: other,
                    });
                }
            }
        }
        None
    }
}

#[cfg(test)]
impl Region {
    /// True if `circle` touches `wall` (within tolerance).
    pub(crate) fn touches(&self, circle: &Circle, wall: Wall) -> bool {
        let gap = match wall {
            Wall::Top => circle.cy - circle.r,
            Wall::Left => circle.cx - circle.r,
            Wall::Bottom => self.height - circle.cy - circle.r,
            Wall::Right => self.width - circle.cx - circle.r,
        };
        gap.abs() <= 1e-9 * self.width.max(self.height).max(1.0)
    }
}
