// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Circles and the rectangle sides they can touch.

use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// Index of a circle in the [`CircleArena`](crate::state::CircleArena).
///
/// Ids are handed out in creation order and never reused.
pub type CircleId = usize;

/// A point in the plane (y grows downwards, origin at the top-left corner).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A circle: centre and radius. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

impl Circle {
    pub fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self { cx, cy, r }
    }

    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.r * self.r
    }

    /// Squared distance between the two centres.
    #[inline]
    pub fn distance_squared(&self, other: &Circle) -> f64 {
        let dx = self.cx - other.cx;
        let dy = self.cy - other.cy;
        dx * dx + dy * dy
    }

    /// True if the two circles overlap by more than `tolerance` (on squared distance).
    ///
    /// Externally tangent circles do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Circle, tolerance: f64) -> bool {
        let reach = self.r + other.r;
        self.distance_squared(other) < reach * reach - tolerance
    }
}

/// The four corners of the rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumCountMacro)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// The two walls that meet at this corner, vertical wall first.
    pub fn walls(self) -> [Wall; 2] {
        match self {
            Corner::TopLeft => [Wall::Left, Wall::Top],
            Corner::TopRight => [Wall::Right, Wall::Top],
            Corner::BottomLeft => [Wall::Left, Wall::Bottom],
            Corner::BottomRight => [Wall::Right, Wall::Bottom],
        }
    }
}

/// The four sides of the rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumCountMacro)]
pub enum Wall {
    Top,
    Left,
    Bottom,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_tangent_circles_do_not_overlap() {
        let a = Circle::new(0.0, 0.0, 3.0);
        let b = Circle::new(5.0, 0.0, 2.0);
        assert!(!a.overlaps(&b, 1e-10));
        assert!(!b.overlaps(&a, 1e-10));
    }

    #[test]
    fn test_overlapping_circles() {
        let a = Circle::new(0.0, 0.0, 3.0);
        let b = Circle::new(4.0, 0.0, 2.0);
        assert!(a.overlaps(&b, 1e-10));
    }

    #[test]
    fn test_area() {
        let c = Circle::new(1.0, 1.0, 2.0);
        assert!((c.area() - 4.0 * std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_corner_walls() {
        assert_eq!(Corner::COUNT, 4);
        for corner in Corner::iter() {
            let [vertical, horizontal] = corner.walls();
            assert!(matches!(vertical, Wall::Left | Wall::Right));
            assert!(matches!(horizontal, Wall::Top | Wall::Bottom));
        }
    }
}
