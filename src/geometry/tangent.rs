// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tangent-circle constructions.
//!
//! Pure functions placing a circle of a requested radius so that it touches
//! two existing circles, a wall and a circle already touching that wall, or
//! the two walls of a corner. None of them check feasibility; callers pass the
//! result to [`Region::is_valid_placement`](super::Region::is_valid_placement).

use super::circle::{Circle, Corner, Point, Wall};
use super::region::Region;

/// Intersection of two circles, on the right of the directed line `a -> b`
/// (left in screen coordinates, where y grows downwards).
///
/// Returns `None` if the circles are concentric or do not meet.
pub fn circle_intersection(a: &Circle, b: &Circle) -> Option<Point> {
    let dx = b.cx - a.cx;
    let dy = b.cy - a.cy;
    let d = (dx * dx + dy * dy).sqrt();
    if d == 0.0 || !d.is_finite() {
        return None;
    }
    let along = (a.r * a.r - b.r * b.r + d * d) / (2.0 * d);
    let h2 = a.r * a.r - along * along;
    if h2 < 0.0 {
        return None;
    }
    let h = h2.sqrt();
    let mx = a.cx + along * dx / d;
    let my = a.cy + along * dy / d;
    Some(Point {
        x: mx + h * dy / d,
        y: my - h * dx / d,
    })
}

/// A circle of radius `r` externally tangent to both `c1` and `c2`.
///
/// The two solutions lie on either side of the line through the centres;
/// `left` picks one and `!left` the other. `None` when the circles are too far
/// apart for a circle of radius `r` to touch both.
pub fn from_circle_pair(c1: &Circle, c2: &Circle, r: f64, left: bool) -> Option<Circle> {
    let (first, second) = if left { (c1, c2) } else { (c2, c1) };
    let inflated_first = Circle::new(first.cx, first.cy, first.r + r);
    let inflated_second = Circle::new(second.cx, second.cy, second.r + r);
    circle_intersection(&inflated_first, &inflated_second).map(|p| Circle::new(p.x, p.y, r))
}

/// A circle of radius `r` touching `wall` and `existing`, which itself touches `wall`.
///
/// Two circles resting on the same line with radii `R` and `r` have centres
/// `2 * sqrt(R * r)` apart along the line. `left` chooses the direction.
pub fn from_wall(existing: &Circle, r: f64, wall: Wall, left: bool, region: &Region) -> Circle {
    let offset = 2.0 * (existing.r * r).sqrt() * if left { 1.0 } else { -1.0 };
    match wall {
        Wall::Top => Circle::new(existing.cx - offset, r, r),
        Wall::Left => Circle::new(r, existing.cy + offset, r),
        Wall::Bottom => Circle::new(existing.cx + offset, region.height - r, r),
        Wall::Right => Circle::new(region.width - r, existing.cy - offset, r),
    }
}

/// A circle of radius `r` touching both walls of `corner`.
pub fn from_corner(corner: Corner, r: f64, region: &Region) -> Circle {
    let (cx, cy) = region.corner_center(corner, r);
    Circle::new(cx, cy, r)
}
