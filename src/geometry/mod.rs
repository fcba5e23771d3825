// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometry kernel.
//!
//! This module contains the stateless geometric primitives of the packer:
//! - Circle, Point: shapes in the plane
//! - Corner, Wall: the sides of the rectangle
//! - Region: bounds and the feasibility test
//! - tangent: constructions of circles touching walls, corners and other circles

pub mod circle;
pub mod region;
pub mod tangent;

// Re-export for convenience
pub use circle::{Circle, CircleId, Corner, Point, Wall};
pub use region::{Region, Violation, OVERLAP_TOLERANCE};
