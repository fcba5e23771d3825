// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The catalog of allowed circles.
//!
//! - RadiusCatalog: distinct radii, largest first, with a zero sentinel
//! - CircleType: per-input-line type with its scheduling state

pub mod circle_type;
pub mod radii;

pub use circle_type::{build_types, CircleType};
pub use radii::{RadiusCatalog, Rank};
