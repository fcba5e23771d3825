// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! File formats.
//!
//! - `input`: the problem file (bounds and one radius per circle type)
//! - `output`: the circle list written after a run, and its reader
//! - `svg`: a picture of the packing

pub mod input;
pub mod output;
pub mod svg;

pub use input::{parse_problem, read_problem, Problem};
pub use output::{parse_circles, write_circles, write_output};
pub use self::svg::write_svg;
