// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Input reader.
//!
//! ```text
//! any header line, ignored
//! 1000 800
//! 12.5 large
//! 4
//! 4 duplicate radii are separate types
//! ```
//!
//! Line 2 holds the bounds as two positive integers. Every later non-blank
//! line is one circle type: a positive radius, then an optional label. The
//! type index is the position among those lines.

use crate::error::PackError;
use std::fs;
use std::path::Path;

/// A packing problem as read from an input file.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub width: f64,
    pub height: f64,
    /// One radius per circle type, in input order.
    pub radii: Vec<f64>,
}

/// Parse the text of an input file.
pub fn parse_problem(text: &str) -> Result<Problem, PackError> {
    let mut lines = text.lines().enumerate().skip(1);
    let Some((index, bounds)) = lines.next() else {
        return Err(PackError::malformed(2, "missing bounds line"));
    };
    let (width, height) = parse_bounds(bounds).map_err(|reason| PackError::malformed(index + 1, reason))?;

    let mut radii = Vec::new();
    for (index, line) in lines {
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };
        let radius = parse_radius(token).map_err(|reason| PackError::malformed(index + 1, reason))?;
        radii.push(radius);
    }
    if radii.is_empty() {
        return Err(PackError::EmptyCatalog);
    }
    Ok(Problem {
        width,
        height,
        radii,
    })
}

/// Read and parse an input file.
pub fn read_problem<P: AsRef<Path>>(path: P) -> Result<Problem, PackError> {
    let path = path.as_ref();
    log::info!("Reading input file {}", path.display());
    let text = fs::read_to_string(path).map_err(|e| PackError::io(path, e))?;
    parse_problem(&text)
}

fn parse_bounds(line: &str) -> Result<(f64, f64), String> {
    let mut tokens = line.split_whitespace();
    let (Some(width), Some(height)) = (tokens.next(), tokens.next()) else {
        return Err(String::from("expected width and height"));
    };
    Ok((parse_extent(width)?, parse_extent(height)?))
}

fn parse_extent(token: &str) -> Result<f64, String> {
    match token.parse::<u32>() {
        Ok(value) if value > 0 => Ok(f64::from(value)),
        _ => Err(format!("bound {:?} is not a positive integer", token)),
    }
}

fn parse_radius(token: &str) -> Result<f64, String> {
    match token.parse::<f64>() {
        Ok(radius) if radius.is_finite() && radius > 0.0 => Ok(radius),
        _ => Err(format!("radius {:?} is not a positive number", token)),
    }
}
