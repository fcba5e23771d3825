// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Output writer and reader.
//!
//! One line per circle in placement order: `cx cy r typeIndex`, the three
//! coordinates with 17 significant digits so they read back exactly.

use crate::error::PackError;
use crate::geometry::Circle;
use crate::state::PlacedCircle;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the circles in output format.
pub fn write_circles<W: Write>(out: &mut W, circles: &[PlacedCircle]) -> std::io::Result<()> {
    for placed in circles {
        let c = &placed.circle;
        writeln!(out, "{:.16e} {:.16e} {:.16e} {}", c.cx, c.cy, c.r, placed.type_index)?;
    }
    Ok(())
}

/// Write the circles to `path`, replacing any existing file.
pub fn write_output<P: AsRef<Path>>(path: P, circles: &[PlacedCircle]) -> Result<(), PackError> {
    let path = path.as_ref();
    log::info!("Writing {} circles to {}", circles.len(), path.display());
    let file = File::create(path).map_err(|e| PackError::io(path, e))?;
    let mut out = BufWriter::new(file);
    write_circles(&mut out, circles)
        .and_then(|()| out.flush())
        .map_err(|e| PackError::io(path, e))
}

/// Parse output text back into circles and their type indices.
pub fn parse_circles(text: &str) -> Result<Vec<(Circle, usize)>, PackError> {
    let mut circles = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let &[cx, cy, r, type_index] = fields.as_slice() else {
            return Err(PackError::malformed(
                index + 1,
                format!("expected 4 fields, found {}", fields.len()),
            ));
        };
        let number = |token: &str| {
            token
                .parse::<f64>()
                .map_err(|_| PackError::malformed(index + 1, format!("{:?} is not a number", token)))
        };
        let type_index = type_index.parse::<usize>().map_err(|_| {
            PackError::malformed(index + 1, format!("{:?} is not a type index", type_index))
        })?;
        circles.push((Circle::new(number(cx)?, number(cy)?, number(r)?), type_index));
    }
    Ok(circles)
}
