// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! SVG rendering of a packing.
//!
//! The region is the view box, so the y axis grows downwards as in the
//! solver. Each type gets its own fill colour.

use crate::error::PackError;
use crate::geometry::Region;
use crate::state::PlacedCircle;
use std::path::Path;
use svg::node::element::{Circle as SvgCircle, Rectangle};
use svg::Document;

/// Fill colour of circles of the given type.
fn type_colour(type_index: usize) -> String {
    // Golden-angle hue steps keep neighbouring indices apart.
    let hue = (type_index * 137) % 360;
    format!("hsl({}, 65%, 55%)", hue)
}

/// Build the SVG document for `circles` inside `region`.
pub fn render(region: &Region, circles: &[PlacedCircle]) -> Document {
    let background = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", region.width)
        .set("height", region.height)
        .set("fill", "white")
        .set("stroke", "black")
        .set("stroke-width", region.width.min(region.height) / 500.0);

    circles.iter().fold(
        Document::new()
            .set("viewBox", (0.0, 0.0, region.width, region.height))
            .add(background),
        |document, placed| {
            document.add(
                SvgCircle::new()
                    .set("cx", placed.circle.cx)
                    .set("cy", placed.circle.cy)
                    .set("r", placed.circle.r)
                    .set("fill", type_colour(placed.type_index)),
            )
        },
    )
}

/// Render and save to `path`.
pub fn write_svg<P: AsRef<Path>>(path: P, region: &Region, circles: &[PlacedCircle]) -> Result<(), PackError> {
    let path = path.as_ref();
    log::info!("Writing SVG to {}", path.display());
    svg::save(path, &render(region, circles)).map_err(|e| PackError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Circle;

    #[test]
    fn test_one_element_per_circle() {
        let region = Region::new(40.0, 20.0);
        let circles = [
            PlacedCircle {
                id: 0,
                circle: Circle::new(10.0, 10.0, 10.0),
                type_index: 0,
            },
            PlacedCircle {
                id: 3,
                circle: Circle::new(25.0, 5.0, 5.0),
                type_index: 1,
            },
        ];
        let text = render(&region, &circles).to_string();
        assert_eq!(text.matches("<circle").count(), 2);
        assert!(text.contains("viewBox=\"0 0 40 20\""));
        assert!(text.contains(&type_colour(1)));
    }

    #[test]
    fn test_colours_differ() {
        assert_ne!(type_colour(0), type_colour(1));
        assert_ne!(type_colour(1), type_colour(2));
    }
}
