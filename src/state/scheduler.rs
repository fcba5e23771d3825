// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Weighted scheduling of circle types.
//!
//! Every pass each type earns credit; a type is tried once its credit
//! reaches 1, paying 1 for the attempt. Fractional credit carries over.
//!
//! The raw increment for a type of radius `r` under weighting `w` is
//! - `w <= 1`: `w² · r + (1 − w²)`, blending uniform (w = 0) into size-proportional (w = 1)
//! - `w > 1`: `r · (k · r + (1 − k))` with `k = (w − 1)⁵`, moving towards `r²`
//!
//! Increments are divided by the largest one, so the most favoured type gains
//! exactly 1 per pass.

use crate::catalog::CircleType;

/// Raw (unnormalized) weight increment for a circle of `radius`.
pub fn raw_increment(weighting: f64, radius: f64) -> f64 {
    if weighting <= 1.0 {
        let blend = weighting * weighting;
        blend * radius + (1.0 - blend)
    } else {
        let blend = (weighting - 1.0).powi(5);
        radius * (blend * radius + (1.0 - blend))
    }
}

/// Credit every type with its normalized increment.
pub fn step_weights(types: &mut [CircleType], weighting: f64) {
    let increments: Vec<f64> = types
        .iter()
        .map(|t| raw_increment(weighting, t.radius))
        .collect();
    let max = increments.iter().copied().fold(0.0, f64::max);
    if max <= 0.0 {
        return;
    }
    for (circle_type, increment) in types.iter_mut().zip(increments) {
        circle_type.weight += increment / max;
    }
}

/// Spend one unit of credit if the type has it.
pub fn take_turn(circle_type: &mut CircleType) -> bool {
    if circle_type.weight < 1.0 {
        return false;
    }
    circle_type.weight -= 1.0;
    true
}
