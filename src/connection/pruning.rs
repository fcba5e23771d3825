// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Max-radius pruning.
//!
//! A connection's `max_rank` is the rank of the largest catalog radius that
//! still yields a valid circle, found by probing radii from the smallest
//! upwards and stopping at the first failure. The probe never goes past the
//! previous bound, so `max_rank` can only grow (the radius only shrink).

use super::Connection;
use crate::catalog::RadiusCatalog;
use crate::geometry::{Circle, Region};
use crate::state::CircleArena;

impl Connection {
    /// Recompute `max_rank` against the current placed circles.
    ///
    /// `pending` is an extra obstacle: the not-yet-placed circle whose
    /// successor this connection is.
    pub fn shrink_max_rank(
        &mut self,
        catalog: &RadiusCatalog,
        region: &Region,
        arena: &CircleArena,
        pending: Option<&Circle>,
    ) {
        let mut rank = catalog.sentinel();
        for probe in (self.max_rank..catalog.sentinel()).rev() {
            let fits = self
                .slot
                .tangent(catalog.radius(probe), arena.circles(), region)
                .is_some_and(|circle| arena.fits(region, &circle, pending));
            if !fits {
                break;
            }
            rank = probe;
        }
        self.max_rank = rank;
    }
}
