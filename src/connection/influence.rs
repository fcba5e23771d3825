// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Region of influence of a connection.
//!
//! After a circle is placed, only connections whose neighbourhood could
//! reach it have their cache entry for that circle's radius reset. The
//! neighbourhood is a disc around the slot's anchor, grown by twice the
//! connection's current capacity.

use super::{Connection, Slot};
use crate::catalog::RadiusCatalog;
use crate::geometry::{Circle, Region};

impl Connection {
    /// True if a circle placed at `placed` could invalidate candidates here.
    ///
    /// Conservative: false positives only cost a recomputation.
    pub fn may_be_affected_by(
        &self,
        placed: &Circle,
        catalog: &RadiusCatalog,
        region: &Region,
        circles: &[Circle],
    ) -> bool {
        let capacity = catalog.radius(self.max_rank());
        let (dx, dy, reach) = match self.slot {
            Slot::Corner(corner) => {
                let (ax, ay) = region.corner_center(corner, capacity);
                (
                    (placed.cx - ax).abs(),
                    (placed.cy - ay).abs(),
                    2.0 * capacity + placed.r,
                )
            }
            Slot::Wall { circle, .. } => {
                let anchor = &circles[circle];
                (
                    (placed.cx - anchor.cx).abs(),
                    (placed.cy - anchor.cy).abs(),
                    placed.r + 2.0 * capacity + anchor.r,
                )
            }
            Slot::Pair { first, second, .. } => {
                let a = &circles[first];
                let b = &circles[second];
                (
                    (placed.cx - a.cx).abs().min((placed.cx - b.cx).abs()),
                    (placed.cy - a.cy).abs().min((placed.cy - b.cy).abs()),
                    placed.r + 2.0 * capacity + a.r.max(b.r),
                )
            }
        };
        dx * dx + dy * dy <= reach * reach
    }
}
