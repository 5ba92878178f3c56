//! Active piece descriptor - the currently falling piece
//!
//! The descriptor is plain data: which catalog entry, which orientation,
//! where its layout origin sits. Descriptors are cheap to copy; movement and
//! rotation produce new candidate descriptors which the caller tests before
//! committing.

use serde::{Deserialize, Serialize};

use crate::types::{Coordinate, ShapeIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivePolyomino {
    /// Catalog entry of this piece
    pub index: ShapeIndex,
    /// Rotation index; reduced modulo the rotation count wherever it is used
    pub orientation: i32,
    /// Top-left origin of the current layout
    pub location: Coordinate,
    /// Sub-cell drift used by renderers to interpolate between grid steps
    pub change: Coordinate,
    /// Timestamp (ms) of the next scheduled gravity step
    pub next_drop: u64,
}

impl ActivePolyomino {
    /// A fresh piece at `location` in orientation 0
    pub fn new(index: ShapeIndex, location: Coordinate) -> Self {
        Self {
            index,
            orientation: 0,
            location,
            change: Coordinate::default(),
            next_drop: 0,
        }
    }

    /// Candidate translated by a row/column delta
    pub fn moved(&self, d_row: i32, d_column: i32) -> Self {
        Self {
            location: self.location.offset(d_row, d_column),
            ..*self
        }
    }

    /// Candidate moved to an absolute anchor
    pub fn at(&self, location: Coordinate) -> Self {
        Self { location, ..*self }
    }

    /// Candidate rotated one step, wrapping modulo `rotation_count`
    pub fn rotated(&self, clockwise: bool, rotation_count: usize) -> Self {
        let step = if clockwise { 1 } else { -1 };
        Self {
            orientation: (self.orientation + step).rem_euclid(rotation_count.max(1) as i32),
            ..*self
        }
    }
}
