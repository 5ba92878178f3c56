//! Construction-time errors
//!
//! Collisions and out-of-bounds placements are never errors; they are
//! reported as `false` by the placement engine. This type only covers
//! catalogs and configuration that cannot be used at all.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("catalog has no entries")]
    EmptyCatalog,

    #[error("catalog entry {entry} has no rotation layouts")]
    NoRotations { entry: usize },

    #[error("catalog entry {entry}, rotation {rotation} has no filled cells")]
    EmptyLayout { entry: usize, rotation: usize },

    #[error("catalog entry {entry}, rotation {rotation} has {cells} filled cells (max {max})")]
    LayoutTooLarge {
        entry: usize,
        rotation: usize,
        cells: usize,
        max: usize,
    },

    #[error("board dimensions {rows}x{columns} must both be non-zero")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("spawn column {column} lies outside a board {columns} columns wide")]
    SpawnOutsideBoard { column: i32, columns: usize },

    #[error("spawn row {row} lies below a board {rows} rows tall")]
    SpawnBelowBoard { row: i32, rows: usize },

    #[error("snapshot of {rows}x{columns} carries {cells} cells")]
    SnapshotSize {
        rows: usize,
        columns: usize,
        cells: usize,
    },

    #[error("snapshot cell ({row}, {column}) holds {raw}, not empty or one of {kinds} catalog entries")]
    SnapshotCell {
        row: usize,
        column: usize,
        raw: i32,
        kinds: usize,
    },

    #[error("snapshot active piece {index} is not one of {kinds} catalog entries")]
    SnapshotPiece { index: usize, kinds: usize },

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Error::EmptyCatalog
            | Error::NoRotations { .. }
            | Error::EmptyLayout { .. }
            | Error::LayoutTooLarge { .. } => "invalid_catalog",
            Error::InvalidDimensions { .. }
            | Error::SpawnOutsideBoard { .. }
            | Error::SpawnBelowBoard { .. } => "invalid_config",
            Error::SnapshotSize { .. } | Error::SnapshotCell { .. } | Error::SnapshotPiece { .. } => {
                "invalid_snapshot"
            }
            Error::Json(_) => "invalid_json",
        }
    }
}
