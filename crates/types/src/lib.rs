//! Core types module - shared data structures and constants
//!
//! This crate defines the plain data used throughout the workspace.
//! Nothing here knows about collision rules or board mutation; it is usable
//! from the rules engine, from a renderer, or from a serialized snapshot.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Rows**: 20 (indexed 0-19, row 0 at the top)
//! - **Columns**: 10 (indexed 0-9, column 0 at the left)
//! - **Spawn anchor**: row 0, column 3
//!
//! Rows above the grid (`row < 0`) form the spawn buffer: pieces may
//! partially live there while entering the board.
//!
//! # Cell Encoding
//!
//! | Rust value | Raw value | Meaning |
//! |------------|-----------|---------|
//! | `None` | `-1` | empty |
//! | `Some(i)` | `i` | occupied by catalog entry `i` |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{cell_from_raw, cell_to_raw, Coordinate, Dimensions, COLUMNS, ROWS};
//!
//! let dims = Dimensions::default();
//! assert_eq!((dims.rows, dims.columns), (ROWS, COLUMNS));
//! assert!(dims.contains(0, 0));
//! assert!(!dims.contains(-1, 0));
//!
//! assert_eq!(cell_to_raw(None), -1);
//! assert_eq!(cell_from_raw(3), Some(3));
//!
//! let anchor = Coordinate::new(0, 3).offset(1, -1);
//! assert_eq!(anchor, Coordinate::new(1, 2));
//! ```

use serde::{Deserialize, Serialize};

/// Board height in cells (20 rows)
pub const ROWS: usize = 20;

/// Board width in cells (10 columns)
pub const COLUMNS: usize = 10;

/// Anchor row of a freshly spawned piece
pub const SPAWN_ROW: i32 = 0;

/// Anchor column of a freshly spawned piece
pub const SPAWN_COLUMN: i32 = 3;

/// Character marking an occupied sub-cell in a rotation layout
pub const FILLED_MARKER: char = 'X';

/// Raw encoding of an empty cell
pub const EMPTY_RAW: i32 = -1;

/// Upper bound on filled sub-cells in a single rotation layout
pub const MAX_LAYOUT_CELLS: usize = 16;

/// Index into a shape catalog
pub type ShapeIndex = usize;

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(index)`: Cell occupied by the catalog entry at `index`
pub type Cell = Option<ShapeIndex>;

/// Convert a cell to its raw integer form (`-1` for empty)
pub fn cell_to_raw(cell: Cell) -> i32 {
    match cell {
        Some(index) => index as i32,
        None => EMPTY_RAW,
    }
}

/// Convert a raw integer back into a cell; every negative value reads as empty
pub fn cell_from_raw(raw: i32) -> Cell {
    if raw < 0 {
        None
    } else {
        Some(raw as ShapeIndex)
    }
}

/// A grid position; rows grow downward, columns grow rightward
///
/// Coordinates are signed because pieces are routinely evaluated at
/// positions outside the grid (spawn buffer, walls, floor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: i32,
    pub column: i32,
}

impl Coordinate {
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Translate by a row/column delta
    pub const fn offset(self, d_row: i32, d_column: i32) -> Self {
        Self {
            row: self.row + d_row,
            column: self.column + d_column,
        }
    }
}

/// Board dimensions, fixed once a board is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Total number of cells
    pub const fn area(&self) -> usize {
        self.rows * self.columns
    }

    /// Check whether `(row, column)` lies inside `[0, rows) x [0, columns)`
    #[inline(always)]
    pub fn contains(&self, row: i32, column: i32) -> bool {
        row >= 0 && column >= 0 && (row as usize) < self.rows && (column as usize) < self.columns
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(ROWS, COLUMNS)
    }
}

/// Standard 16-entry palette
///
/// Only renderers interpret these; to the rules engine a color is an
/// opaque token carried by each catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Transparent,
    White,
    Red,
    Pink,
    Orange,
    Yellow,
    Aqua,
    BrightGreen,
    Blue,
    LightBlue,
    Purple,
    RoseBouquet,
    Wine,
    Bone,
    Brown,
    Black,
}

impl Color {
    /// Palette slot (0 = transparent, 15 = black)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// RGB value of the palette slot; `None` for transparent
    pub fn rgb(self) -> Option<(u8, u8, u8)> {
        match self {
            Color::Transparent => None,
            Color::White => Some((255, 255, 255)),
            Color::Red => Some((255, 33, 33)),
            Color::Pink => Some((255, 147, 196)),
            Color::Orange => Some((255, 129, 53)),
            Color::Yellow => Some((255, 246, 9)),
            Color::Aqua => Some((36, 156, 163)),
            Color::BrightGreen => Some((120, 220, 82)),
            Color::Blue => Some((0, 63, 173)),
            Color::LightBlue => Some((135, 242, 255)),
            Color::Purple => Some((142, 46, 196)),
            Color::RoseBouquet => Some((164, 131, 159)),
            Color::Wine => Some((92, 64, 108)),
            Color::Bone => Some((229, 205, 196)),
            Color::Brown => Some((145, 70, 61)),
            Color::Black => Some((0, 0, 0)),
        }
    }
}

/// Border/fill color pair of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolyominoColors {
    pub border_color: Color,
    pub fill_color: Color,
}

impl PolyominoColors {
    pub const fn new(border_color: Color, fill_color: Color) -> Self {
        Self {
            border_color,
            fill_color,
        }
    }
}
