use serde::{Deserialize, Serialize};

use crate::active::ActivePolyomino;
use crate::board::Board;
use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::types::{cell_to_raw, Dimensions, EMPTY_RAW};

/// Serializable copy of a board plus the falling piece
///
/// Cells use the raw encoding: `-1` empty, otherwise the catalog index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub rows: usize,
    pub columns: usize,
    pub cells: Vec<i32>,
    pub active: Option<ActivePolyomino>,
}

impl BoardSnapshot {
    pub fn capture(board: &Board, active: Option<ActivePolyomino>) -> Self {
        Self {
            rows: board.rows(),
            columns: board.columns(),
            cells: board.cells().iter().map(|&cell| cell_to_raw(cell)).collect(),
            active,
        }
    }

    /// Rebuild the board, checking every cell against `catalog`.
    ///
    /// The cell count must match `rows * columns` exactly, and every raw
    /// value must be `-1` or an index into `catalog`.
    pub fn to_board(&self, catalog: &Catalog) -> Result<Board> {
        let size_error = || Error::SnapshotSize {
            rows: self.rows,
            columns: self.columns,
            cells: self.cells.len(),
        };
        let area = self.rows.checked_mul(self.columns).ok_or_else(size_error)?;
        if self.rows == 0 || self.columns == 0 || area != self.cells.len() {
            return Err(size_error());
        }
        if let Some(active) = self.active {
            if active.index >= catalog.len() {
                return Err(Error::SnapshotPiece {
                    index: active.index,
                    kinds: catalog.len(),
                });
            }
        }

        let mut board = Board::with_dimensions(Dimensions::new(self.rows, self.columns));
        for (i, &raw) in self.cells.iter().enumerate() {
            let (row, column) = (i / self.columns, i % self.columns);
            let cell = match raw {
                EMPTY_RAW => None,
                index if index >= 0 && (index as usize) < catalog.len() => Some(index as usize),
                _ => {
                    return Err(Error::SnapshotCell {
                        row,
                        column,
                        raw,
                        kinds: catalog.len(),
                    })
                }
            };
            board.set_cell(row as i32, column as i32, cell);
        }
        Ok(board)
    }

    /// Raw value at (row, column); `None` when off the grid
    pub fn raw(&self, row: usize, column: usize) -> Option<i32> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells.get(row * self.columns + column).copied()
    }
}
