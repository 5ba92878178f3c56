//! Board module - manages the occupancy grid
//!
//! The board is a `rows x columns` grid (20x10 by default) where each cell is
//! empty or holds the catalog index of the piece type occupying it.
//! Uses a flat row-major vector; dimensions are fixed at construction.
//! Coordinates: (row, column), row 0 at the top, column 0 at the left.
//!
//! Writes are tolerant: out-of-bounds writes are silently dropped, because
//! pieces are routinely written while partially above the grid. Reads through
//! [`Board::get_cell`] are strict and panic outside the grid.

use std::fmt;

use crate::types::{Cell, Dimensions};

/// The game board using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    dims: Dimensions,
    /// Flat array of cells, row-major order (row * columns + column)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the default dimensions
    pub fn new() -> Self {
        Self::with_dimensions(Dimensions::default())
    }

    /// Create a new empty board of the given size
    pub fn with_dimensions(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![None; dims.area()],
        }
    }

    /// Calculate flat index from (row, column) coordinates
    #[inline(always)]
    fn index(&self, row: i32, column: i32) -> Option<usize> {
        if !self.dims.contains(row, column) {
            return None;
        }
        Some(row as usize * self.dims.columns + column as usize)
    }

    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    pub fn columns(&self) -> usize {
        self.dims.columns
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Reset every cell to empty, discarding all occupancy
    pub fn initialize(&mut self) {
        self.cells.fill(None);
    }

    /// Write a cell. Out-of-bounds writes are ignored.
    ///
    /// Returns whether the write landed on the grid.
    pub fn set_cell(&mut self, row: i32, column: i32, value: Cell) -> bool {
        match self.index(row, column) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Read a cell that is known to be on the grid.
    ///
    /// # Panics
    ///
    /// Panics if `(row, column)` lies outside the grid. Use [`Board::get`]
    /// when the coordinate has not been bounds-checked.
    pub fn get_cell(&self, row: i32, column: i32) -> Cell {
        match self.index(row, column) {
            Some(idx) => self.cells[idx],
            None => panic!(
                "cell ({}, {}) is outside the {}x{} board",
                row, column, self.dims.rows, self.dims.columns
            ),
        }
    }

    /// Get cell at (row, column); `None` if out of bounds
    pub fn get(&self, row: i32, column: i32) -> Option<Cell> {
        self.index(row, column).map(|idx| self.cells[idx])
    }

    /// Check if position is on the grid and empty
    pub fn is_vacant(&self, row: i32, column: i32) -> bool {
        matches!(self.get(row, column), Some(None))
    }

    /// Check if position is on the grid and filled
    pub fn is_occupied(&self, row: i32, column: i32) -> bool {
        matches!(self.get(row, column), Some(Some(_)))
    }

    /// Copy every cell of `source` into `destination`.
    ///
    /// Goes through [`Board::get_cell`] and [`Board::set_cell`], so an
    /// off-grid destination is a no-op while an off-grid source panics.
    pub fn copy_row(&mut self, source: i32, destination: i32) {
        for column in 0..self.dims.columns as i32 {
            let value = self.get_cell(source, column);
            self.set_cell(destination, column, value);
        }
    }

    /// Row slice; empty if `row` is off the grid
    pub fn row(&self, row: usize) -> &[Cell] {
        if row >= self.dims.rows {
            return &[];
        }
        let start = row * self.dims.columns;
        &self.cells[start..start + self.dims.columns]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        row < self.dims.rows && self.row(row).iter().all(|cell| cell.is_some())
    }

    /// Check if a row holds no filled cell
    pub fn is_row_empty(&self, row: usize) -> bool {
        row < self.dims.rows && self.row(row).iter().all(|cell| cell.is_none())
    }

    fn clear_row(&mut self, row: usize) {
        let start = row * self.dims.columns;
        let end = start + self.dims.columns;
        self.cells[start..end].fill(None);
    }

    /// Remove every full row, letting the rows above fall into place.
    ///
    /// Two-pointer scan from the bottom: surviving rows are compacted
    /// downward with [`Board::copy_row`] and the vacated top rows are
    /// emptied. Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let rows = self.dims.rows;
        let mut write = rows;
        let mut cleared = 0;

        for read in (0..rows).rev() {
            if self.is_row_full(read) {
                cleared += 1;
            } else {
                write -= 1;
                if write != read {
                    self.copy_row(read as i32, write as i32);
                }
            }
        }

        for row in 0..write {
            self.clear_row(row);
        }

        cleared
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Create from row strings for testing: digits are catalog indices, anything else is empty
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let columns = rows.first().map_or(0, |r| r.len());
        let mut board = Self::with_dimensions(Dimensions::new(rows.len(), columns));
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                board.set_cell(r as i32, c as i32, ch.to_digit(10).map(|d| d as usize));
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dims.rows {
            for cell in self.row(row) {
                match cell {
                    Some(index) if *index < 10 => write!(f, "{}", index)?,
                    Some(_) => write!(f, "#")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 9), Some(9));
        assert_eq!(board.index(1, 0), Some(10));
        assert_eq!(board.index(19, 9), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(0, 10), None);
        assert_eq!(board.index(20, 0), None);
    }

    #[test]
    fn test_board_flat_storage() {
        let mut board = Board::new();
        board.set_cell(0, 0, Some(1));
        board.set_cell(10, 5, Some(4));

        assert_eq!(board.cells[0], Some(1));
        assert_eq!(board.cells[10 * 10 + 5], Some(4));
    }

    #[test]
    fn test_from_rows_and_display() {
        let board = Board::from_rows(&["..1.", "22..", "....", "3333"]);
        assert_eq!(board.get_cell(0, 2), Some(1));
        assert_eq!(board.get_cell(1, 1), Some(2));
        assert!(board.is_row_full(3));
        assert_eq!(board.to_string(), "..1.\n22..\n....\n3333\n");
    }

    #[test]
    fn test_clear_full_rows_compacts_and_empties_top() {
        let mut board = Board::from_rows(&["1...", "2222", ".3..", "4444"]);
        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.to_string(), "....\n....\n1...\n.3..\n");
    }

    #[test]
    #[should_panic(expected = "outside the 20x10 board")]
    fn test_get_cell_out_of_bounds_panics() {
        Board::new().get_cell(20, 0);
    }
}
