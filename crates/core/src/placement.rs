//! Placement module - collision testing and apply/erase of the active piece
//!
//! Every question about a piece against the board goes through
//! [`PlacementEngine::test_cell`]:
//!
//! - `row < 0` (spawn buffer): passable iff `0 <= column <= columns`. The
//!   upper bound is inclusive here, unlike everywhere else.
//! - otherwise: passable iff the cell is on the grid and empty.
//!
//! [`PlacementEngine::apply_piece`] walks every filled sub-cell of the
//! current layout. In write mode it writes *every* cell, including ones that
//! failed the test, and still reports the failure. Callers that need a clean
//! board on failure must test first (see `blockfall_engine::Session`).

use crate::active::ActivePolyomino;
use crate::board::Board;
use crate::catalog::{Catalog, Layout};
use crate::types::Coordinate;

/// Stateless rules over a shared, read-only catalog
#[derive(Debug, Clone, Copy)]
pub struct PlacementEngine<'c> {
    catalog: &'c Catalog,
}

impl<'c> PlacementEngine<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Current layout of a piece; orientation wraps modulo the rotation count
    ///
    /// # Panics
    ///
    /// Panics if the piece references an unknown catalog entry.
    pub fn layout(&self, piece: &ActivePolyomino) -> &'c Layout {
        self.catalog.entry(piece.index).layout(piece.orientation)
    }

    /// Absolute board coordinates of every filled sub-cell
    pub fn cells(&self, piece: &ActivePolyomino) -> impl Iterator<Item = Coordinate> + 'c {
        let origin = piece.location;
        self.layout(piece)
            .cells()
            .iter()
            .map(move |&(dr, dc)| origin.offset(dr, dc))
    }

    /// Single-cell collision predicate
    #[inline]
    pub fn test_cell(&self, board: &Board, row: i32, column: i32) -> bool {
        if row < 0 {
            // Spawn buffer: only the walls are enforced.
            column >= 0 && column <= board.columns() as i32
        } else {
            board.is_vacant(row, column)
        }
    }

    /// Test, place or erase a piece.
    ///
    /// - `test_only`: evaluate only, never touch the board
    /// - `erase`: write empty into every filled sub-cell
    /// - neither: write the piece's catalog index into every filled sub-cell
    ///
    /// Returns `true` iff every filled sub-cell passed [`Self::test_cell`].
    /// The scan never stops early: in write mode all in-bounds cells are
    /// written even when the result is `false`.
    pub fn apply_piece(
        &self,
        board: &mut Board,
        piece: &ActivePolyomino,
        erase: bool,
        test_only: bool,
    ) -> bool {
        if test_only {
            return self.fits(board, piece);
        }

        let value = if erase { None } else { Some(piece.index) };
        let mut passable = true;
        for cell in self.cells(piece) {
            if !self.test_cell(board, cell.row, cell.column) {
                passable = false;
            }
            board.set_cell(cell.row, cell.column, value);
        }
        passable
    }

    /// Whether the piece could be placed as-is
    pub fn fits(&self, board: &Board, piece: &ActivePolyomino) -> bool {
        self.cells(piece)
            .all(|cell| self.test_cell(board, cell.row, cell.column))
    }

    /// Write the piece into the board
    pub fn place(&self, board: &mut Board, piece: &ActivePolyomino) -> bool {
        self.apply_piece(board, piece, false, false)
    }

    /// Clear the piece's cells from the board
    pub fn erase(&self, board: &mut Board, piece: &ActivePolyomino) {
        self.apply_piece(board, piece, true, false);
    }

    /// Rows the piece can fall before it would collide; the piece itself
    /// must not be written into `board`
    pub fn drop_distance(&self, board: &Board, piece: &ActivePolyomino) -> i32 {
        let mut distance = 0;
        while self.fits(board, &piece.moved(distance + 1, 0)) {
            distance += 1;
        }
        distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tetromino;
    use crate::types::{Dimensions, COLUMNS};

    #[test]
    fn test_spawn_buffer_checks_columns_only() {
        let catalog = Catalog::tetrominoes();
        let engine = PlacementEngine::new(&catalog);
        let board = Board::new();

        assert!(engine.test_cell(&board, -5, 0));
        assert!(engine.test_cell(&board, -1, COLUMNS as i32));
        assert!(!engine.test_cell(&board, -1, -1));
        assert!(!engine.test_cell(&board, -1, COLUMNS as i32 + 1));
    }

    #[test]
    fn test_visible_grid_checks_walls_floor_and_occupancy() {
        let catalog = Catalog::tetrominoes();
        let engine = PlacementEngine::new(&catalog);
        let mut board = Board::with_dimensions(Dimensions::new(4, 4));
        board.set_cell(2, 2, Some(tetromino::T));

        assert!(engine.test_cell(&board, 0, 0));
        assert!(!engine.test_cell(&board, 0, 4));
        assert!(!engine.test_cell(&board, 4, 0));
        assert!(!engine.test_cell(&board, 2, 2));
    }

    #[test]
    fn test_cells_follow_orientation() {
        let catalog = Catalog::tetrominoes();
        let engine = PlacementEngine::new(&catalog);
        let piece = ActivePolyomino {
            orientation: 5,
            ..ActivePolyomino::new(tetromino::I, Coordinate::new(2, 3))
        };

        let cells: Vec<Coordinate> = engine.cells(&piece).collect();
        assert_eq!(
            cells,
            vec![
                Coordinate::new(2, 3),
                Coordinate::new(3, 3),
                Coordinate::new(4, 3),
                Coordinate::new(5, 3),
            ]
        );
    }

    #[test]
    fn test_failed_write_still_writes() {
        let catalog = Catalog::tetrominoes();
        let engine = PlacementEngine::new(&catalog);
        let mut board = Board::from_rows(&["....", "....", "....", ".6.."]);
        let piece = ActivePolyomino::new(tetromino::O, Coordinate::new(2, 1));

        assert!(!engine.place(&mut board, &piece));
        assert_eq!(board.get_cell(2, 1), Some(tetromino::O));
        assert_eq!(board.get_cell(3, 1), Some(tetromino::O));
        assert_eq!(board.get_cell(3, 2), Some(tetromino::O));
    }

    #[test]
    fn test_drop_distance_on_empty_board() {
        let catalog = Catalog::tetrominoes();
        let engine = PlacementEngine::new(&catalog);
        let board = Board::new();
        let piece = ActivePolyomino::new(tetromino::O, Coordinate::new(0, 4));
        assert_eq!(engine.drop_distance(&board, &piece), 18);
    }
}
