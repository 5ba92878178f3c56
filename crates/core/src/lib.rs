//! Core rules module - pure, deterministic, and testable
//!
//! Board occupancy, the shape catalog, the active piece descriptor and the
//! placement engine that ties them together. There is no global state: a
//! [`Catalog`] is built once and shared read-only; each game owns its
//! [`Board`].
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size occupancy grid with tolerant writes and row copy
//! - [`catalog`]: polyomino rotation layouts and color tokens
//! - [`active`]: the falling piece's catalog index, orientation and anchor
//! - [`placement`]: collision test and apply/erase against a board
//! - [`rng`]: bag randomizer over catalog indices
//! - [`snapshot`]: serializable board state
//!
//! # Example
//!
//! ```
//! use blockfall_core::{ActivePolyomino, Board, Catalog, PlacementEngine};
//! use blockfall_core::catalog::tetromino;
//! use blockfall_core::types::Coordinate;
//!
//! let catalog = Catalog::tetrominoes();
//! let engine = PlacementEngine::new(&catalog);
//! let mut board = Board::new();
//!
//! let piece = ActivePolyomino::new(tetromino::O, Coordinate::new(0, 4));
//! assert!(engine.apply_piece(&mut board, &piece, false, true)); // probe
//! assert!(engine.apply_piece(&mut board, &piece, false, false)); // commit
//! assert_eq!(board.get_cell(1, 5), Some(tetromino::O));
//!
//! engine.apply_piece(&mut board, &piece, true, false); // pick it back up
//! assert_eq!(board.occupied_count(), 0);
//! ```

pub mod active;
pub mod board;
pub mod catalog;
pub mod error;
pub mod placement;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

pub use active::ActivePolyomino;
pub use board::Board;
pub use catalog::{Catalog, Layout, Polyomino, PolyominoDef};
pub use error::{Error, Result};
pub use placement::PlacementEngine;
pub use rng::{PieceQueue, SimpleRng};
pub use snapshot::BoardSnapshot;
