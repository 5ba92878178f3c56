//! Session module - one board, one falling piece
//!
//! The session keeps the active piece written into the board while it
//! falls and moves it with the erase / test / commit choreography:
//!
//! 1. erase the piece at its current anchor
//! 2. test the candidate anchor or orientation
//! 3. commit the candidate, or re-commit the original
//!
//! The candidate is always tested before anything is written, so a
//! rejected move leaves the board exactly as it was. Writing first and
//! erasing on failure would clobber whatever occupied the colliding cell.

use log::{debug, info};

use blockfall_core::{
    ActivePolyomino, Board, BoardSnapshot, Catalog, PieceQueue, PlacementEngine, Result,
};
use blockfall_types::ShapeIndex;

use crate::config::SessionConfig;

#[derive(Debug, Clone)]
pub struct Session<'c> {
    engine: PlacementEngine<'c>,
    config: SessionConfig,
    board: Board,
    queue: PieceQueue,
    active: Option<ActivePolyomino>,
    topped_out: bool,
    pieces_locked: u32,
    lines_cleared: u32,
}

impl<'c> Session<'c> {
    /// Create a session over a shared catalog. Nothing is spawned yet.
    pub fn new(catalog: &'c Catalog, config: SessionConfig, seed: u32) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            engine: PlacementEngine::new(catalog),
            config,
            board: Board::with_dimensions(config.dimensions),
            queue: PieceQueue::new(catalog.len(), seed),
            active: None,
            topped_out: false,
            pieces_locked: 0,
            lines_cleared: 0,
        })
    }

    /// Wipe the board and replay the piece sequence from the start
    pub fn restart(&mut self) {
        self.board.initialize();
        self.queue.reset();
        self.active = None;
        self.topped_out = false;
        self.pieces_locked = 0;
        self.lines_cleared = 0;
        debug!("session restarted (seed {})", self.queue.seed());
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access, e.g. to seed garbage rows
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn engine(&self) -> PlacementEngine<'c> {
        self.engine
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn active(&self) -> Option<ActivePolyomino> {
        self.active
    }

    /// Set once a spawn was blocked; cleared by [`Session::restart`]
    pub fn topped_out(&self) -> bool {
        self.topped_out
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Catalog index the next [`Session::spawn_next`] will use
    pub fn next_index(&self) -> ShapeIndex {
        self.queue.peek()
    }

    /// Bring a piece in at the spawn anchor, orientation 0.
    ///
    /// An unlocked active piece is picked up first. If the spawn cells are
    /// blocked the session tops out and the board is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the catalog.
    pub fn spawn(&mut self, index: ShapeIndex) -> bool {
        if self.topped_out {
            return false;
        }
        if let Some(current) = self.active.take() {
            self.engine.erase(&mut self.board, &current);
        }

        let piece = ActivePolyomino::new(index, self.config.spawn);
        if !self.engine.fits(&self.board, &piece) {
            self.topped_out = true;
            info!(
                "spawn of piece {} blocked at ({}, {}); topped out after {} pieces",
                index, piece.location.row, piece.location.column, self.pieces_locked
            );
            return false;
        }

        self.engine.place(&mut self.board, &piece);
        self.active = Some(piece);
        debug!("spawned piece {}", index);
        true
    }

    /// Spawn whatever the bag hands out next
    pub fn spawn_next(&mut self) -> bool {
        if self.topped_out {
            return false;
        }
        let index = self.queue.draw();
        self.spawn(index)
    }

    /// Shift the active piece; rows grow downward
    pub fn try_move(&mut self, d_row: i32, d_column: i32) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        self.relocate(active, active.moved(d_row, d_column))
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(0, -1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(0, 1)
    }

    pub fn soft_drop(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Rotate one step about the layout origin (no wall kicks).
    ///
    /// Single-orientation pieces never rotate.
    pub fn try_rotate(&mut self, clockwise: bool) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let count = self.engine.catalog().entry(active.index).rotation_count();
        if count < 2 {
            return false;
        }
        self.relocate(active, active.rotated(clockwise, count))
    }

    /// Drop straight down and lock. Returns the number of rows fallen.
    pub fn hard_drop(&mut self) -> u32 {
        let Some(active) = self.active else {
            return 0;
        };
        let distance = self.drop_distance(&active);
        if distance > 0 {
            self.relocate(active, active.moved(distance, 0));
        }
        self.lock();
        distance as u32
    }

    /// Whether the active piece rests on the floor or a filled cell
    pub fn is_grounded(&self) -> bool {
        match self.active {
            Some(active) => !self.fits_over(&active, &active.moved(1, 0)),
            None => false,
        }
    }

    /// Anchor row the active piece would land on
    pub fn ghost_row(&self) -> Option<i32> {
        let active = self.active?;
        Some(active.location.row + self.drop_distance(&active))
    }

    /// Make the active piece permanent and clear any full rows.
    ///
    /// Returns the number of rows cleared.
    pub fn lock(&mut self) -> usize {
        let Some(active) = self.active.take() else {
            return 0;
        };
        self.pieces_locked += 1;

        let cleared = self.board.clear_full_rows();
        self.lines_cleared += cleared as u32;
        debug!(
            "locked piece {} at ({}, {}), cleared {} rows",
            active.index, active.location.row, active.location.column, cleared
        );
        cleared
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(&self.board, self.active)
    }

    /// Erase `from`, then commit `to` if it fits, else re-commit `from`
    fn relocate(&mut self, from: ActivePolyomino, to: ActivePolyomino) -> bool {
        self.engine.erase(&mut self.board, &from);
        if self.engine.fits(&self.board, &to) {
            self.engine.place(&mut self.board, &to);
            self.active = Some(to);
            true
        } else {
            self.engine.place(&mut self.board, &from);
            false
        }
    }

    /// Would `candidate` fit if `current` (already on the board) were lifted?
    fn fits_over(&self, current: &ActivePolyomino, candidate: &ActivePolyomino) -> bool {
        self.engine.cells(candidate).all(|cell| {
            self.engine.test_cell(&self.board, cell.row, cell.column)
                || self.engine.cells(current).any(|own| own == cell)
        })
    }

    fn drop_distance(&self, active: &ActivePolyomino) -> i32 {
        let mut distance = 0;
        while self.fits_over(active, &active.moved(distance + 1, 0)) {
            distance += 1;
        }
        distance
    }
}
