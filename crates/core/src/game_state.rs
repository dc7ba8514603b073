//! Game state module - board plus the falling piece
//!
//! [`GameState`] owns the board and the optional active piece and keeps one
//! invariant: whenever a piece is active, its cells are a valid placement on
//! the board. Every mutating method either preserves that or leaves the state
//! untouched.
//!
//! Sequencing (when to spawn, when gravity applies, when to lock) is the
//! engine's job; this type only offers the moves.

use crate::board::Board;
use crate::piece::Piece;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Coord, Phase, Shape};

/// Board, active piece and the running flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    running: bool,
}

impl GameState {
    /// Create a running game on an empty `rows x cols` board
    pub fn new(rows: u16, cols: u16) -> Self {
        Self::with_board(Board::new(rows, cols))
    }

    /// Create a running game on a prepared board
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            active: None,
            running: true,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> Phase {
        match (self.running, self.active) {
            (false, _) => Phase::GameOver,
            (true, Some(_)) => Phase::Falling,
            (true, None) => Phase::Spawning,
        }
    }

    /// Spawn `shape` at the top center.
    ///
    /// Does nothing unless the game is running with no active piece. If the
    /// spawn cells are blocked the game ends and no piece becomes active.
    /// Returns whether a piece is now falling.
    pub fn spawn(&mut self, shape: Shape) -> bool {
        if self.phase() != Phase::Spawning {
            return false;
        }

        let piece = Piece::spawn(shape, self.board.rows(), self.board.cols());
        if !self.board.is_valid_placement(&piece) {
            self.running = false;
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Try to move the active piece
    pub fn try_move(&mut self, d_row: i32, d_col: i32) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.moved_by(d_row, d_col);
        if self.board.is_valid_placement(&moved) {
            self.active = Some(moved);
            return true;
        }

        false
    }

    /// Try to rotate the active piece with wall kicks
    ///
    /// Each kick candidate is applied to the rotated piece in order; the first
    /// valid one wins. Returns the kick used, or `None` if the rotation was
    /// rejected.
    pub fn try_rotate(&mut self, clockwise: bool) -> Option<(i8, i8)> {
        let active = self.active?;
        let rotated = active.rotated(clockwise);

        for (d_row, d_col) in active.wall_kicks(clockwise) {
            let kicked = rotated.moved_by(d_row as i32, d_col as i32);
            if self.board.is_valid_placement(&kicked) {
                self.active = Some(kicked);
                return Some((d_row, d_col));
            }
        }

        None
    }

    /// Move the active piece down until it rests. Returns rows descended.
    pub fn drop_to_floor(&mut self) -> u32 {
        let mut distance = 0;
        while self.try_move(-1, 0) {
            distance += 1;
        }
        distance
    }

    /// Where the active piece would come to rest if dropped straight down
    pub fn ghost(&self) -> Option<Piece> {
        let mut resting = self.active?;
        loop {
            let below = resting.moved_by(-1, 0);
            if !self.board.is_valid_placement(&below) {
                return Some(resting);
            }
            resting = below;
        }
    }

    /// Write the active piece into the board and clear it.
    ///
    /// Returns the locked piece, if there was one.
    pub fn lock(&mut self) -> Option<Piece> {
        let active = self.active.take()?;
        self.board.place(&active);
        Some(active)
    }

    /// Clear full rows; see [`Board::clear_full_lines`]
    pub fn clear_full_lines(&mut self) -> usize {
        self.board.clear_full_lines()
    }

    /// Cells of the active piece, if any
    pub fn active_cells(&self) -> Option<[Coord; 4]> {
        self.active.map(|piece| piece.cells())
    }

    /// Cells of the ghost piece, if any
    pub fn ghost_cells(&self) -> Option<[Coord; 4]> {
        self.ghost().map(|piece| piece.cells())
    }

    /// Holds whenever the state was only mutated through this type
    pub fn is_consistent(&self) -> bool {
        match self.active {
            Some(piece) => self.running && self.board.is_valid_placement(&piece),
            None => true,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost = self.ghost_cells();
        out.phase = self.phase();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn falling(shape: Shape, rows: u16, cols: u16) -> GameState {
        let mut state = GameState::new(rows, cols);
        assert!(state.spawn(shape));
        state
    }

    #[test]
    fn test_new_state_is_spawning() {
        let state = GameState::new(20, 10);
        assert!(state.is_running());
        assert_eq!(state.phase(), Phase::Spawning);
        assert!(state.active().is_none());
    }

    #[test]
    fn test_spawn_only_when_idle() {
        let mut state = falling(Shape::T, 20, 10);
        assert_eq!(state.phase(), Phase::Falling);
        let before = state.active();
        assert!(!state.spawn(Shape::I));
        assert_eq!(state.active(), before);
    }

    #[test]
    fn test_blocked_spawn_ends_game() {
        let mut board = Board::new(4, 4);
        board.set(Coord::new(3, 1), Some(Shape::O));
        let mut state = GameState::with_board(board.clone());

        assert!(!state.spawn(Shape::I));
        assert_eq!(state.phase(), Phase::GameOver);
        assert!(state.active().is_none());
        assert_eq!(state.board(), &board);
        assert!(!state.spawn(Shape::I));
    }

    #[test]
    fn test_try_move_walls() {
        let mut state = falling(Shape::O, 20, 10);

        let mut moved = 0;
        while state.try_move(0, -1) {
            moved += 1;
        }
        assert_eq!(moved, 4);

        let pinned = state.active();
        assert!(!state.try_move(0, -1));
        assert_eq!(state.active(), pinned);
        assert!(!state.try_move(1, 0));
    }

    #[test]
    fn test_try_rotate_without_kick() {
        let mut state = falling(Shape::T, 20, 10);
        state.try_move(-5, 0);
        assert_eq!(state.try_rotate(true), Some((0, 0)));
        assert_eq!(state.active().unwrap().orientation, 1);
        assert_eq!(state.try_rotate(false), Some((0, 0)));
        assert_eq!(state.active().unwrap().orientation, 0);
    }

    #[test]
    fn test_rotation_rejected_leaves_piece() {
        // A vertical I in a one-wide well cannot turn horizontal.
        let board = Board::from_ascii(&[
            "oo.ooo", "oo.ooo", "oo.ooo", "oo.ooo", "oo.ooo", "oo.ooo",
        ]);
        let mut state = GameState::with_board(board);
        state.active = Some(Piece::new(Shape::I, 3, Coord::new(3, 2)));
        assert!(state.is_consistent());

        let before = state.active();
        assert_eq!(state.try_rotate(true), None);
        assert_eq!(state.active(), before);
    }

    #[test]
    fn test_drop_to_floor_and_ghost_agree() {
        let mut state = falling(Shape::L, 20, 10);
        let ghost = state.ghost().unwrap();
        let distance = state.drop_to_floor();
        assert_eq!(distance, 18);
        assert_eq!(state.active(), Some(ghost));
        assert_eq!(ghost.cells().iter().map(|c| c.row).min(), Some(0));
    }

    #[test]
    fn test_lock_writes_board() {
        let mut state = falling(Shape::O, 20, 10);
        state.drop_to_floor();
        let locked = state.lock().unwrap();
        assert_eq!(state.phase(), Phase::Spawning);
        for at in locked.cells() {
            assert_eq!(state.board().get(at), Some(Some(Shape::O)));
        }
        assert!(state.lock().is_none());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let state = falling(Shape::I, 20, 10);
        let snap = state.snapshot();
        assert_eq!(snap.rows, 20);
        assert_eq!(snap.cols, 10);
        assert_eq!(snap.cells.len(), 200);
        assert_eq!(snap.phase, Phase::Falling);
        assert_eq!(snap.active.unwrap().cells, state.active_cells().unwrap());
        assert_eq!(snap.ghost, state.ghost_cells());
    }
}
