//! Read-only view of a game, for renderers and external observers.

use serde::Serialize;

use crate::piece::Piece;
use crate::types::{Cell, Coord, Phase, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub orientation: u8,
    pub origin: Coord,
    pub cells: [Coord; 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            shape: value.shape,
            orientation: value.orientation,
            origin: value.origin,
            cells: value.cells(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub rows: u16,
    pub cols: u16,
    /// Row-major, bottom row first
    pub cells: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub ghost: Option<[Coord; 4]>,
    pub phase: Phase,
    pub paused: bool,
    /// Bumped by the engine on every state change
    pub revision: u64,
}

impl GameSnapshot {
    /// Locked cell at `(row, col)`; `None` when empty or out of bounds
    pub fn cell(&self, row: i32, col: i32) -> Cell {
        if row < 0 || col < 0 || row >= self.rows as i32 || col >= self.cols as i32 {
            return None;
        }
        self.cells[row as usize * self.cols as usize + col as usize]
    }

    pub fn playable(&self) -> bool {
        self.phase != Phase::GameOver && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
            active: None,
            ghost: None,
            phase: Phase::Spawning,
            paused: false,
            revision: 0,
        }
    }
}
