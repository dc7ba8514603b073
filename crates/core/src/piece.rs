//! Piece module - a positioned, oriented shape
//!
//! A [`Piece`] is a small `Copy` value. Moving or rotating it never mutates in
//! place; every transform returns a new piece and the caller decides whether
//! to adopt it.

use serde::Serialize;

use crate::pieces::{
    get_shape, normalize_orientation, spawn_top_offset, wall_kicks, KickCandidates, PieceShape,
};
use crate::types::{Coord, Shape};

/// A falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub shape: Shape,
    pub orientation: u8,
    pub origin: Coord,
}

impl Piece {
    pub fn new(shape: Shape, orientation: u8, origin: Coord) -> Self {
        Self {
            shape,
            orientation: normalize_orientation(shape, orientation as i32),
            origin,
        }
    }

    /// Place a new piece at the top center of a `rows` x `cols` board.
    ///
    /// The origin column is `(cols - 1) / 2`; the origin row puts the
    /// highest spawn cell on the top row.
    pub fn spawn(shape: Shape, rows: u16, cols: u16) -> Self {
        let col = (cols as i32 - 1) / 2;
        let row = rows as i32 - 1 - spawn_top_offset(shape) as i32;
        Self {
            shape,
            orientation: 0,
            origin: Coord::new(row, col),
        }
    }

    /// Cell offsets for the current orientation
    pub fn offsets(&self) -> PieceShape {
        get_shape(self.shape, self.orientation)
    }

    /// The four board cells this piece covers
    pub fn cells(&self) -> [Coord; 4] {
        self.offsets().map(|offset| self.origin.offset(offset))
    }

    pub fn moved_by(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            origin: self.origin.shifted(d_row, d_col),
            ..*self
        }
    }

    pub fn rotated(&self, clockwise: bool) -> Self {
        let step = if clockwise { 1 } else { -1 };
        Self {
            orientation: normalize_orientation(self.shape, self.orientation as i32 + step),
            ..*self
        }
    }

    /// Kick candidates to try after rotating away from the current orientation
    pub fn wall_kicks(&self, clockwise: bool) -> KickCandidates {
        wall_kicks(self.shape, self.orientation, clockwise)
    }
}
