//! Board module - manages the game grid
//!
//! The board is a `rows x cols` grid where each cell is empty or holds the
//! shape that filled it. Dimensions are fixed at construction.
//! Uses a flat vector in row-major order (`row * cols + col`) for cache locality.
//! Coordinates: row 0 is the bottom row, column 0 is the left wall.

use crate::piece::Piece;
use crate::types::{Cell, Coord, Shape};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u16,
    cols: u16,
    /// Flat array of cells, row-major order, bottom row first
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows as usize * cols as usize],
        }
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn index(&self, at: Coord) -> Option<usize> {
        if at.col < 0 || at.col >= self.cols as i32 || at.row < 0 || at.row >= self.rows as i32 {
            return None;
        }
        Some(at.row as usize * self.cols as usize + at.col as usize)
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Get cell at a coordinate
    /// Returns None if out of bounds
    pub fn get(&self, at: Coord) -> Option<Cell> {
        self.index(at).map(|idx| self.cells[idx])
    }

    /// Set cell at a coordinate
    /// Returns false if out of bounds
    pub fn set(&mut self, at: Coord, cell: Cell) -> bool {
        match self.index(at) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a coordinate is within bounds and empty
    pub fn is_free(&self, at: Coord) -> bool {
        matches!(self.get(at), Some(None))
    }

    /// Check if a coordinate is within bounds and filled
    pub fn is_occupied(&self, at: Coord) -> bool {
        matches!(self.get(at), Some(Some(_)))
    }

    /// Check whether every cell of `piece` is in bounds and empty.
    ///
    /// Off-board and overlapping cells fail the same check.
    pub fn is_valid_placement(&self, piece: &Piece) -> bool {
        piece.cells().iter().all(|&at| self.is_free(at))
    }

    /// Fill the board cells covered by `piece` with its shape.
    ///
    /// Cells outside the board are skipped.
    pub fn place(&mut self, piece: &Piece) {
        for at in piece.cells() {
            self.set(at, Some(piece.shape));
        }
    }

    /// Fill an entire row (test and scenario setup helper)
    pub fn fill_row(&mut self, row: u16, shape: Shape) {
        for col in 0..self.cols {
            self.set(Coord::new(row as i32, col as i32), Some(shape));
        }
    }

    /// Row slice, bottom row is 0
    pub fn row(&self, row: u16) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        let start = row as usize * self.cols as usize;
        Some(&self.cells[start..start + self.cols as usize])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: u16) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_some()))
    }

    /// Remove every full row and compact the rest downward.
    ///
    /// Retained rows keep their relative order and are packed into
    /// consecutive slots starting at row 0; the rows left over at the top
    /// become empty. Returns how many rows were removed.
    pub fn clear_full_lines(&mut self) -> usize {
        let width = self.cols as usize;
        let mut write = 0usize;
        let mut cleared = 0usize;

        for read in 0..self.rows {
            if self.is_row_full(read) {
                cleared += 1;
                continue;
            }
            let read = read as usize;
            if write != read {
                self.cells
                    .copy_within(read * width..(read + 1) * width, write * width);
            }
            write += 1;
        }

        self.cells[write * width..].fill(None);
        cleared
    }

    /// Get a reference to the internal cells array (row-major, bottom row first)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from text rows, top row first.
    ///
    /// `.` is empty, a shape letter fills the cell, anything else fills it
    /// with `O`. Intended for tests and scenario setup.
    pub fn from_ascii(rows: &[&str]) -> Self {
        let height = rows.len() as u16;
        let width = rows.first().map_or(0, |r| r.chars().count()) as u16;
        let mut board = Self::new(height, width);

        for (i, line) in rows.iter().enumerate() {
            let row = height as i32 - 1 - i as i32;
            for (col, ch) in line.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let shape = Shape::from_str(&ch.to_string()).unwrap_or(Shape::O);
                board.set(Coord::new(row, col as i32), Some(shape));
            }
        }

        board
    }
}
