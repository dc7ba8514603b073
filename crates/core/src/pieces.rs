//! Pieces module - shape geometry and wall kick tables
//!
//! Every table here is `(row, col)` relative to the piece origin, with rows
//! growing upward. Shapes other than O have four orientations (0°, 90°, 180°,
//! 270° clockwise); O has exactly one, so rotating it changes nothing.
//!
//! Wall kicks are stored for clockwise rotation only. A counter-clockwise
//! rotation from orientation `n` tries the same candidates as a clockwise one
//! from `n`, each negated component-wise.

use arrayvec::ArrayVec;

use crate::types::{Offset, Shape};

/// Shape of a piece - 4 cell offsets from the piece origin
pub type PieceShape = [Offset; 4];

/// Longest kick candidate list of any shape
pub const MAX_KICKS: usize = 5;

/// Kick candidates for a single rotation attempt, in trial order
pub type KickCandidates = ArrayVec<Offset, MAX_KICKS>;

const I_SHAPES: [PieceShape; 4] = [
    [(0, -1), (0, 0), (0, 1), (0, 2)],
    [(-1, 1), (0, 1), (1, 1), (-2, 1)],
    [(-1, -1), (-1, 0), (-1, 1), (-1, 2)],
    [(-1, 0), (0, 0), (1, 0), (-2, 0)],
];

const O_SHAPES: [PieceShape; 1] = [[(0, 0), (0, 1), (1, 1), (1, 0)]];

const T_SHAPES: [PieceShape; 4] = [
    [(0, -1), (0, 0), (0, 1), (1, 0)],
    [(-1, 0), (0, 0), (0, 1), (1, 0)],
    [(0, -1), (0, 0), (0, 1), (-1, 0)],
    [(0, -1), (0, 0), (1, 0), (-1, 0)],
];

const J_SHAPES: [PieceShape; 4] = [
    [(1, -1), (0, -1), (0, 0), (0, 1)],
    [(1, 0), (0, 0), (-1, 0), (1, 1)],
    [(-1, 1), (0, -1), (0, 0), (0, 1)],
    [(1, 0), (0, 0), (-1, 0), (-1, -1)],
];

const L_SHAPES: [PieceShape; 4] = [
    [(0, -1), (0, 0), (0, 1), (1, 1)],
    [(1, 0), (0, 0), (-1, 0), (-1, 1)],
    [(0, -1), (0, 0), (0, 1), (-1, -1)],
    [(1, 0), (0, 0), (-1, 0), (1, -1)],
];

const S_SHAPES: [PieceShape; 4] = [
    [(0, -1), (0, 0), (1, 0), (1, 1)],
    [(1, 0), (0, 0), (0, 1), (-1, 1)],
    [(0, 1), (0, 0), (-1, 0), (-1, -1)],
    [(1, -1), (0, -1), (0, 0), (-1, 0)],
];

const Z_SHAPES: [PieceShape; 4] = [
    [(1, -1), (1, 0), (0, 0), (0, 1)],
    [(1, 1), (0, 1), (0, 0), (-1, 0)],
    [(0, -1), (0, 0), (-1, 0), (-1, 1)],
    [(1, 0), (0, 0), (0, -1), (-1, -1)],
];

/// All orientations of a shape, in clockwise order starting at spawn
pub fn orientations(shape: Shape) -> &'static [PieceShape] {
    match shape {
        Shape::I => &I_SHAPES,
        Shape::O => &O_SHAPES,
        Shape::T => &T_SHAPES,
        Shape::J => &J_SHAPES,
        Shape::L => &L_SHAPES,
        Shape::S => &S_SHAPES,
        Shape::Z => &Z_SHAPES,
    }
}

/// Number of distinct orientations (4, or 1 for O)
pub fn orientation_count(shape: Shape) -> u8 {
    orientations(shape).len() as u8
}

/// Reduce any rotation step count to a valid orientation index.
///
/// Uses a non-negative modulo, so `-1` maps to the last orientation.
pub fn normalize_orientation(shape: Shape, steps: i32) -> u8 {
    steps.rem_euclid(orientation_count(shape) as i32) as u8
}

/// Get the cell offsets for a shape at an orientation
pub fn get_shape(shape: Shape, orientation: u8) -> PieceShape {
    let table = orientations(shape);
    table[orientation as usize % table.len()]
}

/// Highest row offset among the spawn orientation's cells
pub fn spawn_top_offset(shape: Shape) -> i8 {
    get_shape(shape, 0)
        .iter()
        .map(|&(row, _)| row)
        .max()
        .unwrap_or(0)
}

/// O never needs a kick
const O_KICKS: [&[Offset]; 1] = [&[(0, 0)]];

/// I kick table
const I_KICKS: [&[Offset]; 4] = [
    // 0 -> 1
    &[(0, 0), (0, -2), (0, 1), (-1, -2), (2, -1)],
    // 1 -> 2
    &[(0, 0), (0, -1), (0, 2), (2, -1), (-1, 2)],
    // 2 -> 3
    &[(0, 0), (0, 2), (0, -1), (1, 2), (-2, -1)],
    // 3 -> 0
    &[(0, 0), (0, 1), (0, -2), (-2, 1), (1, -2)],
];

/// Kick table shared by J, L, S, Z and T
const JLSZT_KICKS: [&[Offset]; 4] = [
    // 0 -> 1
    &[(0, 0), (0, -1), (1, -1), (0, -2), (-2, -1)],
    // 1 -> 2
    &[(0, 0), (0, 1), (-1, 1), (2, 0), (1, 2)],
    // 2 -> 3
    &[(0, 0), (0, 1), (1, 1), (-2, 0), (-2, 1)],
    // 3 -> 0
    &[(0, 0), (0, -1), (-1, -1), (2, 0), (2, -1)],
];

/// Get the clockwise kick table for a shape, indexed by starting orientation
pub fn get_kick_table(shape: Shape) -> &'static [&'static [Offset]] {
    match shape {
        Shape::O => &O_KICKS,
        Shape::I => &I_KICKS,
        Shape::T | Shape::J | Shape::L | Shape::S | Shape::Z => &JLSZT_KICKS,
    }
}

/// Kick candidates for rotating away from `orientation`.
///
/// The first candidate is always `(0, 0)`.
pub fn wall_kicks(shape: Shape, orientation: u8, clockwise: bool) -> KickCandidates {
    let table = get_kick_table(shape);
    let row = table[orientation as usize % table.len()];

    row.iter()
        .map(|&(d_row, d_col)| {
            if clockwise {
                (d_row, d_col)
            } else {
                (-d_row, -d_col)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_counts() {
        for shape in Shape::ALL {
            let expected = if shape == Shape::O { 1 } else { 4 };
            assert_eq!(orientation_count(shape), expected, "{:?}", shape);
            assert_eq!(get_kick_table(shape).len(), expected as usize);
        }
    }

    #[test]
    fn normalize_wraps_negative_steps() {
        assert_eq!(normalize_orientation(Shape::T, -1), 3);
        assert_eq!(normalize_orientation(Shape::T, 4), 0);
        assert_eq!(normalize_orientation(Shape::T, 5), 1);
        assert_eq!(normalize_orientation(Shape::O, -3), 0);
    }

    #[test]
    fn every_kick_list_starts_without_offset() {
        for shape in Shape::ALL {
            for orientation in 0..orientation_count(shape) {
                for clockwise in [true, false] {
                    let kicks = wall_kicks(shape, orientation, clockwise);
                    assert_eq!(kicks[0], (0, 0));
                }
            }
        }
    }

    #[test]
    fn counter_clockwise_kicks_are_negated() {
        let cw = wall_kicks(Shape::I, 1, true);
        let ccw = wall_kicks(Shape::I, 1, false);
        assert_eq!(cw.len(), ccw.len());
        for (a, b) in cw.iter().zip(ccw.iter()) {
            assert_eq!((a.0, a.1), (-b.0, -b.1));
        }
    }

    #[test]
    fn i_uses_its_own_table() {
        assert_ne!(wall_kicks(Shape::I, 0, true), wall_kicks(Shape::T, 0, true));
        assert_eq!(wall_kicks(Shape::J, 2, true), wall_kicks(Shape::Z, 2, true));
    }

    #[test]
    fn spawn_top_offsets() {
        assert_eq!(spawn_top_offset(Shape::I), 0);
        assert_eq!(spawn_top_offset(Shape::O), 1);
        assert_eq!(spawn_top_offset(Shape::J), 1);
    }
}
