//! Shape colors.
//!
//! Each shape has a solid color for locked and falling cells and a lighter
//! shade for its ghost.

use crate::fb::Rgb;
use crate::types::Shape;

/// Board background
pub const BACKGROUND: Rgb = Rgb::new(73, 81, 89);

pub fn shape_color(shape: Shape) -> Rgb {
    match shape {
        Shape::I => Rgb::new(46, 94, 170),
        Shape::J => Rgb::new(255, 198, 217),
        Shape::L => Rgb::new(33, 89, 56),
        Shape::O => Rgb::new(255, 230, 109),
        Shape::S => Rgb::new(255, 107, 107),
        Shape::T => Rgb::new(78, 205, 196),
        Shape::Z => Rgb::new(242, 66, 54),
    }
}

pub fn ghost_color(shape: Shape) -> Rgb {
    match shape {
        Shape::I => Rgb::new(95, 139, 211),
        Shape::J => Rgb::new(255, 235, 241),
        Shape::L => Rgb::new(61, 164, 104),
        Shape::O => Rgb::new(255, 238, 153),
        Shape::S => Rgb::new(255, 153, 153),
        Shape::T => Rgb::new(128, 219, 213),
        Shape::Z => Rgb::new(246, 129, 121),
    }
}
