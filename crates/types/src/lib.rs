//! Core types module - shared data structures and constants
//!
//! This crate defines the plain data types used by every other crate in the
//! workspace: shapes, coordinates, engine phases and player commands. Nothing
//! here knows about boards, timers or terminals.
//!
//! # Coordinates
//!
//! Boards are addressed by `(row, col)`:
//!
//! - **Row** increases upward; row 0 is the bottom row
//! - **Column** increases rightward; column 0 is the left wall
//!
//! # Default Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 30 | Board height in cells |
//! | `DEFAULT_COLS` | 20 | Board width in cells |
//! | `DEFAULT_TICK_MS` | 200 | Gravity interval in milliseconds |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, Coord, Shape};
//!
//! let shape = Shape::from_str("t").unwrap();
//! assert_eq!(shape, Shape::T);
//!
//! let cell = Coord::new(3, 4).offset((1, -1));
//! assert_eq!(cell, Coord::new(4, 3));
//!
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//! ```

use serde::{Deserialize, Serialize};

/// Default board height (rows)
pub const DEFAULT_ROWS: u16 = 30;

/// Default board width (columns)
pub const DEFAULT_COLS: u16 = 20;

/// Default gravity interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 200;

/// Smallest board height on which every shape can spawn
pub const MIN_ROWS: u16 = 2;

/// Smallest board width on which every shape can spawn
pub const MIN_COLS: u16 = 4;

/// Largest supported board dimension
pub const MAX_DIMENSION: u16 = 255;

/// The seven block shapes
///
/// Shapes carry no gameplay meaning once placed; a locked cell remembers its
/// shape only so the presentation layer can color it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl Shape {
    /// Every shape, in table order
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::O,
        Shape::T,
        Shape::J,
        Shape::L,
        Shape::S,
        Shape::Z,
    ];

    /// Parse shape from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Shape;
    ///
    /// assert_eq!(Shape::from_str("i"), Some(Shape::I));
    /// assert_eq!(Shape::from_str("Z"), Some(Shape::Z));
    /// assert_eq!(Shape::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(Shape::I),
            "o" => Some(Shape::O),
            "t" => Some(Shape::T),
            "j" => Some(Shape::J),
            "l" => Some(Shape::L),
            "s" => Some(Shape::S),
            "z" => Some(Shape::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::I => "i",
            Shape::O => "o",
            Shape::T => "t",
            Shape::J => "j",
            Shape::L => "l",
            Shape::S => "s",
            Shape::Z => "z",
        }
    }
}

/// A cell on the board
///
/// - `None`: empty
/// - `Some(Shape)`: filled by a locked piece of that shape
pub type Cell = Option<Shape>;

/// Relative `(row, col)` offset used by the geometry and kick tables
pub type Offset = (i8, i8);

/// Absolute board coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Shift by a table offset
    pub fn offset(self, (d_row, d_col): Offset) -> Self {
        Self {
            row: self.row + d_row as i32,
            col: self.col + d_col as i32,
        }
    }

    /// Shift by arbitrary deltas
    pub fn shifted(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// Engine phase
///
/// - **Spawning**: running, no piece is falling; the next tick spawns one
/// - **Falling**: a piece is active
/// - **GameOver**: terminal, a freshly spawned piece collided with the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Spawning,
    Falling,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Spawning => "spawning",
            Phase::Falling => "falling",
            Phase::GameOver => "game_over",
        }
    }
}

/// Player commands accepted by the engine
///
/// Input layers (keyboard, scripts, tests) translate their raw events into
/// these values. Gravity is not a command; it is driven by `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    /// Shift one column left
    MoveLeft,
    /// Shift one column right
    MoveRight,
    /// Move one row down
    SoftDrop,
    /// Drop to the lowest reachable row
    HardDrop,
    /// Rotate 90° clockwise with wall kicks
    RotateCw,
    /// Rotate 90° counter-clockwise with wall kicks
    RotateCcw,
    Pause,
    Resume,
    TogglePause,
}

impl Command {
    /// Parse command from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("ROTATECCW"), Some(Command::RotateCcw));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "harddrop" => Some(Command::HardDrop),
            "rotatecw" => Some(Command::RotateCw),
            "rotateccw" => Some(Command::RotateCcw),
            "pause" => Some(Command::Pause),
            "resume" => Some(Command::Resume),
            "togglepause" => Some(Command::TogglePause),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::HardDrop => "hardDrop",
            Command::RotateCw => "rotateCw",
            Command::RotateCcw => "rotateCcw",
            Command::Pause => "pause",
            Command::Resume => "resume",
            Command::TogglePause => "togglePause",
        }
    }
}
