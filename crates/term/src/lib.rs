//! Terminal frontend for blockfall.
//!
//! Snapshots are drawn into a plain framebuffer, which the renderer diffs
//! against the previous frame and flushes through crossterm. Each board cell
//! is two characters wide to keep blocks roughly square.

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
