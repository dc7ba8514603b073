//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`] values. Timing,
//! repeat and gesture handling are left to the terminal itself: one key press
//! is one command.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit, should_restart};
