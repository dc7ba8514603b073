//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the geometric rules of the game and nothing else. It has
//! **no dependencies** on timers, terminals or I/O, making it:
//!
//! - **Deterministic**: shapes come from an injected [`ShapeSource`]
//! - **Testable**: every rule is a plain function or method over values
//! - **Portable**: runs headless, in tests, or behind any driver
//!
//! # Module Structure
//!
//! - [`pieces`]: per-shape orientation tables and wall kick tables
//! - [`piece`]: a positioned, oriented shape
//! - [`board`]: runtime-sized grid with collision testing and line clearing
//! - [`game_state`]: board plus active piece, with the validity invariant
//! - [`rng`]: shape sources (seeded uniform, scripted)
//! - [`snapshot`]: serializable read-only view for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_core::types::{Phase, Shape};
//!
//! let mut state = GameState::new(20, 10);
//! assert!(state.spawn(Shape::T));
//! assert!(state.try_move(0, -1));
//! assert!(state.try_rotate(true).is_some());
//!
//! state.drop_to_floor();
//! state.lock();
//! assert_eq!(state.phase(), Phase::Spawning);
//! ```

pub mod board;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use piece::Piece;
pub use pieces::{get_shape, wall_kicks};
pub use rng::{ScriptedSource, ShapeSource, SimpleRng, UniformSource};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
