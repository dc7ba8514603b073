//! Engine crate - the tick-driven state machine and its driver helpers.
//!
//! [`Engine`] sequences spawn, gravity, lock and line clears on top of
//! `blockfall_core::GameState`, and exposes the player commands. It never
//! reads the clock: drivers call [`Engine::tick`] on their own schedule,
//! typically paced by a [`GravityClock`].
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{Engine, EngineConfig, TickOutcome};
//! use blockfall_engine::core::ScriptedSource;
//! use blockfall_engine::types::Shape;
//!
//! let mut engine = Engine::new(EngineConfig::new(20, 10), ScriptedSource::repeat(Shape::O)).unwrap();
//! assert_eq!(engine.tick(), TickOutcome::Spawned(Shape::O));
//! engine.move_left();
//! engine.hard_drop();
//! assert_eq!(engine.tick(), TickOutcome::Locked(Shape::O));
//! ```

pub mod clock;
pub mod config;
pub mod engine;
pub mod shared;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use clock::GravityClock;
pub use config::{ConfigError, EngineConfig, HardDropPolicy};
pub use engine::{Engine, TickOutcome};
pub use shared::SharedEngine;
