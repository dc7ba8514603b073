//! Engine configuration.
//!
//! Loaded from JSON or built in code, then validated before an engine accepts
//! it. Unknown fields are rejected; missing fields take the defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_TICK_MS, MAX_DIMENSION, MIN_COLS, MIN_ROWS};

/// When a hard-dropped piece becomes part of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardDropPolicy {
    /// Drop only; the next tick's failed gravity step locks the piece
    #[default]
    LockOnNextTick,
    /// Drop and lock in the same call
    LockImmediately,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board {rows}x{cols} is too small (minimum {min_rows} rows x {min_cols} columns)")]
    BoardTooSmall {
        rows: u16,
        cols: u16,
        min_rows: u16,
        min_cols: u16,
    },
    #[error("board {rows}x{cols} is too large (maximum {max} per side)")]
    BoardTooLarge { rows: u16, cols: u16, max: u16 },
    #[error("tick interval must be at least 1ms")]
    ZeroTickInterval,
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub rows: u16,
    pub cols: u16,
    /// Gravity interval; consumed by the driver's clock, not the engine
    pub tick_interval_ms: u64,
    pub hard_drop: HardDropPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_interval_ms: DEFAULT_TICK_MS,
            hard_drop: HardDropPolicy::default(),
        }
    }
}

impl EngineConfig {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn with_tick_interval_ms(mut self, ms: u64) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    pub fn with_hard_drop(mut self, policy: HardDropPolicy) -> Self {
        self.hard_drop = policy;
        self
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < MIN_ROWS || self.cols < MIN_COLS {
            return Err(ConfigError::BoardTooSmall {
                rows: self.rows,
                cols: self.cols,
                min_rows: MIN_ROWS,
                min_cols: MIN_COLS,
            });
        }
        if self.rows > MAX_DIMENSION || self.cols > MAX_DIMENSION {
            return Err(ConfigError::BoardTooLarge {
                rows: self.rows,
                cols: self.cols,
                max: MAX_DIMENSION,
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
