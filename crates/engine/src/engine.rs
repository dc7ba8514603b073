//! The game state machine.
//!
//! Each [`Engine::tick`] performs at most one significant action, in this
//! order of precedence:
//!
//! 1. clear full lines, if there are any
//! 2. spawn a piece, if none is falling (or end the game if it collides)
//! 3. move the falling piece down one row
//! 4. lock the piece when it cannot move down
//!
//! Player commands run between ticks and only act on a falling piece while
//! the game is neither paused nor over. Nothing here ever fails: a rejected
//! command returns `false` and leaves the state untouched.

use std::fmt;

use tracing::{debug, info, trace};

use crate::config::{ConfigError, EngineConfig, HardDropPolicy};
use crate::core::{Board, GameSnapshot, GameState, Piece, ShapeSource, UniformSource};
use crate::types::{Command, Coord, Phase, Shape};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or game over; nothing happened
    Idle,
    /// Full rows were removed; nothing else happened this tick
    LinesCleared(usize),
    /// A new piece of this shape is falling
    Spawned(Shape),
    /// The spawned shape collided with the stack; the game is over
    GameOver(Shape),
    /// Gravity moved the active piece down one row
    Fell,
    /// The active piece could not fall and was written into the board
    Locked(Shape),
}

pub struct Engine {
    state: GameState,
    source: Box<dyn ShapeSource>,
    config: EngineConfig,
    paused: bool,
    revision: u64,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("paused", &self.paused)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Create an engine on an empty board
    pub fn new(
        config: EngineConfig,
        source: impl ShapeSource + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(config.rows, config.cols),
            source: Box::new(source),
            config,
            paused: false,
            revision: 0,
        })
    }

    /// Create an engine drawing shapes uniformly from a seeded generator
    pub fn with_seed(config: EngineConfig, seed: u32) -> Result<Self, ConfigError> {
        Self::new(config, UniformSource::new(seed))
    }

    /// Create an engine on a prepared board.
    ///
    /// The board's dimensions replace the configured ones.
    pub fn with_board(
        config: EngineConfig,
        board: Board,
        source: impl ShapeSource + 'static,
    ) -> Result<Self, ConfigError> {
        let config = EngineConfig {
            rows: board.rows(),
            cols: board.cols(),
            ..config
        };
        config.validate()?;
        Ok(Self {
            state: GameState::with_board(board),
            source: Box::new(source),
            config,
            paused: false,
            revision: 0,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn rows(&self) -> u16 {
        self.state.board().rows()
    }

    pub fn cols(&self) -> u16 {
        self.state.board().cols()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn is_game_over(&self) -> bool {
        !self.state.is_running()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Changes whenever anything observable changes
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn active(&self) -> Option<Piece> {
        self.state.active()
    }

    pub fn active_cells(&self) -> Option<[Coord; 4]> {
        self.state.active_cells()
    }

    /// Resting position of the active piece if dropped straight down
    pub fn ghost(&self) -> Option<Piece> {
        self.state.ghost()
    }

    pub fn ghost_cells(&self) -> Option<[Coord; 4]> {
        self.state.ghost_cells()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
        out.paused = self.paused;
        out.revision = self.revision;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// True while player commands can act on a falling piece
    fn playable(&self) -> bool {
        !self.paused && self.state.phase() == Phase::Falling
    }

    /// Advance the game by one step. See the module docs for the order.
    pub fn tick(&mut self) -> TickOutcome {
        if self.paused || !self.state.is_running() {
            return TickOutcome::Idle;
        }

        let cleared = self.state.clear_full_lines();
        if cleared > 0 {
            debug!(lines = cleared, "cleared lines");
            self.bump();
            return TickOutcome::LinesCleared(cleared);
        }

        let outcome = match self.state.active() {
            None => {
                let shape = self.source.next_shape();
                if self.state.spawn(shape) {
                    debug!(shape = shape.as_str(), "spawned piece");
                    TickOutcome::Spawned(shape)
                } else {
                    info!(
                        shape = shape.as_str(),
                        filled = self.state.board().filled_count(),
                        "spawn blocked, game over"
                    );
                    TickOutcome::GameOver(shape)
                }
            }
            Some(_) if self.state.try_move(-1, 0) => TickOutcome::Fell,
            Some(piece) => {
                self.state.lock();
                debug!(
                    shape = piece.shape.as_str(),
                    row = piece.origin.row,
                    col = piece.origin.col,
                    "locked piece"
                );
                TickOutcome::Locked(piece.shape)
            }
        };

        self.bump();
        outcome
    }

    fn try_move(&mut self, d_row: i32, d_col: i32) -> bool {
        if !self.playable() {
            return false;
        }
        let moved = self.state.try_move(d_row, d_col);
        if moved {
            self.bump();
        }
        moved
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(0, -1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(0, 1)
    }

    pub fn move_down(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    /// Same as [`Engine::move_down`]
    pub fn soft_drop(&mut self) -> bool {
        self.move_down()
    }

    /// Move the active piece down until it rests. Returns rows descended.
    ///
    /// Under [`HardDropPolicy::LockOnNextTick`] the piece stays active and
    /// the next tick locks it; under [`HardDropPolicy::LockImmediately`] it
    /// is locked before returning.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.playable() {
            return 0;
        }

        let distance = self.state.drop_to_floor();
        if self.config.hard_drop == HardDropPolicy::LockImmediately {
            if let Some(piece) = self.state.lock() {
                debug!(shape = piece.shape.as_str(), distance, "hard drop locked piece");
            }
        }

        if distance > 0 || self.config.hard_drop == HardDropPolicy::LockImmediately {
            self.bump();
        }
        distance
    }

    /// Rotate with wall kicks. Returns whether the rotation was adopted.
    pub fn rotate(&mut self, clockwise: bool) -> bool {
        if !self.playable() {
            return false;
        }

        match self.state.try_rotate(clockwise) {
            Some(kick) => {
                if kick != (0, 0) {
                    trace!(?kick, clockwise, "rotation kicked");
                }
                self.bump();
                true
            }
            None => {
                trace!(clockwise, "rotation rejected");
                false
            }
        }
    }

    /// Stop ticks and commands. Returns false if already paused or over.
    pub fn pause(&mut self) -> bool {
        if self.paused || !self.state.is_running() {
            return false;
        }
        self.paused = true;
        self.bump();
        true
    }

    /// Returns false if not paused.
    pub fn resume(&mut self) -> bool {
        if !self.paused {
            return false;
        }
        self.paused = false;
        self.bump();
        true
    }

    /// Apply a command. Returns whether it changed anything.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::SoftDrop => self.soft_drop(),
            Command::HardDrop => {
                let before = self.revision;
                self.hard_drop();
                self.revision != before
            }
            Command::RotateCw => self.rotate(true),
            Command::RotateCcw => self.rotate(false),
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::TogglePause => {
                if self.paused {
                    self.resume()
                } else {
                    self.pause()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedSource;

    fn engine(rows: u16, cols: u16, shapes: &[Shape]) -> Engine {
        Engine::new(
            EngineConfig::new(rows, cols),
            ScriptedSource::new(shapes.to_vec()),
        )
        .unwrap()
    }

    #[test]
    fn test_first_tick_spawns() {
        let mut engine = engine(20, 10, &[Shape::T]);
        assert_eq!(engine.phase(), Phase::Spawning);
        assert_eq!(engine.tick(), TickOutcome::Spawned(Shape::T));
        assert_eq!(engine.phase(), Phase::Falling);
        assert_eq!(engine.tick(), TickOutcome::Fell);
    }

    #[test]
    fn test_piece_falls_then_locks() {
        let mut engine = engine(4, 4, &[Shape::O]);
        assert_eq!(engine.tick(), TickOutcome::Spawned(Shape::O));
        assert_eq!(engine.tick(), TickOutcome::Fell);
        assert_eq!(engine.tick(), TickOutcome::Fell);
        assert_eq!(engine.tick(), TickOutcome::Locked(Shape::O));
        assert_eq!(engine.phase(), Phase::Spawning);
        assert_eq!(engine.board().filled_count(), 4);
    }

    #[test]
    fn test_commands_ignored_without_active_piece() {
        let mut engine = engine(20, 10, &[Shape::I]);
        let revision = engine.revision();
        assert!(!engine.move_left());
        assert!(!engine.rotate(true));
        assert_eq!(engine.hard_drop(), 0);
        assert_eq!(engine.revision(), revision);
    }

    #[test]
    fn test_pause_blocks_ticks_and_commands() {
        let mut engine = engine(20, 10, &[Shape::T]);
        engine.tick();
        assert!(engine.pause());
        assert!(!engine.pause());

        let before = engine.active();
        assert_eq!(engine.tick(), TickOutcome::Idle);
        assert!(!engine.move_right());
        assert_eq!(engine.active(), before);

        assert!(engine.resume());
        assert!(!engine.resume());
        assert!(engine.move_right());
    }

    #[test]
    fn test_toggle_pause_command() {
        let mut engine = engine(20, 10, &[Shape::T]);
        assert!(engine.apply(Command::TogglePause));
        assert!(engine.is_paused());
        assert!(engine.apply(Command::TogglePause));
        assert!(!engine.is_paused());
    }

    #[test]
    fn test_hard_drop_lock_immediately() {
        let config = EngineConfig::new(20, 10).with_hard_drop(HardDropPolicy::LockImmediately);
        let mut engine = Engine::new(config, ScriptedSource::repeat(Shape::I)).unwrap();
        engine.tick();
        assert_eq!(engine.hard_drop(), 19);
        assert_eq!(engine.phase(), Phase::Spawning);
        assert_eq!(engine.board().filled_count(), 4);
        assert_eq!(engine.tick(), TickOutcome::Spawned(Shape::I));
    }

    #[test]
    fn test_revision_tracks_changes() {
        let mut engine = engine(20, 10, &[Shape::O]);
        let r0 = engine.revision();
        engine.tick();
        let r1 = engine.revision();
        assert!(r1 > r0);
        while engine.move_left() {}
        let r2 = engine.revision();
        assert!(r2 > r1);
        assert!(!engine.move_left());
        assert_eq!(engine.revision(), r2);
        assert_eq!(engine.snapshot().revision, r2);
    }

    #[test]
    fn test_with_board_takes_board_dimensions() {
        let source = ScriptedSource::repeat(Shape::L);
        let engine =
            Engine::with_board(EngineConfig::default(), Board::new(6, 5), source.clone()).unwrap();
        assert_eq!(engine.rows(), 6);
        assert_eq!(engine.cols(), 5);

        let tiny = Engine::with_board(EngineConfig::default(), Board::new(6, 3), source);
        assert!(matches!(tiny, Err(ConfigError::BoardTooSmall { .. })));
    }
}
