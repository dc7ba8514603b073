//! Thread-shareable engine handle.
//!
//! Use this when ticks and input arrive from different threads (a timer
//! thread plus an input thread, say). Every call takes the lock for its whole
//! duration, so engine operations never interleave.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::GameSnapshot;
use crate::engine::{Engine, TickOutcome};
use crate::types::Command;

#[derive(Debug, Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<Engine>>,
}

impl SharedEngine {
    pub fn new(engine: Engine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    // Engine operations validate before writing, so a poisoned state is still consistent.
    fn lock(&self) -> MutexGuard<'_, Engine> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn tick(&self) -> TickOutcome {
        self.lock().tick()
    }

    pub fn apply(&self, command: Command) -> bool {
        self.lock().apply(command)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.lock().snapshot()
    }

    pub fn revision(&self) -> u64 {
        self.lock().revision()
    }

    /// Run `f` with exclusive access to the engine
    pub fn with<R>(&self, f: impl FnOnce(&mut Engine) -> R) -> R {
        f(&mut self.lock())
    }
}
