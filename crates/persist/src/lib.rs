//! High-score boundary glue.
//!
//! The engine consults its high-score collaborator exactly once per session,
//! on reaching the terminal state, through the infallible
//! [`HighScores`](blockfall_core::session::HighScores) trait. Real backends
//! fail, though - a storage service can be down, a write can be rejected -
//! so this crate hosts the fallible [`HighScoreStore`] trait and the
//! [`StoreNotifier`] adapter that absorbs and logs those failures before
//! they can reach the gameplay path. A failed save never rolls back or
//! blocks the session; it has already reached its terminal state.
//!
//! Durable storage itself lives with the embedding application. The
//! in-memory stores here serve tests and hosts that keep scores for the
//! lifetime of the process only.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use blockfall_core::session::HighScores;

/// A fallible high-score backend.
pub trait HighScoreStore {
    fn high_score(&mut self, game_id: &str) -> Result<u32>;
    fn save_high_score(&mut self, game_id: &str, score: u32) -> Result<()>;
}

/// Adapter presenting a fallible store to the engine.
///
/// Backend failures are logged and dropped: a failed read reports 0, so the
/// save is still attempted for any positive final score; a failed save
/// leaves the session untouched in its terminal state.
#[derive(Debug, Clone)]
pub struct StoreNotifier<S> {
    store: S,
}

impl<S> StoreNotifier<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S: HighScoreStore> HighScores for StoreNotifier<S> {
    fn high_score(&mut self, game_id: &str) -> u32 {
        match self.store.high_score(game_id) {
            Ok(score) => score,
            Err(err) => {
                tracing::warn!(game_id, error = %err, "high score read failed");
                0
            }
        }
    }

    fn save_high_score(&mut self, game_id: &str, score: u32) {
        if let Err(err) = self.store.save_high_score(game_id, score) {
            tracing::warn!(game_id, score, error = %err, "high score save failed");
        }
    }
}

/// In-memory store, one score slot per game id.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    scores: HashMap<String, u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HighScoreStore for MemoryStore {
    fn high_score(&mut self, game_id: &str) -> Result<u32> {
        Ok(self.scores.get(game_id).copied().unwrap_or(0))
    }

    fn save_high_score(&mut self, game_id: &str, score: u32) -> Result<()> {
        self.scores.insert(game_id.to_string(), score);
        Ok(())
    }
}

/// Cloneable handle over a shared [`MemoryStore`], so a caller can keep
/// reading scores after handing a clone to a session.
#[derive(Debug, Clone, Default)]
pub struct SharedMemoryStore {
    inner: Arc<Mutex<MemoryStore>>,
}

impl SharedMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HighScoreStore for SharedMemoryStore {
    fn high_score(&mut self, game_id: &str) -> Result<u32> {
        self.inner
            .lock()
            .map_err(|_| anyhow!("high score store lock poisoned"))?
            .high_score(game_id)
    }

    fn save_high_score(&mut self, game_id: &str, score: u32) -> Result<()> {
        self.inner
            .lock()
            .map_err(|_| anyhow!("high score store lock poisoned"))?
            .save_high_score(game_id, score)
    }
}
