//! High score tracking
//!
//! A single best score, persisted as decimal text under a fixed key. Read once
//! when a session starts; written only when a crash beats it.

use serde::{Deserialize, Serialize};

use crate::persistence::{self, KeyValueStore, StorageError};

/// Best whole score achieved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    best: u64,
}

impl HighScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "streetRacerHigh";

    pub fn new(best: u64) -> Self {
        Self { best }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Check if a score would replace the current best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Keep `score` if it beats the current best. Returns true if it did.
    pub fn record(&mut self, score: u64) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        true
    }

    /// Read the stored best, surfacing storage problems
    pub fn try_load(store: &dyn KeyValueStore) -> persistence::Result<Self> {
        match store.get(Self::STORAGE_KEY)? {
            Some(text) => {
                let best = text
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| StorageError::Corrupt {
                        key: Self::STORAGE_KEY.to_string(),
                        value: text.clone(),
                    })?;
                Ok(Self { best })
            }
            None => Ok(Self::default()),
        }
    }

    /// Read the stored best; missing or unreadable values count as 0
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match Self::try_load(store) {
            Ok(high) => {
                log::info!("Loaded high score {}", high.best);
                high
            }
            Err(e) => {
                log::warn!("High score unavailable, starting from 0: {}", e);
                Self::default()
            }
        }
    }

    /// Persist the best score. Failures are logged, never propagated.
    pub fn save(&self, store: &mut dyn KeyValueStore) {
        match store.set(Self::STORAGE_KEY, &self.best.to_string()) {
            Ok(()) => log::info!("High score saved ({})", self.best),
            Err(e) => log::warn!("Failed to save high score: {}", e),
        }
    }
}
