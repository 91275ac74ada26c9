use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

pub const DEFAULT_LEADERBOARD_CAPACITY: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: Points,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, score: Points) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Best scores per level, highest first. Storage is up to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    capacity: usize,
    levels: BTreeMap<String, Vec<LeaderboardEntry>>,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LEADERBOARD_CAPACITY)
    }
}

impl Leaderboard {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            levels: BTreeMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Adds `entry` to the board of `level`, returning its 1-based rank, or
    /// `None` when it did not make the cut. Equal scores rank in arrival order.
    pub fn record(&mut self, level: &str, entry: LeaderboardEntry) -> Option<usize> {
        let entries = self.levels.entry(level.into()).or_default();
        let position = entries.partition_point(|existing| existing.score >= entry.score);
        if position >= self.capacity {
            log::debug!("score {} did not make the {:?} leaderboard", entry.score, level);
            return None;
        }

        entries.insert(position, entry);
        entries.truncate(self.capacity);
        Some(position + 1)
    }

    pub fn record_summary(&mut self, summary: &RoundSummary) -> Option<usize> {
        self.record(&summary.level, summary.entry())
    }

    pub fn top(&self, level: &str) -> &[LeaderboardEntry] {
        self.levels.get(level).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn levels(&self) -> impl Iterator<Item = &str> {
        self.levels.keys().map(String::as_str)
    }
}
