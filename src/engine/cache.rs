//! Evaluation cache
//!
//! Memoizes heuristic totals by position fingerprint for the lifetime of one
//! search. Entries are never invalidated mid-search; the owner clears the whole
//! table before the next one.

use std::collections::HashMap;

use shakmaty::Color;

/// Heuristic totals for both colours of one position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SideScores {
    pub white: f64,
    pub black: f64,
}

impl SideScores {
    pub fn get(&self, side: Color) -> f64 {
        match side {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Own total minus opponent total.
    pub fn relative_to(&self, side: Color) -> f64 {
        self.get(side) - self.get(!side)
    }
}

/// Probe counters since the last clear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalStats {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug, Default)]
pub struct EvalCache {
    entries: HashMap<u64, SideScores>,
    stats: EvalStats,
}

impl EvalCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a fingerprint, counting the hit or miss.
    pub fn probe(&mut self, key: u64) -> Option<SideScores> {
        match self.entries.get(&key) {
            Some(&scores) => {
                self.stats.hits += 1;
                Some(scores)
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Look up a fingerprint without touching the counters.
    pub fn peek(&self, key: u64) -> Option<SideScores> {
        self.entries.get(&key).copied()
    }

    pub fn store(&mut self, key: u64, scores: SideScores) {
        self.entries.insert(key, scores);
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = EvalStats::default();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> EvalStats {
        self.stats
    }
}
