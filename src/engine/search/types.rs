//! Search configuration, stats, results and constants.

use std::time::Duration;

/// Search depth in plies, root move included.
pub const DEFAULT_DEPTH: u32 = 4;

/// Magnitude of a mated score. Far above anything the evaluation can return.
pub const MATE_SCORE: f64 = 10_000.0;
pub const DRAW_SCORE: f64 = 0.0;

/// Longest mate distance reported as a mate.
pub const MAX_MATE_PLY: u32 = 64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Fixed depth in plies. Zero is treated as one.
    pub depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub cutoffs: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
}

/// A root move with its search value and the heuristic totals right after it.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateMove<M> {
    pub mv: M,
    /// Exact negamax value for the side to move at the root.
    pub score: f64,
    /// Root side's heuristic total after the move.
    pub own_score: f64,
    /// Opponent's heuristic total after the move.
    pub opponent_score: f64,
}

#[derive(Clone, Debug)]
pub struct SearchOutcome<M> {
    pub best_move: M,
    pub score: f64,
    /// Every root move, best first. Equal scores keep `legal_moves` order.
    pub candidates: Vec<CandidateMove<M>>,
    pub depth: u32,
    pub stats: SearchStats,
    pub elapsed: Duration,
}
