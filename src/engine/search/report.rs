//! Score formatting and search summaries.

use std::fmt::Debug;

use tracing::info;

use super::types::{SearchOutcome, MATE_SCORE, MAX_MATE_PLY};

/// `mate N` (negative when being mated) for mate scores, `eval X` otherwise.
pub fn format_score(score: f64) -> String {
    let distance = MATE_SCORE - score.abs();
    if (0.0..=MAX_MATE_PLY as f64).contains(&distance) {
        let plies = distance.round() as i64;
        let moves = (plies + 1) / 2;
        if score > 0.0 {
            format!("mate {}", moves)
        } else {
            format!("mate -{}", moves)
        }
    } else {
        format!("eval {:.4}", score)
    }
}

pub(super) fn log_outcome<M: Debug>(outcome: &SearchOutcome<M>) {
    let stats = &outcome.stats;
    let elapsed_ms = outcome.elapsed.as_millis() as u64;
    info!(
        depth = outcome.depth,
        nodes = stats.nodes,
        leaves = stats.leaves,
        cutoffs = stats.cutoffs,
        cache_hits = stats.cache_hits,
        cache_misses = stats.cache_misses,
        candidates = outcome.candidates.len(),
        elapsed_ms,
        best = ?outcome.best_move,
        score = %format_score(outcome.score),
        "search complete"
    );
}
