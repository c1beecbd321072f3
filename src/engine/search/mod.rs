//! Search: fixed-depth negamax with alpha-beta pruning.

mod alphabeta;
mod ordering;
mod report;
mod searcher;
mod types;

pub use report::format_score;
pub use searcher::Searcher;
pub use types::{
    CandidateMove, SearchConfig, SearchOutcome, SearchStats, DEFAULT_DEPTH, DRAW_SCORE, MATE_SCORE,
    MAX_MATE_PLY,
};
