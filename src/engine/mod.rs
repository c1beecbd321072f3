//! Engine components
//!
//! - Membership functions squashing raw features into bounded scores
//! - Feature extraction from side occupancy bitboards
//! - Cached heuristic evaluation
//! - Fixed-depth alpha-beta search

pub mod cache;
pub mod eval;
pub mod features;
pub mod membership;
pub mod search;

pub use cache::{EvalCache, EvalStats, SideScores};
pub use eval::{EvalConfig, Evaluator, Heuristic, HeuristicParams};
pub use features::{DevelopmentMode, SideFeatures};
pub use membership::{ExpMode, Membership};
pub use search::{CandidateMove, SearchConfig, SearchOutcome, SearchStats, Searcher};
