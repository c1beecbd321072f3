pub mod engine;
pub mod error;
pub mod game;

pub use engine::{EvalConfig, Evaluator, SearchConfig, Searcher};
pub use error::{EngineError, EngineResult};
pub use game::{ChessGame, GameState};
pub use shakmaty;
