//! Engine error type.

/// Errors raised by the game seam and the search driver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The root position has nothing to play (checkmate or stalemate).
    #[error("no legal moves in position")]
    NoLegalMoves,

    /// The board collaborator refused to play a move.
    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: String, reason: String },

    /// `undo_move` was called without a matching `make_move`.
    #[error("undo requested with empty move history")]
    EmptyHistory,

    /// FEN text could not be parsed or does not describe a legal setup.
    #[error("invalid fen: {0}")]
    InvalidFen(String),
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
