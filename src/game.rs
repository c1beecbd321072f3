//! Board collaborator seam.
//!
//! The search never touches board internals. It drives any type implementing
//! [`GameState`]: enumerate moves, play one, recurse, take it back. [`ChessGame`]
//! is the standard implementation on top of `shakmaty`.

use std::fmt::Debug;

use shakmaty::fen::Fen;
use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{Bitboard, CastlingMode, Chess, Color, EnPassantMode, Move, Position, Role, Square};

use crate::error::{EngineError, EngineResult};

/// A two-player position that can be searched in place.
///
/// `make_move` and `undo_move` follow strict stack discipline: every successful
/// make is matched by exactly one undo before the caller's frame returns.
pub trait GameState {
    type Move: Clone + PartialEq + Debug;

    /// All legal moves for the side to move.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Captures and promotions. Used only for move ordering.
    fn is_forcing(&self, mv: &Self::Move) -> bool;

    fn make_move(&mut self, mv: &Self::Move) -> EngineResult<()>;

    fn undo_move(&mut self) -> EngineResult<()>;

    /// Occupancy of one side, bit `i` set when square `i` holds one of its pieces.
    fn occupancy(&self, side: Color) -> Bitboard;

    fn role_at(&self, square: Square) -> Option<Role>;

    /// Hash identifying the position, side to move included.
    fn fingerprint(&self) -> u64;

    fn turn(&self) -> Color;

    fn is_check(&self) -> bool;
}

/// `shakmaty::Chess` with a history stack so moves can be taken back.
#[derive(Clone, Debug, Default)]
pub struct ChessGame {
    current: Chess,
    history: Vec<Chess>,
}

impl ChessGame {
    /// Standard starting position.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fen(fen: &str) -> EngineResult<Self> {
        let parsed = fen
            .parse::<Fen>()
            .map_err(|e| EngineError::InvalidFen(e.to_string()))?;
        let pos = parsed
            .into_position::<Chess>(CastlingMode::Standard)
            .map_err(|e| EngineError::InvalidFen(e.to_string()))?;
        Ok(Self::from(pos))
    }

    pub fn position(&self) -> &Chess {
        &self.current
    }

    /// Number of moves currently made on top of the base position.
    pub fn ply(&self) -> usize {
        self.history.len()
    }
}

impl From<Chess> for ChessGame {
    fn from(current: Chess) -> Self {
        ChessGame {
            current,
            history: Vec::new(),
        }
    }
}

impl GameState for ChessGame {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        self.current.legal_moves().to_vec()
    }

    fn is_forcing(&self, mv: &Move) -> bool {
        mv.is_capture() || mv.is_promotion()
    }

    fn make_move(&mut self, mv: &Move) -> EngineResult<()> {
        let next = self
            .current
            .clone()
            .play(mv)
            .map_err(|e| EngineError::IllegalMove {
                mv: mv.to_uci(CastlingMode::Standard).to_string(),
                reason: e.to_string(),
            })?;
        let prev = std::mem::replace(&mut self.current, next);
        self.history.push(prev);
        Ok(())
    }

    fn undo_move(&mut self) -> EngineResult<()> {
        self.current = self.history.pop().ok_or(EngineError::EmptyHistory)?;
        Ok(())
    }

    fn occupancy(&self, side: Color) -> Bitboard {
        self.current.board().by_color(side)
    }

    fn role_at(&self, square: Square) -> Option<Role> {
        self.current.board().role_at(square)
    }

    fn fingerprint(&self) -> u64 {
        let z: Zobrist64 = self.current.zobrist_hash(EnPassantMode::Legal);
        z.0
    }

    fn turn(&self) -> Color {
        self.current.turn()
    }

    fn is_check(&self) -> bool {
        self.current.is_check()
    }
}
