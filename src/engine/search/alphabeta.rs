//! Negamax with alpha-beta pruning.

use crate::error::EngineResult;
use crate::game::GameState;

use super::ordering::order_moves;
use super::searcher::Searcher;
use super::types::{DRAW_SCORE, MATE_SCORE};

impl<P: GameState> Searcher<P> {
    /// Value of `pos` for the side to move, searched `depth` more plies.
    ///
    /// Fail-soft: the returned score may lie outside `[alpha, beta]`. Leaves are
    /// scored for the side to move; the sign only changes through negation here.
    pub(super) fn negamax(
        &mut self,
        pos: &mut P,
        depth: u32,
        mut alpha: f64,
        beta: f64,
        ply: u32,
    ) -> EngineResult<f64> {
        self.stats.nodes += 1;

        if depth == 0 {
            self.stats.leaves += 1;
            let side = pos.turn();
            return Ok(self.evaluator.evaluate(pos, side));
        }

        let moves = pos.legal_moves();
        if moves.is_empty() {
            // Nearer mates score further from zero.
            return Ok(if pos.is_check() {
                -(MATE_SCORE - ply as f64)
            } else {
                DRAW_SCORE
            });
        }

        let mut score = f64::NEG_INFINITY;
        for mv in order_moves(pos, moves) {
            pos.make_move(&mv)?;
            let child = self.negamax(pos, depth - 1, -beta, -alpha, ply + 1);
            pos.undo_move()?;

            score = score.max(-child?);
            alpha = alpha.max(score);
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok(score)
    }
}
