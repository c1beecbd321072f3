//! Searcher: root move selection and search entry point.

use std::cmp::Ordering;
use std::time::Instant;

use tracing::debug;

use crate::engine::eval::Evaluator;
use crate::error::{EngineError, EngineResult};
use crate::game::GameState;

use super::ordering::order_indexed;
use super::report;
use super::types::{CandidateMove, SearchConfig, SearchOutcome, SearchStats};

pub struct Searcher<P: GameState> {
    pub(super) evaluator: Evaluator<P>,
    pub(super) config: SearchConfig,
    pub(super) stats: SearchStats,
}

impl<P: GameState> Searcher<P> {
    /// Default evaluator, default depth.
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default(), Evaluator::new())
    }

    pub fn with_depth(depth: u32) -> Self {
        Self::with_config(SearchConfig { depth }, Evaluator::new())
    }

    pub fn with_config(config: SearchConfig, evaluator: Evaluator<P>) -> Self {
        Searcher {
            evaluator,
            config,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.config.depth = depth;
    }

    pub fn evaluator(&self) -> &Evaluator<P> {
        &self.evaluator
    }

    pub fn evaluator_mut(&mut self) -> &mut Evaluator<P> {
        &mut self.evaluator
    }

    /// Stats of the most recent search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best move for the side to move in `pos`.
    ///
    /// `pos` is searched in place and is back in its original state on return.
    pub fn think(&mut self, pos: &mut P) -> EngineResult<P::Move> {
        self.think_ranked(pos).map(|outcome| outcome.best_move)
    }

    /// Like [`Searcher::think`], also returning every root move with its score.
    ///
    /// Each root move gets a full window, so every candidate score is exact. Equal
    /// scores go to the move listed first by `legal_moves`, whatever order the
    /// search visited them in.
    pub fn think_ranked(&mut self, pos: &mut P) -> EngineResult<SearchOutcome<P::Move>> {
        let start = Instant::now();
        self.evaluator.clear_cache();
        self.stats = SearchStats::default();

        let depth = self.config.depth.max(1);
        let root_side = pos.turn();
        let moves = pos.legal_moves();
        if moves.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }

        let mut ranked: Vec<(usize, CandidateMove<P::Move>)> = Vec::with_capacity(moves.len());
        let mut best: Option<(usize, P::Move, f64)> = None;

        for (index, mv) in order_indexed(pos, moves) {
            pos.make_move(&mv)?;
            let searched = self.negamax(pos, depth - 1, f64::NEG_INFINITY, f64::INFINITY, 1);
            let after = self.evaluator.peek_side_scores(pos);
            pos.undo_move()?;
            let score = -searched?;

            debug!(mv = ?mv, score, own = after.get(root_side), opponent = after.get(!root_side), "root move");

            let better = best.as_ref().is_none_or(|&(best_index, _, best_score)| {
                score > best_score || (score == best_score && index < best_index)
            });
            if better {
                best = Some((index, mv.clone(), score));
            }
            ranked.push((
                index,
                CandidateMove {
                    mv,
                    score,
                    own_score: after.get(root_side),
                    opponent_score: after.get(!root_side),
                },
            ));
        }

        let (_, best_move, score) = best.ok_or(EngineError::NoLegalMoves)?;
        // Same equality as the best-move test above, so 0.0 and -0.0 tie.
        ranked.sort_by(|(ia, a), (ib, b)| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then(ia.cmp(ib))
        });
        let candidates = ranked.into_iter().map(|(_, candidate)| candidate).collect();

        let eval_stats = self.evaluator.stats();
        self.stats.cache_hits = eval_stats.hits;
        self.stats.cache_misses = eval_stats.misses;

        let outcome = SearchOutcome {
            best_move,
            score,
            candidates,
            depth,
            stats: self.stats.clone(),
            elapsed: start.elapsed(),
        };
        report::log_outcome(&outcome);
        Ok(outcome)
    }
}

impl<P: GameState> Default for Searcher<P> {
    fn default() -> Self {
        Self::new()
    }
}
