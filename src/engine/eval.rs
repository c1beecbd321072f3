//! Position evaluation
//!
//! A position is scored as the sum of independent named heuristics, each one a
//! raw feature pushed through a membership function and scaled by a weight. The
//! score handed to the search is always relative: own total minus opponent total,
//! so `evaluate(p, White) == -evaluate(p, Black)` holds exactly and negamax can
//! flip signs without caring whose turn it is.
//!
//! Totals for both colours are memoized per fingerprint in an [`EvalCache`].

use shakmaty::Color;
use tracing::trace;

use super::cache::{EvalCache, EvalStats, SideScores};
use super::features::{self, DevelopmentMode, MAX_SIDE_MATERIAL};
use super::membership::{ExpMode, Membership};
use crate::game::GameState;

/// One named scorer. Returns an already weighted, bounded score for `side`.
pub trait Heuristic<P: GameState> {
    fn name(&self) -> &str;
    fn score(&self, pos: &P, side: Color) -> f64;
}

/// Membership shape plus the weight of its output in the total.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeuristicParams {
    pub membership: Membership,
    pub weight: f64,
}

impl HeuristicParams {
    pub const fn new(membership: Membership, weight: f64) -> Self {
        HeuristicParams { membership, weight }
    }

    #[inline]
    pub fn map(&self, raw: f64, exp: ExpMode) -> f64 {
        self.membership.apply(raw, exp) * self.weight
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EvalConfig {
    pub center: HeuristicParams,
    pub development: HeuristicParams,
    pub material: HeuristicParams,
    pub development_mode: DevelopmentMode,
    pub exp_mode: ExpMode,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            center: HeuristicParams::new(Membership::sigmoid(1.0, 10.0), 1.0),
            development: HeuristicParams::new(Membership::sigmoid(1.0, 4.0), 1.0),
            // Centered on half of a full army so 0 and 3900 land near 0 and 1.
            material: HeuristicParams::new(
                Membership::sigmoid(0.002, MAX_SIDE_MATERIAL as f64 / 2.0),
                10.0,
            ),
            development_mode: DevelopmentMode::Complement,
            exp_mode: ExpMode::Precise,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CenterControl {
    pub params: HeuristicParams,
    pub exp: ExpMode,
}

impl<P: GameState> Heuristic<P> for CenterControl {
    fn name(&self) -> &str {
        "center_control"
    }

    fn score(&self, pos: &P, side: Color) -> f64 {
        self.params
            .map(features::center_control(pos, side) as f64, self.exp)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Development {
    pub params: HeuristicParams,
    pub mode: DevelopmentMode,
    pub exp: ExpMode,
}

impl<P: GameState> Heuristic<P> for Development {
    fn name(&self) -> &str {
        "development"
    }

    fn score(&self, pos: &P, side: Color) -> f64 {
        self.params
            .map(features::development(pos, side, self.mode) as f64, self.exp)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Material {
    pub params: HeuristicParams,
    pub exp: ExpMode,
}

impl<P: GameState> Heuristic<P> for Material {
    fn name(&self) -> &str {
        "material"
    }

    fn score(&self, pos: &P, side: Color) -> f64 {
        self.params
            .map(features::material(pos, side) as f64, self.exp)
    }
}

pub struct Evaluator<P: GameState> {
    heuristics: Vec<Box<dyn Heuristic<P>>>,
    cache: EvalCache,
}

impl<P: GameState> Evaluator<P> {
    /// Center control, development and material with default parameters.
    pub fn new() -> Self {
        Self::with_config(&EvalConfig::default())
    }

    pub fn with_config(config: &EvalConfig) -> Self {
        let exp = config.exp_mode;
        let heuristics: Vec<Box<dyn Heuristic<P>>> = vec![
            Box::new(CenterControl {
                params: config.center,
                exp,
            }),
            Box::new(Development {
                params: config.development,
                mode: config.development_mode,
                exp,
            }),
            Box::new(Material {
                params: config.material,
                exp,
            }),
        ];
        Self::with_heuristics(heuristics)
    }

    /// Evaluator over an explicit, ordered set of heuristics.
    pub fn with_heuristics(heuristics: Vec<Box<dyn Heuristic<P>>>) -> Self {
        Evaluator {
            heuristics,
            cache: EvalCache::new(),
        }
    }

    pub fn register(&mut self, heuristic: Box<dyn Heuristic<P>>) {
        self.heuristics.push(heuristic);
    }

    pub fn heuristic_names(&self) -> Vec<&str> {
        self.heuristics.iter().map(|h| h.name()).collect()
    }

    /// Uncached total of all heuristics for one side.
    pub fn side_total(&self, pos: &P, side: Color) -> f64 {
        self.heuristics.iter().map(|h| h.score(pos, side)).sum()
    }

    /// Totals for both colours, computed at most once per fingerprint between clears.
    pub fn side_scores(&mut self, pos: &P) -> SideScores {
        let key = pos.fingerprint();
        if let Some(scores) = self.cache.probe(key) {
            return scores;
        }
        let scores = SideScores {
            white: self.side_total(pos, Color::White),
            black: self.side_total(pos, Color::Black),
        };
        self.cache.store(key, scores);
        scores
    }

    /// Totals for both colours without storing them or counting a hit or miss.
    pub fn peek_side_scores(&self, pos: &P) -> SideScores {
        self.cache.peek(pos.fingerprint()).unwrap_or_else(|| SideScores {
            white: self.side_total(pos, Color::White),
            black: self.side_total(pos, Color::Black),
        })
    }

    /// Score of `pos` for `perspective`: own total minus opponent total.
    pub fn evaluate(&mut self, pos: &P, perspective: Color) -> f64 {
        self.side_scores(pos).relative_to(perspective)
    }

    pub fn clear_cache(&mut self) {
        trace!(entries = self.cache.len(), "clearing evaluation cache");
        self.cache.clear();
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn stats(&self) -> EvalStats {
        self.cache.stats()
    }
}

impl<P: GameState> Default for Evaluator<P> {
    fn default() -> Self {
        Self::new()
    }
}
