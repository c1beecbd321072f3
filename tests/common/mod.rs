//! Shared test fixtures: an explicit game tree implementing `GameState`, and
//! heuristics that read it or count their calls.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use fuzzy_chess::engine::Heuristic;
use fuzzy_chess::engine::search::{DRAW_SCORE, MATE_SCORE};
use fuzzy_chess::shakmaty::fen::Fen;
use fuzzy_chess::shakmaty::{Bitboard, CastlingMode, Chess, Color, Move, Role, Square};
use fuzzy_chess::{ChessGame, EngineError, EngineResult, Evaluator, GameState};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

pub fn from_fen(fen: &str) -> ChessGame {
    let f: Fen = fen.parse().unwrap();
    let pos: Chess = f.into_position(CastlingMode::Standard).unwrap();
    ChessGame::from(pos)
}

pub fn uci(mv: &Move) -> String {
    mv.to_uci(CastlingMode::Standard).to_string()
}

#[derive(Clone, Debug)]
pub struct Node {
    pub children: Vec<usize>,
    /// White-perspective leaf value.
    pub value: f64,
    pub forcing: bool,
    pub check: bool,
    pub turn: Color,
    pub key: u64,
}

/// Explicit game tree. Moves are child node ids.
#[derive(Clone, Debug)]
pub struct TreeGame {
    pub nodes: Vec<Node>,
    current: usize,
    stack: Vec<usize>,
    /// Entering this node fails, to exercise error paths.
    pub poisoned: Option<usize>,
}

impl TreeGame {
    pub fn new() -> Self {
        TreeGame {
            nodes: vec![Node {
                children: Vec::new(),
                value: 0.0,
                forcing: false,
                check: false,
                turn: Color::White,
                key: 0,
            }],
            current: 0,
            stack: Vec::new(),
            poisoned: None,
        }
    }

    pub fn root(&self) -> usize {
        0
    }

    /// Add a child of `parent` with a white-perspective value. Returns its id.
    pub fn add(&mut self, parent: usize, value: f64) -> usize {
        let id = self.nodes.len();
        let turn = !self.nodes[parent].turn;
        self.nodes.push(Node {
            children: Vec::new(),
            value,
            forcing: false,
            check: false,
            turn,
            key: id as u64,
        });
        self.nodes[parent].children.push(id);
        id
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn node(&self) -> &Node {
        &self.nodes[self.current]
    }

    /// Same tree with every child list shuffled.
    pub fn shuffled(&self, rng: &mut StdRng) -> TreeGame {
        let mut copy = self.clone();
        for node in &mut copy.nodes {
            node.children.shuffle(rng);
        }
        copy
    }

    /// Uniform random tree of `depth` plies with distinct leaf values.
    pub fn random(rng: &mut StdRng, depth: u32, max_branching: usize) -> TreeGame {
        let mut tree = TreeGame::new();
        let mut frontier = vec![tree.root()];
        let mut next_value = 0.0;
        for _ in 0..depth {
            let mut next = Vec::new();
            for parent in frontier {
                let branching = rng.gen_range(1..=max_branching);
                for _ in 0..branching {
                    // Strictly increasing base plus jitter keeps leaf values distinct.
                    next_value += 1.0;
                    let value = next_value * 1000.0 + rng.gen_range(0.0..1.0);
                    let value = if rng.gen_bool(0.5) { value } else { -value };
                    let child = tree.add(parent, value);
                    tree.nodes[child].forcing = rng.gen_bool(0.3);
                    next.push(child);
                }
            }
            frontier = next;
        }
        tree
    }

    /// Random tree with leaf values drawn from a few integers, so equal scores are common.
    pub fn random_with_ties(rng: &mut StdRng, depth: u32, max_branching: usize) -> TreeGame {
        let mut tree = TreeGame::random(rng, depth, max_branching);
        for node in &mut tree.nodes {
            node.value = rng.gen_range(-2..=2) as f64;
        }
        tree
    }

    /// Same tree with every forcing flag inverted, so the search visits moves in another order.
    pub fn flipped_forcing(&self) -> TreeGame {
        let mut copy = self.clone();
        for node in &mut copy.nodes {
            node.forcing = !node.forcing;
        }
        copy
    }
}

impl GameState for TreeGame {
    type Move = usize;

    fn legal_moves(&self) -> Vec<usize> {
        self.node().children.clone()
    }

    fn is_forcing(&self, mv: &usize) -> bool {
        self.nodes[*mv].forcing
    }

    fn make_move(&mut self, mv: &usize) -> EngineResult<()> {
        if !self.node().children.contains(mv) || self.poisoned == Some(*mv) {
            return Err(EngineError::IllegalMove {
                mv: mv.to_string(),
                reason: "rejected by tree".into(),
            });
        }
        self.stack.push(self.current);
        self.current = *mv;
        Ok(())
    }

    fn undo_move(&mut self) -> EngineResult<()> {
        self.current = self.stack.pop().ok_or(EngineError::EmptyHistory)?;
        Ok(())
    }

    fn occupancy(&self, _side: Color) -> Bitboard {
        Bitboard::EMPTY
    }

    fn role_at(&self, _square: Square) -> Option<Role> {
        None
    }

    fn fingerprint(&self) -> u64 {
        self.node().key
    }

    fn turn(&self) -> Color {
        self.node().turn
    }

    fn is_check(&self) -> bool {
        self.node().check
    }
}

/// Scores a tree node: white gets the node value, black nothing.
pub struct LeafValue;

impl Heuristic<TreeGame> for LeafValue {
    fn name(&self) -> &str {
        "leaf_value"
    }

    fn score(&self, pos: &TreeGame, side: Color) -> f64 {
        match side {
            Color::White => pos.node().value,
            Color::Black => 0.0,
        }
    }
}

pub fn tree_evaluator() -> Evaluator<TreeGame> {
    let heuristics: Vec<Box<dyn Heuristic<TreeGame>>> = vec![Box::new(LeafValue)];
    Evaluator::with_heuristics(heuristics)
}

/// Wraps a heuristic and counts how often it runs.
pub struct Counting<H> {
    pub inner: H,
    pub calls: Rc<Cell<usize>>,
}

impl<H> Counting<H> {
    pub fn new(inner: H) -> (Self, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        (
            Counting {
                inner,
                calls: Rc::clone(&calls),
            },
            calls,
        )
    }
}

impl<P: GameState, H: Heuristic<P>> Heuristic<P> for Counting<H> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn score(&self, pos: &P, side: Color) -> f64 {
        self.calls.set(self.calls.get() + 1);
        self.inner.score(pos, side)
    }
}

/// Unpruned negamax over the same evaluation, for comparison.
pub fn full_minimax<P: GameState>(pos: &mut P, eval: &mut Evaluator<P>, depth: u32, ply: u32) -> f64 {
    if depth == 0 {
        let side = pos.turn();
        return eval.evaluate(pos, side);
    }
    let moves = pos.legal_moves();
    if moves.is_empty() {
        return if pos.is_check() { -(MATE_SCORE - ply as f64) } else { DRAW_SCORE };
    }
    let mut best = f64::NEG_INFINITY;
    for mv in moves {
        pos.make_move(&mv).unwrap();
        let score = -full_minimax(pos, eval, depth - 1, ply + 1);
        pos.undo_move().unwrap();
        best = best.max(score);
    }
    best
}

/// Root move and score of an unpruned search.
pub fn full_minimax_root<P: GameState>(
    pos: &mut P,
    eval: &mut Evaluator<P>,
    depth: u32,
) -> (P::Move, f64) {
    let mut best: Option<(P::Move, f64)> = None;
    for mv in pos.legal_moves() {
        pos.make_move(&mv).unwrap();
        let score = -full_minimax(pos, eval, depth - 1, 1);
        pos.undo_move().unwrap();
        if best.as_ref().is_none_or(|(_, b)| score > *b) {
            best = Some((mv, score));
        }
    }
    best.unwrap()
}

/// Node count of a full tree walk to `depth`.
pub fn count_nodes<P: GameState>(pos: &mut P, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut total = 1;
    for mv in pos.legal_moves() {
        pos.make_move(&mv).unwrap();
        total += count_nodes(pos, depth - 1);
        pos.undo_move().unwrap();
    }
    total
}
