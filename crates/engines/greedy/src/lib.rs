//! Greedy Move Selector
//!
//! Scores every legal move one ply deep and plays one of the best few at
//! random. There is no lookahead: the opponent's reply is never considered.
//! The random pick among the top moves keeps computer games from repeating.

mod eval;

use arcade_chess::{Board, Color, Move, MoveSelector, legal_moves};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::trace;

pub use eval::{capture_bonus, center_bonus, score_move};


/// Number of top-scoring moves the random pick is drawn from.
pub const DEFAULT_TOP_MOVES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreedyConfig {
    pub top_moves: usize,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            top_moves: DEFAULT_TOP_MOVES,
        }
    }
}

/// A legal move together with its heuristic score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: f64,
}

/// All legal moves for `side`, best first. Equal scores keep generation order.
pub fn ranked_moves(board: &Board, side: Color) -> Vec<ScoredMove> {
    let mut scored: Vec<ScoredMove> = legal_moves(board, side)
        .into_iter()
        .map(|mv| ScoredMove {
            mv,
            score: score_move(board, mv),
        })
        .collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

/// Pick a move for `side`: uniformly at random among the `top_moves`
/// highest-scoring legal moves. None when `side` has no legal move.
pub fn select_computer_move<R: Rng + ?Sized>(
    board: &Board,
    side: Color,
    top_moves: usize,
    rng: &mut R,
) -> Option<Move> {
    let ranked = ranked_moves(board, side);
    let width = top_moves.max(1).min(ranked.len());
    let picked = ranked[..width].choose(rng)?;
    trace!(
        candidates = ranked.len(),
        best = ranked[0].score,
        chosen = picked.score,
        "greedy pick {}",
        picked.mv
    );
    Some(picked.mv)
}

/// Computer player built on [`select_computer_move`].
///
/// The RNG is injected so tests and self-play runs can be reproduced from a
/// seed.
#[derive(Debug, Clone)]
pub struct GreedyEngine<R = StdRng> {
    config: GreedyConfig,
    rng: R,
}

impl GreedyEngine<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> GreedyEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            config: GreedyConfig::default(),
            rng,
        }
    }

    pub fn with_config(mut self, config: GreedyConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &GreedyConfig {
        &self.config
    }
}

impl<R: Rng> MoveSelector for GreedyEngine<R> {
    fn select_move(&mut self, board: &Board, side: Color) -> Option<Move> {
        select_computer_move(board, side, self.config.top_moves, &mut self.rng)
    }

    fn name(&self) -> &str {
        "Greedy v1.0"
    }
}
