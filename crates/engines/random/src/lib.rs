//! Random Move Checkers Engine
//!
//! A simple policy that selects actions uniformly at random from all legal
//! actions. It talks to the rules only through the action interface
//! (`valid_actions` / `apply_action`), the same surface a learned policy uses.
//! Useful for:
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation

use checkers_core::{apply_action, valid_actions, Board, Color, Engine, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A checkers engine that plays random legal actions.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Deterministic engine for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, color: Color, _limits: SearchLimits) -> SearchResult {
        let actions = valid_actions(board, color);
        self.nodes = 1;

        let best_board = actions
            .choose(&mut self.rng)
            .and_then(|&action| apply_action(board, action, color).ok());

        SearchResult {
            score: best_board.as_ref().map_or(0, Board::evaluate),
            best_board,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
