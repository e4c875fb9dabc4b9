//! Minimax Checkers Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over material evaluation.
//! WHITE is always the maximizing side, RED the minimizing one.

mod search;

use checkers_core::{Board, Color, Engine, SearchLimits, SearchResult};
use tracing::debug;

pub use search::{minimax, minimax_alpha_beta, minimax_exhaustive, ordered_successors};

/// Checkers engine using minimax with alpha-beta pruning.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, color: Color, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        // A depth-0 search would hand back the board unchanged.
        let depth = limits.depth.max(1);

        if !board.has_moves(color) {
            return SearchResult {
                best_board: None,
                score: board.evaluate(),
                depth,
                nodes: 0,
            };
        }

        let maximizing = color == Color::White;

        // The opponent is already gone, so the search would stop at the root.
        // Still hand back a legal move, the best-looking one.
        if board.winner_to_move(color).is_some() {
            let best = ordered_successors(board, maximizing).into_iter().next();
            self.nodes = 1;
            return SearchResult {
                score: best.as_ref().map_or(board.evaluate(), Board::evaluate),
                best_board: best,
                depth,
                nodes: self.nodes,
            };
        }

        let (score, best) = minimax(
            board,
            depth,
            maximizing,
            i32::MIN,
            i32::MAX,
            &mut self.nodes,
        );
        debug!(%color, score, depth, nodes = self.nodes, "search finished");

        SearchResult {
            best_board: Some(best),
            score,
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
