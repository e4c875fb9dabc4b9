pub mod actions;
pub mod board;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use actions::*;
pub use board::*;
pub use eval::evaluate;
pub use game::*;
pub use movegen::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Engine trait — implemented by every player (minimax, random, etc.)
// =============================================================================

/// Search limits handed to an engine for one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum search depth in plies
    pub depth: u8,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self { depth }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(3)
    }
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The board after the chosen move (None if no legal moves)
    pub best_board: Option<Board>,
    /// Evaluation of the chosen line, positive favoring WHITE
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

/// Trait that all checkers engines must implement.
///
/// Engines receive a board and the color they play, and answer with the
/// board they want installed next.
pub trait Engine: Send {
    fn search(&mut self, board: &Board, color: Color, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name for match reports
    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "ML-checkers"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
