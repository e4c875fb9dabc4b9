//! Turn order and move installation.
//!
//! `Game` is the boundary the front end, the search and external policies
//! share: it hands out the current board, installs whatever board a player
//! chose, and flips the turn.

use tracing::debug;

use crate::actions::{self, Action, ActionError};
use crate::{board::Board, types::Color};

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    moves_played: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Opening position, RED to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::Red)
    }

    pub fn from_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            moves_played: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owned snapshot of the current position.
    pub fn current_board(&self) -> Board {
        self.board.clone()
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Installs a board chosen by the search or a policy and passes the turn.
    pub fn apply_chosen_board(&mut self, board: Board) {
        self.board = board;
        self.moves_played += 1;
        self.change_turn();
    }

    /// Plays `action` for the side to move. The game is unchanged on error.
    pub fn apply_action(&mut self, action: Action) -> Result<(), ActionError> {
        let next = actions::apply_action(&self.board, action, self.turn)?;
        debug!(%action, color = %self.turn, "action applied");
        self.apply_chosen_board(next);
        Ok(())
    }

    pub fn change_turn(&mut self) {
        self.turn = self.turn.other();
        debug!(turn = %self.turn, moves = self.moves_played, "turn changed");
    }

    /// The winner, if the side to move has no pieces or no legal moves left.
    pub fn winner(&self) -> Option<Color> {
        self.board.winner_to_move(self.turn)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
