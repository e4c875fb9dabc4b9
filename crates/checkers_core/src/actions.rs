//! Action interface for external policies.
//!
//! A policy (random, learned, human) sees the game as a list of
//! `(from_row, from_col, to_row, to_col)` actions and a feature encoding of
//! the board. Applying an action always yields a fresh board.

use thiserror::Error;

use crate::{board::Board, types::*};

/// Planes per square: empty, red man, red king, white man, white king.
pub const PLANES: usize = 5;
pub const NUM_FEATURES: usize = ROWS * COLS * PLANES;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Action {
    pub from_row: usize,
    pub from_col: usize,
    pub to_row: usize,
    pub to_col: usize,
}

impl Action {
    pub fn new(from_row: usize, from_col: usize, to_row: usize, to_col: usize) -> Self {
        Self {
            from_row,
            from_col,
            to_row,
            to_col,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({},{})->({},{})",
            self.from_row, self.from_col, self.to_row, self.to_col
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("no piece at ({row}, {col})")]
    NoPiece { row: usize, col: usize },
    #[error("piece at ({row}, {col}) belongs to {owner}, not {mover}")]
    WrongColor {
        row: usize,
        col: usize,
        owner: Color,
        mover: Color,
    },
    #[error("{0} is not a legal move")]
    IllegalDestination(Action),
}

/// Every legal action for `color`, pieces in row-major order and destinations
/// in generation order.
pub fn valid_actions(board: &Board, color: Color) -> Vec<Action> {
    let mut out = Vec::new();
    for piece in board.get_all_pieces(color) {
        for (row, col) in board.get_valid_moves(piece).destinations() {
            out.push(Action::new(piece.row, piece.col, row, col));
        }
    }
    out
}

/// Every board reachable by one move of `color`, in [`valid_actions`] order.
pub fn successors(board: &Board, color: Color) -> Vec<(Action, Board)> {
    let mut out = Vec::new();
    for piece in board.get_all_pieces(color) {
        for ((row, col), captured) in board.get_valid_moves(piece) {
            let mut next = board.clone();
            next.move_piece(piece, row, col);
            next.remove(&captured);
            out.push((Action::new(piece.row, piece.col, row, col), next));
        }
    }
    out
}

/// Applies `action` for `color` to a copy of `board`.
pub fn apply_action(board: &Board, action: Action, color: Color) -> Result<Board, ActionError> {
    let (row, col) = (action.from_row, action.from_col);
    if row >= ROWS || col >= COLS {
        return Err(ActionError::NoPiece { row, col });
    }
    let piece = board
        .get_piece(row, col)
        .ok_or(ActionError::NoPiece { row, col })?;
    if piece.color != color {
        return Err(ActionError::WrongColor {
            row,
            col,
            owner: piece.color,
            mover: color,
        });
    }

    let moves = board.get_valid_moves(piece);
    let captured = moves
        .get(action.to_row, action.to_col)
        .ok_or(ActionError::IllegalDestination(action))?;

    let mut next = board.clone();
    next.move_piece(piece, action.to_row, action.to_col);
    next.remove(captured);
    Ok(next)
}

/// One-hot encoding of the board, square by square in row-major order.
pub fn encode_board(board: &Board) -> Vec<f32> {
    let mut features = vec![0.0f32; NUM_FEATURES];
    for row in 0..ROWS {
        for col in 0..COLS {
            let plane = match board.get_piece(row, col) {
                None => 0,
                Some(p) => match (p.color, p.king) {
                    (Color::Red, false) => 1,
                    (Color::Red, true) => 2,
                    (Color::White, false) => 3,
                    (Color::White, true) => 4,
                },
            };
            features[(row * COLS + col) * PLANES + plane] = 1.0;
        }
    }
    features
}

#[cfg(test)]
#[path = "actions_tests.rs"]
mod actions_tests;
