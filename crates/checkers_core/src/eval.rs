use crate::{board::Board, types::*};

/// Value of an uncrowned piece; a king counts double.
pub const MAN_VALUE: i32 = 1;
pub const KING_VALUE: i32 = 2;

/// Material score from WHITE's point of view.
///
/// Positive favors WHITE, negative favors RED. The search maximizes for WHITE,
/// so this sign convention must not change.
pub fn evaluate(board: &Board) -> i32 {
    material(board, Color::White) - material(board, Color::Red)
}

fn material(board: &Board, color: Color) -> i32 {
    let kings = board.kings(color) as i32;
    let men = board.pieces_left(color) as i32 - kings;
    men * MAN_VALUE + kings * KING_VALUE
}
