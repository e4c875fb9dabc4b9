use crate::{actions::successors, board::Board, types::Color};

/// Counts leaf boards `depth` plies below `board`, `to_move` moving first.
/// Multi-jump chains count as a single ply per destination.
pub fn perft(board: &Board, to_move: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    successors(board, to_move)
        .into_iter()
        .map(|(_, next)| perft(&next, to_move.other(), depth - 1))
        .sum()
}
