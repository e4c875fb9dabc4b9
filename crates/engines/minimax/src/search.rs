//! Minimax search with alpha-beta pruning

use std::cmp::Reverse;

use checkers_core::{successors, Board, Color};

/// Side whose turn it is at a node. WHITE is always the maximizer.
fn side_to_move(maximizing: bool) -> Color {
    if maximizing {
        Color::White
    } else {
        Color::Red
    }
}

/// Searches `board` to `depth` plies and returns the best score with the
/// successor board that achieves it.
///
/// # Arguments
/// * `board` - The position to search
/// * `depth` - Remaining depth in plies
/// * `maximizing` - True when WHITE is to move
/// * `alpha`, `beta` - Current search window
/// * `nodes` - Counter for nodes visited (for statistics)
///
/// # Returns
/// `(score, board)`. At a leaf (depth 0 or a decided game) the board itself
/// is returned with its static evaluation.
///
/// Among equally scored successors the last one examined wins.
pub fn minimax(
    board: &Board,
    depth: u8,
    maximizing: bool,
    alpha: i32,
    beta: i32,
    nodes: &mut u64,
) -> (i32, Board) {
    search(board, depth, maximizing, alpha, beta, true, nodes)
}

/// Entry point with a full window.
pub fn minimax_alpha_beta(board: &Board, depth: u8, maximizing: bool) -> (i32, Board) {
    let mut nodes = 0;
    minimax(board, depth, maximizing, i32::MIN, i32::MAX, &mut nodes)
}

/// Plain minimax without cutoffs. Same scores as [`minimax_alpha_beta`],
/// only slower; kept for cross-checking the pruned search.
pub fn minimax_exhaustive(board: &Board, depth: u8, maximizing: bool) -> (i32, Board) {
    let mut nodes = 0;
    search(board, depth, maximizing, i32::MIN, i32::MAX, false, &mut nodes)
}

/// Successor boards for the side to move, best-looking first.
///
/// The sort is stable, so equal evaluations keep generation order.
pub fn ordered_successors(board: &Board, maximizing: bool) -> Vec<Board> {
    let mut children: Vec<Board> = successors(board, side_to_move(maximizing))
        .into_iter()
        .map(|(_, next)| next)
        .collect();
    if maximizing {
        children.sort_by_key(|b| Reverse(b.evaluate()));
    } else {
        children.sort_by_key(|b| b.evaluate());
    }
    children
}

fn search(
    board: &Board,
    depth: u8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    prune: bool,
    nodes: &mut u64,
) -> (i32, Board) {
    *nodes += 1;

    if depth == 0 || board.winner_to_move(side_to_move(maximizing)).is_some() {
        return (board.evaluate(), board.clone());
    }

    let mut best_board = None;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for child in ordered_successors(board, maximizing) {
        let (score, _) = search(&child, depth - 1, !maximizing, alpha, beta, prune, nodes);

        if maximizing {
            if score >= best {
                best = score;
                best_board = Some(child);
            }
            alpha = alpha.max(score);
        } else {
            if score <= best {
                best = score;
                best_board = Some(child);
            }
            beta = beta.min(score);
        }

        if prune && beta <= alpha {
            break;
        }
    }

    match best_board {
        Some(b) => (best, b),
        None => (board.evaluate(), board.clone()),
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
