use rayon::prelude::*;

use checkers_core::{perft, successors, Board, Color};

/// Positions reachable from the opening within `plies`, every side to move.
fn reachable(plies: u8) -> Vec<(Board, Color)> {
    let mut frontier = vec![(Board::new(), Color::Red)];
    let mut all = frontier.clone();
    for _ in 0..plies {
        frontier = frontier
            .iter()
            .flat_map(|(b, c)| {
                successors(b, *c)
                    .into_iter()
                    .map(move |(_, next)| (next, c.other()))
            })
            .collect();
        all.extend(frontier.iter().cloned());
    }
    all
}

#[test]
fn perft_opening_shallow() {
    let b = Board::new();
    assert_eq!(perft(&b, Color::Red, 0), 1);
    assert_eq!(perft(&b, Color::Red, 1), 7);
    assert_eq!(perft(&b, Color::Red, 2), 49);
}

#[test]
fn perft_split_matches_sequential() {
    let b = Board::new();
    let depth = 5;
    let sequential = perft(&b, Color::Red, depth);
    let split: u64 = successors(&b, Color::Red)
        .par_iter()
        .map(|(_, next)| perft(next, Color::White, depth - 1))
        .sum();
    assert_eq!(sequential, split);
    assert!(sequential > 49 * 7);
}

#[test]
fn captured_sets_are_enemy_pieces_on_the_path() {
    for (board, color) in reachable(5) {
        for piece in board.get_all_pieces(color) {
            for ((row, col), captured) in board.get_valid_moves(piece) {
                let dr = row.abs_diff(piece.row);
                let dc = col.abs_diff(piece.col);
                if captured.is_empty() {
                    assert_eq!((dr, dc), (1, 1), "simple move must be one step");
                } else {
                    assert_eq!(dr % 2, 0, "jump chains land an even number of rows away");
                    assert!(dc % 2 == 0);
                }
                for victim in &captured {
                    assert_eq!(victim.color, color.other());
                    assert_eq!(board.get_piece(victim.row, victim.col), Some(*victim));
                }
            }
        }
    }
}

#[test]
fn counters_match_grid_after_play() {
    for (board, _) in reachable(4) {
        for color in [Color::Red, Color::White] {
            let pieces = board.get_all_pieces(color);
            let kings = pieces.iter().filter(|p| p.king).count();
            assert_eq!(pieces.len(), board.pieces_left(color) as usize);
            assert_eq!(kings, board.kings(color) as usize);
        }
    }
}

#[test]
fn promotion_never_reverts() {
    let mut b = Board::from_layout(
        "........
         ..r.....
         ........
         ........
         ........
         ........
         ......w.
         ........",
    );
    let man = b.get_piece(1, 2).unwrap();
    let king = b.move_piece(man, 0, 3);
    assert!(king.king);

    let mut current = king;
    for (row, col) in [(1, 4), (2, 5), (1, 6), (0, 7)] {
        current = b.move_piece(current, row, col);
        assert!(current.king);
    }
    assert_eq!(b.red_kings(), 1);
}

#[test]
fn forced_jump_scenario_ends_game() {
    let b = Board::from_layout(
        "........
         ........
         ...w....
         ....r...
         ........
         ........
         ........
         ........",
    );
    let white = b.get_piece(2, 3).unwrap();
    let moves = b.get_valid_moves(white);
    let captured = moves.get(4, 5).expect("jump destination listed");
    assert_eq!(captured, &[b.get_piece(3, 4).unwrap()][..]);

    let mut next = b.clone();
    next.move_piece(white, 4, 5);
    next.remove(captured);
    assert_eq!(next.red_left(), 0);
    assert_eq!(next.winner(), Some(Color::White));
}
