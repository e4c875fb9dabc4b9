use super::*;
use checkers_core::{successors, Game};

#[test]
fn test_engine_returns_successor_board() {
    let mut engine = MinimaxEngine::new();
    let board = Board::new();
    let result = engine.search(&board, Color::Red, SearchLimits::depth(3));

    let chosen = result.best_board.expect("opening has legal moves");
    assert!(successors(&board, Color::Red)
        .iter()
        .any(|(_, next)| *next == chosen));
    assert!(result.nodes > 0);
    assert_eq!(result.depth, 3);
}

#[test]
fn test_engine_depth_zero_still_moves() {
    let mut engine = MinimaxEngine::new();
    let board = Board::new();
    let result = engine.search(&board, Color::White, SearchLimits::depth(0));
    assert_eq!(result.depth, 1);
    assert_ne!(result.best_board, Some(board));
}

#[test]
fn test_engine_takes_the_piece() {
    let board = Board::from_layout(
        "........
         ........
         ...w....
         ....r...
         ........
         ........
         ........
         ........",
    );
    let mut engine = MinimaxEngine::new();
    let result = engine.search(&board, Color::White, SearchLimits::depth(2));
    let next = result.best_board.unwrap();
    assert_eq!(next.red_left(), 0);
    assert_eq!(next.winner(), Some(Color::White));
}

#[test]
fn test_engine_reports_no_move_when_blocked() {
    let board = Board::from_layout(
        ".w......
         r.r.....
         ...r....
         ........
         ........
         ........
         ........
         ........",
    );
    let mut engine = MinimaxEngine::new();
    let result = engine.search(&board, Color::White, SearchLimits::depth(2));
    assert!(result.best_board.is_none());
}

#[test]
fn test_engine_drives_game_forward() {
    let mut game = Game::new();
    let mut engine = MinimaxEngine::new();
    for _ in 0..6 {
        let result = engine.search(game.board(), game.turn(), SearchLimits::depth(2));
        game.apply_chosen_board(result.best_board.unwrap());
    }
    assert_eq!(game.moves_played(), 6);
    assert_eq!(game.turn(), Color::Red);
}

#[test]
fn test_engine_moves_when_opponent_is_gone() {
    let board = Board::from_layout(
        "........
         ........
         ........
         ........
         ....r...
         ........
         ........
         ........",
    );
    assert_eq!(board.winner_to_move(Color::Red), Some(Color::Red));

    let mut engine = MinimaxEngine::new();
    let result = engine.search(&board, Color::Red, SearchLimits::depth(2));

    let chosen = result.best_board.expect("RED still has moves");
    assert_ne!(chosen, board);
    assert!(successors(&board, Color::Red)
        .iter()
        .any(|(_, next)| *next == chosen));
}
