use super::*;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;

#[test]
fn test_self_play() {
    let mut engine1 = MinimaxEngine::new();
    let mut engine2 = MinimaxEngine::new();

    let config = MatchConfig {
        num_games: 2,
        depth: 2,
        max_moves: 50,
        verbose: false,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(&mut engine1, &mut engine2);

    // Self-play should complete without panic
    assert_eq!(result.total_games(), 2);
}

#[test]
fn test_minimax_beats_random() {
    let mut minimax = MinimaxEngine::new();
    let mut random = RandomEngine::seeded(42);

    let config = MatchConfig {
        num_games: 4,
        depth: 3,
        max_moves: 200,
        verbose: false,
        ..Default::default()
    };
    let result = MatchRunner::new(config).run_match(&mut minimax, &mut random);

    assert_eq!(result.total_games(), 4);
    assert!(result.wins >= result.losses);
}

#[test]
fn test_move_cap_is_a_draw() {
    let mut engine1 = RandomEngine::seeded(3);
    let mut engine2 = RandomEngine::seeded(4);
    let config = MatchConfig {
        num_games: 1,
        max_moves: 0,
        verbose: false,
        ..Default::default()
    };
    let result = MatchRunner::new(config).run_match(&mut engine1, &mut engine2);
    assert_eq!(result.draws, 1);
}

#[test]
fn test_config_from_toml_fills_defaults() {
    let config = MatchConfig::from_toml("num_games = 4\ndepth = 2\n").unwrap();
    assert_eq!(config.num_games, 4);
    assert_eq!(config.depth, 2);
    assert_eq!(config.max_moves, MatchConfig::default().max_moves);
    assert!(config.alternate_colors);
}

#[test]
fn test_config_rejects_bad_toml() {
    assert!(MatchConfig::from_toml("num_games = \"many\"").is_err());
}

#[test]
fn test_config_load_reports_missing_file() {
    let err = MatchConfig::load(Path::new("does/not/exist.toml")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.toml"));
}

#[test]
fn test_quick_match_counts_games() {
    let mut engine1 = RandomEngine::seeded(11);
    let mut engine2 = RandomEngine::seeded(12);
    let result = quick_match(&mut engine1, &mut engine2, 3, 1);
    assert_eq!(result.total_games(), 3);
}

#[test]
fn test_fixed_colors_config() {
    // With alternation off, engine1 is always RED
    let config = MatchConfig {
        num_games: 2,
        max_moves: 0,
        alternate_colors: false,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    assert!(!runner.config().alternate_colors);

    let mut engine1 = MinimaxEngine::new();
    let mut engine2 = RandomEngine::seeded(5);
    assert_eq!(
        runner.play_game(&mut engine1, &mut engine2),
        GameResult::Draw
    );
}
