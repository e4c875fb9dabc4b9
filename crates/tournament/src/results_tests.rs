use super::*;

#[test]
fn test_score() {
    let mut result = MatchResult::new();
    assert_eq!(result.score(), 0.5);

    result.record(GameResult::Win);
    result.record(GameResult::Draw);
    result.record(GameResult::Loss);
    result.record(GameResult::Win);
    assert_eq!(result.total_games(), 4);
    assert_eq!(result.score(), 2.5 / 4.0);
}

#[test]
fn test_flip() {
    assert_eq!(GameResult::Win.flip(), GameResult::Loss);
    assert_eq!(GameResult::Draw.flip(), GameResult::Draw);
}

#[test]
fn test_report_json_round_trip() {
    let result = MatchResult {
        wins: 3,
        losses: 1,
        draws: 2,
    };
    let report = MatchReport::new("minimax", "random", MatchConfig::default(), result.clone());

    let path = std::env::temp_dir().join(format!("checkers_report_{}.json", std::process::id()));
    report.save(&path).unwrap();
    let loaded = MatchReport::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.engine1, "minimax");
    assert_eq!(loaded.result, result);
    assert_eq!(loaded.config, MatchConfig::default());
}

#[test]
fn test_generate_report() {
    let report = MatchReport::new(
        "minimax",
        "random",
        MatchConfig::default(),
        MatchResult {
            wins: 1,
            losses: 0,
            draws: 1,
        },
    );
    let text = report.generate_report();
    assert!(text.contains("minimax vs random"));
    assert!(text.contains("Score: 75.0%"));
}
