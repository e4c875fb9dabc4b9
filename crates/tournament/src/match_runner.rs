//! Match runner for playing games between engines

use std::path::Path;

use anyhow::Context;
use checkers_core::{Color, Engine, Game, SearchLimits};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::results::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Maximum plies per game before declaring a draw
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Log progress after every game
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 3,
            max_moves: 100,
            alternate_colors: true,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Reads a TOML file. Missing keys take their default values.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    fn search_limits(&self) -> SearchLimits {
        SearchLimits::depth(self.depth)
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // RED moves first; alternate who gets it if configured
            let engine1_red = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_red {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1).flip()
            };
            result.record(game_result);

            if self.config.verbose {
                info!(
                    game = game_num + 1,
                    of = self.config.num_games,
                    engine1 = engine1.name(),
                    color = if engine1_red { "RED" } else { "WHITE" },
                    outcome = ?game_result,
                    wins = result.wins,
                    losses = result.losses,
                    draws = result.draws,
                    "game finished"
                );
            }
        }

        result
    }

    /// Play a single game, returns result from red's perspective
    pub fn play_game(&self, red: &mut dyn Engine, white: &mut dyn Engine) -> GameResult {
        let mut game = Game::new();
        red.new_game();
        white.new_game();

        for _ply in 0..self.config.max_moves {
            if let Some(winner) = game.winner() {
                info!(%winner, plies = game.moves_played(), "game over");
                return result_for_red(winner);
            }

            let to_move = game.turn();
            let limits = self.config.search_limits();
            let result = match to_move {
                Color::Red => red.search(game.board(), to_move, limits),
                Color::White => white.search(game.board(), to_move, limits),
            };

            match result.best_board {
                Some(board) => game.apply_chosen_board(board),
                None => {
                    // An engine with nothing to play has lost
                    info!(loser = %to_move, plies = game.moves_played(), "no move returned");
                    return result_for_red(to_move.other());
                }
            }
        }

        match game.winner() {
            Some(winner) => {
                info!(%winner, plies = game.moves_played(), "game over");
                result_for_red(winner)
            }
            None => {
                info!(plies = game.moves_played(), "move cap reached, draw");
                GameResult::Draw
            }
        }
    }
}

fn result_for_red(winner: Color) -> GameResult {
    match winner {
        Color::Red => GameResult::Win,
        Color::White => GameResult::Loss,
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
