//! Match results storage and reporting

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::match_runner::MatchConfig;

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the other player's side.
    pub fn flip(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, game: GameResult) {
        match game {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// Everything worth keeping about one match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    pub config: MatchConfig,
    pub result: MatchResult,
}

impl MatchReport {
    pub fn new(engine1: &str, engine2: &str, config: MatchConfig, result: MatchResult) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            config,
            result,
        }
    }

    /// Save report to a JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize report")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Load report from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Match: {} vs {} ===\n",
            self.engine1, self.engine2
        ));
        report.push_str(&format!(
            "Config: {} games, depth {}, {} plies max\n\n",
            self.config.num_games, self.config.depth, self.config.max_moves
        ));
        report.push_str(&format!(
            "{:<20} {:>5}-{:<5}-{:<5}\n",
            "Engine 1", "W", "L", "D"
        ));
        report.push_str(&"-".repeat(40));
        report.push('\n');
        report.push_str(&format!(
            "{:<20} {:>5}-{:<5}-{:<5}\n",
            self.engine1, self.result.wins, self.result.losses, self.result.draws
        ));
        report.push_str(&format!("Score: {:.1}%\n", self.result.score() * 100.0));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
