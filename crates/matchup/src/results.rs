//! Match results storage and reporting

use greedy_engine::Difficulty;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::elo::MatchResult;
use crate::match_runner::MatchConfig;

/// Accumulated results of difficulty matchups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchupResults {
    /// All recorded matches, oldest first
    pub matches: Vec<MatchEntry>,
    /// Configuration the series started with
    pub config: MatchConfig,
}

/// A single match entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub level1: String,
    pub level2: String,
    pub result: MatchResult,
}

impl MatchupResults {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            matches: Vec::new(),
            config,
        }
    }

    /// Add a match result
    pub fn add_match(&mut self, level1: Difficulty, level2: Difficulty, result: MatchResult) {
        self.matches.push(MatchEntry {
            level1: level1.as_str().to_string(),
            level2: level2.as_str().to_string(),
            result,
        });
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Games won by `level` across all recorded matches, from either seat.
    /// Draws count for neither side.
    pub fn wins_for(&self, level: Difficulty) -> u32 {
        let name = level.as_str();
        self.matches
            .iter()
            .map(|entry| {
                let mut wins = 0;
                if entry.level1 == name {
                    wins += entry.result.wins;
                }
                if entry.level2 == name {
                    wins += entry.result.losses;
                }
                wins
            })
            .sum()
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str("=== Difficulty Matchups ===\n\n");
        report.push_str(&format!(
            "Config: {} games/match, {} max moves\n\n",
            self.config.num_games, self.config.max_moves
        ));

        report.push_str("Matches:\n");
        report.push_str(&format!(
            "{:<8} vs {:<8} {:>4}-{:<4}-{:<4} {:>6}\n",
            "Level 1", "Level 2", "W", "L", "D", "Score"
        ));
        report.push_str(&"-".repeat(44));
        report.push('\n');
        for entry in &self.matches {
            report.push_str(&format!(
                "{:<8} vs {:<8} {:>4}-{:<4}-{:<4} {:>5.1}%\n",
                entry.level1,
                entry.level2,
                entry.result.wins,
                entry.result.losses,
                entry.result.draws,
                entry.result.score() * 100.0
            ));
        }

        report.push_str("\nTotal wins per level:\n");
        for level in Difficulty::ALL {
            report.push_str(&format!("{:<8} {:>4}\n", level.as_str(), self.wins_for(level)));
        }

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
