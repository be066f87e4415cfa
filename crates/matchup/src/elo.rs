//! Elo ratings for the three difficulty levels
//!
//! The participant set is closed (easy, medium, hard), so ratings live in a
//! fixed three-slot table indexed by `Difficulty` rather than a map keyed
//! by arbitrary names.

use greedy_engine::Difficulty;
use serde::{Deserialize, Serialize};

/// Starting Elo for every level
pub const DEFAULT_ELO: f64 = 1500.0;

/// K-factor for Elo updates (higher = more volatile)
pub const K_FACTOR: f64 = 32.0;

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self {
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from the first player's perspective (1 per win, 0.5 per draw)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::new()
    }
}

/// One archived match between two levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Difficulty pairing, first seat first
    pub level1: String,
    pub level2: String,
    pub result: MatchResult,
    /// Unix seconds at the time the match was recorded
    pub timestamp: u64,
    pub elo_change: f64,
}

/// Rating table over the difficulty levels, with match history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EloTracker {
    /// Ratings in `Difficulty::ALL` order (easy, medium, hard)
    ratings: [f64; 3],
    /// Games played per level, same order
    games_played: [u32; 3],
    /// Match history for analysis
    pub history: Vec<MatchRecord>,
}

impl Default for EloTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl EloTracker {
    pub fn new() -> Self {
        Self {
            ratings: [DEFAULT_ELO; 3],
            games_played: [0; 3],
            history: Vec::new(),
        }
    }

    /// Load tracker from a JSON file
    pub fn load(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse JSON: {}", e))
    }

    /// Save tracker to a JSON file
    pub fn save(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write file: {}", e))
    }

    fn idx(level: Difficulty) -> usize {
        match level {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    pub fn rating(&self, level: Difficulty) -> f64 {
        self.ratings[Self::idx(level)]
    }

    pub fn games(&self, level: Difficulty) -> u32 {
        self.games_played[Self::idx(level)]
    }

    /// Expected score for `level1` against `level2`
    pub fn expected_score(&self, level1: Difficulty, level2: Difficulty) -> f64 {
        let diff = self.rating(level2) - self.rating(level1);
        1.0 / (1.0 + 10.0_f64.powf(diff / 400.0))
    }

    /// Update ratings after a match. Self-play (both seats on the same
    /// level) counts the games but cannot move the shared rating.
    pub fn update_ratings(&mut self, level1: Difficulty, level2: Difficulty, result: &MatchResult) {
        let games = result.total_games();
        let elo_change = if level1 == level2 {
            0.0
        } else {
            let expected = self.expected_score(level1, level2);
            K_FACTOR * games as f64 * (result.score() - expected)
        };

        self.ratings[Self::idx(level1)] += elo_change;
        self.ratings[Self::idx(level2)] -= elo_change;
        self.games_played[Self::idx(level1)] += games;
        self.games_played[Self::idx(level2)] += games;

        self.history.push(MatchRecord {
            level1: level1.as_str().to_string(),
            level2: level2.as_str().to_string(),
            result: result.clone(),
            timestamp: unix_now(),
            elo_change,
        });
    }

    /// The three levels sorted strongest first
    pub fn leaderboard(&self) -> Vec<(Difficulty, f64, u32)> {
        let mut entries: Vec<_> = Difficulty::ALL
            .into_iter()
            .map(|level| (level, self.rating(level), self.games(level)))
            .collect();
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        entries
    }

    /// Print leaderboard to stdout
    pub fn print_leaderboard(&self) {
        println!("\n=== Difficulty Leaderboard ===");
        println!("{:<10} {:>8} {:>8}", "Level", "Elo", "Games");
        println!("{}", "-".repeat(30));
        for (level, rating, games) in self.leaderboard() {
            println!("{:<10} {:>8.1} {:>8}", level.as_str(), rating, games);
        }
        println!();
    }
}

fn unix_now() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
