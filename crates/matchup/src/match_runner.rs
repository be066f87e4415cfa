//! Match runner for playing games between difficulty levels

use checkers_core::{apply, Engine, Position, Side, Status};
use greedy_engine::{Difficulty, GreedyEngine};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::elo::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Maximum half-moves per game before declaring a draw. Greedy self-play
    /// can shuffle kings forever, so the runner needs a cutoff even though
    /// the rules themselves have no draw.
    pub max_moves: u32,
    /// Whether the first level alternates between Teal and Purple each game
    pub alternate_sides: bool,
    /// Base seed for the engines (None = fresh entropy every game)
    pub seed: Option<u64>,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_moves: 200,
            alternate_sides: true,
            seed: None,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Load a config from a TOML file
    pub fn from_toml(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}

/// Runs matches between two difficulty levels
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two difficulty levels.
    ///
    /// Returns the result from `d1`'s perspective.
    pub fn run_match(&self, d1: Difficulty, d2: Difficulty) -> MatchResult {
        let mut result = MatchResult::new();

        // One seed stream for the whole match, so a fixed base seed replays
        // every game while each game still gets its own engine seeds
        let mut seed_rng = self.config.seed.map(StdRng::seed_from_u64);

        for game_num in 0..self.config.num_games {
            let mut p1 = Self::make_engine(d1, seed_rng.as_mut());
            let mut p2 = Self::make_engine(d2, seed_rng.as_mut());

            // Alternate sides if configured
            let p1_teal = !self.config.alternate_sides || game_num % 2 == 0;

            let game_result = if p1_teal {
                self.play_game(&mut p1, &mut p2)
            } else {
                // Flip result since the first level is Purple
                match self.play_game(&mut p2, &mut p1) {
                    GameResult::Win => GameResult::Loss,
                    GameResult::Loss => GameResult::Win,
                    GameResult::Draw => GameResult::Draw,
                }
            };

            match game_result {
                GameResult::Win => result.wins += 1,
                GameResult::Loss => result.losses += 1,
                GameResult::Draw => result.draws += 1,
            }

            if self.config.verbose {
                let side = if p1_teal { "T" } else { "P" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    side,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    fn make_engine(difficulty: Difficulty, seed_rng: Option<&mut StdRng>) -> GreedyEngine {
        match seed_rng {
            Some(rng) => GreedyEngine::with_seed(difficulty, rng.gen()),
            None => GreedyEngine::new(difficulty),
        }
    }

    /// Play a single game, returns the result from Teal's perspective
    fn play_game(&self, teal: &mut GreedyEngine, purple: &mut GreedyEngine) -> GameResult {
        let mut pos = Position::startpos();
        teal.new_game();
        purple.new_game();

        for _ in 0..self.config.max_moves {
            match pos.status() {
                Status::TealWin => return GameResult::Win,
                Status::PurpleWin => return GameResult::Loss,
                Status::Ongoing => {}
            }

            let side = pos.side_to_move;
            let engine = match side {
                Side::Teal => &mut *teal,
                Side::Purple => &mut *purple,
            };

            let mv = match engine.choose_move(&pos, side) {
                Some(mv) => mv,
                // Status said ongoing, so this cannot happen; score it
                // against the mover rather than panic
                None => {
                    return match side {
                        Side::Teal => GameResult::Loss,
                        Side::Purple => GameResult::Win,
                    }
                }
            };

            if apply(&mut pos, side, mv).is_none() {
                // An illegal engine move forfeits the game
                return match side {
                    Side::Teal => GameResult::Loss,
                    Side::Purple => GameResult::Win,
                };
            }
        }

        match pos.status() {
            Status::TealWin => GameResult::Win,
            Status::PurpleWin => GameResult::Loss,
            Status::Ongoing => GameResult::Draw,
        }
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
