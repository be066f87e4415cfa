//! Greedy Checkers Engine
//!
//! A one-ply move selector: it scores every legal move by the material
//! balance after playing it, then either picks from the best moves or from
//! all legal moves, weighted by a per-difficulty skill level. "Hard" always
//! plays the material-optimal move; it is greedy, not unbeatable.

mod eval;

use checkers_core::{apply, legal_moves, Engine, Move, Position, Side};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::str::FromStr;


// Re-export for direct use if needed
pub use eval::evaluate;

/// Flat score bonus for capture moves, so ties break toward taking a piece
/// without making captures mandatory.
const CAPTURE_BONUS: i32 = 2;

/// How often the engine plays a best-scoring move rather than any legal one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All levels, weakest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Probability of picking from the best-move set instead of from all
    /// legal moves.
    pub fn skill(self) -> f64 {
        match self {
            Difficulty::Easy => 0.30,
            Difficulty::Medium => 0.60,
            Difficulty::Hard => 1.00,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("unknown difficulty: {}", s)),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A checkers engine that evaluates one ply ahead on private copies of the
/// position, never touching the caller's state.
///
/// The generator is seeded once at construction and reused across calls, so
/// a fixed seed replays the same game against fixed opposing play.
#[derive(Debug, Clone)]
pub struct GreedyEngine {
    difficulty: Difficulty,
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic variant for tests and reproducible matches.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    fn score_move(pos: &Position, side: Side, mv: Move) -> i32 {
        let mut after = pos.clone();
        // Enumerated moves always replay; a failure would mean the generator
        // and the validator disagree.
        if apply(&mut after, side, mv).is_none() {
            return i32::MIN;
        }

        let mut score = eval::evaluate(&after, side);
        if mv.is_capture {
            score += CAPTURE_BONUS;
        }
        score
    }
}

impl Engine for GreedyEngine {
    fn choose_move(&mut self, pos: &Position, side: Side) -> Option<Move> {
        let all = legal_moves(pos, side);
        if all.is_empty() {
            return None;
        }

        let mut best: Vec<Move> = Vec::new();
        let mut best_score = i32::MIN;
        for &mv in &all {
            let score = Self::score_move(pos, side, mv);
            if score > best_score {
                best_score = score;
                best.clear();
                best.push(mv);
            } else if score == best_score {
                best.push(mv);
            }
        }

        let pick_best = self.rng.gen::<f64>() < self.difficulty.skill();
        let pool = if pick_best { &best } else { &all };
        pool.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        match self.difficulty {
            Difficulty::Easy => "Greedy (easy)",
            Difficulty::Medium => "Greedy (medium)",
            Difficulty::Hard => "Greedy (hard)",
        }
    }
}
