//! Match runner for the checkers difficulty levels
//!
//! This crate provides infrastructure for:
//! - Playing series of games between the greedy engine's difficulty levels
//! - Tracking Elo ratings across levels
//! - Saving results for later comparison
//!
//! # Usage
//!
//! ```bash
//! # 100 games between the easiest and hardest level
//! cargo run -p matchup -- match easy hard --games 100
//!
//! # Show the rating table accumulated so far
//! cargo run -p matchup -- leaderboard
//! ```

mod elo;
mod match_runner;
mod results;

pub use elo::*;
pub use match_runner::*;
pub use results::*;
