pub mod board;
pub mod movegen;
pub mod rules;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use movegen::*;
pub use rules::*;
pub use types::*;

/// Trait that all checkers move selectors must implement.
///
/// This allows swapping selection policies (greedy, random, something
/// stronger later) without touching the frontends or the match runner.
pub trait Engine: Send {
    /// Pick a move for `side` in the given position.
    ///
    /// Returns `None` only when `side` has no legal move, which well-behaved
    /// callers have already ruled out via `Position::status`.
    fn choose_move(&mut self, pos: &Position, side: Side) -> Option<Move>;

    /// Returns the selector's name for reports and leaderboards.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
