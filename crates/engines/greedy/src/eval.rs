//! Material-only position evaluation.

use checkers_core::{Position, Side};

/// Evaluates the position from `side`'s perspective: own piece count minus
/// the opponent's. Men and kings weigh the same.
///
/// Returns:
/// - Positive = `side` is ahead on material
/// - Negative = `side` is behind
/// - 0 = even
pub fn evaluate(pos: &Position, side: Side) -> i32 {
    let (teal, purple) = pos.count_pieces();
    match side {
        Side::Teal => teal as i32 - purple as i32,
        Side::Purple => purple as i32 - teal as i32,
    }
}
