use crate::board::Position;
use crate::rules::apply_move;
use crate::types::*;

/// Diagonal steps a piece could at most take: one square for a plain move,
/// two for a jump. Everything else in the 5x5 window is rejected by
/// `apply_move`, which stays the sole judge of legality.
const STEPS: [i8; 4] = [-2, -1, 1, 2];

/// Generate all legal moves for `side`, returning a freshly allocated vector.
pub fn legal_moves(pos: &Position, side: Side) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    legal_moves_into(pos, side, &mut out);
    out
}

/// Generate all legal moves for `side` into the provided buffer, reusing it
/// across calls. Every candidate target in the two-step diagonal
/// neighborhood is probed by applying it to a scratch copy of the position.
pub fn legal_moves_into(pos: &Position, side: Side, out: &mut Vec<Move>) {
    out.clear();
    for from in 0..64u8 {
        let piece = match pos.piece_at(from) {
            Some(p) => p,
            None => continue,
        };
        if piece.side != side {
            continue;
        }
        let r = row_of(from);
        let c = col_of(from);
        for dr in STEPS {
            for dc in STEPS {
                let to = match sq(r + dr, c + dc) {
                    Some(to) => to,
                    None => continue,
                };
                let mut probe = pos.clone();
                if let Some(applied) = apply_move(&mut probe, side, r, c, r + dr, c + dc) {
                    out.push(Move::new(from, to, applied.capture));
                }
            }
        }
    }
}

/// True iff `side` has at least one legal move. Same probe as
/// `legal_moves_into`, stopping at the first hit.
pub fn has_any_moves(pos: &Position, side: Side) -> bool {
    for from in 0..64u8 {
        let piece = match pos.piece_at(from) {
            Some(p) => p,
            None => continue,
        };
        if piece.side != side {
            continue;
        }
        let r = row_of(from);
        let c = col_of(from);
        for dr in STEPS {
            for dc in STEPS {
                if sq(r + dr, c + dc).is_none() {
                    continue;
                }
                let mut probe = pos.clone();
                if apply_move(&mut probe, side, r, c, r + dr, c + dc).is_some() {
                    return true;
                }
            }
        }
    }
    false
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
