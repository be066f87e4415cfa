use crate::board::Position;
use crate::types::*;

/// What a successful `apply_move` did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Applied {
    /// An opponent piece was removed from the jumped-over square.
    pub capture: bool,
    /// The moved man reached its crowning row and became a king.
    pub promoted: bool,
}

/// Validates and applies a move for `side` in one step. Returns `None` and
/// leaves the position untouched when the move is illegal; on success the
/// side to move flips.
///
/// This is the single source of truth for legality: move enumeration and
/// terminal detection probe it against scratch copies instead of carrying
/// their own copy of the rules.
///
/// Rejections, in order: out-of-bounds coordinates, destination not a dark
/// empty square, source empty or holding the opponent's piece, a delta that
/// is neither a one-step diagonal in an allowed direction nor a two-step
/// jump over an adjacent opponent piece.
pub fn apply_move(pos: &mut Position, side: Side, sr: i8, sc: i8, tr: i8, tc: i8) -> Option<Applied> {
    let from = sq(sr, sc)?;
    let to = sq(tr, tc)?;

    // Must land on an empty dark square; light squares are never playable.
    if !is_dark_square(tr, tc) || pos.piece_at(to).is_some() {
        return None;
    }

    let piece = pos.piece_at(from)?;
    if piece.side != side {
        return None;
    }

    let dr = tr - sr;
    let dc = tc - sc;

    // Men advance only; kings may also step back.
    let forward = side.forward();
    let dir_allowed = |step: i8| step == forward || (piece.is_king() && step == -forward);

    let capture = if dc.abs() == 1 && dr.abs() == 1 && dir_allowed(dr) {
        pos.set(to, Some(piece));
        pos.set(from, None);
        false
    } else if dc.abs() == 2 && dr.abs() == 2 && dir_allowed(dr / 2) {
        // Jump: the square in between must hold an opponent piece.
        let mid = sq(sr + dr / 2, sc + dc / 2)?;
        let jumped = pos.piece_at(mid)?;
        if jumped.side != side.other() {
            return None;
        }
        pos.set(mid, None);
        pos.set(to, Some(piece));
        pos.set(from, None);
        true
    } else {
        return None;
    };

    // Crown a man that reached the far row. Kings stay kings.
    let promoted = !piece.is_king() && tr == side.crowning_row();
    if promoted {
        pos.set(to, Some(Piece::king(side)));
    }

    pos.side_to_move = side.other();
    Some(Applied { capture, promoted })
}

/// Replays an enumerated move through `apply_move`.
pub fn apply(pos: &mut Position, side: Side, mv: Move) -> Option<Applied> {
    apply_move(
        pos,
        side,
        row_of(mv.from),
        col_of(mv.from),
        row_of(mv.to),
        col_of(mv.to),
    )
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
