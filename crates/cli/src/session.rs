//! Game session state for the terminal frontend

use checkers_core::{
    apply_move, col_of, legal_moves, row_of, Applied, Position, Side, Status,
};
use std::collections::HashSet;

/// The human always plays Teal; the engine answers for Purple.
pub const HUMAN_SIDE: Side = Side::Teal;

/// Session state: the authoritative position plus the input-side scraps the
/// rules crate deliberately does not carry (current selection, last move).
#[derive(Debug, Clone)]
pub struct Session {
    /// Current position
    pub position: Position,
    /// Currently selected square (for move input)
    pub selected_square: Option<u8>,
    /// Legal destinations from the selected square
    pub legal_moves_from_selected: HashSet<u8>,
    /// Last applied move (for highlighting in the board printout)
    pub last_move: Option<(u8, u8)>,
}

/// What a square input did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Selected(u8),
    Moved(Applied),
    /// Not a selectable piece and not a legal destination; selection cleared.
    Ignored,
}

impl Session {
    pub fn new() -> Self {
        Self {
            position: Position::startpos(),
            selected_square: None,
            legal_moves_from_selected: HashSet::new(),
            last_move: None,
        }
    }

    pub fn status(&self) -> Status {
        self.position.status()
    }

    /// Handle one square of input, click-style: own pieces select,
    /// legal destinations move, anything else clears the selection.
    pub fn touch_square(&mut self, sq: u8) -> Input {
        if let Some(piece) = self.position.piece_at(sq) {
            if piece.side == HUMAN_SIDE && self.position.side_to_move == HUMAN_SIDE {
                self.selected_square = Some(sq);
                self.update_legal_moves();
                return Input::Selected(sq);
            }
        }

        if let Some(from) = self.selected_square {
            if self.legal_moves_from_selected.contains(&sq) {
                if let Some(applied) = self.try_move(from, sq) {
                    return Input::Moved(applied);
                }
            }
        }

        self.clear_selection();
        Input::Ignored
    }

    /// Attempt a full move; the rules crate remains the judge.
    pub fn try_move(&mut self, from: u8, to: u8) -> Option<Applied> {
        let applied = apply_move(
            &mut self.position,
            HUMAN_SIDE,
            row_of(from),
            col_of(from),
            row_of(to),
            col_of(to),
        )?;
        self.last_move = Some((from, to));
        self.clear_selection();
        Some(applied)
    }

    /// Apply an engine move for Purple.
    pub fn apply_engine_move(&mut self, mv: checkers_core::Move) -> Option<Applied> {
        let applied = checkers_core::apply(&mut self.position, HUMAN_SIDE.other(), mv)?;
        self.last_move = Some((mv.from, mv.to));
        self.clear_selection();
        Some(applied)
    }

    pub fn clear_selection(&mut self) {
        self.selected_square = None;
        self.legal_moves_from_selected.clear();
    }

    fn update_legal_moves(&mut self) {
        self.legal_moves_from_selected.clear();
        if let Some(from) = self.selected_square {
            for mv in legal_moves(&self.position, HUMAN_SIDE) {
                if mv.from == from {
                    self.legal_moves_from_selected.insert(mv.to);
                }
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
