use crate::types::*;

/// Rows of men each side starts with on an 8x8 board.
pub const HOME_ROWS: i8 = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Side,
}

/// Outcome of the game from the arbiter's point of view, evaluated for the
/// side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Ongoing,
    TealWin,
    PurpleWin,
}

impl Position {
    /// Empty board, Teal to move. Mostly useful for setting up test and
    /// puzzle positions square by square.
    pub fn empty() -> Self {
        Position {
            board: [None; 64],
            side_to_move: Side::Teal,
        }
    }

    pub fn startpos() -> Self {
        let mut p = Position::empty();

        // Men go on the dark squares of each side's home rows.
        for row in 0..HOME_ROWS {
            for col in 0..8 {
                if is_dark_square(row, col) {
                    p.board[(row * 8 + col) as usize] = Some(Piece::man(Side::Teal));
                }
            }
        }
        for row in 8 - HOME_ROWS..8 {
            for col in 0..8 {
                if is_dark_square(row, col) {
                    p.board[(row * 8 + col) as usize] = Some(Piece::man(Side::Purple));
                }
            }
        }
        p
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }

    pub fn set(&mut self, sq: u8, piece: Option<Piece>) {
        self.board[sq as usize] = piece;
    }

    /// Men and kings both count one toward their side's total.
    pub fn count_pieces(&self) -> (u32, u32) {
        let mut teal = 0;
        let mut purple = 0;
        for piece in self.board.iter().flatten() {
            match piece.side {
                Side::Teal => teal += 1,
                Side::Purple => purple += 1,
            }
        }
        (teal, purple)
    }

    /// Terminal check for the side to move: it loses when it has no pieces
    /// left or no legal move. There is no draw.
    pub fn status(&self) -> Status {
        let mover = self.side_to_move;
        let (teal, purple) = self.count_pieces();
        let pieces_left = match mover {
            Side::Teal => teal,
            Side::Purple => purple,
        };
        if pieces_left == 0 || !crate::movegen::has_any_moves(self, mover) {
            return match mover {
                Side::Teal => Status::PurpleWin,
                Side::Purple => Status::TealWin,
            };
        }
        Status::Ongoing
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
