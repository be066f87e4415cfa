#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Teal,
    Purple,
}
impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Teal => Side::Purple,
            Side::Purple => Side::Teal,
        }
    }
    /// Row delta a man of this side advances by. Teal starts on row 0 and
    /// moves toward row 7; Purple mirrors it.
    pub fn forward(self) -> i8 {
        match self {
            Side::Teal => 1,
            Side::Purple => -1,
        }
    }
    /// Row a man of this side must reach to be crowned.
    pub fn crowning_row(self) -> i8 {
        match self {
            Side::Teal => 7,
            Side::Purple => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Man,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    pub fn man(side: Side) -> Self {
        Self {
            side,
            kind: PieceKind::Man,
        }
    }
    pub fn king(side: Side) -> Self {
        Self {
            side,
            kind: PieceKind::King,
        }
    }
    pub fn is_king(self) -> bool {
        self.kind == PieceKind::King
    }
}

/// A candidate or chosen move. Ephemeral: produced by enumeration, replayed
/// with `apply`, never stored in game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: u8, // 0..63
    pub to: u8,   // 0..63
    pub is_capture: bool,
}

impl Move {
    pub fn new(from: u8, to: u8, is_capture: bool) -> Self {
        Self {
            from,
            to,
            is_capture,
        }
    }
}

// Helpers
pub fn row_of(sq: u8) -> i8 {
    (sq / 8) as i8
}
pub fn col_of(sq: u8) -> i8 {
    (sq % 8) as i8
}
pub fn in_bounds(row: i8, col: i8) -> bool {
    (0..8).contains(&row) && (0..8).contains(&col)
}
pub fn sq(row: i8, col: i8) -> Option<u8> {
    if in_bounds(row, col) {
        Some((row as u8) * 8 + (col as u8))
    } else {
        None
    }
}

/// The playable squares. Light squares are never occupied.
pub fn is_dark_square(row: i8, col: i8) -> bool {
    (row + col) % 2 == 1
}

pub fn sq_to_coord(sq: u8) -> String {
    let c = (b'a' + (sq % 8)) as char;
    let r = (b'1' + (sq / 8)) as char;
    format!("{c}{r}")
}

pub fn coord_to_sq(s: &str) -> Option<u8> {
    let b = s.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let c = b[0];
    let r = b[1];
    if !(b'a'..=b'h').contains(&c) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    let col = c - b'a';
    let row = r - b'1';
    Some(row * 8 + col)
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
