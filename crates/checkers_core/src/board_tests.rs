use super::*;
use crate::movegen::has_any_moves;

#[test]
fn test_startpos_counts() {
    let pos = Position::startpos();
    // Three home rows with four dark squares each, per side
    assert_eq!(pos.count_pieces(), (12, 12));
    assert_eq!(pos.side_to_move, Side::Teal);
}

#[test]
fn test_startpos_occupies_only_dark_squares() {
    let pos = Position::startpos();
    for s in 0..64u8 {
        if pos.piece_at(s).is_some() {
            assert!(
                is_dark_square(row_of(s), col_of(s)),
                "piece on light square {}",
                sq_to_coord(s)
            );
        }
    }
}

#[test]
fn test_startpos_men_only() {
    let pos = Position::startpos();
    for piece in pos.board.iter().flatten() {
        assert_eq!(piece.kind, PieceKind::Man);
    }
}

#[test]
fn test_startpos_home_rows() {
    let pos = Position::startpos();
    for s in 0..64u8 {
        if let Some(piece) = pos.piece_at(s) {
            match piece.side {
                Side::Teal => assert!(row_of(s) < HOME_ROWS),
                Side::Purple => assert!(row_of(s) >= 8 - HOME_ROWS),
            }
        }
    }
}

#[test]
fn test_status_ongoing_at_start() {
    let pos = Position::startpos();
    assert_eq!(pos.status(), Status::Ongoing);
}

#[test]
fn test_status_win_by_elimination() {
    let mut pos = Position::empty();
    pos.set(sq(2, 1).unwrap(), Some(Piece::man(Side::Teal)));
    pos.side_to_move = Side::Purple;
    assert_eq!(pos.status(), Status::TealWin);

    pos.side_to_move = Side::Teal;
    assert_eq!(pos.status(), Status::Ongoing);
}

#[test]
fn test_status_win_by_no_moves() {
    // Purple king boxed into the corner region: both diagonals blocked,
    // one jump landing is off the board and the other is occupied.
    let mut pos = Position::empty();
    pos.set(sq(0, 1).unwrap(), Some(Piece::king(Side::Purple)));
    pos.set(sq(1, 0).unwrap(), Some(Piece::man(Side::Teal)));
    pos.set(sq(1, 2).unwrap(), Some(Piece::man(Side::Teal)));
    pos.set(sq(2, 3).unwrap(), Some(Piece::man(Side::Teal)));
    pos.side_to_move = Side::Purple;

    assert!(!has_any_moves(&pos, Side::Purple));
    assert!(has_any_moves(&pos, Side::Teal));
    assert_eq!(pos.status(), Status::TealWin);
}

#[test]
fn test_status_win_king_boxed_on_all_four_diagonals() {
    // Mid-board purple king with every diagonal neighbor held by Teal and
    // every landing square beyond them occupied too: no steps in either
    // direction, no jumps
    let mut pos = Position::empty();
    pos.set(sq(3, 2).unwrap(), Some(Piece::king(Side::Purple)));
    for (row, col) in [(2, 1), (2, 3), (4, 1), (4, 3)] {
        pos.set(sq(row, col).unwrap(), Some(Piece::man(Side::Teal)));
    }
    for (row, col) in [(1, 0), (1, 4), (5, 0), (5, 4)] {
        pos.set(sq(row, col).unwrap(), Some(Piece::man(Side::Teal)));
    }
    pos.side_to_move = Side::Purple;

    assert!(!has_any_moves(&pos, Side::Purple));
    assert!(has_any_moves(&pos, Side::Teal));
    assert_eq!(pos.status(), Status::TealWin);
}
