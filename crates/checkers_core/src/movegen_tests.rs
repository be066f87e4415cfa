use super::*;

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    // Each front-row man has two forward diagonals, minus the edge square
    assert_eq!(legal_moves(&pos, Side::Teal).len(), 7);
    assert_eq!(legal_moves(&pos, Side::Purple).len(), 7);
}

#[test]
fn test_startpos_has_no_captures() {
    let pos = Position::startpos();
    assert!(legal_moves(&pos, Side::Teal).iter().all(|m| !m.is_capture));
}

#[test]
fn test_capture_is_flagged() {
    let mut pos = Position::empty();
    pos.set(sq(5, 0).unwrap(), Some(Piece::man(Side::Purple)));
    pos.set(sq(4, 1).unwrap(), Some(Piece::man(Side::Teal)));

    let moves = legal_moves(&pos, Side::Purple);
    assert_eq!(moves.len(), 1);
    let mv = moves[0];
    assert!(mv.is_capture);
    assert_eq!(mv.from, sq(5, 0).unwrap());
    assert_eq!(mv.to, sq(3, 2).unwrap());
}

#[test]
fn test_king_move_count_in_open_board() {
    // A lone king in the middle has four plain moves and no jumps
    let mut pos = Position::empty();
    pos.set(sq(4, 3).unwrap(), Some(Piece::king(Side::Purple)));
    assert_eq!(legal_moves(&pos, Side::Purple).len(), 4);
}

#[test]
fn test_has_any_moves_matches_enumeration() {
    let pos = Position::startpos();
    assert!(has_any_moves(&pos, Side::Teal));
    assert!(has_any_moves(&pos, Side::Purple));

    let pos = Position::empty();
    assert!(!has_any_moves(&pos, Side::Teal));
    assert!(legal_moves(&pos, Side::Teal).is_empty());
}

#[test]
fn test_enumeration_never_mutates_position() {
    let pos = Position::startpos();
    let before = pos.clone();
    let _ = legal_moves(&pos, Side::Teal);
    let _ = has_any_moves(&pos, Side::Purple);
    assert_eq!(pos, before);
}

#[test]
fn test_destinations_are_dark_and_empty() {
    let pos = Position::startpos();
    for mv in legal_moves(&pos, Side::Teal) {
        assert!(is_dark_square(row_of(mv.to), col_of(mv.to)));
        assert_eq!(pos.piece_at(mv.to), None);
    }
}
