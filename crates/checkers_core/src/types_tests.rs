use super::*;

#[test]
fn test_square_index_round_trip() {
    for row in 0..8 {
        for col in 0..8 {
            let s = sq(row, col).unwrap();
            assert_eq!(row_of(s), row);
            assert_eq!(col_of(s), col);
        }
    }
    assert_eq!(sq(-1, 0), None);
    assert_eq!(sq(0, 8), None);
}

#[test]
fn test_coord_notation() {
    assert_eq!(sq_to_coord(0), "a1");
    assert_eq!(sq_to_coord(63), "h8");
    assert_eq!(coord_to_sq("b3"), sq(2, 1));
    assert_eq!(coord_to_sq("a4"), sq(3, 0));
    assert_eq!(coord_to_sq("i1"), None);
    assert_eq!(coord_to_sq("a9"), None);
    assert_eq!(coord_to_sq("a"), None);
}

#[test]
fn test_dark_squares_checker_over_the_board() {
    // 32 dark squares, none adjacent orthogonally
    let dark = (0..8)
        .flat_map(|r| (0..8).map(move |c| (r, c)))
        .filter(|&(r, c)| is_dark_square(r, c))
        .count();
    assert_eq!(dark, 32);
    assert!(!is_dark_square(0, 0));
    assert!(is_dark_square(0, 1));
}

#[test]
fn test_side_helpers() {
    assert_eq!(Side::Teal.other(), Side::Purple);
    assert_eq!(Side::Teal.forward(), 1);
    assert_eq!(Side::Purple.forward(), -1);
    assert_eq!(Side::Teal.crowning_row(), 7);
    assert_eq!(Side::Purple.crowning_row(), 0);
}
