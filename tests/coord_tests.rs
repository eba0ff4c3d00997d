use battleships::{parse_coord, BoardError, Coord};

#[test]
fn test_letter_form() {
    let c = parse_coord("C4").unwrap();
    assert_eq!((c.row(), c.col()), (4, 2));
    let c = parse_coord(" j9 ").unwrap();
    assert_eq!((c.row(), c.col()), (9, 9));
    assert_eq!(c.to_string(), "J9");
}

#[test]
fn test_numeric_form() {
    let c = parse_coord("4 2").unwrap();
    assert_eq!((c.row(), c.col()), (4, 2));
    let c = parse_coord("0,9").unwrap();
    assert_eq!((c.row(), c.col()), (0, 9));
}

#[test]
fn test_out_of_bounds() {
    assert_eq!(
        parse_coord("K1"),
        Err(BoardError::OutOfBounds { row: 1, col: 10 })
    );
    assert_eq!(
        parse_coord("10 0"),
        Err(BoardError::OutOfBounds { row: 10, col: 0 })
    );
    assert!(Coord::new(9, 9).is_ok());
    assert!(Coord::new(0, 10).is_err());
}

#[test]
fn test_malformed() {
    assert!(matches!(parse_coord(""), Err(BoardError::InvalidCoord(_))));
    assert!(matches!(parse_coord("A"), Err(BoardError::InvalidCoord(_))));
    assert!(matches!(parse_coord("3"), Err(BoardError::InvalidCoord(_))));
    assert!(matches!(parse_coord("1 2 3"), Err(BoardError::InvalidCoord(_))));
    assert!(matches!(parse_coord("x y"), Err(BoardError::InvalidCoord(_))));
    assert!(matches!(parse_coord("-1 2"), Err(BoardError::InvalidCoord(_))));
}
