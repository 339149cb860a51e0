use seabattle::{parse_coord, Coord, TargetError};

#[test]
fn test_parse_coord_basic() {
    assert_eq!(parse_coord("c4", 6).unwrap(), Coord::new(4, 3));
    assert_eq!(parse_coord("A1", 6).unwrap(), Coord::new(1, 1));
    assert_eq!(parse_coord("f6", 6).unwrap(), Coord::new(6, 6));
}

#[test]
fn test_parse_coord_is_case_insensitive() {
    assert_eq!(parse_coord("D2", 6).unwrap(), parse_coord("d2", 6).unwrap());
}

#[test]
fn test_parse_coord_trims_whitespace() {
    assert_eq!(parse_coord("  b3\n", 6).unwrap(), Coord::new(3, 2));
}

#[test]
fn test_parse_coord_rejects_garbage() {
    for input in ["", "4c", "cc", "c", "c0", "??", "4"] {
        assert!(
            matches!(
                parse_coord(input, 6),
                Err(TargetError::MalformedCoordinate { .. })
            ),
            "{input:?} should be rejected"
        );
    }
}

#[test]
fn test_parse_coord_respects_board_size() {
    // g7 exists on a 7-board but not on a 6-board
    assert_eq!(parse_coord("g7", 7).unwrap(), Coord::new(7, 7));
    assert!(parse_coord("g7", 6).is_err());
    assert!(parse_coord("a7", 6).is_err());
    assert!(parse_coord("g1", 6).is_err());
}
