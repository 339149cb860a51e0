use seabattle::{Coord, Orientation, PlacementError, Ship};

#[test]
fn test_cells_horizontal() {
    let ship = Ship::new(Coord::new(2, 1), 3, Orientation::Horizontal);
    let cells: Vec<Coord> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)]
    );
}

#[test]
fn test_cells_vertical() {
    let ship = Ship::new(Coord::new(1, 4), 4, Orientation::Vertical);
    let cells: Vec<Coord> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![
            Coord::new(1, 4),
            Coord::new(2, 4),
            Coord::new(3, 4),
            Coord::new(4, 4)
        ]
    );
}

#[test]
fn test_single_cell_ship_ignores_orientation() {
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        let ship = Ship::new(Coord::new(4, 4), 1, orientation);
        assert_eq!(ship.cells().collect::<Vec<_>>(), vec![Coord::new(4, 4)]);
    }
}

#[test]
fn test_is_hit_by() {
    let ship = Ship::new(Coord::new(3, 3), 2, Orientation::Horizontal);
    assert!(ship.is_hit_by(Coord::new(3, 3)));
    assert!(ship.is_hit_by(Coord::new(3, 4)));
    assert!(!ship.is_hit_by(Coord::new(3, 5)));
    assert!(!ship.is_hit_by(Coord::new(4, 3)));
}

#[test]
fn test_hits_until_sunk() {
    let mut ship = Ship::new(Coord::new(1, 1), 2, Orientation::Horizontal);
    assert!(!ship.is_sunk());
    ship.apply_hit();
    assert!(!ship.is_sunk());
    ship.apply_hit();
    assert!(ship.is_sunk());
    // extra application must not underflow
    ship.apply_hit();
    assert!(ship.is_sunk());
}

#[test]
fn test_orientation_from_raw_encoding() {
    assert_eq!(Orientation::try_from(0).unwrap(), Orientation::Horizontal);
    assert_eq!(Orientation::try_from(1).unwrap(), Orientation::Vertical);
    assert!(matches!(
        Orientation::try_from(2),
        Err(PlacementError::InvalidOrientation(_))
    ));
}

#[test]
fn test_orientation_from_input_letter() {
    assert_eq!(
        Orientation::from_input('H').unwrap(),
        Orientation::Horizontal
    );
    assert_eq!(Orientation::from_input('v').unwrap(), Orientation::Vertical);
    assert_eq!(
        Orientation::from_input('x').unwrap_err(),
        PlacementError::InvalidOrientation('x')
    );
}
