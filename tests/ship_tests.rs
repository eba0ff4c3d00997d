use battleships::{Fleet, Orientation, Ship, ShipKind};

#[test]
fn test_kind_lengths_and_names() {
    let expected = [
        (ShipKind::Battleship, 4, "battleship"),
        (ShipKind::Cruiser, 3, "cruiser"),
        (ShipKind::Destroyer, 2, "destroyer"),
        (ShipKind::Submarine, 1, "submarine"),
    ];
    for (kind, len, name) in expected {
        assert_eq!(kind.length(), len);
        assert_eq!(kind.name(), name);
        assert_eq!(kind.to_string(), name);
        assert_eq!(Ship::new(kind).length(), len);
    }
}

#[test]
fn test_footprint_horizontal_and_vertical() {
    let cells = Ship::compute_footprint(2, 1, Orientation::Horizontal, 3).unwrap();
    let cells: Vec<_> = cells.iter_set_bits().collect();
    assert_eq!(cells, vec![(2, 1), (2, 2), (2, 3)]);

    let cells = Ship::compute_footprint(0, 0, Orientation::Vertical, 4).unwrap();
    let cells: Vec<_> = cells.iter_set_bits().collect();
    assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
}

#[test]
fn test_footprint_off_board() {
    // columns 8..=11 would be needed
    assert!(Ship::compute_footprint(0, 8, Orientation::Horizontal, 4).is_none());
    assert!(Ship::compute_footprint(7, 0, Orientation::Vertical, 4).is_none());
    assert!(Ship::compute_footprint(10, 0, Orientation::Horizontal, 1).is_none());
    assert!(Ship::compute_footprint(0, 10, Orientation::Vertical, 1).is_none());
    // exactly touching the edge is fine
    assert!(Ship::compute_footprint(0, 6, Orientation::Horizontal, 4).is_some());
    assert!(Ship::compute_footprint(9, 9, Orientation::Vertical, 1).is_some());
}

#[test]
fn test_legal_placement_respects_buffer() {
    let mut fleet = Fleet::empty();
    fleet
        .try_place(ShipKind::Destroyer, 2, 2, Orientation::Horizontal)
        .unwrap();

    // diagonal neighbour of (2, 3)
    assert!(!Ship::is_legal_placement(3, 4, Orientation::Horizontal, 1, &fleet));
    // directly below
    assert!(!Ship::is_legal_placement(3, 2, Orientation::Vertical, 2, &fleet));
    // overlapping
    assert!(!Ship::is_legal_placement(2, 3, Orientation::Horizontal, 1, &fleet));
    // one clear cell between ships
    assert!(Ship::is_legal_placement(2, 5, Orientation::Horizontal, 3, &fleet));
    assert!(Ship::is_legal_placement(4, 0, Orientation::Horizontal, 4, &fleet));
    // off board is never legal
    assert!(!Ship::is_legal_placement(0, 8, Orientation::Horizontal, 4, &fleet));
}

#[test]
fn test_register_hit_and_sunk() {
    let mut fleet = Fleet::empty();
    let id = fleet
        .try_place(ShipKind::Destroyer, 1, 1, Orientation::Horizontal)
        .unwrap();
    let mut ship = *fleet.ship(id);

    assert!(!ship.is_sunk());
    assert!(ship.register_hit(1, 1));
    assert!(!ship.is_sunk());
    // repeat hit is accepted but changes nothing
    assert!(ship.register_hit(1, 1));
    assert_eq!(ship.hits().count_ones(), 1);
    assert!(ship.register_hit(1, 2));
    assert!(ship.is_sunk());
    // miss
    assert!(!ship.register_hit(0, 0));
    assert!(ship.hits().is_subset(&ship.locations()));
}

#[test]
fn test_unplaced_ship_reports_sunk() {
    // Empty footprint equals empty hits: an unplaced ship counts as sunk.
    let ship = Ship::new(ShipKind::Battleship);
    assert!(!ship.is_placed());
    assert!(ship.locations().is_empty());
    assert!(ship.is_sunk());
}
