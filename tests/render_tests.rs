use battleships::render::{cell_char, render_board};
use battleships::{Fleet, Orientation, ShipKind};

fn small_fleet() -> Fleet {
    let mut fleet = Fleet::empty();
    fleet
        .try_place(ShipKind::Destroyer, 2, 2, Orientation::Horizontal)
        .unwrap();
    fleet
        .try_place(ShipKind::Submarine, 6, 6, Orientation::Horizontal)
        .unwrap();
    fleet
}

#[test]
fn test_hidden_and_revealed_cells() {
    let fleet = small_fleet();
    assert_eq!(cell_char(&fleet, 2, 2, false), '.');
    assert_eq!(cell_char(&fleet, 2, 2, true), '#');
    assert_eq!(cell_char(&fleet, 0, 0, true), '.');
}

#[test]
fn test_shot_cells() {
    let mut fleet = small_fleet();
    fleet.fire(2, 2);
    fleet.fire(0, 0);
    assert_eq!(cell_char(&fleet, 2, 2, false), 'X');
    assert_eq!(cell_char(&fleet, 0, 0, false), 'o');
    fleet.fire(6, 6);
    assert_eq!(cell_char(&fleet, 6, 6, false), 'S');
}

#[test]
fn test_board_text() {
    let mut fleet = small_fleet();
    fleet.fire(6, 6);
    let text = render_board(&fleet, false);
    assert!(text.contains("A submarine has been sunk!"));
    assert!(text.contains("Score: 1"));
    assert!(text.contains("Shots: 1"));
    assert!(text.contains("║  6 . . . . . . S . . . ║"));
}
