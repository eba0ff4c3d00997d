use crate::ship::ShipKind;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 10;

/// Fleet composition in placement order, largest ships first.
pub const FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::Battleship,
    ShipKind::Cruiser,
    ShipKind::Cruiser,
    ShipKind::Destroyer,
    ShipKind::Destroyer,
    ShipKind::Destroyer,
    ShipKind::Submarine,
    ShipKind::Submarine,
    ShipKind::Submarine,
    ShipKind::Submarine,
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 * 2 + 2 * 3 + 4;

/// Number of ships of `kind` in the standard fleet.
pub fn fleet_count(kind: ShipKind) -> usize {
    FLEET.iter().filter(|k| **k == kind).count()
}
