//! Ship definitions and placement geometry using our `BitBoard`.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::config::BOARD_SIZE;
use crate::fleet::Fleet;

/// Cell set on the 10×10 board.
pub type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn from_horizontal(horizontal: bool) -> Self {
        if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// The four kinds of vessel in the fleet, each with a fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipKind {
    Battleship,
    Cruiser,
    Destroyer,
    Submarine,
}

impl ShipKind {
    /// Every kind, longest first.
    pub const ALL: [ShipKind; 4] = [
        ShipKind::Battleship,
        ShipKind::Cruiser,
        ShipKind::Destroyer,
        ShipKind::Submarine,
    ];

    pub const fn length(self) -> usize {
        match self {
            ShipKind::Battleship => 4,
            ShipKind::Cruiser => 3,
            ShipKind::Destroyer => 2,
            ShipKind::Submarine => 1,
        }
    }

    /// Lower-case name, as shown in status messages.
    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Battleship => "battleship",
            ShipKind::Cruiser => "cruiser",
            ShipKind::Destroyer => "destroyer",
            ShipKind::Submarine => "submarine",
        }
    }

    /// Single-letter marker used by text renderers.
    pub const fn symbol(self) -> char {
        match self {
            ShipKind::Battleship => 'B',
            ShipKind::Cruiser => 'C',
            ShipKind::Destroyer => 'D',
            ShipKind::Submarine => 'S',
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One vessel: its kind, the cells it occupies and the cells hit so far.
///
/// A ship starts unplaced with an empty footprint. Placement fixes the
/// footprint; hits only ever grow and always stay inside it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    locations: BB,
    hits: BB,
}

impl Ship {
    /// Create an unplaced ship.
    pub fn new(kind: ShipKind) -> Self {
        Ship {
            kind,
            locations: BB::new(),
            hits: BB::new(),
        }
    }

    /// Cells covered by a ship of `length` anchored at (`row`, `col`).
    ///
    /// Horizontal ships extend to the right, vertical ships downwards.
    /// Returns `None` if any cell would fall off the board.
    pub fn compute_footprint(
        row: usize,
        col: usize,
        orientation: Orientation,
        length: usize,
    ) -> Option<BB> {
        let mut cells = BB::new();
        for i in 0..length {
            let (r, c) = match orientation {
                Orientation::Horizontal => (row, col.checked_add(i)?),
                Orientation::Vertical => (row.checked_add(i)?, col),
            };
            cells.set(r, c).ok()?;
        }
        Some(cells)
    }

    /// Whether a ship of `length` fits at (`row`, `col`) without leaving the
    /// board or touching any ship already placed in `fleet`.
    pub fn is_legal_placement(
        row: usize,
        col: usize,
        orientation: Orientation,
        length: usize,
        fleet: &Fleet,
    ) -> bool {
        match Self::compute_footprint(row, col, orientation, length) {
            Some(cells) => cells.iter_set_bits().all(|(r, c)| fleet.is_open_sea(r, c)),
            None => false,
        }
    }

    /// Fix this ship's footprint. Overwrites any previous placement.
    ///
    /// Returns the new footprint, or `None` (leaving the ship untouched) if
    /// it would run off the board. Registering the cells on the board is
    /// the fleet's job.
    pub(crate) fn place(&mut self, row: usize, col: usize, orientation: Orientation) -> Option<BB> {
        let cells = Self::compute_footprint(row, col, orientation, self.length())?;
        self.locations = cells;
        Some(cells)
    }

    /// Register a shot at (`row`, `col`).
    /// Returns `true` if the cell belongs to this ship; repeated hits are no-ops.
    pub fn register_hit(&mut self, row: usize, col: usize) -> bool {
        if self.locations.contains(row, col) {
            let _ = self.hits.set(row, col);
            true
        } else {
            false
        }
    }

    /// Every footprint cell has been hit.
    ///
    /// An unplaced ship has no cells and no hits, so it reports sunk.
    pub fn is_sunk(&self) -> bool {
        self.hits == self.locations
    }

    pub fn is_placed(&self) -> bool {
        !self.locations.is_empty()
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn length(&self) -> usize {
        self.kind.length()
    }

    pub fn locations(&self) -> BB {
        self.locations
    }

    pub fn hits(&self) -> BB {
        self.hits
    }

    /// `true` if (`row`, `col`) is part of this ship.
    pub fn occupies(&self, row: usize, col: usize) -> bool {
        self.locations.contains(row, col)
    }

    /// `true` if (`row`, `col`) is part of this ship and has been hit.
    pub fn is_hit_at(&self, row: usize, col: usize) -> bool {
        self.hits.contains(row, col)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ kind: {}, cells: {}, hits: {} }}",
            self.kind,
            self.locations.count_ones(),
            self.hits.count_ones(),
        )
    }
}
