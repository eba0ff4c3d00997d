//! Board state for a single-player game: the fleet, its placement, and shot
//! resolution.

use core::fmt;

use log::{debug, info, trace};
use rand::Rng;

use crate::common::{BoardError, GameStatus, ShotOutcome};
use crate::config::{BOARD_SIZE, FLEET, NUM_SHIPS};
use crate::ship::{Orientation, Ship, ShipKind, BB};

const GRID: usize = BOARD_SIZE as usize;

/// Index of a ship within its fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipId(usize);

impl ShipId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// How a front end should draw one cell of the target grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    /// Not shot at, or holding a ship that has not been hit there.
    Unknown,
    /// Shot at and empty.
    Missed,
    /// Hit segment of a ship still afloat.
    Hit,
    /// Segment of a sunk ship.
    Sunk(ShipKind),
}

/// The full board: ships, shots, and the running score.
///
/// Ships live in a fixed arena in [`FLEET`] order; the grid maps each
/// occupied cell to the index of its ship.
pub struct Fleet {
    ships: [Ship; NUM_SHIPS],
    grid: [[Option<ShipId>; GRID]; GRID],
    occupied: BB,
    hit_locations: BB,
    sunk_ships: usize,
    shots: usize,
    status: GameStatus,
    game_over: bool,
}

impl Fleet {
    /// Create a fleet, placing every ship at random when `auto_place` is set.
    ///
    /// Pass `auto_place = false` to get an empty board for manual placement
    /// through [`Fleet::try_place`].
    pub fn new<R: Rng>(rng: &mut R, auto_place: bool) -> Self {
        let mut fleet = Self::empty();
        if auto_place {
            fleet.randomly_place_all_ships(rng);
        }
        fleet
    }

    /// A board with the full fleet unplaced.
    pub fn empty() -> Self {
        Fleet {
            ships: core::array::from_fn(|i| Ship::new(FLEET[i])),
            grid: [[None; GRID]; GRID],
            occupied: BB::new(),
            hit_locations: BB::new(),
            sunk_ships: 0,
            shots: 0,
            status: GameStatus::Ready,
            game_over: false,
        }
    }

    /// `true` if no placed ship occupies (`row`, `col`) or any of its eight
    /// neighbours.
    pub fn is_open_sea(&self, row: usize, col: usize) -> bool {
        for r in row.saturating_sub(1)..=row.saturating_add(1) {
            for c in col.saturating_sub(1)..=col.saturating_add(1) {
                if self.occupied.contains(r, c) {
                    return false;
                }
            }
        }
        true
    }

    /// Place every unplaced ship at a uniformly random legal position.
    ///
    /// Candidates are resampled until one is legal, with no retry cap. The
    /// fixed fleet always fits on an empty 10×10 board, so this terminates
    /// with probability one; a board already crowded by manual placement
    /// may never finish.
    pub fn randomly_place_all_ships<R: Rng>(&mut self, rng: &mut R) {
        for index in 0..NUM_SHIPS {
            if self.ships[index].is_placed() {
                continue;
            }
            let length = self.ships[index].length();
            let mut attempts = 0usize;
            loop {
                attempts += 1;
                let row = rng.random_range(0..GRID);
                let col = rng.random_range(0..GRID);
                let orientation = Orientation::from_horizontal(rng.random_bool(0.5));
                if Ship::is_legal_placement(row, col, orientation, length, self) {
                    self.commit(ShipId(index), row, col, orientation);
                    debug!(
                        "placed {} at ({}, {}) {:?} after {} attempts",
                        self.ships[index].kind(),
                        row,
                        col,
                        orientation,
                        attempts
                    );
                    break;
                }
                trace!(
                    "rejected {} at ({}, {}) {:?}",
                    self.ships[index].kind(),
                    row,
                    col,
                    orientation
                );
            }
        }
    }

    /// Manually place the next unplaced ship of `kind`.
    ///
    /// The board is left untouched when the placement is rejected.
    pub fn try_place(
        &mut self,
        kind: ShipKind,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<ShipId, BoardError> {
        let index = self
            .ships
            .iter()
            .position(|ship| ship.kind() == kind && !ship.is_placed())
            .ok_or(BoardError::FleetFull(kind))?;
        let cells = Ship::compute_footprint(row, col, orientation, kind.length())
            .ok_or(BoardError::ShipOutOfBounds)?;
        if !cells.iter_set_bits().all(|(r, c)| self.is_open_sea(r, c)) {
            return Err(BoardError::NotOpenSea);
        }
        let id = ShipId(index);
        self.commit(id, row, col, orientation);
        Ok(id)
    }

    /// Fix the footprint of ship `id` and register its cells on the grid.
    /// Callers have already checked the placement is legal.
    fn commit(&mut self, id: ShipId, row: usize, col: usize, orientation: Orientation) {
        let Some(cells) = self.ships[id.0].place(row, col, orientation) else {
            return;
        };
        for (r, c) in cells.iter_set_bits() {
            self.grid[r][c] = Some(id);
        }
        self.occupied |= cells;
    }

    /// Resolve a shot at (`row`, `col`) and update the status line.
    ///
    /// Returns `true` if a ship occupies the cell. A ship is counted as sunk
    /// only by the first shot that completes it, so repeat shots never
    /// inflate the score. Neither the shot counter nor the game-over gate is
    /// touched here; see [`Fleet::fire`].
    pub fn resolve_shot(&mut self, row: usize, col: usize) -> bool {
        let repeat = self.hit_locations.contains(row, col);
        let _ = self.hit_locations.set(row, col);

        let Some(id) = self.ship_id_at(row, col) else {
            debug!("shot at ({}, {}) missed", row, col);
            self.status = GameStatus::Missed;
            return false;
        };

        self.status = GameStatus::Hit;
        let ship = &mut self.ships[id.0];
        ship.register_hit(row, col);
        debug!("shot at ({}, {}) hit a {}", row, col, ship.kind());

        if ship.is_sunk() && !repeat {
            let kind = ship.kind();
            self.sunk_ships += 1;
            if self.has_unsunk_ships() {
                info!("{} sunk ({}/{})", kind, self.sunk_ships, NUM_SHIPS);
                self.status = GameStatus::Sunk(kind);
            } else {
                info!("last ship sunk, game over");
                self.game_over = true;
                self.status = GameStatus::GameOver;
            }
        }
        true
    }

    /// Front-end entry point: count the shot and resolve it, unless the game
    /// is already over, in which case nothing changes and `None` is returned.
    pub fn fire(&mut self, row: usize, col: usize) -> Option<ShotOutcome> {
        if self.game_over {
            return None;
        }
        self.shots += 1;
        self.resolve_shot(row, col);
        Some(match self.status {
            GameStatus::Sunk(kind) => ShotOutcome::Sunk(kind),
            GameStatus::GameOver => ShotOutcome::GameOver,
            GameStatus::Hit => ShotOutcome::Hit,
            GameStatus::Missed | GameStatus::Ready => ShotOutcome::Miss,
        })
    }

    pub fn has_unsunk_ships(&self) -> bool {
        self.sunk_ships < NUM_SHIPS
    }

    fn ship_id_at(&self, row: usize, col: usize) -> Option<ShipId> {
        self.grid.get(row)?.get(col).copied().flatten()
    }

    /// The ship occupying (`row`, `col`), if any.
    pub fn ship_at(&self, row: usize, col: usize) -> Option<&Ship> {
        self.ship_id_at(row, col).map(|id| &self.ships[id.0])
    }

    pub fn ship(&self, id: ShipId) -> &Ship {
        &self.ships[id.0]
    }

    /// All ships in placement order, placed or not.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Union of every placed ship's footprint.
    pub fn occupied(&self) -> BB {
        self.occupied
    }

    /// Every cell shot at so far, hits and misses alike.
    pub fn hit_locations(&self) -> BB {
        self.hit_locations
    }

    pub fn sunk_ships(&self) -> usize {
        self.sunk_ships
    }

    pub fn shots(&self) -> usize {
        self.shots
    }

    pub fn game_status(&self) -> GameStatus {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Classify a cell for drawing the target grid.
    pub fn cell_view(&self, row: usize, col: usize) -> CellView {
        match self.ship_at(row, col) {
            Some(ship) if ship.is_sunk() => CellView::Sunk(ship.kind()),
            Some(ship) if ship.is_hit_at(row, col) => CellView::Hit,
            Some(_) => CellView::Unknown,
            None if self.hit_locations.contains(row, col) => CellView::Missed,
            None => CellView::Unknown,
        }
    }

    #[cfg(feature = "std")]
    pub fn summary(&self) -> FleetSummary {
        FleetSummary {
            shots: self.shots,
            sunk_ships: self.sunk_ships,
            status: self.status.to_string(),
            game_over: self.game_over,
        }
    }
}

impl fmt::Debug for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fleet")
            .field("ships", &self.ships)
            .field("occupied", &self.occupied)
            .field("hit_locations", &self.hit_locations)
            .field("sunk_ships", &self.sunk_ships)
            .field("shots", &self.shots)
            .field("status", &self.status)
            .field("game_over", &self.game_over)
            .finish()
    }
}

/// Score snapshot reported by front ends and the simulator.
#[cfg(feature = "std")]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FleetSummary {
    pub shots: usize,
    pub sunk_ships: usize,
    pub status: String,
    pub game_over: bool,
}
