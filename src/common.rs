//! Common types for Battleships: board errors, shot outcomes and status text.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::ship::ShipKind;

/// Result of a shot fired through [`Fleet::fire`](crate::Fleet::fire).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed on a ship that is still afloat.
    Hit,
    /// Shot landed in open water.
    Miss,
    /// Shot sank a ship, carrying its kind.
    Sunk(ShipKind),
    /// Shot sank the last ship.
    GameOver,
}

/// Status line shown to the player. `Display` yields the exact text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// No shot resolved yet.
    Ready,
    Hit,
    Missed,
    Sunk(ShipKind),
    GameOver,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ready => write!(f, "Click on a point to shoot!"),
            GameStatus::Hit => write!(f, "Target hit!"),
            GameStatus::Missed => write!(f, "Target missed!"),
            GameStatus::Sunk(kind) => write!(f, "A {} has been sunk!", kind),
            GameStatus::GameOver => write!(f, "Game over!"),
        }
    }
}

/// Errors returned by manual placement and coordinate parsing.
///
/// Random placement never surfaces these: a rejected candidate is simply
/// resampled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// Coordinate outside the 10×10 grid.
    OutOfBounds { row: usize, col: usize },
    /// Ship footprint would run off the board.
    ShipOutOfBounds,
    /// Ship would overlap or touch an already placed ship.
    NotOpenSea,
    /// Every ship of this kind in the fleet is already placed.
    FleetFull(ShipKind),
    /// Coordinate text could not be parsed.
    InvalidCoord(&'static str),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is off the board", row, col)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::NotOpenSea => {
                write!(f, "Ship placement overlaps or touches another ship")
            }
            BoardError::FleetFull(kind) => write!(f, "No unplaced {} left in the fleet", kind),
            BoardError::InvalidCoord(msg) => write!(f, "Invalid coordinate: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
