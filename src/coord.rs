//! Grid coordinates and the text forms a front end accepts for them.

use core::fmt;

use crate::common::BoardError;
use crate::config::BOARD_SIZE;

/// A validated (row, column) cell on the 10×10 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= BOARD_SIZE as usize || col >= BOARD_SIZE as usize {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(Coord { row, col })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

/// Renders as column letter followed by row number, e.g. `C4`.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'A' + self.col as u8) as char;
        write!(f, "{}{}", col, self.row)
    }
}

/// Parse a cell typed by the player.
///
/// Accepts either a column letter followed by a row number (`C4`), or a
/// row and column pair separated by whitespace or a comma (`4 2`, `4,2`).
/// Rows and columns are zero-based.
pub fn parse_coord(input: &str) -> Result<Coord, BoardError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(BoardError::InvalidCoord("empty input"));
    }

    let first = input
        .chars()
        .next()
        .ok_or(BoardError::InvalidCoord("empty input"))?;
    if first.is_ascii_alphabetic() {
        let col = (first.to_ascii_uppercase() as u8 - b'A') as usize;
        let row = input[1..]
            .trim()
            .parse::<usize>()
            .map_err(|_| BoardError::InvalidCoord("row must be a number 0-9"))?;
        return Coord::new(row, col);
    }

    let mut parts = input
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|part| !part.is_empty());
    let row = parse_index(parts.next())?;
    let col = parse_index(parts.next())?;
    if parts.next().is_some() {
        return Err(BoardError::InvalidCoord("expected exactly two numbers"));
    }
    Coord::new(row, col)
}

fn parse_index(part: Option<&str>) -> Result<usize, BoardError> {
    part.ok_or(BoardError::InvalidCoord("expected a row and a column"))?
        .parse()
        .map_err(|_| BoardError::InvalidCoord("row and column must be numbers 0-9"))
}
