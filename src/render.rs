#![cfg(feature = "std")]

//! Text rendering of the target grid for terminal front ends.

use std::fmt::Write;
use std::string::String;

use crate::config::BOARD_SIZE;
use crate::fleet::{CellView, Fleet};

/// Character drawn for one cell. Unhit ships stay hidden unless `reveal`.
pub fn cell_char(fleet: &Fleet, row: usize, col: usize, reveal: bool) -> char {
    match fleet.cell_view(row, col) {
        CellView::Sunk(kind) => kind.symbol(),
        CellView::Hit => 'X',
        CellView::Missed => 'o',
        CellView::Unknown if reveal && fleet.ship_at(row, col).is_some() => '#',
        CellView::Unknown => '.',
    }
}

/// Render the grid, status line and score.
pub fn render_board(fleet: &Fleet, reveal: bool) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_board(&mut out, fleet, reveal);
    out
}

fn write_board(out: &mut String, fleet: &Fleet, reveal: bool) -> std::fmt::Result {
    writeln!(out, "    ╔═══════════════════════╗")?;
    write!(out, "    ║  ")?;
    for c in 0..BOARD_SIZE as usize {
        write!(out, " {}", (b'A' + c as u8) as char)?;
    }
    writeln!(out, " ║")?;
    writeln!(out, "    ╠═══════════════════════╣")?;
    for r in 0..BOARD_SIZE as usize {
        write!(out, "    ║ {:>2}", r)?;
        for c in 0..BOARD_SIZE as usize {
            write!(out, " {}", cell_char(fleet, r, c, reveal))?;
        }
        writeln!(out, " ║")?;
    }
    writeln!(out, "    ╚═══════════════════════╝")?;
    if reveal {
        writeln!(out, "    Legend: X=Hit  o=Miss  #=Ship  B/C/D/S=Sunk  .=Water")?;
    } else {
        writeln!(out, "    Legend: X=Hit  o=Miss  B/C/D/S=Sunk  .=Unknown")?;
    }
    writeln!(out)?;
    writeln!(out, "    {}", fleet.game_status())?;
    write!(out, "    Score: {}   Shots: {}", fleet.sunk_ships(), fleet.shots())?;
    Ok(())
}
