#![cfg(feature = "std")]
//! Text rendering of a board.

use std::fmt::Write;

use crate::board::{Board, CellState};
use crate::common::Coord;

/// Render a board as a text grid with 1-based headers. On a hidden
/// board ship cells are drawn as empty, so the layout stays secret.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::new();
    out.push_str("  ");
    for c in 0..size {
        let _ = write!(out, "| {} ", c + 1);
    }
    out.push_str("|\n");
    for r in 0..size {
        let _ = write!(out, "{} ", r + 1);
        for c in 0..size {
            let cell = board.cell(Coord::new(r, c));
            let glyph = match cell {
                CellState::Empty => "0",
                CellState::Ship if board.hidden() => "0",
                CellState::Ship => "■",
                CellState::Miss => ".",
                CellState::Hit => "X",
            };
            let _ = write!(out, "| {} ", glyph);
        }
        out.push_str("|\n");
    }
    out
}
