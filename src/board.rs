//! Board state: grid, blocked cells, ships and shot resolution.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;

use crate::common::{BoardError, Coord, ShotResult};
use crate::ship::Ship;

/// Displayable state of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Ship,
    Miss,
    Hit,
}

/// The 8-neighborhood of a cell, plus the cell itself.
const NEAR: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A square board owning its ships.
///
/// `blocked` serves two phases that share one set: during placement it
/// holds ship cells and their contours (nothing may be placed there),
/// and after [`Board::begin`] clears it, it tracks cells already shot
/// at. The two phases are separated by exactly one `begin` call.
pub struct Board {
    size: i32,
    hidden: bool,
    grid: Vec<CellState>,
    blocked: BTreeSet<Coord>,
    ships: Vec<Ship>,
    sunk_count: usize,
}

impl Board {
    /// Create an empty board with `size * size` cells.
    pub fn new(size: i32) -> Self {
        Self {
            size,
            hidden: false,
            grid: vec![CellState::Empty; (size * size) as usize],
            blocked: BTreeSet::new(),
            ships: Vec::new(),
            sunk_count: 0,
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// When set, renderers must draw ship cells as empty.
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// State of the cell at `d`. Panics if `d` is outside the board;
    /// renderers iterate `0..size` so this never trips in practice.
    pub fn cell(&self, d: Coord) -> CellState {
        self.grid[(d.row * self.size + d.col) as usize]
    }

    fn set_cell(&mut self, d: Coord, state: CellState) {
        self.grid[(d.row * self.size + d.col) as usize] = state;
    }

    /// Whether `d` falls outside `[0, size)` on either axis.
    pub fn is_outside(&self, d: Coord) -> bool {
        !(0 <= d.row && d.row < self.size && 0 <= d.col && d.col < self.size)
    }

    /// Ships on the board, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships whose health has reached zero.
    pub fn sunk_count(&self) -> usize {
        self.sunk_count
    }

    /// Block every in-bounds cell in the 8-neighborhood of every ship
    /// cell (the cell itself included). With `reveal` the ring is also
    /// drawn as misses, used when a sunk ship's surroundings are
    /// auto-revealed.
    fn mark_contour(&mut self, ship: &Ship, reveal: bool) {
        for d in ship.dots() {
            for (dr, dc) in NEAR {
                let cur = Coord::new(d.row + dr, d.col + dc);
                if !self.is_outside(cur) && !self.blocked.contains(&cur) {
                    if reveal {
                        self.set_cell(cur, CellState::Miss);
                    }
                    self.blocked.insert(cur);
                }
            }
        }
    }

    /// Place a ship, rejecting any cell that leaves the board or
    /// touches an existing ship. Validation is a full pre-pass, so a
    /// failed placement leaves the board untouched.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        for d in ship.dots() {
            if self.is_outside(d) || self.blocked.contains(&d) {
                return Err(BoardError::InvalidPlacement);
            }
        }
        for d in ship.dots() {
            self.set_cell(d, CellState::Ship);
            self.blocked.insert(d);
        }
        self.ships.push(ship);
        self.mark_contour(&ship, false);
        Ok(())
    }

    /// Resolve a shot at `target`.
    pub fn shoot(&mut self, target: Coord) -> Result<ShotResult, BoardError> {
        if self.is_outside(target) {
            return Err(BoardError::OutOfBounds);
        }
        if self.blocked.contains(&target) {
            return Err(BoardError::AlreadyTargeted);
        }
        self.blocked.insert(target);

        // Ships never overlap, so first match is the only match.
        if let Some(i) = self.ships.iter().position(|s| s.is_hit_by(target)) {
            self.ships[i].damage();
            self.set_cell(target, CellState::Hit);
            if self.ships[i].is_sunk() {
                self.sunk_count += 1;
                let sunk = self.ships[i];
                self.mark_contour(&sunk, true);
                return Ok(ShotResult::Sunk);
            }
            return Ok(ShotResult::Hit);
        }

        self.set_cell(target, CellState::Miss);
        Ok(ShotResult::Miss)
    }

    /// Clear the blocked set once placement is finished, so shot
    /// tracking starts from an empty set. Ship geometry is kept.
    pub fn begin(&mut self) {
        self.blocked.clear();
    }

    /// True when every ship has been sunk. Vacuously true for a board
    /// with no ships.
    pub fn defeated(&self) -> bool {
        self.sunk_count == self.ships.len()
    }
}
