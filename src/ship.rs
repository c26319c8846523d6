//! Ship geometry and health tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::common::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// A linear ship: a bow coordinate, a length along one axis, and the
/// number of unhit cells remaining.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Coord,
    length: i32,
    orientation: Orientation,
    health: i32,
}

impl Ship {
    /// Build a ship with full health. Bounds are not checked here;
    /// the board validates every cell when the ship is placed.
    pub fn new(bow: Coord, length: i32, orientation: Orientation) -> Self {
        Self {
            bow,
            length,
            orientation,
            health: length,
        }
    }

    /// The ordered cells the ship occupies, derived from bow,
    /// length and orientation.
    pub fn dots(&self) -> Vec<Coord> {
        (0..self.length)
            .map(|i| match self.orientation {
                Orientation::Vertical => Coord::new(self.bow.row + i, self.bow.col),
                Orientation::Horizontal => Coord::new(self.bow.row, self.bow.col + i),
            })
            .collect()
    }

    /// Whether `target` lands on one of the ship's cells.
    pub fn is_hit_by(&self, target: Coord) -> bool {
        self.dots().contains(&target)
    }

    /// Remove one point of health. Callers only hit a given cell once
    /// (the board blocks repeat shots), so this never double-counts.
    pub(crate) fn damage(&mut self) {
        self.health -= 1;
    }

    pub fn bow(&self) -> Coord {
        self.bow
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ bow: ({}, {}), length: {}, orientation: {:?}, health: {} }}",
            self.bow.row, self.bow.col, self.length, self.orientation, self.health,
        )
    }
}
