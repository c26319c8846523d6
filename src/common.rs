//! Common types: coordinates, shot results and crate-wide errors.

use core::fmt;

/// A (row, column) position on a board, 0-based.
///
/// Fields are signed so contour offsets and deliberately out-of-range
/// inputs (the generator's inclusive upper bound, a `0` typed at the
/// prompt) reach the bounds check instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-based, matching the prompt format
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot missed all ships.
    Miss,
    /// Shot hit an undepleted ship cell.
    Hit,
    /// Shot reduced a ship's health to zero.
    Sunk,
}

impl ShotResult {
    /// A hit or a sink grants the shooter another turn.
    pub fn grants_extra_turn(self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Errors returned by board, generator and match operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Target or placement coordinate lies outside the grid.
    OutOfBounds,
    /// Cell was already shot at or is otherwise blocked.
    AlreadyTargeted,
    /// Placement overlaps or touches another ship, or leaves the grid.
    InvalidPlacement,
    /// Fleet configuration cannot fit the requested board.
    InvalidFleet,
    /// A turn was requested on a match that already has a winner.
    MatchFinished,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "shot is outside the board"),
            BoardError::AlreadyTargeted => write!(f, "this cell was already targeted"),
            BoardError::InvalidPlacement => write!(f, "ship placement is invalid"),
            BoardError::InvalidFleet => write!(f, "fleet configuration is invalid"),
            BoardError::MatchFinished => write!(f, "the match is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
