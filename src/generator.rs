//! Randomized fleet placement with bounded retries.

use alloc::vec::Vec;
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Coord};
use crate::ship::{Orientation, Ship};

/// Placement attempts allowed across one whole board build before the
/// partially filled board is discarded.
const MAX_ATTEMPTS: u32 = 2000;

/// Places a fixed fleet onto fresh boards until a build succeeds.
#[derive(Debug)]
pub struct BoardGenerator {
    size: i32,
    fleet: Vec<i32>,
}

impl BoardGenerator {
    /// Validate the fleet configuration up front. A fleet that can
    /// never fit fails here, before any board is generated.
    pub fn new(size: i32, fleet: &[i32]) -> Result<Self, BoardError> {
        if size < 1 || fleet.is_empty() || fleet.iter().any(|&l| l < 1 || l > size) {
            return Err(BoardError::InvalidFleet);
        }
        Ok(Self {
            size,
            fleet: fleet.to_vec(),
        })
    }

    /// Generate a fully placed board. The outer loop restarts from a
    /// fresh board whenever a single build exhausts its attempt
    /// budget, so this always terminates for a fleet the board can
    /// host.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Board {
        loop {
            if let Some(board) = self.try_build(rng) {
                return board;
            }
            log::debug!("board build exhausted {} attempts, restarting", MAX_ATTEMPTS);
        }
    }

    /// One bounded build: place each fleet length in order, retrying
    /// random bows until it fits or the shared attempt budget runs
    /// out.
    fn try_build<R: Rng>(&self, rng: &mut R) -> Option<Board> {
        let mut board = Board::new(self.size);
        let mut attempts = 0;
        for &length in &self.fleet {
            loop {
                attempts += 1;
                if attempts > MAX_ATTEMPTS {
                    return None;
                }
                // Bows are sampled one past the board edge; add_ship
                // rejects the overflow, keeping valid placements
                // uniform.
                let bow = Coord::new(
                    rng.random_range(0..=self.size),
                    rng.random_range(0..=self.size),
                );
                let orientation = if rng.random() {
                    Orientation::Vertical
                } else {
                    Orientation::Horizontal
                };
                if board.add_ship(Ship::new(bow, length, orientation)).is_ok() {
                    break;
                }
            }
        }
        board.begin();
        Some(board)
    }
}
