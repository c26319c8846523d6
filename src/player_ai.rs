//! Automated targeting policy.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::Coord;
use crate::player::TargetPolicy;

/// Uniform random gunner. Repeated cells are filtered out by the
/// board's rejection, which simply triggers another draw.
pub struct AiPolicy {
    size: i32,
}

impl AiPolicy {
    pub fn new(size: i32) -> Self {
        Self { size }
    }
}

impl TargetPolicy for AiPolicy {
    fn choose(&mut self, rng: &mut SmallRng) -> Coord {
        Coord::new(
            rng.random_range(0..self.size),
            rng.random_range(0..self.size),
        )
    }
}
