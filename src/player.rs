//! Combatants and their target-selection policies.

use alloc::boxed::Box;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, Coord, ShotResult};

/// How a combatant picks its next target.
pub trait TargetPolicy {
    /// Produce the next target coordinate.
    fn choose(&mut self, rng: &mut SmallRng) -> Coord;

    /// Called when the board rejected `target`, before `choose` is
    /// asked again. Interactive policies use this to re-prompt.
    fn notify_rejected(&mut self, _target: Coord, _err: &BoardError) {}
}

/// One side of the match: its own board plus a targeting policy
/// applied to the opponent's board.
pub struct Combatant {
    policy: Box<dyn TargetPolicy>,
    pub(crate) board: Board,
}

impl Combatant {
    pub fn new(board: Board, policy: Box<dyn TargetPolicy>) -> Self {
        Self { policy, board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play one turn against `enemy`: keep asking the policy for
    /// targets until the board accepts one. Rejections for bad aim
    /// (out of bounds, repeated cell) are reported to the policy and
    /// retried; anything else is fatal. Returns the accepted shot.
    pub fn take_turn(
        &mut self,
        rng: &mut SmallRng,
        enemy: &mut Board,
    ) -> Result<(Coord, ShotResult), BoardError> {
        loop {
            let target = self.policy.choose(rng);
            match enemy.shoot(target) {
                Ok(result) => return Ok((target, result)),
                Err(err @ (BoardError::OutOfBounds | BoardError::AlreadyTargeted)) => {
                    self.policy.notify_rejected(target, &err);
                }
                Err(err) => return Err(err),
            }
        }
    }
}
