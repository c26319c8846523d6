//! Turn dispatch between two combatants.

use rand::rngs::SmallRng;

use crate::common::{BoardError, Coord, ShotResult};
use crate::player::Combatant;

/// The two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Human,
    Machine,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Machine,
            Side::Machine => Side::Human,
        }
    }
}

/// Current match state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    AwaitingTurn(Side),
    Won(Side),
}

/// The accepted shot of one completed turn, for the presentation
/// layer to announce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub side: Side,
    pub target: Coord,
    pub result: ShotResult,
}

/// Alternates turns between two combatants until one side's fleet is
/// fully sunk. A hit or a sink grants the shooter another turn.
pub struct Match {
    human: Combatant,
    machine: Combatant,
    turn: i64,
    state: MatchState,
}

impl Match {
    /// Turn counter starts at zero and even turns belong to the
    /// human, so the human moves first.
    pub fn new(human: Combatant, machine: Combatant) -> Self {
        Self {
            human,
            machine,
            turn: 0,
            state: MatchState::AwaitingTurn(Side::Human),
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            MatchState::Won(side) => Some(side),
            MatchState::AwaitingTurn(_) => None,
        }
    }

    pub fn human(&self) -> &Combatant {
        &self.human
    }

    pub fn machine(&self) -> &Combatant {
        &self.machine
    }

    /// Run one turn of the active side. The board shot at is checked
    /// for defeat first, then the shooter's own board; the first
    /// defeated board ends the match.
    pub fn step(&mut self, rng: &mut SmallRng) -> Result<StepReport, BoardError> {
        let side = match self.state {
            MatchState::AwaitingTurn(side) => side,
            MatchState::Won(_) => return Err(BoardError::MatchFinished),
        };
        let (attacker, defender) = match side {
            Side::Human => (&mut self.human, &mut self.machine),
            Side::Machine => (&mut self.machine, &mut self.human),
        };
        let (target, result) = attacker.take_turn(rng, &mut defender.board)?;

        if defender.board.defeated() {
            log::info!("{:?} wins after {} turns", side, self.turn + 1);
            self.state = MatchState::Won(side);
        } else if attacker.board.defeated() {
            self.state = MatchState::Won(side.opponent());
        } else {
            if result.grants_extra_turn() {
                self.turn -= 1;
            }
            self.turn += 1;
            self.state = MatchState::AwaitingTurn(if self.turn % 2 == 0 {
                Side::Human
            } else {
                Side::Machine
            });
        }
        Ok(StepReport {
            side,
            target,
            result,
        })
    }

    /// Drive the match to completion and return the winner. Only
    /// sensible with non-blocking policies on both sides.
    pub fn run(&mut self, rng: &mut SmallRng) -> Result<Side, BoardError> {
        loop {
            self.step(rng)?;
            if let Some(winner) = self.winner() {
                return Ok(winner);
            }
        }
    }
}
