//! Turn sequencing for a two-player session.

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{ShotOutcome, TargetError};
use crate::coord::Coord;
use crate::player::Player;

/// Current status of a game from one side's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnRecord {
    pub attacker: usize,
    pub coord: Coord,
    pub outcome: ShotOutcome,
}

/// A running game: two boards, two players, one RNG.
///
/// `boards[i]` is the fleet owned by `players[i]`; side `i` always fires
/// at board `1 - i`. Alternation follows the repeat-on-hit rule: the
/// attacker keeps the turn after `Damaged` and `Sunk`, a `Miss` passes it.
pub struct GameSession {
    rng: SmallRng,
    players: [Box<dyn Player>; 2],
    boards: [Board; 2],
    shots: [usize; 2],
}

impl GameSession {
    pub fn new(rng: SmallRng, players: [Box<dyn Player>; 2], boards: [Board; 2]) -> Self {
        Self {
            rng,
            players,
            boards,
            shots: [0, 0],
        }
    }

    pub fn board(&self, side: usize) -> &Board {
        &self.boards[side]
    }

    /// Shots side `side` has landed on the opponent, rejections excluded.
    pub fn shots_fired(&self, side: usize) -> usize {
        self.shots[side]
    }

    pub fn status(&self, side: usize) -> GameStatus {
        if self.boards[side].remaining_ships() == 0 {
            GameStatus::Lost
        } else if self.boards[1 - side].remaining_ships() == 0 {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// The side whose opponent has no ships left, once there is one.
    pub fn winner(&self) -> Option<usize> {
        if self.boards[1].remaining_ships() == 0 {
            Some(0)
        } else if self.boards[0].remaining_ships() == 0 {
            Some(1)
        } else {
            None
        }
    }

    /// Execute one shot for `attacker`.
    ///
    /// Rejected shots (out of bounds, already targeted) are recoverable:
    /// the rejection is reported and the strategy is asked again. The
    /// automated strategy only emits fresh in-bounds targets, so only the
    /// interactive path ever loops here.
    pub fn turn(&mut self, attacker: usize) -> Result<TurnRecord, TargetError> {
        let defender = 1 - attacker;
        loop {
            let coord = self.players[attacker].next_target(&mut self.rng, &self.boards[defender])?;
            match self.boards[defender].shoot(coord) {
                Ok(outcome) => {
                    self.shots[attacker] += 1;
                    self.players[attacker].observe_outcome(coord, outcome);
                    self.players[defender].observe_opponent(coord, outcome);
                    return Ok(TurnRecord {
                        attacker,
                        coord,
                        outcome,
                    });
                }
                Err(err) => log::info!("shot rejected: {err}"),
            }
        }
    }

    /// Drive the session to completion and return the winning side.
    pub fn run(&mut self) -> Result<usize, TargetError> {
        let mut attacker = 0;
        loop {
            let record = self.turn(attacker)?;
            if let Some(winner) = self.winner() {
                return Ok(winner);
            }
            if !record.outcome.repeats_turn() {
                attacker = 1 - attacker;
            }
        }
    }
}
