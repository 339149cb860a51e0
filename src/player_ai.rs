//! Search-then-hunt targeting for the computer opponent.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::{FleetError, ShotOutcome, TargetError};
use crate::coord::Coord;
use crate::fleet;
use crate::player::Player;

/// Neighbor probe order while hunting: down, up, right, left.
const HUNT_OFFSETS: [(i16, i16); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Random draws tried before falling back to a uniform pick from the
/// enumerated free cells.
const SEARCH_DRAW_CAP: usize = 1000;

/// Automated opponent.
///
/// In the search phase it fires at random fresh cells. Once a shot comes
/// back `Damaged`, the damaged coordinate becomes the pending lead and the
/// hunt phase walks its orthogonal neighbors until the ship sinks or the
/// trail goes cold.
pub struct AiPlayer {
    pending: Option<Coord>,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Uniformly random untargeted cell on the enemy board.
    fn search<R: Rng>(rng: &mut R, enemy: &Board) -> Result<Coord, TargetError> {
        let free: Vec<Coord> = enemy.coords().filter(|&c| !enemy.is_targeted(c)).collect();
        if free.is_empty() {
            return Err(TargetError::NoTargetsAvailable);
        }
        for _ in 0..SEARCH_DRAW_CAP {
            let candidate = Coord::new(
                rng.random_range(1..=enemy.size()),
                rng.random_range(1..=enemy.size()),
            );
            if !enemy.is_targeted(candidate) {
                return Ok(candidate);
            }
        }
        Ok(free[rng.random_range(0..free.len())])
    }

    /// First unblocked orthogonal neighbor of the pending lead, which then
    /// becomes the new lead. `None` when there is no lead or all four
    /// neighbors are blocked.
    fn hunt(&mut self, enemy: &Board) -> Option<Coord> {
        let pending = self.pending?;
        for (dr, dc) in HUNT_OFFSETS {
            if let Some(next) = pending.offset(dr, dc) {
                if !enemy.is_out_of_bounds(next) && !enemy.is_targeted(next) {
                    self.pending = Some(next);
                    return Some(next);
                }
            }
        }
        // Trail went cold; the next Damaged outcome re-arms the hunt.
        self.pending = None;
        None
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        size: u8,
        hidden: bool,
    ) -> Result<Board, FleetError> {
        fleet::generate(rng, size, hidden)
    }

    fn next_target(&mut self, rng: &mut SmallRng, enemy: &Board) -> Result<Coord, TargetError> {
        if let Some(target) = self.hunt(enemy) {
            log::debug!("hunting a damaged ship at {target}");
            return Ok(target);
        }
        Self::search(rng, enemy)
    }

    fn observe_outcome(&mut self, coord: Coord, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Damaged => self.pending = Some(coord),
            ShotOutcome::Sunk | ShotOutcome::Miss => self.pending = None,
        }
    }
}
