//! Interface implemented by the two kinds of combatants.

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{FleetError, ShotOutcome, TargetError};
use crate::coord::Coord;

pub trait Player {
    /// Produce this player's own board, fleet placed, for a game of
    /// `size`. `hidden` is forwarded to the board so renderers mask it.
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        size: u8,
        hidden: bool,
    ) -> Result<Board, FleetError>;

    /// Choose the next coordinate to fire at on the opponent's board. The
    /// strategy may read the board's busy state but never mutates it.
    fn next_target(&mut self, rng: &mut SmallRng, enemy: &Board) -> Result<Coord, TargetError>;

    /// Observe the outcome of this player's own shot.
    fn observe_outcome(&mut self, _coord: Coord, _outcome: ShotOutcome) {}

    /// Observe an opponent shot landing on this player's board.
    fn observe_opponent(&mut self, _coord: Coord, _outcome: ShotOutcome) {}
}
