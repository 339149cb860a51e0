//! Random fleet generation with a bounded placement budget.

use rand::Rng;

use crate::board::Board;
use crate::common::FleetError;
use crate::config;
use crate::coord::Coord;
use crate::ship::{Orientation, Ship};

/// Placement attempts allowed for one whole-fleet layout.
pub const PLACEMENT_BUDGET: usize = 2000;

/// Full layout rebuilds allowed before giving up entirely. A budget this
/// size is never hit with the shipped fleet tables.
const REBUILD_BUDGET: usize = 64;

/// Generate a complete random fleet for a board of `size`.
///
/// Candidate ships are drawn with a random bow and orientation and offered
/// to the board; rejected candidates are discarded and redrawn while the
/// ships already accepted stay put. When a layout burns through the whole
/// placement budget, the partial board is thrown away and generation
/// restarts from an empty grid.
pub fn generate<R: Rng>(rng: &mut R, size: u8, hidden: bool) -> Result<Board, FleetError> {
    let lengths = config::fleet_for(size).ok_or(FleetError::UnsupportedSize(size))?;
    for round in 1..=REBUILD_BUDGET {
        match place_fleet(rng, size, hidden, lengths) {
            Ok(board) => return Ok(board),
            Err(FleetError::Exhausted) => {
                log::debug!("fleet layout stalled on size {size}, rebuilding (round {round})");
            }
            Err(other) => return Err(other),
        }
    }
    Err(FleetError::Exhausted)
}

/// One layout pass: place every length from the table or exhaust the
/// shared attempt budget trying.
fn place_fleet<R: Rng>(
    rng: &mut R,
    size: u8,
    hidden: bool,
    lengths: &[u8],
) -> Result<Board, FleetError> {
    let mut board = Board::new(size, hidden);
    let mut attempts = 0usize;
    for &length in lengths {
        loop {
            if attempts == PLACEMENT_BUDGET {
                return Err(FleetError::Exhausted);
            }
            attempts += 1;
            let bow = Coord::new(rng.random_range(1..=size), rng.random_range(1..=size));
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if board.add_ship(Ship::new(bow, length, orientation)).is_ok() {
                break;
            }
        }
    }
    Ok(board)
}
