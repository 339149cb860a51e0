//! Shared game vocabulary: shot outcomes, cell states and error types.

use thiserror::Error;

use crate::coord::Coord;

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// No ship at the target cell.
    Miss,
    /// A ship was hit but still has intact cells.
    Damaged,
    /// The hit removed the ship's last intact cell.
    Sunk,
}

impl ShotOutcome {
    /// Whether the attacking side shoots again. Hitting a ship, sinking
    /// included, keeps the turn; a miss passes it to the opponent.
    pub fn repeats_turn(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Authoritative per-cell state maintained by the board.
///
/// Strategies and renderers query this instead of inspecting display
/// glyphs; masking a hidden board is purely a render concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Water,
    /// Intact ship cell.
    Ship,
    /// Buffer cell around a placed ship, reserved against placement.
    Contour,
    /// Shot ship cell, ship not yet sunk.
    Hit,
    /// Shot ship cell belonging to a sunk ship.
    Sunk,
    /// Shot water cell.
    Miss,
}

/// Why a ship could not be added to a board.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    #[error("ship extends outside the board")]
    OutOfBounds,
    #[error("ship overlaps or touches an occupied cell")]
    CellOccupied,
    #[error("{0:?} is not a valid orientation")]
    InvalidOrientation(char),
}

/// Why a shot was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    #[error("shot at {0} lands outside the board")]
    OutOfBounds(Coord),
    #[error("{0} has already been targeted")]
    AlreadyShot(Coord),
}

/// Why a strategy could not produce a target.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("cannot read coordinate from {input:?}: {reason}")]
    MalformedCoordinate { input: String, reason: &'static str },
    #[error("the opponent board has no targetable cells left")]
    NoTargetsAvailable,
}

impl TargetError {
    pub(crate) fn malformed(input: &str, reason: &'static str) -> Self {
        TargetError::MalformedCoordinate {
            input: input.to_owned(),
            reason,
        }
    }
}

/// Why fleet generation gave up.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FleetError {
    #[error("no fleet table for board size {0}")]
    UnsupportedSize(u8),
    #[error("fleet generation exhausted its placement budget")]
    Exhausted,
}
