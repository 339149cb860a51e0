//! Ship placement geometry and hit tracking.

use crate::common::PlacementError;
use crate::coord::Coord;

/// Orientation of a ship on the board.
///
/// Horizontal ships extend along the columns, vertical ships along the
/// rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Parse the orientation letter used by manual placement input,
    /// case-insensitively: `h` or `v`.
    pub fn from_input(ch: char) -> Result<Self, PlacementError> {
        match ch.to_ascii_lowercase() {
            'h' => Ok(Orientation::Horizontal),
            'v' => Ok(Orientation::Vertical),
            other => Err(PlacementError::InvalidOrientation(other)),
        }
    }
}

/// Legacy numeric encoding: 0 horizontal, 1 vertical.
impl TryFrom<u8> for Orientation {
    type Error = PlacementError;

    fn try_from(value: u8) -> Result<Self, PlacementError> {
        match value {
            0 => Ok(Orientation::Horizontal),
            1 => Ok(Orientation::Vertical),
            other => Err(PlacementError::InvalidOrientation(
                (b'0' + other.min(9)) as char,
            )),
        }
    }
}

/// A ship anchored at its bow, extending `length` cells along its
/// orientation. Only the hit counter mutates after construction; the board
/// that accepts the ship owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    bow: Coord,
    length: u8,
    orientation: Orientation,
    hit_points: u8,
}

impl Ship {
    pub fn new(bow: Coord, length: u8, orientation: Orientation) -> Self {
        Self {
            bow,
            length,
            orientation,
            hit_points: length,
        }
    }

    pub fn bow(&self) -> Coord {
        self.bow
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The cells the ship occupies, bow first. Pure function of bow,
    /// length and orientation; a length-1 ship yields exactly its bow for
    /// either orientation.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.length).map(move |i| {
            let (dr, dc) = match self.orientation {
                Orientation::Horizontal => (0, i),
                Orientation::Vertical => (i, 0),
            };
            // Saturation keeps the walk in range; a clamped cell is out of
            // bounds on every supported board and is rejected at placement.
            Coord::new(
                self.bow.row.saturating_add(dr),
                self.bow.col.saturating_add(dc),
            )
        })
    }

    /// Whether `coord` lies on the ship.
    pub fn is_hit_by(&self, coord: Coord) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Remove one hit point. The board shoots each cell at most once, so
    /// the counter cannot be driven past zero by repeated shots at the
    /// same cell; the decrement still saturates.
    pub fn apply_hit(&mut self) {
        self.hit_points = self.hit_points.saturating_sub(1);
    }

    pub fn is_sunk(&self) -> bool {
        self.hit_points == 0
    }
}
