//! Grid coordinates and neighborhood geometry.

use core::fmt;

/// A 1-based (row, column) position on a board.
///
/// Row `1` is the top row and column `1` the leftmost column. Columns are
/// written as letters and rows as digits, so `Coord::new(4, 3)` displays as
/// `C4`. Upper-bound validity depends on the board size and is checked by
/// [`Board::is_out_of_bounds`](crate::Board::is_out_of_bounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

/// Row/column deltas of the 8-connected neighborhood.
const NEAR: [(i16, i16); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Coord {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Shift by (`dr`, `dc`), returning `None` when either component leaves
    /// the representable 1-based range.
    pub fn offset(self, dr: i16, dc: i16) -> Option<Coord> {
        let row = self.row as i16 + dr;
        let col = self.col as i16 + dc;
        if row < 1 || col < 1 || row > u8::MAX as i16 || col > u8::MAX as i16 {
            return None;
        }
        Some(Coord::new(row as u8, col as u8))
    }

    /// The up-to-eight surrounding cells, diagonals included. Cells below
    /// row/column 1 are dropped; clipping to the board's far edge is the
    /// board's job.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        NEAR.iter().filter_map(move |&(dr, dc)| self.offset(dr, dc))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'A' + self.col.saturating_sub(1)) as char;
        write!(f, "{}{}", col, self.row)
    }
}
