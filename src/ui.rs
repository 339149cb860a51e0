//! Plain-text board rendering.
//!
//! Pure functions from board state to strings; the binary decides when to
//! print. Hidden boards mask intact ships and unrevealed contours as
//! water.

use crate::board::Board;
use crate::common::CellState;
use crate::coord::Coord;

const WATER: char = '≈';
const SHIP: char = '■';
const CONTOUR: char = '•';
const HIT: char = 'x';
const SUNK: char = 'X';
const MISS: char = '*';

fn glyph(board: &Board, coord: Coord) -> char {
    match board.cell(coord).unwrap_or_default() {
        CellState::Water => WATER,
        CellState::Ship => {
            if board.is_hidden() {
                WATER
            } else {
                SHIP
            }
        }
        CellState::Contour => {
            if !board.is_hidden() || board.is_contour_revealed(coord) {
                CONTOUR
            } else {
                WATER
            }
        }
        CellState::Hit => HIT,
        CellState::Sunk => SUNK,
        CellState::Miss => MISS,
    }
}

/// Render a board with column letters across the top and row numbers down
/// the side.
pub fn draw(board: &Board) -> String {
    let size = board.size();
    let mut out = String::from("   ");
    for c in 0..size {
        out.push(' ');
        out.push((b'A' + c) as char);
    }
    out.push('\n');
    for row in 1..=size {
        out.push_str(&format!("{row:2} "));
        for col in 1..=size {
            out.push(' ');
            out.push(glyph(board, Coord::new(row, col)));
        }
        out.push('\n');
    }
    out
}

/// The two-panel player view: enemy waters above the player's own fleet.
pub fn draw_player_view(own: &Board, enemy: &Board) -> String {
    format!("Enemy waters:\n{}\nYour fleet:\n{}", draw(enemy), draw(own))
}
