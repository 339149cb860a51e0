//! Board state: ship placements, reserved buffers and shot history.

use std::collections::HashSet;

use crate::common::{CellState, PlacementError, ShotError, ShotOutcome};
use crate::coord::Coord;
use crate::ship::Ship;

/// One side's private grid.
///
/// Two coordinate sets sit next to the authoritative cell grid and serve
/// different phases: `reserved` holds ship and contour cells, is grown by
/// placement and frozen once setup ends; `shots` records fired cells
/// during play. `sealed` covers the buffer of sunk ships, which becomes
/// both visible to renderers and unavailable for further targeting.
#[derive(Debug)]
pub struct Board {
    size: u8,
    hidden: bool,
    cells: Vec<CellState>,
    reserved: HashSet<Coord>,
    shots: HashSet<Coord>,
    sealed: HashSet<Coord>,
    ships: Vec<Ship>,
    sunk: usize,
}

impl Board {
    /// Create an empty `size`×`size` board. Hidden boards ask renderers to
    /// mask intact ships; nothing else reads the flag.
    pub fn new(size: u8, hidden: bool) -> Self {
        Self {
            size,
            hidden,
            cells: vec![CellState::Water; size as usize * size as usize],
            reserved: HashSet::new(),
            shots: HashSet::new(),
            sealed: HashSet::new(),
            ships: Vec::new(),
            sunk: 0,
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Ships placed but not yet sunk; zero means this side has lost.
    pub fn remaining_ships(&self) -> usize {
        self.ships.len() - self.sunk
    }

    pub fn is_out_of_bounds(&self, coord: Coord) -> bool {
        coord.row < 1 || coord.col < 1 || coord.row > self.size || coord.col > self.size
    }

    /// Unavailable for ship placement: occupied by a ship or inside the
    /// buffer of one.
    pub fn is_reserved(&self, coord: Coord) -> bool {
        self.reserved.contains(&coord)
    }

    /// Unavailable for targeting: already fired at, or part of the sealed
    /// buffer around a wreck.
    pub fn is_targeted(&self, coord: Coord) -> bool {
        self.shots.contains(&coord) || self.sealed.contains(&coord)
    }

    /// Authoritative state of a cell, `None` outside the grid.
    pub fn cell(&self, coord: Coord) -> Option<CellState> {
        if self.is_out_of_bounds(coord) {
            return None;
        }
        Some(self.cells[self.index(coord)])
    }

    /// Whether a contour cell was revealed by a sinking. Hidden boards
    /// keep unrevealed contours masked.
    pub fn is_contour_revealed(&self, coord: Coord) -> bool {
        self.sealed.contains(&coord)
    }

    /// All grid coordinates, row-major.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (1..=size).flat_map(move |row| (1..=size).map(move |col| Coord::new(row, col)))
    }

    /// The 8-connected buffer around `ship`: every neighbor of an occupied
    /// cell, diagonals included, clipped to the grid and excluding cells
    /// that are already reserved or targeted. Pure with respect to current
    /// board state.
    pub fn contour_cells(&self, ship: &Ship) -> HashSet<Coord> {
        let mut contour = HashSet::new();
        for cell in ship.cells() {
            for near in cell.neighbors() {
                if !self.is_out_of_bounds(near) && !self.is_reserved(near) && !self.is_targeted(near)
                {
                    contour.insert(near);
                }
            }
        }
        contour
    }

    /// Place a ship, reserving its cells and its contour.
    ///
    /// The contour reservation is what keeps fleets apart: a later ship
    /// landing on or diagonally next to this one collides with a reserved
    /// cell and is rejected.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), PlacementError> {
        if ship.cells().any(|cell| self.is_out_of_bounds(cell)) {
            return Err(PlacementError::OutOfBounds);
        }
        if ship.cells().any(|cell| self.is_reserved(cell)) {
            return Err(PlacementError::CellOccupied);
        }
        for cell in ship.cells() {
            self.set_cell(cell, CellState::Ship);
            self.reserved.insert(cell);
        }
        for cell in self.contour_cells(&ship) {
            self.set_cell(cell, CellState::Contour);
            self.reserved.insert(cell);
        }
        self.ships.push(ship);
        Ok(())
    }

    /// Resolve a shot at `coord`.
    ///
    /// Scans ships in placement order and applies the hit to the first
    /// ship occupying the cell; cells belong to at most one ship, so the
    /// scan order only decides who reports the hit.
    pub fn shoot(&mut self, coord: Coord) -> Result<ShotOutcome, ShotError> {
        if self.is_out_of_bounds(coord) {
            return Err(ShotError::OutOfBounds(coord));
        }
        if self.is_targeted(coord) {
            return Err(ShotError::AlreadyShot(coord));
        }
        self.shots.insert(coord);
        if let Some(index) = self.ships.iter().position(|s| s.is_hit_by(coord)) {
            self.ships[index].apply_hit();
            if self.ships[index].is_sunk() {
                self.sunk += 1;
                self.seal_wreck(index);
                return Ok(ShotOutcome::Sunk);
            }
            self.set_cell(coord, CellState::Hit);
            return Ok(ShotOutcome::Damaged);
        }
        self.set_cell(coord, CellState::Miss);
        Ok(ShotOutcome::Miss)
    }

    /// Flip a freshly sunk ship's cells to `Sunk` and seal its buffer:
    /// the surrounding water cannot hold another ship, so it is revealed
    /// to renderers and excluded from further targeting.
    fn seal_wreck(&mut self, index: usize) {
        let cells: Vec<Coord> = self.ships[index].cells().collect();
        for &cell in &cells {
            self.set_cell(cell, CellState::Sunk);
        }
        for &cell in &cells {
            for near in cell.neighbors() {
                if self.cell(near) == Some(CellState::Contour) {
                    self.sealed.insert(near);
                }
            }
        }
    }

    fn set_cell(&mut self, coord: Coord, state: CellState) {
        let index = self.index(coord);
        self.cells[index] = state;
    }

    fn index(&self, coord: Coord) -> usize {
        (coord.row as usize - 1) * self.size as usize + (coord.col as usize - 1)
    }
}
