//! Human player: console prompts, coordinate parsing, manual placement.

use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::{FleetError, ShotOutcome, TargetError};
use crate::config;
use crate::coord::Coord;
use crate::fleet;
use crate::player::Player;
use crate::ship::{Orientation, Ship};
use crate::ui;

/// Attempts allowed when randomly placing a single ship on a partially
/// hand-built board.
const SINGLE_SHIP_ATTEMPTS: usize = 200;

pub struct CliPlayer {
    manual_placement: bool,
}

impl CliPlayer {
    pub fn new() -> Self {
        Self {
            manual_placement: false,
        }
    }

    /// Variant that asks the user to place each ship by hand.
    pub fn with_manual_placement() -> Self {
        Self {
            manual_placement: true,
        }
    }

    fn place_manually(
        &self,
        rng: &mut SmallRng,
        size: u8,
        hidden: bool,
    ) -> Result<Board, FleetError> {
        let lengths = config::fleet_for(size).ok_or(FleetError::UnsupportedSize(size))?;
        let mut board = Board::new(size, hidden);
        println!("Place your ships as `c4 h` (bow, then h/v). Press enter for a random spot.");
        for &length in lengths {
            loop {
                println!("{}", ui::draw(&board));
                let line = read_line(&format!("Place a ship of length {length}: "));
                if line.is_empty() {
                    if place_random_ship(rng, &mut board, length) {
                        break;
                    }
                    println!("No room left for that ship; pick a spot yourself.");
                    continue;
                }
                match parse_placement(&line, size) {
                    Ok((bow, orientation)) => {
                        match board.add_ship(Ship::new(bow, length, orientation)) {
                            Ok(()) => break,
                            Err(err) => println!("{err}"),
                        }
                    }
                    Err(err) => println!("{err}"),
                }
            }
        }
        Ok(board)
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a move like `c4`: column letter, case-insensitive, then row
/// number, both within `size`.
pub fn parse_coord(input: &str, size: u8) -> Result<Coord, TargetError> {
    let input = input.trim();
    let mut chars = input.chars();
    let first = chars
        .next()
        .ok_or_else(|| TargetError::malformed(input, "empty input"))?;
    if !first.is_ascii_alphabetic() {
        return Err(TargetError::malformed(input, "column must be a letter"));
    }
    let col = first.to_ascii_uppercase() as u8 - b'A' + 1;
    let row: u8 = chars
        .as_str()
        .parse()
        .map_err(|_| TargetError::malformed(input, "row must be a number"))?;
    if col > size || row < 1 || row > size {
        return Err(TargetError::malformed(input, "coordinate is outside the board"));
    }
    Ok(Coord::new(row, col))
}

/// Parse a manual placement like `c4 h`. A missing orientation letter
/// defaults to horizontal.
fn parse_placement(line: &str, size: u8) -> Result<(Coord, Orientation), String> {
    let mut parts = line.split_whitespace();
    let bow = parse_coord(parts.next().unwrap_or(""), size).map_err(|e| e.to_string())?;
    let letter = parts.next().and_then(|t| t.chars().next()).unwrap_or('h');
    let orientation = Orientation::from_input(letter).map_err(|e| e.to_string())?;
    Ok((bow, orientation))
}

fn place_random_ship<R: Rng>(rng: &mut R, board: &mut Board, length: u8) -> bool {
    let size = board.size();
    for _ in 0..SINGLE_SHIP_ATTEMPTS {
        let bow = Coord::new(rng.random_range(1..=size), rng.random_range(1..=size));
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        if board.add_ship(Ship::new(bow, length, orientation)).is_ok() {
            return true;
        }
    }
    false
}

fn read_line(prompt: &str) -> String {
    print!("{prompt}");
    io::stdout().flush().unwrap();
    let mut line = String::new();
    io::stdin().read_line(&mut line).unwrap();
    line.trim().to_owned()
}

impl Player for CliPlayer {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        size: u8,
        hidden: bool,
    ) -> Result<Board, FleetError> {
        if self.manual_placement {
            self.place_manually(rng, size, hidden)
        } else {
            fleet::generate(rng, size, hidden)
        }
    }

    fn next_target(&mut self, _rng: &mut SmallRng, enemy: &Board) -> Result<Coord, TargetError> {
        if enemy.coords().all(|c| enemy.is_targeted(c)) {
            return Err(TargetError::NoTargetsAvailable);
        }
        loop {
            let line = read_line("Your move (e.g. c4): ");
            match parse_coord(&line, enemy.size()) {
                Ok(coord) => return Ok(coord),
                Err(err) => println!("{err}"),
            }
        }
    }

    fn observe_outcome(&mut self, coord: Coord, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Miss => println!("{coord}: miss."),
            ShotOutcome::Damaged => println!("{coord}: hit! Fire again."),
            ShotOutcome::Sunk => println!("{coord}: ship destroyed! Fire again."),
        }
    }

    fn observe_opponent(&mut self, coord: Coord, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Miss => println!("The computer fires at {coord} and misses."),
            ShotOutcome::Damaged => println!("The computer fires at {coord} and hits your ship!"),
            ShotOutcome::Sunk => println!("The computer fires at {coord} and sinks your ship!"),
        }
    }
}
