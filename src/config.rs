//! Fixed board configurations.

pub const MIN_BOARD_SIZE: u8 = 6;
pub const MAX_BOARD_SIZE: u8 = 9;

/// Ship lengths making up the fleet for a given board size, longest first.
/// Returns `None` for sizes without a table.
pub fn fleet_for(size: u8) -> Option<&'static [u8]> {
    match size {
        6 => Some(&[3, 3, 2, 2, 1, 1, 1]),
        7 => Some(&[3, 3, 2, 2, 2, 1, 1, 1]),
        8 => Some(&[3, 3, 3, 2, 2, 2, 1, 1, 1]),
        9 => Some(&[4, 3, 3, 3, 2, 2, 2, 1, 1, 1]),
        _ => None,
    }
}

/// Number of ships in the fleet for `size`; sinking this many wins.
pub fn ship_count(size: u8) -> Option<usize> {
    fleet_for(size).map(<[u8]>::len)
}
