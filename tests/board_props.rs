use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use seabattle::{fleet, Coord, Orientation, Ship};

fn orientations() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ship_cells_contiguous_and_distinct(
        row in 1u8..=9,
        col in 1u8..=9,
        length in 1u8..=4,
        orientation in orientations(),
    ) {
        let ship = Ship::new(Coord::new(row, col), length, orientation);
        let cells: Vec<Coord> = ship.cells().collect();
        prop_assert_eq!(cells.len(), length as usize);

        let distinct: HashSet<Coord> = cells.iter().copied().collect();
        prop_assert_eq!(distinct.len(), cells.len());

        for pair in cells.windows(2) {
            let contiguous = match orientation {
                Orientation::Horizontal => {
                    pair[1].row == pair[0].row && pair[1].col == pair[0].col + 1
                }
                Orientation::Vertical => {
                    pair[1].col == pair[0].col && pair[1].row == pair[0].row + 1
                }
            };
            prop_assert!(contiguous);
        }
    }

    #[test]
    fn sunk_count_tracks_dead_ships(seed in any::<u64>(), shots in 0usize..=48) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = fleet::generate(&mut rng, 6, false).unwrap();
        let mut previous = 0;
        for _ in 0..shots {
            let coord = Coord::new(rng.random_range(1..=6), rng.random_range(1..=6));
            let _ = board.shoot(coord);
            let dead = board.ships().iter().filter(|s| s.is_sunk()).count();
            prop_assert_eq!(board.sunk_count(), dead);
            prop_assert!(board.sunk_count() >= previous);
            previous = board.sunk_count();
        }
    }

    #[test]
    fn second_shot_at_a_cell_is_rejected(seed in any::<u64>(), row in 1u8..=6, col in 1u8..=6) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = fleet::generate(&mut rng, 6, false).unwrap();
        let coord = Coord::new(row, col);
        if board.shoot(coord).is_ok() {
            prop_assert!(board.shoot(coord).is_err());
        }
    }

    #[test]
    fn contour_is_pure_for_fixed_state(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = fleet::generate(&mut rng, 6, false).unwrap();
        let probe = &board.ships()[0];
        prop_assert_eq!(board.contour_cells(probe), board.contour_cells(probe));
    }
}
