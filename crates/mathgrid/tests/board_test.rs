//! Tests for board generation and coordinates.

use mathgrid::{Board, Coord, BOARD_SIZE, MAX_CELL_VALUE, MIN_CELL_VALUE};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_generated_board_shape() {
    let board = Board::generate();
    assert_eq!(board.values().len(), BOARD_SIZE * BOARD_SIZE);
    assert_eq!(Board::coords().count(), 25);
}

#[test]
fn test_generated_values_in_range() {
    // A handful of boards to exercise the generator.
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let board = Board::generate_with(&mut rng);
        for value in board.values() {
            assert!(value >= MIN_CELL_VALUE, "value {} below range", value);
            assert!(value <= MAX_CELL_VALUE, "value {} above range", value);
        }
    }
}

#[test]
fn test_generated_cells_all_enabled() {
    let board = Board::generate();
    for coord in Board::coords() {
        assert!(board.is_enabled(coord));
        assert!(!board.get(coord).unwrap().disabled);
    }
}

#[test]
fn test_generate_repeatable_with_seeded_rng() {
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    assert_eq!(Board::generate_with(&mut a), Board::generate_with(&mut b));
}

#[test]
fn test_from_values_row_major() {
    let mut values = [[0u8; BOARD_SIZE]; BOARD_SIZE];
    for (row, row_values) in values.iter_mut().enumerate() {
        for (col, v) in row_values.iter_mut().enumerate() {
            *v = (row * BOARD_SIZE + col) as u8;
        }
    }
    let board = Board::from_values(values);
    let flat = board.values();
    assert_eq!(flat[0], 0);
    assert_eq!(flat[7], 7);
    assert_eq!(flat[24], 24);
}

#[test]
fn test_coord_index_conversion() {
    let coord = Coord { row: 2, col: 3 };
    assert_eq!(coord.to_index(), 13);
    assert_eq!(Coord::from_index(13), Some(coord));
    assert_eq!(Coord::from_index(0), Coord::new(0, 0));
    assert_eq!(Coord::from_index(24), Coord::new(4, 4));
    assert_eq!(Coord::from_index(25), None);
    assert_eq!(Coord::new(5, 0), None);
    assert_eq!(Coord::new(0, 5), None);
}

#[test]
fn test_get_out_of_bounds() {
    let board = Board::generate();
    assert_eq!(board.get(Coord { row: 9, col: 9 }), None);
    assert!(!board.is_enabled(Coord { row: 9, col: 9 }));
}
