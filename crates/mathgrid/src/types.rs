//! Core domain types: cells, coordinates, and the 5x5 board.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Board side length. The board is always square.
pub const BOARD_SIZE: usize = 5;

/// Smallest value a generated cell can hold.
pub const MIN_CELL_VALUE: u8 = 1;

/// Largest value a generated cell can hold.
pub const MAX_CELL_VALUE: u8 = 10;

/// A coordinate on the board, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index (0-4).
    pub row: usize,
    /// Column index (0-4).
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate. Returns `None` when out of bounds.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Converts to a flat row-major index (0-24).
    pub fn to_index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Creates a coordinate from a flat row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < BOARD_SIZE * BOARD_SIZE {
            Some(Self {
                row: index / BOARD_SIZE,
                col: index % BOARD_SIZE,
            })
        } else {
            None
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One board cell: a fixed value and a consumed flag.
///
/// The value never changes after generation; `disabled` flips to true
/// exactly once, when the cell is consumed by an applied operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The numeric value shown on the cell.
    pub value: u8,
    /// Whether the cell has been consumed.
    pub disabled: bool,
}

impl Cell {
    /// Creates a fresh, enabled cell.
    pub fn new(value: u8) -> Self {
        Self {
            value,
            disabled: false,
        }
    }
}

/// Fixed 5x5 board of cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Generates a board with values drawn uniformly from 1..=10,
    /// all cells enabled. Each call is independent of prior calls.
    #[instrument]
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generates a board using the supplied random source.
    pub fn generate_with<R: Rng>(rng: &mut R) -> Self {
        let cells = std::array::from_fn(|_| {
            std::array::from_fn(|_| Cell::new(rng.gen_range(MIN_CELL_VALUE..=MAX_CELL_VALUE)))
        });
        Self { cells }
    }

    /// Builds a board from explicit values, row-major, all cells enabled.
    pub fn from_values(values: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let cells = std::array::from_fn(|row| std::array::from_fn(|col| Cell::new(values[row][col])));
        Self { cells }
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.cells
            .get(coord.row)
            .and_then(|row| row.get(coord.col))
            .copied()
    }

    /// Checks whether the cell at the coordinate is still enabled.
    pub fn is_enabled(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(cell) if !cell.disabled)
    }

    /// Marks the cell at the coordinate as consumed.
    pub(crate) fn disable(&mut self, coord: Coord) {
        if let Some(row) = self.cells.get_mut(coord.row) {
            if let Some(cell) = row.get_mut(coord.col) {
                cell.disabled = true;
            }
        }
    }

    /// All cell values flattened in row-major order, consumed or not.
    pub fn values(&self) -> Vec<u8> {
        self.cells
            .iter()
            .flat_map(|row| row.iter().map(|cell| cell.value))
            .collect()
    }

    /// Iterates over all coordinates in row-major order.
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE * BOARD_SIZE).filter_map(Coord::from_index)
    }
}
