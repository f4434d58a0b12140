//! Mathgrid - an arithmetic pairing puzzle
//!
//! A 5x5 board of random integers in 1..=10, four arithmetic operations
//! each usable once, and a running score. The player pairs cells and
//! spends operations on them; once all four operations are gone the
//! session ends and the final score is compared against a heuristic
//! upper-bound estimate frozen at board creation.
//!
//! # Architecture
//!
//! - **Board**: fixed 5x5 grid of value/consumed cells
//! - **Operation**: the closed four-operation enum and the once-each pool
//! - **Score**: the deterministic greedy max-score estimator
//! - **Session**: the state machine a front-end drives
//!
//! # Example
//!
//! ```
//! use mathgrid::{Coord, Operation, Session};
//!
//! let mut session = Session::new();
//! session.toggle_cell(Coord { row: 0, col: 0 });
//! session.toggle_cell(Coord { row: 0, col: 1 });
//! session.choose_operation(Operation::Add);
//! let result = session.apply()?;
//! assert!(result.is_some());
//! # Ok::<(), mathgrid::ApplyError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod operation;
mod score;
mod session;
mod types;

// Crate-level exports - board types
pub use types::{Board, Cell, Coord, BOARD_SIZE, MAX_CELL_VALUE, MIN_CELL_VALUE};

// Crate-level exports - operations
pub use operation::{evaluate_symbol, Operation, OperationPool};

// Crate-level exports - scoring
pub use score::estimate_max;

// Crate-level exports - session state machine
pub use session::{ApplyError, Phase, Session};
