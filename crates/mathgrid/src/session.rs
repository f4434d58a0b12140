//! Session state machine: selection, operation pool, and scoring.

use crate::operation::{Operation, OperationPool};
use crate::score;
use crate::types::{Board, Coord};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Maximum number of simultaneously selected cells.
const SELECTION_CAP: usize = 2;

/// Phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Operations remain; the board accepts input.
    Playing,
    /// All four operations have been applied.
    Over,
}

/// Error surfaced to the user when applying an operation.
///
/// This is the only user-facing error in the game. All other invalid
/// actions (clicking a consumed cell, applying with an incomplete
/// selection, input after the game is over) are silent no-ops.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ApplyError {
    /// The candidate operation is division and the second selected
    /// cell's value is zero. No state changes.
    #[display("Cannot divide by zero")]
    DivisionByZero,
}

impl std::error::Error for ApplyError {}

/// A full game session.
///
/// Holds the board, the remaining operations, the current selection (in
/// click order), the candidate operation, the running score, and the
/// max-score estimate frozen at board creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    board: Board,
    pool: OperationPool,
    selection: Vec<Coord>,
    candidate: Option<Operation>,
    score: f64,
    max_score: f64,
    phase: Phase,
}

impl Session {
    /// Starts a new session with a freshly generated board.
    #[instrument]
    pub fn new() -> Self {
        Self::from_board(Board::generate())
    }

    /// Starts a new session using the supplied random source.
    pub fn with_rng<R: Rng>(rng: &mut R) -> Self {
        Self::from_board(Board::generate_with(rng))
    }

    /// Starts a session on an explicit board. The max-score estimate is
    /// computed here, once, and never recomputed.
    pub fn from_board(board: Board) -> Self {
        let max_score = score::estimate_max(&board.values());
        debug!(max_score, "Session started");
        Self {
            board,
            pool: OperationPool::new(),
            selection: Vec::new(),
            candidate: None,
            score: 0.0,
            max_score,
            phase: Phase::Playing,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Remaining operations.
    pub fn pool(&self) -> &OperationPool {
        &self.pool
    }

    /// Currently selected coordinates, oldest first.
    pub fn selection(&self) -> &[Coord] {
        &self.selection
    }

    /// The chosen-but-uncommitted operation, if any.
    pub fn candidate(&self) -> Option<Operation> {
        self.candidate
    }

    /// Cumulative score so far.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// The heuristic max-score estimate frozen at session start.
    pub fn max_score(&self) -> f64 {
        self.max_score
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the session has ended.
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    /// Toggles a cell's membership in the selection.
    ///
    /// Ignored when the session is over or the cell is consumed.
    /// Selecting a third cell evicts the oldest selection first.
    #[instrument(skip(self))]
    pub fn toggle_cell(&mut self, coord: Coord) {
        if self.phase == Phase::Over {
            debug!(%coord, "Ignoring cell toggle: session over");
            return;
        }
        if !self.board.is_enabled(coord) {
            debug!(%coord, "Ignoring cell toggle: cell consumed or out of bounds");
            return;
        }

        if let Some(idx) = self.selection.iter().position(|&c| c == coord) {
            self.selection.remove(idx);
            debug!(%coord, "Deselected cell");
            return;
        }

        if self.selection.len() == SELECTION_CAP {
            let evicted = self.selection.remove(0);
            debug!(%evicted, "Evicted oldest selection");
        }
        self.selection.push(coord);
        debug!(%coord, "Selected cell");
    }

    /// Sets the candidate operation.
    ///
    /// Ignored when the session is over or the operation has already
    /// been used. Overwrites any previous candidate; nothing is
    /// committed until [`Session::apply`].
    #[instrument(skip(self))]
    pub fn choose_operation(&mut self, op: Operation) {
        if self.phase == Phase::Over {
            debug!(%op, "Ignoring operation choice: session over");
            return;
        }
        if !self.pool.contains(op) {
            debug!(%op, "Ignoring operation choice: already used");
            return;
        }
        self.candidate = Some(op);
    }

    /// Whether apply would act: exactly two cells selected and a
    /// candidate operation set.
    pub fn can_apply(&self) -> bool {
        self.phase == Phase::Playing
            && self.selection.len() == SELECTION_CAP
            && self.candidate.is_some()
    }

    /// Applies the candidate operation to the two selected cells.
    ///
    /// Returns `Ok(None)` without changing state when the selection or
    /// candidate is incomplete. Operands are taken in selection order
    /// (first selected is the left operand). On success both cells are
    /// consumed, the operation leaves the pool, the result is added to
    /// the score, and the selection and candidate are cleared; when the
    /// pool empties the session ends.
    ///
    /// # Errors
    ///
    /// Returns [`ApplyError::DivisionByZero`] when the candidate is
    /// division and the second selected cell's value is zero. No state
    /// changes in that case.
    #[instrument(skip(self))]
    pub fn apply(&mut self) -> Result<Option<f64>, ApplyError> {
        if !self.can_apply() {
            debug!("Ignoring apply: incomplete selection or no candidate");
            return Ok(None);
        }

        // can_apply guarantees two selections and a candidate.
        let (first, second) = (self.selection[0], self.selection[1]);
        let Some(op) = self.candidate else {
            return Ok(None);
        };
        let a = self.board.get(first).map(|c| c.value).unwrap_or(0) as f64;
        let b = self.board.get(second).map(|c| c.value).unwrap_or(0) as f64;

        if op == Operation::Divide && b == 0.0 {
            warn!(%first, %second, "Rejected apply: division by zero");
            return Err(ApplyError::DivisionByZero);
        }

        let result = op.evaluate(a, b);
        self.board.disable(first);
        self.board.disable(second);
        self.pool.take(op);
        self.score += result;
        self.selection.clear();
        self.candidate = None;

        if self.pool.is_empty() {
            self.phase = Phase::Over;
            debug!(score = self.score, max_score = self.max_score, "Session over");
        }

        debug!(%op, a, b, result, score = self.score, "Applied operation");
        Ok(Some(result))
    }

    /// Restarts with a fresh board; full reset from any phase.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// Restarts with a fresh board drawn from the supplied source.
    pub fn restart_with<R: Rng>(&mut self, rng: &mut R) {
        *self = Self::with_rng(rng);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
