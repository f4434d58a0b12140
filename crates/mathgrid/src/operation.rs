//! The four arithmetic operations and the once-each operation pool.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the four arithmetic operations, each usable once per session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Operation {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`), in selection order: first minus second.
    Subtract,
    /// Multiplication (`×`).
    Multiply,
    /// Division (`÷`), in selection order: first over second.
    Divide,
}

impl Operation {
    /// All four operations in display order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Display symbol for this operation.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    /// Parses an operation from its display symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operation::Add),
            "-" => Some(Operation::Subtract),
            "×" => Some(Operation::Multiply),
            "÷" => Some(Operation::Divide),
            _ => None,
        }
    }

    /// Computes `a <op> b`.
    ///
    /// Subtraction and division are order-dependent; callers supply
    /// operands in selection order. Division by zero is a caller
    /// precondition and is not guarded here.
    pub fn evaluate(self, a: f64, b: f64) -> f64 {
        match self {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
            Operation::Multiply => a * b,
            Operation::Divide => a / b,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Evaluates `a <symbol> b` where the operation arrives as a raw tag.
///
/// An unrecognized tag evaluates to 0 rather than failing. This is the
/// defined fallback at the boundary where operation tags are strings;
/// inside the crate the closed [`Operation`] enum makes the case
/// unrepresentable.
#[instrument]
pub fn evaluate_symbol(a: f64, b: f64, symbol: &str) -> f64 {
    match Operation::from_symbol(symbol) {
        Some(op) => op.evaluate(a, b),
        None => 0.0,
    }
}

/// The set of operations not yet used this session.
///
/// Starts with all four; each operation is removed permanently once
/// applied. No operation is usable twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationPool {
    available: Vec<Operation>,
}

impl OperationPool {
    /// Creates a full pool with all four operations.
    pub fn new() -> Self {
        Self {
            available: <Operation as strum::IntoEnumIterator>::iter().collect(),
        }
    }

    /// Checks whether an operation is still available.
    pub fn contains(&self, op: Operation) -> bool {
        self.available.contains(&op)
    }

    /// Removes an operation from the pool. Returns false if it was
    /// already consumed.
    pub(crate) fn take(&mut self, op: Operation) -> bool {
        match self.available.iter().position(|&o| o == op) {
            Some(idx) => {
                self.available.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Checks whether every operation has been used.
    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    /// Remaining operations in display order.
    pub fn remaining(&self) -> &[Operation] {
        &self.available
    }
}

impl Default for OperationPool {
    fn default() -> Self {
        Self::new()
    }
}
