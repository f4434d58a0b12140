//! Heuristic upper-bound score estimation.

use crate::types::Board;
use tracing::instrument;

/// Estimates the maximum achievable score for a set of cell values.
///
/// This is a deterministic greedy heuristic, not a true maximum: the
/// values are sorted descending and disjoint pairs are assigned from the
/// front in a fixed priority order:
///
/// - Add: ranks 0,1 (sum)
/// - Multiply: ranks 2,3 (product)
/// - Subtract: ranks 4,5 (larger minus smaller)
/// - Divide: ranks 6,7 (larger over smaller, skipped when the smaller is 0)
///
/// Each term contributes only when enough ranked values remain, so six
/// values yield the Add, Multiply, and Subtract terms only. Empty input
/// yields 0. The pairing order and operation priority are fixed rather
/// than searched, so the estimate can under- or over-state the true best
/// score; downstream display depends on this exact rule, so keep it.
#[instrument(skip(values), fields(count = values.len()))]
pub fn estimate_max(values: &[u8]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut total = 0.0;

    if sorted.len() >= 2 {
        total += sorted[0] as f64 + sorted[1] as f64;
    }
    if sorted.len() >= 4 {
        total += sorted[2] as f64 * sorted[3] as f64;
    }
    if sorted.len() >= 6 {
        // Sorted descending, so rank 4 is the larger operand.
        total += sorted[4] as f64 - sorted[5] as f64;
    }
    if sorted.len() >= 8 {
        let larger = sorted[6] as f64;
        let smaller = sorted[7] as f64;
        if smaller != 0.0 {
            total += larger / smaller;
        }
    }

    total
}

impl Board {
    /// Estimates the maximum achievable score for this board.
    pub fn estimate_max(&self) -> f64 {
        estimate_max(&self.values())
    }
}
