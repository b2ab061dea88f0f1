/*
 * This source code is licensed under the Business Source License 1.1.
 */

//! Shape-preserving global rescale of a 2-D score grid.
//!
//! [`scale_matrix`] flattens the grid row-major, apportions the flattened
//! sequence once, and reshapes the result back into the original row lengths.
//! The per-cell ceiling and the remainder ranking therefore operate globally
//! across the whole matrix, not per row: the grand total is exact by
//! construction, while individual row and column totals land wherever
//! proportionality puts them. Deliberate trade-off — a blueprint's committee
//! checks the grand total, not sub-targets per row.
//!
//! The summation helpers here feed the "total" and "rank" columns of the
//! derived blueprint tables.

use alloc::vec;
use alloc::vec::Vec;

use crate::apportion::apportion;

/// Rescale `rows` so the grand total equals `target_sum` exactly.
///
/// The output has identical shape: same row count, same length per row.
/// Ragged rows are allowed and preserved. See [`crate::apportion::apportion`]
/// for the distribution and ceiling rules.
///
/// ```rust
/// use tos_core::matrix::scale_matrix;
///
/// let scaled = scale_matrix(&[vec![5, 3], vec![2, 0]], 100, None);
/// assert_eq!(scaled, vec![vec![50, 30], vec![20, 0]]);
///
/// // All-zero input never divides by zero.
/// assert_eq!(
///     scale_matrix(&[vec![0, 0], vec![0, 0]], 100, None),
///     vec![vec![0, 0], vec![0, 0]],
/// );
/// ```
pub fn scale_matrix(rows: &[Vec<u32>], target_sum: u32, ceiling: Option<u32>) -> Vec<Vec<u32>> {
    let flat: Vec<u32> = rows.iter().flat_map(|row| row.iter().copied()).collect();
    let scaled = apportion(&flat, target_sum, ceiling);

    let mut cells = scaled.into_iter();
    rows.iter()
        .map(|row| cells.by_ref().take(row.len()).collect())
        .collect()
}

/// Sum of each row, in row order.
pub fn row_sums(rows: &[Vec<u32>]) -> Vec<u32> {
    rows.iter().map(|row| row.iter().sum()).collect()
}

/// Sum of each column. Short rows contribute zero to the columns they lack.
pub fn col_sums(rows: &[Vec<u32>]) -> Vec<u32> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut sums = vec![0u32; width];
    for row in rows {
        for (j, &v) in row.iter().enumerate() {
            sums[j] += v;
        }
    }
    sums
}

/// Sum of every cell in the grid.
pub fn grand_total(rows: &[Vec<u32>]) -> u32 {
    rows.iter().map(|row| row.iter().sum::<u32>()).sum()
}

// ─── Tests ──────────────────────────────────────────────────────────────────
