//! Python FFI bindings via PyO3.
//!
//! Exposes the three core functions to Python. The worksheet model stays on
//! the Rust side — a Python host supplies plain lists and gets plain lists
//! back.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! from tos_core import apportion, scale_matrix, priorities
//!
//! percent = scale_matrix(raw_rows, 100, ceiling=10)
//! items = scale_matrix(percent, 60)
//! row_ranks = priorities([sum(row) for row in items])  # None for zero rows
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::apportion::apportion as rust_apportion;
use crate::blueprint::{CELL_CEILING, ITEM_TARGET, PERCENT_TARGET};
use crate::matrix::scale_matrix as rust_scale_matrix;
use crate::rank::{priorities as rust_priorities, Priority, MAX_PRIORITY};

fn check_ceiling(ceiling: Option<u32>) -> PyResult<Option<u32>> {
    match ceiling {
        Some(0) => Err(PyValueError::new_err("ceiling must be a positive integer")),
        other => Ok(other),
    }
}

/// Rescale a list of non-negative weights to an exact integer total.
///
/// Args:
///     values: list of non-negative ints
///     target_sum: the exact total the result must sum to
///     ceiling: optional per-element cap, honored whenever the target is
///         reachable underneath it
///
/// Returns:
///     A list of ints with the same length as `values`.
#[pyfunction]
#[pyo3(signature = (values, target_sum, ceiling=None))]
fn apportion(values: Vec<u32>, target_sum: u32, ceiling: Option<u32>) -> PyResult<Vec<u32>> {
    Ok(rust_apportion(&values, target_sum, check_ceiling(ceiling)?))
}

/// Rescale a 2-D grid so its grand total is exact, preserving its shape.
///
/// Args:
///     rows: list of rows of non-negative ints (ragged rows allowed)
///     target_sum: the exact grand total of the result
///     ceiling: optional per-cell cap, applied globally across the grid
///
/// Returns:
///     A list of rows with identical shape.
#[pyfunction]
#[pyo3(signature = (rows, target_sum, ceiling=None))]
fn scale_matrix(
    rows: Vec<Vec<u32>>,
    target_sum: u32,
    ceiling: Option<u32>,
) -> PyResult<Vec<Vec<u32>>> {
    Ok(rust_scale_matrix(&rows, target_sum, check_ceiling(ceiling)?))
}

/// Densely rank totals by descending value, capped at 10.
///
/// Args:
///     totals: list of non-negative ints
///
/// Returns:
///     A list aligned with `totals`: an int rank for positive entries
///     (ties share a rank), `None` for zero entries.
#[pyfunction]
fn priorities(totals: Vec<u32>) -> Vec<Option<u8>> {
    rust_priorities(&totals)
        .into_iter()
        .map(Priority::value)
        .collect()
}

/// tos-core — exact integer apportionment for curriculum test blueprints.
///
/// The three pure functions of the engine: `apportion`, `scale_matrix`,
/// `priorities`. The blueprint constants ship as module attributes.
#[pymodule]
pub fn tos_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(apportion, m)?)?;
    m.add_function(wrap_pyfunction!(scale_matrix, m)?)?;
    m.add_function(wrap_pyfunction!(priorities, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("PERCENT_TARGET", PERCENT_TARGET)?;
    m.add("ITEM_TARGET", ITEM_TARGET)?;
    m.add("CELL_CEILING", CELL_CEILING)?;
    m.add("MAX_PRIORITY", MAX_PRIORITY)?;
    Ok(())
}
