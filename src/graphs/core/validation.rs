//! Validation helpers — reusable checks for observations, weights, and
//! hyperparameters.
//!
//! Purpose
//! -------
//! Centralize small, reusable validation routines used across the
//! graph-learning stack. These helpers enforce basic sanity checks for the
//! observation matrix, edge-weight vectors, degree targets, and the Student-t
//! degrees of freedom, so higher-level constructors and models can fail fast
//! with structured errors.
//!
//! Key behaviors
//! -------------
//! - Validate observation matrices (shape and finiteness).
//! - Validate edge-weight vectors against the expected edge count,
//!   finiteness, and non-negativity.
//! - Validate degree-target values (finiteness) and the Student-t `nu`
//!   hyperparameter (finite, > 2).
//!
//! Conventions
//! -----------
//! - Indices are 0-based and follow the usual Rust/ndarray conventions.
//! - Validation functions return [`GraphResult`] and never panic on invalid
//!   *inputs*; panics are reserved for programming errors elsewhere (e.g.,
//!   shape mismatches in the operator module).
//! - This module contains no I/O and no logging; it only inspects numeric
//!   values and array shapes.
//!
//! Downstream usage
//! ----------------
//! - Call these helpers from constructors ([`GraphData`](super::data::GraphData),
//!   [`HeavyTail`](super::heavy_tail::HeavyTail),
//!   [`WeightInit`](super::init::WeightInit),
//!   [`DegreeTarget`](super::options::DegreeTarget)) to enforce documented
//!   invariants at the boundaries of the API.
//!
//! Testing notes
//! -------------
//! - Unit tests exercise each helper on representative valid and invalid
//!   inputs, including boundary cases (nu exactly 2, zeros, infinities, NaNs,
//!   length off-by-one).
use crate::graphs::errors::{GraphError, GraphResult};
use ndarray::{ArrayView1, ArrayView2};

/// Validate an observation matrix: shape `n×p` with `n ≥ 2`, `p ≥ 2`, and
/// only finite entries.
///
/// Parameters
/// ----------
/// - `x`: `ArrayView2<f64>`
///   Candidate observation matrix (observations in rows).
///
/// Returns
/// -------
/// `GraphResult<()>`
///   - `Ok(())` if the matrix is admissible.
///   - `Err(GraphError)` describing the first violation encountered.
///
/// Errors
/// ------
/// - `GraphError::TooFewObservations` when `x.nrows() < 2`.
/// - `GraphError::TooFewVertices` when `x.ncols() < 2`.
/// - `GraphError::NonFiniteObservation` for the first NaN/±∞ entry, with its
///   row and column.
///
/// Panics
/// ------
/// - Never panics.
pub fn validate_observations(x: ArrayView2<f64>) -> GraphResult<()> {
    if x.nrows() < 2 {
        return Err(GraphError::TooFewObservations { n: x.nrows() });
    }
    if x.ncols() < 2 {
        return Err(GraphError::TooFewVertices { p: x.ncols() });
    }
    for ((row, col), &value) in x.indexed_iter() {
        if !value.is_finite() {
            return Err(GraphError::NonFiniteObservation { row, col, value });
        }
    }
    Ok(())
}

/// Validate the Student-t degrees of freedom `nu`.
///
/// Parameters
/// ----------
/// - `nu`: `f64`
///   Candidate degrees of freedom. Must be finite and strictly greater
///   than 2 so the observation model has finite variance.
///
/// Returns
/// -------
/// `GraphResult<f64>`
///   - `Ok(nu)` if `nu` is finite and `> 2`.
///   - `Err(GraphError::InvalidDegreesOfFreedom)` otherwise, with a
///     descriptive reason.
///
/// Panics
/// ------
/// - Never panics.
///
/// Examples
/// --------
/// ```rust
/// # use rust_graphlearn::graphs::core::validation::validate_degrees_of_freedom;
/// # use rust_graphlearn::graphs::errors::GraphError;
/// assert!(validate_degrees_of_freedom(4.0).is_ok());
/// assert!(matches!(
///     validate_degrees_of_freedom(2.0),
///     Err(GraphError::InvalidDegreesOfFreedom { .. })
/// ));
/// ```
pub fn validate_degrees_of_freedom(nu: f64) -> GraphResult<f64> {
    if !nu.is_finite() {
        return Err(GraphError::InvalidDegreesOfFreedom {
            nu,
            reason: "Degrees of freedom must be finite.",
        });
    }
    if nu <= 2.0 {
        return Err(GraphError::InvalidDegreesOfFreedom {
            nu,
            reason: "Degrees of freedom must exceed 2 for a finite-variance model.",
        });
    }
    Ok(nu)
}

/// Validate an edge-weight vector: expected length, finite, non-negative.
///
/// Parameters
/// ----------
/// - `w`: `ArrayView1<f64>`
///   Candidate edge-weight vector.
/// - `expected_len`: `usize`
///   Expected number of edges, `p(p−1)/2`.
///
/// Returns
/// -------
/// `GraphResult<()>`
///   - `Ok(())` if `w.len() == expected_len` and every entry is finite
///     and ≥ 0.
///   - `Err(GraphError)` describing the first violation.
///
/// Errors
/// ------
/// - `GraphError::WeightLengthMismatch` when the length differs.
/// - `GraphError::NonFiniteWeight` for the first NaN/±∞ entry.
/// - `GraphError::NegativeWeight` for the first negative entry.
///
/// Panics
/// ------
/// - Never panics.
pub fn validate_weight_vector(w: ArrayView1<f64>, expected_len: usize) -> GraphResult<()> {
    if w.len() != expected_len {
        return Err(GraphError::WeightLengthMismatch { expected: expected_len, actual: w.len() });
    }
    for (index, &value) in w.iter().enumerate() {
        if !value.is_finite() {
            return Err(GraphError::NonFiniteWeight { index, value });
        }
        if value < 0.0 {
            return Err(GraphError::NegativeWeight { index, value });
        }
    }
    Ok(())
}

/// Validate degree-target values (finiteness only).
///
/// Parameters
/// ----------
/// - `d`: `ArrayView1<f64>`
///   Candidate degree-target values (any length; length checks happen where
///   the vertex count is known).
///
/// Returns
/// -------
/// `GraphResult<()>`
///   - `Ok(())` if every entry is finite.
///   - `Err(GraphError::NonFiniteDegreeTarget)` for the first NaN/±∞ entry.
///
/// Panics
/// ------
/// - Never panics.
pub fn validate_degree_values(d: ArrayView1<f64>) -> GraphResult<()> {
    for (index, &value) in d.iter().enumerate() {
        if !value.is_finite() {
            return Err(GraphError::NonFiniteDegreeTarget { index, value });
        }
    }
    Ok(())
}
