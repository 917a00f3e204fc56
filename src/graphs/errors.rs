//! Errors for heavy-tailed graph learning (data validation, hyperparameter
//! checks, configuration invariants, and solver failures).
//!
//! This module defines the model error type, [`GraphError`], used across the
//! Python-facing API and the internal Rust core. It implements
//! `Display`/`Error` and converts to `PyErr` when the `python-bindings`
//! feature is enabled.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy).
//! - The observation matrix is `n×p` with `n` observations (rows) over `p`
//!   vertices (columns); edge-weight vectors have length `p(p−1)/2`.
//! - Solver/backend errors are normalized to
//!   [`GraphError::EstimationFailed`] with a human-readable status.
use crate::estimation::errors::EstimationError;

#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

/// Crate-wide result alias for graph-learning operations that may produce
/// [`GraphError`].
pub type GraphResult<T> = Result<T, GraphError>;

/// Unified error type for graph-learning models.
///
/// Covers observation-matrix validation, hyperparameter and configuration
/// checks, initial-weight validation, and solver failures. Implements
/// `Display`/`Error` and converts to a Python `ValueError` at PyO3
/// boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    // ---- Observation-matrix validation ----
    /// Fewer than two observations (rows).
    TooFewObservations { n: usize },

    /// Fewer than two vertices (columns).
    TooFewVertices { p: usize },

    /// An observation entry is NaN/±inf.
    NonFiniteObservation { row: usize, col: usize, value: f64 },

    // ---- Hyperparameters ----
    /// Student-t degrees of freedom must be finite and > 2.
    InvalidDegreesOfFreedom { nu: f64, reason: &'static str },

    // ---- Initial weights ----
    /// Supplied weight vector has the wrong length for the vertex count.
    WeightLengthMismatch { expected: usize, actual: usize },

    /// Weight entries must be finite.
    NonFiniteWeight { index: usize, value: f64 },

    /// Weight entries must be non-negative.
    NegativeWeight { index: usize, value: f64 },

    // ---- Degree target ----
    /// Per-vertex degree target has the wrong length.
    DegreeTargetLengthMismatch { expected: usize, actual: usize },

    /// Degree-target entries must be finite.
    NonFiniteDegreeTarget { index: usize, value: f64 },

    // ---- Configuration ----
    /// Penalty guards must be finite with 0 < min < max.
    InvalidPenaltyGuards { min: f64, max: f64, reason: &'static str },

    // ---- Estimation ----
    /// ADMM solver failed; includes a human-readable status/reason.
    EstimationFailed { status: String },

    /// Model hasn't been fitted yet.
    ModelNotFitted,
}

impl std::error::Error for GraphError {}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Observation-matrix validation ----
            GraphError::TooFewObservations { n } => {
                write!(f, "Observation matrix must have at least 2 rows; got {n}.")
            }
            GraphError::TooFewVertices { p } => {
                write!(f, "Observation matrix must have at least 2 columns; got {p}.")
            }
            GraphError::NonFiniteObservation { row, col, value } => {
                write!(f, "Observation at ({row}, {col}) is non-finite: {value}")
            }
            // ---- Hyperparameters ----
            GraphError::InvalidDegreesOfFreedom { nu, reason } => {
                write!(f, "Degrees of freedom must be finite and > 2; got {nu}. {reason}")
            }
            // ---- Initial weights ----
            GraphError::WeightLengthMismatch { expected, actual } => {
                write!(f, "Weight vector length mismatch: expected {expected}, got {actual}")
            }
            GraphError::NonFiniteWeight { index, value } => {
                write!(f, "Weight at index {index} is non-finite: {value}")
            }
            GraphError::NegativeWeight { index, value } => {
                write!(f, "Weight at index {index} is negative: {value}")
            }
            // ---- Degree target ----
            GraphError::DegreeTargetLengthMismatch { expected, actual } => {
                write!(f, "Degree target length mismatch: expected {expected}, got {actual}")
            }
            GraphError::NonFiniteDegreeTarget { index, value } => {
                write!(f, "Degree target at index {index} is non-finite: {value}")
            }
            // ---- Configuration ----
            GraphError::InvalidPenaltyGuards { min, max, reason } => {
                write!(
                    f,
                    "Penalty guards must be finite with 0 < min ({min}) < max ({max}); {reason}"
                )
            }
            // ---- Estimation ----
            GraphError::EstimationFailed { status } => {
                write!(f, "Estimation failed with status: {status}")
            }
            GraphError::ModelNotFitted => {
                write!(f, "Model hasn't been fitted yet.")
            }
        }
    }
}

/// Convert a [`GraphError`] into a Python `ValueError` with the error message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl std::convert::From<GraphError> for PyErr {
    fn from(err: GraphError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Normalize solver-layer errors into [`GraphError::EstimationFailed`].
///
/// Configuration errors surfaced through the solver keep their message; the
/// variant records that estimation (rather than input validation) failed.
impl From<EstimationError> for GraphError {
    fn from(err: EstimationError) -> GraphError {
        GraphError::EstimationFailed { status: err.to_string() }
    }
}
