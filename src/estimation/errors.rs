//! Errors for the ADMM estimation layer.
//!
//! This module defines [`EstimationError`], the error type for the solver
//! layer: option validation (penalty, tolerances), shape checks on the inputs
//! handed to [`run_admm`](crate::estimation::admm::run::run_admm), and
//! degenerate-input conditions. Domain-facing code normalizes these into
//! [`GraphError::EstimationFailed`](crate::graphs::errors::GraphError) at the
//! model boundary.

/// Crate-wide result alias for solver operations.
pub type EstResult<T> = Result<T, EstimationError>;

#[derive(Debug, Clone, PartialEq)]
pub enum EstimationError {
    // ---- Options ----
    /// Initial penalty must be finite and strictly positive.
    InvalidPenalty {
        rho: f64,
        reason: &'static str,
    },

    /// Relative tolerance must be finite and strictly positive.
    InvalidReltol {
        tol: f64,
        reason: &'static str,
    },

    /// Maximum iterations must be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },

    // ---- Solver inputs ----
    /// No per-observation scatter vectors were supplied.
    EmptyScatterSet,

    /// A scatter vector's length does not match the edge count.
    ScatterLengthMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// Starting weight vector length does not match the edge count.
    WeightLengthMismatch {
        expected: usize,
        actual: usize,
    },

    /// Starting weight entries must be finite and non-negative.
    InvalidStartingWeight {
        index: usize,
        value: f64,
    },

    /// Degree-target length does not match the vertex count.
    DegreeLengthMismatch {
        expected: usize,
        actual: usize,
    },
}

impl std::error::Error for EstimationError {}

impl std::fmt::Display for EstimationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstimationError::InvalidPenalty { rho, reason } => {
                write!(f, "Penalty parameter must be finite and > 0; got {rho}. {reason}")
            }
            EstimationError::InvalidReltol { tol, reason } => {
                write!(f, "Relative tolerance must be finite and > 0; got {tol}. {reason}")
            }
            EstimationError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Maximum iterations must be > 0; got {max_iter}. {reason}")
            }
            EstimationError::EmptyScatterSet => {
                write!(f, "At least one per-observation scatter vector is required.")
            }
            EstimationError::ScatterLengthMismatch { index, expected, actual } => {
                write!(
                    f,
                    "Scatter vector {index} has length {actual}; expected {expected} (edge count)"
                )
            }
            EstimationError::WeightLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Starting weight vector has length {actual}; expected {expected} (edge count)"
                )
            }
            EstimationError::InvalidStartingWeight { index, value } => {
                write!(
                    f,
                    "Starting weight at index {index} must be finite and non-negative; got {value}"
                )
            }
            EstimationError::DegreeLengthMismatch { expected, actual } => {
                write!(f, "Degree target has length {actual}; expected {expected} (vertex count)")
            }
        }
    }
}
