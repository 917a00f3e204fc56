//! admm — the alternating-direction estimation loop for graph learning.
//!
//! Purpose
//! -------
//! Provide the solver that alternates a projected-gradient update of the
//! edge weights (with per-observation heavy-tail reweighting), a closed-form
//! eigenvalue-based slack projection enforcing the log-determinant barrier,
//! dual ascent on both constraints, and an adaptive penalty rule, until the
//! Laplacian estimate stabilizes or the iteration cap is reached.
//!
//! Key behaviors
//! -------------
//! - Expose a single user-facing entrypoint, [`run::run_admm`], that
//!   validates solver inputs, drives the iteration, records diagnostics, and
//!   normalizes results into an [`AdmmOutcome`].
//! - Keep the solver generic over the observation model via the
//!   [`ObservationWeights`] capability, and over progress reporting via the
//!   injected [`IterationObserver`].
//! - Centralize solver configuration ([`AdmmOptions`], [`Tolerances`]) and
//!   per-iteration bookkeeping ([`diagnostics::AdmmDiagnostics`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Outer iterations are strictly sequential: iteration `k+1` depends on
//!   every output of iteration `k` (weights, Theta, both duals, rho).
//! - The edge-weight vector is non-negative after every primal step;
//!   `Theta + J` is symmetric positive definite after every slack step.
//! - All state is local to one run and owned by that run's controller;
//!   nothing is shared across invocations.
//!
//! Conventions
//! -----------
//! - Vectors and matrices use `ndarray` containers; the eigendecomposition
//!   inside the slack step uses `nalgebra`'s dense symmetric solver.
//! - Errors bubble up as [`EstResult`](crate::estimation::errors::EstResult);
//!   exhausting the iteration cap is a normal outcome, not an error.
//!
//! Downstream usage
//! ----------------
//! - The model layer
//!   ([`HeavyTailGraphModel`](crate::graphs::models::heavytail_graph::HeavyTailGraphModel))
//!   prepares scatters, starting weights, and the degree target, then calls
//!   [`run::run_admm`] and assembles the domain-facing result record.
//! - Higher-level front-ends are expected to interact only with the
//!   re-exported surface below.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover the step formulas, projection and
//!   positive-definiteness invariants, penalty adaptation, diagnostics
//!   bookkeeping, and controller behavior; integration tests exercise
//!   recovery on synthetic graphs.

pub mod diagnostics;
pub mod dual;
pub mod primal;
pub mod run;
pub mod slack;
pub mod state;
pub mod traits;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::diagnostics::AdmmDiagnostics;
pub use self::run::run_admm;
pub use self::traits::{
    AdmmOptions, AdmmOutcome, IterationObserver, IterationRecord, NoopObserver,
    ObservationWeights, TermObserver, Tolerances,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_graphlearn::estimation::admm::prelude::*;
//
// to import the main solver surface in a single line.

pub mod prelude {
    pub use super::run::run_admm;
    pub use super::traits::{
        AdmmOptions, AdmmOutcome, IterationObserver, ObservationWeights, Tolerances,
    };
}
