//! graphs — heavy-tailed graph learning for multivariate observations.
//!
//! Purpose
//! -------
//! Top-level domain module for estimating the topology of a weighted graph
//! (a Laplacian matrix) connecting `p` entities from `n` multivariate
//! observations, under a Gaussian or Student-t observation model. The
//! Student-t model down-weights outlier-like observations, making the
//! estimator robust to the fat tails typical of, e.g., asset-return series.
//!
//! Key behaviors
//! -------------
//! - [`core`] provides the validated data container, graph operators,
//!   observation models, initial-weight strategies, and configuration.
//! - [`models`] provides the user-facing
//!   [`HeavyTailGraphModel`](models::heavytail_graph::HeavyTailGraphModel),
//!   which wires data and options into the ADMM estimation loop and stores
//!   the resulting [`GraphEstimate`](models::heavytail_graph::GraphEstimate).
//! - [`errors`] defines the typed error surface shared by both.
//!
//! Downstream usage
//! ----------------
//! - Native Rust callers construct a `GraphData`, a `HeavyTail` observation
//!   model, and `LearnOptions`, then call `HeavyTailGraphModel::fit`.
//! - The Python bindings in the crate root wrap the same types; all heavy
//!   numerical work stays in this module tree and the estimation layer.
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each submodule; end-to-end recovery behavior on
//!   synthetic graphs is covered by the integration tests.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{DegreeTarget, GraphData, HeavyTail, LearnOptions, PenaltyGuards, WeightInit};
pub use self::errors::{GraphError, GraphResult};
pub use self::models::heavytail_graph::{GraphEstimate, HeavyTailGraphModel};
