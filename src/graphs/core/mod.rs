//! core — shared graph-learning data, operators, and configuration.
//!
//! Purpose
//! -------
//! Collect the core building blocks for heavy-tailed graph learning: the
//! validated observation container, the linear operators relating edge
//! weights to matrix representations, the observation model, initial-weight
//! strategies, penalty guards, configuration types, and validation helpers.
//! The estimation layer and the model API build on top of these primitives.
//!
//! Key behaviors
//! -------------
//! - Define the observation container ([`GraphData`]) with one-time
//!   validation and per-observation edge scatters.
//! - Implement the graph operators (`laplacian`, `adjacency`,
//!   `adjacency_inv`, `lstar`, `dstar`, `degrees`) and the edge-index
//!   layout shared by every consumer.
//! - Encapsulate the observation model ([`HeavyTail`]), initial-weight
//!   strategies ([`WeightInit`]), penalty guards ([`PenaltyGuards`]), and
//!   estimation configuration ([`LearnOptions`], [`DegreeTarget`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Observation matrices are `n×p` with `n ≥ 2`, `p ≥ 2`, and finite
//!   entries; edge-weight vectors have length `p(p−1)/2` in the layout of
//!   [`operators::edge_index`].
//! - The operators satisfy the adjoint identities exactly (to numerical
//!   precision); gradient code in the estimation layer depends on this.
//! - Configuration types are validated at construction; successfully built
//!   values satisfy their documented constraints.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based throughout. This module avoids I/O and logging; it
//!   operates purely on `ndarray`/`nalgebra` containers and scalar values.
//!   Error conditions are reported via `GraphResult`; panics are reserved
//!   for logic bugs such as irreconcilable shape mismatches.
//!
//! Downstream usage
//! ----------------
//! - Data preparation code constructs [`GraphData`], then a
//!   [`LearnOptions`] describing the initialization, solver settings,
//!   degree target, and guards for a
//!   [`HeavyTailGraphModel`](crate::graphs::models::heavytail_graph::HeavyTailGraphModel).
//! - The estimation layer consumes the operators and the
//!   [`ObservationWeights`](crate::estimation::admm::traits::ObservationWeights)
//!   capability implemented by [`HeavyTail`].
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover: operator identities and round trips,
//!   data validation, observation-model weights, initial-weight strategies,
//!   guard validation, and configuration invariants. Integration tests at
//!   the model layer exercise full pipelines on synthetic graphs.

pub mod data;
pub mod guards;
pub mod heavy_tail;
pub mod init;
pub mod operators;
pub mod options;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::data::GraphData;
pub use self::guards::PenaltyGuards;
pub use self::heavy_tail::HeavyTail;
pub use self::init::{WeightInit, degree_normalize};
pub use self::options::{DegreeTarget, LearnOptions};
pub use self::validation::{
    validate_degree_values, validate_degrees_of_freedom, validate_observations,
    validate_weight_vector,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_graphlearn::graphs::core::prelude::*;
//
// to import the main graph-learning core surface in a single line.

pub mod prelude {
    pub use super::data::GraphData;
    pub use super::guards::PenaltyGuards;
    pub use super::heavy_tail::HeavyTail;
    pub use super::init::WeightInit;
    pub use super::options::{DegreeTarget, LearnOptions};
}
