//! models — user-facing graph-learning model types.
//!
//! Currently hosts the heavy-tailed Laplacian estimator
//! ([`heavytail_graph::HeavyTailGraphModel`]) and its result record
//! ([`heavytail_graph::GraphEstimate`]).

pub mod heavytail_graph;

pub use self::heavytail_graph::{GraphEstimate, HeavyTailGraphModel};
