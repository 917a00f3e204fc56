//! estimation — solver layer for graph learning.
//!
//! Hosts the ADMM estimation loop ([`admm`]) and the solver-layer error
//! surface ([`errors`]). The domain layer depends on this module through the
//! [`admm::run_admm`] entrypoint and the capability traits it consumes; the
//! solver in turn depends on the graph operators and guards from
//! [`crate::graphs::core`].

pub mod admm;
pub mod errors;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::admm::{AdmmOptions, AdmmOutcome, Tolerances, run_admm};
pub use self::errors::{EstResult, EstimationError};
