//! Learning options — configuration for graph-estimation workflows.
//!
//! Purpose
//! -------
//! Collect configuration knobs for heavy-tailed graph estimation in one
//! place, making the workflow explicit and reproducible. This includes the
//! initial-weight strategy, the ADMM solver options, the degree target the
//! estimated graph is steered toward, and the penalty guards protecting the
//! adaptive penalty rule.
//!
//! Key behaviors
//! -------------
//! - Represent estimation configuration via [`LearnOptions`], bundling the
//!   initialization policy, solver options, degree target, and penalty
//!   guards used during iteration.
//! - Represent the degree target via [`DegreeTarget`], either a scalar
//!   broadcast to every vertex or an explicit per-vertex vector.
//! - Keep cross-cutting configuration out of the solver loop, so call sites
//!   pass explicit, validated options instead of ad-hoc flags.
//!
//! Invariants & assumptions
//! ------------------------
//! - [`LearnOptions`] assumes that its components ([`WeightInit`],
//!   [`AdmmOptions`], [`PenaltyGuards`]) have already been validated by
//!   their own builders; it does not impose additional cross-field checks.
//! - [`DegreeTarget`] values are finite; per-vertex targets are length-checked
//!   against the vertex count when resolved via [`DegreeTarget::to_vector`].
//!
//! Downstream usage
//! ----------------
//! - At model setup time, construct a [`LearnOptions`] with the desired
//!   initialization, solver settings, degree target, and guards, and pass it
//!   to [`HeavyTailGraphModel`](crate::graphs::models::heavytail_graph::HeavyTailGraphModel).
//! - Public APIs should accept `LearnOptions` rather than separate
//!   `init`/`admm_opts`/`degree_target`/`penalty_guards` parameters.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that `LearnOptions::new` preserves its inputs without
//!   mutation and that `DegreeTarget` broadcasts, length-checks, and rejects
//!   non-finite values as documented.
use crate::{
    estimation::admm::traits::AdmmOptions,
    graphs::{
        core::{guards::PenaltyGuards, init::WeightInit, validation::validate_degree_values},
        errors::{GraphError, GraphResult},
    },
};
use ndarray::Array1;

/// LearnOptions — estimation-time configuration for graph models.
///
/// Purpose
/// -------
/// Bundle the configuration components required to fit a heavy-tailed graph
/// model: the initial-weight strategy, ADMM solver options, the degree
/// target, and penalty guards for the adaptive rule.
///
/// Fields
/// ------
/// - `init`: [`WeightInit`]
///   Strategy producing the starting edge-weight vector.
/// - `admm_opts`: [`AdmmOptions`]
///   Solver configuration (initial penalty, adaptive-penalty flag,
///   tolerances, verbosity).
/// - `degree_target`: [`DegreeTarget`]
///   Target vertex degrees the Laplacian diagonal is steered toward.
/// - `penalty_guards`: [`PenaltyGuards`]
///   Lower/upper bounds applied to the penalty after each adaptation.
///
/// Invariants
/// ----------
/// - Each field is assumed to have been constructed via its own validated
///   builder or default; `LearnOptions` does not enforce extra constraints.
///
/// Performance
/// -----------
/// - Cheap to clone; stored once per model.
#[derive(Debug, Clone, PartialEq)]
pub struct LearnOptions {
    /// Initial-weight strategy.
    pub init: WeightInit,
    /// ADMM solver options.
    pub admm_opts: AdmmOptions,
    /// Target vertex degrees.
    pub degree_target: DegreeTarget,
    /// Bounds for the adaptive penalty parameter.
    pub penalty_guards: PenaltyGuards,
}

impl LearnOptions {
    /// Construct a new [`LearnOptions`] from already-validated components.
    ///
    /// Parameters
    /// ----------
    /// - `init`: [`WeightInit`]
    ///   Initial-weight strategy, constructed via `WeightInit::naive()` or
    ///   `WeightInit::fixed(..)`.
    /// - `admm_opts`: [`AdmmOptions`]
    ///   Validated solver configuration.
    /// - `degree_target`: [`DegreeTarget`]
    ///   Validated degree target.
    /// - `penalty_guards`: [`PenaltyGuards`]
    ///   Validated penalty bounds.
    ///
    /// Returns
    /// -------
    /// `LearnOptions`
    ///   A configuration struct bundling the provided components with no
    ///   additional transformation applied.
    ///
    /// Errors
    /// ------
    /// - Never returns an error; all validation is expected to have been
    ///   performed by the component constructors.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    pub fn new(
        init: WeightInit, admm_opts: AdmmOptions, degree_target: DegreeTarget,
        penalty_guards: PenaltyGuards,
    ) -> LearnOptions {
        LearnOptions { init, admm_opts, degree_target, penalty_guards }
    }
}

impl Default for LearnOptions {
    /// Reference defaults: naive initialization, default solver options,
    /// unit degree target, and wide penalty guards.
    fn default() -> Self {
        LearnOptions {
            init: WeightInit::naive(),
            admm_opts: AdmmOptions::default(),
            degree_target: DegreeTarget::Uniform(1.0),
            penalty_guards: PenaltyGuards::default(),
        }
    }
}

/// DegreeTarget — scalar or per-vertex target degrees.
///
/// Purpose
/// -------
/// Describe the vertex degrees the estimated Laplacian's diagonal is steered
/// toward: either one scalar broadcast to every vertex or an explicit
/// per-vertex vector.
///
/// Variants
/// --------
/// - `Uniform(d)`
///   Every vertex targets degree `d`.
/// - `PerNode(d)`
///   Vertex `i` targets degree `d[i]`; the length must equal the vertex
///   count when resolved.
///
/// Invariants
/// ----------
/// - All values are finite (validated by the constructors).
#[derive(Debug, Clone, PartialEq)]
pub enum DegreeTarget {
    Uniform(f64),
    PerNode(Array1<f64>),
}

impl DegreeTarget {
    /// Uniform degree target, validated for finiteness.
    ///
    /// # Errors
    /// Returns [`GraphError::NonFiniteDegreeTarget`] if `d` is NaN/±∞.
    pub fn uniform(d: f64) -> GraphResult<Self> {
        if !d.is_finite() {
            return Err(GraphError::NonFiniteDegreeTarget { index: 0, value: d });
        }
        Ok(DegreeTarget::Uniform(d))
    }

    /// Per-vertex degree target, validated for finiteness.
    ///
    /// # Errors
    /// Returns [`GraphError::NonFiniteDegreeTarget`] for the first NaN/±∞
    /// entry.
    pub fn per_node(d: Array1<f64>) -> GraphResult<Self> {
        validate_degree_values(d.view())?;
        Ok(DegreeTarget::PerNode(d))
    }

    /// Resolve the target to a length-`p` vector.
    ///
    /// Parameters
    /// ----------
    /// - `p`: `usize`
    ///   Vertex count of the data being fitted.
    ///
    /// Returns
    /// -------
    /// `GraphResult<Array1<f64>>`
    ///   The broadcast (`Uniform`) or cloned (`PerNode`) target vector.
    ///
    /// Errors
    /// ------
    /// - `GraphError::DegreeTargetLengthMismatch`
    ///   For `PerNode` when the stored length differs from `p`.
    pub fn to_vector(&self, p: usize) -> GraphResult<Array1<f64>> {
        match self {
            DegreeTarget::Uniform(d) => Ok(Array1::from_elem(p, *d)),
            DegreeTarget::PerNode(d) => {
                if d.len() != p {
                    return Err(GraphError::DegreeTargetLengthMismatch {
                        expected: p,
                        actual: d.len(),
                    });
                }
                Ok(d.clone())
            }
        }
    }
}
