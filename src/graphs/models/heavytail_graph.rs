//! Heavy-tailed graph model: the user-facing estimation entry point.
//!
//! This module wires validated observation data and configuration into the
//! ADMM estimation loop and assembles the domain-facing result record. The
//! model owns the observation-model choice ([`HeavyTail`]) and the
//! configuration ([`LearnOptions`]); all per-run state lives inside the
//! solver.
//!
//! Key ideas:
//! - `fit` prepares the solver inputs once (edge scatters, resolved degree
//!   target, normalized starting weights), runs the loop, and caches the
//!   resulting [`GraphEstimate`] on the model.
//! - Progress reporting is injected: `fit` attaches a terminal observer when
//!   `verbose` is set, while `fit_with_observer` accepts any
//!   [`IterationObserver`] from the caller.
//! - Reaching the iteration cap is not an error; callers check
//!   [`GraphEstimate::converged`].
use crate::{
    estimation::admm::{
        run::run_admm,
        traits::{AdmmOutcome, IterationObserver, NoopObserver, TermObserver},
    },
    graphs::{
        core::{
            data::GraphData, heavy_tail::HeavyTail, init::degree_normalize, operators,
            options::LearnOptions,
        },
        errors::{GraphError, GraphResult},
    },
};
use ndarray::Array2;

/// Heavy-tailed graph-learning model.
///
/// Encapsulates the observation model (`heavy_tail`), run-time options
/// (`options`), and, after fitting, the cached [`GraphEstimate`] in
/// `results`.
///
/// # Notes
/// - One model can be fitted repeatedly (e.g., to different data); each fit
///   replaces `results`.
/// - Implements no interior mutability: `fit` takes `&mut self`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeavyTailGraphModel {
    /// Observation model (Gaussian or Student-t).
    pub heavy_tail: HeavyTail,
    /// Estimation options.
    pub options: LearnOptions,
    /// Fit results (populated after `fit`).
    pub results: Option<GraphEstimate>,
}

impl HeavyTailGraphModel {
    /// Construct a new model from an observation model and options.
    ///
    /// # Arguments
    /// - `heavy_tail`: Gaussian or validated Student-t observation model.
    /// - `options`: validated estimation configuration.
    pub fn new(heavy_tail: HeavyTail, options: LearnOptions) -> HeavyTailGraphModel {
        HeavyTailGraphModel { heavy_tail, options, results: None }
    }

    /// Fit the model to observation data and cache the estimate.
    ///
    /// ## Steps
    /// 1. Resolve the degree target to a length-p vector.
    /// 2. Precompute the per-observation edge scatters.
    /// 3. Produce starting weights from the configured strategy and
    ///    normalize each vertex's incident weights toward unit degree.
    /// 4. Run the ADMM loop (attaching a terminal observer when `verbose`).
    /// 5. Assemble and cache the [`GraphEstimate`].
    ///
    /// ## Arguments
    /// - `data`: validated observation matrix.
    ///
    /// ## Returns
    /// - `Ok(())` on success; `self.results` is populated.
    ///
    /// ## Errors
    /// - Degree-target and starting-weight validation errors
    ///   (`GraphError::{DegreeTargetLengthMismatch, WeightLengthMismatch, ..}`).
    /// - Solver-input failures normalized into
    ///   [`GraphError::EstimationFailed`].
    pub fn fit(&mut self, data: &GraphData) -> GraphResult<()> {
        if self.options.admm_opts.verbose {
            self.fit_with_observer(data, &mut TermObserver)
        } else {
            self.fit_with_observer(data, &mut NoopObserver)
        }
    }

    /// Fit with a caller-supplied progress observer.
    ///
    /// Identical to [`HeavyTailGraphModel::fit`] except that the injected
    /// observer is invoked once per completed iteration regardless of the
    /// `verbose` flag.
    pub fn fit_with_observer(
        &mut self, data: &GraphData, observer: &mut dyn IterationObserver,
    ) -> GraphResult<()> {
        let p = data.n_vertices();
        let degrees_target = self.options.degree_target.to_vector(p)?;
        let scatters = data.edge_scatters();
        let w0 = self.options.init.initial_weights(data)?;
        let w0 = degree_normalize(w0, p);

        let outcome = run_admm(
            &self.heavy_tail,
            &scatters,
            w0,
            &degrees_target,
            p,
            &self.options.admm_opts,
            &self.options.penalty_guards,
            observer,
        )?;
        self.results = Some(GraphEstimate::from_outcome(outcome, p));
        Ok(())
    }

    /// Borrow the cached estimate.
    ///
    /// ## Errors
    /// - Returns [`GraphError::ModelNotFitted`] if called before a
    ///   successful `fit`.
    pub fn estimate(&self) -> GraphResult<&GraphEstimate> {
        self.results.as_ref().ok_or(GraphError::ModelNotFitted)
    }
}

/// Result record of one estimation run.
///
/// Holds the final matrix representations of the estimated graph, the
/// executed iteration count and convergence flag, and the per-iteration
/// diagnostic sequences (each of length `iterations`).
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEstimate {
    /// Final Laplacian L(w).
    pub laplacian: Array2<f64>,
    /// Final adjacency A(w).
    pub adjacency: Array2<f64>,
    /// Final slack matrix Theta.
    pub theta: Array2<f64>,
    /// Number of iterations executed.
    pub iterations: usize,
    /// Whether the relative-change test fired before the iteration cap.
    pub converged: bool,
    /// ‖Theta − L(w)‖_F per iteration.
    pub primal_lap_residual: Vec<f64>,
    /// ‖diag(L(w)) − d‖₂ per iteration.
    pub primal_deg_residual: Vec<f64>,
    /// rho·‖Lstar(ΔTheta)‖₂ per iteration.
    pub dual_residual: Vec<f64>,
    /// Augmented-Lagrangian value per iteration.
    pub lagrangian: Vec<f64>,
    /// Cumulative elapsed seconds per iteration.
    pub elapsed_time: Vec<f64>,
}

impl GraphEstimate {
    /// Assemble the domain-facing record from a solver outcome.
    ///
    /// Builds the Laplacian and adjacency from the final weights and moves
    /// the diagnostic sequences out of the outcome without copying.
    pub fn from_outcome(outcome: AdmmOutcome, p: usize) -> GraphEstimate {
        let laplacian = operators::laplacian(outcome.weights.view(), p);
        let adjacency = operators::adjacency(outcome.weights.view(), p);
        let diagnostics = outcome.diagnostics;
        GraphEstimate {
            laplacian,
            adjacency,
            theta: outcome.theta,
            iterations: outcome.iterations,
            converged: outcome.converged,
            primal_lap_residual: diagnostics.primal_lap_residual,
            primal_deg_residual: diagnostics.primal_deg_residual,
            dual_residual: diagnostics.dual_residual,
            lagrangian: diagnostics.lagrangian,
            elapsed_time: diagnostics.elapsed_time,
        }
    }
}
