//! Public API surface for the ADMM graph-estimation loop.
//!
//! - [`ObservationWeights`]: capability the observation model implements so
//!   the solver stays generic over Gaussian vs Student-t reweighting.
//! - [`AdmmOptions`] and [`Tolerances`]: configuration for the solver.
//! - [`IterationObserver`]: per-iteration progress capability injected by the
//!   caller; the solver never owns or initializes it.
//! - [`AdmmOutcome`]: normalized result returned by the high-level
//!   [`run_admm`](crate::estimation::admm::run::run_admm) API.
//!
//! Convention: the solver minimizes a penalized negative log-likelihood; the
//! observation model supplies per-observation *gradient weights* and the
//! likelihood term recorded in the augmented Lagrangian, both as functions of
//! the quadratic form `quad = w · scatter_q`.
use crate::estimation::{
    admm::diagnostics::AdmmDiagnostics,
    errors::{EstResult, EstimationError},
};
use ndarray::{Array1, Array2};

/// Observation-model capability consumed by the solver.
///
/// Implemented by
/// [`HeavyTail`](crate::graphs::core::heavy_tail::HeavyTail); both methods
/// are functions of the quadratic form of the current graph estimate at one
/// observation, `quad = w · scatter_q ≥ 0`.
///
/// Required:
/// - `observation_weight(quad, p)`: multiplicative weight of the
///   observation's scatter in the edge-weight gradient. Gaussian models
///   return 1 for every observation.
/// - `likelihood_term(quad, n, p)`: the observation's contribution to the
///   negative log-likelihood term of the augmented Lagrangian (averaged over
///   observations by the caller).
pub trait ObservationWeights {
    fn observation_weight(&self, quad: f64, p: usize) -> f64;
    fn likelihood_term(&self, quad: f64, n: usize, p: usize) -> f64;
}

/// Per-iteration progress capability.
///
/// The solver invokes `on_iteration` exactly once per completed iteration,
/// after diagnostics for that iteration are recorded. Implementations must
/// not assume they outlive the run; the solver holds only a borrow.
pub trait IterationObserver {
    fn on_iteration(&mut self, record: &IterationRecord);
}

/// Snapshot handed to [`IterationObserver::on_iteration`].
///
/// Fields mirror one row of the recorded diagnostics:
/// - `iteration`: 0-based index of the completed iteration.
/// - `primal_lap_residual`: ‖Theta − L(w)‖_F.
/// - `primal_deg_residual`: ‖diag(L(w)) − d‖₂.
/// - `dual_residual`: rho·‖Lstar(ΔTheta)‖₂ (post-adaptation rho).
/// - `lagrangian`: augmented-Lagrangian value.
/// - `rho`: penalty after any adaptation this iteration.
/// - `elapsed`: cumulative seconds since the run started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRecord {
    pub iteration: usize,
    pub primal_lap_residual: f64,
    pub primal_deg_residual: f64,
    pub dual_residual: f64,
    pub lagrangian: f64,
    pub rho: f64,
    pub elapsed: f64,
}

/// Observer that ignores every iteration.
///
/// Used when no progress reporting is attached; keeps the solver signature
/// uniform without optional observers.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl IterationObserver for NoopObserver {
    fn on_iteration(&mut self, _record: &IterationRecord) {}
}

/// Observer that prints one progress line per iteration to stderr.
///
/// Attached by the model layer when `verbose` is enabled. Output goes to
/// stderr so it interleaves with diagnostics rather than captured stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct TermObserver;

impl IterationObserver for TermObserver {
    fn on_iteration(&mut self, record: &IterationRecord) {
        eprintln!(
            "iter {:>6}: r_lap = {:.6e}, r_deg = {:.6e}, s = {:.6e}, rho = {:.3e}",
            record.iteration,
            record.primal_lap_residual,
            record.primal_deg_residual,
            record.dual_residual,
            record.rho,
        );
    }
}

/// Solver-level configuration.
///
/// Fields:
/// - `rho: f64` — initial penalty parameter (finite, > 0).
/// - `update_rho: bool` — enables the adaptive residual-balancing rule.
/// - `tols: Tolerances` — convergence tolerance and iteration cap.
/// - `verbose: bool` — if `true`, the model layer attaches a
///   [`TermObserver`]; the solver itself never prints.
///
/// Constructor:
/// - `new(rho, update_rho, tols, verbose) -> EstResult<Self>` — validates
///   `rho`; tolerance validation happens in [`Tolerances::new`].
///
/// Default (reference defaults):
/// - `rho = 1.0`, `update_rho = true`,
/// - `tols`: `reltol = 1e-5`, `max_iter = 10_000`,
/// - `verbose = false`.
#[derive(Debug, Clone, PartialEq)]
pub struct AdmmOptions {
    pub rho: f64,
    pub update_rho: bool,
    pub tols: Tolerances,
    pub verbose: bool,
}

impl AdmmOptions {
    /// Create a new set of solver options.
    ///
    /// Validation of the tolerance fields is performed inside
    /// [`Tolerances::new`]; this constructor validates only `rho`.
    ///
    /// # Errors
    /// - [`EstimationError::InvalidPenalty`] if `rho` is non-finite or ≤ 0.
    pub fn new(rho: f64, update_rho: bool, tols: Tolerances, verbose: bool) -> EstResult<Self> {
        if !rho.is_finite() || rho <= 0.0 {
            return Err(EstimationError::InvalidPenalty {
                rho,
                reason: "Initial penalty must be finite and strictly positive.",
            });
        }
        Ok(Self { rho, update_rho, tols, verbose })
    }
}

impl Default for AdmmOptions {
    fn default() -> Self {
        Self {
            rho: 1.0,
            update_rho: true,
            tols: Tolerances::new(1e-5, 10_000).unwrap(),
            verbose: false,
        }
    }
}

/// Convergence tolerance and iteration cap used by the solver.
///
/// - `reltol`: terminate when the relative Frobenius change between
///   successive Laplacian estimates falls below this threshold (checked only
///   from the second iteration onward).
/// - `max_iter`: hard cap on the number of iterations; reaching it is not an
///   error and yields an outcome with `converged = false`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub reltol: f64,
    pub max_iter: usize,
}

impl Tolerances {
    /// Construct validated tolerances.
    ///
    /// # Rules
    /// - `reltol` must be **finite and strictly positive**.
    /// - `max_iter` must be `> 0`.
    ///
    /// # Errors
    /// - [`EstimationError::InvalidReltol`] for non-finite or non-positive
    ///   tolerances.
    /// - [`EstimationError::InvalidMaxIter`] if `max_iter == 0`.
    pub fn new(reltol: f64, max_iter: usize) -> EstResult<Self> {
        if !reltol.is_finite() || reltol <= 0.0 {
            return Err(EstimationError::InvalidReltol {
                tol: reltol,
                reason: "Relative tolerance must be finite and strictly positive.",
            });
        }
        if max_iter == 0 {
            return Err(EstimationError::InvalidMaxIter {
                max_iter,
                reason: "Maximum iterations must be greater than zero.",
            });
        }
        Ok(Self { reltol, max_iter })
    }
}

/// Canonical result returned by `run_admm`.
///
/// - `weights`: final edge-weight vector (non-negative).
/// - `theta`: final slack matrix Theta.
/// - `iterations`: number of iterations executed.
/// - `converged`: `true` if the relative-change test fired before the
///   iteration cap.
/// - `diagnostics`: per-iteration residuals, Lagrangian values, and elapsed
///   times; every sequence has length `iterations`.
#[derive(Debug, Clone, PartialEq)]
pub struct AdmmOutcome {
    pub weights: Array1<f64>,
    pub theta: Array2<f64>,
    pub iterations: usize,
    pub converged: bool,
    pub diagnostics: AdmmDiagnostics,
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Validation behavior of `AdmmOptions::new` and `Tolerances::new`.
    // - Documented defaults of `AdmmOptions`.
    //
    // They intentionally DO NOT cover:
    // - Solver behavior under these options (tested in `run`).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // `AdmmOptions::new` rejects non-positive or non-finite rho.
    //
    // Given
    // -----
    // - rho in {0.0, -1.0, NaN, ∞} with valid tolerances.
    //
    // Expect
    // ------
    // - `Err(EstimationError::InvalidPenalty)` for each.
    fn admmoptions_new_rejects_invalid_rho() {
        // Arrange
        let tols = Tolerances::new(1e-5, 100).unwrap();
        let invalid = [0.0_f64, -1.0, f64::NAN, f64::INFINITY];

        // Act + Assert
        for &rho in &invalid {
            match AdmmOptions::new(rho, true, tols, false) {
                Err(EstimationError::InvalidPenalty { .. }) => {}
                other => panic!("expected InvalidPenalty for rho={rho:?}, got {other:?}"),
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // `Tolerances::new` rejects non-positive reltol and zero max_iter.
    //
    // Given
    // -----
    // - reltol = 0.0 with max_iter = 10, and reltol = 1e-5 with max_iter = 0.
    //
    // Expect
    // ------
    // - `InvalidReltol` and `InvalidMaxIter` respectively.
    fn tolerances_new_rejects_invalid_fields() {
        // Arrange + Act
        let reltol_err = Tolerances::new(0.0, 10).unwrap_err();
        let maxiter_err = Tolerances::new(1e-5, 0).unwrap_err();

        // Assert
        assert!(matches!(reltol_err, EstimationError::InvalidReltol { .. }));
        assert!(matches!(maxiter_err, EstimationError::InvalidMaxIter { .. }));
    }

    #[test]
    // Purpose
    // -------
    // `AdmmOptions::default` matches the documented reference defaults.
    //
    // Given
    // -----
    // - The `Default` implementation.
    //
    // Expect
    // ------
    // - rho = 1.0, update_rho = true, reltol = 1e-5, max_iter = 10_000,
    //   verbose = false.
    fn admmoptions_default_matches_documented_defaults() {
        // Arrange + Act
        let opts = AdmmOptions::default();

        // Assert
        assert_eq!(opts.rho, 1.0);
        assert!(opts.update_rho);
        assert_eq!(opts.tols.reltol, 1e-5);
        assert_eq!(opts.tols.max_iter, 10_000);
        assert!(!opts.verbose);
    }
}
