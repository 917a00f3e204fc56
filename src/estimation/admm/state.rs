//! ADMM iterate state — the variables mutated once per iteration.
//!
//! One [`AdmmState`] is owned by a single run of
//! [`run_admm`](crate::estimation::admm::run::run_admm); nothing is shared
//! across runs. The state carries the primal edge weights and their
//! Laplacian, the slack matrix Theta, both dual variables, and the penalty
//! parameter. Step functions read the current iterates and the controller
//! commits the new ones at the end of each iteration, so convergence and
//! dual-residual computations always see one consistent generation.
use crate::graphs::core::operators;
use ndarray::{Array1, Array2};

/// Mutable state of one ADMM run.
///
/// Fields
/// ------
/// - `weights`: current edge-weight vector `w` (length `p(p−1)/2`, ≥ 0).
/// - `laplacian`: `L(weights)`, kept in sync with `weights`.
/// - `theta`: slack matrix Theta (`p×p`, symmetric).
/// - `dual_matrix`: dual variable `Y` for the Theta-vs-Laplacian constraint.
/// - `dual_degrees`: dual variable `y` for the degree-target constraint.
/// - `rho`: current penalty parameter (> 0).
///
/// Invariants
/// ----------
/// - `laplacian == operators::laplacian(weights, p)` at iteration
///   boundaries (the controller recomputes it when committing `weights`).
/// - Dual variables start at zero; `theta` starts at the initial Laplacian.
#[derive(Debug, Clone, PartialEq)]
pub struct AdmmState {
    /// Current edge weights w.
    pub weights: Array1<f64>,
    /// L(w) for the current weights.
    pub laplacian: Array2<f64>,
    /// Slack matrix Theta.
    pub theta: Array2<f64>,
    /// Dual variable Y (p×p).
    pub dual_matrix: Array2<f64>,
    /// Dual variable y (length p).
    pub dual_degrees: Array1<f64>,
    /// Penalty parameter rho.
    pub rho: f64,
}

impl AdmmState {
    /// Initialize the state from a starting weight vector.
    ///
    /// Sets `laplacian = L(w0)`, `theta` to the same matrix, zeros both dual
    /// variables, and stores the initial penalty.
    ///
    /// # Arguments
    /// - `w0`: starting edge weights (validated by the caller; consumed).
    /// - `p`: vertex count matching the edge layout of `w0`.
    /// - `rho`: initial penalty parameter (validated by `AdmmOptions`).
    pub fn new(w0: Array1<f64>, p: usize, rho: f64) -> AdmmState {
        let laplacian = operators::laplacian(w0.view(), p);
        let theta = laplacian.clone();
        AdmmState {
            weights: w0,
            laplacian,
            theta,
            dual_matrix: Array2::zeros((p, p)),
            dual_degrees: Array1::zeros(p),
            rho,
        }
    }

    /// Vertex count implied by the stored Laplacian.
    pub fn n_vertices(&self) -> usize {
        self.laplacian.nrows()
    }
}
