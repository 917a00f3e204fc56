//! Dual & penalty updater — multiplier ascent and the adaptive penalty rule.
//!
//! Standard ADMM dual ascent on both constraints:
//!
//! ```text
//! Y ← Y + rho·(Theta − L(w))          (Theta-vs-Laplacian constraint)
//! y ← y + rho·(diag(L(w)) − d)        (degree-target constraint)
//! ```
//!
//! followed (when enabled) by the residual-balancing penalty rule with
//! constants μ = τ = 2: if the primal residual exceeds μ times the dual
//! residual, multiply rho by τ; if the dual residual exceeds μ times the
//! primal residual, divide rho by τ. Keeping the two residuals within a
//! bounded ratio of each other is a well-known heuristic for ADMM stability
//! and convergence speed. Every adapted value is clamped into the
//! [`PenaltyGuards`] range so rho cannot drift to numerically extreme values
//! over very long runs.
use crate::{estimation::admm::state::AdmmState, graphs::core::{guards::PenaltyGuards, operators}};
use ndarray::{Array1, Array2, ArrayView1};

/// Residual-balance threshold μ.
pub const PENALTY_BALANCE: f64 = 2.0;

/// Penalty adaptation factor τ.
pub const PENALTY_FACTOR: f64 = 2.0;

/// Dual ascent on both constraints.
///
/// Updates `Y` and `y` in place using the *current* rho and the candidate
/// iterates of this iteration, and returns the two primal residuals:
///
/// - `R1 = Theta_new − L(w_new)` (matrix),
/// - `R2 = diag(L(w_new)) − d` (vector),
///
/// which the controller reuses for the penalty rule and diagnostics.
pub fn ascend_duals(
    state: &mut AdmmState, theta_new: &Array2<f64>, laplacian_new: &Array2<f64>,
    degrees_target: ArrayView1<f64>,
) -> (Array2<f64>, Array1<f64>) {
    let lap_residual = theta_new - laplacian_new;
    let deg_residual = operators::degrees(laplacian_new.view()) - &degrees_target;
    state.dual_matrix.scaled_add(state.rho, &lap_residual);
    state.dual_degrees.scaled_add(state.rho, &deg_residual);
    (lap_residual, deg_residual)
}

/// Adaptive penalty rule with guard clamping.
///
/// # Arguments
/// - `state`: rho is mutated in place.
/// - `primal_residual`: `‖Theta_new − L(w_new)‖_F`.
/// - `dual_residual`: `rho·‖Lstar(Theta_old − Theta_new)‖₂`, evaluated with
///   the pre-adaptation rho.
/// - `guards`: bounds applied after any adaptation.
pub fn adapt_penalty(
    state: &mut AdmmState, primal_residual: f64, dual_residual: f64, guards: &PenaltyGuards,
) {
    if primal_residual > PENALTY_BALANCE * dual_residual {
        state.rho *= PENALTY_FACTOR;
    } else if dual_residual > PENALTY_BALANCE * primal_residual {
        state.rho /= PENALTY_FACTOR;
    }
    state.rho = guards.clamp(state.rho);
}
