//! Primal updater — one projected-gradient step on the edge weights.
//!
//! Implements the w-subproblem of the estimation loop. Solving it exactly is
//! not tractable for the reweighted objective, so a single
//! majorization/gradient step per outer iteration is taken instead (a
//! linearized-ADMM pattern):
//!
//! ```text
//! grad = Σ_q weight_q · scatter_q
//!        − Lstar(rho·Theta + Y)
//!        + Dstar(y − rho·d)
//!        + rho·(Lstar(L(w)) + Dstar(diag(L(w))))
//! w ← clip₊(w − eta · grad)
//! ```
//!
//! with fixed step size `eta = 1/(2·rho·(2p−1))`, an upper bound on the
//! relevant Lipschitz constant of the smooth part of the objective that
//! avoids an inner line search. The projection onto the non-negative orthant
//! clips negative entries to zero (edge weights cannot be negative).
//!
//! The per-observation weights come from the [`ObservationWeights`]
//! capability: 1 for Gaussian models, `(p + nu)/(quad + nu)` for Student-t.
use crate::{
    estimation::admm::{state::AdmmState, traits::ObservationWeights},
    graphs::core::operators,
};
use ndarray::{Array1, ArrayView1};

/// Fixed gradient step size `1/(2·rho·(2p−1))`.
///
/// Upper-bounds the Lipschitz constant of the smooth part of the penalized
/// objective, so the single gradient step is a descent step without a line
/// search.
pub fn step_size(rho: f64, p: usize) -> f64 {
    1.0 / (2.0 * rho * (2.0 * p as f64 - 1.0))
}

/// One projected-gradient update of the edge-weight vector.
///
/// Reads the current iterates from `state` (weights, Laplacian, Theta, both
/// duals, rho) and returns the clipped candidate weights; the caller commits
/// them together with the recomputed Laplacian.
///
/// # Arguments
/// - `state`: current ADMM iterates.
/// - `model`: observation model supplying per-observation gradient weights.
/// - `scatters`: per-observation edge scatters `Lstar(x_q x_qᵀ)/(n−1)`.
/// - `degrees_target`: length-p target degree vector `d`.
///
/// # Returns
/// The candidate weight vector, with every entry ≥ 0.
pub fn update_weights<W: ObservationWeights>(
    state: &AdmmState, model: &W, scatters: &[Array1<f64>], degrees_target: ArrayView1<f64>,
) -> Array1<f64> {
    let p = state.n_vertices();
    let rho = state.rho;

    // Reweighted data term: Σ_q weight_q · scatter_q.
    let mut weighted = Array1::<f64>::zeros(state.weights.len());
    for scatter in scatters {
        let quad = state.weights.dot(scatter);
        let weight = model.observation_weight(quad, p);
        weighted.scaled_add(weight, scatter);
    }

    let consensus = &state.theta * rho + &state.dual_matrix;
    let degree_gap = &state.dual_degrees - &(&degrees_target * rho);

    let lstar_lw = operators::lstar(state.laplacian.view());
    let dstar_dw = operators::dstar(operators::degrees(state.laplacian.view()).view());

    let grad = weighted - operators::lstar(consensus.view())
        + operators::dstar(degree_gap.view())
        + (lstar_lw + dstar_dw) * rho;

    let eta = step_size(rho, p);
    let mut w_new = &state.weights - &(grad * eta);
    w_new.mapv_inplace(|v| if v < 0.0 { 0.0 } else { v });
    w_new
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::core::heavy_tail::HeavyTail;
    use approx::assert_relative_eq;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The fixed step-size formula.
    // - Non-negativity of the candidate weights after projection.
    // - The gradient vanishing at a consensus point (Theta = L(w), zero
    //   duals, degree target met, no data term).
    //
    // They intentionally DO NOT cover:
    // - Convergence of repeated steps (controller-level tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // `step_size` matches 1/(2·rho·(2p−1)).
    //
    // Given
    // -----
    // - rho = 2.0, p = 4.
    //
    // Expect
    // ------
    // - eta = 1/28.
    fn step_size_matches_formula() {
        // Arrange + Act
        let eta = step_size(2.0, 4);

        // Assert
        assert_relative_eq!(eta, 1.0 / 28.0, epsilon = 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // Every entry of the candidate weights is ≥ 0 after the projection,
    // for random states and data.
    //
    // Given
    // -----
    // - Random weights, duals, and scatters for p = 5, both observation
    //   models.
    //
    // Expect
    // ------
    // - All returned entries are non-negative.
    fn update_weights_projects_onto_nonnegative_orthant() {
        // Arrange
        let mut rng = StdRng::seed_from_u64(17);
        let p = 5;
        let m = operators::edge_count(p);
        let w0 = Array1::from_iter((0..m).map(|_| rng.gen_range(0.0..1.0)));
        let mut state = AdmmState::new(w0, p, 0.5);
        state.dual_matrix.mapv_inplace(|_| rng.gen_range(-2.0..2.0));
        state.dual_degrees.mapv_inplace(|_| rng.gen_range(-2.0..2.0));
        let scatters: Vec<Array1<f64>> = (0..8)
            .map(|_| Array1::from_iter((0..m).map(|_| rng.gen_range(0.0..3.0))))
            .collect();
        let d = Array1::from_elem(p, 1.0);

        // Act + Assert
        for model in [HeavyTail::gaussian(), HeavyTail::student(4.0).unwrap()] {
            let w_new = update_weights(&state, &model, &scatters, d.view());
            assert_eq!(w_new.len(), m);
            for &v in w_new.iter() {
                assert!(v >= 0.0, "projected weight {v} is negative");
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // At a consensus point with no data term the gradient vanishes, so the
    // step returns the weights unchanged.
    //
    // Given
    // -----
    // - Theta = L(w), zero duals, degree target equal to diag(L(w)), and an
    //   empty scatter set.
    //
    // Expect
    // ------
    // - The returned weights equal the current weights elementwise.
    fn update_weights_is_stationary_at_consensus() {
        // Arrange
        let w = array![0.5, 0.0, 1.5];
        let state = AdmmState::new(w.clone(), 3, 1.0);
        let d = operators::degrees(state.laplacian.view());
        let scatters: Vec<Array1<f64>> = Vec::new();

        // Act
        let w_new = update_weights(&state, &HeavyTail::gaussian(), &scatters, d.view());

        // Assert
        for k in 0..w.len() {
            assert_relative_eq!(w_new[k], w[k], epsilon = 1e-12);
        }
    }
}
