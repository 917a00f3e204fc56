//! Execution driver for the ADMM graph-estimation loop.
//!
//! [`run_admm`] owns the whole lifecycle of one estimation run: it validates
//! the solver inputs, initializes the iterate state (starting weights, their
//! Laplacian as the initial Theta, zeroed duals), then repeats the
//! primal step → slack projection → dual ascent → penalty adaptation →
//! diagnostics sequence until either the relative Frobenius change between
//! successive Laplacian estimates falls below `reltol` (checked only from
//! the second iteration onward, guarding against spurious convergence on
//! iteration one) or the iteration cap is exhausted. Both exits assemble the
//! same [`AdmmOutcome`] from the last completed iterate; running out of
//! iterations is reported through `converged = false`, not as an error.
//!
//! The injected [`IterationObserver`] is invoked exactly once per completed
//! iteration, after that iteration's diagnostics row is recorded. The solver
//! never owns or initializes an observer; callers that want progress output
//! attach one (the model layer uses
//! [`TermObserver`](crate::estimation::admm::traits::TermObserver) when
//! `verbose` is set).
//!
//! Ordering within one iteration follows the reference procedure: the duals
//! ascend with the pre-adaptation rho, the penalty rule compares residuals
//! using that same rho, and the recorded dual residual and Lagrangian use
//! the post-adaptation rho and updated duals.
use crate::{
    estimation::{
        admm::{
            diagnostics::{self, AdmmDiagnostics},
            dual, primal, slack,
            state::AdmmState,
            traits::{AdmmOptions, AdmmOutcome, IterationObserver, IterationRecord,
                ObservationWeights},
        },
        errors::{EstResult, EstimationError},
    },
    graphs::core::{guards::PenaltyGuards, operators},
};
use ndarray::Array1;
use std::time::Instant;

/// Run the ADMM estimation loop to completion.
///
/// # Arguments
/// - `model`: observation model supplying per-observation weights.
/// - `scatters`: per-observation edge scatters `Lstar(x_q x_qᵀ)/(n−1)`.
/// - `w0`: starting edge weights (consumed; finite, non-negative, length
///   `p(p−1)/2`).
/// - `degrees_target`: length-`p` target degree vector.
/// - `n_vertices`: vertex count `p`.
/// - `opts`: validated solver options.
/// - `guards`: penalty bounds applied after each adaptation.
/// - `observer`: per-iteration progress capability.
///
/// # Returns
/// An [`AdmmOutcome`] with the final weights, Theta, the executed iteration
/// count, the convergence flag, and diagnostics whose sequences all have
/// length equal to the iteration count.
///
/// # Errors
/// - [`EstimationError::EmptyScatterSet`] when no scatters are supplied.
/// - [`EstimationError::ScatterLengthMismatch`] /
///   [`EstimationError::WeightLengthMismatch`] /
///   [`EstimationError::DegreeLengthMismatch`] on shape violations.
/// - [`EstimationError::InvalidStartingWeight`] for non-finite or negative
///   starting weights.
pub fn run_admm<W: ObservationWeights>(
    model: &W, scatters: &[Array1<f64>], w0: Array1<f64>, degrees_target: &Array1<f64>,
    n_vertices: usize, opts: &AdmmOptions, guards: &PenaltyGuards,
    observer: &mut dyn IterationObserver,
) -> EstResult<AdmmOutcome> {
    let p = n_vertices;
    let m = operators::edge_count(p);
    validate_inputs(scatters, &w0, degrees_target, p, m)?;

    let mut state = AdmmState::new(w0, p, opts.rho);
    let mut diag = AdmmDiagnostics::with_capacity(opts.tols.max_iter);
    let mut converged = false;
    let mut iterations = 0;
    let start = Instant::now();

    for iter in 0..opts.tols.max_iter {
        // Primal step and the candidate iterates it implies.
        let w_new = primal::update_weights(&state, model, scatters, degrees_target.view());
        let lap_new = operators::laplacian(w_new.view(), p);
        let theta_new = slack::update_slack(&lap_new, &state.dual_matrix, state.rho);

        // Dual ascent with the pre-adaptation rho.
        let (lap_residual, deg_residual) =
            dual::ascend_duals(&mut state, &theta_new, &lap_new, degrees_target.view());

        // Penalty adaptation compares residuals at the pre-adaptation rho.
        let theta_gap = operators::lstar((&state.theta - &theta_new).view());
        let theta_gap_norm = diagnostics::euclidean_norm(theta_gap.view());
        let primal_lap = diagnostics::frobenius_norm(lap_residual.view());
        let dual_res_pre = state.rho * theta_gap_norm;
        if opts.update_rho {
            dual::adapt_penalty(&mut state, primal_lap, dual_res_pre, guards);
        }

        // Diagnostics row: dual residual and Lagrangian use the updated rho
        // and duals.
        let primal_deg = diagnostics::euclidean_norm(deg_residual.view());
        let dual_res = state.rho * theta_gap_norm;
        let lagrangian = diagnostics::augmented_lagrangian(
            model,
            w_new.view(),
            scatters,
            &theta_new,
            &state.dual_matrix,
            state.dual_degrees.view(),
            degrees_target.view(),
            state.rho,
        );
        let elapsed = start.elapsed().as_secs_f64();
        diag.record(primal_lap, primal_deg, dual_res, lagrangian, elapsed);
        observer.on_iteration(&IterationRecord {
            iteration: iter,
            primal_lap_residual: primal_lap,
            primal_deg_residual: primal_deg,
            dual_residual: dual_res,
            lagrangian,
            rho: state.rho,
            elapsed,
        });

        // Relative-change test, suppressed on the first iteration.
        let change = diagnostics::frobenius_norm((&lap_new - &state.laplacian).view());
        let scale = diagnostics::frobenius_norm(state.laplacian.view());
        let has_converged = iter > 0 && change / scale < opts.tols.reltol;

        iterations = iter + 1;
        state.weights = w_new;
        state.laplacian = lap_new;
        state.theta = theta_new;

        if has_converged {
            converged = true;
            break;
        }
    }

    Ok(AdmmOutcome {
        weights: state.weights,
        theta: state.theta,
        iterations,
        converged,
        diagnostics: diag,
    })
}

// ---- Helper Methods ----

fn validate_inputs(
    scatters: &[Array1<f64>], w0: &Array1<f64>, degrees_target: &Array1<f64>, p: usize, m: usize,
) -> EstResult<()> {
    if scatters.is_empty() {
        return Err(EstimationError::EmptyScatterSet);
    }
    for (index, scatter) in scatters.iter().enumerate() {
        if scatter.len() != m {
            return Err(EstimationError::ScatterLengthMismatch {
                index,
                expected: m,
                actual: scatter.len(),
            });
        }
    }
    if w0.len() != m {
        return Err(EstimationError::WeightLengthMismatch { expected: m, actual: w0.len() });
    }
    for (index, &value) in w0.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(EstimationError::InvalidStartingWeight { index, value });
        }
    }
    if degrees_target.len() != p {
        return Err(EstimationError::DegreeLengthMismatch {
            expected: p,
            actual: degrees_target.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::admm::traits::{NoopObserver, Tolerances};
    use crate::graphs::core::heavy_tail::HeavyTail;
    use approx::assert_relative_eq;
    use ndarray::Array2;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Input validation of `run_admm`.
    // - Structural invariants across iterations: non-negative weights,
    //   zero-row-sum symmetric Laplacian, diagnostics lengths equal to the
    //   executed iteration count.
    // - Suppression of the convergence test on the first iteration.
    // - Observer invocation once per completed iteration.
    //
    // They intentionally DO NOT cover:
    // - Statistical recovery quality (integration tests).
    // -------------------------------------------------------------------------

    fn synthetic_scatters(seed: u64, n: usize, p: usize) -> Vec<Array1<f64>> {
        let mut rng = StdRng::seed_from_u64(seed);
        let x = Array2::from_shape_fn((n, p), |_| rng.gen_range(-1.0..1.0));
        crate::graphs::core::data::GraphData::new(x).unwrap().edge_scatters()
    }

    fn uniform_start(p: usize) -> Array1<f64> {
        Array1::from_elem(operators::edge_count(p), 0.5)
    }

    struct CountingObserver {
        calls: usize,
    }

    impl IterationObserver for CountingObserver {
        fn on_iteration(&mut self, record: &IterationRecord) {
            assert_eq!(record.iteration, self.calls);
            self.calls += 1;
        }
    }

    #[test]
    // Purpose
    // -------
    // `run_admm` rejects an empty scatter set and shape mismatches.
    //
    // Given
    // -----
    // - p = 3 with no scatters, then a wrong-length w0, then a wrong-length
    //   degree target.
    //
    // Expect
    // ------
    // - The matching `EstimationError` variant for each case.
    fn run_admm_validates_inputs() {
        // Arrange
        let p = 3;
        let opts = AdmmOptions::default();
        let guards = PenaltyGuards::default();
        let model = HeavyTail::gaussian();
        let scatters = synthetic_scatters(1, 5, p);
        let d = Array1::from_elem(p, 1.0);

        // Act + Assert
        let empty: Vec<Array1<f64>> = Vec::new();
        assert_eq!(
            run_admm(&model, &empty, uniform_start(p), &d, p, &opts, &guards, &mut NoopObserver)
                .unwrap_err(),
            EstimationError::EmptyScatterSet
        );

        let bad_w0 = Array1::from_elem(2, 0.5);
        assert_eq!(
            run_admm(&model, &scatters, bad_w0, &d, p, &opts, &guards, &mut NoopObserver)
                .unwrap_err(),
            EstimationError::WeightLengthMismatch { expected: 3, actual: 2 }
        );

        let bad_d = Array1::from_elem(2, 1.0);
        assert_eq!(
            run_admm(&model, &scatters, uniform_start(p), &bad_d, p, &opts, &guards,
                &mut NoopObserver)
                .unwrap_err(),
            EstimationError::DegreeLengthMismatch { expected: 3, actual: 2 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Across a short run, the final weights are non-negative, the final
    // Laplacian is symmetric with zero row sums, and every diagnostic
    // sequence has length equal to the executed iteration count.
    //
    // Given
    // -----
    // - Random 10×4 data, both observation models, 40-iteration cap.
    //
    // Expect
    // ------
    // - The structural invariants hold for both models.
    fn run_admm_maintains_structural_invariants() {
        // Arrange
        let p = 4;
        let scatters = synthetic_scatters(9, 10, p);
        let d = Array1::from_elem(p, 1.0);
        let opts = AdmmOptions::new(1.0, true, Tolerances::new(1e-8, 40).unwrap(), false).unwrap();
        let guards = PenaltyGuards::default();

        for model in [HeavyTail::gaussian(), HeavyTail::student(4.0).unwrap()] {
            // Act
            let outcome = run_admm(
                &model,
                &scatters,
                uniform_start(p),
                &d,
                p,
                &opts,
                &guards,
                &mut NoopObserver,
            )
            .unwrap();

            // Assert
            assert!(outcome.iterations >= 1 && outcome.iterations <= 40);
            for &w in outcome.weights.iter() {
                assert!(w >= 0.0);
            }
            let lap = operators::laplacian(outcome.weights.view(), p);
            for i in 0..p {
                let mut row_sum = 0.0;
                for j in 0..p {
                    assert_relative_eq!(lap[[i, j]], lap[[j, i]], epsilon = 1e-12);
                    row_sum += lap[[i, j]];
                }
                assert_relative_eq!(row_sum, 0.0, epsilon = 1e-10);
            }
            assert_eq!(outcome.diagnostics.len(), outcome.iterations);
            assert_eq!(outcome.diagnostics.primal_deg_residual.len(), outcome.iterations);
            assert_eq!(outcome.diagnostics.dual_residual.len(), outcome.iterations);
            assert_eq!(outcome.diagnostics.lagrangian.len(), outcome.iterations);
            assert_eq!(outcome.diagnostics.elapsed_time.len(), outcome.iterations);
        }
    }

    #[test]
    // Purpose
    // -------
    // The convergence test is suppressed on the first iteration, so a
    // one-iteration run never reports convergence.
    //
    // Given
    // -----
    // - max_iter = 1 with an enormous reltol that would otherwise fire.
    //
    // Expect
    // ------
    // - `converged == false` and `iterations == 1`.
    fn run_admm_suppresses_convergence_on_first_iteration() {
        // Arrange
        let p = 3;
        let scatters = synthetic_scatters(21, 6, p);
        let d = Array1::from_elem(p, 1.0);
        let opts = AdmmOptions::new(1.0, true, Tolerances::new(1e6, 1).unwrap(), false).unwrap();
        let guards = PenaltyGuards::default();

        // Act
        let outcome = run_admm(
            &HeavyTail::gaussian(),
            &scatters,
            uniform_start(p),
            &d,
            p,
            &opts,
            &guards,
            &mut NoopObserver,
        )
        .unwrap();

        // Assert
        assert_eq!(outcome.iterations, 1);
        assert!(!outcome.converged);
    }

    #[test]
    // Purpose
    // -------
    // The observer is invoked exactly once per completed iteration, in
    // order.
    //
    // Given
    // -----
    // - A counting observer asserting 0-based iteration indices.
    //
    // Expect
    // ------
    // - Call count equals the reported iteration count.
    fn run_admm_invokes_observer_once_per_iteration() {
        // Arrange
        let p = 3;
        let scatters = synthetic_scatters(33, 8, p);
        let d = Array1::from_elem(p, 1.0);
        let opts = AdmmOptions::new(1.0, true, Tolerances::new(1e-9, 12).unwrap(), false).unwrap();
        let guards = PenaltyGuards::default();
        let mut observer = CountingObserver { calls: 0 };

        // Act
        let outcome = run_admm(
            &HeavyTail::gaussian(),
            &scatters,
            uniform_start(p),
            &d,
            p,
            &opts,
            &guards,
            &mut observer,
        )
        .unwrap();

        // Assert
        assert_eq!(observer.calls, outcome.iterations);
    }
}
