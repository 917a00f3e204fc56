//! Observation models for graph learning: Gaussian and Student-t tails.
//!
//! This module defines [`HeavyTail`], which enumerates the supported
//! observation models for the graph-learning estimator. The variant decides
//! how much each observation contributes to the edge-weight gradient: under
//! the Student-t model, observations whose quadratic form under the current
//! graph is large (poor fit / outlier-like) are **down-weighted**; under the
//! Gaussian model every observation carries weight 1. This reweighting is the
//! single mechanism distinguishing the heavy-tailed estimator from the
//! Gaussian one.
//!
//! ## Supported models
//! - [`HeavyTail::Gaussian`]: no parameters; per-observation weight ≡ 1.
//! - [`HeavyTail::Student`]: degrees of freedom `nu > 2`, validated at
//!   construction. Weight `(p + nu)/(quad + nu)` for quadratic form `quad`.
//!
//! ## Design
//! The model is a tagged variant rather than a string so the hot loop
//! dispatches on an enum discriminant. The `nu` parameter only exists on
//! `Student`; the ambiguity of "nu supplied under a Gaussian model" is
//! therefore unrepresentable. Both the gradient reweighting and the
//! augmented-Lagrangian likelihood term are exposed through the
//! [`ObservationWeights`] capability so the solver stays generic over the
//! observation model.
use crate::{
    estimation::admm::traits::ObservationWeights,
    graphs::{core::validation::validate_degrees_of_freedom, errors::GraphResult},
};

/// Observation model for the graph-learning estimator.
///
/// Variants encode Gaussian and Student-t observation models. `Student`
/// carries validated degrees of freedom `nu > 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeavyTail {
    /// Gaussian observations; every observation receives weight 1.
    Gaussian,
    /// Student-t observations with degrees of freedom `nu > 2`.
    Student { nu: f64 },
}

impl HeavyTail {
    /// Gaussian observation model.
    ///
    /// Requires no parameters and always succeeds.
    pub const fn gaussian() -> Self {
        HeavyTail::Gaussian
    }

    /// Student-t observation model with degrees of freedom `nu`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidDegreesOfFreedom`] if `nu` is not finite
    /// or ≤ 2.
    ///
    /// [`GraphError::InvalidDegreesOfFreedom`]: crate::graphs::errors::GraphError::InvalidDegreesOfFreedom
    pub fn student(nu: f64) -> GraphResult<Self> {
        let nu = validate_degrees_of_freedom(nu)?;
        Ok(HeavyTail::Student { nu })
    }
}

impl ObservationWeights for HeavyTail {
    /// Per-observation gradient weight given the quadratic form `quad` of the
    /// current graph at that observation.
    ///
    /// - `Gaussian`: identically 1.
    /// - `Student { nu }`: `(p + nu)/(quad + nu)`, the Student-t
    ///   down-weighting of observations the current graph explains poorly.
    fn observation_weight(&self, quad: f64, p: usize) -> f64 {
        match self {
            HeavyTail::Gaussian => 1.0,
            HeavyTail::Student { nu } => (p as f64 + nu) / (quad + nu),
        }
    }

    /// Per-observation negative log-likelihood term used by the augmented
    /// Lagrangian diagnostic.
    ///
    /// - `Gaussian`: `n · quad`.
    /// - `Student { nu }`: `(p + nu) · ln(1 + n · quad / nu)`.
    ///
    /// The caller averages these terms over observations.
    fn likelihood_term(&self, quad: f64, n: usize, p: usize) -> f64 {
        match self {
            HeavyTail::Gaussian => n as f64 * quad,
            HeavyTail::Student { nu } => {
                (p as f64 + nu) * (1.0 + n as f64 * quad / nu).ln()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::errors::GraphError;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Constructor validation for the Student-t degrees of freedom.
    // - The Gaussian weight being identically 1.
    // - The Student weight formula and its monotone down-weighting.
    // - The likelihood terms consumed by the Lagrangian diagnostic.
    //
    // They intentionally DO NOT cover:
    // - How the solver consumes the weights (estimation-layer tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // `HeavyTail::student` accepts nu > 2 and rejects nu ≤ 2.
    //
    // Given
    // -----
    // - nu = 4.0 (valid) and nu = 2.0 (boundary, invalid).
    //
    // Expect
    // ------
    // - `Ok(Student { nu: 4.0 })` and `Err(InvalidDegreesOfFreedom)`.
    fn student_constructor_validates_nu() {
        // Arrange + Act
        let valid = HeavyTail::student(4.0).unwrap();
        let err = HeavyTail::student(2.0).unwrap_err();

        // Assert
        assert_eq!(valid, HeavyTail::Student { nu: 4.0 });
        assert!(matches!(err, GraphError::InvalidDegreesOfFreedom { .. }));
    }

    #[test]
    // Purpose
    // -------
    // The Gaussian model weights every observation identically 1, regardless
    // of the quadratic form.
    //
    // Given
    // -----
    // - Quadratic forms spanning several orders of magnitude.
    //
    // Expect
    // ------
    // - `observation_weight` returns exactly 1.0 for each.
    fn gaussian_weight_is_identically_one() {
        // Arrange
        let model = HeavyTail::gaussian();

        // Act + Assert
        for quad in [0.0, 0.1, 1.0, 100.0, 1e6] {
            assert_eq!(model.observation_weight(quad, 8), 1.0);
        }
    }

    #[test]
    // Purpose
    // -------
    // The Student weight follows (p + nu)/(quad + nu) and decreases as the
    // quadratic form grows (outliers are down-weighted).
    //
    // Given
    // -----
    // - nu = 4, p = 5, quadratic forms 0 < q1 < q2.
    //
    // Expect
    // ------
    // - Exact formula at q1; weight(q2) < weight(q1).
    fn student_weight_down_weights_large_quadratic_forms() {
        // Arrange
        let model = HeavyTail::student(4.0).unwrap();
        let p = 5;

        // Act
        let at_zero = model.observation_weight(0.0, p);
        let at_one = model.observation_weight(1.0, p);
        let at_ten = model.observation_weight(10.0, p);

        // Assert
        assert_relative_eq!(at_zero, 9.0 / 4.0, epsilon = 1e-14);
        assert_relative_eq!(at_one, 9.0 / 5.0, epsilon = 1e-14);
        assert!(at_ten < at_one && at_one < at_zero);
    }

    #[test]
    // Purpose
    // -------
    // Likelihood terms match their closed forms for both models.
    //
    // Given
    // -----
    // - quad = 0.5, n = 10, p = 4, nu = 4 for the Student case.
    //
    // Expect
    // ------
    // - Gaussian: n·quad; Student: (p + nu)·ln(1 + n·quad/nu).
    fn likelihood_terms_match_closed_forms() {
        // Arrange
        let gaussian = HeavyTail::gaussian();
        let student = HeavyTail::student(4.0).unwrap();
        let (quad, n, p) = (0.5, 10, 4);

        // Act
        let g = gaussian.likelihood_term(quad, n, p);
        let s = student.likelihood_term(quad, n, p);

        // Assert
        assert_relative_eq!(g, 5.0, epsilon = 1e-14);
        assert_relative_eq!(s, 8.0 * (1.0_f64 + 10.0 * 0.5 / 4.0).ln(), epsilon = 1e-14);
    }
}
