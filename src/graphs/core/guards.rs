//! Penalty guards — bounds on the adaptive ADMM penalty parameter.
//!
//! Purpose
//! -------
//! Provide a small, validated container bounding the penalty parameter `rho`
//! during estimation. The adaptive penalty rule multiplies or divides `rho`
//! by a constant factor whenever the primal and dual residuals drift apart;
//! over very long runs this can push `rho` to numerically extreme values.
//! Guards clamp every adapted value back into a safe range.
//!
//! Key behaviors
//! -------------
//! - Construct [`PenaltyGuards`] values that enforce strict positivity and
//!   finiteness of the lower/upper bounds.
//! - Reject invalid guard configurations via typed errors (`GraphError`)
//!   instead of panicking at call sites.
//! - Expose a [`PenaltyGuards::clamp`] helper applied by the dual/penalty
//!   updater after every adaptation step.
//!
//! Invariants & assumptions
//! ------------------------
//! - `min < max` must hold for all constructed guards.
//! - Both `min` and `max` must be finite floating-point values.
//! - `min > 0.0` so the penalty (and the gradient step size derived from it)
//!   stays strictly positive.
//!
//! Conventions
//! -----------
//! - The default range `(1e-6, 1e6)` is wide enough not to interfere with
//!   the residual-balancing rule on well-scaled problems; callers that want
//!   the unclamped reference behavior can widen the bounds further.
//!
//! Testing notes
//! -------------
//! - Unit tests validate that `PenaltyGuards::new` accepts valid `(min, max)`
//!   pairs and rejects non-finite bounds, non-positive `min`, and
//!   `min >= max`, and that `clamp` is the identity inside the range.
use crate::graphs::errors::{GraphError, GraphResult};

/// PenaltyGuards — lower/upper bounds for the ADMM penalty parameter.
///
/// Purpose
/// -------
/// Represent a pair of validated lower/upper bounds for the penalty `rho`,
/// keeping it within a safe numeric range while the adaptive rule responds
/// to residual imbalance.
///
/// Fields
/// ------
/// - `min`: `f64`
///   Lower bound for `rho` (strictly greater than 0.0).
/// - `max`: `f64`
///   Upper bound for `rho` (strictly greater than `min`).
///
/// Invariants
/// ----------
/// - `min > 0.0`, `min < max`, both finite.
///
/// Performance
/// -----------
/// - Construction is O(1); the type is `Copy` and cheap to pass by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenaltyGuards {
    /// Lower bound for rho (strictly > 0).
    pub min: f64,
    /// Upper bound for rho (must be > `min`).
    pub max: f64,
}

impl PenaltyGuards {
    /// Construct validated penalty bounds from a `(min, max)` tuple.
    ///
    /// Parameters
    /// ----------
    /// - `value`: `(f64, f64)`
    ///   Tuple `(min, max)` specifying the desired lower and upper bounds on
    ///   the penalty parameter.
    ///
    /// Returns
    /// -------
    /// `GraphResult<PenaltyGuards>`
    ///   - `Ok(PenaltyGuards)` when `0.0 < min < max` and both bounds are
    ///     finite.
    ///   - `Err(GraphError::InvalidPenaltyGuards { .. })` when the provided
    ///     tuple violates any of the guard invariants.
    ///
    /// Errors
    /// ------
    /// - `GraphError::InvalidPenaltyGuards`
    ///   Returned when `min >= max`, either bound is not finite, or
    ///   `min <= 0.0`.
    ///
    /// Panics
    /// ------
    /// - Never panics; all invalid inputs are reported via
    ///   `GraphError::InvalidPenaltyGuards`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_graphlearn::graphs::core::guards::PenaltyGuards;
    /// let guards = PenaltyGuards::new((1e-6, 1e6)).unwrap();
    /// assert_eq!(guards.clamp(1.0), 1.0);
    /// assert_eq!(guards.clamp(1e9), 1e6);
    /// ```
    pub fn new(value: (f64, f64)) -> GraphResult<Self> {
        if value.0 >= value.1 {
            return Err(GraphError::InvalidPenaltyGuards {
                min: value.0,
                max: value.1,
                reason: "Penalty guards must have min < max.",
            });
        }

        if !value.0.is_finite() || !value.1.is_finite() {
            return Err(GraphError::InvalidPenaltyGuards {
                min: value.0,
                max: value.1,
                reason: "Penalty guards must be finite.",
            });
        }

        if value.0 <= 0.0 {
            return Err(GraphError::InvalidPenaltyGuards {
                min: value.0,
                max: value.1,
                reason: "Penalty guards must be strictly positive.",
            });
        }

        Ok(PenaltyGuards { min: value.0, max: value.1 })
    }

    /// Clamp a penalty value into `[self.min, self.max]`.
    ///
    /// Returns `self.min` if `value < self.min`, `self.max` if
    /// `value > self.max`, and `value` otherwise.
    pub fn clamp(&self, value: f64) -> f64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

impl Default for PenaltyGuards {
    /// Wide default range `(1e-6, 1e6)` that leaves the adaptive rule
    /// effectively unconstrained on well-scaled problems.
    fn default() -> Self {
        PenaltyGuards { min: 1e-6, max: 1e6 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::errors::GraphError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Validation behavior of `PenaltyGuards::new` for valid and invalid
    //   (min, max) tuples.
    // - Clamping behavior inside, below, and above the range.
    //
    // They intentionally DO NOT cover:
    // - How guards interact with the adaptive penalty rule (tested in the
    //   dual-updater module).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // `PenaltyGuards::new` accepts a valid (min, max) pair and returns a
    // guard with matching fields.
    //
    // Given
    // -----
    // - `min = 1e-6`, `max = 1e6`, both finite and strictly positive.
    //
    // Expect
    // ------
    // - `Ok(PenaltyGuards)` with fields equal to the inputs.
    fn penaltyguards_new_accepts_valid_bounds() {
        // Arrange
        let min = 1e-6;
        let max = 1e6;

        // Act
        let result = PenaltyGuards::new((min, max)).expect("valid bounds should construct");

        // Assert
        assert_eq!(result.min, min);
        assert_eq!(result.max, max);
    }

    #[test]
    // Purpose
    // -------
    // `PenaltyGuards::new` rejects min >= max, non-finite bounds, and
    // non-positive min.
    //
    // Given
    // -----
    // - Tuples (1.0, 1.0), (1.0, ∞), and (0.0, 10.0).
    //
    // Expect
    // ------
    // - `Err(GraphError::InvalidPenaltyGuards)` for each.
    fn penaltyguards_new_rejects_invalid_bounds() {
        // Arrange
        let invalid = [(1.0, 1.0), (1.0, f64::INFINITY), (0.0, 10.0)];

        // Act + Assert
        for &(min, max) in &invalid {
            match PenaltyGuards::new((min, max)) {
                Err(GraphError::InvalidPenaltyGuards { .. }) => {}
                other => panic!("expected InvalidPenaltyGuards for ({min}, {max}), got {other:?}"),
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // `clamp` is the identity inside the range and saturates at the bounds.
    //
    // Given
    // -----
    // - Guards (0.5, 2.0) and values below, inside, and above the range.
    //
    // Expect
    // ------
    // - 0.1 → 0.5, 1.0 → 1.0, 8.0 → 2.0.
    fn clamp_saturates_at_bounds() {
        // Arrange
        let guards = PenaltyGuards::new((0.5, 2.0)).unwrap();

        // Act + Assert
        assert_eq!(guards.clamp(0.1), 0.5);
        assert_eq!(guards.clamp(1.0), 1.0);
        assert_eq!(guards.clamp(8.0), 2.0);
    }

    #[test]
    // Purpose
    // -------
    // `PenaltyGuards::default` matches the documented wide range.
    //
    // Given
    // -----
    // - The `Default` implementation.
    //
    // Expect
    // ------
    // - `min = 1e-6`, `max = 1e6`.
    fn penaltyguards_default_matches_documented_range() {
        // Arrange + Act
        let guards = PenaltyGuards::default();

        // Assert
        assert_eq!(guards.min, 1e-6);
        assert_eq!(guards.max, 1e6);
    }
}
