//! Initial-weight strategies for graph learning.
//!
//! Purpose
//! -------
//! Provide the initializer capability consumed by the estimation loop: given
//! the observation data, produce a non-negative starting edge-weight vector.
//! The solver depends only on this interface, not on any strategy's
//! internals.
//!
//! Key behaviors
//! -------------
//! - [`WeightInit::Naive`] builds a Pearson correlation matrix of the
//!   observations, takes an eigen-truncated pseudoinverse as a rough
//!   precision estimate, and reads non-negative edge weights off its negated
//!   off-diagonal entries.
//! - [`WeightInit::Fixed`] validates and passes through a user-supplied
//!   weight vector.
//! - [`degree_normalize`] rescales a starting vector so each vertex's
//!   incident weights sum to (approximately) one, the reference starting
//!   point for the degree-targeted iteration.
//!
//! Invariants & assumptions
//! ------------------------
//! - Returned weight vectors are finite, non-negative, and of length
//!   `p(p−1)/2` for the data's vertex count `p`.
//! - The pseudoinverse truncates eigenvalues with magnitude at most
//!   [`EIGEN_EPS`], so rank-deficient correlation matrices (e.g., from
//!   `n < p`) are handled without error.
//! - Zero-variance columns contribute zero correlation off the diagonal
//!   rather than NaN.
//!
//! Conventions
//! -----------
//! - Edge layout follows
//!   [`operators::edge_index`](crate::graphs::core::operators::edge_index).
//! - `degree_normalize` divides each upper-triangle adjacency entry by the
//!   incident-weight sum of its row vertex (the smaller index), matching the
//!   reference's row normalization; rows with (near-)zero incident weight
//!   are left untouched instead of producing NaN.
//!
//! Testing notes
//! -------------
//! - Unit tests cover non-negativity and shape of the naive strategy,
//!   fixed-vector validation, the pseudoinverse on a known full-rank matrix,
//!   and degree normalization including the zero-row guard.
use crate::graphs::{
    core::{data::GraphData, operators, validation::validate_weight_vector},
    errors::GraphResult,
};
use nalgebra::DMatrix;
use ndarray::{Array1, Array2, ArrayView2};

/// Eigenvalues with magnitude at most this are treated as zero when forming
/// the pseudoinverse of the correlation matrix.
pub const EIGEN_EPS: f64 = 1e-10;

/// Row sums at or below this are not used for normalization.
const DEGREE_EPS: f64 = 1e-12;

/// Initial-weight strategy for the estimation loop.
///
/// Purpose
/// -------
/// Encode how the starting edge-weight vector is produced: from a naive
/// precision-matrix heuristic on the data, or from an explicit user-supplied
/// vector.
///
/// Variants
/// --------
/// - `Naive`
///   Derive weights from the eigen-truncated pseudoinverse of the Pearson
///   correlation matrix of the observations.
/// - `Fixed { weights }`
///   Use the supplied non-negative vector; its length is checked against the
///   data's vertex count when the strategy is applied.
///
/// Notes
/// -----
/// - Downstream code should pattern-match exhaustively so the compiler flags
///   missing cases if new strategies are added later.
#[derive(Debug, Clone, PartialEq)]
pub enum WeightInit {
    Naive,
    Fixed { weights: Array1<f64> },
}

impl WeightInit {
    /// Naive precision-matrix strategy.
    pub const fn naive() -> Self {
        WeightInit::Naive
    }

    /// Fixed starting weights, validated for finiteness and non-negativity.
    ///
    /// Parameters
    /// ----------
    /// - `weights`: `Array1<f64>`
    ///   Candidate starting vector. Entries must be finite and ≥ 0. Length
    ///   is validated later against the data's vertex count (when it is
    ///   known) by [`WeightInit::initial_weights`].
    ///
    /// Returns
    /// -------
    /// `GraphResult<WeightInit>`
    ///   - `Ok(WeightInit::Fixed)` when every entry is admissible.
    ///   - `Err(GraphError::{NonFiniteWeight, NegativeWeight})` otherwise.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    pub fn fixed(weights: Array1<f64>) -> GraphResult<Self> {
        validate_weight_vector(weights.view(), weights.len())?;
        Ok(WeightInit::Fixed { weights })
    }

    /// Produce the starting edge-weight vector for the given data.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `&GraphData`
    ///   Validated observations; determines the vertex count `p` and, for
    ///   the naive strategy, the correlation structure.
    ///
    /// Returns
    /// -------
    /// `GraphResult<Array1<f64>>`
    ///   A finite, non-negative vector of length `p(p−1)/2`.
    ///
    /// Errors
    /// ------
    /// - `GraphError::WeightLengthMismatch`
    ///   For `Fixed` when the supplied vector's length differs from the
    ///   data's edge count.
    ///
    /// Notes
    /// -----
    /// - The naive strategy clips negated precision off-diagonals at zero,
    ///   so weakly negative partial correlations map to absent edges.
    pub fn initial_weights(&self, data: &GraphData) -> GraphResult<Array1<f64>> {
        let p = data.n_vertices();
        let m = operators::edge_count(p);
        match self {
            WeightInit::Naive => {
                let corr = correlation_matrix(data.x.view());
                let precision = symmetric_pseudo_inverse(&corr);
                let mut w0 = Array1::<f64>::zeros(m);
                let mut k = 0;
                for i in 0..p {
                    for j in (i + 1)..p {
                        w0[k] = (-precision[[i, j]]).max(0.0);
                        k += 1;
                    }
                }
                Ok(w0)
            }
            WeightInit::Fixed { weights } => {
                validate_weight_vector(weights.view(), m)?;
                Ok(weights.clone())
            }
        }
    }
}

/// Rescale starting weights so each vertex's incident weights sum to
/// (approximately) one.
///
/// Each upper-triangle adjacency entry `(i, j)` is divided by the
/// incident-weight sum of vertex `i`. Vertices whose incident sum is at most
/// `DEGREE_EPS` are skipped, leaving their (zero) weights untouched.
///
/// Parameters
/// ----------
/// - `w`: `Array1<f64>`
///   Starting weights in edge layout; consumed.
/// - `p`: `usize`
///   Vertex count matching the edge layout of `w`.
///
/// Returns
/// -------
/// The normalized weight vector, in the same edge layout.
pub fn degree_normalize(w: Array1<f64>, p: usize) -> Array1<f64> {
    let a = operators::adjacency(w.view(), p);
    let row_sums: Vec<f64> = (0..p).map(|i| a.row(i).sum()).collect();
    let mut out = w;
    let mut k = 0;
    for i in 0..p {
        for _j in (i + 1)..p {
            if row_sums[i] > DEGREE_EPS {
                out[k] /= row_sums[i];
            }
            k += 1;
        }
    }
    out
}

// ---- Helper Methods ----

/// Pearson correlation matrix of the observation columns.
///
/// Columns with (near-)zero standard deviation contribute unit diagonal and
/// zero off-diagonal entries instead of NaN.
fn correlation_matrix(x: ArrayView2<f64>) -> Array2<f64> {
    let n = x.nrows() as f64;
    let p = x.ncols();
    let means: Vec<f64> = (0..p).map(|j| x.column(j).sum() / n).collect();
    let mut cov = Array2::<f64>::zeros((p, p));
    for i in 0..p {
        for j in i..p {
            let mut acc = 0.0;
            for q in 0..x.nrows() {
                acc += (x[[q, i]] - means[i]) * (x[[q, j]] - means[j]);
            }
            let c = acc / (n - 1.0);
            cov[[i, j]] = c;
            cov[[j, i]] = c;
        }
    }
    let stds: Vec<f64> = (0..p).map(|i| cov[[i, i]].sqrt()).collect();
    let mut corr = Array2::<f64>::zeros((p, p));
    for i in 0..p {
        corr[[i, i]] = 1.0;
        for j in (i + 1)..p {
            let denom = stds[i] * stds[j];
            let c = if denom > DEGREE_EPS { cov[[i, j]] / denom } else { 0.0 };
            corr[[i, j]] = c;
            corr[[j, i]] = c;
        }
    }
    corr
}

/// Moore–Penrose pseudoinverse of a symmetric matrix via eigendecomposition.
///
/// Eigenvalues with magnitude at most [`EIGEN_EPS`] are treated as zero and
/// excluded, so rank-deficient inputs are inverted on their range only.
fn symmetric_pseudo_inverse(s: &Array2<f64>) -> Array2<f64> {
    let p = s.nrows();
    let s_nalg = DMatrix::from_fn(p, p, |i, j| s[[i, j]]);
    let eigen_decomp = s_nalg.symmetric_eigen();
    let q = eigen_decomp.eigenvectors;
    let eigenvals = eigen_decomp.eigenvalues;
    let mut pinv = Array2::<f64>::zeros((p, p));
    for i in 0..p {
        for j in 0..p {
            pinv[[i, j]] = eigenvals
                .iter()
                .enumerate()
                .filter(|(_, lambda)| lambda.abs() > EIGEN_EPS)
                .map(|(k, &lambda)| q[(i, k)] * q[(j, k)] / lambda)
                .sum();
        }
    }
    pinv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::errors::GraphError;
    use approx::assert_relative_eq;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Shape and non-negativity of the naive strategy's output.
    // - Fixed-vector validation (negativity, length at application time).
    // - The symmetric pseudoinverse against a known full-rank matrix.
    // - Degree normalization including the zero-row guard.
    //
    // They intentionally DO NOT cover:
    // - Statistical quality of the naive starting point (the solver refines
    //   it; recovery is exercised by integration tests).
    // -------------------------------------------------------------------------

    fn random_data(seed: u64, n: usize, p: usize) -> GraphData {
        let mut rng = StdRng::seed_from_u64(seed);
        let x = Array2::from_shape_fn((n, p), |_| rng.gen_range(-1.0..1.0));
        GraphData::new(x).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // The naive strategy returns a finite, non-negative vector of edge
    // length for the data's vertex count.
    //
    // Given
    // -----
    // - Random 20×5 observations.
    //
    // Expect
    // ------
    // - Length p(p−1)/2 = 10; every entry finite and ≥ 0.
    fn naive_initial_weights_are_non_negative_with_edge_length() {
        // Arrange
        let data = random_data(3, 20, 5);

        // Act
        let w0 = WeightInit::naive().initial_weights(&data).unwrap();

        // Assert
        assert_eq!(w0.len(), 10);
        for &v in w0.iter() {
            assert!(v.is_finite() && v >= 0.0);
        }
    }

    #[test]
    // Purpose
    // -------
    // `WeightInit::fixed` rejects negative entries at construction.
    //
    // Given
    // -----
    // - A vector with a negative entry.
    //
    // Expect
    // ------
    // - `Err(GraphError::NegativeWeight { index: 1, .. })`.
    fn fixed_constructor_rejects_negative_entries() {
        // Arrange
        let weights = array![0.5, -1.0, 0.25];

        // Act
        let err = WeightInit::fixed(weights).unwrap_err();

        // Assert
        assert_eq!(err, GraphError::NegativeWeight { index: 1, value: -1.0 });
    }

    #[test]
    // Purpose
    // -------
    // Applying a fixed strategy whose length does not match the data's edge
    // count fails with a length mismatch.
    //
    // Given
    // -----
    // - A length-3 fixed vector applied to 4-vertex data (edge count 6).
    //
    // Expect
    // ------
    // - `Err(GraphError::WeightLengthMismatch { expected: 6, actual: 3 })`.
    fn fixed_initial_weights_check_length_against_data() {
        // Arrange
        let data = random_data(5, 12, 4);
        let init = WeightInit::fixed(array![0.5, 0.5, 0.5]).unwrap();

        // Act
        let err = init.initial_weights(&data).unwrap_err();

        // Assert
        assert_eq!(err, GraphError::WeightLengthMismatch { expected: 6, actual: 3 });
    }

    #[test]
    // Purpose
    // -------
    // The symmetric pseudoinverse inverts a full-rank symmetric matrix.
    //
    // Given
    // -----
    // - The 2×2 matrix [[2, 1], [1, 2]] with inverse [[2/3, −1/3], [−1/3, 2/3]].
    //
    // Expect
    // ------
    // - Entries match the analytic inverse within tolerance.
    fn symmetric_pseudo_inverse_matches_analytic_inverse() {
        // Arrange
        let s = array![[2.0, 1.0], [1.0, 2.0]];

        // Act
        let pinv = symmetric_pseudo_inverse(&s);

        // Assert
        assert_relative_eq!(pinv[[0, 0]], 2.0 / 3.0, epsilon = 1e-10);
        assert_relative_eq!(pinv[[0, 1]], -1.0 / 3.0, epsilon = 1e-10);
        assert_relative_eq!(pinv[[1, 1]], 2.0 / 3.0, epsilon = 1e-10);
    }

    #[test]
    // Purpose
    // -------
    // `degree_normalize` divides each upper-triangle entry by its row
    // vertex's incident sum and leaves zero rows untouched.
    //
    // Given
    // -----
    // - p = 3 with weights (w01, w02, w12) = (1, 3, 0): vertex 0 has
    //   incident sum 4, vertex 1 has 1, vertex 2 is attached only via w02.
    //
    // Expect
    // ------
    // - Normalized weights (1/4, 3/4, 0); an all-zero vector stays zero.
    fn degree_normalize_divides_by_row_sums_and_guards_zero_rows() {
        // Arrange
        let w = array![1.0, 3.0, 0.0];
        let zeros = array![0.0, 0.0, 0.0];

        // Act
        let normalized = degree_normalize(w, 3);
        let still_zero = degree_normalize(zeros, 3);

        // Assert
        assert_relative_eq!(normalized[0], 0.25, epsilon = 1e-14);
        assert_relative_eq!(normalized[1], 0.75, epsilon = 1e-14);
        assert_eq!(normalized[2], 0.0);
        assert_eq!(still_zero, array![0.0, 0.0, 0.0]);
    }
}
