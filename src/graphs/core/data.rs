//! Observation data containers for graph-learning models.
//!
//! Purpose
//! -------
//! Provide a small, validated container for the multivariate observation
//! matrix consumed by heavy-tailed graph learning, and precompute the
//! per-observation edge-space scatter vectors the solver iterates over.
//!
//! Key behaviors
//! -------------
//! - [`GraphData`] enforces basic data invariants (at least two observations,
//!   at least two vertices, all entries finite).
//! - [`GraphData::edge_scatters`] maps each observation `x_q` to the
//!   edge-space vector `Lstar(x_q x_qᵀ)/(n−1)`, evaluated directly as
//!   `(x_{qi} − x_{qj})²/(n−1)` per edge.
//!
//! Invariants & assumptions
//! ------------------------
//! - The observation matrix is `n×p` with observations in rows and vertices
//!   (e.g., assets) in columns.
//! - `n ≥ 2` and `p ≥ 2`; every entry is finite.
//! - Scatter vectors follow the edge layout of
//!   [`operators::edge_index`](crate::graphs::core::operators::edge_index).
//!
//! Conventions
//! -----------
//! - Indexing is 0-based and follows the usual Rust/ndarray conventions.
//! - This module does not center or standardize observations; any such
//!   preprocessing happens upstream.
//!
//! Downstream usage
//! ----------------
//! - Construct [`GraphData`] at the Rust boundary where raw observations
//!   enter the modeling stack; downstream code may rely on its invariants.
//! - The solver consumes `edge_scatters()` once per fit; the quadratic form
//!   of the current graph at observation `q` is `w · scatter_q`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction (happy path, too-few rows/columns,
//!   non-finite entries) and verify the direct scatter formula against the
//!   operator composition `Lstar(x x ᵀ)/(n−1)`.
use crate::graphs::{
    core::{operators, validation::validate_observations},
    errors::GraphResult,
};
use ndarray::{Array1, Array2};

/// `GraphData` — validated multivariate observation matrix.
///
/// Purpose
/// -------
/// Represent the `n×p` observation matrix (n observations of p entities) for
/// graph learning, validated once at construction so downstream code can
/// assume clean, finite data of admissible shape.
///
/// Fields
/// ------
/// - `x`: `Array2<f64>`
///   Observations in rows, vertices in columns. All entries finite.
///
/// Invariants
/// ----------
/// - `x.nrows() ≥ 2` and `x.ncols() ≥ 2`.
/// - Every entry of `x` is finite.
///
/// Performance
/// -----------
/// - Validation is a single O(np) scan; the container itself adds no hidden
///   allocations.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphData {
    /// Observation matrix (n observations × p vertices, all finite).
    pub x: Array2<f64>,
}

impl GraphData {
    /// Construct a validated [`GraphData`] from a raw observation matrix.
    ///
    /// Parameters
    /// ----------
    /// - `x`: `Array2<f64>`
    ///   Raw `n×p` observation matrix. Must have `n ≥ 2` rows, `p ≥ 2`
    ///   columns, and only finite entries.
    ///
    /// Returns
    /// -------
    /// `GraphResult<GraphData>`
    ///   - `Ok(GraphData)` if all invariants are satisfied.
    ///   - `Err(GraphError)` if validation fails.
    ///
    /// Errors
    /// ------
    /// - `GraphError::TooFewObservations` when `n < 2`.
    /// - `GraphError::TooFewVertices` when `p < 2`.
    /// - `GraphError::NonFiniteObservation` for the first NaN/±∞ entry.
    ///
    /// Panics
    /// ------
    /// - Never panics. All invalid inputs are reported via `GraphError`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use rust_graphlearn::graphs::core::data::GraphData;
    /// let x = array![[1.0, 2.0], [0.5, -0.5], [0.0, 1.0]];
    /// let data = GraphData::new(x).unwrap();
    /// assert_eq!(data.n_observations(), 3);
    /// assert_eq!(data.n_vertices(), 2);
    /// ```
    pub fn new(x: Array2<f64>) -> GraphResult<Self> {
        validate_observations(x.view())?;
        Ok(GraphData { x })
    }

    /// Number of observations (rows).
    pub fn n_observations(&self) -> usize {
        self.x.nrows()
    }

    /// Number of vertices (columns).
    pub fn n_vertices(&self) -> usize {
        self.x.ncols()
    }

    /// Per-observation edge-space scatter vectors.
    ///
    /// For each observation `x_q`, returns `Lstar(x_q x_qᵀ)/(n−1)` as a
    /// length-`p(p−1)/2` vector, computed directly per edge as
    /// `(x_{qi} − x_{qj})²/(n−1)`. The quadratic form of the current graph
    /// estimate at observation `q` is then `w · scatter_q`.
    ///
    /// Returns
    /// -------
    /// `Vec<Array1<f64>>` of length `n`; entry `q` follows the edge layout of
    /// [`operators::edge_index`].
    ///
    /// Notes
    /// -----
    /// - The `1/(n−1)` scaling matches the sample-covariance convention used
    ///   by the likelihood terms; `n ≥ 2` is guaranteed by construction.
    pub fn edge_scatters(&self) -> Vec<Array1<f64>> {
        let n = self.n_observations();
        let p = self.n_vertices();
        let scale = 1.0 / (n as f64 - 1.0);
        let m = operators::edge_count(p);
        let mut scatters = Vec::with_capacity(n);
        for row in self.x.rows() {
            let mut s = Array1::<f64>::zeros(m);
            let mut k = 0;
            for i in 0..p {
                for j in (i + 1)..p {
                    let diff = row[i] - row[j];
                    s[k] = diff * diff * scale;
                    k += 1;
                }
            }
            scatters.push(s);
        }
        scatters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::errors::GraphError;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Validation behavior of `GraphData::new` for admissible and
    //   inadmissible observation matrices.
    // - Agreement of the direct scatter formula with the operator composition
    //   Lstar(x xᵀ)/(n−1).
    //
    // They intentionally DO NOT cover:
    // - Solver behavior on the scatters (covered by estimation-layer tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // `GraphData::new` accepts a finite matrix with n ≥ 2 and p ≥ 2.
    //
    // Given
    // -----
    // - A 3×2 finite observation matrix.
    //
    // Expect
    // ------
    // - `Ok(GraphData)` with matching dimensions.
    fn graphdata_new_accepts_valid_matrix() {
        // Arrange
        let x = array![[1.0, 2.0], [0.5, -0.5], [0.0, 1.0]];

        // Act
        let data = GraphData::new(x).unwrap();

        // Assert
        assert_eq!(data.n_observations(), 3);
        assert_eq!(data.n_vertices(), 2);
    }

    #[test]
    // Purpose
    // -------
    // `GraphData::new` rejects matrices with fewer than two rows.
    //
    // Given
    // -----
    // - A 1×3 observation matrix.
    //
    // Expect
    // ------
    // - `Err(GraphError::TooFewObservations { n: 1 })`.
    fn graphdata_new_rejects_single_observation() {
        // Arrange
        let x = array![[1.0, 2.0, 3.0]];

        // Act
        let err = GraphData::new(x).unwrap_err();

        // Assert
        assert_eq!(err, GraphError::TooFewObservations { n: 1 });
    }

    #[test]
    // Purpose
    // -------
    // `GraphData::new` rejects matrices with fewer than two columns.
    //
    // Given
    // -----
    // - A 3×1 observation matrix.
    //
    // Expect
    // ------
    // - `Err(GraphError::TooFewVertices { p: 1 })`.
    fn graphdata_new_rejects_single_vertex() {
        // Arrange
        let x = array![[1.0], [2.0], [3.0]];

        // Act
        let err = GraphData::new(x).unwrap_err();

        // Assert
        assert_eq!(err, GraphError::TooFewVertices { p: 1 });
    }

    #[test]
    // Purpose
    // -------
    // `GraphData::new` rejects non-finite entries with their position.
    //
    // Given
    // -----
    // - A 2×2 matrix with NaN at (1, 0).
    //
    // Expect
    // ------
    // - `Err(GraphError::NonFiniteObservation { row: 1, col: 0, .. })`.
    fn graphdata_new_rejects_non_finite_entries() {
        // Arrange
        let x = array![[1.0, 2.0], [f64::NAN, 0.5]];

        // Act
        let err = GraphData::new(x).unwrap_err();

        // Assert
        match err {
            GraphError::NonFiniteObservation { row, col, value } => {
                assert_eq!(row, 1);
                assert_eq!(col, 0);
                assert!(value.is_nan());
            }
            other => panic!("expected NonFiniteObservation, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // The direct per-edge scatter formula agrees with the operator
    // composition Lstar(x xᵀ)/(n−1).
    //
    // Given
    // -----
    // - A 3×4 observation matrix with distinct entries.
    //
    // Expect
    // ------
    // - For every observation, the scatter vector equals
    //   lstar(outer(x, x)) / (n − 1) elementwise.
    fn edge_scatters_match_operator_composition() {
        // Arrange
        let x = array![
            [1.0, -0.5, 2.0, 0.25],
            [0.0, 1.5, -1.0, 0.75],
            [2.0, 0.5, 0.5, -0.25],
        ];
        let data = GraphData::new(x.clone()).unwrap();
        let n = data.n_observations() as f64;

        // Act
        let scatters = data.edge_scatters();

        // Assert
        for (q, scatter) in scatters.iter().enumerate() {
            let row = x.row(q);
            let outer =
                Array2::from_shape_fn((4, 4), |(i, j)| row[i] * row[j]) / (n - 1.0);
            let expected = operators::lstar(outer.view());
            for k in 0..scatter.len() {
                assert_relative_eq!(scatter[k], expected[k], epsilon = 1e-12);
            }
        }
    }
}
