//! Graph operators — transforms between edge-weight vectors and matrices.
//!
//! Implements the linear operators connecting an edge-weight vector
//! `w ∈ ℝ^{p(p−1)/2}` to its matrix representations, plus their adjoints:
//!
//! - `L(w)`: weighted Laplacian (off-diagonal `(i, j)` is `−w_{ij}`, diagonal
//!   is the incident-weight sum; every row sums to zero).
//! - `A(w)`: weighted adjacency (zero diagonal, off-diagonal `w_{ij}`).
//! - `Ainv`: exact left-inverse of `A` on non-negative weight vectors.
//! - `Lstar`: adjoint of `L` under the trace inner product,
//!   `Lstar(Y)_{ij} = Y_ii + Y_jj − Y_ij − Y_ji`.
//! - `Dstar`: adjoint of the degree operator, `Dstar(y)_{ij} = y_i + y_j`.
//!
//! ## Edge indexing
//! Unordered pairs `(i, j)` with `i < j` are laid out row-major over the
//! strict upper triangle: `(0,1), (0,2), …, (0,p−1), (1,2), …`. The helpers
//! [`edge_count`] and [`edge_index`] define this layout; every function in
//! this module iterates pairs in the same order.
//!
//! ## Contract
//! All functions are pure and allocation-bounded (one output container per
//! call). Gradient code elsewhere relies on the adjoint identities
//! `⟨Lstar(Y), w⟩ = ⟨Y, L(w)⟩` and `⟨Dstar(y), w⟩ = ⟨y, diag(L(w))⟩` holding
//! to numerical precision. Length mismatches between `w` and `p` are
//! programming errors and panic via indexing rather than returning `Result`.
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Number of unordered vertex pairs (edges) for `p` vertices.
pub fn edge_count(p: usize) -> usize {
    p * (p - 1) / 2
}

/// Linear index of the pair `(i, j)` with `i < j` in the edge layout.
///
/// Row-major over the strict upper triangle of a `p×p` matrix.
pub fn edge_index(i: usize, j: usize, p: usize) -> usize {
    debug_assert!(i < j && j < p);
    i * p - i * (i + 1) / 2 + (j - i - 1)
}

/// Laplacian operator `L(w)`: build the `p×p` weighted Laplacian.
///
/// Off-diagonal `(i, j)` is `−w_{ij}`; diagonal `(i, i)` is the sum of
/// weights incident to vertex `i`. The result is symmetric with zero row
/// sums, and positive semi-definite for non-negative `w`.
pub fn laplacian(w: ArrayView1<f64>, p: usize) -> Array2<f64> {
    let mut l = Array2::<f64>::zeros((p, p));
    let mut k = 0;
    for i in 0..p {
        for j in (i + 1)..p {
            let wij = w[k];
            l[[i, j]] = -wij;
            l[[j, i]] = -wij;
            l[[i, i]] += wij;
            l[[j, j]] += wij;
            k += 1;
        }
    }
    l
}

/// Adjacency operator `A(w)`: build the `p×p` weighted adjacency matrix.
///
/// Zero diagonal; off-diagonal `(i, j)` is `w_{ij}`.
pub fn adjacency(w: ArrayView1<f64>, p: usize) -> Array2<f64> {
    let mut a = Array2::<f64>::zeros((p, p));
    let mut k = 0;
    for i in 0..p {
        for j in (i + 1)..p {
            a[[i, j]] = w[k];
            a[[j, i]] = w[k];
            k += 1;
        }
    }
    a
}

/// Inverse adjacency operator `Ainv`: recover the weight vector from a
/// symmetric adjacency matrix.
///
/// Exact left-inverse of [`adjacency`]: `adjacency_inv(adjacency(w, p)) = w`
/// for any `w`. Reads the strict upper triangle in edge order.
pub fn adjacency_inv(a: ArrayView2<f64>) -> Array1<f64> {
    let p = a.nrows();
    let mut w = Array1::<f64>::zeros(edge_count(p));
    let mut k = 0;
    for i in 0..p {
        for j in (i + 1)..p {
            w[k] = a[[i, j]];
            k += 1;
        }
    }
    w
}

/// Adjoint Laplacian operator `Lstar`: map a `p×p` matrix to edge space.
///
/// For edge `(i, j)`: `Lstar(Y)_{ij} = Y_ii + Y_jj − Y_ij − Y_ji`. Satisfies
/// `⟨Lstar(Y), w⟩ = ⟨Y, L(w)⟩` for all `Y`, `w`.
pub fn lstar(y: ArrayView2<f64>) -> Array1<f64> {
    let p = y.nrows();
    let mut out = Array1::<f64>::zeros(edge_count(p));
    let mut k = 0;
    for i in 0..p {
        for j in (i + 1)..p {
            out[k] = y[[i, i]] + y[[j, j]] - y[[i, j]] - y[[j, i]];
            k += 1;
        }
    }
    out
}

/// Adjoint degree operator `Dstar`: map a length-`p` vector to edge space.
///
/// For edge `(i, j)`: `Dstar(y)_{ij} = y_i + y_j`. Adjoint of
/// `w ↦ diag(L(w))`.
pub fn dstar(y: ArrayView1<f64>) -> Array1<f64> {
    let p = y.len();
    let mut out = Array1::<f64>::zeros(edge_count(p));
    let mut k = 0;
    for i in 0..p {
        for j in (i + 1)..p {
            out[k] = y[i] + y[j];
            k += 1;
        }
    }
    out
}

/// Degree operator `D(w)` evaluated on a Laplacian: its diagonal.
pub fn degrees(l: ArrayView2<f64>) -> Array1<f64> {
    l.diag().to_owned()
}
