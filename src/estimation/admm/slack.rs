//! Slack projector — closed-form eigenvalue solution of the Theta step.
//!
//! Updates the slack matrix Theta to balance fidelity to the current
//! Laplacian against a log-determinant barrier. The barrier forbids
//! `Theta + J` from having a zero eigenvalue, which prevents degenerate or
//! disconnected solutions; `J = (1/p)·1·1ᵀ` is the centering term accounting
//! for the all-ones null vector common to every Laplacian.
//!
//! Procedure:
//! 1. Form `M = rho·(L(w) + J) − Y`.
//! 2. Take the symmetric eigendecomposition `M = V diag(γ) Vᵀ`.
//! 3. Replace each eigenvalue with `(γ + sqrt(γ² + 4·rho))/(2·rho)` — the
//!    positive root of the log-det proximal operator's optimality condition
//!    `rho·x² − γ·x − 1 = 0`.
//! 4. Reconstruct and subtract `J`.
//!
//! Every replacement eigenvalue is strictly positive, so `Theta + J` is
//! symmetric positive definite by construction. The eigendecomposition here
//! is the dominant per-iteration cost (cubic in the vertex count) and uses
//! `nalgebra`'s dense symmetric solver.
use nalgebra::DMatrix;
use ndarray::Array2;

/// One closed-form update of the slack matrix.
///
/// # Arguments
/// - `laplacian`: `L(w)` for the *candidate* weights of this iteration.
/// - `dual_matrix`: current dual variable `Y`.
/// - `rho`: current penalty parameter.
///
/// # Returns
/// The updated Theta; `Theta + J` is symmetric positive definite.
pub fn update_slack(laplacian: &Array2<f64>, dual_matrix: &Array2<f64>, rho: f64) -> Array2<f64> {
    let p = laplacian.nrows();
    let center = 1.0 / p as f64;
    let m = DMatrix::from_fn(p, p, |i, j| {
        rho * (laplacian[[i, j]] + center) - dual_matrix[[i, j]]
    });
    let eigen_decomp = m.symmetric_eigen();
    let v = eigen_decomp.eigenvectors;
    let gamma = eigen_decomp.eigenvalues;
    let mapped: Vec<f64> =
        gamma.iter().map(|g| (g + (g * g + 4.0 * rho).sqrt()) / (2.0 * rho)).collect();

    let mut theta = Array2::<f64>::zeros((p, p));
    for r in 0..p {
        for c in 0..p {
            let mut acc = 0.0;
            for k in 0..p {
                acc += v[(r, k)] * mapped[k] * v[(c, k)];
            }
            theta[[r, c]] = acc - center;
        }
    }
    theta
}

/// Eigenvalues of `Theta + J`, used by the log-determinant term of the
/// augmented Lagrangian.
pub(crate) fn centered_eigenvalues(theta: &Array2<f64>) -> Vec<f64> {
    let p = theta.nrows();
    let center = 1.0 / p as f64;
    let m = DMatrix::from_fn(p, p, |i, j| theta[[i, j]] + center);
    m.symmetric_eigen().eigenvalues.iter().copied().collect()
}
