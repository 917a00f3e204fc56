//! rust_graphlearn — heavy-tailed graph learning with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the graph-learning estimator to Python via the
//! `_rust_graphlearn` extension module. When the `python-bindings` feature
//! is enabled, this module defines the Python-facing classes and the
//! submodule used by the `rust_graphlearn` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`graphs` and `estimation`) as the
//!   public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_rust_graphlearn` Python extension.
//! - Create and register the Python submodule (`graph_models`) under
//!   `rust_graphlearn` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work is implemented in the inner Rust modules; this
//!   file performs only FFI glue, input validation, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible types mirror the
//!   invariants and signatures of their Rust counterparts
//!   (e.g. `HeavyTailGraphModel`, `GraphEstimate`).
//! - On successful conversion from Python objects to Rust types, the
//!   invariants documented in the core modules are assumed to hold.
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_rust_graphlearn.graph_models` and
//!   are typically wrapped by thin pure-Python facades in the top-level
//!   `rust_graphlearn` package.
//! - Observation matrices are `n×p` with observations in rows; indexing and
//!   statistical conventions follow the documentation of the underlying
//!   Rust modules (`graphs::core`, `estimation::admm`).
//! - Errors from core Rust code are propagated as rich error types
//!   internally and converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should usually depend directly on the inner modules
//!   and can ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_rust_graphlearn` module
//!   defined here and wraps its classes in user-facing Python APIs.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by the crate's integration tests.
//! - Smoke tests for the PyO3 bindings verify that classes can be
//!   constructed, fitted, and inspected from Python.

pub mod estimation;
pub mod graphs;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
use crate::{
    graphs::{
        core::heavy_tail::HeavyTail,
        errors::GraphError,
        models::heavytail_graph::{GraphEstimate, HeavyTailGraphModel},
    },
    utils::{build_graph_model, extract_graph_data},
};

#[cfg(feature = "python-bindings")]
use ndarray::Array2;

/// HeavyTailGraph — Python-facing wrapper for the graph-learning estimator.
///
/// Purpose
/// -------
/// Expose the [`HeavyTailGraphModel`] API to Python callers while preserving
/// the core Rust invariants and error handling.
///
/// Key behaviors
/// -------------
/// - Build a [`HeavyTailGraphModel`] with a chosen observation model and
///   options from Python-friendly arguments.
/// - Provide a `fit` method that converts Python arrays into `GraphData` and
///   delegates to the core implementation.
/// - Cache the estimation result for inspection from Python via the
///   `results` property.
///
/// Parameters
/// ----------
/// Constructed from Python via factory-style constructors:
/// - `HeavyTailGraph(...)`
///   Gaussian observation model.
/// - `HeavyTailGraph.student(nu, ...)`
///   Student-t observation model with degrees of freedom `nu > 2`.
///
/// Common parameters:
/// - `w0`: `Optional[str | array]`
///   Initial-weight strategy name (`'naive'`) or an explicit non-negative
///   length-`p(p−1)/2` vector. Defaults to `'naive'`.
/// - `d`: `Optional[float | array]`
///   Degree target, scalar broadcast or per-vertex vector. Defaults to 1.0.
/// - `rho`, `update_rho`, `maxiter`, `reltol`, `verbose`
///   Solver settings used to build the ADMM options.
/// - `penalty_guards`: `Optional[(float, float)]`
///   Lower/upper bounds for the adaptive penalty. Defaults to `(1e-6, 1e6)`.
///
/// Fields
/// ------
/// - `inner`: [`HeavyTailGraphModel`]
///   Fully configured model that owns options and cached results.
///
/// Notes
/// -----
/// - This type is primarily intended to be used from Python; native Rust
///   code should prefer [`HeavyTailGraphModel`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_graphlearn.graph_models")]
pub struct HeavyTailGraph {
    /// Underlying Rust model.
    pub inner: HeavyTailGraphModel,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl HeavyTailGraph {
    #[new]
    #[pyo3(
        signature = (
            w0 = None,
            d = None,
            rho = None,
            update_rho = None,
            maxiter = None,
            reltol = None,
            verbose = None,
            penalty_guards = None,
        ),
        text_signature = "(w0='naive', d=1.0, rho=1.0, update_rho=True, maxiter=10000, \
                          reltol=1e-5, verbose=False, penalty_guards=(1e-6, 1e6))"
    )]
    pub fn gaussian<'py>(
        py: Python<'py>, w0: Option<&Bound<'py, PyAny>>, d: Option<&Bound<'py, PyAny>>,
        rho: Option<f64>, update_rho: Option<bool>, maxiter: Option<usize>, reltol: Option<f64>,
        verbose: Option<bool>, penalty_guards: Option<(f64, f64)>,
    ) -> PyResult<Self> {
        let heavy_tail = HeavyTail::gaussian();
        let inner = build_graph_model(
            py,
            heavy_tail,
            w0,
            d,
            rho,
            update_rho,
            maxiter,
            reltol,
            verbose,
            penalty_guards,
        )?;
        Ok(HeavyTailGraph { inner })
    }

    #[staticmethod]
    #[pyo3(
        signature = (
            nu,
            w0 = None,
            d = None,
            rho = None,
            update_rho = None,
            maxiter = None,
            reltol = None,
            verbose = None,
            penalty_guards = None,
        ),
        text_signature = "(nu, w0='naive', d=1.0, rho=1.0, update_rho=True, maxiter=10000, \
                          reltol=1e-5, verbose=False, penalty_guards=(1e-6, 1e6))"
    )]
    pub fn student<'py>(
        py: Python<'py>, nu: f64, w0: Option<&Bound<'py, PyAny>>, d: Option<&Bound<'py, PyAny>>,
        rho: Option<f64>, update_rho: Option<bool>, maxiter: Option<usize>, reltol: Option<f64>,
        verbose: Option<bool>, penalty_guards: Option<(f64, f64)>,
    ) -> PyResult<Self> {
        let heavy_tail = HeavyTail::student(nu)?;
        let inner = build_graph_model(
            py,
            heavy_tail,
            w0,
            d,
            rho,
            update_rho,
            maxiter,
            reltol,
            verbose,
            penalty_guards,
        )?;
        Ok(HeavyTailGraph { inner })
    }

    #[pyo3(text_signature = "(self, X, /)")]
    pub fn fit<'py>(&mut self, py: Python<'py>, x: &Bound<'py, PyAny>) -> PyResult<()> {
        let data = extract_graph_data(py, x)?;
        self.inner.fit(&data)?;
        Ok(())
    }

    #[getter]
    pub fn results(&self) -> PyResult<GraphLearnResult> {
        match &self.inner.results {
            Some(estimate) => Ok(GraphLearnResult { inner: estimate.clone() }),
            None => Err(GraphError::ModelNotFitted.into()),
        }
    }
}

/// GraphLearnResult — estimation result exposed to Python.
///
/// Purpose
/// -------
/// Present the final graph matrices and per-iteration diagnostics from
/// [`GraphEstimate`] to Python code in a lightweight, read-only wrapper.
///
/// Key behaviors
/// -------------
/// - Hold the final Laplacian, adjacency, and slack matrices plus scalar
///   diagnostics (iteration count, convergence flag).
/// - Provide accessors that clone or copy the underlying values into
///   Python-owned containers.
///
/// Parameters
/// ----------
/// Instances are constructed internally by the `HeavyTailGraph.results`
/// getter and are not created directly by user code.
///
/// Fields
/// ------
/// - `inner`: [`GraphEstimate`]
///   Full estimation result from the last `fit`.
///
/// Invariants
/// ----------
/// - `inner` always corresponds to the most recent successful `fit` on the
///   owning model.
///
/// Notes
/// -----
/// - This type is part of the Python FFI surface; Rust code should prefer
///   using [`GraphEstimate`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_graphlearn.graph_models")]
pub struct GraphLearnResult {
    /// Underlying Rust estimation result.
    pub inner: GraphEstimate,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl GraphLearnResult {
    #[getter]
    pub fn laplacian(&self) -> Vec<Vec<f64>> {
        matrix_to_rows(&self.inner.laplacian)
    }

    #[getter]
    pub fn adjacency(&self) -> Vec<Vec<f64>> {
        matrix_to_rows(&self.inner.adjacency)
    }

    #[getter]
    pub fn theta(&self) -> Vec<Vec<f64>> {
        matrix_to_rows(&self.inner.theta)
    }

    #[getter]
    pub fn iterations(&self) -> usize {
        self.inner.iterations
    }

    #[getter]
    pub fn converged(&self) -> bool {
        self.inner.converged
    }

    #[getter]
    pub fn primal_lap_residual(&self) -> Vec<f64> {
        self.inner.primal_lap_residual.clone()
    }

    #[getter]
    pub fn primal_deg_residual(&self) -> Vec<f64> {
        self.inner.primal_deg_residual.clone()
    }

    #[getter]
    pub fn dual_residual(&self) -> Vec<f64> {
        self.inner.dual_residual.clone()
    }

    #[getter]
    pub fn lagrangian(&self) -> Vec<f64> {
        self.inner.lagrangian.clone()
    }

    #[getter]
    pub fn elapsed_time(&self) -> Vec<f64> {
        self.inner.elapsed_time.clone()
    }
}

// Convert Array2<f64> → Vec<Vec<f64>> (row-major) for Python consumption.
#[cfg(feature = "python-bindings")]
fn matrix_to_rows(m: &Array2<f64>) -> Vec<Vec<f64>> {
    let (nrows, _ncols) = m.dim();
    let mut out = Vec::with_capacity(nrows);
    for i in 0..nrows {
        out.push(m.row(i).to_vec());
    }
    out
}

/// _rust_graphlearn — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_graphlearn` Python module and register the
/// `graph_models` submodule used by the public `rust_graphlearn` package.
///
/// Key behaviors
/// -------------
/// - Create the `graph_models` submodule.
/// - Attach it to the parent `_rust_graphlearn` module.
/// - Register the submodule in `sys.modules` so it is importable via a
///   dotted path from Python.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_graphlearn<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let graph_models_mod = PyModule::new(_py, "graph_models")?;
    graph_models(_py, m, &graph_models_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("rust_graphlearn.graph_models", graph_models_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn graph_models<'py>(
    _py: Python, rust_graphlearn: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<HeavyTailGraph>()?;
    m.add_class::<GraphLearnResult>()?;
    rust_graphlearn.add_submodule(m)?;
    Ok(())
}
