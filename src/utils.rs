#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    estimation::admm::traits::{AdmmOptions, Tolerances},
    graphs::{
        core::{
            data::GraphData,
            guards::PenaltyGuards,
            heavy_tail::HeavyTail,
            init::WeightInit,
            options::{DegreeTarget, LearnOptions},
        },
        errors::GraphError,
        models::heavytail_graph::HeavyTailGraphModel,
    },
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1, PyReadonlyArray2,
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

#[cfg(feature = "python-bindings")]
pub fn extract_graph_data<'py>(
    _py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<GraphData> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return GraphData::new(arr_ro.as_array().to_owned()).map_err(PyErr::from);
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(frame_ro) = obj.extract::<PyReadonlyArray2<f64>>() {
            return GraphData::new(frame_ro.as_array().to_owned()).map_err(PyErr::from);
        }
    }

    Err(pyo3::exceptions::PyTypeError::new_err(
        "expected a 2-D numpy.ndarray or pandas.DataFrame of float64 (observations in rows)",
    ))
}

#[cfg(feature = "python-bindings")]
pub fn build_graph_model<'py>(
    py: Python<'py>, heavy_tail: HeavyTail, w0: Option<&Bound<'py, PyAny>>,
    d: Option<&Bound<'py, PyAny>>, rho: Option<f64>, update_rho: Option<bool>,
    maxiter: Option<usize>, reltol: Option<f64>, verbose: Option<bool>,
    penalty_guards: Option<(f64, f64)>,
) -> PyResult<HeavyTailGraphModel> {
    // Initial-weight strategy.
    let init = extract_weight_init(py, w0)?;

    // Degree target (scalar broadcast or per-vertex vector).
    let degree_target = extract_degree_target(py, d)?;

    // Solver options; Tolerances::new -> EstResult -> GraphError -> PyErr.
    let tols = Tolerances::new(reltol.unwrap_or(1e-5), maxiter.unwrap_or(10_000))
        .map_err(GraphError::from)?;
    let admm_opts = AdmmOptions::new(
        rho.unwrap_or(1.0),
        update_rho.unwrap_or(true),
        tols,
        verbose.unwrap_or(false),
    )
    .map_err(GraphError::from)?;

    // Penalty guards with the documented wide default.
    let guards_tuple = penalty_guards.unwrap_or((1e-6, 1e6));
    let guards = PenaltyGuards::new(guards_tuple)?;

    let opts = LearnOptions::new(init, admm_opts, degree_target, guards);

    Ok(HeavyTailGraphModel::new(heavy_tail, opts))
}

#[cfg(feature = "python-bindings")]
fn extract_weight_init<'py>(
    py: Python<'py>, w0: Option<&Bound<'py, PyAny>>,
) -> PyResult<WeightInit> {
    let raw = match w0 {
        None => return Ok(WeightInit::naive()),
        Some(raw) => raw,
    };

    if let Ok(name) = raw.extract::<String>() {
        return match name.as_str() {
            "naive" => Ok(WeightInit::naive()),
            other => Err(PyValueError::new_err(format!(
                "invalid w0 strategy {:?} (expected 'naive' or an explicit weight vector)",
                other
            ))),
        };
    }

    let arr = extract_f64_array(py, raw)?;
    let slice = arr.as_slice().map_err(|_| {
        PyValueError::new_err("w0 must be a 1-D contiguous float64 array or sequence")
    })?;
    WeightInit::fixed(Array1::from(slice.to_vec())).map_err(PyErr::from)
}

#[cfg(feature = "python-bindings")]
fn extract_degree_target<'py>(
    py: Python<'py>, d: Option<&Bound<'py, PyAny>>,
) -> PyResult<DegreeTarget> {
    let raw = match d {
        None => return DegreeTarget::uniform(1.0).map_err(PyErr::from),
        Some(raw) => raw,
    };

    if let Ok(scalar) = raw.extract::<f64>() {
        return DegreeTarget::uniform(scalar).map_err(PyErr::from);
    }

    let arr = extract_f64_array(py, raw)?;
    let slice = arr.as_slice().map_err(|_| {
        PyValueError::new_err("d must be a float or a 1-D contiguous float64 array or sequence")
    })?;
    DegreeTarget::per_node(Array1::from(slice.to_vec())).map_err(PyErr::from)
}
