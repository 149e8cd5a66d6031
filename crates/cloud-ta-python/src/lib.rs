//! Python bindings for the cloud-ta indicator engine.
//!
//! Exposes the module `advanced_ichimoku_cloud` via `PyO3`, with `NumPy`
//! `float64` arrays in and out.
//!
//! The single-series kernels with a pre-allocated variant (`wma`, `ema`,
//! `atr`, `ichimoku_line`) accept an optional `out` parameter following
//! `NumPy` conventions:
//! - If `out` is provided, results are written directly into it
//! - If `out` is None, a new array is allocated and returned

#![allow(clippy::needless_pass_by_value)] // PyO3 requires pass-by-value for Python interop
#![allow(clippy::type_complexity)] // PyO3 types are complex by nature

use cloud_ta::indicators::{self, IchimokuOutput};
use numpy::{PyArray1, PyArrayMethods, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Convert cloud-ta error to Python `ValueError`
fn to_py_err(e: cloud_ta::Error) -> PyErr {
    PyValueError::new_err(e.to_string())
}

type Components<'py> = (
    Bound<'py, PyArray1<f64>>,
    Bound<'py, PyArray1<f64>>,
    Bound<'py, PyArray1<f64>>,
    Bound<'py, PyArray1<f64>>,
);

fn components_to_py(py: Python<'_>, output: IchimokuOutput<f64>) -> Components<'_> {
    (
        PyArray1::from_vec(py, output.tenkan),
        PyArray1::from_vec(py, output.kijun),
        PyArray1::from_vec(py, output.senkou_a),
        PyArray1::from_vec(py, output.senkou_b),
    )
}

// =============================================================================
// Hull Moving Average
// =============================================================================

/// Weighted Moving Average (WMA)
///
/// Linear weights, the most recent price weighted highest.
///
/// Args:
///     prices: Input price array (`NumPy` array of f64)
///     period: The number of periods for the moving average
///     out: Optional pre-allocated output array
///
/// Returns:
///     `NumPy` array with WMA values (first period-1 values are NaN, all NaN
///     if the input is shorter than period)
#[pyfunction]
#[pyo3(signature = (prices, period, out=None))]
fn wma<'py>(
    py: Python<'py>,
    prices: PyReadonlyArray1<'py, f64>,
    period: usize,
    out: Option<Bound<'py, PyArray1<f64>>>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let input = prices.as_slice()?;

    if let Some(output) = out {
        // SAFETY: We have exclusive access during this function call
        let slice = unsafe { output.as_slice_mut()? };
        indicators::wma_into(input, period, slice).map_err(to_py_err)?;
        Ok(output)
    } else {
        let result = indicators::wma(input, period).map_err(to_py_err)?;
        Ok(PyArray1::from_vec(py, result))
    }
}

/// Hull Moving Average (HullMA)
///
/// `WMA(2 * WMA(prices, period / 2) - WMA(prices, period), sqrt(period))`.
///
/// Args:
///     prices: Input price array (`NumPy` array of f64)
///     period: The Hull period
///
/// Returns:
///     `NumPy` array with HullMA values (NaN during warm-up)
#[pyfunction]
fn hullma<'py>(
    py: Python<'py>,
    prices: PyReadonlyArray1<'py, f64>,
    period: usize,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let result = indicators::hullma(prices.as_slice()?, period).map_err(to_py_err)?;
    Ok(PyArray1::from_vec(py, result))
}

// =============================================================================
// Hull Signals
// =============================================================================

/// Trend from the last values of a short and a long HullMA.
///
/// Returns:
///     1 (bullish), -1 (bearish) or 0 (equal, NaN, or fewer than 2 values)
#[pyfunction]
fn hullma_trend(
    hullma_short: PyReadonlyArray1<'_, f64>,
    hullma_long: PyReadonlyArray1<'_, f64>,
) -> PyResult<i32> {
    let trend = indicators::hullma_trend(hullma_short.as_slice()?, hullma_long.as_slice()?);
    Ok(trend.into())
}

/// Pullback of the last price towards the long HullMA.
///
/// Returns:
///     Tuple of (`is_pullback`, `distance_ratio`)
#[pyfunction]
#[pyo3(signature = (prices, hullma_long, threshold=0.03))]
fn hullma_pullback(
    prices: PyReadonlyArray1<'_, f64>,
    hullma_long: PyReadonlyArray1<'_, f64>,
    threshold: f64,
) -> PyResult<(bool, f64)> {
    let signal = indicators::hullma_pullback(prices.as_slice()?, hullma_long.as_slice()?, threshold);
    Ok((signal.is_pullback, signal.distance_ratio))
}

/// Bounce of the last one-bar return out of the `[-threshold, threshold]` dead zone.
///
/// Returns:
///     Tuple of (`is_bounce_up`, `is_bounce_down`, `strength`)
#[pyfunction]
#[pyo3(signature = (prices, threshold=0.002))]
fn hullma_bounce(prices: PyReadonlyArray1<'_, f64>, threshold: f64) -> PyResult<(bool, bool, f64)> {
    let signal = indicators::hullma_bounce(prices.as_slice()?, threshold);
    Ok((signal.is_bounce_up, signal.is_bounce_down, signal.strength))
}

// =============================================================================
// Ichimoku
// =============================================================================

/// Ichimoku line: rolling midpoint of the highest high and lowest low.
///
/// Args:
///     high: High prices
///     low: Low prices
///     period: Window length
///     out: Optional pre-allocated output array
///
/// Returns:
///     `NumPy` array; the first period-1 values repeat the first full-window
///     value, and the whole array is zero if the input is shorter than period
#[pyfunction]
#[pyo3(signature = (high, low, period, out=None))]
fn ichimoku_line<'py>(
    py: Python<'py>,
    high: PyReadonlyArray1<'py, f64>,
    low: PyReadonlyArray1<'py, f64>,
    period: usize,
    out: Option<Bound<'py, PyArray1<f64>>>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let h = high.as_slice()?;
    let l = low.as_slice()?;

    if let Some(output) = out {
        // SAFETY: We have exclusive access during this function call
        let slice = unsafe { output.as_slice_mut()? };
        indicators::ichimoku_line_into(h, l, period, slice).map_err(to_py_err)?;
        Ok(output)
    } else {
        let result = indicators::ichimoku_line(h, l, period).map_err(to_py_err)?;
        Ok(PyArray1::from_vec(py, result))
    }
}

/// Classic Ichimoku components.
///
/// Returns:
///     Tuple of (tenkan, kijun, `senkou_a`, `senkou_b`) arrays
#[pyfunction]
fn ichimoku_components<'py>(
    py: Python<'py>,
    high: PyReadonlyArray1<'py, f64>,
    low: PyReadonlyArray1<'py, f64>,
    tenkan_period: usize,
    kijun_period: usize,
    senkou_period: usize,
) -> PyResult<Components<'py>> {
    let output = indicators::ichimoku_components(
        high.as_slice()?,
        low.as_slice()?,
        tenkan_period,
        kijun_period,
        senkou_period,
    )
    .map_err(to_py_err)?;
    Ok(components_to_py(py, output))
}

/// Hull-smoothed Ichimoku line: HullMA of the `(high + low) / 2` median.
#[pyfunction]
fn ichimoku_line_hull<'py>(
    py: Python<'py>,
    high: PyReadonlyArray1<'py, f64>,
    low: PyReadonlyArray1<'py, f64>,
    period: usize,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let result = indicators::ichimoku_line_hull(high.as_slice()?, low.as_slice()?, period)
        .map_err(to_py_err)?;
    Ok(PyArray1::from_vec(py, result))
}

/// Hull-smoothed Ichimoku components.
///
/// Returns:
///     Tuple of (tenkan, kijun, `senkou_a`, `senkou_b`) arrays; `senkou_a` is
///     NaN wherever tenkan or kijun is NaN
#[pyfunction]
fn ichimoku_components_hull<'py>(
    py: Python<'py>,
    high: PyReadonlyArray1<'py, f64>,
    low: PyReadonlyArray1<'py, f64>,
    tenkan_period: usize,
    kijun_period: usize,
    senkou_period: usize,
) -> PyResult<Components<'py>> {
    let output = indicators::ichimoku_components_hull(
        high.as_slice()?,
        low.as_slice()?,
        tenkan_period,
        kijun_period,
        senkou_period,
    )
    .map_err(to_py_err)?;
    Ok(components_to_py(py, output))
}

// =============================================================================
// EMA / ATR
// =============================================================================

/// Exponential Moving Average seeded with the first value.
///
/// Args:
///     data: Input array
///     period: Smoothing period, alpha = 2 / (period + 1)
///     out: Optional pre-allocated output array
#[pyfunction]
#[pyo3(signature = (data, period, out=None))]
fn ema<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<'py, f64>,
    period: usize,
    out: Option<Bound<'py, PyArray1<f64>>>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let input = data.as_slice()?;

    if let Some(output) = out {
        // SAFETY: We have exclusive access during this function call
        let slice = unsafe { output.as_slice_mut()? };
        indicators::ema_into(input, period, slice).map_err(to_py_err)?;
        Ok(output)
    } else {
        let result = indicators::ema(input, period).map_err(to_py_err)?;
        Ok(PyArray1::from_vec(py, result))
    }
}

/// Average True Range with Wilder's smoothing.
///
/// Args:
///     high: High prices
///     low: Low prices
///     close: Close prices
///     period: Smoothing period (default 14)
///     out: Optional pre-allocated output array
///
/// Returns:
///     `NumPy` array; zeros before index period-1
#[pyfunction]
#[pyo3(signature = (high, low, close, period=14, out=None))]
fn atr<'py>(
    py: Python<'py>,
    high: PyReadonlyArray1<'py, f64>,
    low: PyReadonlyArray1<'py, f64>,
    close: PyReadonlyArray1<'py, f64>,
    period: usize,
    out: Option<Bound<'py, PyArray1<f64>>>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let h = high.as_slice()?;
    let l = low.as_slice()?;
    let c = close.as_slice()?;

    if let Some(output) = out {
        // SAFETY: We have exclusive access during this function call
        let slice = unsafe { output.as_slice_mut()? };
        indicators::atr_into(h, l, c, period, slice).map_err(to_py_err)?;
        Ok(output)
    } else {
        let result = indicators::atr(h, l, c, period).map_err(to_py_err)?;
        Ok(PyArray1::from_vec(py, result))
    }
}

// =============================================================================
// Module Definition
// =============================================================================

/// Ichimoku cloud with Hull moving average smoothing.
#[pymodule]
fn advanced_ichimoku_cloud(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Hull moving average and its signals
    m.add_function(wrap_pyfunction!(wma, m)?)?;
    m.add_function(wrap_pyfunction!(hullma, m)?)?;
    m.add_function(wrap_pyfunction!(hullma_trend, m)?)?;
    m.add_function(wrap_pyfunction!(hullma_pullback, m)?)?;
    m.add_function(wrap_pyfunction!(hullma_bounce, m)?)?;

    // Ichimoku
    m.add_function(wrap_pyfunction!(ichimoku_line, m)?)?;
    m.add_function(wrap_pyfunction!(ichimoku_components, m)?)?;
    m.add_function(wrap_pyfunction!(ichimoku_line_hull, m)?)?;
    m.add_function(wrap_pyfunction!(ichimoku_components_hull, m)?)?;

    // Other indicators
    m.add_function(wrap_pyfunction!(ema, m)?)?;
    m.add_function(wrap_pyfunction!(atr, m)?)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
