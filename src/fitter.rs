//! Ordinary least-squares fit of a single-variable line
//!
//! Uses the mean-centred closed form
//!
//! ```text
//! slope     = Σ(x - x̄)(y - ȳ) / Σ(x - x̄)²
//! intercept = ȳ - slope · x̄
//! ```

use crate::error::FitError;
use crate::sample::Sample;
use serde::Serialize;

/// Coefficients of a fitted line `y = slope · x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitResult {
    pub slope: f64,
    pub intercept: f64,
}

impl FitResult {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit a line to the `(x, y_observed)` pairs of a sample
pub fn fit(sample: &Sample) -> Result<FitResult, FitError> {
    let xs = sample.xs();
    let ys = sample.observed();
    least_squares(&xs, &ys)
}

/// Least-squares line through paired slices
///
/// # Errors
/// - [`FitError::Empty`] for empty input
/// - [`FitError::LengthMismatch`] when `xs` and `ys` differ in length
/// - [`FitError::ZeroXVariance`] when every x is identical (always the case
///   for a single point)
/// - [`FitError::NonFinite`] when the solution overflows
///
/// # Example
/// ```
/// use synthfit::fitter::least_squares;
///
/// let fit = least_squares(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap();
/// assert!((fit.slope - 2.0).abs() < 1e-12);
/// assert!((fit.intercept - 1.0).abs() < 1e-12);
/// ```
pub fn least_squares(xs: &[f64], ys: &[f64]) -> Result<FitResult, FitError> {
    if xs.len() != ys.len() {
        return Err(FitError::LengthMismatch {
            x_len: xs.len(),
            y_len: ys.len(),
        });
    }

    let Some(&first_x) = xs.first() else {
        return Err(FitError::Empty);
    };

    // Exact check first: rounding in the mean can leave a tiny non-zero Sxx
    // for identical inputs
    if xs.iter().all(|&x| x == first_x) {
        return Err(FitError::ZeroXVariance { points: xs.len() });
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let (sxx, sxy) = xs
        .iter()
        .zip(ys)
        .fold((0.0_f64, 0.0_f64), |(sxx, sxy), (&x, &y)| {
            let dx = x - mean_x;
            (sxx + dx * dx, sxy + dx * (y - mean_y))
        });

    if !sxx.is_finite() || !sxy.is_finite() {
        return Err(FitError::NonFinite {
            slope: sxy / sxx,
            intercept: f64::NAN,
        });
    }

    if sxx <= 0.0 {
        return Err(FitError::ZeroXVariance { points: xs.len() });
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    if !slope.is_finite() || !intercept.is_finite() {
        return Err(FitError::NonFinite { slope, intercept });
    }

    tracing::trace!(slope, intercept, sxx, points = xs.len(), "least-squares fit");
    Ok(FitResult { slope, intercept })
}
