//! Fit-quality metrics and per-point residuals
//!
//! Residuals are **signed**: `y_observed - y_predicted`. Outlier ranking uses
//! their magnitude.
//!
//! R² follows `1 - SS_res / SS_tot`. When every observation is identical
//! (`SS_tot == 0`) there is no variance to explain and R² is reported as
//! `0.0`.

use crate::fitter::FitResult;
use crate::sample::Sample;
use serde::Serialize;

/// Prediction and residual for one sample point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointEvaluation {
    pub y_predicted: f64,
    /// `y_observed - y_predicted`
    pub residual: f64,
}

/// Per-point and aggregate evaluation of a fit against a sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationRecord {
    /// One entry per sample point, same order as the sample
    pub points: Vec<PointEvaluation>,
    /// Mean squared error
    pub mse: f64,
    /// Coefficient of determination (<= 1, may be negative)
    pub r_squared: f64,
}

impl EvaluationRecord {
    /// Root mean squared error
    pub fn rmse(&self) -> f64 {
        self.mse.sqrt()
    }

    pub fn residuals(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.residual)
    }

    pub fn sum_squared_residuals(&self) -> f64 {
        self.residuals().map(|r| r * r).sum()
    }
}

/// Evaluate `fit` over every point of `sample`
///
/// # Example
/// ```
/// use synthfit::evaluator::evaluate;
/// use synthfit::fitter::FitResult;
/// use synthfit::sample::{Sample, SamplePoint};
///
/// let sample = Sample::from_points(vec![
///     SamplePoint { x: 0.0, y_observed: 1.0, y_true: 1.0 },
///     SamplePoint { x: 1.0, y_observed: 3.0, y_true: 3.0 },
/// ]);
/// let record = evaluate(&sample, &FitResult { slope: 2.0, intercept: 1.0 });
/// assert_eq!(record.mse, 0.0);
/// assert_eq!(record.r_squared, 1.0);
/// ```
pub fn evaluate(sample: &Sample, fit: &FitResult) -> EvaluationRecord {
    let points: Vec<PointEvaluation> = sample
        .iter()
        .map(|p| {
            let y_predicted = fit.predict(p.x);
            PointEvaluation {
                y_predicted,
                residual: p.y_observed - y_predicted,
            }
        })
        .collect();

    if points.is_empty() {
        return EvaluationRecord {
            points,
            mse: 0.0,
            r_squared: 0.0,
        };
    }

    let n = points.len() as f64;
    let ss_res: f64 = points.iter().map(|p| p.residual * p.residual).sum();

    let mean_y = sample.iter().map(|p| p.y_observed).sum::<f64>() / n;
    let ss_tot: f64 = sample
        .iter()
        .map(|p| (p.y_observed - mean_y).powi(2))
        .sum();

    let mse = ss_res / n;
    let r_squared = if ss_tot > 0.0 {
        1.0 - ss_res / ss_tot
    } else {
        0.0
    };

    tracing::trace!(mse, r_squared, ss_res, ss_tot, "evaluated fit");
    EvaluationRecord {
        points,
        mse,
        r_squared,
    }
}
