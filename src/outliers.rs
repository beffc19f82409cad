//! Residual-based outlier ranking
//!
//! Points are ordered by descending `|residual|`. The sort is stable, so
//! equal magnitudes keep their original sample order.

use crate::evaluator::EvaluationRecord;
use crate::sample::Sample;
use serde::Serialize;

/// Number of outliers reported when no explicit K is given
pub const DEFAULT_TOP_K: usize = 5;

/// A sample point singled out by residual magnitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Outlier {
    /// Position of the point in the sample
    pub index: usize,
    pub x: f64,
    pub y_observed: f64,
    pub y_predicted: f64,
    /// Signed residual (`y_observed - y_predicted`)
    pub residual: f64,
}

impl Outlier {
    pub fn magnitude(&self) -> f64 {
        self.residual.abs()
    }
}

/// Select the `k` points with the largest residual magnitude
///
/// Returns `min(k, sample.len())` outliers, largest first. The sample and
/// evaluation record are only read.
///
/// # Example
/// ```
/// use synthfit::evaluator::evaluate;
/// use synthfit::fitter::FitResult;
/// use synthfit::outliers::rank_outliers;
/// use synthfit::sample::{Sample, SamplePoint};
///
/// let sample = Sample::from_points(
///     [0.0, 5.0, -1.0]
///         .iter()
///         .enumerate()
///         .map(|(i, &y)| SamplePoint { x: i as f64, y_observed: y, y_true: 0.0 })
///         .collect(),
/// );
/// let record = evaluate(&sample, &FitResult { slope: 0.0, intercept: 0.0 });
/// let top = rank_outliers(&sample, &record, 2);
/// assert_eq!(top.iter().map(|o| o.index).collect::<Vec<_>>(), vec![1, 2]);
/// ```
pub fn rank_outliers(sample: &Sample, evaluation: &EvaluationRecord, k: usize) -> Vec<Outlier> {
    let mut ranked: Vec<Outlier> = sample
        .iter()
        .zip(&evaluation.points)
        .enumerate()
        .map(|(index, (point, eval))| Outlier {
            index,
            x: point.x,
            y_observed: point.y_observed,
            y_predicted: eval.y_predicted,
            residual: eval.residual,
        })
        .collect();

    // `sort_by` is stable; ties stay in index order
    ranked.sort_by(|a, b| b.magnitude().total_cmp(&a.magnitude()));
    ranked.truncate(k);
    ranked
}
