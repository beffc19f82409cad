//! End-to-end synthetic regression run
//!
//! `ParameterSet -> generate -> fit -> evaluate -> rank_outliers`
//!
//! A run owns every value it produces and shares nothing with other runs, so
//! concurrent callers only need their own `ParameterSet`.

use crate::error::{PipelineError, Result};
use crate::evaluator::{evaluate, EvaluationRecord};
use crate::fitter::{fit, FitResult};
use crate::generator::generate;
use crate::outliers::{rank_outliers, Outlier, DEFAULT_TOP_K};
use crate::params::ParameterSet;
use crate::sample::Sample;
use serde::Serialize;

/// Difference between fitted and configured coefficients
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoefficientDrift {
    /// `fit.slope - params.slope`
    pub slope_error: f64,
    /// `fit.intercept - params.intercept`
    pub intercept_error: f64,
}

/// Everything produced by one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineRun {
    pub params: ParameterSet,
    pub sample: Sample,
    pub fit: FitResult,
    pub evaluation: EvaluationRecord,
    /// Largest residuals first
    pub outliers: Vec<Outlier>,
}

impl PipelineRun {
    pub fn drift(&self) -> CoefficientDrift {
        CoefficientDrift {
            slope_error: self.fit.slope - self.params.slope,
            intercept_error: self.fit.intercept - self.params.intercept,
        }
    }
}

/// Run the pipeline, reporting the [`DEFAULT_TOP_K`] largest residuals
///
/// # Errors
/// - [`crate::error::PipelineError::InvalidParameters`] if `params` fails
///   validation; nothing is generated
/// - [`crate::error::PipelineError::Overflow`] or
///   [`crate::error::PipelineError::NonFiniteMetrics`] if the arithmetic
///   leaves the finite range
/// - [`crate::error::PipelineError::DegenerateFit`] if the sample has no
///   spread in x (e.g. a single point); the run is aborted
///
/// # Example
/// ```
/// use synthfit::params::ParameterSet;
/// use synthfit::pipeline::run;
///
/// let run = run(&ParameterSet::default().noiseless()).unwrap();
/// assert!((run.fit.slope - 2.5).abs() < 1e-9);
/// assert!((run.fit.intercept - 5.0).abs() < 1e-9);
/// assert!(run.evaluation.mse < 1e-12);
/// assert_eq!(run.outliers.len(), 5);
/// ```
pub fn run(params: &ParameterSet) -> Result<PipelineRun> {
    run_with_top_k(params, DEFAULT_TOP_K)
}

/// Run the pipeline, reporting the `top_k` largest residuals
pub fn run_with_top_k(params: &ParameterSet, top_k: usize) -> Result<PipelineRun> {
    tracing::debug!(
        slope = params.slope,
        intercept = params.intercept,
        points = params.point_count,
        noise_scale = params.noise_scale,
        seed = params.seed,
        "starting pipeline run"
    );

    let sample = generate(params)?;
    let fit = fit(&sample)?;
    let evaluation = evaluate(&sample, &fit);
    check_metrics(&evaluation)?;
    let outliers = rank_outliers(&sample, &evaluation, top_k);

    tracing::debug!(
        slope = fit.slope,
        intercept = fit.intercept,
        mse = evaluation.mse,
        r_squared = evaluation.r_squared,
        outliers = outliers.len(),
        "pipeline run complete"
    );

    Ok(PipelineRun {
        params: params.clone(),
        sample,
        fit,
        evaluation,
        outliers,
    })
}

fn check_metrics(evaluation: &EvaluationRecord) -> Result<()> {
    if evaluation.mse.is_finite() && evaluation.r_squared.is_finite() {
        Ok(())
    } else {
        Err(PipelineError::NonFiniteMetrics {
            mse: evaluation.mse,
            r_squared: evaluation.r_squared,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FitError, ParameterError};
    use crate::params::{XSpacing, MAX_MAGNITUDE};

    #[test]
    fn test_noiseless_run_recovers_line() {
        let params = ParameterSet::default()
            .with_point_count(100)
            .with_slope(2.5)
            .with_intercept(5.0)
            .with_noise_scale(0.0)
            .with_seed(42);

        let run = run(&params).unwrap();
        assert!((run.fit.slope - 2.5).abs() < 1e-9);
        assert!((run.fit.intercept - 5.0).abs() < 1e-9);
        assert!(run.evaluation.mse < 1e-20);
        assert!((run.evaluation.r_squared - 1.0).abs() < 1e-12);

        let drift = run.drift();
        assert!(drift.slope_error.abs() < 1e-9);
        assert!(drift.intercept_error.abs() < 1e-9);
    }

    #[test]
    fn test_default_run_is_reasonable() {
        let run = run(&ParameterSet::default()).unwrap();
        assert_eq!(run.sample.len(), 100);
        assert_eq!(run.evaluation.points.len(), 100);
        assert_eq!(run.outliers.len(), DEFAULT_TOP_K);
        // slope 2.5 over x in [0, 10) with noise std 2 is a strong signal
        assert!((run.fit.slope - 2.5).abs() < 0.5);
        assert!(run.evaluation.r_squared > 0.8);
    }

    #[test]
    fn test_run_is_idempotent() {
        let params = ParameterSet::default().with_seed(7);
        assert_eq!(run(&params).unwrap(), run(&params).unwrap());
    }

    #[test]
    fn test_single_point_aborts_with_degenerate_fit() {
        let err = run(&ParameterSet::default().with_point_count(1)).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::DegenerateFit(FitError::ZeroXVariance { points: 1 })
        ));
    }

    #[test]
    fn test_invalid_parameters_abort_run() {
        let err = run(&ParameterSet::default().with_noise_scale(-1.0)).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InvalidParameters(ParameterError::InvalidNoiseScale(_))
        ));
    }

    #[test]
    fn test_huge_slope_rejected_before_generation() {
        let err = run(&ParameterSet::default().with_slope(1e308)).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InvalidParameters(ParameterError::OutOfRange { name: "slope", .. })
        ));
    }

    #[test]
    fn test_huge_noise_rejected_before_generation() {
        let err = run(&ParameterSet::default().with_noise_scale(1e160)).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InvalidParameters(ParameterError::OutOfRange {
                name: "noise_scale",
                ..
            })
        ));
    }

    #[test]
    fn test_metrics_stay_finite_at_magnitude_cap() {
        let params = ParameterSet::default()
            .with_slope(-MAX_MAGNITUDE)
            .with_intercept(MAX_MAGNITUDE)
            .with_noise_scale(MAX_MAGNITUDE)
            .with_point_count(1_000);
        let run = run(&params).unwrap();
        assert!(run.evaluation.mse.is_finite());
        assert!(run.evaluation.r_squared.is_finite());
        assert!(run.evaluation.r_squared <= 1.0);
    }

    #[test]
    fn test_non_finite_metrics_rejected() {
        let evaluation = EvaluationRecord {
            points: Vec::new(),
            mse: f64::INFINITY,
            r_squared: f64::NAN,
        };
        assert!(matches!(
            check_metrics(&evaluation),
            Err(PipelineError::NonFiniteMetrics { .. })
        ));

        let finite = EvaluationRecord {
            points: Vec::new(),
            mse: 0.5,
            r_squared: 0.9,
        };
        assert!(check_metrics(&finite).is_ok());
    }

    #[test]
    fn test_custom_top_k() {
        let params = ParameterSet::default().with_point_count(20);
        assert_eq!(run_with_top_k(&params, 3).unwrap().outliers.len(), 3);
        assert_eq!(run_with_top_k(&params, 50).unwrap().outliers.len(), 20);
    }

    #[test]
    fn test_even_spacing_two_points_fits_exactly() {
        let params = ParameterSet::default()
            .with_point_count(2)
            .with_x_spacing(XSpacing::Even)
            .with_noise_scale(3.0);
        let run = run(&params).unwrap();
        // Two points always lie on the fitted line
        assert!(run.evaluation.mse < 1e-20);
    }
}
