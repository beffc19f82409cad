//! JSON output format for pipeline runs

use crate::params::ParameterSet;
use crate::pipeline::PipelineRun;
use serde::{Deserialize, Serialize};

/// Learned coefficients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonFit {
    pub slope: f64,
    pub intercept: f64,
}

/// Aggregate fit-quality metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonMetrics {
    pub mse: f64,
    pub rmse: f64,
    pub r_squared: f64,
}

/// Fitted minus configured coefficients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonDrift {
    pub slope_error: f64,
    pub intercept_error: f64,
}

/// One sample point with its derived columns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonPoint {
    pub index: usize,
    pub x: f64,
    pub y_observed: f64,
    pub y_true: f64,
    pub y_predicted: f64,
    pub residual: f64,
}

/// A ranked outlier (rank 1 has the largest |residual|)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutlier {
    pub rank: usize,
    pub index: usize,
    pub x: f64,
    pub y_observed: f64,
    pub y_predicted: f64,
    pub residual: f64,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Crate version that produced the document
    pub version: String,
    /// Format name
    pub format: String,
    /// Parameters the sample was generated from
    pub parameters: ParameterSet,
    pub fit: JsonFit,
    pub metrics: JsonMetrics,
    pub drift: JsonDrift,
    /// Every sample point, in generation order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<JsonPoint>,
    pub outliers: Vec<JsonOutlier>,
}

impl JsonOutput {
    /// Build the document for a finished run
    ///
    /// `include_points` controls whether the full sample is embedded; the
    /// summary, metrics and outliers are always present.
    pub fn from_run(run: &PipelineRun, include_points: bool) -> Self {
        let points = if include_points {
            run.sample
                .iter()
                .zip(&run.evaluation.points)
                .enumerate()
                .map(|(index, (point, eval))| JsonPoint {
                    index,
                    x: point.x,
                    y_observed: point.y_observed,
                    y_true: point.y_true,
                    y_predicted: eval.y_predicted,
                    residual: eval.residual,
                })
                .collect()
        } else {
            Vec::new()
        };

        let outliers = run
            .outliers
            .iter()
            .enumerate()
            .map(|(i, o)| JsonOutlier {
                rank: i + 1,
                index: o.index,
                x: o.x,
                y_observed: o.y_observed,
                y_predicted: o.y_predicted,
                residual: o.residual,
            })
            .collect();

        let drift = run.drift();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "synthfit-json-v1".to_string(),
            parameters: run.params.clone(),
            fit: JsonFit {
                slope: run.fit.slope,
                intercept: run.fit.intercept,
            },
            metrics: JsonMetrics {
                mse: run.evaluation.mse,
                rmse: run.evaluation.rmse(),
                r_squared: run.evaluation.r_squared,
            },
            drift: JsonDrift {
                slope_error: drift.slope_error,
                intercept_error: drift.intercept_error,
            },
            points,
            outliers,
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::run;

    #[test]
    fn test_json_output_creation() {
        let run = run(&ParameterSet::default().with_point_count(12)).unwrap();
        let output = JsonOutput::from_run(&run, true);

        assert_eq!(output.format, "synthfit-json-v1");
        assert_eq!(output.points.len(), 12);
        assert_eq!(output.outliers.len(), 5);
        assert_eq!(output.outliers[0].rank, 1);
        assert_eq!(output.parameters.point_count, 12);
    }

    #[test]
    fn test_json_serialization() {
        let run = run(&ParameterSet::default()).unwrap();
        let json = JsonOutput::from_run(&run, true).to_json().unwrap();

        assert!(json.contains("\"format\": \"synthfit-json-v1\""));
        assert!(json.contains("\"r_squared\""));
        assert!(json.contains("\"x_spacing\": \"random\""));
        assert!(json.contains("\"y_predicted\""));
    }

    #[test]
    fn test_points_omitted_when_not_requested() {
        let run = run(&ParameterSet::default()).unwrap();
        let json = JsonOutput::from_run(&run, false).to_json().unwrap();

        assert!(!json.contains("\"points\""));
        assert!(json.contains("\"outliers\""));
    }

    #[test]
    fn test_json_parses_back() {
        let run = run(&ParameterSet::default().noiseless()).unwrap();
        let json = JsonOutput::from_run(&run, true).to_json().unwrap();

        let parsed: JsonOutput = serde_json::from_str(&json).unwrap();
        assert!((parsed.fit.slope - 2.5).abs() < 1e-9);
        assert!(parsed.metrics.mse < 1e-12);
        assert_eq!(parsed.parameters, ParameterSet::default().noiseless());
    }
}
