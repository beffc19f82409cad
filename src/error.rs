//! Error types for the synthetic regression pipeline
//!
//! Each pipeline stage has its own error enum so callers can tell a bad
//! parameter apart from a degenerate fit. [`PipelineError`] wraps them for
//! the end-to-end [`crate::pipeline::run`] entry point.

use thiserror::Error;

/// Rejected [`crate::params::ParameterSet`] values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("point_count must be > 0, got {0}")]
    ZeroPointCount(usize),

    #[error("point_count must be <= {max}, got {got}")]
    TooManyPoints { got: usize, max: usize },

    #[error("noise_scale must be a finite value >= 0, got {0}")]
    InvalidNoiseScale(f64),

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("|{name}| must be <= {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        max: f64,
    },
}

/// Failures of the least-squares fitter
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    #[error("cannot fit a line to an empty sample")]
    Empty,

    #[error("x and y lengths differ: {x_len} vs {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    /// Every x value is identical, so the slope is undefined
    #[error("all {points} x values are identical; slope is undefined")]
    ZeroXVariance { points: usize },

    #[error("least-squares solution is not finite (slope={slope}, intercept={intercept})")]
    NonFinite { slope: f64, intercept: f64 },
}

/// Errors surfaced by a full pipeline run
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] ParameterError),

    /// Fewer than two distinct x values
    #[error("degenerate fit: {0}")]
    DegenerateFit(FitError),

    #[error("numeric overflow: {0}")]
    Overflow(FitError),

    #[error("evaluation metrics are not finite (mse={mse}, r_squared={r_squared})")]
    NonFiniteMetrics { mse: f64, r_squared: f64 },
}

impl From<FitError> for PipelineError {
    fn from(err: FitError) -> Self {
        match err {
            FitError::NonFinite { .. } => PipelineError::Overflow(err),
            _ => PipelineError::DegenerateFit(err),
        }
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
