//! Parameter set controlling synthetic data generation
//!
//! A [`ParameterSet`] is an immutable value passed into
//! [`crate::pipeline::run`]. Nothing reads process-wide state: two runs with
//! equal parameter sets produce equal results.

use crate::error::ParameterError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Upper bound on `point_count`
pub const MAX_POINT_COUNT: usize = 1_000_000;

/// Upper bound on `|slope|`, `|intercept|` and `noise_scale`
///
/// Keeps every squared residual and deviation finite for up to
/// [`MAX_POINT_COUNT`] points.
pub const MAX_MAGNITUDE: f64 = 1e6;

/// Lower end of the x range
pub const X_MIN: f64 = 0.0;

/// Upper end of the x range
pub const X_MAX: f64 = 10.0;

/// How x values are placed over `[X_MIN, X_MAX]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XSpacing {
    /// Uniform random draws from `[X_MIN, X_MAX)`
    #[default]
    Random,
    /// Evenly spaced over `[X_MIN, X_MAX]`, endpoints included
    Even,
}

/// Knobs controlling one synthetic regression run
///
/// `noise_scale` is the **standard deviation** of the zero-mean Gaussian
/// noise added to each observation, not its variance.
///
/// # Example
/// ```
/// use synthfit::params::ParameterSet;
///
/// let params = ParameterSet::default();
/// assert_eq!(params.slope, 2.5);
/// assert_eq!(params.point_count, 100);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParameterSet {
    /// Slope of the noise-free reference line
    pub slope: f64,

    /// Intercept of the noise-free reference line
    pub intercept: f64,

    /// Number of points to generate (must be > 0)
    pub point_count: usize,

    /// Standard deviation of the Gaussian noise (must be >= 0)
    pub noise_scale: f64,

    /// Seed for the per-run random source
    pub seed: u64,

    /// x placement strategy
    pub x_spacing: XSpacing,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            slope: 2.5,
            intercept: 5.0,
            point_count: 100,
            noise_scale: 2.0,
            seed: 42,
            x_spacing: XSpacing::Random,
        }
    }
}

impl ParameterSet {
    /// Noise-free variant of these parameters
    pub fn noiseless(&self) -> Self {
        Self {
            noise_scale: 0.0,
            ..self.clone()
        }
    }

    pub fn with_slope(mut self, slope: f64) -> Self {
        self.slope = slope;
        self
    }

    pub fn with_intercept(mut self, intercept: f64) -> Self {
        self.intercept = intercept;
        self
    }

    pub fn with_point_count(mut self, point_count: usize) -> Self {
        self.point_count = point_count;
        self
    }

    pub fn with_noise_scale(mut self, noise_scale: f64) -> Self {
        self.noise_scale = noise_scale;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_x_spacing(mut self, x_spacing: XSpacing) -> Self {
        self.x_spacing = x_spacing;
        self
    }

    /// Reject parameter sets the generator cannot honour
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.point_count == 0 {
            return Err(ParameterError::ZeroPointCount(self.point_count));
        }

        if self.point_count > MAX_POINT_COUNT {
            return Err(ParameterError::TooManyPoints {
                got: self.point_count,
                max: MAX_POINT_COUNT,
            });
        }

        if !self.noise_scale.is_finite() || self.noise_scale < 0.0 {
            return Err(ParameterError::InvalidNoiseScale(self.noise_scale));
        }

        if !self.slope.is_finite() {
            return Err(ParameterError::NonFinite {
                name: "slope",
                value: self.slope,
            });
        }

        if !self.intercept.is_finite() {
            return Err(ParameterError::NonFinite {
                name: "intercept",
                value: self.intercept,
            });
        }

        for (name, value) in [
            ("slope", self.slope),
            ("intercept", self.intercept),
            ("noise_scale", self.noise_scale),
        ] {
            if value.abs() > MAX_MAGNITUDE {
                return Err(ParameterError::OutOfRange {
                    name,
                    value,
                    max: MAX_MAGNITUDE,
                });
            }
        }

        Ok(())
    }
}
