//! Synthetic sample generation
//!
//! Points are placed on the line `y = slope * x + intercept` and perturbed by
//! i.i.d. Gaussian noise with standard deviation `noise_scale`.
//!
//! Every call builds its own `StdRng` from the parameter seed. All x values
//! are drawn first, then all noise values, so the noise stream for a given
//! seed does not depend on how x was placed.

use crate::error::{ParameterError, Result};
use crate::params::{ParameterSet, XSpacing, X_MAX, X_MIN};
use crate::sample::{Sample, SamplePoint};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// Generate the sample described by `params`
///
/// # Example
/// ```
/// use synthfit::generator::generate;
/// use synthfit::params::ParameterSet;
///
/// let params = ParameterSet::default().with_point_count(20);
/// let first = generate(&params).unwrap();
/// let second = generate(&params).unwrap();
/// assert_eq!(first.len(), 20);
/// assert_eq!(first, second); // same seed, same sample
/// ```
pub fn generate(params: &ParameterSet) -> Result<Sample> {
    params.validate()?;

    let mut rng = StdRng::seed_from_u64(params.seed);
    let xs = place_x(params.x_spacing, params.point_count, &mut rng);

    // Zero spread means no noise draws at all, so y_observed == y_true exactly
    let noise = if params.noise_scale > 0.0 {
        let normal = Normal::new(0.0, params.noise_scale)
            .map_err(|_| ParameterError::InvalidNoiseScale(params.noise_scale))?;
        Some(normal)
    } else {
        None
    };

    let offsets: Vec<f64> = match &noise {
        Some(normal) => (0..xs.len()).map(|_| normal.sample(&mut rng)).collect(),
        None => vec![0.0; xs.len()],
    };

    let points = xs
        .into_iter()
        .zip(offsets)
        .map(|(x, offset)| {
            let y_true = params.slope * x + params.intercept;
            let y_observed = if noise.is_some() {
                y_true + offset
            } else {
                y_true
            };
            SamplePoint {
                x,
                y_observed,
                y_true,
            }
        })
        .collect();

    let sample = Sample::from_points(points);
    tracing::trace!(
        points = sample.len(),
        seed = params.seed,
        spacing = ?params.x_spacing,
        "generated sample"
    );
    Ok(sample)
}

fn place_x(spacing: XSpacing, count: usize, rng: &mut StdRng) -> Vec<f64> {
    match spacing {
        XSpacing::Random => (0..count).map(|_| rng.gen_range(X_MIN..X_MAX)).collect(),
        XSpacing::Even => {
            if count <= 1 {
                return vec![X_MIN; count];
            }
            let last = (count - 1) as f64;
            (0..count)
                .map(|i| X_MIN + (X_MAX - X_MIN) * i as f64 / last)
                .collect()
        }
    }
}
