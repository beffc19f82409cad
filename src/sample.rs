//! Generated sample for one pipeline run

use serde::Serialize;

/// A single generated observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplePoint {
    pub x: f64,
    /// Observed value (reference line plus noise)
    pub y_observed: f64,
    /// Noise-free value on the configured line
    pub y_true: f64,
}

/// Ordered, immutable sequence of generated points
///
/// Derived data (predictions, residuals, outliers) lives in separate records
/// that refer back to points by index; a `Sample` is never modified after
/// construction.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Sample {
    points: Vec<SamplePoint>,
}

impl Sample {
    pub fn from_points(points: Vec<SamplePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SamplePoint> {
        self.points.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SamplePoint> {
        self.points.iter()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn observed(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y_observed).collect()
    }

    /// First `n` points (fewer if the sample is shorter)
    pub fn head(&self, n: usize) -> &[SamplePoint] {
        &self.points[..n.min(self.points.len())]
    }
}

impl<'a> IntoIterator for &'a Sample {
    type Item = &'a SamplePoint;
    type IntoIter = std::slice::Iter<'a, SamplePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: f64) -> SamplePoint {
        SamplePoint {
            x,
            y_observed: y,
            y_true: y,
        }
    }

    #[test]
    fn test_columns() {
        let sample = Sample::from_points(vec![point(1.0, 2.0), point(3.0, 4.0)]);
        assert_eq!(sample.len(), 2);
        assert_eq!(sample.xs(), vec![1.0, 3.0]);
        assert_eq!(sample.observed(), vec![2.0, 4.0]);
    }

    #[test]
    fn test_head_clamps_to_length() {
        let sample = Sample::from_points(vec![point(1.0, 1.0), point(2.0, 2.0)]);
        assert_eq!(sample.head(1).len(), 1);
        assert_eq!(sample.head(5).len(), 2);
        assert!(Sample::default().head(3).is_empty());
    }
}
