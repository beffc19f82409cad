//! CSV output format for pipeline runs
//!
//! One row per sample point with every derived column, for spreadsheet
//! analysis or plotting in an external tool. Values use Rust's shortest
//! round-trip float formatting, so nothing is lost to rounding.

use crate::pipeline::PipelineRun;

/// CSV record for a single sample point
#[derive(Debug, Clone, PartialEq)]
pub struct CsvPoint {
    pub index: usize,
    pub x: f64,
    pub y_observed: f64,
    pub y_true: f64,
    pub y_predicted: f64,
    pub residual: f64,
    /// 1-based outlier rank, if the point made the top-K
    pub outlier_rank: Option<usize>,
}

/// CSV output formatter
#[derive(Debug, Default)]
pub struct CsvOutput {
    points: Vec<CsvPoint>,
}

impl CsvOutput {
    /// Create an empty CSV output formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect one row per point of a finished run
    pub fn from_run(run: &PipelineRun) -> Self {
        let mut ranks = vec![None; run.sample.len()];
        for (rank, outlier) in run.outliers.iter().enumerate() {
            if let Some(slot) = ranks.get_mut(outlier.index) {
                *slot = Some(rank + 1);
            }
        }

        let mut output = Self::new();
        for (index, ((point, eval), outlier_rank)) in run
            .sample
            .iter()
            .zip(&run.evaluation.points)
            .zip(ranks)
            .enumerate()
        {
            output.add_point(CsvPoint {
                index,
                x: point.x,
                y_observed: point.y_observed,
                y_true: point.y_true,
                y_predicted: eval.y_predicted,
                residual: eval.residual,
                outlier_rank,
            });
        }
        output
    }

    /// Add a row to the output
    pub fn add_point(&mut self, point: CsvPoint) {
        self.points.push(point);
    }

    fn header() -> &'static str {
        "index,x,y_observed,y_true,y_predicted,residual,outlier_rank"
    }

    fn format_point(point: &CsvPoint) -> String {
        let rank = point
            .outlier_rank
            .map(|r| r.to_string())
            .unwrap_or_default();
        format!(
            "{},{},{},{},{},{},{}",
            point.index,
            point.x,
            point.y_observed,
            point.y_true,
            point.y_predicted,
            point.residual,
            rank
        )
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(Self::header());
        output.push('\n');

        for point in &self.points {
            output.push_str(&Self::format_point(point));
            output.push('\n');
        }

        output
    }
}
