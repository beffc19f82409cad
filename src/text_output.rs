//! Human-readable report for a pipeline run
//!
//! Mirrors the sections of the interactive demo: data preparation (true line
//! and a preview of the sample), modeling (learned line), evaluation
//! (metrics) and the largest residuals.

use crate::pipeline::PipelineRun;

/// Default number of sample rows shown in the data preview
pub const DEFAULT_HEAD_ROWS: usize = 5;

const RULE: &str = "─────────────────────────────────────────────────────────────";

/// Format `y = a·x + b` with two decimals, keeping the sign on the intercept
pub fn format_line(slope: f64, intercept: f64) -> String {
    if intercept.is_sign_negative() {
        format!("y = {:.2}x - {:.2}", slope, -intercept)
    } else {
        format!("y = {:.2}x + {:.2}", slope, intercept)
    }
}

/// Text report renderer
#[derive(Debug, Clone)]
pub struct TextReport {
    head_rows: usize,
}

impl Default for TextReport {
    fn default() -> Self {
        Self::new(DEFAULT_HEAD_ROWS)
    }
}

impl TextReport {
    pub fn new(head_rows: usize) -> Self {
        Self { head_rows }
    }

    pub fn render(&self, run: &PipelineRun) -> String {
        let mut report = String::new();
        self.push_data_section(&mut report, run);
        self.push_model_section(&mut report, run);
        self.push_evaluation_section(&mut report, run);
        self.push_outlier_section(&mut report, run);
        report
    }

    fn push_data_section(&self, report: &mut String, run: &PipelineRun) {
        let params = &run.params;

        report.push_str("=== Data Preparation ===\n");
        report.push_str(&format!("Generated {} points\n", run.sample.len()));
        report.push_str(&format!(
            "True relationship: {}\n",
            format_line(params.slope, params.intercept)
        ));
        report.push_str(&format!("Noise std-dev: {}\n", params.noise_scale));
        report.push_str(&format!(
            "Seed: {}  x placement: {:?}\n",
            params.seed, params.x_spacing
        ));

        let head = run.sample.head(self.head_rows);
        if head.is_empty() {
            report.push('\n');
            return;
        }

        report.push_str(RULE);
        report.push('\n');
        report.push_str(&format!(
            "{:>6}  {:>12}  {:>12}  {:>12}\n",
            "index", "x", "y_observed", "y_true"
        ));
        for (index, point) in head.iter().enumerate() {
            report.push_str(&format!(
                "{:>6}  {:>12.4}  {:>12.4}  {:>12.4}\n",
                index, point.x, point.y_observed, point.y_true
            ));
        }
        report.push_str(RULE);
        report.push('\n');
        if head.len() < run.sample.len() {
            report.push_str(&format!(
                "(showing {} of {} points)\n",
                head.len(),
                run.sample.len()
            ));
        }
        report.push('\n');
    }

    fn push_model_section(&self, report: &mut String, run: &PipelineRun) {
        let drift = run.drift();

        report.push_str("=== Modeling ===\n");
        report.push_str(&format!(
            "Fitted relationship: {}\n",
            format_line(run.fit.slope, run.fit.intercept)
        ));
        report.push_str(&format!(
            "Coefficient drift: slope {:+.4}, intercept {:+.4}\n\n",
            drift.slope_error, drift.intercept_error
        ));
    }

    fn push_evaluation_section(&self, report: &mut String, run: &PipelineRun) {
        let evaluation = &run.evaluation;

        report.push_str("=== Evaluation ===\n");
        report.push_str(&format!("MSE:  {:.2}\n", evaluation.mse));
        report.push_str(&format!("RMSE: {:.2}\n", evaluation.rmse()));
        report.push_str(&format!("R²:   {:.2}\n\n", evaluation.r_squared));
    }

    fn push_outlier_section(&self, report: &mut String, run: &PipelineRun) {
        if run.outliers.is_empty() {
            return;
        }

        report.push_str(&format!(
            "=== Top {} Outliers (by |residual|) ===\n",
            run.outliers.len()
        ));
        report.push_str(&format!(
            "{:>4}  {:>6}  {:>10}  {:>12}  {:>12}  {:>10}\n",
            "rank", "index", "x", "y_observed", "y_predicted", "residual"
        ));
        for (rank, outlier) in run.outliers.iter().enumerate() {
            report.push_str(&format!(
                "{:>4}  {:>6}  {:>10.4}  {:>12.4}  {:>12.4}  {:>+10.4}\n",
                rank + 1,
                outlier.index,
                outlier.x,
                outlier.y_observed,
                outlier.y_predicted,
                outlier.residual
            ));
        }
    }
}
