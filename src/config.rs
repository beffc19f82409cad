//! Run configuration from TOML files and CLI flags
//!
//! Precedence is CLI flag > config file > built-in default.
//!
//! # Example synthfit.toml
//!
//! ```toml
//! [parameters]
//! slope = 2.5
//! intercept = 5.0
//! point_count = 200
//! noise_scale = 1.0   # standard deviation
//! seed = 7
//! x_spacing = "even"
//!
//! [report]
//! top_k = 10
//! head = 3
//! format = "json"
//! include_points = false
//! ```

use crate::cli::{Cli, OutputFormat};
use crate::outliers::DEFAULT_TOP_K;
use crate::params::ParameterSet;
use crate::text_output::DEFAULT_HEAD_ROWS;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How a finished run is reported
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Number of largest-residual points to report
    pub top_k: usize,
    /// Sample rows shown in the text preview
    pub head: usize,
    pub format: OutputFormat,
    /// Embed every sample point in JSON output
    pub include_points: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            head: DEFAULT_HEAD_ROWS,
            format: OutputFormat::Text,
            include_points: true,
        }
    }
}

/// Root configuration for synthfit.toml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub parameters: ParameterSet,
    pub report: ReportConfig,
}

impl RunConfig {
    /// Load configuration from a TOML file
    ///
    /// # Example
    ///
    /// ```no_run
    /// use synthfit::config::RunConfig;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let config = RunConfig::from_file("synthfit.toml")?;
    /// println!("Generating {} points", config.parameters.point_count);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML")
    }

    /// Build the effective configuration for a CLI invocation
    ///
    /// Starts from `--config` (or defaults), then applies explicit flags.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    /// Apply every flag the user actually passed
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        let params = &mut self.parameters;
        if let Some(slope) = cli.slope {
            params.slope = slope;
        }
        if let Some(intercept) = cli.intercept {
            params.intercept = intercept;
        }
        if let Some(points) = cli.points {
            params.point_count = points;
        }
        if let Some(noise) = cli.noise {
            params.noise_scale = noise;
        }
        if let Some(seed) = cli.seed {
            params.seed = seed;
        }
        if let Some(x_spacing) = cli.x_spacing {
            params.x_spacing = x_spacing;
        }

        let report = &mut self.report;
        if let Some(top_k) = cli.top_k {
            report.top_k = top_k;
        }
        if let Some(head) = cli.head {
            report.head = head;
        }
        if let Some(format) = cli.format {
            report.format = format;
        }
        if cli.no_points {
            report.include_points = false;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::XSpacing;
    use clap::Parser;

    #[test]
    fn test_empty_config_is_default() {
        let config = RunConfig::from_toml_str("").unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.report.top_k, 5);
        assert_eq!(config.report.head, 5);
        assert_eq!(config.report.format, OutputFormat::Text);
        assert!(config.report.include_points);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [parameters]
            slope = -1.25
            intercept = 3.0
            point_count = 200
            noise_scale = 0.5
            seed = 9
            x_spacing = "even"

            [report]
            top_k = 10
            head = 2
            format = "csv"
            include_points = false
        "#;

        let config = RunConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.parameters.slope, -1.25);
        assert_eq!(config.parameters.intercept, 3.0);
        assert_eq!(config.parameters.point_count, 200);
        assert_eq!(config.parameters.noise_scale, 0.5);
        assert_eq!(config.parameters.seed, 9);
        assert_eq!(config.parameters.x_spacing, XSpacing::Even);
        assert_eq!(config.report.top_k, 10);
        assert_eq!(config.report.head, 2);
        assert_eq!(config.report.format, OutputFormat::Csv);
        assert!(!config.report.include_points);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = RunConfig::from_toml_str("[parameters]\nseed = 1\n").unwrap();
        assert_eq!(config.parameters.seed, 1);
        assert_eq!(config.parameters.slope, 2.5);
        assert_eq!(config.report, ReportConfig::default());
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(RunConfig::from_toml_str("[plot]\nwidth = 3\n").is_err());
    }

    #[test]
    fn test_unknown_report_key_rejected() {
        assert!(RunConfig::from_toml_str("[report]\ncolour = \"red\"\n").is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let base = RunConfig::from_toml_str(
            "[parameters]\nslope = 1.0\nseed = 3\n[report]\nformat = \"json\"\n",
        )
        .unwrap();
        let cli = Cli::parse_from(["synthfit", "--slope", "4.0", "--format", "text"]);

        let config = base.with_overrides(&cli);
        assert_eq!(config.parameters.slope, 4.0);
        // Not passed on the command line, so the file value stays
        assert_eq!(config.parameters.seed, 3);
        assert_eq!(config.report.format, OutputFormat::Text);
    }

    #[test]
    fn test_no_points_flag() {
        let cli = Cli::parse_from(["synthfit", "--no-points"]);
        let config = RunConfig::default().with_overrides(&cli);
        assert!(!config.report.include_points);
    }

    #[test]
    fn test_resolve_missing_file_errors() {
        let cli = Cli::parse_from(["synthfit", "-c", "/nonexistent/synthfit.toml"]);
        let err = RunConfig::resolve(&cli).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
