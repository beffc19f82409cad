//! CLI argument parsing for synthfit

use crate::params::XSpacing;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for run reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text format (default)
    #[default]
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "synthfit")]
#[command(version)]
#[command(
    about = "Generate synthetic linear data, fit a least-squares line and rank residual outliers",
    long_about = None
)]
pub struct Cli {
    /// Slope of the true line (default: 2.5)
    #[arg(long, value_name = "SLOPE", allow_negative_numbers = true)]
    pub slope: Option<f64>,

    /// Intercept of the true line (default: 5.0)
    #[arg(long, value_name = "INTERCEPT", allow_negative_numbers = true)]
    pub intercept: Option<f64>,

    /// Number of points to generate (default: 100)
    #[arg(short = 'n', long = "points", value_name = "COUNT")]
    pub points: Option<usize>,

    /// Standard deviation of the Gaussian noise (default: 2.0)
    #[arg(long = "noise", value_name = "STD_DEV", allow_negative_numbers = true)]
    pub noise: Option<f64>,

    /// Random seed; equal seeds reproduce equal samples (default: 42)
    #[arg(short = 's', long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// How x values are placed over [0, 10]
    #[arg(long = "x-spacing", value_enum)]
    pub x_spacing: Option<XSpacing>,

    /// Number of largest-residual points to report (default: 5)
    #[arg(short = 'k', long = "top-k", value_name = "K")]
    pub top_k: Option<usize>,

    /// Sample rows shown in the text report preview (default: 5)
    #[arg(long = "head", value_name = "ROWS")]
    pub head: Option<usize>,

    /// Output format
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Omit per-point records from JSON output
    #[arg(long = "no-points")]
    pub no_points: bool,

    /// Load parameters and report settings from a TOML file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
