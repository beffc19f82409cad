use anyhow::{Context, Result};
use clap::Parser;
use synthfit::cli::{Cli, OutputFormat};
use synthfit::config::{ReportConfig, RunConfig};
use synthfit::csv_output::CsvOutput;
use synthfit::json_output::JsonOutput;
use synthfit::pipeline::{self, PipelineRun};
use synthfit::text_output::TextReport;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Render a finished run in the configured format
fn render(run: &PipelineRun, report: &ReportConfig) -> Result<String> {
    match report.format {
        OutputFormat::Text => Ok(TextReport::new(report.head).render(run)),
        OutputFormat::Json => {
            let json = JsonOutput::from_run(run, report.include_points).to_json()?;
            Ok(format!("{}\n", json))
        }
        OutputFormat::Csv => Ok(CsvOutput::from_run(run).to_csv()),
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = RunConfig::resolve(&args)?;
    tracing::debug!(?config, "resolved run configuration");

    let run = pipeline::run_with_top_k(&config.parameters, config.report.top_k)
        .context("Pipeline run failed")?;

    print!("{}", render(&run, &config.report)?);
    Ok(())
}
