//! CLI entrypoint for aiq-screener
//!
//! Wires the layers together: builds the session (application), runs the
//! form (presentation), and prints the summary on exit.

use aiq_application::AssessmentSession;
use aiq_presentation::{Cli, OutputFormat, SummaryFormatter, TuiApp};
use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Log to stderr: stdout holds the alternate screen while the form runs
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting AIQ screener");

    let session = AssessmentSession::new();
    let mut app = TuiApp::new(session);
    app.run()?;

    let summary = app.into_summary();
    info!(
        relevant = summary.relevant_count,
        rating = %summary.rating,
        "assessment finished"
    );

    if !cli.no_summary {
        let output = match cli.output {
            OutputFormat::Text => SummaryFormatter::format(&summary),
            OutputFormat::Json => SummaryFormatter::format_json(&summary),
        };
        println!("{}", output);
    }

    Ok(())
}
