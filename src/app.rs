//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - fetches every configured survey year
//! - aggregates and prints the report
//! - shows the trend charts

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::{ChartMode, Cli};
use crate::domain::SurveyConfig;
use crate::error::AppError;
use crate::plot::{TrendSeries, gini_trend, income_trend, render_ascii_trend};

pub mod pipeline;

/// Entry point for the `acs-trends` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging();

    let config = SurveyConfig::default();
    info!(
        state = %config.state_name,
        years = ?config.years,
        "fetching ACS 5-year county tables"
    );

    let run = pipeline::run(&config)?;

    println!(
        "{}",
        crate::report::format_report(&config.state_name, &run.summary, &run.failures)
    );

    let charts = trend_charts(&config, &run);
    match cli.chart_mode() {
        ChartMode::Interactive => crate::tui::show_charts(&charts)?,
        ChartMode::Ascii { width, height } => {
            for chart in &charts {
                println!("{}", render_ascii_trend(chart, width, height));
            }
        }
        ChartMode::Off => {}
    }

    Ok(())
}

/// Income chart first, then Gini.
pub fn trend_charts(config: &SurveyConfig, run: &pipeline::RunOutput) -> Vec<TrendSeries> {
    vec![
        income_trend(&config.state_name, &run.summary.yearly),
        gini_trend(&config.state_name, &run.summary.yearly),
    ]
}

/// Logs go to stderr so stdout carries only the report.
fn init_logging() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(env)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
