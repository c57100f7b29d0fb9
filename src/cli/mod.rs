//! Command-line parsing.
//!
//! Only presentation is configurable here. The survey selection (years,
//! state, variables) is fixed in `domain::SurveyConfig`.

use clap::Parser;

/// Top-level CLI.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "acs-trends",
    version,
    about = "County income and inequality trends from the ACS 5-year API"
)]
pub struct Cli {
    /// Print the report only; do not show the trend charts.
    #[arg(long)]
    pub no_charts: bool,

    /// Print the trend charts as text instead of opening the chart viewer.
    #[arg(long, conflicts_with = "no_charts")]
    pub ascii: bool,

    /// ASCII chart width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// ASCII chart height (rows).
    #[arg(long, default_value_t = 18)]
    pub height: usize,
}

/// How the trend charts are presented after the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartMode {
    Interactive,
    Ascii { width: usize, height: usize },
    Off,
}

impl Cli {
    pub fn chart_mode(&self) -> ChartMode {
        if self.no_charts {
            ChartMode::Off
        } else if self.ascii {
            ChartMode::Ascii {
                width: self.width,
                height: self.height,
            }
        } else {
            ChartMode::Interactive
        }
    }
}
