//! Ratatui-based chart viewer.
//!
//! Each trend chart takes over the terminal (alternate screen) and blocks
//! until dismissed; charts are shown one after another.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::info;

use crate::error::AppError;
use crate::plot::TrendSeries;

mod plotters_chart;

use plotters_chart::TrendChart;

/// Show each series full-screen in turn, blocking until the user dismisses it.
pub fn show_charts(series: &[TrendSeries]) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal =
        Terminal::new(backend).map_err(|e| AppError::terminal(format!("Failed to initialize terminal: {e}")))?;

    for (idx, s) in series.iter().enumerate() {
        info!(title = %s.title, "showing chart");
        let footer = format!(
            "Chart {}/{} | Enter, Esc or q to {}",
            idx + 1,
            series.len(),
            if idx + 1 == series.len() { "close" } else { "continue" }
        );
        show_until_dismissed(&mut terminal, s, &footer)?;
    }
    Ok(())
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::terminal(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::terminal(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

fn show_until_dismissed<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    series: &TrendSeries,
    footer: &str,
) -> Result<(), AppError> {
    let mut needs_redraw = true;
    loop {
        if needs_redraw {
            terminal
                .draw(|f| draw(f, series, footer))
                .map_err(|e| AppError::terminal(format!("Terminal draw error: {e}")))?;
            needs_redraw = false;
        }

        if !event::poll(Duration::from_millis(100))
            .map_err(|e| AppError::terminal(format!("Event poll error: {e}")))?
        {
            continue;
        }

        match event::read().map_err(|e| AppError::terminal(format!("Event read error: {e}")))? {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Press && is_dismiss_key(key.code) {
                    return Ok(());
                }
            }
            Event::Resize(_, _) => needs_redraw = true,
            _ => {}
        }
    }
}

fn is_dismiss_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q'))
}

fn draw(frame: &mut ratatui::Frame<'_>, series: &TrendSeries, footer: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(1)])
        .split(frame.area());

    let block = Block::default()
        .title(series.title.as_str())
        .borders(Borders::ALL);
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    let widget = TrendChart {
        points: &series.points,
        x_bounds: series.x_bounds(),
        y_bounds: series.y_bounds(),
        x_label: series.x_label,
        y_label: series.y_label,
        fmt_x: fmt_axis_year,
        fmt_y: fmt_axis_value,
    };
    frame.render_widget(widget, inner);

    let hint = Paragraph::new(footer).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, chunks[1]);
}

fn fmt_axis_year(v: f64) -> String {
    format!("{v:.0}")
}

fn fmt_axis_value(v: f64) -> String {
    if v.abs() >= 1000.0 {
        format!("{:.0}k", v / 1000.0)
    } else if v.abs() >= 10.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.3}")
    }
}
