//! ASCII line charts for terminals without an interactive display.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal or a log file
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - yearly values: `o`
//! - connecting line: `-`

use super::TrendSeries;

/// Render one trend series as a `width` x `height` character grid with a
/// two-line header (title, then ranges).
pub fn render_ascii_trend(series: &TrendSeries, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let [x_min, x_max] = series.x_bounds();
    let [y_min, y_max] = series.y_bounds();

    let mut grid = vec![vec![' '; width]; height];

    let cells: Vec<(usize, usize)> = series
        .points
        .iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|&(x, y)| (map_x(x, x_min, x_max, width), map_y(y, y_min, y_max, height)))
        .collect();

    // Line first so markers overlay it.
    for pair in cells.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        draw_line(&mut grid, x0, y0, x1, y1, '-');
    }
    for &(x, y) in &cells {
        grid[y][x] = 'o';
    }

    let mut out = String::new();
    out.push_str(&series.title);
    out.push('\n');
    out.push_str(&format!(
        "{}=[{x_min:.0}, {x_max:.0}] | {}=[{}, {}]\n",
        series.x_label,
        series.y_label,
        fmt_value(y_min),
        fmt_value(y_max)
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn fmt_value(v: f64) -> String {
    if v.abs() >= 100.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.4}")
    }
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(points: Vec<(f64, f64)>) -> TrendSeries {
        TrendSeries {
            title: "Test Trend".to_string(),
            x_label: "Year",
            y_label: "Gini Index",
            points,
        }
    }

    #[test]
    fn flat_trend_golden_snapshot() {
        let txt = render_ascii_trend(&series(vec![(2012.0, 5.0), (2022.0, 5.0)]), 10, 5);
        let expected = concat!(
            "Test Trend\n",
            "Year=[2012, 2022] | Gini Index=[4.7500, 5.2500]\n",
            "          \n",
            "          \n",
            "o--------o\n",
            "          \n",
            "          \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn rising_trend_runs_bottom_left_to_top_right() {
        let txt = render_ascii_trend(&series(vec![(2012.0, 0.0), (2022.0, 10.0)]), 10, 5);
        let rows: Vec<&str> = txt.lines().skip(2).collect();
        assert_eq!(rows.len(), 5);
        assert!(rows[0].ends_with('o'), "{txt}");
        assert!(rows[4].starts_with('o'), "{txt}");
        assert!(rows[1..4].iter().all(|r| r.contains('-')), "{txt}");
    }

    #[test]
    fn single_year_renders_one_marker() {
        let txt = render_ascii_trend(&series(vec![(2016.0, 61000.0)]), 11, 5);
        assert_eq!(txt.matches('o').count(), 1);
        assert!(txt.contains("Year=[2015, 2017]"));
        assert!(txt.lines().nth(4).unwrap().chars().nth(5) == Some('o'), "{txt}");
    }
}
