//! Trend chart data: one `(year, value)` line per chart.
//!
//! Series and bounds are computed here, outside any renderer, so the ASCII
//! renderer and the TUI draw exactly the same thing.

pub mod ascii;

pub use ascii::render_ascii_trend;

use crate::domain::YearlyAggregate;

/// A render-ready line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// `(year, value)` pairs, years ascending.
    pub points: Vec<(f64, f64)>,
}

impl TrendSeries {
    /// X bounds; a single year is widened by one year on each side.
    pub fn x_bounds(&self) -> [f64; 2] {
        let (lo, hi) = min_max(self.points.iter().map(|&(x, _)| x)).unwrap_or((0.0, 1.0));
        if hi > lo { [lo, hi] } else { [lo - 1.0, hi + 1.0] }
    }

    /// Y bounds with 5% padding; a flat series gets a small absolute pad.
    pub fn y_bounds(&self) -> [f64; 2] {
        let (lo, hi) = min_max(self.points.iter().map(|&(_, y)| y)).unwrap_or((0.0, 1.0));
        let (lo, hi) = pad_range(lo, hi, 0.05);
        [lo, hi]
    }
}

/// Mean county income by year.
pub fn income_trend(state_name: &str, yearly: &[YearlyAggregate]) -> TrendSeries {
    TrendSeries {
        title: format!("{state_name} Avg County Median Household Income (ACS 5-year)"),
        x_label: "Year",
        y_label: "Income (USD)",
        points: sorted_points(yearly, |a| a.avg_income),
    }
}

/// Mean county Gini index by year.
pub fn gini_trend(state_name: &str, yearly: &[YearlyAggregate]) -> TrendSeries {
    TrendSeries {
        title: format!("{state_name} Avg County Gini Index (ACS 5-year)"),
        x_label: "Year",
        y_label: "Gini Index",
        points: sorted_points(yearly, |a| a.avg_gini),
    }
}

fn sorted_points(yearly: &[YearlyAggregate], value: fn(&YearlyAggregate) -> f64) -> Vec<(f64, f64)> {
    let mut points: Vec<(f64, f64)> = yearly.iter().map(|a| (a.year as f64, value(a))).collect();
    points.sort_by(|a, b| a.0.total_cmp(&b.0));
    points
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo.is_finite() && hi.is_finite() { Some((lo, hi)) } else { None }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = if span > 0.0 {
        span * frac
    } else {
        (min.abs() * frac).max(1e-3)
    };
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(year: i32, income: f64, gini: f64) -> YearlyAggregate {
        YearlyAggregate {
            year,
            avg_income: income,
            median_income: income,
            avg_gini: gini,
            median_gini: gini,
            n_counties: 24,
        }
    }

    #[test]
    fn trends_use_mean_values_sorted_by_year() {
        let yearly = vec![aggregate(2018, 80000.0, 0.44), aggregate(2012, 70000.0, 0.43)];

        let income = income_trend("Maryland", &yearly);
        assert_eq!(income.title, "Maryland Avg County Median Household Income (ACS 5-year)");
        assert_eq!(income.y_label, "Income (USD)");
        assert_eq!(income.points, vec![(2012.0, 70000.0), (2018.0, 80000.0)]);

        let gini = gini_trend("Maryland", &yearly);
        assert_eq!(gini.title, "Maryland Avg County Gini Index (ACS 5-year)");
        assert_eq!(gini.x_label, "Year");
        assert_eq!(gini.points, vec![(2012.0, 0.43), (2018.0, 0.44)]);
    }

    #[test]
    fn bounds_cover_points_with_padding() {
        let series = income_trend("Maryland", &[aggregate(2012, 100.0, 0.4), aggregate(2022, 200.0, 0.5)]);
        assert_eq!(series.x_bounds(), [2012.0, 2022.0]);
        let [lo, hi] = series.y_bounds();
        assert!((lo - 95.0).abs() < 1e-9 && (hi - 205.0).abs() < 1e-9);
    }

    #[test]
    fn single_point_bounds_are_still_drawable() {
        let series = gini_trend("Maryland", &[aggregate(2016, 60000.0, 0.45)]);
        let [x0, x1] = series.x_bounds();
        let [y0, y1] = series.y_bounds();
        assert!(x1 > x0 && y1 > y0);
        assert!(x0 < 2016.0 && 2016.0 < x1);
        assert!(y0 < 0.45 && 0.45 < y1);
    }
}
