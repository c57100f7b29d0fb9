//! Formatted terminal output for a finished run.
//!
//! We keep formatting code in one place so:
//! - the aggregation code stays clean and testable
//! - output changes are localized (the tests below pin the layout)

use crate::aggregate::Summary;
use crate::domain::{FailureRecord, YearlyAggregate, YearlyCorrelation};

/// Per-year trend table, sorted by year.
pub fn format_aggregates(state_name: &str, rows: &[YearlyAggregate]) -> String {
    let mut sorted = rows.to_vec();
    sorted.sort_by_key(|r| r.year);

    let mut out = String::new();
    out.push_str(&format!("=== {state_name} statewide (county-average) trend ===\n"));
    out.push_str(&format!(
        "{:>4} {:>12} {:>14} {:>9} {:>12} {:>11}\n",
        "year", "avg_income", "median_income", "avg_gini", "median_gini", "n_counties"
    ));
    for r in &sorted {
        out.push_str(&format!(
            "{:>4} {:>12.2} {:>14.2} {:>9.4} {:>12.4} {:>11}\n",
            r.year, r.avg_income, r.median_income, r.avg_gini, r.median_gini, r.n_counties
        ));
    }
    out
}

/// Per-year correlation table, sorted by year. Undefined values print as `NaN`.
pub fn format_correlations(rows: &[YearlyCorrelation]) -> String {
    let mut sorted = rows.to_vec();
    sorted.sort_by_key(|r| r.year);

    let mut out = String::new();
    out.push_str("=== Correlation (county-level): income vs gini ===\n");
    out.push_str(&format!("{:>4} {:>16}\n", "year", "corr_income_gini"));
    for r in &sorted {
        out.push_str(&format!("{:>4} {:>16.6}\n", r.year, r.corr_income_gini));
    }
    out
}

pub fn format_overall(overall: f64) -> String {
    format!("=== Overall correlation (all counties, all selected years): {overall:.4} ===\n")
}

/// `<year>: <message>` per failed year; empty when nothing failed.
pub fn format_failures(failures: &[FailureRecord]) -> String {
    if failures.is_empty() {
        return String::new();
    }
    let mut out = String::from("=== Failed years ===\n");
    for f in failures {
        out.push_str(&format!("{}: {}\n", f.year, f.message));
    }
    out
}

/// Full report: trend table, correlations, overall value, then failures.
pub fn format_report(state_name: &str, summary: &Summary, failures: &[FailureRecord]) -> String {
    let mut sections = vec![
        format_aggregates(state_name, &summary.yearly),
        format_correlations(&summary.correlations),
        format_overall(summary.overall_correlation),
    ];
    let failed = format_failures(failures);
    if !failed.is_empty() {
        sections.push(failed);
    }
    sections.join("\n")
}
