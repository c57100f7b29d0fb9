//! Aggregation: combine per-year batches and summarize them by year.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::{CountyYearRecord, YearBatch, YearlyAggregate, YearlyCorrelation};
use crate::stats::{mean, median, pearson};

/// All county rows from every successfully fetched year, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombinedTable {
    rows: Vec<CountyYearRecord>,
}

impl CombinedTable {
    /// Concatenate batches row-wise, preserving batch order.
    pub fn concat(batches: &[YearBatch]) -> Self {
        let rows = batches
            .iter()
            .flat_map(|b| b.records.iter().cloned())
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[CountyYearRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows grouped by survey year, years ascending.
    pub fn by_year(&self) -> BTreeMap<i32, Vec<&CountyYearRecord>> {
        let mut groups: BTreeMap<i32, Vec<&CountyYearRecord>> = BTreeMap::new();
        for row in &self.rows {
            groups.entry(row.year).or_default().push(row);
        }
        groups
    }
}

/// Everything the reporter and charts need.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub yearly: Vec<YearlyAggregate>,
    pub correlations: Vec<YearlyCorrelation>,
    pub overall_correlation: f64,
}

/// Mean/median of income and Gini plus county count, one row per year.
pub fn aggregate_by_year(table: &CombinedTable) -> Vec<YearlyAggregate> {
    table
        .by_year()
        .into_iter()
        .map(|(year, rows)| {
            let (income, gini) = columns(&rows);
            YearlyAggregate {
                year,
                avg_income: mean(&income),
                median_income: median(&income),
                avg_gini: mean(&gini),
                median_gini: median(&gini),
                n_counties: rows.len(),
            }
        })
        .collect()
}

/// Income-vs-Gini correlation across each year's counties.
pub fn correlate_by_year(table: &CombinedTable) -> Vec<YearlyCorrelation> {
    table
        .by_year()
        .into_iter()
        .map(|(year, rows)| {
            let (income, gini) = columns(&rows);
            YearlyCorrelation {
                year,
                corr_income_gini: pearson(&income, &gini),
            }
        })
        .collect()
}

/// Income-vs-Gini correlation across every row, ignoring year.
pub fn overall_correlation(table: &CombinedTable) -> f64 {
    let rows: Vec<&CountyYearRecord> = table.rows().iter().collect();
    let (income, gini) = columns(&rows);
    pearson(&income, &gini)
}

pub fn summarize(table: &CombinedTable) -> Summary {
    let summary = Summary {
        yearly: aggregate_by_year(table),
        correlations: correlate_by_year(table),
        overall_correlation: overall_correlation(table),
    };
    debug!(
        rows = table.len(),
        years = summary.yearly.len(),
        overall = summary.overall_correlation,
        "aggregated combined table"
    );
    summary
}

fn columns(rows: &[&CountyYearRecord]) -> (Vec<f64>, Vec<f64>) {
    rows.iter().map(|r| (r.income, r.gini)).unzip()
}
