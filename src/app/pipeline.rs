//! The data pipeline shared by every front-end:
//! fetch each year -> combine -> aggregate.
//!
//! Presentation (printing, charts) lives in `app`, `report`, and `tui`.

use tracing::{info, warn};

use crate::aggregate::{CombinedTable, Summary, summarize};
use crate::data::{CensusClient, YearSource};
use crate::domain::{FailureRecord, SurveyConfig, YearBatch};
use crate::error::{AppError, EXIT_NO_DATA};

pub const NO_DATA_MESSAGE: &str = "No data fetched. Check network / years / API availability.";

/// Outcome of fetching one year.
#[derive(Debug, Clone, PartialEq)]
pub enum YearOutcome {
    Fetched(YearBatch),
    Failed(FailureRecord),
}

/// Successes and failures across all configured years, in year-list order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collected {
    pub batches: Vec<YearBatch>,
    pub failures: Vec<FailureRecord>,
}

impl Collected {
    fn push(&mut self, outcome: YearOutcome) {
        match outcome {
            YearOutcome::Fetched(batch) => self.batches.push(batch),
            YearOutcome::Failed(failure) => self.failures.push(failure),
        }
    }
}

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub table: CombinedTable,
    pub summary: Summary,
    pub failures: Vec<FailureRecord>,
}

/// Fetch one year, turning any error into a failure record.
pub fn fetch_outcome(source: &dyn YearSource, year: i32) -> YearOutcome {
    match source.fetch_year(year) {
        Ok(batch) => {
            info!("[OK] {year}: rows={}", batch.records.len());
            YearOutcome::Fetched(batch)
        }
        Err(err) => {
            warn!("[FAIL] {year}: {err}");
            YearOutcome::Failed(FailureRecord {
                year,
                message: err.to_string(),
            })
        }
    }
}

/// Fetch every year sequentially; one year's failure never stops the rest.
pub fn collect_years(source: &dyn YearSource, years: &[i32]) -> Collected {
    let mut collected = Collected::default();
    for &year in years {
        collected.push(fetch_outcome(source, year));
    }
    collected
}

/// Combine and aggregate the collected batches.
///
/// Fails when no county rows survived, so nothing downstream ever sees an
/// empty table.
pub fn build_output(collected: Collected) -> Result<RunOutput, AppError> {
    let table = CombinedTable::concat(&collected.batches);
    if table.is_empty() {
        return Err(AppError::new(EXIT_NO_DATA, NO_DATA_MESSAGE));
    }

    let summary = summarize(&table);
    Ok(RunOutput {
        table,
        summary,
        failures: collected.failures,
    })
}

/// Run the pipeline against any year source.
pub fn run_with_source(source: &dyn YearSource, years: &[i32]) -> Result<RunOutput, AppError> {
    build_output(collect_years(source, years))
}

/// Run the pipeline against the live Census API.
pub fn run(config: &SurveyConfig) -> Result<RunOutput, AppError> {
    let client = CensusClient::new(config.clone())?;
    run_with_source(&client, &config.years)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::domain::{CountyYearRecord, DEFAULT_YEARS};

    /// Canned per-year responses; records every year it was asked for.
    struct FakeSource {
        responses: HashMap<i32, Result<Vec<(f64, f64)>, String>>,
        calls: RefCell<Vec<i32>>,
    }

    impl FakeSource {
        fn new(responses: Vec<(i32, Result<Vec<(f64, f64)>, String>)>) -> Self {
            Self {
                responses: responses.into_iter().collect(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl YearSource for FakeSource {
        fn fetch_year(&self, year: i32) -> Result<YearBatch, AppError> {
            self.calls.borrow_mut().push(year);
            match self.responses.get(&year) {
                Some(Ok(rows)) => Ok(YearBatch {
                    year,
                    records: rows
                        .iter()
                        .enumerate()
                        .map(|(i, &(income, gini))| CountyYearRecord {
                            name: format!("County {i}"),
                            state: "24".to_string(),
                            county: format!("{:03}", i + 1),
                            year,
                            income,
                            gini,
                        })
                        .collect(),
                    dropped: 0,
                }),
                Some(Err(message)) => Err(AppError::fetch(message.clone())),
                None => Err(AppError::fetch(format!("no canned response for {year}"))),
            }
        }
    }

    fn rows() -> Vec<(f64, f64)> {
        vec![(50000.0, 0.40), (60000.0, 0.42), (70000.0, 0.44)]
    }

    #[test]
    fn single_year_of_three_counties() {
        let source = FakeSource::new(vec![(2018, Ok(rows()))]);
        let out = run_with_source(&source, &[2018]).unwrap();

        assert!(out.failures.is_empty());
        assert_eq!(out.table.len(), 3);
        let agg = &out.summary.yearly[0];
        assert!((agg.avg_income - 60000.0).abs() < 1e-9);
        assert!((agg.median_income - 60000.0).abs() < 1e-9);
        assert_eq!(agg.n_counties, 3);
        assert!((out.summary.correlations[0].corr_income_gini - 1.0).abs() < 1e-9);
    }

    #[test]
    fn one_failed_year_out_of_five_is_reported_not_raised() {
        let source = FakeSource::new(vec![
            (2012, Ok(rows())),
            (2014, Ok(rows())),
            (2016, Err("HTTP status 500 Internal Server Error for http://api/2016".to_string())),
            (2018, Ok(rows())),
            (2022, Ok(rows())),
        ]);
        let out = run_with_source(&source, &DEFAULT_YEARS).unwrap();

        assert_eq!(*source.calls.borrow(), DEFAULT_YEARS.to_vec());
        let years: Vec<i32> = out.summary.yearly.iter().map(|a| a.year).collect();
        assert_eq!(years, vec![2012, 2014, 2018, 2022]);
        let corr_years: Vec<i32> = out.summary.correlations.iter().map(|c| c.year).collect();
        assert_eq!(corr_years, vec![2012, 2014, 2018, 2022]);

        assert_eq!(
            out.failures,
            vec![FailureRecord {
                year: 2016,
                message: "HTTP status 500 Internal Server Error for http://api/2016".to_string(),
            }]
        );
    }

    #[test]
    fn every_year_failing_is_fatal() {
        let source = FakeSource::new(
            DEFAULT_YEARS
                .iter()
                .map(|&y| (y, Err(format!("request for {y} failed: connection refused"))))
                .collect(),
        );
        let err = run_with_source(&source, &DEFAULT_YEARS).unwrap_err();

        assert_eq!(err.exit_code(), EXIT_NO_DATA);
        assert_eq!(err.message(), NO_DATA_MESSAGE);
        assert_eq!(source.calls.borrow().len(), DEFAULT_YEARS.len());
    }

    #[test]
    fn years_without_usable_rows_are_fatal_when_nothing_else_remains() {
        let source = FakeSource::new(vec![(2012, Ok(Vec::new())), (2014, Err("boom".to_string()))]);
        let err = run_with_source(&source, &[2012, 2014]).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_NO_DATA);
    }

    #[test]
    fn every_year_lands_in_exactly_one_list() {
        let source = FakeSource::new(vec![
            (2012, Ok(rows())),
            (2014, Ok(Vec::new())),
            (2016, Err("timeout".to_string())),
        ]);
        let collected = collect_years(&source, &[2012, 2014, 2016]);

        let ok: Vec<i32> = collected.batches.iter().map(|b| b.year).collect();
        let failed: Vec<i32> = collected.failures.iter().map(|f| f.year).collect();
        assert_eq!(ok, vec![2012, 2014]);
        assert_eq!(failed, vec![2016]);
    }
}
