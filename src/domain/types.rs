//! Shared domain types.
//!
//! Rows are converted into these typed records at the parsing boundary, so
//! everything downstream of the fetcher works with named, typed fields rather
//! than loosely-typed table cells.

use std::time::Duration;

/// Survey years fetched on every run, ascending.
pub const DEFAULT_YEARS: [i32; 5] = [2012, 2014, 2016, 2018, 2022];

/// Maryland.
pub const DEFAULT_STATE_FIPS: &str = "24";
pub const DEFAULT_STATE_NAME: &str = "Maryland";

/// ACS 5-year: median household income in the past 12 months.
pub const VAR_INCOME: &str = "B19013_001E";
/// ACS 5-year: Gini index of income inequality.
pub const VAR_GINI: &str = "B19083_001E";

pub const DEFAULT_BASE_URL: &str = "https://api.census.gov/data";
pub const DEFAULT_DATASET: &str = "acs/acs5";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (data-collection for coursework)";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fixed run configuration.
///
/// The data selection (years, state, variables) is not exposed on the command
/// line. `base_url` exists so tests can point the client at a local server.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyConfig {
    pub years: Vec<i32>,
    pub state_fips: String,
    pub state_name: String,
    pub income_var: String,
    pub gini_var: String,
    pub base_url: String,
    pub dataset: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            years: DEFAULT_YEARS.to_vec(),
            state_fips: DEFAULT_STATE_FIPS.to_string(),
            state_name: DEFAULT_STATE_NAME.to_string(),
            income_var: VAR_INCOME.to_string(),
            gini_var: VAR_GINI.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            dataset: DEFAULT_DATASET.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl SurveyConfig {
    /// Per-year dataset endpoint, e.g. `https://api.census.gov/data/2018/acs/acs5`.
    pub fn endpoint(&self, year: i32) -> String {
        format!(
            "{}/{year}/{}",
            self.base_url.trim_end_matches('/'),
            self.dataset.trim_matches('/')
        )
    }

    /// Value of the `get` query parameter.
    pub fn get_columns(&self) -> String {
        format!("NAME,{},{}", self.income_var, self.gini_var)
    }
}

/// One county in one survey year, with both measures present.
#[derive(Debug, Clone, PartialEq)]
pub struct CountyYearRecord {
    pub name: String,
    pub state: String,
    pub county: String,
    pub year: i32,
    pub income: f64,
    pub gini: f64,
}

/// Cleaned rows for a single successfully fetched year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearBatch {
    pub year: i32,
    pub records: Vec<CountyYearRecord>,
    /// Rows discarded because income or Gini was missing/non-numeric.
    pub dropped: usize,
}

/// A year whose fetch failed, with the error text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    pub year: i32,
    pub message: String,
}

/// Per-year descriptive statistics across counties.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyAggregate {
    pub year: i32,
    pub avg_income: f64,
    pub median_income: f64,
    pub avg_gini: f64,
    pub median_gini: f64,
    pub n_counties: usize,
}

/// Pearson correlation of income vs Gini across one year's counties.
///
/// `corr_income_gini` is NaN when undefined (fewer than two counties or a
/// constant variable).
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyCorrelation {
    pub year: i32,
    pub corr_income_gini: f64,
}
