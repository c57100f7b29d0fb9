//! Census Bureau API integration for ACS 5-year county tables.
//!
//! The API answers with a JSON array of arrays: the first row is the header,
//! every other row is one county. Cells are (almost always) strings, so both
//! measures are coerced to numbers here and rows missing either are dropped.

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::debug;

use crate::domain::{CountyYearRecord, SurveyConfig, YearBatch};
use crate::error::AppError;

const COL_NAME: &str = "NAME";
const COL_STATE: &str = "state";
const COL_COUNTY: &str = "county";

/// Anything that can produce one year's cleaned county rows.
///
/// The pipeline only talks to this trait, so runs can be driven by the live
/// API or by canned batches.
pub trait YearSource {
    fn fetch_year(&self, year: i32) -> Result<YearBatch, AppError>;
}

pub struct CensusClient {
    client: Client,
    config: SurveyConfig,
}

impl CensusClient {
    pub fn new(config: SurveyConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AppError::fetch(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }
}

impl YearSource for CensusClient {
    fn fetch_year(&self, year: i32) -> Result<YearBatch, AppError> {
        let url = self.config.endpoint(year);
        debug!(year, %url, "requesting county table");

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("get", self.config.get_columns()),
                ("for", "county:*".to_string()),
                ("in", format!("state:{}", self.config.state_fips)),
            ])
            .send()
            .map_err(|e| AppError::fetch(format!("request for {year} failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::fetch(format!(
                "HTTP status {} for {}",
                resp.status(),
                resp.url()
            )));
        }

        let body = resp
            .text()
            .map_err(|e| AppError::fetch(format!("failed to read response for {year}: {e}")))?;

        parse_table(year, &body, &self.config)
    }
}

/// Parse an API response body into a cleaned batch for `year`.
///
/// Fails on malformed JSON, an empty table, missing columns, or ragged rows.
/// Non-numeric income/Gini cells are not errors; those rows are dropped.
pub fn parse_table(year: i32, body: &str, config: &SurveyConfig) -> Result<YearBatch, AppError> {
    let table: Vec<Vec<Value>> = serde_json::from_str(body)
        .map_err(|e| AppError::fetch(format!("failed to parse response for {year}: {e}")))?;

    let mut rows = table.into_iter();
    let header: Vec<String> = rows
        .next()
        .ok_or_else(|| AppError::fetch(format!("response for {year} is empty")))?
        .into_iter()
        .map(text_cell)
        .collect();

    let column = |name: &str| -> Result<usize, AppError> {
        header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| AppError::fetch(format!("response for {year} is missing column '{name}'")))
    };
    let name_idx = column(COL_NAME)?;
    let income_idx = column(config.income_var.as_str())?;
    let gini_idx = column(config.gini_var.as_str())?;
    let state_idx = column(COL_STATE)?;
    let county_idx = column(COL_COUNTY)?;

    let mut records = Vec::new();
    let mut dropped = 0;
    for (i, mut row) in rows.enumerate() {
        if row.len() != header.len() {
            return Err(AppError::fetch(format!(
                "response for {year}: row {} has {} fields, expected {}",
                i + 1,
                row.len(),
                header.len()
            )));
        }

        let (Some(income), Some(gini)) = (numeric_cell(&row[income_idx]), numeric_cell(&row[gini_idx])) else {
            dropped += 1;
            continue;
        };

        records.push(CountyYearRecord {
            name: text_cell(row[name_idx].take()),
            state: text_cell(row[state_idx].take()),
            county: text_cell(row[county_idx].take()),
            year,
            income,
            gini,
        });
    }

    debug!(year, kept = records.len(), dropped, "parsed county table");
    Ok(YearBatch { year, records, dropped })
}

fn text_cell(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn numeric_cell(value: &Value) -> Option<f64> {
    let v = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };
    if v.is_finite() { Some(v) } else { None }
}
