//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the fixed survey configuration (`SurveyConfig`)
//! - typed county rows (`CountyYearRecord`) and per-year batches/failures
//! - aggregation outputs (`YearlyAggregate`, `YearlyCorrelation`)

pub mod types;

pub use types::*;
