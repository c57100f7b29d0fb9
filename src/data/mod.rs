//! External data sources.

pub mod census;

pub use census::{CensusClient, YearSource, parse_table};
