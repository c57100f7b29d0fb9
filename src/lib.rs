//! `acs-trends` library crate.
//!
//! The binary (`acs-trends`) is a thin wrapper around this library so that:
//!
//! - the fetch/aggregate pipeline is testable without spawning processes
//!   or touching the network
//! - presentation (report text, charts) stays separate from the numbers

pub mod aggregate;
pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod plot;
pub mod report;
pub mod stats;
pub mod tui;
