//! Reporting: plain-text tables printed to stdout after a run.

pub mod format;

pub use format::*;
