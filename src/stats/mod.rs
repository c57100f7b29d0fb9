//! Descriptive statistics: central tendency and linear correlation.

pub mod correlation;
pub mod describe;

pub use correlation::*;
pub use describe::*;
