//! Mean and median over plain `f64` slices.
//!
//! Both return NaN for an empty input rather than panicking; callers never
//! aggregate an empty group, but NaN keeps the functions total.

use nalgebra::DVector;

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    DVector::from_column_slice(values).mean()
}

/// Median (50th percentile).
///
/// Odd counts take the middle sorted value; even counts interpolate linearly
/// between the two middle values, i.e. their average.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}
