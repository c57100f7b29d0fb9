//! Pearson product-moment correlation.
//!
//! ```text
//! r = Σ (x_i - x̄)(y_i - ȳ) / sqrt(Σ (x_i - x̄)² · Σ (y_i - ȳ)²)
//! ```
//!
//! The coefficient is undefined for fewer than two observations or when either
//! variable is constant; in those cases we return NaN instead of an error.

use nalgebra::DVector;

/// Relative tolerance below which a variable's spread counts as zero.
///
/// The mean of identical values is not always bit-exact, so centered values of
/// a constant series can be tiny but non-zero. Without a tolerance those
/// rounding residues would produce a spurious ±1.
const CONSTANT_TOL: f64 = 1e-12;

/// Pearson correlation between `x` and `y`.
///
/// Pairs are taken positionally; extra values in the longer slice are ignored.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return f64::NAN;
    }

    let x = DVector::from_column_slice(&x[..n]);
    let y = DVector::from_column_slice(&y[..n]);

    let (Some(xc), Some(yc)) = (centered(&x), centered(&y)) else {
        return f64::NAN;
    };

    let r = xc.dot(&yc) / (xc.norm() * yc.norm());
    if r.is_finite() { r.clamp(-1.0, 1.0) } else { f64::NAN }
}

/// Subtract the mean; `None` when the series is (numerically) constant.
fn centered(v: &DVector<f64>) -> Option<DVector<f64>> {
    let mean = v.mean();
    let c = v.add_scalar(-mean);
    let std = (c.norm_squared() / v.len() as f64).sqrt();
    if std <= CONSTANT_TOL * mean.abs().max(1.0) {
        None
    } else {
        Some(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfectly_increasing_relationship_is_one() {
        let r = pearson(&[50000.0, 60000.0, 70000.0], &[0.40, 0.42, 0.44]);
        assert!((r - 1.0).abs() < 1e-9, "expected 1.0, got {r}");
    }

    #[test]
    fn perfectly_decreasing_relationship_is_minus_one() {
        let r = pearson(&[1.0, 2.0, 3.0, 4.0], &[8.0, 6.0, 4.0, 2.0]);
        assert!((r + 1.0).abs() < 1e-9, "expected -1.0, got {r}");
    }

    #[test]
    fn known_value() {
        // x = [1,2,3,4,5], y = [2,4,5,4,5]: Sxy = 6, Sxx = 10, Syy = 6.
        let r = pearson(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 5.0, 4.0, 5.0]);
        let expected = 6.0 / (10.0_f64 * 6.0).sqrt();
        assert!((r - expected).abs() < 1e-12, "expected {expected}, got {r}");
    }

    #[test]
    fn symmetric_in_its_arguments() {
        let income = [37083.0, 87430.0, 41385.0, 108188.0, 55000.0, 62000.0];
        let gini = [0.4456, 0.4103, 0.5083, 0.4321, 0.4712, 0.4399];
        let a = pearson(&income, &gini);
        let b = pearson(&gini, &income);
        assert!(a.is_finite());
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn fewer_than_two_points_is_nan() {
        assert!(pearson(&[], &[]).is_nan());
        assert!(pearson(&[50000.0], &[0.4]).is_nan());
    }

    #[test]
    fn constant_variable_is_nan() {
        assert!(pearson(&[1.0, 2.0, 3.0], &[0.1, 0.1, 0.1]).is_nan());
        assert!(pearson(&[60000.0, 60000.0], &[0.4, 0.5]).is_nan());
    }
}
