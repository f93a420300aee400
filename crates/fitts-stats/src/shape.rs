//! Distribution shape estimators.
//!
//! Both estimators are the bias-corrected sample forms reported by common
//! spreadsheet and statistics packages (`SKEW` / `KURT`), standardizing each
//! deviation by the sample standard deviation.

use crate::{
    StatsError,
    descriptive::{mean, sample_std_dev},
};

/// Bias-corrected sample skewness.
///
/// `n / ((n - 1)(n - 2)) * Σ((x - mean) / sd)³`
///
/// # Errors
///
/// Requires at least three values and a non-zero standard deviation.
///
/// # Examples
///
/// ```
/// # use fitts_stats::shape::skewness;
/// // symmetric samples have zero skewness
/// assert!(skewness(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap().abs() < 1e-12);
/// // a long right tail gives positive skewness
/// assert!(skewness(&[1.0, 1.0, 1.0, 2.0, 9.0]).unwrap() > 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn skewness(values: &[f64]) -> Result<f64, StatsError> {
    const STATISTIC: &str = "skewness";
    StatsError::require_len(STATISTIC, values, 3)?;
    let sum = standardized_power_sum(STATISTIC, values, 3)?;
    let n = values.len() as f64;
    Ok(n / ((n - 1.0) * (n - 2.0)) * sum)
}

/// Bias-corrected sample excess kurtosis.
///
/// `n(n + 1) / ((n - 1)(n - 2)(n - 3)) * Σ((x - mean) / sd)⁴ - 3(n - 1)² / ((n - 2)(n - 3))`
///
/// # Errors
///
/// Requires at least four values and a non-zero standard deviation.
///
/// # Examples
///
/// ```
/// # use fitts_stats::shape::kurtosis;
/// let k = kurtosis(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert!((k - (-1.2)).abs() < 1e-12);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn kurtosis(values: &[f64]) -> Result<f64, StatsError> {
    const STATISTIC: &str = "kurtosis";
    StatsError::require_len(STATISTIC, values, 4)?;
    let sum = standardized_power_sum(STATISTIC, values, 4)?;
    let n = values.len() as f64;
    let scale = (n * (n + 1.0)) / ((n - 1.0) * (n - 2.0) * (n - 3.0));
    let offset = (3.0 * (n - 1.0) * (n - 1.0)) / ((n - 2.0) * (n - 3.0));
    Ok(scale * sum - offset)
}

fn standardized_power_sum(
    statistic: &'static str,
    values: &[f64],
    power: i32,
) -> Result<f64, StatsError> {
    let mean = mean(values)?;
    let sd = sample_std_dev(values)?;
    if sd == 0.0 {
        return Err(StatsError::ZeroVariance { statistic });
    }
    Ok(values.iter().map(|v| ((v - mean) / sd).powi(power)).sum())
}
