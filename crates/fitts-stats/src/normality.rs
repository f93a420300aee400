//! Goodness-of-fit tests for normality.
//!
//! Sequence analysis only needs a yes/no verdict on whether a sample could
//! plausibly come from a normal distribution, so the seam is the
//! [`NormalityTest`] trait. [`Lilliefors`] is the implementation used by
//! default.
//!
//! # Lilliefors test
//!
//! The Lilliefors test is a Kolmogorov-Smirnov test against a normal
//! distribution whose mean and standard deviation are estimated from the
//! sample itself:
//!
//! ```text
//! D = max_i max(i/n - Φ(z_i), Φ(z_i) - (i-1)/n),   z_i = (x_(i) - mean) / sd
//! ```
//!
//! The p-value uses the Dallal-Wilkinson (1986) approximation for small
//! p-values and Stephens' modified-statistic polynomial above 0.1.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::{
    StatsError,
    descriptive::{mean, sample_std_dev},
};

/// A test of the null hypothesis that a sample is normally distributed.
pub trait NormalityTest {
    /// Returns `true` when normality is *not* rejected.
    fn is_normal(&self, sample: &[f64]) -> Result<bool, StatsError>;
}

/// Default significance level for normality verdicts.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Lilliefors normality test at a fixed significance level.
///
/// # Examples
///
/// ```
/// use fitts_stats::normality::{Lilliefors, NormalityTest};
///
/// let sample = [-1.6, -0.9, -0.5, -0.2, 0.0, 0.1, 0.4, 0.7, 1.0, 1.7];
/// assert!(Lilliefors::default().is_normal(&sample).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lilliefors {
    alpha: f64,
}

impl Default for Lilliefors {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

/// Outcome of a Lilliefors test on one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LillieforsOutcome {
    /// Maximum absolute distance between the empirical and fitted CDFs.
    pub statistic: f64,
    /// Approximate p-value of `statistic`.
    pub p_value: f64,
}

impl Lilliefors {
    /// Smallest sample the p-value approximation is defined for.
    pub const MIN_SAMPLE: usize = 5;

    /// Creates a test with the given significance level.
    ///
    /// # Panics
    ///
    /// Panics if `alpha` is not strictly between 0 and 1.
    #[must_use]
    pub fn with_alpha(alpha: f64) -> Self {
        Self::try_with_alpha(alpha)
            .unwrap_or_else(|| panic!("significance level must lie in (0, 1), got {alpha}"))
    }

    /// Creates a test with the given significance level, or `None` if
    /// `alpha` is not strictly between 0 and 1.
    ///
    /// ```
    /// # use fitts_stats::normality::Lilliefors;
    /// assert_eq!(Lilliefors::try_with_alpha(0.01).unwrap().alpha(), 0.01);
    /// assert!(Lilliefors::try_with_alpha(1.0).is_none());
    /// assert!(Lilliefors::try_with_alpha(f64::NAN).is_none());
    /// ```
    #[must_use]
    pub fn try_with_alpha(alpha: f64) -> Option<Self> {
        (alpha > 0.0 && alpha < 1.0).then_some(Self { alpha })
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Computes the test statistic and p-value for `sample`.
    ///
    /// # Errors
    ///
    /// Requires at least [`Self::MIN_SAMPLE`] finite values with non-zero
    /// variance.
    #[expect(clippy::cast_precision_loss)]
    pub fn test(&self, sample: &[f64]) -> Result<LillieforsOutcome, StatsError> {
        const STATISTIC: &str = "Lilliefors test";
        StatsError::require_len(STATISTIC, sample, Self::MIN_SAMPLE)?;

        let mean = mean(sample)?;
        let sd = sample_std_dev(sample)?;
        if sd == 0.0 {
            return Err(StatsError::ZeroVariance {
                statistic: STATISTIC,
            });
        }

        let mut sorted = sample.to_vec();
        sorted.sort_by(f64::total_cmp);
        let normal = Normal::standard();
        let n = sorted.len() as f64;
        let statistic = sorted
            .iter()
            .enumerate()
            .map(|(i, x)| {
                let cdf = normal.cdf((x - mean) / sd);
                let above = (i as f64 + 1.0) / n - cdf;
                let below = cdf - i as f64 / n;
                above.max(below)
            })
            .fold(0.0, f64::max);

        Ok(LillieforsOutcome {
            statistic,
            p_value: p_value(statistic, sorted.len()),
        })
    }
}

impl NormalityTest for Lilliefors {
    fn is_normal(&self, sample: &[f64]) -> Result<bool, StatsError> {
        let outcome = self.test(sample)?;
        Ok(outcome.p_value >= self.alpha)
    }
}

#[expect(clippy::cast_precision_loss)]
fn p_value(statistic: f64, count: usize) -> f64 {
    let n = count as f64;
    let (kd, nd) = if count <= 100 {
        (statistic, n)
    } else {
        (statistic * (n / 100.0).powf(0.49), 100.0)
    };
    let p = (-7.012_56 * kd * kd * (nd + 2.780_19) + 2.995_87 * kd * (nd + 2.780_19).sqrt()
        - 0.122_119
        + 0.974_598 / nd.sqrt()
        + 1.679_97 / nd)
        .exp();
    if p <= 0.1 {
        return p;
    }

    let kk = (n.sqrt() - 0.01 + 0.85 / n.sqrt()) * statistic;
    let p = if kk <= 0.302 {
        1.0
    } else if kk <= 0.5 {
        2.767_73 - 19.828_315 * kk + 80.709_644 * kk.powi(2) - 138.551_52 * kk.powi(3)
            + 81.218_052 * kk.powi(4)
    } else if kk <= 0.9 {
        -4.901_232 + 40.662_806 * kk - 97.490_286 * kk.powi(2) + 94.029_866 * kk.powi(3)
            - 32.355_711 * kk.powi(4)
    } else if kk <= 1.31 {
        6.198_765 - 19.039_164 * kk + 18.513_189 * kk.powi(2) - 6.093_71 * kk.powi(3)
            + 0.694_303 * kk.powi(4)
    } else {
        0.0
    };
    p.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::cast_precision_loss)]
    fn quantiles(n: usize, inverse_cdf: impl Fn(f64) -> f64) -> Vec<f64> {
        (1..=n)
            .map(|i| inverse_cdf((i as f64 - 0.5) / n as f64))
            .collect()
    }

    #[test]
    fn test_normal_quantiles_are_normal() {
        let normal = Normal::standard();
        let sample = quantiles(50, |p| normal.inverse_cdf(p));
        let outcome = Lilliefors::default().test(&sample).unwrap();
        assert!(outcome.statistic < 0.02);
        assert_eq!(outcome.p_value, 1.0);
    }

    #[test]
    fn test_exponential_quantiles_are_rejected() {
        let sample = quantiles(50, |p| -(1.0 - p).ln());
        let outcome = Lilliefors::default().test(&sample).unwrap();
        assert!((outcome.statistic - 0.1564).abs() < 1e-3);
        assert!(outcome.p_value < 0.01);
        assert!(!Lilliefors::default().is_normal(&sample).unwrap());
    }

    #[test]
    fn test_bimodal_sample_is_rejected() {
        let cluster = [-10.0, -10.5, -9.5, -10.2, -9.8, 10.0, 10.5, 9.5, 10.2, 9.8];
        let sample = [cluster, cluster].concat();
        assert!(!Lilliefors::default().is_normal(&sample).unwrap());
    }

    #[test]
    fn test_alpha_controls_verdict() {
        // exponential quantiles for n = 20 give p ~ 0.23
        let sample = quantiles(20, |p| -(1.0 - p).ln());
        assert_eq!(Lilliefors::default().alpha(), DEFAULT_ALPHA);
        assert!(Lilliefors::default().is_normal(&sample).unwrap());
        let strict = Lilliefors::with_alpha(0.3);
        assert_eq!(strict.alpha(), 0.3);
        assert!(!strict.is_normal(&sample).unwrap());
    }

    #[test]
    fn test_small_and_constant_samples() {
        let test = Lilliefors::default();
        assert_eq!(
            test.is_normal(&[1.0, 2.0, 3.0, 4.0]),
            Err(StatsError::InsufficientSample {
                statistic: "Lilliefors test",
                required: 5,
                actual: 4,
            })
        );
        assert_eq!(
            test.is_normal(&[2.0; 8]),
            Err(StatsError::ZeroVariance {
                statistic: "Lilliefors test"
            })
        );
    }

    #[test]
    fn test_large_sample_scaling_keeps_p_in_range() {
        let sample = quantiles(400, |p| -(1.0 - p).ln());
        let outcome = Lilliefors::default().test(&sample).unwrap();
        assert!((0.0..=1.0).contains(&outcome.p_value));
        assert!(outcome.p_value < 0.001);
    }
}
