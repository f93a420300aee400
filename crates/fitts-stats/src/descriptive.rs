use crate::StatsError;

/// Descriptive statistics summarizing a sample.
///
/// This structure contains the measures of central tendency and dispersion
/// reported for a sample of `f64` values. The standard deviation is the
/// sample (Bessel-corrected) estimator, dividing by `n - 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    /// The number of values in the sample.
    pub count: usize,
    /// The minimum value in the sample.
    pub min: f64,
    /// The maximum value in the sample.
    pub max: f64,
    /// The arithmetic mean of the sample.
    pub mean: f64,
    /// The median value of the sample.
    pub median: f64,
    /// The sample variance (divides by `n - 1`).
    pub variance: f64,
    /// The sample standard deviation.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// This method will sort a copy of the values before computing statistics.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError`] if the sample has fewer than two values or
    /// contains a non-finite value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fitts_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// assert_eq!(stats.variance, 2.5);
    /// ```
    pub fn new<I>(values: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// This skips the sorting step. Use it when the data is already sorted.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    pub fn from_sorted(sorted_values: &[f64]) -> Result<Self, StatsError> {
        StatsError::require_len("standard deviation", sorted_values, 2)?;
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let count = sorted_values.len();
        let min = sorted_values[0];
        let max = sorted_values[count - 1];
        let mean = mean(sorted_values)?;
        let median = if count % 2 == 0 {
            f64::midpoint(sorted_values[count / 2 - 1], sorted_values[count / 2])
        } else {
            sorted_values[count / 2]
        };
        let variance = sum_squared_deviations(sorted_values, mean) / (count as f64 - 1.0);

        Ok(Self {
            count,
            min,
            max,
            mean,
            median,
            variance,
            std_dev: variance.sqrt(),
        })
    }
}

/// Arithmetic mean of a sample.
///
/// # Examples
///
/// ```
/// # use fitts_stats::descriptive::mean;
/// assert_eq!(mean(&[1.0, 2.0, 6.0]).unwrap(), 3.0);
/// assert!(mean(&[]).is_err());
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> Result<f64, StatsError> {
    StatsError::require_len("mean", values, 1)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (divides by `n - 1`).
///
/// A sample whose values are all equal has a standard deviation of zero;
/// that is a valid result here. Callers dividing by the spread are expected
/// to check for it.
///
/// # Examples
///
/// ```
/// # use fitts_stats::descriptive::sample_std_dev;
/// let sd = sample_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert!((sd - 2.138_089_935).abs() < 1e-9);
/// assert!(sample_std_dev(&[1.0]).is_err());
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn sample_std_dev(values: &[f64]) -> Result<f64, StatsError> {
    StatsError::require_len("standard deviation", values, 2)?;
    let mean = mean(values)?;
    Ok((sum_squared_deviations(values, mean) / (values.len() as f64 - 1.0)).sqrt())
}

fn sum_squared_deviations(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|v| (v - mean) * (v - mean)).sum()
}
