/// Reasons a statistic cannot be computed for a sample.
///
/// Every statistic in this crate reports degenerate input through this type
/// instead of returning `NaN` or an infinite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    /// The sample contains no values.
    #[display("sample is empty")]
    Empty,
    /// The sample is too small for the requested statistic.
    #[display("{statistic} requires at least {required} values, got {actual}")]
    InsufficientSample {
        statistic: &'static str,
        required: usize,
        actual: usize,
    },
    /// All values are identical, so the statistic divides by a zero spread.
    #[display("{statistic} is undefined for a sample with zero variance")]
    ZeroVariance { statistic: &'static str },
    /// The sample contains `NaN` or an infinite value.
    #[display("{statistic} is undefined for a sample containing non-finite values")]
    NonFinite { statistic: &'static str },
}

impl StatsError {
    pub(crate) fn require_len(
        statistic: &'static str,
        values: &[f64],
        required: usize,
    ) -> Result<(), Self> {
        if values.is_empty() {
            return Err(Self::Empty);
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Self::NonFinite { statistic });
        }
        if values.len() < required {
            return Err(Self::InsufficientSample {
                statistic,
                required,
                actual: values.len(),
            });
        }
        Ok(())
    }
}
