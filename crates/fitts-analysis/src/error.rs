use fitts_stats::StatsError;

/// Failures reported by the analyzers.
///
/// Precondition violations are detected where the offending input is first
/// examined; degenerate statistics surface as [`AnalysisError::Statistics`].
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum AnalysisError {
    #[display("from and to coincide at ({x}, {y}); the task axis is undefined")]
    CoincidentEndpoints { x: f64, y: f64 },
    #[display("coordinate ({x}, {y}) is not finite")]
    NonFiniteCoordinate { x: f64, y: f64 },
    #[display("path has {actual} points, at least {required} are required")]
    PathTooShort { required: usize, actual: usize },
    #[display("target width must be positive and finite, got {width}")]
    InvalidWidth { width: f64 },
    #[display("nominal amplitude must be positive and finite, got {amplitude}")]
    InvalidAmplitude { amplitude: f64 },
    #[display("sequence contains no trials")]
    NoTrials,
    #[display("{field} has {actual} entries, expected {expected} (one per trial)")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[display("trial {index} selects ({x}, {y}), which is not the last point of its path")]
    SelectionOffPath { index: usize, x: f64, y: f64 },
    #[display(
        "trial {index} has movement time {movement_time} ms but its phases add up to {phases} ms"
    )]
    TimingMismatch {
        index: usize,
        movement_time: f64,
        phases: f64,
    },
    #[display("normality significance level must lie strictly between 0 and 1, got {alpha}")]
    InvalidAlpha { alpha: f64 },
    #[display("mean movement time must be positive, got {mean_ms} ms")]
    NonPositiveMovementTime { mean_ms: f64 },
    #[display("insufficient statistics: {_0}")]
    Statistics(StatsError),
}

impl From<StatsError> for AnalysisError {
    fn from(err: StatsError) -> Self {
        Self::Statistics(err)
    }
}

pub(crate) fn require_width(width: f64) -> Result<f64, AnalysisError> {
    if width.is_finite() && width > 0.0 {
        Ok(width)
    } else {
        Err(AnalysisError::InvalidWidth { width })
    }
}

pub(crate) fn require_amplitude(amplitude: f64) -> Result<f64, AnalysisError> {
    if amplitude.is_finite() && amplitude > 0.0 {
        Ok(amplitude)
    } else {
        Err(AnalysisError::InvalidAmplitude { amplitude })
    }
}
