//! Fitts' law throughput for a sequence of trials.
//!
//! A sequence is a run of trials sharing one nominal amplitude `A` and target
//! width `W`. Each selection is projected onto its task axis (see
//! [`projection`](crate::projection)); the spread of those projections
//! defines the width the participant effectively aimed for:
//!
//! ```text
//! We  = 4.133 × SD(Δx)
//! Ae  = mean(a + Δx)             (+ previous Δx for serial trials)
//! IDe = log2(Ae / We + 1)
//! TP  = IDe / (MT / 1000)        bits per second
//! ```
//!
//! # Example
//!
//! ```
//! use fitts_analysis::{
//!     Point,
//!     throughput::{ResponseType, SequenceCondition, TaskType, ThroughputAnalyzer},
//! };
//!
//! let condition = SequenceCondition {
//!     amplitude: 200.0,
//!     width: 40.0,
//!     task_type: TaskType::OneDimensional,
//!     response_type: ResponseType::Discrete,
//! };
//! let from = [Point::new(0.0, 0.0); 4];
//! let to = [Point::new(200.0, 0.0); 4];
//! let select = [
//!     Point::new(195.0, 3.0),
//!     Point::new(204.0, -1.0),
//!     Point::new(199.0, 0.0),
//!     Point::new(207.0, 2.0),
//! ];
//!
//! let result = ThroughputAnalyzer::new()
//!     .analyze(&condition, &from, &to, &select, &[400.0, 420.0, 380.0, 410.0])
//!     .unwrap();
//! assert_eq!(result.miss_count, 0);
//! assert!(result.throughput > 0.0);
//! // four trials are too few for a normality verdict
//! assert!(result.is_normal.is_err());
//! ```

use std::{f64::consts::PI, fmt, str::FromStr};

use fitts_stats::{
    StatsError,
    descriptive::{mean, sample_std_dev},
    normality::{Lilliefors, NormalityTest},
    shape::{kurtosis, skewness},
};
use serde::{Deserialize, Serialize};

use crate::{
    AnalysisError, Point,
    error::{require_amplitude, require_width},
    geometry::TaskAxis,
    projection::TrialProjection,
};

/// `√(2πe)` as used by historical result sets.
pub const EFFECTIVE_WIDTH_FACTOR: f64 = 4.132_731_354;

/// Largest accepted difference between a trial's measured amplitude and the
/// one its task layout predicts.
pub const AMPLITUDE_TOLERANCE: f64 = 2.0;

/// Layout of the targets in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskType {
    /// Two rectangular strips; a selection hits when its projection lies
    /// within the strip.
    #[serde(rename = "1D")]
    OneDimensional,
    /// Circular targets around a layout circle of diameter `A`; a selection
    /// hits when it lies within the circle of diameter `W`.
    #[serde(rename = "2D")]
    TwoDimensional,
}

/// Whether trials follow one another without pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseType {
    /// Each trial starts where the previous selection landed.
    Serial,
    /// Each trial starts from a fresh home position.
    Discrete,
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OneDimensional => "1D",
            Self::TwoDimensional => "2D",
        })
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Serial => "Serial",
            Self::Discrete => "Discrete",
        })
    }
}

/// An unrecognized task or response type name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown {kind} {value:?} (expected {expected})")]
pub struct ParseConditionError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl FromStr for TaskType {
    type Err = ParseConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("1d") {
            Ok(Self::OneDimensional)
        } else if s.eq_ignore_ascii_case("2d") {
            Ok(Self::TwoDimensional)
        } else {
            Err(ParseConditionError {
                kind: "task type",
                value: s.to_owned(),
                expected: "1D or 2D",
            })
        }
    }
}

impl FromStr for ResponseType {
    type Err = ParseConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("serial") {
            Ok(Self::Serial)
        } else if s.eq_ignore_ascii_case("discrete") {
            Ok(Self::Discrete)
        } else {
            Err(ParseConditionError {
                kind: "response type",
                value: s.to_owned(),
                expected: "Serial or Discrete",
            })
        }
    }
}

/// The nominal condition shared by every trial in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SequenceCondition {
    /// Nominal amplitude; for 2D tasks, the diameter of the layout circle.
    pub amplitude: f64,
    /// Nominal target width (diameter for 2D tasks).
    pub width: f64,
    pub task_type: TaskType,
    pub response_type: ResponseType,
}

impl SequenceCondition {
    /// Nominal index of difficulty, `log2(A / W + 1)`.
    #[must_use]
    pub fn nominal_id(&self) -> f64 {
        (self.amplitude / self.width + 1.0).log2()
    }
}

/// Computes [`ThroughputResult`]s, delegating the normality verdict to `N`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThroughputAnalyzer<N = Lilliefors> {
    normality: N,
}

impl ThroughputAnalyzer<Lilliefors> {
    /// An analyzer using the Lilliefors test at the default significance level.
    #[must_use]
    pub fn new() -> Self {
        Self::with_normality_test(Lilliefors::default())
    }
}

impl Default for ThroughputAnalyzer<Lilliefors> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> ThroughputAnalyzer<N>
where
    N: NormalityTest,
{
    #[must_use]
    pub fn with_normality_test(normality: N) -> Self {
        Self { normality }
    }

    /// Analyzes one sequence.
    ///
    /// The four slices hold one entry per trial, in trial order. Movement
    /// times are in milliseconds.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::NoTrials`] or [`AnalysisError::LengthMismatch`]
    ///   when the slices are empty or disagree in length;
    /// - [`AnalysisError::InvalidAmplitude`] / [`AnalysisError::InvalidWidth`]
    ///   for a non-positive nominal condition;
    /// - [`AnalysisError::CoincidentEndpoints`] or
    ///   [`AnalysisError::NonFiniteCoordinate`] for a degenerate trial;
    /// - [`AnalysisError::Statistics`] when fewer than two trials are given
    ///   or every projection is identical, so that `We` is zero;
    /// - [`AnalysisError::NonPositiveMovementTime`] when the mean movement
    ///   time is not positive.
    pub fn analyze(
        &self,
        condition: &SequenceCondition,
        from: &[Point],
        to: &[Point],
        select: &[Point],
        movement_times: &[f64],
    ) -> Result<ThroughputResult, AnalysisError> {
        let trial_count = from.len();
        if trial_count == 0 {
            return Err(AnalysisError::NoTrials);
        }
        for (field, actual) in [
            ("to", to.len()),
            ("select", select.len()),
            ("movement_times", movement_times.len()),
        ] {
            if actual != trial_count {
                return Err(AnalysisError::LengthMismatch {
                    field,
                    expected: trial_count,
                    actual,
                });
            }
        }
        require_amplitude(condition.amplitude)?;
        let width = require_width(condition.width)?;

        let mut trials = Vec::with_capacity(trial_count);
        for ((&from, &to), &select) in from.iter().zip(to).zip(select) {
            let axis = TaskAxis::new(from, to)?;
            let projection = TrialProjection::on_axis(&axis, select.require_finite()?);
            let miss = match condition.task_type {
                TaskType::OneDimensional => projection.delta_x.abs() > width / 2.0,
                TaskType::TwoDimensional => select.distance(to) > width / 2.0,
            };
            trials.push((projection, miss));
        }

        let delta_x = trials.iter().map(|(p, _)| p.delta_x).collect::<Vec<_>>();
        let effective_amplitudes = trials
            .iter()
            .enumerate()
            .map(|(i, (p, _))| match condition.response_type {
                ResponseType::Serial if i > 0 => p.effective_amplitude() + delta_x[i - 1],
                _ => p.effective_amplitude(),
            })
            .collect::<Vec<_>>();

        let sd_x = sample_std_dev(&delta_x)?;
        if sd_x == 0.0 {
            return Err(StatsError::ZeroVariance {
                statistic: "effective width",
            }
            .into());
        }
        let effective_amplitude = mean(&effective_amplitudes)?;
        let effective_width = EFFECTIVE_WIDTH_FACTOR * sd_x;
        let effective_id = (effective_amplitude / effective_width + 1.0).log2();

        let movement_time = mean(movement_times)?;
        if movement_time <= 0.0 {
            return Err(AnalysisError::NonPositiveMovementTime {
                mean_ms: movement_time,
            });
        }

        let misses = trials.iter().map(|&(_, miss)| miss).collect::<Vec<_>>();
        let miss_count = misses.iter().filter(|&&miss| miss).count();
        #[expect(clippy::cast_precision_loss)]
        let error_rate = 100.0 * miss_count as f64 / trial_count as f64;

        Ok(ThroughputResult {
            condition: *condition,
            amplitudes: trials.iter().map(|(p, _)| p.amplitude).collect(),
            mean_delta_x: mean(&delta_x)?,
            skewness: skewness(&delta_x),
            kurtosis: kurtosis(&delta_x),
            is_normal: self.normality.is_normal(&delta_x),
            delta_x,
            effective_amplitudes,
            misses,
            sd_x,
            effective_amplitude,
            effective_width,
            effective_id,
            movement_time,
            miss_count,
            error_rate,
            throughput: effective_id / (movement_time / 1000.0),
        })
    }
}

/// Sequence-level measures derived from the trials of one sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ThroughputResult {
    pub condition: SequenceCondition,
    /// Measured `|from - to|` of each trial.
    pub amplitudes: Vec<f64>,
    /// Signed overshoot of each selection along its task axis.
    pub delta_x: Vec<f64>,
    /// Distance covered along the task axis by each trial; for serial
    /// sequences this includes the previous trial's overshoot.
    pub effective_amplitudes: Vec<f64>,
    pub misses: Vec<bool>,
    pub mean_delta_x: f64,
    /// Sample standard deviation of `delta_x`.
    pub sd_x: f64,
    /// `Ae`
    pub effective_amplitude: f64,
    /// `We`
    pub effective_width: f64,
    /// `IDe`, in bits.
    pub effective_id: f64,
    /// Mean movement time in milliseconds.
    pub movement_time: f64,
    pub miss_count: usize,
    /// Percentage of missed trials.
    pub error_rate: f64,
    /// Bits per second.
    pub throughput: f64,
    pub skewness: Result<f64, StatsError>,
    pub kurtosis: Result<f64, StatsError>,
    /// Whether normality of `delta_x` was not rejected.
    pub is_normal: Result<bool, StatsError>,
}

impl ThroughputResult {
    #[must_use]
    pub fn trial_count(&self) -> usize {
        self.delta_x.len()
    }

    /// Whether the error rate is strictly above `percent`, i.e. whether the
    /// sequence should be run again.
    #[must_use]
    pub fn exceeds_error_threshold(&self, percent: f64) -> bool {
        self.error_rate > percent
    }

    /// `log2(A / W + 1)` of the nominal condition.
    #[must_use]
    pub fn nominal_id(&self) -> f64 {
        self.condition.nominal_id()
    }

    /// Trials whose measured amplitude departs from the layout by more than
    /// [`AMPLITUDE_TOLERANCE`].
    #[must_use]
    pub fn amplitude_mismatches(&self) -> Vec<AmplitudeMismatch> {
        let n = self.trial_count();
        self.amplitudes
            .iter()
            .enumerate()
            .filter_map(|(index, &actual)| {
                let expected = expected_amplitude(
                    self.condition.task_type,
                    self.condition.amplitude,
                    n,
                    index,
                );
                ((actual - expected).abs() > AMPLITUDE_TOLERANCE).then_some(AmplitudeMismatch {
                    index,
                    expected,
                    actual,
                })
            })
            .collect()
    }
}

/// A trial whose target placement does not match its sequence's layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmplitudeMismatch {
    pub index: usize,
    pub expected: f64,
    pub actual: f64,
}

/// Movement distance of a perfectly executed trial.
///
/// For 1D tasks every trial spans `amplitude`. For 2D tasks `amplitude` is
/// the diameter of a circle of `target_count` targets visited in the usual
/// ISO 9241-9 order: with an even count, even-indexed trials cross the full
/// diameter and odd-indexed ones go to the neighbour of the start target;
/// with an odd count every trial is a slightly shorter chord.
///
/// ```
/// use fitts_analysis::throughput::{TaskType, expected_amplitude};
///
/// assert_eq!(expected_amplitude(TaskType::OneDimensional, 300.0, 20, 7), 300.0);
/// assert_eq!(expected_amplitude(TaskType::TwoDimensional, 300.0, 12, 4), 300.0);
/// assert!(expected_amplitude(TaskType::TwoDimensional, 300.0, 13, 4) < 300.0);
/// ```
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn expected_amplitude(
    task_type: TaskType,
    amplitude: f64,
    target_count: usize,
    index: usize,
) -> f64 {
    if task_type == TaskType::OneDimensional {
        return amplitude;
    }
    let n = target_count as f64;
    let b = amplitude * (PI / n).sin();
    if target_count % 2 == 0 {
        if index % 2 == 0 {
            return amplitude;
        }
        let theta = 0.5 * PI * (n - 2.0) / n;
        let c = b * theta.sin();
        let x = b * theta.cos();
        (amplitude - x).hypot(c)
    } else {
        let m = 2.0 * n;
        let theta = 0.5 * PI * (m - 2.0) / m;
        let x = (b / 2.0) / theta.tan();
        (amplitude - x).hypot(b / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected} ± {tolerance}, got {actual}"
        );
    }

    /// The documented 20-trial 1D serial sequence: `fromX fromY toX toY selX selY MT`.
    const DOCUMENTED: [[f64; 7]; 20] = [
        [540.2, 592.0, 227.8, 592.0, 218.5, 534.3, 263.0],
        [227.8, 592.0, 540.2, 592.0, 529.5, 496.3, 268.0],
        [540.2, 592.0, 227.8, 592.0, 195.0, 608.0, 248.0],
        [227.8, 592.0, 540.2, 592.0, 533.5, 547.0, 234.0],
        [540.2, 592.0, 227.8, 592.0, 209.8, 651.0, 251.0],
        [227.8, 592.0, 540.2, 592.0, 607.0, 554.0, 253.0],
        [540.2, 592.0, 227.8, 592.0, 231.3, 650.8, 283.0],
        [227.8, 592.0, 540.2, 592.0, 540.8, 568.3, 215.0],
        [540.2, 592.0, 227.8, 592.0, 231.9, 642.5, 301.0],
        [227.8, 592.0, 540.2, 592.0, 560.5, 567.0, 267.0],
        [540.2, 592.0, 227.8, 592.0, 207.5, 653.8, 259.0],
        [227.8, 592.0, 540.2, 592.0, 524.5, 604.8, 259.0],
        [540.2, 592.0, 227.8, 592.0, 239.1, 704.3, 248.0],
        [227.8, 592.0, 540.2, 592.0, 515.0, 610.9, 243.0],
        [540.2, 592.0, 227.8, 592.0, 180.0, 675.5, 242.0],
        [227.8, 592.0, 540.2, 592.0, 501.0, 606.5, 253.0],
        [540.2, 592.0, 227.8, 592.0, 215.5, 666.0, 244.0],
        [227.8, 592.0, 540.2, 592.0, 572.0, 621.5, 256.0],
        [540.2, 592.0, 227.8, 592.0, 215.4, 690.5, 252.0],
        [227.8, 592.0, 540.2, 592.0, 521.5, 641.8, 210.0],
    ];

    struct Columns {
        from: Vec<Point>,
        to: Vec<Point>,
        select: Vec<Point>,
        mt: Vec<f64>,
    }

    fn columns(rows: &[[f64; 7]]) -> Columns {
        Columns {
            from: rows.iter().map(|r| Point::new(r[0], r[1])).collect(),
            to: rows.iter().map(|r| Point::new(r[2], r[3])).collect(),
            select: rows.iter().map(|r| Point::new(r[4], r[5])).collect(),
            mt: rows.iter().map(|r| r[6]).collect(),
        }
    }

    fn condition(task_type: TaskType, response_type: ResponseType) -> SequenceCondition {
        SequenceCondition {
            amplitude: 312.4,
            width: 130.2,
            task_type,
            response_type,
        }
    }

    fn analyze(condition: &SequenceCondition, rows: &[[f64; 7]]) -> Result<ThroughputResult, AnalysisError> {
        let c = columns(rows);
        ThroughputAnalyzer::new().analyze(condition, &c.from, &c.to, &c.select, &c.mt)
    }

    mod documented_sequence {
        use super::*;

        #[test]
        fn test_serial_1d_measures() {
            let result = analyze(
                &condition(TaskType::OneDimensional, ResponseType::Serial),
                &DOCUMENTED,
            )
            .unwrap();

            assert_eq!(result.trial_count(), 20);
            assert_near(result.delta_x[0], 9.3, 1e-9);
            assert_near(result.delta_x[1], -10.7, 1e-9);
            assert_near(result.delta_x[2], 32.8, 1e-9);
            assert_near(result.mean_delta_x, 6.865, 1e-9);
            assert_near(result.sd_x, 25.665_526_233_492_78, 1e-9);
            assert_near(*result.skewness.as_ref().unwrap(), 0.511_634_923_921_480_7, 1e-9);
            assert_near(*result.kurtosis.as_ref().unwrap(), 0.314_068_850_738_630_45, 1e-9);
            assert_eq!(result.is_normal, Ok(true));

            assert_eq!(result.miss_count, 1);
            assert_near(result.error_rate, 5.0, 1e-12);
            assert_near(result.effective_amplitude, 327.065, 1e-9);
            assert_near(result.effective_width, 106.068_724_982_065_13, 1e-9);
            assert_near(result.effective_id, 2.029_813_176, 1e-6);
            assert_near(result.movement_time, 252.45, 1e-9);
            assert_near(result.throughput, 8.040_456_23, 1e-5);
            assert_near(result.nominal_id(), (312.4_f64 / 130.2 + 1.0).log2(), 1e-12);
        }

        #[test]
        fn test_discrete_ignores_previous_overshoot() {
            let result = analyze(
                &condition(TaskType::OneDimensional, ResponseType::Discrete),
                &DOCUMENTED,
            )
            .unwrap();
            assert_near(result.effective_amplitude, 312.4 + 6.865, 1e-9);
            for (ae, (a, dx)) in result
                .effective_amplitudes
                .iter()
                .zip(result.amplitudes.iter().zip(&result.delta_x))
            {
                assert_near(*ae, a + dx, 1e-12);
            }
        }

        #[test]
        fn test_serial_carries_previous_overshoot() {
            let result = analyze(
                &condition(TaskType::OneDimensional, ResponseType::Serial),
                &DOCUMENTED,
            )
            .unwrap();
            assert_near(
                result.effective_amplitudes[0],
                result.amplitudes[0] + result.delta_x[0],
                1e-12,
            );
            assert_near(
                result.effective_amplitudes[1],
                result.amplitudes[1] + result.delta_x[1] + result.delta_x[0],
                1e-12,
            );
        }

        #[test]
        fn test_2d_misses_use_distance_to_centre() {
            let result = analyze(
                &condition(TaskType::TwoDimensional, ResponseType::Serial),
                &DOCUMENTED,
            )
            .unwrap();
            assert_eq!(result.miss_count, 6);
            assert_near(result.error_rate, 30.0, 1e-12);
            // the projection does not depend on the miss rule
            assert_near(result.sd_x, 25.665_526_233_492_78, 1e-9);
        }

        #[test]
        fn test_analysis_is_repeatable() {
            let condition = condition(TaskType::OneDimensional, ResponseType::Serial);
            assert_eq!(analyze(&condition, &DOCUMENTED), analyze(&condition, &DOCUMENTED));
        }

        #[test]
        fn test_1d_layout_has_no_amplitude_mismatch() {
            let result = analyze(
                &condition(TaskType::OneDimensional, ResponseType::Serial),
                &DOCUMENTED,
            )
            .unwrap();
            assert!(result.amplitude_mismatches().is_empty());
        }
    }

    mod degenerate {
        use super::*;

        #[test]
        fn test_perfect_hits_have_zero_effective_width() {
            let condition = SequenceCondition {
                amplitude: 500.0,
                width: 60.0,
                task_type: TaskType::TwoDimensional,
                response_type: ResponseType::Serial,
            };
            let from = vec![Point::new(0.0, 0.0); 10];
            let to = vec![Point::new(500.0, 0.0); 10];
            let err = ThroughputAnalyzer::new()
                .analyze(&condition, &from, &to, &to, &[300.0; 10])
                .unwrap_err();
            assert_eq!(
                err,
                AnalysisError::Statistics(StatsError::ZeroVariance {
                    statistic: "effective width",
                })
            );
        }

        #[test]
        fn test_single_trial_is_insufficient() {
            let err = analyze(
                &condition(TaskType::OneDimensional, ResponseType::Serial),
                &DOCUMENTED[..1],
            )
            .unwrap_err();
            assert_eq!(
                err,
                AnalysisError::Statistics(StatsError::InsufficientSample {
                    statistic: "standard deviation",
                    required: 2,
                    actual: 1,
                })
            );
        }

        #[test]
        fn test_small_sequences_report_shape_errors_separately() {
            let condition = condition(TaskType::OneDimensional, ResponseType::Serial);

            let two = analyze(&condition, &DOCUMENTED[..2]).unwrap();
            assert!(two.throughput.is_finite());
            assert!(matches!(
                two.skewness,
                Err(StatsError::InsufficientSample { required: 3, .. })
            ));
            assert!(two.kurtosis.is_err());
            assert!(two.is_normal.is_err());

            let three = analyze(&condition, &DOCUMENTED[..3]).unwrap();
            assert!(three.skewness.is_ok());
            assert!(matches!(
                three.kurtosis,
                Err(StatsError::InsufficientSample { required: 4, .. })
            ));
        }

        #[test]
        fn test_non_positive_movement_time() {
            let c = columns(&DOCUMENTED[..4]);
            let err = ThroughputAnalyzer::new()
                .analyze(
                    &condition(TaskType::OneDimensional, ResponseType::Serial),
                    &c.from,
                    &c.to,
                    &c.select,
                    &[0.0; 4],
                )
                .unwrap_err();
            assert!(err.is_non_positive_movement_time());
        }
    }

    mod preconditions {
        use super::*;

        #[test]
        fn test_rejects_empty_sequence() {
            let err = ThroughputAnalyzer::new()
                .analyze(
                    &condition(TaskType::OneDimensional, ResponseType::Serial),
                    &[],
                    &[],
                    &[],
                    &[],
                )
                .unwrap_err();
            assert_eq!(err, AnalysisError::NoTrials);
        }

        #[test]
        fn test_rejects_mismatched_lengths() {
            let c = columns(&DOCUMENTED);
            let err = ThroughputAnalyzer::new()
                .analyze(
                    &condition(TaskType::OneDimensional, ResponseType::Serial),
                    &c.from,
                    &c.to,
                    &c.select[..19],
                    &c.mt,
                )
                .unwrap_err();
            assert_eq!(
                err,
                AnalysisError::LengthMismatch {
                    field: "select",
                    expected: 20,
                    actual: 19,
                }
            );
        }

        #[test]
        fn test_rejects_coincident_trial_endpoints() {
            let mut rows = DOCUMENTED;
            rows[3][2] = rows[3][0];
            rows[3][3] = rows[3][1];
            let err = analyze(
                &condition(TaskType::OneDimensional, ResponseType::Serial),
                &rows,
            )
            .unwrap_err();
            assert!(err.is_coincident_endpoints());
        }

        #[test]
        fn test_rejects_invalid_condition() {
            let mut bad = condition(TaskType::OneDimensional, ResponseType::Serial);
            bad.width = 0.0;
            assert!(analyze(&bad, &DOCUMENTED).unwrap_err().is_invalid_width());
            bad.width = 130.2;
            bad.amplitude = -1.0;
            assert!(analyze(&bad, &DOCUMENTED).unwrap_err().is_invalid_amplitude());
        }
    }

    mod layout {
        use super::*;

        #[test]
        fn test_even_circle_alternates_between_diameter_and_neighbour() {
            let a = 400.0;
            let neighbour = expected_amplitude(TaskType::TwoDimensional, a, 4, 1);
            // with four targets the neighbour of the start lies a quarter turn away
            assert_near(neighbour, a / 2.0_f64.sqrt(), 1e-9);
            assert_eq!(expected_amplitude(TaskType::TwoDimensional, a, 4, 2), a);
        }

        #[test]
        fn test_odd_circle_uses_one_chord() {
            let a = 400.0;
            let chord = expected_amplitude(TaskType::TwoDimensional, a, 3, 0);
            // three targets form an equilateral triangle inscribed in the circle
            assert_near(chord, a / 2.0 * 3.0_f64.sqrt(), 1e-9);
            assert_eq!(chord, expected_amplitude(TaskType::TwoDimensional, a, 3, 2));
        }

        #[test]
        fn test_mismatched_layout_is_reported() {
            let condition = SequenceCondition {
                amplitude: 400.0,
                width: 40.0,
                task_type: TaskType::OneDimensional,
                response_type: ResponseType::Discrete,
            };
            let from = [Point::new(0.0, 0.0); 3];
            let to = [
                Point::new(400.0, 0.0),
                Point::new(401.0, 0.0),
                Point::new(390.0, 0.0),
            ];
            let select = [
                Point::new(405.0, 0.0),
                Point::new(395.0, 0.0),
                Point::new(392.0, 0.0),
            ];
            let result = ThroughputAnalyzer::new()
                .analyze(&condition, &from, &to, &select, &[300.0; 3])
                .unwrap();
            assert_eq!(
                result.amplitude_mismatches(),
                [AmplitudeMismatch {
                    index: 2,
                    expected: 400.0,
                    actual: 390.0,
                }]
            );
        }
    }

    #[test]
    fn test_condition_names_round_trip() {
        for task in [TaskType::OneDimensional, TaskType::TwoDimensional] {
            assert_eq!(task.to_string().parse::<TaskType>(), Ok(task));
            assert_eq!(
                task.to_string().to_lowercase().parse::<TaskType>(),
                Ok(task)
            );
        }
        for response in [ResponseType::Serial, ResponseType::Discrete] {
            assert_eq!(
                response.to_string().to_uppercase().parse::<ResponseType>(),
                Ok(response)
            );
        }
        assert!("3D".parse::<TaskType>().is_err());
    }
}
