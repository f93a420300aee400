//! Sequence-level summaries.
//!
//! [`SequenceAggregator`] runs the accuracy analysis on every trial of a
//! [`Sequence`] and the throughput analysis on the sequence as a whole, and
//! reports both in one [`SequenceSummary`].

use fitts_stats::normality::{Lilliefors, NormalityTest};
use serde::{Deserialize, Serialize};

use crate::{
    AnalysisError, Point,
    accuracy::{AccuracyAnalyzer, AccuracyMeasures},
    config::AnalysisConfig,
    throughput::{SequenceCondition, ThroughputAnalyzer, ThroughputResult},
};

/// Largest accepted difference, in milliseconds, between a trial's movement
/// time and the sum of its timing phases.
pub const TIMING_TOLERANCE_MS: f64 = 1.0;

/// One target-acquisition attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    /// Centre of the origin target.
    pub from: Point,
    /// Centre of the destination target.
    pub to: Point,
    /// Diameter of the destination target.
    pub width: f64,
    /// Sampled pointer positions, in order.
    pub path: Vec<Point>,
    /// Pointer position at selection.
    pub select: Point,
    /// Milliseconds from the start of the trial to the selection.
    pub movement_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<TrialTiming>,
}

impl Trial {
    /// A trial whose selection is the last point of its path.
    ///
    /// # Errors
    ///
    /// Fails when `path` has fewer than two points.
    pub fn new(
        from: Point,
        to: Point,
        width: f64,
        path: Vec<Point>,
        movement_time: f64,
    ) -> Result<Self, AnalysisError> {
        if path.len() < 2 {
            return Err(AnalysisError::PathTooShort {
                required: 2,
                actual: path.len(),
            });
        }
        let select = path[path.len() - 1];
        Ok(Self {
            from,
            to,
            width,
            path,
            select,
            movement_time,
            timing: None,
        })
    }

    /// Checks that `select` ends the path and that the timing phases, if
    /// any, add up to `movement_time`.
    fn check_consistency(&self, index: usize) -> Result<(), AnalysisError> {
        let Some(&last) = self.path.last() else {
            return Err(AnalysisError::PathTooShort {
                required: 2,
                actual: 0,
            });
        };
        if last != self.select {
            return Err(AnalysisError::SelectionOffPath {
                index,
                x: self.select.x,
                y: self.select.y,
            });
        }
        if let Some(timing) = self.timing
            && (timing.total() - self.movement_time).abs() > TIMING_TOLERANCE_MS
        {
            return Err(AnalysisError::TimingMismatch {
                index,
                movement_time: self.movement_time,
                phases: timing.total(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn with_timing(self, timing: TrialTiming) -> Self {
        Self {
            timing: Some(timing),
            ..self
        }
    }
}

/// Split of a movement time into its two phases, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialTiming {
    /// Time until the pointer comes to rest over the target.
    pub positioning: f64,
    /// Time from coming to rest until the selection.
    pub selection: f64,
}

impl TrialTiming {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.positioning + self.selection
    }
}

/// Trials recorded under one condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    pub condition: SequenceCondition,
    pub trials: Vec<Trial>,
    /// How many times the caller has re-run this condition.
    #[serde(default)]
    pub repeat_count: u32,
}

/// Per-trial accuracy measures averaged over a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanAccuracyMeasures {
    pub tre: f64,
    pub tac: f64,
    pub mdc: f64,
    pub odc: f64,
    pub mv: f64,
    pub me: f64,
    pub mo: f64,
}

impl MeanAccuracyMeasures {
    /// Arithmetic means of `measures`, or `None` when it is empty.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn of(measures: &[AccuracyMeasures]) -> Option<Self> {
        if measures.is_empty() {
            return None;
        }
        let n = measures.len() as f64;
        let avg = |f: fn(&AccuracyMeasures) -> f64| measures.iter().map(f).sum::<f64>() / n;
        Some(Self {
            tre: avg(|m| m.tre as f64),
            tac: avg(|m| m.tac as f64),
            mdc: avg(|m| m.mdc as f64),
            odc: avg(|m| m.odc as f64),
            mv: avg(|m| m.mv),
            me: avg(|m| m.me),
            mo: avg(|m| m.mo),
        })
    }
}

/// What was measured for one trial of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrialSummary {
    pub index: usize,
    pub delta_x: f64,
    /// `|from - to| + delta_x`, without the serial adjustment.
    pub effective_amplitude: f64,
    pub miss: bool,
    pub movement_time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<TrialTiming>,
    pub accuracy: AccuracyMeasures,
}

/// Everything reported for one sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceSummary {
    pub repeat_count: u32,
    pub accuracy: MeanAccuracyMeasures,
    pub throughput: ThroughputResult,
    /// Mean positioning time, when every trial records one.
    pub positioning_time: Option<f64>,
    /// Mean selection time, when every trial records one.
    pub selection_time: Option<f64>,
    pub trials: Vec<TrialSummary>,
}

impl SequenceSummary {
    #[must_use]
    pub fn trial_count(&self) -> usize {
        self.trials.len()
    }

    /// Whether the error rate is strictly above `percent`.
    ///
    /// A threshold of 100 or more never triggers.
    #[must_use]
    pub fn exceeds_error_threshold(&self, percent: f64) -> bool {
        self.throughput.exceeds_error_threshold(percent)
    }
}

/// Combines accuracy and throughput analysis of whole sequences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceAggregator<N = Lilliefors> {
    accuracy: AccuracyAnalyzer,
    throughput: ThroughputAnalyzer<N>,
}

impl SequenceAggregator<Lilliefors> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_analyzers(AccuracyAnalyzer::default(), ThroughputAnalyzer::new())
    }

    /// Builds the analyzers described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidAlpha`] if `config.normality_alpha` is
    /// not strictly between 0 and 1.
    pub fn from_config(config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        let alpha = config.normality_alpha;
        let normality =
            Lilliefors::try_with_alpha(alpha).ok_or(AnalysisError::InvalidAlpha { alpha })?;
        Ok(Self::with_analyzers(
            AccuracyAnalyzer::new(config.accuracy),
            ThroughputAnalyzer::with_normality_test(normality),
        ))
    }
}

impl Default for SequenceAggregator<Lilliefors> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> SequenceAggregator<N>
where
    N: NormalityTest,
{
    #[must_use]
    pub fn with_analyzers(accuracy: AccuracyAnalyzer, throughput: ThroughputAnalyzer<N>) -> Self {
        Self {
            accuracy,
            throughput,
        }
    }

    /// Analyzes every trial of `sequence` and the sequence as a whole.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by either analysis, including
    /// [`AnalysisError::NoTrials`] for an empty sequence. A trial whose
    /// selection is not the last point of its path fails with
    /// [`AnalysisError::SelectionOffPath`], and one whose timing phases do not
    /// add up to its movement time with [`AnalysisError::TimingMismatch`].
    pub fn summarize(&self, sequence: &Sequence) -> Result<SequenceSummary, AnalysisError> {
        let trials = &sequence.trials;
        if trials.is_empty() {
            return Err(AnalysisError::NoTrials);
        }
        for (index, trial) in trials.iter().enumerate() {
            trial.check_consistency(index)?;
        }

        let accuracy = trials
            .iter()
            .map(|t| self.accuracy.analyze(t.from, t.to, t.width, &t.path))
            .collect::<Result<Vec<_>, _>>()?;

        let from = trials.iter().map(|t| t.from).collect::<Vec<_>>();
        let to = trials.iter().map(|t| t.to).collect::<Vec<_>>();
        let select = trials.iter().map(|t| t.select).collect::<Vec<_>>();
        let movement_times = trials.iter().map(|t| t.movement_time).collect::<Vec<_>>();
        let throughput =
            self.throughput
                .analyze(&sequence.condition, &from, &to, &select, &movement_times)?;

        let summaries = trials
            .iter()
            .zip(&accuracy)
            .enumerate()
            .map(|(index, (trial, &accuracy))| TrialSummary {
                index,
                delta_x: throughput.delta_x[index],
                effective_amplitude: throughput.amplitudes[index] + throughput.delta_x[index],
                miss: throughput.misses[index],
                movement_time: trial.movement_time,
                timing: trial.timing,
                accuracy,
            })
            .collect();

        let timings = trials.iter().map(|t| t.timing).collect::<Option<Vec<_>>>();
        let mean_of = |f: fn(&TrialTiming) -> f64| {
            timings.as_deref().map(|timings| {
                #[expect(clippy::cast_precision_loss)]
                let n = timings.len() as f64;
                timings.iter().map(f).sum::<f64>() / n
            })
        };

        Ok(SequenceSummary {
            repeat_count: sequence.repeat_count,
            // non-empty, checked above
            accuracy: MeanAccuracyMeasures::of(&accuracy).ok_or(AnalysisError::NoTrials)?,
            positioning_time: mean_of(|t| t.positioning),
            selection_time: mean_of(|t| t.selection),
            throughput,
            trials: summaries,
        })
    }
}
