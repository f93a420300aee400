use chrono::{DateTime, Utc};
use fitts_analysis::{
    config::AnalysisConfig,
    sequence::{MeanAccuracyMeasures, SequenceSummary, TrialSummary},
    throughput::{AmplitudeMismatch, SequenceCondition, ThroughputResult},
};
use serde::Serialize;

/// Output of the `sequence` command.
#[derive(Debug, Clone, Serialize)]
pub struct SequenceReport {
    /// Timestamp when the report was created (ISO 8601 format)
    pub generated_at: DateTime<Utc>,
    /// Configuration the analyzers were built from
    pub config: AnalysisConfig,
    pub sequences: Vec<SequenceEntry>,
    /// Sequences that could not be analyzed
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<FailedSequence>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SequenceEntry {
    pub code: String,
    pub condition: SequenceCondition,
    pub repeat_count: u32,
    pub trial_count: usize,
    pub accuracy: MeanAccuracyMeasures,
    pub throughput: ThroughputSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positioning_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_time: Option<f64>,
    /// Present only when an error threshold is configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exceeds_error_threshold: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amplitude_mismatches: Vec<AmplitudeMismatch>,
    pub trials: Vec<TrialSummary>,
}

impl SequenceEntry {
    pub fn new(
        code: String,
        condition: SequenceCondition,
        summary: &SequenceSummary,
        error_threshold: Option<f64>,
    ) -> Self {
        Self {
            code,
            condition,
            repeat_count: summary.repeat_count,
            trial_count: summary.trial_count(),
            accuracy: summary.accuracy,
            throughput: ThroughputSummary::from(&summary.throughput),
            positioning_time: summary.positioning_time,
            selection_time: summary.selection_time,
            exceeds_error_threshold: error_threshold
                .map(|percent| summary.exceeds_error_threshold(percent)),
            amplitude_mismatches: summary.throughput.amplitude_mismatches(),
            trials: summary.trials.clone(),
        }
    }
}

/// Sequence-level throughput measures.
///
/// Statistics that could not be computed for the sample are `null`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ThroughputSummary {
    pub nominal_id: f64,
    pub mean_delta_x: f64,
    pub sd_x: f64,
    pub effective_amplitude: f64,
    pub effective_width: f64,
    pub effective_id: f64,
    pub movement_time: f64,
    pub miss_count: usize,
    pub error_rate: f64,
    pub throughput: f64,
    pub skewness: Option<f64>,
    pub kurtosis: Option<f64>,
    pub is_normal: Option<bool>,
}

impl From<&ThroughputResult> for ThroughputSummary {
    fn from(result: &ThroughputResult) -> Self {
        Self {
            nominal_id: result.nominal_id(),
            mean_delta_x: result.mean_delta_x,
            sd_x: result.sd_x,
            effective_amplitude: result.effective_amplitude,
            effective_width: result.effective_width,
            effective_id: result.effective_id,
            movement_time: result.movement_time,
            miss_count: result.miss_count,
            error_rate: result.error_rate,
            throughput: result.throughput,
            skewness: result.skewness.ok(),
            kurtosis: result.kurtosis.ok(),
            is_normal: result.is_normal.ok(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FailedSequence {
    pub code: String,
    pub error: String,
}
