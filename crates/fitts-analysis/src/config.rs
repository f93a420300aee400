//! Analyzer configuration.
//!
//! Every value has a default matching the historical analysis settings, so an
//! empty JSON object (`{}`) is a complete configuration.
//!
//! ```
//! use fitts_analysis::config::{AnalysisConfig, TransformMode};
//!
//! let config: AnalysisConfig = serde_json::from_str(
//!     r#"{ "accuracy": { "thresholds": { "task_axis_crossing": 8.0 } } }"#,
//! )
//! .unwrap();
//! assert_eq!(config.accuracy.thresholds.task_axis_crossing, 8.0);
//! assert_eq!(config.accuracy.thresholds.movement_direction_change, 10.0);
//! assert_eq!(config.accuracy.transform, TransformMode::Legacy);
//! assert_eq!(config.normality_alpha, 0.05);
//! ```

use serde::{Deserialize, Serialize};

/// Distances (in path units) a path must travel before a crossing or a
/// direction change is counted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccuracyThresholds {
    /// Lateral distance from the task axis that counts as being on one side
    /// of it (TAC).
    pub task_axis_crossing: f64,
    /// Lateral travel required between consecutive direction reversals (MDC).
    pub movement_direction_change: f64,
    /// Travel along the task axis required between consecutive
    /// forward/backward reversals (ODC).
    pub orthogonal_direction_change: f64,
}

impl Default for AccuracyThresholds {
    fn default() -> Self {
        Self {
            task_axis_crossing: 5.0,
            movement_direction_change: 10.0,
            orthogonal_direction_change: 10.0,
        }
    }
}

/// How a raw path is mapped into the canonical trial frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformMode {
    /// Reproduces the frame used by historical result sets: translated
    /// coordinates are truncated toward zero and the bearing is the
    /// single-argument arctangent of `dy / dx`. Only trials moving toward
    /// negative x land on the positive axis; others are mirrored.
    #[default]
    Legacy,
    /// Exact translation and a four-quadrant bearing, so `to` lands on
    /// `(amplitude, 0)` whatever the movement direction.
    FourQuadrant,
}

/// Settings for per-trial accuracy analysis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccuracyConfig {
    pub thresholds: AccuracyThresholds,
    pub transform: TransformMode,
}

/// Settings for a full sequence analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub accuracy: AccuracyConfig,
    /// Significance level of the normality test on projected selections.
    pub normality_alpha: f64,
    /// Error rate (%) above which a sequence should be repeated. `None`
    /// disables the check.
    pub error_threshold: Option<f64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            accuracy: AccuracyConfig::default(),
            normality_alpha: fitts_stats::normality::DEFAULT_ALPHA,
            error_threshold: None,
        }
    }
}
