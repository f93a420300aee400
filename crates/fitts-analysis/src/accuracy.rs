//! Path accuracy measures for a single trial.
//!
//! Seven measures describe how a pointer travelled from the origin target to
//! the destination target (MacKenzie, Kauppinen & Silfverberg, 2001):
//!
//! | Measure | Meaning |
//! |---------|---------|
//! | TRE | target re-entries: entries into the target after the first |
//! | TAC | task axis crossings, with hysteresis around the axis |
//! | MDC | movement direction changes perpendicular to the task axis |
//! | ODC | orthogonal direction changes (forward/backward along the axis) |
//! | MV  | movement variability: sample SD of the lateral offsets |
//! | ME  | movement error: mean absolute lateral offset |
//! | MO  | movement offset: mean signed lateral offset |
//!
//! All measures except TRE are computed on the [canonical path](crate::transform).
//! TRE uses the raw samples and the target circle around `to`.

use serde::{Deserialize, Serialize};

use crate::{
    AnalysisError, Point,
    config::{AccuracyConfig, AccuracyThresholds},
    error::require_width,
    geometry::TaskAxis,
    pattern::Pattern,
    transform::{CanonicalPath, PathTransformer},
};

/// The seven accuracy measures of one trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracyMeasures {
    pub tre: usize,
    pub tac: usize,
    pub mdc: usize,
    pub odc: usize,
    pub mv: f64,
    pub me: f64,
    pub mo: f64,
}

/// Computes [`AccuracyMeasures`] for trials.
///
/// The analyzer holds only configuration; every call to
/// [`analyze`](Self::analyze) is independent.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AccuracyAnalyzer {
    config: AccuracyConfig,
}

impl AccuracyAnalyzer {
    #[must_use]
    pub fn new(config: AccuracyConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn with_thresholds(thresholds: AccuracyThresholds) -> Self {
        Self::new(AccuracyConfig {
            thresholds,
            ..AccuracyConfig::default()
        })
    }

    #[must_use]
    pub fn config(&self) -> &AccuracyConfig {
        &self.config
    }

    #[must_use]
    pub fn transformer(&self) -> PathTransformer {
        PathTransformer::new(self.config.transform)
    }

    /// Analyzes one trial.
    ///
    /// `width` is the diameter of the destination target and `path` the
    /// sampled pointer positions, in order.
    ///
    /// # Errors
    ///
    /// Fails when `from == to`, when `width` is not a positive finite value,
    /// when a coordinate is non-finite, or when `path` has fewer than two
    /// points.
    ///
    /// # Examples
    ///
    /// ```
    /// use fitts_analysis::{Point, accuracy::AccuracyAnalyzer};
    ///
    /// let from = Point::new(100.0, 0.0);
    /// let to = Point::new(0.0, 0.0);
    /// let path = [from, Point::new(50.0, 0.0), to];
    ///
    /// let measures = AccuracyAnalyzer::default().analyze(from, to, 20.0, &path).unwrap();
    /// assert_eq!((measures.tre, measures.tac, measures.mdc, measures.odc), (0, 0, 0, 0));
    /// assert!(measures.me < 1e-9);
    /// ```
    pub fn analyze(
        &self,
        from: Point,
        to: Point,
        width: f64,
        path: &[Point],
    ) -> Result<AccuracyMeasures, AnalysisError> {
        self.analyze_detailed(from, to, width, path)
            .map(|analysis| analysis.measures)
    }

    /// Like [`analyze`](Self::analyze), but also returns the canonical path
    /// the measures were computed on.
    pub fn analyze_detailed(
        &self,
        from: Point,
        to: Point,
        width: f64,
        path: &[Point],
    ) -> Result<TrialAccuracy, AnalysisError> {
        let axis = TaskAxis::new(from, to)?;
        let width = require_width(width)?;
        if path.len() < 2 {
            return Err(AnalysisError::PathTooShort {
                required: 2,
                actual: path.len(),
            });
        }
        let canonical = self.transformer().transform_axis(&axis, path)?;
        let thresholds = &self.config.thresholds;

        let ys = canonical.ys().collect::<Vec<_>>();
        let measures = AccuracyMeasures {
            tre: target_reentries(path, to, width),
            tac: task_axis_crossings(&ys, thresholds.task_axis_crossing),
            mdc: direction_changes(&ys, thresholds.movement_direction_change),
            odc: direction_changes(
                &canonical.xs().collect::<Vec<_>>(),
                thresholds.orthogonal_direction_change,
            ),
            mv: fitts_stats::descriptive::sample_std_dev(&ys)?,
            me: fitts_stats::descriptive::mean(&ys.iter().map(|y| y.abs()).collect::<Vec<_>>())?,
            mo: fitts_stats::descriptive::mean(&ys)?,
        };

        Ok(TrialAccuracy {
            path: canonical,
            measures,
        })
    }
}

/// Accuracy measures together with the canonical path they describe.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialAccuracy {
    pub path: CanonicalPath,
    pub measures: AccuracyMeasures,
}

fn target_reentries(path: &[Point], to: Point, width: f64) -> usize {
    let radius = width / 2.0;
    let inside = path
        .iter()
        .map(|p| p.distance(to) < radius)
        .collect::<Pattern>()
        .smoothed();
    // the first entry is the acquisition itself
    inside.rising_edges().saturating_sub(1)
}

fn task_axis_crossings(ys: &[f64], threshold: f64) -> usize {
    let mut crossings = 0;
    let mut below = false;
    let mut above = false;
    for (i, &y) in ys.iter().enumerate() {
        if y > threshold {
            below = true;
        }
        if y < -threshold {
            above = true;
        }
        if i == 0 {
            continue;
        }
        if below && y < -threshold {
            crossings += 1;
            below = false;
            above = true;
        } else if above && y > threshold {
            crossings += 1;
            below = true;
            above = false;
        }
    }
    crossings
}

/// Counts reversals in `values` that are separated by more than `threshold`.
fn direction_changes(values: &[f64], threshold: f64) -> usize {
    let increasing = values
        .windows(2)
        .map(|w| w[1] - w[0] >= 0.0)
        .collect::<Pattern>()
        .smoothed();
    increasing
        .run_boundaries()
        .filter(|&(first, second)| (values[first] - values[second]).abs() > threshold)
        .count()
}
