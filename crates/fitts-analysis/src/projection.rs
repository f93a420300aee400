//! Projection of a selection onto the task axis.
//!
//! With `a = |from - to|`, `b = |select - to|` and `c = |from - select|`, the
//! law of cosines gives the signed distance of `select` beyond the centre of
//! the destination target, measured along the task axis:
//!
//! ```text
//! Δx = (c² - b² - a²) / 2a
//! ```
//!
//! Positive values overshoot the target centre; negative values fall short.

use serde::{Deserialize, Serialize};

use crate::{AnalysisError, Point, geometry::TaskAxis};

/// Where one selection landed relative to its task axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialProjection {
    /// Nominal movement distance `|from - to|`.
    pub amplitude: f64,
    /// Signed overshoot along the task axis.
    pub delta_x: f64,
}

impl TrialProjection {
    /// Projects `select` onto the `from` -> `to` axis.
    ///
    /// # Errors
    ///
    /// Fails when `from == to` or when any coordinate is non-finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use fitts_analysis::{Point, projection::TrialProjection};
    ///
    /// let from = Point::new(0.0, 0.0);
    /// let to = Point::new(100.0, 0.0);
    ///
    /// let overshoot = TrialProjection::new(from, to, Point::new(110.0, 5.0)).unwrap();
    /// assert!((overshoot.delta_x - 10.0).abs() < 1e-9);
    /// assert!((overshoot.effective_amplitude() - 110.0).abs() < 1e-9);
    /// ```
    pub fn new(from: Point, to: Point, select: Point) -> Result<Self, AnalysisError> {
        let axis = TaskAxis::new(from, to)?;
        Ok(Self::on_axis(&axis, select.require_finite()?))
    }

    pub(crate) fn on_axis(axis: &TaskAxis, select: Point) -> Self {
        let a = axis.amplitude();
        let b = select.distance(axis.to());
        let c = axis.from().distance(select);
        Self {
            amplitude: a,
            delta_x: (c * c - b * b - a * a) / (2.0 * a),
        }
    }

    /// Distance actually covered along the task axis, `a + Δx`.
    #[must_use]
    pub fn effective_amplitude(&self) -> f64 {
        self.amplitude + self.delta_x
    }
}

/// Signed overshoot of `select` along the `from` -> `to` axis.
///
/// # Errors
///
/// Fails when `from == to` or when any coordinate is non-finite.
pub fn delta_x(from: Point, to: Point, select: Point) -> Result<f64, AnalysisError> {
    TrialProjection::new(from, to, select).map(|p| p.delta_x)
}

/// `|from - to| + delta_x(from, to, select)`.
///
/// # Errors
///
/// Fails when `from == to` or when any coordinate is non-finite.
pub fn effective_amplitude(from: Point, to: Point, select: Point) -> Result<f64, AnalysisError> {
    TrialProjection::new(from, to, select).map(|p| p.effective_amplitude())
}
