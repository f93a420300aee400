use serde::{Deserialize, Serialize};

use crate::AnalysisError;

/// A pointer coordinate in screen units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    ///
    /// ```
    /// # use fitts_analysis::Point;
    /// assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
    /// ```
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub(crate) fn require_finite(self) -> Result<Self, AnalysisError> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(AnalysisError::NonFiniteCoordinate {
                x: self.x,
                y: self.y,
            })
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// The task axis of one trial: the segment from the centre of the origin
/// target to the centre of the destination target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskAxis {
    from: Point,
    to: Point,
    amplitude: f64,
}

impl TaskAxis {
    /// Validates the endpoints of a trial.
    ///
    /// # Errors
    ///
    /// Fails when either endpoint is non-finite or the two coincide, since
    /// the axis direction is then undefined.
    pub fn new(from: Point, to: Point) -> Result<Self, AnalysisError> {
        let from = from.require_finite()?;
        let to = to.require_finite()?;
        let amplitude = from.distance(to);
        if amplitude == 0.0 {
            return Err(AnalysisError::CoincidentEndpoints { x: from.x, y: from.y });
        }
        Ok(Self {
            from,
            to,
            amplitude,
        })
    }

    #[must_use]
    pub fn from(&self) -> Point {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> Point {
        self.to
    }

    /// Distance between the two target centres.
    #[must_use]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
}
