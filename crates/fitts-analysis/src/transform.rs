//! Canonical trial frame.
//!
//! Accuracy measures are defined relative to the task axis, so every path is
//! first re-expressed in a frame where `from` is the origin and the task axis
//! lies along x:
//!
//! ```text
//!        y
//!        |            to
//!   from o------------x----> x
//!        |      (amplitude, 0)
//! ```
//!
//! With [`TransformMode::Legacy`] the frame matches historical result sets
//! bit for bit, including their quirks:
//!
//! - translated coordinates are truncated toward zero before rotating;
//! - the bearing is `atan(dy / dx)`, so only trials with `dx < 0` land on the
//!   positive x axis; trials with `dx > 0` land on `(-amplitude, 0)`.
//!
//! Vertical trials (`dx == 0`) are well defined: the bearing is `±π/2`.

use std::f64::consts::TAU;

use crate::{AnalysisError, Point, config::TransformMode, geometry::TaskAxis};

/// Maps raw trial paths into the canonical frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PathTransformer {
    mode: TransformMode,
}

impl PathTransformer {
    #[must_use]
    pub fn new(mode: TransformMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub fn mode(&self) -> TransformMode {
        self.mode
    }

    /// Transforms `path` into the frame of the `from` -> `to` task axis.
    ///
    /// # Errors
    ///
    /// Fails when `from == to`, when any coordinate is non-finite, or when
    /// the path is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fitts_analysis::{Point, transform::PathTransformer};
    ///
    /// let from = Point::new(300.0, 200.0);
    /// let to = Point::new(100.0, 200.0);
    /// let path = [from, Point::new(200.0, 190.0), to];
    ///
    /// let canonical = PathTransformer::default().transform(from, to, &path).unwrap();
    /// assert_eq!(canonical.amplitude(), 200.0);
    /// let end = canonical.points()[2];
    /// assert!((end.x - 200.0).abs() < 1e-9 && end.y.abs() < 1e-9);
    /// ```
    pub fn transform(
        &self,
        from: Point,
        to: Point,
        path: &[Point],
    ) -> Result<CanonicalPath, AnalysisError> {
        let axis = TaskAxis::new(from, to)?;
        self.transform_axis(&axis, path)
    }

    pub(crate) fn transform_axis(
        &self,
        axis: &TaskAxis,
        path: &[Point],
    ) -> Result<CanonicalPath, AnalysisError> {
        if path.is_empty() {
            return Err(AnalysisError::PathTooShort {
                required: 1,
                actual: 0,
            });
        }
        let frame = Frame::new(axis, self.mode);
        let points = path
            .iter()
            .map(|p| p.require_finite().map(|p| frame.apply(p)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CanonicalPath {
            points,
            amplitude: axis.amplitude(),
            to: frame.apply(axis.to()),
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    origin: Point,
    sin: f64,
    cos: f64,
    mode: TransformMode,
}

impl Frame {
    fn new(axis: &TaskAxis, mode: TransformMode) -> Self {
        let dx = axis.to().x - axis.from().x;
        let dy = axis.to().y - axis.from().y;
        let angle = match mode {
            TransformMode::Legacy => TAU - (dy / dx).atan(),
            TransformMode::FourQuadrant => dy.atan2(dx),
        };
        Self {
            origin: axis.from(),
            sin: angle.sin(),
            cos: angle.cos(),
            mode,
        }
    }

    fn apply(&self, p: Point) -> Point {
        let x = p.x - self.origin.x;
        let y = p.y - self.origin.y;
        match self.mode {
            TransformMode::Legacy => {
                let (x, y) = (x.trunc(), y.trunc());
                Point::new(
                    -(x * self.cos - y * self.sin),
                    x * self.sin + y * self.cos,
                )
            }
            // rotate by -bearing, then mirror y to keep the legacy handedness
            TransformMode::FourQuadrant => Point::new(
                x * self.cos + y * self.sin,
                x * self.sin - y * self.cos,
            ),
        }
    }
}

/// A trial path expressed in the canonical frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalPath {
    points: Vec<Point>,
    amplitude: f64,
    to: Point,
}

impl CanonicalPath {
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distance between `from` and `to` in the raw frame.
    #[must_use]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Where `from` lies in this frame.
    #[must_use]
    pub fn from(&self) -> Point {
        Point::ORIGIN
    }

    /// Where `to` lies in this frame.
    ///
    /// This is `(amplitude, 0)` except in [`TransformMode::Legacy`] for
    /// trials moving toward positive x, which land on `(-amplitude, 0)`.
    #[must_use]
    pub fn to(&self) -> Point {
        self.to
    }

    pub fn xs(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.x)
    }

    pub fn ys(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point_near(actual: Point, expected: Point) {
        assert!(
            actual.distance(expected) < 1e-9,
            "expected {expected:?}, got {actual:?}"
        );
    }

    fn endpoints(mode: TransformMode, from: Point, to: Point) -> (Point, Point) {
        let canonical = PathTransformer::new(mode)
            .transform(from, to, &[from, to])
            .unwrap();
        (canonical.points()[0], canonical.points()[1])
    }

    mod legacy {
        use super::*;

        #[test]
        fn test_leftward_trial_lands_on_positive_axis() {
            let from = Point::new(600.0, 400.0);
            let to = Point::new(300.0, 100.0);
            let (f, t) = endpoints(TransformMode::Legacy, from, to);
            assert_point_near(f, Point::ORIGIN);
            assert_point_near(t, Point::new(from.distance(to), 0.0));
        }

        #[test]
        fn test_rightward_trial_is_mirrored() {
            let from = Point::new(0.0, 0.0);
            let to = Point::new(100.0, 0.0);
            let (f, t) = endpoints(TransformMode::Legacy, from, to);
            assert_point_near(f, Point::ORIGIN);
            assert_point_near(t, Point::new(-100.0, 0.0));

            let canonical = PathTransformer::default()
                .transform(from, to, &[from])
                .unwrap();
            assert_point_near(canonical.to(), Point::new(-100.0, 0.0));
        }

        #[test]
        fn test_vertical_trial_is_defined() {
            let from = Point::new(50.0, 50.0);
            let to = Point::new(50.0, 150.0);
            let (_, t) = endpoints(TransformMode::Legacy, from, to);
            assert_point_near(t, Point::new(-100.0, 0.0));
        }

        #[test]
        fn test_translation_truncates_toward_zero() {
            let from = Point::new(10.5, 0.0);
            let to = Point::new(0.5, 0.0);
            // (9.0 - 10.5) truncates to -1, not -1.5 or -2
            let canonical = PathTransformer::default()
                .transform(from, to, &[Point::new(9.0, 0.0)])
                .unwrap();
            assert_point_near(canonical.points()[0], Point::new(1.0, 0.0));
        }
    }

    mod four_quadrant {
        use super::*;

        #[test]
        fn test_every_direction_lands_on_positive_axis() {
            let from = Point::new(400.0, 300.0);
            for step in 0..16 {
                let angle = f64::from(step) * TAU / 16.0;
                let to = Point::new(from.x + 250.0 * angle.cos(), from.y + 250.0 * angle.sin());
                let (f, t) = endpoints(TransformMode::FourQuadrant, from, to);
                assert_point_near(f, Point::ORIGIN);
                assert_point_near(t, Point::new(250.0, 0.0));
            }
        }

        #[test]
        fn test_agrees_with_legacy_for_leftward_integer_paths() {
            let from = Point::new(856.0, 501.0);
            let to = Point::new(515.0, 159.0);
            let path = [
                Point::new(842.0, 499.0),
                Point::new(700.0, 370.0),
                Point::new(600.0, 200.0),
                Point::new(520.0, 170.0),
            ];
            let legacy = PathTransformer::new(TransformMode::Legacy)
                .transform(from, to, &path)
                .unwrap();
            let exact = PathTransformer::new(TransformMode::FourQuadrant)
                .transform(from, to, &path)
                .unwrap();
            for (l, e) in legacy.points().iter().zip(exact.points()) {
                assert_point_near(*l, *e);
            }
        }
    }

    #[test]
    fn test_distances_from_origin_are_preserved() {
        let from = Point::new(12.25, -40.75);
        let to = Point::new(-300.5, 80.0);
        let path = [Point::new(0.0, 0.0), Point::new(-100.0, 33.0)];
        let canonical = PathTransformer::new(TransformMode::FourQuadrant)
            .transform(from, to, &path)
            .unwrap();
        for (raw, mapped) in path.iter().zip(canonical.points()) {
            let expected = raw.distance(from);
            assert!((mapped.distance(Point::ORIGIN) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rejects_degenerate_input() {
        let p = Point::new(3.0, 4.0);
        let transformer = PathTransformer::default();
        assert_eq!(transformer.mode(), TransformMode::Legacy);
        assert_eq!(
            transformer.transform(p, p, &[p]),
            Err(AnalysisError::CoincidentEndpoints { x: 3.0, y: 4.0 })
        );
        assert_eq!(
            transformer.transform(Point::ORIGIN, p, &[]),
            Err(AnalysisError::PathTooShort {
                required: 1,
                actual: 0,
            })
        );
        assert!(
            transformer
                .transform(Point::ORIGIN, p, &[Point::new(f64::NAN, 0.0)])
                .unwrap_err()
                .is_non_finite_coordinate()
        );
    }
}
