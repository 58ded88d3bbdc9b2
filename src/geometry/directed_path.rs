use geo::{Coord, EuclideanLength, LineInterpolatePoint, LineString};
use tracing::{debug, trace};

use crate::error::{GeometryError, PathError, Result};
use crate::math::{rotate_90, unit_vector, Point2, RotationSense, Vector2, TOLERANCE};

use super::Side;

/// Default forward look-ahead used to approximate the local tangent.
pub const DEFAULT_DELTA: f64 = 10.0;

/// A 2D polyline with a declared sense for turning left.
///
/// The path is parametrized by arc length from its first point. Point
/// interpolation is delegated to [`geo::LineInterpolatePoint`], which clamps
/// distances before the start or past the end onto the endpoints.
///
/// A `DirectedPath` is never mutated after construction.
#[derive(Debug, Clone)]
pub struct DirectedPath {
    line: LineString<f64>,
    length: f64,
    left_turn: RotationSense,
}

impl DirectedPath {
    /// Creates a path on which turning left is a clockwise rotation.
    ///
    /// # Errors
    ///
    /// See [`DirectedPath::with_left_turn`].
    pub fn new(points: &[Point2]) -> Result<Self> {
        Self::with_left_turn(points, RotationSense::Clockwise)
    }

    /// Creates a path from the `left_clockwise` flag form of the orientation.
    ///
    /// # Errors
    ///
    /// See [`DirectedPath::with_left_turn`].
    pub fn with_left_clockwise(points: &[Point2], left_clockwise: bool) -> Result<Self> {
        Self::with_left_turn(points, RotationSense::from_clockwise(left_clockwise))
    }

    /// Creates a path whose left side is reached by rotating the local tangent
    /// in the `left_turn` sense.
    ///
    /// Consecutive duplicate points are collapsed.
    ///
    /// # Errors
    ///
    /// Returns `PathError::InvalidPath` if fewer than 2 points are given, if
    /// any coordinate is not finite, or if the path has zero length.
    pub fn with_left_turn(points: &[Point2], left_turn: RotationSense) -> Result<Self> {
        let coords: Vec<Coord<f64>> = points.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
        Self::from_line_string(LineString::new(coords), left_turn)
    }

    /// Wraps an existing line string.
    ///
    /// # Errors
    ///
    /// Same as [`DirectedPath::with_left_turn`].
    pub fn from_line_string(line: LineString<f64>, left_turn: RotationSense) -> Result<Self> {
        let n = line.0.len();
        if n < 2 {
            return Err(PathError::InvalidPath(format!(
                "at least 2 points are required, got {n}"
            ))
            .into());
        }
        if let Some(c) = line.0.iter().find(|c| !c.x.is_finite() || !c.y.is_finite()) {
            return Err(
                PathError::InvalidPath(format!("non-finite point ({}, {})", c.x, c.y)).into(),
            );
        }

        let mut coords = line.0;
        coords.dedup();
        let line = LineString::new(coords);

        let length = line.euclidean_length();
        if length < TOLERANCE {
            return Err(PathError::InvalidPath("path has zero length".to_owned()).into());
        }

        debug!(
            points = line.0.len(),
            length,
            ?left_turn,
            "constructed directed path"
        );

        Ok(Self {
            line,
            length,
            left_turn,
        })
    }

    /// Returns the underlying line string.
    #[must_use]
    pub fn line_string(&self) -> &LineString<f64> {
        &self.line
    }

    /// Returns the total arc length of the path.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the rotational sense that points to the left of the path.
    #[must_use]
    pub fn left_turn(&self) -> RotationSense {
        self.left_turn
    }

    /// Returns the point at arc-length `distance` from the start of the path.
    ///
    /// Distances outside `[0, length]` are clamped onto the endpoints.
    ///
    /// # Errors
    ///
    /// Returns `PathError::Interpolation` if no point can be interpolated,
    /// e.g. when `distance` is NaN.
    pub fn point_at_distance(&self, distance: f64) -> Result<Point2> {
        let point = self
            .line
            .line_interpolate_point(distance / self.length)
            .ok_or(PathError::Interpolation { distance })?;
        Ok(Point2::new(point.x(), point.y()))
    }

    /// Returns the unit vector perpendicular to the path at `distance`,
    /// pointing towards `side`, using [`DEFAULT_DELTA`] as look-ahead.
    ///
    /// # Errors
    ///
    /// See [`DirectedPath::perpendicular_unit_vector_with_delta`].
    pub fn perpendicular_unit_vector(&self, distance: f64, side: Side) -> Result<Vector2> {
        self.perpendicular_unit_vector_with_delta(distance, side, DEFAULT_DELTA)
    }

    /// Returns the unit vector perpendicular to the path at `distance`,
    /// pointing towards `side`.
    ///
    /// The local tangent is approximated by the chord from the point at
    /// `distance` to the point at `distance + delta`. `delta` should be small
    /// relative to the path's curvature.
    ///
    /// # Errors
    ///
    /// - `GeometryError::ParameterOutOfRange` if `delta` is negative or not finite
    /// - `PathError::Interpolation` if either sample point cannot be interpolated
    /// - `GeometryError::DegenerateVector` if both samples coincide, which
    ///   happens at the end of the path or when `delta` is zero
    pub fn perpendicular_unit_vector_with_delta(
        &self,
        distance: f64,
        side: Side,
        delta: f64,
    ) -> Result<Vector2> {
        if !delta.is_finite() || delta < 0.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "delta",
                value: delta,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }

        let p0 = self.point_at_distance(distance)?;
        let p1 = self.point_at_distance(distance + delta)?;

        let sense = side.rotation_sense(self.left_turn);
        let p2 = rotate_90(&p0, &p1, sense);
        trace!(distance, delta, ?side, ?sense, ?p0, ?p1, "perpendicular sample");

        unit_vector(&p0, &p2)
    }

    /// Returns the point at `distance` along the path shifted `offset` units
    /// towards `side`.
    ///
    /// # Errors
    ///
    /// Same as [`DirectedPath::perpendicular_unit_vector`].
    pub fn offset_point(&self, distance: f64, side: Side, offset: f64) -> Result<Point2> {
        let normal = self.perpendicular_unit_vector(distance, side)?;
        let base = self.point_at_distance(distance)?;
        Ok(base + normal * offset)
    }
}
