use tracing::debug;

use crate::error::{GeometryError, Result};

use super::{Matrix2, Point2, Vector2, UNIT_NORM_MAX, UNIT_NORM_MIN};

/// Rotational sense of a quarter turn in a right-handed (Y-up) plane.
///
/// Clockwise is the negative-angle rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationSense {
    Clockwise,
    CounterClockwise,
}

impl RotationSense {
    /// Returns the opposite rotational sense.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }

    /// Maps the boolean `clockwise` flag onto a rotational sense.
    #[must_use]
    pub fn from_clockwise(clockwise: bool) -> Self {
        if clockwise {
            Self::Clockwise
        } else {
            Self::CounterClockwise
        }
    }

    /// Returns the 90° rotation matrix for this sense, applied as `R · v`.
    ///
    /// - clockwise: `[[0, 1], [-1, 0]]`
    /// - counter-clockwise: `[[0, -1], [1, 0]]`
    #[must_use]
    pub fn quarter_turn(self) -> Matrix2 {
        match self {
            Self::Clockwise => Matrix2::new(0.0, 1.0, -1.0, 0.0),
            Self::CounterClockwise => Matrix2::new(0.0, -1.0, 1.0, 0.0),
        }
    }
}

/// Returns the unit vector pointing from `a` towards `b`.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateVector` if the normalized vector's length
/// falls outside `[0.99, 1.01]`. This is what happens when `a` and `b` coincide
/// (the norm is NaN) or are separated by floating-point noise only.
pub fn unit_vector(a: &Point2, b: &Point2) -> Result<Vector2> {
    let v = b - a;
    let unit = v / v.norm();
    let norm = unit.norm();
    if !(UNIT_NORM_MIN..=UNIT_NORM_MAX).contains(&norm) {
        debug!(
            ax = a.x,
            ay = a.y,
            bx = b.x,
            by = b.y,
            norm,
            "rejected degenerate unit vector"
        );
        return Err(GeometryError::DegenerateVector { norm }.into());
    }
    Ok(unit)
}

/// Rotates `end` by 90° around `start` in the given sense.
///
/// The returned point lies at the same distance from `start` as `end` does.
#[must_use]
pub fn rotate_90(start: &Point2, end: &Point2, sense: RotationSense) -> Point2 {
    start + sense.quarter_turn() * (end - start)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::LateralError;

    const TOL: f64 = 1e-12;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    // ── unit_vector tests ──

    #[test]
    fn unit_vector_3_4_5() {
        let u = unit_vector(&p(1.0, 1.0), &p(4.0, 5.0)).unwrap();
        assert_relative_eq!(u.x, 0.6, epsilon = TOL);
        assert_relative_eq!(u.y, 0.8, epsilon = TOL);
    }

    #[test]
    fn unit_vector_keeps_direction() {
        let pairs = [
            (p(0.0, 0.0), p(1e-3, 0.0)),
            (p(-7.5, 2.0), p(120.0, -33.0)),
            (p(1e6, 1e6), p(1e6 + 1.0, 1e6 - 2.0)),
        ];
        for (a, b) in pairs {
            let u = unit_vector(&a, &b).unwrap();
            let norm = u.norm();
            assert!((norm - 1.0).abs() < 0.01, "norm={norm}");
            assert!(u.dot(&(b - a)) > 0.0, "u={u:?} points away from b - a");
        }
    }

    #[test]
    fn unit_vector_coincident_points() {
        let err = unit_vector(&p(5.0, 5.0), &p(5.0, 5.0)).unwrap_err();
        assert!(
            matches!(
                err,
                LateralError::Geometry(GeometryError::DegenerateVector { .. })
            ),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn unit_vector_non_finite_input() {
        let err = unit_vector(&p(0.0, 0.0), &p(f64::INFINITY, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            LateralError::Geometry(GeometryError::DegenerateVector { .. })
        ));
    }

    // ── rotate_90 tests ──

    #[test]
    fn rotate_clockwise_from_x_axis() {
        let r = rotate_90(&p(0.0, 0.0), &p(10.0, 0.0), RotationSense::Clockwise);
        assert_relative_eq!(r.x, 0.0, epsilon = TOL);
        assert_relative_eq!(r.y, -10.0, epsilon = TOL);
    }

    #[test]
    fn rotate_counter_clockwise_from_x_axis() {
        let r = rotate_90(
            &p(0.0, 0.0),
            &p(10.0, 0.0),
            RotationSense::CounterClockwise,
        );
        assert_relative_eq!(r.x, 0.0, epsilon = TOL);
        assert_relative_eq!(r.y, 10.0, epsilon = TOL);
    }

    #[test]
    fn rotate_is_anchored_at_start() {
        // (2,3)→(2,5) points up; clockwise turns it to point right.
        let r = rotate_90(&p(2.0, 3.0), &p(2.0, 5.0), RotationSense::Clockwise);
        assert_relative_eq!(r.x, 4.0, epsilon = TOL);
        assert_relative_eq!(r.y, 3.0, epsilon = TOL);
    }

    #[test]
    fn rotate_back_and_forth_restores_end() {
        let start = p(-3.0, 7.25);
        let end = p(4.5, -1.0);
        let there = rotate_90(&start, &end, RotationSense::Clockwise);
        let back = rotate_90(&start, &there, RotationSense::CounterClockwise);
        assert_relative_eq!(back.x, end.x, epsilon = 1e-9);
        assert_relative_eq!(back.y, end.y, epsilon = 1e-9);
    }

    #[test]
    fn rotate_preserves_length() {
        let start = p(1.0, 2.0);
        for end in [p(4.0, 6.0), p(-10.0, 0.5), p(1.0, 2.0 + 1e-6)] {
            for sense in [RotationSense::Clockwise, RotationSense::CounterClockwise] {
                let r = rotate_90(&start, &end, sense);
                let before = (end - start).norm();
                let after = (r - start).norm();
                assert!((before - after).abs() < 1e-9, "{before} vs {after}");
                assert!((end - start).dot(&(r - start)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn rotate_degenerate_displacement_stays_at_start() {
        let r = rotate_90(&p(1.0, 1.0), &p(1.0, 1.0), RotationSense::Clockwise);
        assert_eq!(r, p(1.0, 1.0));
    }

    // ── RotationSense tests ──

    #[test]
    fn reversed_is_involution() {
        for sense in [RotationSense::Clockwise, RotationSense::CounterClockwise] {
            assert_ne!(sense.reversed(), sense);
            assert_eq!(sense.reversed().reversed(), sense);
        }
    }

    #[test]
    fn quarter_turns_are_inverse() {
        let product = RotationSense::Clockwise.quarter_turn()
            * RotationSense::CounterClockwise.quarter_turn();
        assert_eq!(product, Matrix2::identity());
    }

    #[test]
    fn from_clockwise_flag() {
        assert_eq!(RotationSense::from_clockwise(true), RotationSense::Clockwise);
        assert_eq!(
            RotationSense::from_clockwise(false),
            RotationSense::CounterClockwise
        );
    }
}
