//! Perpendicular unit vectors along directed 2D polylines.
//!
//! A [`DirectedPath`] wraps a polyline together with the rotational sense that
//! counts as "left". At any arc-length distance it derives a local frame from
//! a short forward sample and returns the unit normal towards either side,
//! which is the building block for lane edges, parallel boundaries and other
//! lateral offsets of a centerline.

pub mod error;
pub mod geometry;
pub mod math;

pub use error::{LateralError, Result};
pub use geometry::{DirectedPath, Side, DEFAULT_DELTA};
pub use math::{Point2, RotationSense, Vector2};
