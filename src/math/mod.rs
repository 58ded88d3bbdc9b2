pub mod frame_2d;

pub use frame_2d::{rotate_90, unit_vector, RotationSense};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2x2 matrix type.
pub type Matrix2 = nalgebra::Matrix2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Lower bound accepted for the norm of a normalized vector.
pub const UNIT_NORM_MIN: f64 = 0.99;

/// Upper bound accepted for the norm of a normalized vector.
pub const UNIT_NORM_MAX: f64 = 1.01;
