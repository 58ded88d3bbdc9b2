//! Samples perpendicular unit vectors and offset points along a small path.
//!
//! Usage:
//! ```text
//! cargo run --example offset_samples
//! RUST_LOG=lateral=trace cargo run --example offset_samples
//! ```

use lateral::{DirectedPath, LateralError, Point2, Side};

/// Lateral distance of the sampled edge points from the centerline.
const HALF_WIDTH: f64 = 3.5;

fn main() -> Result<(), LateralError> {
    // Default: WARN for everything, INFO for lateral.
    // Override with RUST_LOG env var (e.g. RUST_LOG=lateral=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("lateral=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let centerline = [
        Point2::new(0.0, 0.0),
        Point2::new(40.0, 0.0),
        Point2::new(70.0, 30.0),
        Point2::new(70.0, 80.0),
    ];
    let path = DirectedPath::with_left_clockwise(&centerline, false)?;
    tracing::info!(length = path.length(), "sampling centerline");

    let mut d = 0.0;
    while d < path.length() {
        let base = path.point_at_distance(d)?;
        let normal = path.perpendicular_unit_vector(d, Side::Left)?;
        let left = path.offset_point(d, Side::Left, HALF_WIDTH)?;
        let right = path.offset_point(d, Side::Right, HALF_WIDTH)?;
        println!(
            "d={d:6.1}  base=({:7.2}, {:7.2})  n=({:+.3}, {:+.3})  left=({:7.2}, {:7.2})  right=({:7.2}, {:7.2})",
            base.x, base.y, normal.x, normal.y, left.x, left.y, right.x, right.y
        );
        d += 10.0;
    }

    // The forward sample collapses onto the endpoint here.
    match path.perpendicular_unit_vector(path.length(), Side::Left) {
        Ok(n) => println!("end: n=({:+.3}, {:+.3})", n.x, n.y),
        Err(err) => tracing::warn!(%err, "no frame at the end of the path"),
    }

    Ok(())
}
