//! Endpoint stabilization.
//!
//! Raw spline fitting can overshoot near tight curvature at the ends
//! of a trace. Retracting both endpoints slightly along the local
//! direction of travel suppresses this without touching the interior.

use kurbo::Point;

use crate::geom::unit_direction;

/// Advance the first point toward the second, and the last point
/// toward the second-to-last, by `trim_length`. Interior points are
/// unchanged. A zero-length end segment leaves that endpoint in place.
///
/// Requires at least 2 points; shorter inputs are returned as-is.
pub fn trim_ends(points: &[Point], trim_length: f64) -> Vec<Point> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let n = points.len();
    let dir_start = unit_direction(points[0], points[1]);
    let dir_end = unit_direction(points[n - 1], points[n - 2]);

    let mut out = points.to_vec();
    out[0] = points[0] + dir_start * trim_length;
    out[n - 1] = points[n - 1] + dir_end * trim_length;
    out
}
