//! Shared geometry utilities.

use kurbo::{Point, Vec2};

/// Distance from `p` to the segment `a`–`b`.
///
/// The projection parameter is clamped to [0, 1], so this measures
/// distance to the segment itself, not the infinite line through it.
/// A degenerate (zero-length) segment falls back to point distance.
pub fn point_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let d = b - a;
    let len2 = d.x * d.x + d.y * d.y;
    if len2 == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(d) / len2).clamp(0.0, 1.0);
    p.distance(a + d * t)
}

/// Unit vector from `from` toward `to`, or zero if the points coincide.
pub fn unit_direction(from: Point, to: Point) -> Vec2 {
    let d = to - from;
    let len = d.hypot();
    if len > 0.0 {
        d / len
    } else {
        Vec2::ZERO
    }
}
