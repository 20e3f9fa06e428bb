//! Anchor grid snapping.
//!
//! Anchors land on the integer font-unit grid twice: once on the
//! stabilized polyline before spline fitting, and again on each
//! emitted anchor after fitting. The second pass catches float drift
//! introduced by the B-spline basis arithmetic; both passes use the
//! same rounding rule so an anchor can never move between them.
//! Control points are never snapped.

use kurbo::Point;

/// Round a point to the nearest integer coordinates.
///
/// Uses round-half-away-from-zero (`f64::round`): 0.5 → 1, -0.5 → -1.
pub fn round_point(p: Point) -> Point {
    Point::new(p.x.round(), p.y.round())
}

/// Round every point of a polyline to the integer grid.
pub fn round_anchors(points: &[Point]) -> Vec<Point> {
    points.iter().map(|&p| round_point(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_rounds_away_from_zero() {
        assert_eq!(round_point(Point::new(0.5, -0.5)), Point::new(1.0, -1.0));
        assert_eq!(round_point(Point::new(2.5, -2.5)), Point::new(3.0, -3.0));
    }

    #[test]
    fn nearest_integer() {
        assert_eq!(round_point(Point::new(1.4, 1.6)), Point::new(1.0, 2.0));
        assert_eq!(round_point(Point::new(-1.4, -1.6)), Point::new(-1.0, -2.0));
    }

    #[test]
    fn snapping_is_idempotent() {
        let pts = vec![Point::new(3.7, -0.2), Point::new(0.5, 9.5)];
        let once = round_anchors(&pts);
        assert_eq!(round_anchors(&once), once);
    }
}
