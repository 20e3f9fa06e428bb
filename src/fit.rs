//! Clamped uniform cubic B-spline → cubic Bezier segments.
//!
//! The simplified anchors act as B-spline control points. Duplicating
//! the first and last anchor twice (clamping) makes the resulting
//! curve interpolate both endpoints exactly, so the fitted path starts
//! and ends where the trace did.

use kurbo::{CubicBez, Point};

/// Tolerance for dropping zero-length segments (per axis).
const DEGENERATE_EPS: f64 = 1e-6;

/// Fit cubic Bezier segments through a polyline of anchors.
///
/// Fewer than 2 points yields no segments. Exactly 2 points yields one
/// straight segment with control points at 1/3 and 2/3. With 3 or more
/// points each window of 4 clamped knots produces one segment via the
/// uniform B-spline-to-Bezier basis. Segments whose start and end
/// anchors coincide (within 1e-6 on both axes) are dropped.
pub fn bspline_to_bezier(points: &[Point]) -> Vec<CubicBez> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    if n == 2 {
        let (p0, p1) = (points[0], points[1]);
        let c1 = p0 + (p1 - p0) / 3.0;
        let c2 = p0 + (p1 - p0) * (2.0 / 3.0);
        let seg = CubicBez::new(p0, c1, c2, p1);
        return if is_degenerate(&seg) { Vec::new() } else { vec![seg] };
    }

    let mut padded = Vec::with_capacity(n + 4);
    padded.push(points[0]);
    padded.push(points[0]);
    padded.extend_from_slice(points);
    padded.push(points[n - 1]);
    padded.push(points[n - 1]);

    padded
        .windows(4)
        .map(|w| {
            let (k0, k1, k2, k3) = (w[0], w[1], w[2], w[3]);
            let q0 = ((k0.to_vec2() + k1.to_vec2() * 4.0 + k2.to_vec2()) / 6.0).to_point();
            let q1 = ((k1.to_vec2() * 4.0 + k2.to_vec2() * 2.0) / 6.0).to_point();
            let q2 = ((k1.to_vec2() * 2.0 + k2.to_vec2() * 4.0) / 6.0).to_point();
            let q3 = ((k1.to_vec2() + k2.to_vec2() * 4.0 + k3.to_vec2()) / 6.0).to_point();
            CubicBez::new(q0, q1, q2, q3)
        })
        .filter(|seg| !is_degenerate(seg))
        .collect()
}

/// A segment whose anchors coincide within tolerance on both axes.
fn is_degenerate(seg: &CubicBez) -> bool {
    (seg.p0.x - seg.p3.x).abs() <= DEGENERATE_EPS && (seg.p0.y - seg.p3.y).abs() <= DEGENERATE_EPS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn too_few_points_yields_nothing() {
        assert!(bspline_to_bezier(&[]).is_empty());
        assert!(bspline_to_bezier(&[pt(1.0, 1.0)]).is_empty());
    }

    #[test]
    fn two_points_make_a_straight_segment() {
        let segs = bspline_to_bezier(&[pt(0.0, 0.0), pt(30.0, 0.0)]);
        assert_eq!(segs.len(), 1);
        let s = segs[0];
        assert_eq!(s.p0, pt(0.0, 0.0));
        assert_eq!(s.p1, pt(10.0, 0.0));
        assert_eq!(s.p2, pt(20.0, 0.0));
        assert_eq!(s.p3, pt(30.0, 0.0));
    }

    #[test]
    fn endpoints_are_interpolated() {
        let pts = vec![pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0), pt(20.0, 10.0)];
        let segs = bspline_to_bezier(&pts);
        assert!(!segs.is_empty());
        let first = segs.first().unwrap();
        let last = segs.last().unwrap();
        assert!((first.p0.x - 0.0).abs() < 1e-9 && (first.p0.y - 0.0).abs() < 1e-9);
        assert!((last.p3.x - 20.0).abs() < 1e-9 && (last.p3.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn segments_share_anchors() {
        // n anchors pad to n+4 knots and n+1 windows.
        let pts = vec![pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0)];
        let segs = bspline_to_bezier(&pts);
        assert_eq!(segs.len(), 4);
        for pair in segs.windows(2) {
            assert!((pair[0].p3.x - pair[1].p0.x).abs() < 1e-9);
            assert!((pair[0].p3.y - pair[1].p0.y).abs() < 1e-9);
        }
    }

    #[test]
    fn coincident_pair_yields_nothing() {
        assert!(bspline_to_bezier(&[pt(5.0, 5.0), pt(5.0, 5.0)]).is_empty());
    }

    #[test]
    fn coincident_anchors_drop_segments() {
        // All points identical: every window degenerates.
        let pts = vec![pt(5.0, 5.0); 4];
        assert!(bspline_to_bezier(&pts).is_empty());
    }
}
