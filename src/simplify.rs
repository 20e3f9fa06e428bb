//! Ramer–Douglas–Peucker polyline simplification.
//!
//! Iterative formulation: ranges to examine go on an explicit work
//! list instead of the call stack, so pathologically long traces
//! cannot overflow recursion depth. Output is identical to the
//! recursive version (same tie-break, same endpoint inclusion).

use kurbo::Point;

use crate::geom::point_segment_distance;

/// Simplify a polyline to within `epsilon` perpendicular deviation.
///
/// The first and last input points are always kept. Inputs shorter
/// than 3 points are returned unchanged. Among interior points tied
/// for the maximum deviation, the first one (left-to-right) wins.
pub fn simplify(points: &[Point], epsilon: f64) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;

    let mut ranges = vec![(0usize, points.len() - 1)];
    while let Some((start, end)) = ranges.pop() {
        if end - start < 2 {
            continue;
        }
        let a = points[start];
        let b = points[end];

        // Strict > keeps the first point achieving the maximum.
        let mut dmax = 0.0;
        let mut index = start;
        for i in start + 1..end {
            let d = point_segment_distance(points[i], a, b);
            if d > dmax {
                dmax = d;
                index = i;
            }
        }

        if dmax > epsilon {
            keep[index] = true;
            ranges.push((start, index));
            ranges.push((index, end));
        }
    }

    points
        .iter()
        .zip(&keep)
        .filter(|(_, &k)| k)
        .map(|(&p, _)| p)
        .collect()
}
