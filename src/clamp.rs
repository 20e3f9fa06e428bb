//! End-tangent clamping.
//!
//! Without this, the outgoing tangent at the first anchor (and the
//! incoming one at the last) can swing past the direction toward the
//! adjacent simplified anchor, leaving a visible overshoot loop at the
//! stroke tip. The fix rescales the offending control-point offset so
//! neither axis component exceeds the anchor-to-anchor vector. Only
//! shrinks, never grows; anchors themselves are never moved.

use kurbo::{CubicBez, Point, Vec2};

/// Axis components smaller than this count as zero.
const ZERO_EPS: f64 = 1e-9;

/// Clamp the first segment's outgoing and the last segment's incoming
/// control offsets against the neighboring simplified anchors.
///
/// `anchors` is the simplified (trimmed, snapped) polyline the spline
/// was fitted through. No-op when there are no segments or fewer than
/// 2 anchors.
pub fn clamp_end_tangents(segments: &mut [CubicBez], anchors: &[Point]) {
    if segments.is_empty() || anchors.len() < 2 {
        return;
    }

    let first = &mut segments[0];
    let vec = first.p1 - first.p0;
    let max_vec = anchors[1] - first.p0;
    if let Some(scale) = shrink_factor(vec, max_vec) {
        first.p1 = first.p0 + vec * scale;
    }

    let last_idx = segments.len() - 1;
    let last = &mut segments[last_idx];
    let vec = last.p2 - last.p3;
    let max_vec = anchors[anchors.len() - 2] - last.p3;
    if let Some(scale) = shrink_factor(vec, max_vec) {
        last.p2 = last.p3 + vec * scale;
    }
}

/// Per-axis shrink factor keeping `vec` within `max_vec` componentwise.
///
/// Returns None when either vector is zero (identity case).
fn shrink_factor(vec: Vec2, max_vec: Vec2) -> Option<f64> {
    let vec_zero = vec.x.abs() <= ZERO_EPS && vec.y.abs() <= ZERO_EPS;
    let max_zero = max_vec.x.abs() <= ZERO_EPS && max_vec.y.abs() <= ZERO_EPS;
    if vec_zero || max_zero {
        return None;
    }

    let mut scale = 1.0f64;
    if vec.x.abs() > ZERO_EPS && max_vec.x.abs() < vec.x.abs() {
        scale = scale.min((max_vec.x / vec.x).abs());
    }
    if vec.y.abs() > ZERO_EPS && max_vec.y.abs() < vec.y.abs() {
        scale = scale.min((max_vec.y / vec.y).abs());
    }
    Some(scale)
}
