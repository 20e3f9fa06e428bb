//! brush2bez: freehand brush traces → font-ready bezier paths.
//!
//! Turns an ordered sequence of pointer samples into one clean open
//! path of cubic curve segments, ready for insertion into a glyph.
//!
//! # Example
//!
//! ```
//! use brush2bez::{process, BrushConfig};
//! use brush2bez::kurbo::Point;
//!
//! let trace = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(50.0, 10.0),
//!     Point::new(100.0, 0.0),
//! ];
//! let path = process(&trace, &BrushConfig::default());
//! assert!(path.is_some());
//! ```

#![forbid(unsafe_code)]

mod clamp;
mod config;
mod fit;
mod geom;
mod path;
mod sampler;
mod simplify;
mod snap;
mod stabilize;

pub mod error;

#[cfg(feature = "ufo")]
pub mod ufo;

// Re-export kurbo so downstream users get the same version used by
// the types in BrushPath and preview().
pub use kurbo;

pub use config::BrushConfig;
pub use error::BrushError;
pub use path::{BrushPath, NodeType, PathNode};
pub use sampler::{DeviceKind, InputSource, TraceBuffer};
pub use simplify::simplify;

use kurbo::{BezPath, Point};

/// Full pipeline: finished trace → open brush path.
///
/// Stages: RDP simplification, endpoint trim, anchor grid snap,
/// clamped B-spline fit, end-tangent clamp, node emission. Traces
/// shorter than 2 distinct samples produce `None`; everything else
/// produces a path (straight lines if curve fitting degenerates).
pub fn process(points: &[Point], config: &BrushConfig) -> Option<BrushPath> {
    // Consecutive duplicates carry no direction information and the
    // live sampler never records them; collapse any that arrive here.
    let points = dedup_consecutive(points);
    if points.len() < 2 {
        return None;
    }

    let mut anchors = simplify(&points, config.epsilon());
    if anchors.len() < 2 {
        anchors = points.clone();
    }

    let trimmed = stabilize::trim_ends(&anchors, config.trim_length());
    let snapped = snap::round_anchors(&trimmed);

    let mut segments = fit::bspline_to_bezier(&snapped);
    clamp::clamp_end_tangents(&mut segments, &snapped);

    Some(path::emit(&segments, &snapped, config.stroke_width))
}

/// Lightweight curve for preview rendering during an active trace.
///
/// Simplifies and fits only — no trim, snap, or clamp — so redraw
/// ticks stay cheap. The host strokes the returned path at reduced
/// opacity with the configured width and flat caps.
pub fn preview(points: &[Point], config: &BrushConfig) -> Option<BezPath> {
    let anchors = simplify(points, config.epsilon());
    if anchors.len() < 2 {
        return None;
    }

    let segments = fit::bspline_to_bezier(&anchors);
    let first = segments.first()?;

    let mut bez = BezPath::new();
    bez.move_to(first.p0);
    for seg in &segments {
        bez.curve_to(seg.p1, seg.p2, seg.p3);
    }
    Some(bez)
}

fn dedup_consecutive(points: &[Point]) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points {
        if out.last() != Some(&p) {
            out.push(p);
        }
    }
    out
}
