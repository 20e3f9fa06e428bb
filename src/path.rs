//! Output path model and node emission.
//!
//! The emitted path mirrors UFO/Glyphs node semantics: on-curve nodes
//! tagged `Line` or `Curve`, each `Curve` preceded by exactly two
//! `OffCurve` control nodes of the same segment. The path is always
//! open (a brush stroke has two ends).

use kurbo::{CubicBez, Point};

use crate::snap::round_point;

/// Node tag, matching UFO point types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// On-curve, straight connection from the previous node.
    Line,
    /// On-curve, cubic connection consuming the two preceding off-curves.
    Curve,
    /// Off-curve control point.
    OffCurve,
}

/// One node of the output path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathNode {
    pub pos: Point,
    pub typ: NodeType,
    /// Smooth connection flag on on-curve nodes.
    pub smooth: bool,
}

impl PathNode {
    fn new(pos: Point, typ: NodeType, smooth: bool) -> Self {
        Self { pos, typ, smooth }
    }
}

/// A finished brush stroke as an open path with stroke attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushPath {
    pub nodes: Vec<PathNode>,
    /// Stroke width in font units.
    pub stroke_width: f64,
    /// Cap style at the stroke start. 0 = flat/square.
    pub line_cap_start: i32,
    /// Cap style at the stroke end. 0 = flat/square.
    pub line_cap_end: i32,
}

impl BrushPath {
    /// On-curve nodes only (the anchors the path passes through).
    pub fn anchors(&self) -> impl Iterator<Item = &PathNode> {
        self.nodes
            .iter()
            .filter(|n| matches!(n.typ, NodeType::Line | NodeType::Curve))
    }
}

/// Assemble fitted segments into a [`BrushPath`].
///
/// When `segments` is empty (all input points coincided, say) the path
/// falls back to straight `Line` nodes over `fallback_points`, so any
/// stroke of 2 or more samples still produces output. Anchors are
/// re-snapped to the integer grid here; control points are left alone.
pub fn emit(segments: &[CubicBez], fallback_points: &[Point], stroke_width: f64) -> BrushPath {
    let mut nodes = Vec::new();

    if segments.is_empty() {
        for &p in fallback_points {
            nodes.push(PathNode::new(p, NodeType::Line, false));
        }
    } else {
        for (i, seg) in segments.iter().enumerate() {
            if i == 0 {
                nodes.push(PathNode::new(round_point(seg.p0), NodeType::Line, true));
            }
            nodes.push(PathNode::new(seg.p1, NodeType::OffCurve, false));
            nodes.push(PathNode::new(seg.p2, NodeType::OffCurve, false));
            nodes.push(PathNode::new(round_point(seg.p3), NodeType::Curve, true));
        }
    }

    BrushPath {
        nodes,
        stroke_width,
        line_cap_start: 0,
        line_cap_end: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn fallback_emits_plain_lines() {
        let fallback = [pt(0.0, 0.0), pt(5.0, 5.0)];
        let path = emit(&[], &fallback, 80.0);
        assert_eq!(path.nodes.len(), 2);
        assert!(path.nodes.iter().all(|n| n.typ == NodeType::Line && !n.smooth));
        assert_eq!(path.stroke_width, 80.0);
        assert_eq!(path.line_cap_start, 0);
        assert_eq!(path.line_cap_end, 0);
    }

    #[test]
    fn curve_nodes_follow_two_offcurves() {
        let segs = [
            CubicBez::new(pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0), pt(3.0, 0.0)),
            CubicBez::new(pt(3.0, 0.0), pt(4.0, 0.0), pt(5.0, 1.0), pt(6.0, 2.0)),
        ];
        let path = emit(&segs, &[], 80.0);
        // Line + 2 * (off, off, curve).
        assert_eq!(path.nodes.len(), 7);
        assert_eq!(path.nodes[0].typ, NodeType::Line);
        assert!(path.nodes[0].smooth);
        for chunk in path.nodes[1..].chunks(3) {
            assert_eq!(chunk[0].typ, NodeType::OffCurve);
            assert_eq!(chunk[1].typ, NodeType::OffCurve);
            assert_eq!(chunk[2].typ, NodeType::Curve);
            assert!(chunk[2].smooth);
        }
    }

    #[test]
    fn anchors_resnapped_controls_untouched() {
        let segs = [CubicBez::new(
            pt(0.4, 0.6),
            pt(1.25, 0.75),
            pt(2.25, 0.75),
            pt(3.4, 0.6),
        )];
        let path = emit(&segs, &[], 80.0);
        assert_eq!(path.nodes[0].pos, pt(0.0, 1.0));
        assert_eq!(path.nodes[1].pos, pt(1.25, 0.75));
        assert_eq!(path.nodes[2].pos, pt(2.25, 0.75));
        assert_eq!(path.nodes[3].pos, pt(3.0, 1.0));
    }

    #[test]
    fn anchors_iterator_skips_offcurves() {
        let segs = [CubicBez::new(
            pt(0.0, 0.0),
            pt(1.0, 0.0),
            pt(2.0, 0.0),
            pt(3.0, 0.0),
        )];
        let path = emit(&segs, &[], 80.0);
        assert_eq!(path.anchors().count(), 2);
    }
}
