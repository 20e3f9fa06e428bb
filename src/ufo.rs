//! Convert finished brush paths to UFO glyph format.

use norad::{Contour, ContourPoint, Glyph, PointType};

use crate::error::BrushError;
use crate::path::{BrushPath, NodeType};

/// Lib key prefix for stroke attributes.
const LIB_PREFIX: &str = "com.brush2bez.";

/// Convert a `BrushPath` to a `norad::Glyph` with one open contour.
///
/// Stroke attributes travel in the glyph lib under `com.brush2bez.*`
/// keys; a host that ignores them still gets valid geometry.
pub fn to_glyph(name: &str, path: &BrushPath, codepoints: &[char]) -> Result<Glyph, BrushError> {
    let mut glyph = Glyph::new(name);
    for &codepoint in codepoints {
        glyph.codepoints.insert(codepoint);
    }
    glyph.contours.push(to_contour(path)?);

    glyph.lib.insert(
        format!("{LIB_PREFIX}strokeWidth"),
        plist::Value::Real(path.stroke_width),
    );
    glyph.lib.insert(
        format!("{LIB_PREFIX}lineCapStart"),
        plist::Value::Integer(path.line_cap_start.into()),
    );
    glyph.lib.insert(
        format!("{LIB_PREFIX}lineCapEnd"),
        plist::Value::Integer(path.line_cap_end.into()),
    );

    Ok(glyph)
}

/// Convert a `BrushPath` to an open `norad::Contour`.
///
/// The first node becomes a `Move` point, which is what marks a UFO
/// contour as open.
pub fn to_contour(path: &BrushPath) -> Result<Contour, BrushError> {
    if path.nodes.is_empty() {
        return Err(BrushError::EmptyPath);
    }

    let points = path
        .nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let typ = if i == 0 {
                PointType::Move
            } else {
                match node.typ {
                    NodeType::Line => PointType::Line,
                    NodeType::Curve => PointType::Curve,
                    NodeType::OffCurve => PointType::OffCurve,
                }
            };
            ContourPoint::new(node.pos.x, node.pos.y, typ, node.smooth, None, None, None)
        })
        .collect();

    Ok(Contour::new(points, None, None))
}
