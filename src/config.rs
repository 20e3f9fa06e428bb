/// Default RDP tolerance before smoothing is applied.
pub const DEFAULT_BASE_EPSILON: f64 = 2.0;

/// Default stroke width in font units.
pub const DEFAULT_STROKE_WIDTH: f64 = 80.0;

/// All brush parameters in one struct.
///
/// Owned by the caller and passed in explicitly when a trace ends —
/// there is no shared tool-state singleton. A settings panel keeps its
/// own copy and hands it to [`crate::sampler::TraceBuffer::finish`].
#[derive(Debug, Clone)]
pub struct BrushConfig {
    /// Stroke width in font units. Also drives the endpoint trim
    /// length (5% of the width).
    pub stroke_width: f64,
    /// Discrete smoothing level, mapped exponentially to the RDP
    /// epsilon. 0 = finest.
    pub smoothing: u32,
    /// Base RDP tolerance at smoothing level 0.
    pub base_epsilon: f64,
}

impl BrushConfig {
    /// Simplification tolerance: `base_epsilon * 1.25^smoothing`.
    ///
    /// Each smoothing level coarsens the trace by a constant factor.
    pub fn epsilon(&self) -> f64 {
        self.base_epsilon * 1.25f64.powi(self.smoothing as i32)
    }

    /// Endpoint trim length: a small fraction of the stroke width.
    pub fn trim_length(&self) -> f64 {
        self.stroke_width * 0.05
    }
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            smoothing: 8,
            base_epsilon: DEFAULT_BASE_EPSILON,
        }
    }
}
