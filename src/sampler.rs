//! Live trace accumulation.
//!
//! A [`TraceBuffer`] collects pointer samples while the user drags.
//! The input device is resolved once when the trace begins and fixes
//! the minimum sample spacing for the whole trace; device-specific
//! conditionals never reach the rest of the pipeline.

use kurbo::Point;

use crate::config::BrushConfig;
use crate::path::BrushPath;

/// Minimum sample spacing for a stylus (finer traces).
const STYLUS_MIN_DISTANCE: f64 = 2.0;

/// Minimum sample spacing for a mouse or other pointer.
const POINTER_MIN_DISTANCE: f64 = 4.0;

/// What kind of device produced the trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Stylus,
    Pointer,
}

/// Capability-tagged input source, resolved once at trace start.
#[derive(Debug, Clone, Copy)]
pub struct InputSource {
    pub kind: DeviceKind,
    /// Pen pressure if the device reports one, in (0, 1).
    pub pressure: Option<f64>,
}

impl InputSource {
    pub fn new(kind: DeviceKind, pressure: Option<f64>) -> Self {
        Self { kind, pressure }
    }

    /// Minimum distance between kept samples for this source.
    ///
    /// A pointer reporting a fractional pressure is treated as a
    /// stylus; some tablets deliver pen input through mouse events.
    pub fn min_distance(&self) -> f64 {
        let stylus = self.kind == DeviceKind::Stylus
            || self
                .pressure
                .is_some_and(|p| p > 0.0 && p < 1.0);
        if stylus {
            STYLUS_MIN_DISTANCE
        } else {
            POINTER_MIN_DISTANCE
        }
    }
}

/// Accumulates samples for one active trace.
///
/// Append-only while the trace is live; consumed exactly once by
/// [`finish`](TraceBuffer::finish). A new trace cannot start until the
/// previous one has been finished or abandoned, so there is never more
/// than one producer.
#[derive(Debug)]
pub struct TraceBuffer {
    points: Vec<Point>,
    min_distance: f64,
}

impl Default for TraceBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceBuffer {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            min_distance: POINTER_MIN_DISTANCE,
        }
    }

    /// Start a new trace at `start`, resolving the sample spacing from
    /// the input source. Discards any leftover samples.
    pub fn begin(&mut self, start: Point, source: InputSource) {
        self.points.clear();
        self.points.push(start);
        self.min_distance = source.min_distance();
    }

    /// Offer a new sample; kept only if it moved at least the minimum
    /// distance from the last kept sample.
    ///
    /// Samples offered before [`begin`](TraceBuffer::begin) are
    /// dropped: a drag event without a preceding press has no device
    /// resolution and no trace to belong to.
    pub fn push(&mut self, p: Point) {
        match self.points.last() {
            Some(&last) if last.distance(p) >= self.min_distance => self.points.push(p),
            _ => {}
        }
    }

    /// Number of samples kept so far.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Copy of the in-progress samples for read-only preview.
    ///
    /// Preview renders from this snapshot; the buffer may keep growing
    /// behind it.
    pub fn snapshot(&self) -> Vec<Point> {
        self.points.clone()
    }

    /// End the trace: run the full pipeline and clear the buffer.
    ///
    /// Returns `None` for traces shorter than 2 samples (pointer
    /// down/up with no movement).
    pub fn finish(&mut self, config: &BrushConfig) -> Option<BrushPath> {
        let points = std::mem::take(&mut self.points);
        crate::process(&points, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn stylus_gets_finer_spacing() {
        let stylus = InputSource::new(DeviceKind::Stylus, None);
        let mouse = InputSource::new(DeviceKind::Pointer, None);
        assert_eq!(stylus.min_distance(), STYLUS_MIN_DISTANCE);
        assert_eq!(mouse.min_distance(), POINTER_MIN_DISTANCE);
    }

    #[test]
    fn fractional_pressure_counts_as_stylus() {
        let tablet = InputSource::new(DeviceKind::Pointer, Some(0.6));
        assert_eq!(tablet.min_distance(), STYLUS_MIN_DISTANCE);
        // Full or zero pressure is what mice report.
        let mouse = InputSource::new(DeviceKind::Pointer, Some(1.0));
        assert_eq!(mouse.min_distance(), POINTER_MIN_DISTANCE);
    }

    #[test]
    fn close_samples_are_dropped() {
        let mut buf = TraceBuffer::new();
        buf.begin(pt(0.0, 0.0), InputSource::new(DeviceKind::Pointer, None));
        buf.push(pt(1.0, 0.0)); // < 4.0 away, dropped
        buf.push(pt(5.0, 0.0)); // kept
        buf.push(pt(6.0, 0.0)); // dropped
        buf.push(pt(10.0, 0.0)); // kept
        assert_eq!(buf.snapshot(), vec![pt(0.0, 0.0), pt(5.0, 0.0), pt(10.0, 0.0)]);
    }

    #[test]
    fn samples_before_begin_are_dropped() {
        let mut buf = TraceBuffer::new();
        buf.push(pt(10.0, 10.0));
        assert!(buf.is_empty());

        // A proper press still starts a trace afterwards.
        buf.begin(pt(0.0, 0.0), InputSource::new(DeviceKind::Pointer, None));
        buf.push(pt(10.0, 10.0));
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn finish_clears_the_buffer() {
        let mut buf = TraceBuffer::new();
        buf.begin(pt(0.0, 0.0), InputSource::new(DeviceKind::Pointer, None));
        buf.push(pt(50.0, 0.0));
        buf.push(pt(100.0, 40.0));
        let path = buf.finish(&BrushConfig::default());
        assert!(path.is_some());
        assert!(buf.is_empty());
    }

    #[test]
    fn single_sample_trace_emits_nothing() {
        let mut buf = TraceBuffer::new();
        buf.begin(pt(3.0, 3.0), InputSource::new(DeviceKind::Stylus, Some(0.5)));
        buf.push(pt(3.5, 3.0)); // under min distance, dropped
        assert!(buf.finish(&BrushConfig::default()).is_none());
        assert!(buf.is_empty());
    }
}
