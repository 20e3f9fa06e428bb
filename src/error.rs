use thiserror::Error;

/// Errors at the output boundary.
///
/// The geometric pipeline itself is total: every degenerate input has a
/// defined output (no path, identity transform, or line fallback), so
/// errors only arise when converting to UFO or reading a trace file.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BrushError {
    #[error("path has no nodes")]
    EmptyPath,

    #[error("invalid trace data: {0}")]
    InvalidTrace(String),

    #[cfg(feature = "ufo")]
    #[error("norad error: {0}")]
    Norad(#[from] norad::error::FontLoadError),

    #[cfg(feature = "ufo")]
    #[error("norad write error: {0}")]
    NoradWrite(#[from] norad::error::FontWriteError),
}
