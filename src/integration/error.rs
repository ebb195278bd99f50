use thiserror::Error;

/// Per-stage pipeline failures.
///
/// End-of-stream and user cancellation are normal terminations, not errors;
/// they surface as [`StopReason`](crate::integration::StopReason) values.
/// Degenerate contour geometry is recovered inside the tracker and never
/// reaches this type.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The video asset could not be opened. Fatal; there is no retry.
    #[error("video source unavailable: {reason}")]
    SourceUnavailable { reason: String },

    /// A frame could not be captured from an already-open source.
    #[error("frame capture failed: {0}")]
    Capture(String),

    /// Foreground extraction failed on a frame.
    #[error("foreground extraction failed: {0}")]
    Foreground(String),

    /// Contour extraction failed on a mask.
    #[error("contour extraction failed: {0}")]
    Blob(String),

    /// The renderer could not apply or display the overlay.
    #[error("rendering failed: {0}")]
    Render(String),

    /// A mask buffer does not match its stated dimensions.
    #[error("mask buffer of {len} bytes does not match {rows}x{cols} dimensions")]
    InvalidMask {
        rows: usize,
        cols: usize,
        len: usize,
    },
}
