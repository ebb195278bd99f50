//! Trait for video frame suppliers.

use crate::integration::error::PipelineError;

/// Supplies an ordered sequence of raster frames from a video asset.
///
/// The frame type is opaque to the tracking core; it is only handed onward to
/// the foreground extractor and the renderer.
///
/// # Example
///
/// ```ignore
/// use motiontrack_rs::{FrameSource, PipelineError};
///
/// struct ReplaySource {
///     frames: Vec<MyFrame>,
/// }
///
/// impl FrameSource for ReplaySource {
///     type Frame = MyFrame;
///
///     fn next_frame(&mut self) -> Result<Option<MyFrame>, PipelineError> {
///         Ok(self.frames.pop())
///     }
/// }
/// ```
pub trait FrameSource {
    /// Frame type produced by this source.
    type Frame;

    /// Capture the next frame, blocking until one is available.
    ///
    /// `Ok(None)` signals end-of-stream and terminates the pipeline normally.
    /// An exhausted source must keep returning `Ok(None)` rather than failing.
    fn next_frame(&mut self) -> Result<Option<Self::Frame>, PipelineError>;
}
