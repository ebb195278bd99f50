//! Trait for overlay rendering and cancellation polling.

use crate::integration::error::PipelineError;
use crate::tracker::DrawCommand;

/// Applies draw commands to a frame, displays it, and polls for cancellation.
pub trait Renderer {
    /// Frame type this renderer draws on.
    type Frame;

    /// Apply the commands to the frame in emission order and display the
    /// result. Later commands may visually overlay earlier ones.
    fn render(
        &mut self,
        frame: &mut Self::Frame,
        commands: &[DrawCommand],
    ) -> Result<(), PipelineError>;

    /// Poll for the cancellation key with a short timeout.
    ///
    /// Called once per frame; returning `true` stops the pipeline with
    /// [`StopReason::Cancelled`](crate::integration::StopReason::Cancelled).
    /// This is a per-frame hook, not asynchronous cancellation.
    fn poll_cancel(&mut self) -> Result<bool, PipelineError>;
}
