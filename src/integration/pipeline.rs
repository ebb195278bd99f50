//! VideoPipeline: the per-frame capture → extract → track → render loop.

use log::info;

use crate::integration::blob::BlobExtractor;
use crate::integration::error::PipelineError;
use crate::integration::foreground::ForegroundExtractor;
use crate::integration::frame_source::FrameSource;
use crate::integration::renderer::Renderer;
use crate::tracker::{CentroidTracker, DrawCommand};

/// Why a pipeline run terminated. Both variants are normal completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The frame source was exhausted.
    EndOfStream,
    /// The cancellation key was observed.
    Cancelled,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndOfStream => write!(f, "end of stream"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Outcome of a completed pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of frames fully processed.
    pub frames: u64,
    /// Why the loop exited.
    pub stop: StopReason,
}

/// A tracking pipeline bundling the four vision collaborators with the
/// centroid tracker.
///
/// The loop body is fully serialized: capture, foreground extraction, contour
/// finding, filter/track, render, cancellation poll, once per frame. The
/// tracker's state is owned here and survives across frames; nothing else in
/// the loop is stateful on the pipeline's side.
pub struct VideoPipeline<S, F, B, R> {
    source: S,
    foreground: F,
    blobs: B,
    renderer: R,
    tracker: CentroidTracker,
}

impl<S, F, B, R> VideoPipeline<S, F, B, R>
where
    S: FrameSource,
    F: ForegroundExtractor<Frame = S::Frame>,
    B: BlobExtractor,
    R: Renderer<Frame = S::Frame>,
{
    /// Create a pipeline with a fresh tracker starting at the origin.
    pub fn new(source: S, foreground: F, blobs: B, renderer: R) -> Self {
        Self::with_tracker(source, foreground, blobs, renderer, CentroidTracker::new())
    }

    /// Create a pipeline resuming from an existing tracker.
    pub fn with_tracker(
        source: S,
        foreground: F,
        blobs: B,
        renderer: R,
        tracker: CentroidTracker,
    ) -> Self {
        Self {
            source,
            foreground,
            blobs,
            renderer,
            tracker,
        }
    }

    /// Process a single frame.
    ///
    /// Returns the commands drawn onto that frame, or `None` at end-of-stream.
    /// Does not poll for cancellation; [`run`](Self::run) does.
    pub fn step(&mut self) -> Result<Option<Vec<DrawCommand>>, PipelineError> {
        let Some(mut frame) = self.source.next_frame()? else {
            return Ok(None);
        };
        let mask = self.foreground.apply(&frame)?;
        let contours = self.blobs.extract(&mask)?;
        let commands = self.tracker.update(&contours);
        self.renderer.render(&mut frame, &commands)?;
        Ok(Some(commands))
    }

    /// Drive the loop until end-of-stream or cancellation.
    pub fn run(&mut self) -> Result<RunSummary, PipelineError> {
        let mut frames = 0u64;
        loop {
            if self.step()?.is_none() {
                info!("stream ended after {frames} frames");
                return Ok(RunSummary {
                    frames,
                    stop: StopReason::EndOfStream,
                });
            }
            frames += 1;
            if self.renderer.poll_cancel()? {
                info!("cancelled after {frames} frames");
                return Ok(RunSummary {
                    frames,
                    stop: StopReason::Cancelled,
                });
            }
        }
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &CentroidTracker {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut CentroidTracker {
        &mut self.tracker
    }

    /// Get a reference to the underlying renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get a mutable reference to the underlying renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
