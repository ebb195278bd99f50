//! Integration module connecting external vision collaborators to the tracker.
//!
//! The four traits here mirror the pipeline stages around the tracking core:
//! frame capture, foreground extraction, blob (contour) extraction, and
//! rendering. `VideoPipeline` sequences them once per frame. All vision
//! primitives stay behind these seams; the core never touches pixels.

mod blob;
mod builder;
mod error;
mod foreground;
mod frame_source;
mod mask;
mod pipeline;
mod renderer;

pub use blob::BlobExtractor;
pub use builder::ContourBuilder;
pub use error::PipelineError;
pub use foreground::ForegroundExtractor;
pub use frame_source::FrameSource;
pub use mask::Mask;
pub use pipeline::{RunSummary, StopReason, VideoPipeline};
pub use renderer::Renderer;

#[cfg(feature = "opencv-backend")]
mod opencv_backend;

#[cfg(feature = "opencv-backend")]
pub use opencv_backend::{HighguiRenderer, MaskContourExtractor, Mog2Foreground, VideoFileSource};
