//! Moving-object detection and single-centroid tracking.
//!
//! Frames from a video asset pass through adaptive background subtraction and
//! contour extraction, both external collaborators behind the [`integration`]
//! traits. The [`tracker`] module holds the part with design content: it
//! filters contours by area, derives each surviving blob's bounding box and
//! first-moment centroid, and connects consecutive centroids with a
//! single-slot track line.
//!
//! Data flow, once per frame:
//!
//! ```text
//! FrameSource -> ForegroundExtractor -> BlobExtractor -> CentroidTracker -> Renderer
//! ```
//!
//! The pipeline is strictly single-threaded; the only state surviving across
//! frames (besides the background model inside its extractor) is the
//! tracker's one previous centroid.
//!
//! # Example
//!
//! ```
//! use motiontrack_rs::{CentroidTracker, ContourBuilder, DrawCommand};
//!
//! let blob = ContourBuilder::new().rect_outline(4, 4, 12, 12).build();
//!
//! let mut tracker = CentroidTracker::new();
//! let commands = tracker.update(&[blob]);
//!
//! // One bounding box, one centroid marker, one track line.
//! assert_eq!(commands.len(), 3);
//! assert!(matches!(commands[0], DrawCommand::Rect(_)));
//! ```
//!
//! With the `opencv-backend` feature enabled, the `integration` module also
//! exports ready-made collaborators backed by OpenCV (file capture, MOG2
//! subtraction, contour retrieval, highgui display).

pub mod integration;
pub mod tracker;

pub use integration::{
    BlobExtractor, ContourBuilder, ForegroundExtractor, FrameSource, Mask, PipelineError,
    Renderer, RunSummary, StopReason, VideoPipeline,
};
pub use tracker::{
    CentroidTracker, Contour, Detection, DrawCommand, MIN_CONTOUR_AREA, Moments, Rect, TrackState,
};
