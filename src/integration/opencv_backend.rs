//! OpenCV backend for capture, foreground extraction, blob finding, and display.
//!
//! This module implements all four collaborator seams on top of OpenCV:
//! `VideoFileSource` (capture), `Mog2Foreground` (adaptive Gaussian-mixture
//! background modeling plus binary thresholding), `MaskContourExtractor`
//! (external contour retrieval), and `HighguiRenderer` (overlay drawing plus
//! the Esc-key cancellation poll).
//!
//! # Example
//!
//! ```ignore
//! use motiontrack_rs::VideoPipeline;
//! use motiontrack_rs::integration::{
//!     HighguiRenderer, MaskContourExtractor, Mog2Foreground, VideoFileSource,
//! };
//!
//! let source = VideoFileSource::open("cars.mp4".as_ref())?;
//! let mut pipeline = VideoPipeline::new(
//!     source,
//!     Mog2Foreground::new()?,
//!     MaskContourExtractor,
//!     HighguiRenderer::new("motiontrack")?,
//! );
//! let summary = pipeline.run()?;
//! ```

use std::path::Path;

use nalgebra::Point2;
use opencv::core::{Mat, Point, Ptr, Scalar, Vector};
use opencv::prelude::*;
use opencv::video::BackgroundSubtractorMOG2;
use opencv::{highgui, imgproc, video, videoio};

use crate::integration::blob::BlobExtractor;
use crate::integration::error::PipelineError;
use crate::integration::foreground::ForegroundExtractor;
use crate::integration::frame_source::FrameSource;
use crate::integration::mask::Mask;
use crate::integration::renderer::Renderer;
use crate::tracker::{Contour, DrawCommand};

/// Mask binarization cut-off applied to the subtractor's likelihood output.
const MASK_THRESHOLD: f64 = 25.0;
/// Value assigned to foreground pixels after thresholding.
const MASK_MAX: f64 = 255.0;
/// Keypress that cancels the run (Esc).
const CANCEL_KEY: i32 = 27;
/// Keypress poll timeout in milliseconds.
const POLL_TIMEOUT_MS: i32 = 1;

const OVERLAY_THICKNESS: i32 = 2;
const MARKER_RADIUS: i32 = 2;

fn box_color() -> Scalar {
    // BGR green
    Scalar::new(0.0, 255.0, 0.0, 0.0)
}

fn track_color() -> Scalar {
    // BGR red, shared by centroid markers and track lines
    Scalar::new(0.0, 0.0, 255.0, 0.0)
}

/// Frame source reading a stored video asset through `VideoCapture`.
pub struct VideoFileSource {
    capture: videoio::VideoCapture,
}

impl VideoFileSource {
    /// Open a video file.
    ///
    /// Fails with [`PipelineError::SourceUnavailable`] when the asset cannot
    /// be opened; the caller is expected to treat that as fatal.
    pub fn open(path: &Path) -> Result<Self, PipelineError> {
        let name = path.to_string_lossy();
        let capture = videoio::VideoCapture::from_file(&name, videoio::CAP_ANY)
            .map_err(|e| source_unavailable(&name, &e))?;
        if !capture
            .is_opened()
            .map_err(|e| source_unavailable(&name, &e))?
        {
            return Err(PipelineError::SourceUnavailable {
                reason: format!("{name}: capture did not open"),
            });
        }
        Ok(Self { capture })
    }
}

impl FrameSource for VideoFileSource {
    type Frame = Mat;

    /// An exhausted capture reads as end-of-stream, not as a failure.
    fn next_frame(&mut self) -> Result<Option<Mat>, PipelineError> {
        let mut frame = Mat::default();
        let grabbed = self
            .capture
            .read(&mut frame)
            .map_err(|e| PipelineError::Capture(e.to_string()))?;
        if !grabbed {
            return Ok(None);
        }
        let size = frame
            .size()
            .map_err(|e| PipelineError::Capture(e.to_string()))?;
        if size.width == 0 || size.height == 0 {
            return Ok(None);
        }
        Ok(Some(frame))
    }
}

/// Adaptive Gaussian-mixture background subtraction, binarized.
pub struct Mog2Foreground {
    subtractor: Ptr<BackgroundSubtractorMOG2>,
}

impl Mog2Foreground {
    /// Create a subtractor with OpenCV's stock MOG2 parameters
    /// (500-frame history, variance threshold 16, shadow detection on).
    pub fn new() -> Result<Self, PipelineError> {
        let subtractor = video::create_background_subtractor_mog2(500, 16.0, true)
            .map_err(|e| PipelineError::Foreground(e.to_string()))?;
        Ok(Self { subtractor })
    }
}

impl ForegroundExtractor for Mog2Foreground {
    type Frame = Mat;

    fn apply(&mut self, frame: &Mat) -> Result<Mask, PipelineError> {
        let fg_err = |e: opencv::Error| PipelineError::Foreground(e.to_string());

        let mut likelihood = Mat::default();
        self.subtractor
            .apply(frame, &mut likelihood, -1.0)
            .map_err(fg_err)?;

        let mut binary = Mat::default();
        imgproc::threshold(
            &likelihood,
            &mut binary,
            MASK_THRESHOLD,
            MASK_MAX,
            imgproc::THRESH_BINARY,
        )
        .map_err(fg_err)?;

        let rows = binary.rows() as usize;
        let cols = binary.cols() as usize;
        let data = binary.data_bytes().map_err(fg_err)?.to_vec();
        Mask::from_raw(rows, cols, data)
    }
}

/// Outermost-contour extraction with collinear-dropping simplification.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaskContourExtractor;

impl BlobExtractor for MaskContourExtractor {
    fn extract(&mut self, mask: &Mask) -> Result<Vec<Contour>, PipelineError> {
        let blob_err = |e: opencv::Error| PipelineError::Blob(e.to_string());

        let bytes: Vec<u8> = mask.iter().copied().collect();
        let borrowed = Mat::new_rows_cols_with_data(mask.rows() as i32, mask.cols() as i32, &bytes)
            .map_err(blob_err)?;
        let image = borrowed.try_clone().map_err(blob_err)?;

        let mut found = Vector::<Vector<Point>>::new();
        imgproc::find_contours(
            &image,
            &mut found,
            imgproc::RETR_EXTERNAL,
            imgproc::CHAIN_APPROX_SIMPLE,
            Point::new(0, 0),
        )
        .map_err(blob_err)?;

        Ok(found
            .iter()
            .map(|boundary| {
                Contour::new(boundary.iter().map(|p| Point2::new(p.x, p.y)).collect())
            })
            .collect())
    }
}

/// Highgui window renderer with an Esc-key cancellation poll.
pub struct HighguiRenderer {
    window: String,
}

impl HighguiRenderer {
    pub fn new(window: &str) -> Result<Self, PipelineError> {
        highgui::named_window(window, highgui::WINDOW_AUTOSIZE)
            .map_err(|e| PipelineError::Render(e.to_string()))?;
        Ok(Self {
            window: window.to_owned(),
        })
    }
}

impl Renderer for HighguiRenderer {
    type Frame = Mat;

    fn render(&mut self, frame: &mut Mat, commands: &[DrawCommand]) -> Result<(), PipelineError> {
        let render_err = |e: opencv::Error| PipelineError::Render(e.to_string());

        for command in commands {
            match *command {
                DrawCommand::Rect(rect) => {
                    let rec = opencv::core::Rect::new(
                        rect.x.round() as i32,
                        rect.y.round() as i32,
                        rect.width.round() as i32,
                        rect.height.round() as i32,
                    );
                    imgproc::rectangle(
                        frame,
                        rec,
                        box_color(),
                        OVERLAY_THICKNESS,
                        imgproc::LINE_8,
                        0,
                    )
                    .map_err(render_err)?;
                }
                DrawCommand::Marker(centroid) => {
                    imgproc::circle(
                        frame,
                        to_cv_point(centroid),
                        MARKER_RADIUS,
                        track_color(),
                        imgproc::FILLED,
                        imgproc::LINE_8,
                        0,
                    )
                    .map_err(render_err)?;
                }
                DrawCommand::Line { from, to } => {
                    imgproc::line(
                        frame,
                        to_cv_point(from),
                        to_cv_point(to),
                        track_color(),
                        OVERLAY_THICKNESS,
                        imgproc::LINE_8,
                        0,
                    )
                    .map_err(render_err)?;
                }
            }
        }

        highgui::imshow(&self.window, frame).map_err(render_err)
    }

    fn poll_cancel(&mut self) -> Result<bool, PipelineError> {
        let key = highgui::wait_key(POLL_TIMEOUT_MS)
            .map_err(|e| PipelineError::Render(e.to_string()))?;
        Ok(key == CANCEL_KEY)
    }
}

fn to_cv_point(p: Point2<f32>) -> Point {
    Point::new(p.x.round() as i32, p.y.round() as i32)
}

fn source_unavailable(name: &str, err: &opencv::Error) -> PipelineError {
    PipelineError::SourceUnavailable {
        reason: format!("{name}: {err}"),
    }
}
