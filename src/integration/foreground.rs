//! Trait for adaptive foreground extraction backends.

use crate::integration::error::PipelineError;
use crate::integration::mask::Mask;

/// Produces a binary foreground mask per frame from an internally maintained
/// adaptive background model.
///
/// The contract only requires per-pixel foreground likelihood thresholded to
/// binary; the modeling algorithm is the implementation's business. `apply`
/// takes `&mut self` because every observed frame updates the model.
pub trait ForegroundExtractor {
    /// Frame type consumed by this extractor.
    type Frame;

    /// Fold the frame into the background model and return its foreground
    /// mask, with the same spatial dimensions as the frame.
    fn apply(&mut self, frame: &Self::Frame) -> Result<Mask, PipelineError>;
}
