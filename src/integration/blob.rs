//! Trait for contour extraction backends.

use crate::integration::error::PipelineError;
use crate::integration::mask::Mask;

/// Extracts blob boundaries from a binary foreground mask.
///
/// Implementations return the outermost contours only, each as an ordered
/// point sequence, typically simplified by dropping collinear points. The
/// enumeration order of the returned contours is unspecified; the tracker's
/// persisted centroid follows the last qualifying contour, so callers that
/// care must sort.
pub trait BlobExtractor {
    fn extract(&mut self, mask: &Mask) -> Result<Vec<crate::tracker::Contour>, PipelineError>;
}
