use nalgebra::Point2;

/// Single-slot track memory: the last persisted centroid.
///
/// The slot starts at the origin and is overwritten once per qualifying,
/// non-degenerate detection, in contour input order. Within a frame the final
/// detection wins, so the persisted value depends on the blob extractor's
/// enumeration order, which that collaborator's contract leaves unspecified.
/// Callers that need "track the most salient blob" semantics must order their
/// contours accordingly before handing them to the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackState {
    /// Centroid persisted from the last qualifying detection.
    pub previous: Point2<f32>,
}

impl TrackState {
    pub fn new(previous: Point2<f32>) -> Self {
        Self { previous }
    }

    /// Overwrite the slot with a new centroid, returning the displaced one.
    pub fn advance(&mut self, centroid: Point2<f32>) -> Point2<f32> {
        std::mem::replace(&mut self.previous, centroid)
    }
}

impl Default for TrackState {
    fn default() -> Self {
        Self::new(Point2::origin())
    }
}
