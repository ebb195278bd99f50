//! Visualization instructions emitted by the tracker.

use nalgebra::Point2;

use crate::tracker::rect::Rect;

/// One overlay instruction for the renderer.
///
/// Commands carry geometry only; colors, thickness, and marker size are the
/// renderer's concern. They are applied in emission order, so later commands
/// may visually overlay earlier ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Bounding rectangle around a detection.
    Rect(Rect),
    /// Filled marker at a detection centroid.
    Marker(Point2<f32>),
    /// Track segment from the previously persisted centroid to the new one.
    Line {
        from: Point2<f32>,
        to: Point2<f32>,
    },
}
