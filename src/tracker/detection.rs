//! Per-contour detection records: area filtering and centroid computation.

use log::debug;
use nalgebra::Point2;

use crate::tracker::contour::Contour;
use crate::tracker::rect::Rect;

/// Contours whose enclosed area does not exceed this are discarded as noise.
/// The threshold is deliberately not configurable.
pub const MIN_CONTOUR_AREA: f64 = 100.0;

/// A contour that survived the area filter, with its derived geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    /// Enclosed contour area
    pub area: f64,
    /// Axis-aligned bounding box of the contour
    pub bbox: Rect,
    /// First-moment centroid of the contour polygon
    pub centroid: Point2<f32>,
}

impl Detection {
    /// Derive a detection from a raw contour.
    ///
    /// Returns `None` when the contour fails the area filter, and also when it
    /// passes the filter but has a zero zeroth moment. The latter case is
    /// recovered locally rather than surfaced: the contour is skipped and the
    /// stream continues.
    pub fn from_contour(contour: &Contour) -> Option<Self> {
        let area = contour.area();
        if area <= MIN_CONTOUR_AREA {
            return None;
        }
        let bbox = contour.bounding_rect()?;
        let Some(centroid) = contour.moments().centroid() else {
            debug!(
                "skipping degenerate contour ({} points): zero zeroth moment",
                contour.len()
            );
            return None;
        };
        Some(Self {
            area,
            bbox,
            centroid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_contour(x: i32, y: i32, w: i32, h: i32) -> Contour {
        Contour::new(vec![
            Point2::new(x, y),
            Point2::new(x + w, y),
            Point2::new(x + w, y + h),
            Point2::new(x, y + h),
        ])
    }

    #[test]
    fn test_qualifying_contour() {
        let det = Detection::from_contour(&rect_contour(4, 4, 12, 12)).unwrap();
        assert!((det.area - 144.0).abs() < 1e-9);
        assert_eq!(det.bbox, Rect::new(4.0, 4.0, 12.0, 12.0));
        assert!((det.centroid.x - 10.0).abs() < 1e-6);
        assert!((det.centroid.y - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_small_contour_filtered() {
        // 5 x 10 = 50 area units, under the noise threshold
        assert!(Detection::from_contour(&rect_contour(0, 0, 5, 10)).is_none());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // exactly 100 area units does not qualify
        assert!(Detection::from_contour(&rect_contour(0, 0, 10, 10)).is_none());
    }

    #[test]
    fn test_degenerate_contour_skipped() {
        let line = Contour::new(vec![
            Point2::new(0, 0),
            Point2::new(200, 0),
            Point2::new(400, 0),
        ]);
        assert!(Detection::from_contour(&line).is_none());
    }
}
