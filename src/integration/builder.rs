//! Builder for assembling contours from various point formats.

use nalgebra::Point2;

use crate::tracker::Contour;

/// Builder for creating [`Contour`] values from various point formats.
///
/// Mostly useful for tests and for adapting blob extractors whose native
/// output is not already a point sequence.
#[derive(Debug, Clone, Default)]
pub struct ContourBuilder {
    points: Vec<Point2<i32>>,
}

impl ContourBuilder {
    /// Create a new contour builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single boundary point.
    pub fn point(mut self, x: i32, y: i32) -> Self {
        self.points.push(Point2::new(x, y));
        self
    }

    /// Append boundary points from (x, y) pairs.
    pub fn points<I: IntoIterator<Item = (i32, i32)>>(mut self, points: I) -> Self {
        self.points
            .extend(points.into_iter().map(|(x, y)| Point2::new(x, y)));
        self
    }

    /// Append the four corners of an axis-aligned rectangle outline.
    ///
    /// The boundary is closed implicitly; the starting corner is not repeated.
    pub fn rect_outline(self, x: i32, y: i32, width: i32, height: i32) -> Self {
        self.points([
            (x, y),
            (x + width, y),
            (x + width, y + height),
            (x, y + height),
        ])
    }

    /// Build the final [`Contour`].
    pub fn build(self) -> Contour {
        Contour::new(self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_formats_agree() {
        let from_pairs = ContourBuilder::new()
            .points([(4, 4), (16, 4), (16, 16), (4, 16)])
            .build();
        let from_outline = ContourBuilder::new().rect_outline(4, 4, 12, 12).build();
        assert_eq!(from_pairs, from_outline);
    }

    #[test]
    fn test_rect_outline_geometry() {
        let contour = ContourBuilder::new().rect_outline(4, 4, 12, 12).build();
        assert_eq!(contour.len(), 4);
        assert!((contour.area() - 144.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_points() {
        let contour = ContourBuilder::new().point(1, 2).point(3, 4).build();
        assert_eq!(contour.points()[1], Point2::new(3, 4));
    }
}
