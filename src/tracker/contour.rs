//! Closed-boundary contour geometry: area, bounding box, spatial moments.

use nalgebra::Point2;

use crate::tracker::rect::Rect;

/// An ordered sequence of integer points describing a closed blob boundary.
///
/// The last point is implicitly connected back to the first; producers do not
/// repeat the starting point.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    points: Vec<Point2<i32>>,
}

impl Contour {
    pub fn new(points: Vec<Point2<i32>>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point2<i32>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Enclosed area via the shoelace formula.
    ///
    /// Always non-negative regardless of winding order. Boundaries with fewer
    /// than three points enclose nothing and report zero.
    pub fn area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let mut twice_signed = 0.0;
        for (p, q) in self.edges() {
            twice_signed += cross(p, q);
        }
        (twice_signed / 2.0).abs()
    }

    /// Minimal axis-aligned rectangle enclosing all contour points.
    pub fn bounding_rect(&self) -> Option<Rect> {
        Rect::enclosing(&self.points)
    }

    /// Zeroth and first spatial moments of the enclosed polygon, computed with
    /// Green's theorem over the boundary edges.
    ///
    /// `m00` is the signed area; its sign follows the winding order and
    /// cancels out in the centroid ratios.
    pub fn moments(&self) -> Moments {
        let mut m00 = 0.0;
        let mut m10 = 0.0;
        let mut m01 = 0.0;
        if self.points.len() >= 3 {
            for (p, q) in self.edges() {
                let c = cross(p, q);
                m00 += c;
                m10 += (p.x as f64 + q.x as f64) * c;
                m01 += (p.y as f64 + q.y as f64) * c;
            }
        }
        Moments {
            m00: m00 / 2.0,
            m10: m10 / 6.0,
            m01: m01 / 6.0,
        }
    }

    fn edges(&self) -> impl Iterator<Item = (Point2<i32>, Point2<i32>)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }
}

#[inline]
fn cross(p: Point2<i32>, q: Point2<i32>) -> f64 {
    p.x as f64 * q.y as f64 - q.x as f64 * p.y as f64
}

/// Spatial moments of a contour polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    /// Zeroth moment (signed area)
    pub m00: f64,
    /// First moment about the x axis
    pub m10: f64,
    /// First moment about the y axis
    pub m01: f64,
}

impl Moments {
    /// Centroid of the polygon: `(m10 / m00, m01 / m00)`.
    ///
    /// Returns `None` when `m00` is zero, so the division-by-zero hazard of a
    /// degenerate boundary never reaches a caller.
    pub fn centroid(&self) -> Option<Point2<f32>> {
        if self.m00 == 0.0 {
            return None;
        }
        Some(Point2::new(
            (self.m10 / self.m00) as f32,
            (self.m01 / self.m00) as f32,
        ))
    }
}
