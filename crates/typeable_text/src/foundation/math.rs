//! Math utilities and types
//!
//! The text field lives in its own local 2D plane: +X points right, +Y points
//! up, and the first line's pen starts at the origin. Lines stack downwards
//! into negative Y.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Axis-aligned rectangle in text-field local space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Bottom-left corner
    pub min: Point2,
    /// Top-right corner
    pub max: Point2,
}

impl Rect {
    /// Create a rectangle from two corners, normalizing their order
    pub fn from_corners(a: Point2, b: Point2) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Create a rectangle from its bottom-left corner and size
    pub fn from_origin_size(origin: Point2, size: Vec2) -> Self {
        Self::from_corners(origin, origin + size)
    }

    /// Width of the rectangle
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Inclusive containment test (points on an edge are inside)
    pub fn contains(&self, point: Point2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rect_normalizes_corners() {
        let rect = Rect::from_corners(Point2::new(4.0, -2.0), Point2::new(-1.0, 3.0));

        assert_eq!(rect.min, Point2::new(-1.0, -2.0));
        assert_eq!(rect.max, Point2::new(4.0, 3.0));
        assert_relative_eq!(rect.width(), 5.0);
        assert_relative_eq!(rect.height(), 5.0);
    }

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect::from_origin_size(Point2::new(0.0, 0.0), Vec2::new(10.0, 12.0));

        assert!(rect.contains(Point2::new(0.0, 0.0)));
        assert!(rect.contains(Point2::new(10.0, 12.0)));
        assert!(rect.contains(Point2::new(5.0, 6.0)));
        assert!(!rect.contains(Point2::new(10.5, 6.0)));
        assert!(!rect.contains(Point2::new(5.0, -0.1)));
    }

    #[test]
    fn test_rect_center() {
        let rect = Rect::from_origin_size(Point2::new(2.0, -4.0), Vec2::new(6.0, 8.0));
        assert_relative_eq!(rect.center(), Point2::new(5.0, 0.0));
    }
}
