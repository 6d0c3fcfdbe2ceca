#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point on the drawing surface, in CSS pixels from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn offset_from(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }
}

/// Size of the drawing surface in CSS pixels.
///
/// The backing store may be larger (device pixel ratio); all entity math
/// happens in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether a circle of `radius` at `center` lies strictly inside the surface.
    #[must_use]
    pub fn contains_circle(&self, center: Point, radius: f64) -> bool {
        let horizontally = self.width - radius > center.x && center.x - radius > 0.0;
        let vertically = self.height - radius > center.y && center.y - radius > 0.0;
        horizontally && vertically
    }
}
