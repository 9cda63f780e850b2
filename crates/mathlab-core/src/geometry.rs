//! Point and triangle value types.

use serde::{Deserialize, Serialize};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Arithmetic mean of the two points, coordinate by coordinate.
    ///
    /// Halves before adding, so the midpoint of finite points stays finite.
    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new(self.x / 2.0 + other.x / 2.0, self.y / 2.0 + other.y / 2.0)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// An ordered triple of vertices.
///
/// Vertex order does not change the geometry, only the order in which
/// subdivided leaves are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Triangle {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Triangle {
    #[must_use]
    pub const fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self { p1, p2, p3 }
    }

    #[must_use]
    pub fn vertices(&self) -> [Point; 3] {
        [self.p1, self.p2, self.p3]
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.vertices().iter().all(|p| p.is_finite())
    }

    /// Unsigned area (shoelace formula).
    #[must_use]
    pub fn area(&self) -> f64 {
        let cross = (self.p2.x - self.p1.x) * (self.p3.y - self.p1.y)
            - (self.p3.x - self.p1.x) * (self.p2.y - self.p1.y);
        cross.abs() / 2.0
    }

    /// The three corner sub-triangles, adjacent to `p1`, `p2` and `p3`
    /// in that order. The central triangle is not part of the result.
    #[must_use]
    pub fn corners(&self) -> [Triangle; 3] {
        let m12 = self.p1.midpoint(self.p2);
        let m23 = self.p2.midpoint(self.p3);
        let m31 = self.p3.midpoint(self.p1);
        [
            Triangle::new(self.p1, m12, m31),
            Triangle::new(m12, self.p2, m23),
            Triangle::new(m31, m23, self.p3),
        ]
    }

    /// The central triangle formed by the three edge midpoints.
    #[must_use]
    pub fn medial(&self) -> Triangle {
        Triangle::new(
            self.p1.midpoint(self.p2),
            self.p2.midpoint(self.p3),
            self.p3.midpoint(self.p1),
        )
    }
}
