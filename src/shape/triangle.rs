//! Definition of the triangle shape.

use crate::math::{Point, Real, UnitVector, Vector};
use crate::utils;

use na::Unit;

/// A triangle shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The three vertices of this triangle, in the order `[a, b, c]`.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The same triangle with the opposite orientation.
    #[inline]
    pub fn reversed(&self) -> Triangle {
        Triangle::new(self.a, self.c, self.b)
    }

    /// The normal of this triangle assuming it is oriented ccw.
    ///
    /// The normal points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product). Returns `None` for degenerate triangles.
    #[inline]
    pub fn normal(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.scaled_normal(), crate::math::DEFAULT_EPSILON)
    }

    /// A vector normal of this triangle, with a norm equal to twice its area.
    ///
    /// The vector points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product).
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() * 0.5
    }

    /// The geometric center of this triangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        utils::center(&[self.a, self.b, self.c])
    }
}
