//! Definition of the tetrahedron shape.

use crate::math::{Matrix, Point, Real};
use crate::utils;

/// A tetrahedron with 4 vertices.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Tetrahedron {
    /// The tetrahedron first point.
    pub a: Point<Real>,
    /// The tetrahedron second point.
    pub b: Point<Real>,
    /// The tetrahedron third point.
    pub c: Point<Real>,
    /// The tetrahedron fourth point.
    pub d: Point<Real>,
}

impl Tetrahedron {
    /// Creates a tetrahedron from four points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>, d: Point<Real>) -> Tetrahedron {
        Tetrahedron { a, b, c, d }
    }

    /// The four vertices of this tetrahedron, in the order `[a, b, c, d]`.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Computes the volume of this tetrahedron.
    ///
    /// This is never negative, whatever the orientation of the vertices.
    #[inline]
    pub fn volume(&self) -> Real {
        self.signed_volume().abs()
    }

    /// Computes the signed volume of this tetrahedron.
    ///
    /// If it is positive, `d` is on the half-space pointed by the normal of the oriented triangle
    /// `(a, b, c)`.
    #[inline]
    pub fn signed_volume(&self) -> Real {
        let p1p2 = self.b - self.a;
        let p1p3 = self.c - self.a;
        let p1p4 = self.d - self.a;

        let mat = Matrix::new(
            p1p2[0], p1p3[0], p1p4[0], p1p2[1], p1p3[1], p1p4[1], p1p2[2], p1p3[2], p1p4[2],
        );

        mat.determinant() / 6.0
    }

    /// Computes the center of this tetrahedron.
    ///
    /// This is the mean of the four vertices, which is also the centroid of its volume.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        utils::center(&[self.a, self.b, self.c, self.d])
    }
}
