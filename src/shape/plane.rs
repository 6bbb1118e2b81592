//! Definition of the Hessian-normal plane.

use crate::math::{Point, Real, UnitVector, Vector};
use crate::utils;
use na::Unit;

/// A plane in Hessian-normal form: the set of points `x` such that `normal · x = offset`.
///
/// The plane splits space into an *inside* half-space `normal · x - offset >= 0` and an
/// *outside* half-space. Points lying exactly on the plane are inside: clipping by a plane
/// and by its [`flipped`](Self::flipped) counterpart relies on this tie-break to produce
/// complementary pieces.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plane {
    /// The unit normal pointing toward the inside half-space.
    pub normal: UnitVector<Real>,
    /// The signed distance from the origin to the plane, along `normal`.
    pub offset: Real,
}

impl Plane {
    /// Builds a new plane from its unit normal and its offset.
    #[inline]
    pub fn new(normal: UnitVector<Real>, offset: Real) -> Plane {
        Plane { normal, offset }
    }

    /// Builds a new plane from a possibly non-unit normal.
    ///
    /// Both the normal and the offset are divided by the norm of `normal` so the plane
    /// describes the same set of points. Returns `None` if `normal` is (almost) zero.
    pub fn try_new(normal: Vector<Real>, offset: Real) -> Option<Plane> {
        let (normal, norm) = Unit::try_new_and_get(normal, crate::math::DEFAULT_EPSILON)?;
        Some(Plane {
            normal,
            offset: offset / norm,
        })
    }

    /// Builds the plane passing through `point` with the given `normal`.
    #[inline]
    pub fn from_point_and_normal(point: &Point<Real>, normal: UnitVector<Real>) -> Plane {
        Plane {
            normal,
            offset: normal.dot(&point.coords),
        }
    }

    /// Builds the plane whose normal has the polar angle `theta` and azimuth `phi`.
    ///
    /// See [`utils::spherical_to_cartesian`] for the angle conventions.
    #[inline]
    pub fn from_spherical_angles(theta: Real, phi: Real, offset: Real) -> Plane {
        Plane {
            normal: Unit::new_unchecked(utils::spherical_to_cartesian(theta, phi)),
            offset,
        }
    }

    /// The spherical angles `(theta, phi)` of this plane’s normal.
    #[inline]
    pub fn spherical_angles(&self) -> (Real, Real) {
        utils::cartesian_to_spherical(&self.normal)
    }

    /// The signed distance from `pt` to this plane, positive on the inside.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.offset
    }

    /// Tests if `pt` lies inside of this plane, boundary included.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.signed_distance(pt) >= 0.0
    }

    /// The projection of the origin on this plane.
    #[inline]
    pub fn origin(&self) -> Point<Real> {
        Point::from(*self.normal * self.offset)
    }

    /// The same plane with its inside and outside swapped.
    #[inline]
    pub fn flipped(&self) -> Plane {
        Plane {
            normal: -self.normal,
            offset: -self.offset,
        }
    }
}
