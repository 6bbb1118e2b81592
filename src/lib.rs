/*!
mof3d
========

**mof3d** reconstructs planar material interfaces inside polyhedral cells with the
Moment-of-Fluid method: given a volume fraction and a reference centroid for one
cell, it finds the plane whose clipped volume matches the fraction and whose
clipped centroid lies as close as possible to the reference.

The building blocks are usable on their own:

* [`transformation::decompose_cell`] splits a polyhedral cell into tetrahedra.
* [`shape::Tetrahedron::clip_by_plane`] clips one tetrahedron by a plane.
* [`mass_properties::tetrahedra_volume_and_center`] integrates a set of tetrahedra.
* [`optimization::Bfgs`] minimizes any smooth function of a fixed-size vector.
* [`mof::MomentOfFluid`] ties everything together for cells of a [`shape::CellMesh`].
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]
#![deny(unused_qualifications)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod mass_properties;
pub mod mof;
pub mod optimization;
pub mod query;
pub mod shape;
pub mod transformation;
pub mod utils;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{Matrix3, Point3, UnitVector3, Vector3};

    /// The scalar type used throughout this crate.
    pub use f64 as Real;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;
}
