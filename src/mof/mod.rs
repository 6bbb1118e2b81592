//! Moment-of-Fluid interface reconstruction.
//!
//! Given the volume fraction and the centroid of a material inside a polyhedral cell, the
//! Moment-of-Fluid method finds the plane that encloses exactly that volume fraction while
//! its enclosed centroid is as close as possible to the material centroid:
//!
//! 1. the cell is decomposed into tetrahedra, once per cell,
//! 2. for a given normal, the plane offset matching the volume fraction is found by
//!    bisection ([`MomentOfFluid::match_fraction`]),
//! 3. the normal, parametrized by its spherical angles, is optimized with
//!    [`Bfgs`](crate::optimization::Bfgs) to minimize the centroid distance
//!    ([`MomentOfFluid::optimize_centroid`]).
//!
//! [`MomentOfFluid::construct_interface`] applies these steps to a whole set of cells.

pub use self::centroid::{CentroidObjective, CentroidOptimization, FunctionalEvaluation};
pub use self::error::MofError;
pub use self::fraction::{FractionMatch, FractionMatchStatus, OffsetBounds};
pub use self::interface::{CellInterface, InterfaceReconstruction};
pub use self::moment_of_fluid::{MomentOfFluid, PlaneEvaluation};
pub use self::options::MofOptions;
pub use self::workspace::MofWorkspace;

mod centroid;
mod error;
mod fraction;
mod interface;
mod moment_of_fluid;
mod options;
mod workspace;
