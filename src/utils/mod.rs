//! Various unsorted geometrical and numerical helpers.

pub use self::center::center;
pub use self::extents::{point_cloud_bounds, point_cloud_extents_on_dir};
pub use self::spherical::{cartesian_to_spherical, spherical_to_cartesian, wrap_spherical_angles};

mod center;
mod extents;
mod spherical;
