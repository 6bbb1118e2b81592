//! Volume and centroid of sets of tetrahedra.

pub use self::mass_properties_tetrahedra::{
    tetrahedra_volume_and_center, try_tetrahedra_volume_and_center,
};

mod mass_properties_tetrahedra;
