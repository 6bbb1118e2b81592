pub use self::split::SplitResult;
pub use self::split_tetrahedron::{TetrahedronClip, TetrahedronPlaneLocation};

mod split;
mod split_tetrahedron;
