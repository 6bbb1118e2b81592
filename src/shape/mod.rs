//! Shapes manipulated by the interface reconstruction.

pub use self::plane::Plane;
pub use self::polyhedral_mesh::{CellMesh, PolyhedralMesh, PolyhedralMeshError};
pub use self::tetrahedron::Tetrahedron;
pub use self::triangle::Triangle;

mod plane;
mod polyhedral_mesh;
mod tetrahedron;
mod triangle;
