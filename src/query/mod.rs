//! Non-persistent geometric queries.
//!
//! The queries of this module clip shapes by planes:
//!
//! * [`Tetrahedron::clip_by_plane`](crate::shape::Tetrahedron::clip_by_plane) keeps the part
//!   of a tetrahedron lying inside a plane.
//! * [`Tetrahedron::split_by_plane`](crate::shape::Tetrahedron::split_by_plane) computes both
//!   parts at once.

pub use self::split::{SplitResult, TetrahedronClip, TetrahedronPlaneLocation};

mod split;
