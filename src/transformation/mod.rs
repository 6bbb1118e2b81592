//! Decomposition of polyhedral cells and export of reconstruction results.

pub use self::tet_decomposition::{cell_apex, decompose_cell};

mod tet_decomposition;

/// Export of cut surfaces and plane patches to Wavefront files.
#[cfg(feature = "wavefront")]
pub mod wavefront;
