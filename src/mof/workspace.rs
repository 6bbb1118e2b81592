use crate::math::{Point, Real};
use crate::shape::{Plane, Tetrahedron, Triangle};

/// Scratch buffers of an interface reconstruction.
///
/// A workspace caches the tetrahedral decomposition of the last cell it was used with, and
/// receives the tetrahedra and the cut triangles of the last plane evaluation. Every
/// operation of [`MomentOfFluid`](crate::mof::MomentOfFluid) borrows one mutably, so
/// concurrent reconstructions need one workspace each.
///
/// The decomposition cache is keyed by cell index only: call [`MofWorkspace::clear`] before
/// reusing a workspace with a different mesh.
#[derive(Clone, Debug, Default)]
pub struct MofWorkspace {
    pub(crate) cell: Option<usize>,
    pub(crate) tet_decomp: Vec<Tetrahedron>,
    pub(crate) cell_volume: Real,
    pub(crate) cell_center: Point<Real>,
    pub(crate) cell_length: Real,
    pub(crate) clipped_tets: Vec<Tetrahedron>,
    pub(crate) cut_triangles: Vec<Triangle>,
}

impl MofWorkspace {
    /// An empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the cached decomposition and the last evaluation results.
    pub fn clear(&mut self) {
        self.cell = None;
        self.tet_decomp.clear();
        self.cell_volume = 0.0;
        self.cell_center = Point::origin();
        self.cell_length = 0.0;
        self.clipped_tets.clear();
        self.cut_triangles.clear();
    }

    /// The index of the cell whose decomposition is cached, if any.
    #[inline]
    pub fn cell(&self) -> Option<usize> {
        self.cell
    }

    /// The tetrahedral decomposition of the cached cell.
    #[inline]
    pub fn decomposition(&self) -> &[Tetrahedron] {
        &self.tet_decomp
    }

    /// The volume of the cached cell.
    #[inline]
    pub fn cell_volume(&self) -> Real {
        self.cell_volume
    }

    /// The centroid of the cached cell.
    #[inline]
    pub fn cell_center(&self) -> Point<Real> {
        self.cell_center
    }

    /// The largest extent of the bounding box of the cached cell.
    #[inline]
    pub fn cell_length(&self) -> Real {
        self.cell_length
    }

    /// The tetrahedra covering the inside part of the cell, for the last evaluated plane.
    #[inline]
    pub fn clipped_tets(&self) -> &[Tetrahedron] {
        &self.clipped_tets
    }

    /// The triangles covering the section of the cell by the last evaluated plane.
    ///
    /// They are oriented with their normal pointing away from the inside part.
    #[inline]
    pub fn surface_triangles(&self) -> &[Triangle] {
        &self.cut_triangles
    }

    pub(crate) fn clip_decomposition(&mut self, plane: &Plane) {
        self.clipped_tets.clear();
        self.cut_triangles.clear();

        for tet in &self.tet_decomp {
            tet.clip_by_plane_to(plane, &mut self.clipped_tets, &mut self.cut_triangles);
        }
    }
}
