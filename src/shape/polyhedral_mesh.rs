//! Polyhedral cell meshes: the geometry interfaces are reconstructed in.

use crate::math::{Point, Real, Vector};
use crate::shape::Tetrahedron;
use smallvec::SmallVec;

/// Read access to the cells of a polyhedral mesh.
///
/// This is everything the interface reconstruction needs from a mesh: the vertex
/// coordinates, the faces bounding each cell, and the vertices of each face. The
/// orientation of the faces is irrelevant.
pub trait CellMesh {
    /// The coordinates of every vertex of the mesh.
    fn points(&self) -> &[Point<Real>];

    /// The number of cells of the mesh.
    fn num_cells(&self) -> usize;

    /// The indices of the faces bounding the `cell`-th cell.
    fn cell_faces(&self, cell: usize) -> &[u32];

    /// The indices of the vertices of the `face`-th face, in boundary order.
    fn face_vertices(&self, face: usize) -> &[u32];

    /// A precomputed center of the `cell`-th cell, if the mesh has one.
    ///
    /// When present, it is used as the apex of the tetrahedral decomposition of the cell.
    fn cell_center(&self, _cell: usize) -> Option<Point<Real>> {
        None
    }
}

/// Indicated an inconsistency while building a polyhedral mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolyhedralMeshError {
    /// A polyhedral mesh must contain at least one cell.
    #[error("a polyhedral mesh must contain at least one cell.")]
    EmptyCells,
    /// A cell without any face.
    #[error("the cell {0} has no face.")]
    EmptyCell(u32),
    /// A face references a vertex that does not exist.
    #[error("the face {face} references the vertex {vertex} which does not exist.")]
    VertexOutOfBounds {
        /// The offending face.
        face: u32,
        /// The vertex index it references.
        vertex: u32,
    },
    /// A cell references a face that does not exist.
    #[error("the cell {cell} references the face {face} which does not exist.")]
    FaceOutOfBounds {
        /// The offending cell.
        cell: u32,
        /// The face index it references.
        face: u32,
    },
    /// The number of cell centers differs from the number of cells.
    #[error("expected {expected} cell centers, found {found}.")]
    CellCentersMismatch {
        /// The number of cells.
        expected: usize,
        /// The number of centers given.
        found: usize,
    },
}

/// A mesh made of arbitrary polyhedral cells, each described by its faces.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolyhedralMesh {
    points: Vec<Point<Real>>,
    faces: Vec<SmallVec<[u32; 4]>>,
    cells: Vec<SmallVec<[u32; 6]>>,
    cell_centers: Option<Vec<Point<Real>>>,
}

impl PolyhedralMesh {
    /// Creates a new mesh from its vertex buffer, face-to-vertex and cell-to-face lists.
    ///
    /// Index validity is checked here. Faces with less than three vertices are accepted,
    /// they are reported as degenerate when the cell they bound is decomposed.
    pub fn new(
        points: Vec<Point<Real>>,
        faces: Vec<Vec<u32>>,
        cells: Vec<Vec<u32>>,
    ) -> Result<Self, PolyhedralMeshError> {
        if cells.is_empty() {
            return Err(PolyhedralMeshError::EmptyCells);
        }

        for (fid, face) in faces.iter().enumerate() {
            if let Some(vertex) = face.iter().find(|v| **v as usize >= points.len()) {
                return Err(PolyhedralMeshError::VertexOutOfBounds {
                    face: fid as u32,
                    vertex: *vertex,
                });
            }
        }

        for (cid, cell) in cells.iter().enumerate() {
            if cell.is_empty() {
                return Err(PolyhedralMeshError::EmptyCell(cid as u32));
            }

            if let Some(face) = cell.iter().find(|f| **f as usize >= faces.len()) {
                return Err(PolyhedralMeshError::FaceOutOfBounds {
                    cell: cid as u32,
                    face: *face,
                });
            }
        }

        Ok(Self {
            points,
            faces: faces.into_iter().map(SmallVec::from_vec).collect(),
            cells: cells.into_iter().map(SmallVec::from_vec).collect(),
            cell_centers: None,
        })
    }

    /// Attaches precomputed cell centers to this mesh.
    pub fn with_cell_centers(
        mut self,
        centers: Vec<Point<Real>>,
    ) -> Result<Self, PolyhedralMeshError> {
        if centers.len() != self.cells.len() {
            return Err(PolyhedralMeshError::CellCentersMismatch {
                expected: self.cells.len(),
                found: centers.len(),
            });
        }

        self.cell_centers = Some(centers);
        Ok(self)
    }

    /// A mesh made of the single axis-aligned box `[mins, maxs]`.
    pub fn cuboid(mins: Point<Real>, maxs: Point<Real>) -> Self {
        Self::structured_grid(mins, maxs - mins, [1, 1, 1])
    }

    /// A mesh made of the single cell `tet`.
    pub fn from_tetrahedron(tet: &Tetrahedron) -> Self {
        Self {
            points: tet.vertices().to_vec(),
            faces: vec![
                SmallVec::from_slice(&[0, 1, 2]),
                SmallVec::from_slice(&[0, 1, 3]),
                SmallVec::from_slice(&[0, 2, 3]),
                SmallVec::from_slice(&[1, 2, 3]),
            ],
            cells: vec![SmallVec::from_slice(&[0, 1, 2, 3])],
            cell_centers: None,
        }
    }

    /// A regular grid of `dims[0] × dims[1] × dims[2]` hexahedral cells of size `spacing`,
    /// with its first corner at `origin`.
    ///
    /// Cells are numbered with the x index varying fastest. Interior faces are shared by
    /// the two cells they separate.
    ///
    /// # Panics
    ///
    /// Panics if one of the dimensions is zero.
    pub fn structured_grid(origin: Point<Real>, spacing: Vector<Real>, dims: [usize; 3]) -> Self {
        let [nx, ny, nz] = dims;
        assert!(
            nx > 0 && ny > 0 && nz > 0,
            "A structured grid needs at least one cell along each axis."
        );

        let pid = |i: usize, j: usize, k: usize| (i + (nx + 1) * (j + (ny + 1) * k)) as u32;

        let mut points = Vec::with_capacity((nx + 1) * (ny + 1) * (nz + 1));
        for k in 0..=nz {
            for j in 0..=ny {
                for i in 0..=nx {
                    let ijk = Vector::new(i as Real, j as Real, k as Real);
                    points.push(origin + spacing.component_mul(&ijk));
                }
            }
        }

        let num_xfaces = (nx + 1) * ny * nz;
        let num_yfaces = nx * (ny + 1) * nz;
        let xface = |i: usize, j: usize, k: usize| (i + (nx + 1) * (j + ny * k)) as u32;
        let yface = |i: usize, j: usize, k: usize| (num_xfaces + i + nx * (j + (ny + 1) * k)) as u32;
        let zface = |i: usize, j: usize, k: usize| {
            (num_xfaces + num_yfaces + i + nx * (j + ny * k)) as u32
        };

        let mut faces = Vec::new();
        for k in 0..nz {
            for j in 0..ny {
                for i in 0..=nx {
                    faces.push(SmallVec::from_slice(&[
                        pid(i, j, k),
                        pid(i, j + 1, k),
                        pid(i, j + 1, k + 1),
                        pid(i, j, k + 1),
                    ]));
                }
            }
        }
        for k in 0..nz {
            for j in 0..=ny {
                for i in 0..nx {
                    faces.push(SmallVec::from_slice(&[
                        pid(i, j, k),
                        pid(i, j, k + 1),
                        pid(i + 1, j, k + 1),
                        pid(i + 1, j, k),
                    ]));
                }
            }
        }
        for k in 0..=nz {
            for j in 0..ny {
                for i in 0..nx {
                    faces.push(SmallVec::from_slice(&[
                        pid(i, j, k),
                        pid(i + 1, j, k),
                        pid(i + 1, j + 1, k),
                        pid(i, j + 1, k),
                    ]));
                }
            }
        }

        let mut cells = Vec::with_capacity(nx * ny * nz);
        for k in 0..nz {
            for j in 0..ny {
                for i in 0..nx {
                    cells.push(SmallVec::from_slice(&[
                        xface(i, j, k),
                        xface(i + 1, j, k),
                        yface(i, j, k),
                        yface(i, j + 1, k),
                        zface(i, j, k),
                        zface(i, j, k + 1),
                    ]));
                }
            }
        }

        Self {
            points,
            faces,
            cells,
            cell_centers: None,
        }
    }

    /// The number of faces of this mesh.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// The distinct vertices of the `cell`-th cell, in order of first appearance.
    pub fn cell_vertices(&self, cell: usize) -> Vec<u32> {
        let mut result: Vec<u32> = Vec::new();

        for face in &self.cells[cell] {
            for vid in &self.faces[*face as usize] {
                if !result.contains(vid) {
                    result.push(*vid);
                }
            }
        }

        result
    }
}

impl CellMesh for PolyhedralMesh {
    #[inline]
    fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    #[inline]
    fn num_cells(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn cell_faces(&self, cell: usize) -> &[u32] {
        &self.cells[cell]
    }

    #[inline]
    fn face_vertices(&self, face: usize) -> &[u32] {
        &self.faces[face]
    }

    #[inline]
    fn cell_center(&self, cell: usize) -> Option<Point<Real>> {
        self.cell_centers.as_ref().map(|centers| centers[cell])
    }
}
