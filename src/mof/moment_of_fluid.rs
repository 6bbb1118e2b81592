use crate::mass_properties;
use crate::math::{Point, Real, UnitVector, Vector};
use crate::mof::{MofError, MofOptions, MofWorkspace};
use crate::shape::{CellMesh, Plane, Triangle};
use crate::transformation;
use crate::utils;
use na::Unit;

/// The volume, volume fraction and centroid of the part of a cell inside a plane.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlaneEvaluation {
    /// The volume of the part of the cell inside the plane.
    pub volume: Real,
    /// `volume` divided by the volume of the cell.
    pub fraction: Real,
    /// The centroid of the part of the cell inside the plane, or the origin if it is empty.
    pub center: Point<Real>,
}

/// Moment-of-Fluid interface reconstruction on the cells of a mesh.
///
/// A `MomentOfFluid` only reads the mesh and its options. All the intermediate results live
/// in a [`MofWorkspace`] given to every operation, so a single reconstructor can be shared
/// by several threads as long as each one has its own workspace.
///
/// # Example
///
/// ```
/// # use mof3d::math::{Point, Vector};
/// # use mof3d::mof::{MomentOfFluid, MofWorkspace};
/// # use mof3d::shape::PolyhedralMesh;
/// let mesh = PolyhedralMesh::cuboid(Point::origin(), Point::new(1.0, 1.0, 1.0));
/// let mof = MomentOfFluid::new(&mesh);
/// let mut workspace = MofWorkspace::new();
///
/// // The lower quarter of the cube.
/// let result = mof
///     .match_fraction(&mut workspace, 0, 0.25, &-Vector::z(), None)
///     .unwrap();
/// assert!((result.offset + 0.25).abs() < 1.0e-9);
/// ```
#[derive(Clone, Debug)]
pub struct MomentOfFluid<'a, M: CellMesh + ?Sized> {
    pub(crate) mesh: &'a M,
    pub(crate) options: MofOptions,
}

impl<'a, M: CellMesh + ?Sized> MomentOfFluid<'a, M> {
    /// A reconstructor working on the cells of `mesh`, with the default options.
    pub fn new(mesh: &'a M) -> Self {
        Self::with_options(mesh, MofOptions::default())
    }

    /// A reconstructor working on the cells of `mesh`.
    pub fn with_options(mesh: &'a M, options: MofOptions) -> Self {
        Self { mesh, options }
    }

    /// The mesh whose cells are reconstructed.
    #[inline]
    pub fn mesh(&self) -> &'a M {
        self.mesh
    }

    /// The options of this reconstructor.
    #[inline]
    pub fn options(&self) -> &MofOptions {
        &self.options
    }

    /// Decomposes the `cell`-th cell into tetrahedra, and caches the result in `ws`.
    ///
    /// Nothing is recomputed if `ws` already holds the decomposition of `cell`. The apex of
    /// the decomposition is the cell center provided by the mesh if there is one, and the
    /// mean of the cell vertices otherwise. On failure, the cache of `ws` is left empty.
    pub fn decompose_cell(&self, ws: &mut MofWorkspace, cell: usize) -> Result<(), MofError> {
        if ws.cell == Some(cell) {
            return Ok(());
        }

        ws.clear();
        let apex = transformation::cell_apex(self.mesh, cell)?;
        transformation::decompose_cell(self.mesh, cell, &apex, &mut ws.tet_decomp)?;

        let vertices = ws.tet_decomp.iter().flat_map(|t| [&t.a, &t.b, &t.c, &t.d]);
        let length = utils::point_cloud_bounds(vertices)
            .map(|(mins, maxs)| (maxs - mins).max())
            .unwrap_or(0.0);
        let decomposition = mass_properties::try_tetrahedra_volume_and_center(
            &ws.tet_decomp,
            self.options.volume_epsilon * length.powi(3),
        );

        match decomposition {
            Ok((volume, center)) => {
                ws.cell = Some(cell);
                ws.cell_volume = volume;
                ws.cell_center = center;
                ws.cell_length = length;
                Ok(())
            }
            Err(err) => {
                ws.clear();
                Err(err)
            }
        }
    }

    /// Clips the `cell`-th cell by `plane` and integrates the part of the cell inside it.
    ///
    /// The clipped tetrahedra and the cut triangles are kept in `ws`, see
    /// [`MofWorkspace::clipped_tets`] and [`MofWorkspace::surface_triangles`].
    pub fn evaluate(
        &self,
        ws: &mut MofWorkspace,
        cell: usize,
        plane: &Plane,
    ) -> Result<PlaneEvaluation, MofError> {
        self.decompose_cell(ws, cell)?;
        Ok(self.evaluate_cached(ws, plane))
    }

    /// The triangles covering the part of the plane through `point` with normal `normal`
    /// lying inside the `cell`-th cell.
    pub fn plane_patch<'w>(
        &self,
        ws: &'w mut MofWorkspace,
        cell: usize,
        point: &Point<Real>,
        normal: &Vector<Real>,
    ) -> Result<&'w [Triangle], MofError> {
        let normal = self.check_normal(normal)?;
        self.decompose_cell(ws, cell)?;
        ws.clip_decomposition(&Plane::from_point_and_normal(point, normal));
        Ok(ws.surface_triangles())
    }

    pub(crate) fn evaluate_cached(&self, ws: &mut MofWorkspace, plane: &Plane) -> PlaneEvaluation {
        ws.clip_decomposition(plane);
        let epsilon = self.volume_epsilon(ws);
        let (volume, center) = mass_properties::tetrahedra_volume_and_center(&ws.clipped_tets, epsilon);

        PlaneEvaluation {
            volume,
            fraction: volume / ws.cell_volume,
            center,
        }
    }

    pub(crate) fn volume_epsilon(&self, ws: &MofWorkspace) -> Real {
        self.options.volume_epsilon * ws.cell_length.powi(3)
    }

    pub(crate) fn check_fraction(&self, fraction: Real) -> Result<(), MofError> {
        if (0.0..=1.0).contains(&fraction) {
            Ok(())
        } else {
            Err(MofError::InvalidFraction(fraction))
        }
    }

    pub(crate) fn check_normal(&self, normal: &Vector<Real>) -> Result<UnitVector<Real>, MofError> {
        let norm = normal.norm();

        if (norm - 1.0).abs() <= self.options.unit_normal_tolerance {
            Ok(Unit::new_normalize(*normal))
        } else {
            Err(MofError::NonUnitNormal(norm))
        }
    }
}
