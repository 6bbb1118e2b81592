use crate::math::{Point, Real, Vector};
use crate::mof::{MofError, MofWorkspace, MomentOfFluid};
use crate::shape::{CellMesh, Triangle};
use obj::{Group, IndexTuple, ObjData, ObjError, Object, SimplePolygon};
use std::path::Path;

/// Errors raised while exporting a plane patch to a Wavefront file.
#[derive(thiserror::Error, Debug)]
pub enum ObjExportError {
    /// The plane patch could not be computed.
    #[error(transparent)]
    Mof(#[from] MofError),
    /// The file could not be written.
    #[error("failed to write the obj file: {0:?}")]
    Obj(ObjError),
}

impl From<ObjError> for ObjExportError {
    fn from(err: ObjError) -> Self {
        Self::Obj(err)
    }
}

/// Outputs a set of triangles to a Wavefront (`.obj`) file at the given path.
///
/// Every triangle gets its own three vertices. This function is enabled by the `wavefront`
/// feature flag.
pub fn triangles_to_obj_file(triangles: &[Triangle], path: &Path) -> Result<(), ObjError> {
    let mut file = std::fs::File::create(path).map_err(ObjError::Io)?;

    ObjData {
        position: triangles
            .iter()
            .flat_map(|tri| tri.vertices())
            .map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect(),
        objects: vec![Object {
            groups: vec![Group {
                polys: (0..triangles.len())
                    .map(|i| {
                        SimplePolygon(vec![
                            IndexTuple(3 * i, None, None),
                            IndexTuple(3 * i + 1, None, None),
                            IndexTuple(3 * i + 2, None, None),
                        ])
                    })
                    .collect(),
                name: "".to_string(),
                index: 0,
                material: None,
            }],
            name: "".to_string(),
        }],
        ..Default::default()
    }
    .write_to_buf(&mut file)
}

impl MofWorkspace {
    /// Outputs the cut surface of the last evaluated plane to a Wavefront (`.obj`) file.
    ///
    /// This function is enabled by the `wavefront` feature flag.
    pub fn surface_to_obj_file(&self, path: &Path) -> Result<(), ObjError> {
        triangles_to_obj_file(self.surface_triangles(), path)
    }
}

impl<M: CellMesh + ?Sized> MomentOfFluid<'_, M> {
    /// Outputs the part of the plane through `point` with normal `normal` lying inside the
    /// `cell`-th cell to a Wavefront (`.obj`) file.
    ///
    /// This function is enabled by the `wavefront` feature flag.
    pub fn plane_to_obj_file(
        &self,
        ws: &mut MofWorkspace,
        cell: usize,
        point: &Point<Real>,
        normal: &Vector<Real>,
        path: &Path,
    ) -> Result<(), ObjExportError> {
        let patch = self.plane_patch(ws, cell, point, normal)?;
        triangles_to_obj_file(patch, path)?;
        Ok(())
    }
}
