use crate::math::{Point, Real};
use crate::mof::MofError;
use crate::shape::{CellMesh, Tetrahedron};
use crate::utils;
use smallvec::SmallVec;

/// Decomposes the `cell`-th cell of `mesh` into tetrahedra sharing the vertex `apex`.
///
/// Every face is fan-triangulated from its first vertex, and each triangle is joined to
/// `apex` to form one tetrahedron. The tetrahedra are appended to `out` in face order, then
/// in fan order. For a cell star-shaped with respect to `apex` (in particular any convex cell
/// with `apex` inside), their volumes add up exactly to the volume of the cell.
///
/// Fails without modifying `out` if the cell does not exist or if one of its faces has less
/// than three vertices.
pub fn decompose_cell<M: CellMesh + ?Sized>(
    mesh: &M,
    cell: usize,
    apex: &Point<Real>,
    out: &mut Vec<Tetrahedron>,
) -> Result<(), MofError> {
    check_cell_index(mesh, cell)?;

    let points = mesh.points();
    let faces = mesh.cell_faces(cell);

    for face in faces {
        let num_vertices = mesh.face_vertices(*face as usize).len();
        if num_vertices < 3 {
            return Err(MofError::DegenerateFace {
                cell,
                face: *face as usize,
                num_vertices,
            });
        }
    }

    for face in faces {
        let vids = mesh.face_vertices(*face as usize);
        let p0 = points[vids[0] as usize];

        for w in vids[1..].windows(2) {
            out.push(Tetrahedron::new(
                *apex,
                p0,
                points[w[0] as usize],
                points[w[1] as usize],
            ));
        }
    }

    Ok(())
}

/// The apex used to decompose the `cell`-th cell of `mesh` into tetrahedra.
///
/// This is the center provided by the mesh if there is one, and the mean of the distinct
/// vertices of the cell otherwise.
pub fn cell_apex<M: CellMesh + ?Sized>(mesh: &M, cell: usize) -> Result<Point<Real>, MofError> {
    check_cell_index(mesh, cell)?;

    if let Some(center) = mesh.cell_center(cell) {
        return Ok(center);
    }

    let mut vids: SmallVec<[u32; 16]> = SmallVec::new();
    for face in mesh.cell_faces(cell) {
        vids.extend_from_slice(mesh.face_vertices(*face as usize));
    }
    vids.sort_unstable();
    vids.dedup();

    if vids.is_empty() {
        return Err(MofError::DegenerateFace {
            cell,
            face: mesh.cell_faces(cell).first().copied().unwrap_or(0) as usize,
            num_vertices: 0,
        });
    }

    let points = mesh.points();
    let pts: SmallVec<[Point<Real>; 16]> = vids.iter().map(|i| points[*i as usize]).collect();
    Ok(utils::center(&pts))
}

fn check_cell_index<M: CellMesh + ?Sized>(mesh: &M, cell: usize) -> Result<(), MofError> {
    if cell < mesh.num_cells() {
        Ok(())
    } else {
        Err(MofError::CellOutOfBounds {
            cell,
            num_cells: mesh.num_cells(),
        })
    }
}
