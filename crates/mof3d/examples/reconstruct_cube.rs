use mof3d::math::{Point, Vector};
use mof3d::mof::{CellInterface, MofWorkspace, MomentOfFluid};
use mof3d::na::Unit;
use mof3d::shape::{CellMesh, Plane, PolyhedralMesh};

fn main() {
    env_logger::init();

    // A 4x4x4 grid of unit cells cut by an inclined plane.
    let mesh = PolyhedralMesh::structured_grid(Point::origin(), Vector::repeat(1.0), [4, 4, 4]);
    let mof = MomentOfFluid::new(&mesh);
    let mut ws = MofWorkspace::new();

    let normal = Unit::new_normalize(Vector::new(0.3, -0.5, 1.0));
    let plane = Plane::from_point_and_normal(&Point::new(2.0, 2.0, 2.1), normal);

    let mut fractions = Vec::with_capacity(mesh.num_cells());
    let mut centers = Vec::with_capacity(mesh.num_cells());
    for cell in 0..mesh.num_cells() {
        let eval = mof.evaluate(&mut ws, cell, &plane).unwrap();
        fractions.push(eval.fraction.clamp(0.0, 1.0));
        centers.push(eval.center);
    }

    let result = mof.construct_interface(&mut ws, &fractions, &centers).unwrap();

    for (cell, interface) in result.cells.iter().enumerate() {
        if let CellInterface::Mixed(found) = interface {
            println!(
                "cell {:2}: fraction = {:.4}, normal = [{:+.6}, {:+.6}, {:+.6}], objective = {:.3e}, status = {:?}",
                cell,
                found.fraction,
                found.normal.x,
                found.normal.y,
                found.normal.z,
                found.objective,
                found.status
            );
        }
    }

    println!(
        "{} mixed cells, {} converged, {} failed.",
        result.num_mixed(),
        result.num_converged(),
        result.failed_cells().count()
    );

    #[cfg(feature = "wavefront")]
    {
        let cell = result
            .cells
            .iter()
            .position(|c| matches!(c, CellInterface::Mixed(_)))
            .unwrap();
        let found = result.cells[cell].plane().unwrap();
        mof.plane_to_obj_file(
            &mut ws,
            cell,
            &found.origin(),
            &found.normal,
            std::path::Path::new("interface.obj"),
        )
        .unwrap();
        println!("Wrote the interface of the cell {} to interface.obj.", cell);
    }
}
