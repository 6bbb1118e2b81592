use crate::cells;
use mof3d::math::{Point, Real, Vector};
use mof3d::mof::{CellInterface, MofError, MofWorkspace, MomentOfFluid};
use mof3d::na::Unit;
use mof3d::shape::{CellMesh, Plane, PolyhedralMesh};

/// The volume fraction and centroid of the part of every cell of `mesh` inside `plane`.
fn cell_moments(
    mof: &MomentOfFluid<PolyhedralMesh>,
    plane: &Plane,
) -> (Vec<Real>, Vec<Point<Real>>) {
    let mut ws = MofWorkspace::new();
    let mut fractions = vec![];
    let mut centers = vec![];

    for cell in 0..mof.mesh().num_cells() {
        let eval = mof.evaluate(&mut ws, cell, plane).unwrap();
        let fraction = if eval.fraction < 1.0e-9 {
            0.0
        } else if eval.fraction > 1.0 - 1.0e-9 {
            1.0
        } else {
            eval.fraction
        };
        fractions.push(fraction);
        centers.push(eval.center);
    }

    (fractions, centers)
}

#[test]
fn planar_interface_is_recovered_on_a_grid() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mesh = PolyhedralMesh::structured_grid(Point::origin(), Vector::repeat(1.0), [3, 3, 1]);
    let mof = MomentOfFluid::new(&mesh);
    let normal = Vector::new(1.0, 0.6, 0.3).normalize();
    let plane = Plane::from_point_and_normal(&Point::new(1.6, 1.4, 0.5), Unit::new_unchecked(normal));

    let (fractions, centers) = cell_moments(&mof, &plane);
    let mut ws = MofWorkspace::new();
    let result = mof.construct_interface(&mut ws, &fractions, &centers).unwrap();

    assert_eq!(result.cells.len(), 9);
    assert_eq!(result.failed_cells().count(), 0);
    assert!(result.num_mixed() > 0);

    for (cell, interface) in result.cells.iter().enumerate() {
        match interface {
            CellInterface::Empty => assert_eq!(fractions[cell], 0.0),
            CellInterface::Full => assert_eq!(fractions[cell], 1.0),
            CellInterface::Mixed(found) => {
                assert_relative_eq!(found.fraction, fractions[cell], epsilon = 1.0e-10);

                if fractions[cell] > 0.05 && fractions[cell] < 0.95 {
                    assert!(
                        found.normal.dot(&normal) >= 1.0 - 1.0e-4,
                        "cell {}: {:?}",
                        cell,
                        found.normal
                    );
                    assert!(found.objective <= 1.0e-10);
                }
            }
            CellInterface::Failed { error } => panic!("cell {} failed: {}", cell, error),
        }
    }
}

#[test]
fn a_failing_cell_does_not_stop_the_batch() {
    let mut points: Vec<_> = (0..8)
        .map(|i| Point::new((i & 1) as Real, ((i >> 1) & 1) as Real, (i >> 2) as Real))
        .collect();
    points.extend(points.clone().iter().map(|p| p + Vector::x() * 2.0));

    let mut faces = cells::hex_faces(0);
    faces.extend(cells::hex_faces(8));
    faces.push(vec![8, 9]);
    let mesh = PolyhedralMesh::new(
        points,
        faces,
        vec![(0..6).collect(), (6..13).collect(), (6..12).collect()],
    )
    .unwrap();
    let mof = MomentOfFluid::new(&mesh);
    let mut ws = MofWorkspace::new();

    // The lower 40% of the first and last cells.
    let fractions = [0.4, 0.4, 0.4];
    let centers = [
        Point::new(0.5, 0.5, 0.2),
        Point::new(2.5, 0.5, 0.2),
        Point::new(2.5, 0.5, 0.2),
    ];
    let result = mof.construct_interface(&mut ws, &fractions, &centers).unwrap();

    let failed: Vec<_> = result.failed_cells().collect();
    assert_eq!(
        failed,
        vec![(
            1,
            &MofError::DegenerateFace {
                cell: 1,
                face: 12,
                num_vertices: 2
            }
        )]
    );
    assert!(result.cells[1].is_failed());
    assert_eq!(result.cells[1].plane(), None);
    assert_eq!(result.num_mixed(), 2);

    for cell in [0, 2] {
        let plane = result.cells[cell].plane().unwrap();
        assert_relative_eq!(plane.normal.into_inner(), -Vector::z(), epsilon = 1.0e-5);
        assert_relative_eq!(plane.offset, -0.4, epsilon = 1.0e-6);
    }
}
