use crate::cells;
use mof3d::math::{Point, Vector};
use mof3d::mof::{MofError, MofWorkspace, MomentOfFluid};
use mof3d::na::Vector2;
use mof3d::optimization::{Bfgs, BfgsOptions, BfgsStatus};
use mof3d::shape::PolyhedralMesh;

#[test]
fn cell_centroid_reference_stays_below_the_axis_aligned_objective() {
    let mesh = PolyhedralMesh::cuboid(Point::origin(), Point::new(1.0, 1.0, 1.0));
    let mof = MomentOfFluid::new(&mesh);
    let mut ws = MofWorkspace::new();

    // Every half-cube centroid is away from the cube centroid, an axis-aligned cut is 1/4 away.
    let result = mof
        .optimize_centroid(&mut ws, 0, 0.5, &Point::new(0.5, 0.5, 0.5))
        .unwrap();

    assert!(result.objective <= 0.0625 + 1.0e-9, "{}", result.objective);
    assert!(result.objective > 0.0);
    assert_relative_eq!(result.fraction, 0.5, epsilon = 1.0e-10);
    assert_relative_eq!(result.normal.norm(), 1.0, epsilon = 1.0e-12);
}

#[test]
fn tilted_plane_is_recovered_from_its_moments() {
    let mesh = PolyhedralMesh::cuboid(Point::origin(), Point::new(1.0, 1.0, 1.0));
    let mof = MomentOfFluid::new(&mesh);
    let mut ws = MofWorkspace::new();

    let expected = Vector::new(1.0, 2.0, 3.0).normalize();
    let reference = mof
        .match_fraction(&mut ws, 0, 0.3, &expected, None)
        .unwrap()
        .converged()
        .unwrap();

    let result = mof
        .optimize_centroid(&mut ws, 0, 0.3, &reference.center)
        .unwrap();

    assert!(result.objective <= 1.0e-10, "{}", result.objective);
    assert!(result.normal.dot(&expected) >= 1.0 - 1.0e-4);
    assert_relative_eq!(result.offset, reference.offset, epsilon = 1.0e-3);
    assert_relative_eq!(result.fraction, 0.3, epsilon = 1.0e-10);
    assert_relative_eq!(result.plane().normal.into_inner(), *result.normal);
}

#[test]
fn tilted_plane_is_recovered_in_a_skewed_cell() {
    let (mesh, _) =
        cells::skewed_parallelepiped(&[0.2, -0.1, 0.0, 0.1, 0.1, 0.2, 0.0, -0.2, 0.1], &[3.0, -1.0, 2.0]);
    let mof = MomentOfFluid::new(&mesh);
    let mut ws = MofWorkspace::new();

    let expected = Vector::new(-1.0, 0.5, 0.2).normalize();
    let reference = mof
        .match_fraction(&mut ws, 0, 0.6, &expected, None)
        .unwrap()
        .converged()
        .unwrap();

    let result = mof
        .optimize_centroid(&mut ws, 0, 0.6, &reference.center)
        .unwrap();

    assert!(result.objective <= 1.0e-9, "{}", result.objective);
    assert!(result.normal.dot(&expected) >= 1.0 - 1.0e-4);
}

#[test]
fn bfgs_forwards_reconstruction_errors() {
    let bfgs = Bfgs::new(BfgsOptions::default());

    let mut bowl = |x: &Vector2<f64>| {
        let shifted = x - Vector2::new(0.3, -0.7);
        Ok::<_, MofError>((shifted.norm_squared(), 2.0 * shifted))
    };
    let result = bfgs.minimize(&mut bowl, &Vector2::zeros()).unwrap();
    assert!(result.status.is_converged());
    assert_relative_eq!(result.x, Vector2::new(0.3, -0.7), epsilon = 1.0e-8);

    let mut failing = |_: &Vector2<f64>| -> Result<(f64, Vector2<f64>), MofError> {
        Err(MofError::EmptyRegion { volume: 0.0 })
    };
    assert_eq!(
        bfgs.minimize(&mut failing, &Vector2::zeros()).map(|r| r.status),
        Err::<BfgsStatus, _>(MofError::EmptyRegion { volume: 0.0 })
    );
}
