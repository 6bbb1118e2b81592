use crate::cells;
use mof3d::math::{Point, Vector};
use mof3d::mof::{FractionMatchStatus, MofError, MofOptions, MofWorkspace, MomentOfFluid, OffsetBounds};
use mof3d::shape::{Plane, PolyhedralMesh, Tetrahedron};
use mof3d::utils;

fn unit_cube() -> PolyhedralMesh {
    PolyhedralMesh::cuboid(Point::origin(), Point::new(1.0, 1.0, 1.0))
}

#[test]
fn corner_prism_of_the_unit_cube() {
    let mesh = unit_cube();
    let mof = MomentOfFluid::new(&mesh);
    let mut ws = MofWorkspace::new();

    // x + y >= 1.5 cuts a triangular prism of volume 1/8.
    let normal = Vector::new(1.0, 1.0, 0.0).normalize();
    let result = mof.match_fraction(&mut ws, 0, 0.125, &normal, None).unwrap();

    assert_eq!(result.status, FractionMatchStatus::Converged);
    assert_relative_eq!(result.fraction, 0.125, epsilon = 1.0e-12);
    assert_relative_eq!(result.offset, 1.5 / 2.0f64.sqrt(), epsilon = 1.0e-10);
    assert_relative_eq!(
        result.center,
        Point::new(5.0 / 6.0, 5.0 / 6.0, 0.5),
        epsilon = 1.0e-6
    );
    assert_relative_eq!(result.span, 2.0f64.sqrt(), epsilon = 1.0e-14);
}

#[test]
fn corner_of_the_unit_tetrahedron() {
    let tet = Tetrahedron::new(
        Point::origin(),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    );
    let mesh = PolyhedralMesh::from_tetrahedron(&tet);
    let mof = MomentOfFluid::new(&mesh);
    let mut ws = MofWorkspace::new();

    // x + y + z <= s encloses the fraction s³ of the tetrahedron.
    let s = 0.5f64.powf(1.0 / 3.0);
    let normal = -Vector::repeat(1.0).normalize();
    let result = mof.match_fraction(&mut ws, 0, 0.5, &normal, None).unwrap();

    assert!(result.is_converged());
    assert_relative_eq!(result.offset, -s / 3.0f64.sqrt(), epsilon = 1.0e-10);
    assert_relative_eq!(result.center, Point::new(s, s, s) / 4.0, epsilon = 1.0e-8);

    // x + y + z >= s keeps the frustum opposite to the corner.
    let normal = Vector::repeat(1.0).normalize();
    let result = mof.match_fraction(&mut ws, 0, 0.5, &normal, None).unwrap();
    let frustum = 0.5 - 0.25 * s;

    assert!(result.is_converged());
    assert_relative_eq!(result.offset, s / 3.0f64.sqrt(), epsilon = 1.0e-6);
    assert_relative_eq!(
        result.center,
        Point::new(frustum, frustum, frustum),
        epsilon = 1.0e-6
    );
}

#[test]
fn fractions_of_random_planes_are_recovered() {
    let mut rng = oorandom::Rand64::new(1234);

    for _ in 0..100 {
        let tet = cells::random_tetrahedron(&mut rng);
        let mesh = PolyhedralMesh::from_tetrahedron(&tet);
        let mof = MomentOfFluid::new(&mesh);
        let mut ws = MofWorkspace::new();

        let normal = cells::random_direction(&mut rng);
        let (min, max) = utils::point_cloud_extents_on_dir(&normal, &tet.vertices()).unwrap();
        let offset = min + (max - min) * (0.2 + 0.6 * rng.rand_float());
        let plane = Plane::try_new(normal, offset).unwrap();
        let expected = mof.evaluate(&mut ws, 0, &plane).unwrap();

        let result = mof
            .match_fraction(&mut ws, 0, expected.fraction, &normal, None)
            .unwrap()
            .converged()
            .unwrap();

        assert_relative_eq!(result.fraction, expected.fraction, epsilon = 1.0e-12);
        assert_relative_eq!(result.offset, offset, epsilon = 1.0e-8 * (max - min));
        assert_relative_eq!(result.center, expected.center, epsilon = 1.0e-6);
    }
}

#[test]
fn trivial_fractions_skip_the_bisection() {
    let mesh = unit_cube();
    let mof = MomentOfFluid::new(&mesh);
    let mut ws = MofWorkspace::new();

    let empty = mof.match_fraction(&mut ws, 0, 0.0, &Vector::x(), None).unwrap();
    assert_eq!(empty.status, FractionMatchStatus::Trivial);
    assert_eq!(empty.iterations, 0);
    assert_eq!(empty.fraction, 0.0);
    assert_relative_eq!(empty.offset, 1.0, epsilon = 1.0e-14);
    assert_eq!(empty.center, Point::origin());

    let full = mof.match_fraction(&mut ws, 0, 1.0, &Vector::x(), None).unwrap();
    assert_eq!(full.status, FractionMatchStatus::Trivial);
    assert_eq!(full.iterations, 0);
    assert_eq!(full.fraction, 1.0);
    assert_relative_eq!(full.offset, 0.0, epsilon = 1.0e-14);
    assert_relative_eq!(full.center, Point::new(0.5, 0.5, 0.5), epsilon = 1.0e-14);
}

#[test]
fn unreachable_target_stalls_within_the_bounds() {
    let mesh = unit_cube();
    let mof = MomentOfFluid::new(&mesh);
    let mut ws = MofWorkspace::new();

    // No offset in [0.8, 0.9] leaves half of the cube above the plane.
    let bounds = OffsetBounds::new(0.8, 0.9);
    let result = mof
        .match_fraction(&mut ws, 0, 0.5, &Vector::z(), Some(bounds))
        .unwrap();

    assert_eq!(result.status, FractionMatchStatus::Stalled);
    assert!(!result.is_converged());
    assert!(result.offset >= 0.8 && result.offset <= 0.9);
    assert_relative_eq!(result.offset, 0.8, epsilon = 1.0e-12);
    assert_relative_eq!(result.fraction, 0.2, epsilon = 1.0e-12);
    assert!(result.iterations <= mof.options().max_bisection_iterations);
    assert_eq!(
        result.converged(),
        Err(MofError::NotConverged {
            iterations: result.iterations
        })
    );
}

#[test]
fn iteration_cap_returns_the_best_offset() {
    let mesh = unit_cube();
    let options = MofOptions {
        max_bisection_iterations: 3,
        ..MofOptions::default()
    };
    let mof = MomentOfFluid::with_options(&mesh, options);
    let mut ws = MofWorkspace::new();

    // Offsets 0.5, 0.75 and 0.625 are tried, 0.75 is the closest to the target.
    let result = mof.match_fraction(&mut ws, 0, 0.3, &Vector::z(), None).unwrap();

    assert_eq!(result.status, FractionMatchStatus::OutOfIterations);
    assert_eq!(result.iterations, 3);
    assert_relative_eq!(result.offset, 0.75, epsilon = 1.0e-14);
    assert_relative_eq!(result.fraction, 0.25, epsilon = 1.0e-12);
    assert!(result.converged().is_err());
}

#[test]
fn invalid_inputs_are_rejected() {
    let mesh = unit_cube();
    let mof = MomentOfFluid::new(&mesh);
    let mut ws = MofWorkspace::new();

    assert_eq!(
        mof.match_fraction(&mut ws, 0, 1.5, &Vector::x(), None),
        Err(MofError::InvalidFraction(1.5))
    );
    assert_eq!(
        mof.match_fraction(&mut ws, 0, -0.1, &Vector::x(), None),
        Err(MofError::InvalidFraction(-0.1))
    );
    assert_eq!(
        mof.match_fraction(&mut ws, 0, 0.5, &Vector::new(0.0, 0.0, 2.0), None),
        Err(MofError::NonUnitNormal(2.0))
    );
    assert_eq!(
        mof.match_fraction(&mut ws, 0, 0.5, &Vector::x(), Some(OffsetBounds::new(1.0, 0.0))),
        Err(MofError::InvalidBounds { min: 1.0, max: 0.0 })
    );
    assert!(matches!(
        mof.match_fraction(
            &mut ws,
            0,
            0.5,
            &Vector::x(),
            Some(OffsetBounds::new(0.0, f64::INFINITY))
        ),
        Err(MofError::InvalidBounds { .. })
    ));
    assert_eq!(
        mof.match_fraction(&mut ws, 3, 0.5, &Vector::x(), None),
        Err(MofError::CellOutOfBounds {
            cell: 3,
            num_cells: 1
        })
    );
}
