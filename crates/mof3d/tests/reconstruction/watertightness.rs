use crate::cells;
use mof3d::math::Vector;
use mof3d::mof::{MofWorkspace, MomentOfFluid};
use mof3d::shape::{CellMesh, Plane, PolyhedralMesh};
use mof3d::utils;
use proptest::prelude::*;

fn clip_volumes(mesh: &PolyhedralMesh, plane: &Plane) -> (f64, f64) {
    let mof = MomentOfFluid::new(mesh);
    let mut ws = MofWorkspace::new();

    let inside = mof.evaluate(&mut ws, 0, plane).unwrap().volume;
    let outside = mof.evaluate(&mut ws, 0, &plane.flipped()).unwrap().volume;
    (inside, outside)
}

proptest! {
    #[test]
    fn complementary_clips_partition_parallelepipeds(
        entries in prop::array::uniform9(-0.3f64..0.3),
        translation in prop::array::uniform3(-10.0f64..10.0),
        dir in prop::array::uniform3(-1.0f64..1.0),
        t in 0.0f64..1.0,
    ) {
        let (mesh, volume) = cells::skewed_parallelepiped(&entries, &translation);
        let normal = Vector::from(dir);
        prop_assume!(normal.norm() > 1.0e-3);
        let normal = normal.normalize();

        let (min, max) = utils::point_cloud_extents_on_dir(&normal, mesh.points()).unwrap();
        let plane = Plane::try_new(normal, min + (max - min) * t).unwrap();
        let (inside, outside) = clip_volumes(&mesh, &plane);

        prop_assert!(inside >= 0.0 && outside >= 0.0);
        prop_assert!(
            (inside + outside - volume).abs() <= 1.0e-10 * volume,
            "inside: {}, outside: {}, volume: {}", inside, outside, volume
        );
    }
}

#[test]
fn complementary_clips_partition_random_tetrahedra() {
    let mut rng = oorandom::Rand64::new(42);

    for _ in 0..200 {
        let tet = cells::random_tetrahedron(&mut rng);
        let mesh = PolyhedralMesh::from_tetrahedron(&tet);
        let normal = cells::random_direction(&mut rng);
        let (min, max) = utils::point_cloud_extents_on_dir(&normal, &tet.vertices()).unwrap();
        let offset = min + (max - min) * rng.rand_float();

        let (inside, outside) = clip_volumes(&mesh, &Plane::try_new(normal, offset).unwrap());
        assert_relative_eq!(inside + outside, tet.volume(), epsilon = 1.0e-12 * tet.volume());
    }
}

#[test]
fn planes_through_vertices_are_watertight() {
    // Planes touching the decomposition vertices exercise the boundary-inclusive tie-break.
    let mesh = PolyhedralMesh::cuboid([0.0, 0.0, 0.0].into(), [1.0, 1.0, 1.0].into());

    for (normal, offset) in [
        (Vector::x(), 0.0),
        (Vector::x(), 0.5),
        (Vector::new(1.0, 1.0, 0.0), 1.0),
        (Vector::new(1.0, 1.0, 1.0), 1.5),
        (Vector::new(0.0, -1.0, 1.0), 0.0),
    ] {
        let plane = Plane::try_new(normal, offset).unwrap();
        let (inside, outside) = clip_volumes(&mesh, &plane);
        assert_relative_eq!(inside + outside, 1.0, epsilon = 1.0e-14);
    }
}
