use crate::cells;
use mof3d::math::Vector;
use mof3d::mof::{MofWorkspace, MomentOfFluid};
use mof3d::shape::{CellMesh, Plane, PolyhedralMesh};
use mof3d::utils;
use proptest::prelude::*;

proptest! {
    #[test]
    fn enclosed_fraction_decreases_with_the_offset(
        entries in prop::array::uniform9(-0.3f64..0.3),
        dir in prop::array::uniform3(-1.0f64..1.0),
        offsets in prop::collection::vec(0.0f64..1.0, 2..12),
    ) {
        let (mesh, _) = cells::skewed_parallelepiped(&entries, &[0.0; 3]);
        let normal = Vector::from(dir);
        prop_assume!(normal.norm() > 1.0e-3);
        let normal = normal.normalize();

        let mof = MomentOfFluid::new(&mesh);
        let mut ws = MofWorkspace::new();
        let (min, max) = utils::point_cloud_extents_on_dir(&normal, mesh.points()).unwrap();

        let mut ts = offsets;
        ts.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let fractions: Vec<f64> = ts
            .iter()
            .map(|t| {
                let plane = Plane::try_new(normal, min + (max - min) * t).unwrap();
                mof.evaluate(&mut ws, 0, &plane).unwrap().fraction
            })
            .collect();

        for pair in fractions.windows(2) {
            prop_assert!(pair[1] <= pair[0] + 1.0e-12, "{:?}", fractions);
        }
        prop_assert!(fractions.iter().all(|f| (-1.0e-12..=1.0 + 1.0e-12).contains(f)));
    }
}

#[test]
fn extreme_offsets_enclose_everything_or_nothing() {
    let mut rng = oorandom::Rand64::new(7);

    for _ in 0..50 {
        let tet = cells::random_tetrahedron(&mut rng);
        let mesh = PolyhedralMesh::from_tetrahedron(&tet);
        let mof = MomentOfFluid::new(&mesh);
        let mut ws = MofWorkspace::new();
        let normal = cells::random_direction(&mut rng);
        let (min, max) = utils::point_cloud_extents_on_dir(&normal, &tet.vertices()).unwrap();

        let full = mof
            .evaluate(&mut ws, 0, &Plane::try_new(normal, min).unwrap())
            .unwrap();
        let empty = mof
            .evaluate(&mut ws, 0, &Plane::try_new(normal, max + 1.0e-9).unwrap())
            .unwrap();

        assert_relative_eq!(full.fraction, 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(full.center, tet.center(), epsilon = 1.0e-10);
        assert_eq!(empty.fraction, 0.0);
    }
}
