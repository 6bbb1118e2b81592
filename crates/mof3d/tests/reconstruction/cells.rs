use mof3d::math::{Matrix, Point, Real, Vector};
use mof3d::shape::{PolyhedralMesh, Tetrahedron};

/// The faces of a hexahedron whose vertex `i + 2j + 4k` is the corner `(i, j, k)`.
const HEX_FACES: [[u32; 4]; 6] = [
    [0, 2, 6, 4],
    [1, 3, 7, 5],
    [0, 4, 5, 1],
    [2, 6, 7, 3],
    [0, 1, 3, 2],
    [4, 5, 7, 6],
];

/// The faces of a hexahedron whose first vertex is `base`.
pub fn hex_faces(base: u32) -> Vec<Vec<u32>> {
    HEX_FACES
        .iter()
        .map(|f| f.iter().map(|v| v + base).collect())
        .collect()
}

/// The image of the unit cube by `x ↦ linear * x + translation`, and its volume.
pub fn parallelepiped(linear: &Matrix<Real>, translation: &Vector<Real>) -> (PolyhedralMesh, Real) {
    let points = (0..8)
        .map(|i| {
            let corner = Vector::new((i & 1) as Real, ((i >> 1) & 1) as Real, (i >> 2) as Real);
            Point::from(linear * corner + translation)
        })
        .collect();
    let mesh = PolyhedralMesh::new(points, hex_faces(0), vec![(0..6).collect()]).unwrap();

    (mesh, linear.determinant().abs())
}

/// A parallelepiped built from nine numbers in `[-0.3, 0.3]` perturbing the identity.
pub fn skewed_parallelepiped(entries: &[Real; 9], translation: &[Real; 3]) -> (PolyhedralMesh, Real) {
    let linear = Matrix::identity() + Matrix::from_row_slice(entries);
    parallelepiped(&linear, &Vector::from(*translation))
}

/// A random tetrahedron with a volume bounded away from zero.
pub fn random_tetrahedron(rng: &mut oorandom::Rand64) -> Tetrahedron {
    loop {
        let mut point = || {
            Point::new(
                rng.rand_float() * 4.0 - 2.0,
                rng.rand_float() * 4.0 - 2.0,
                rng.rand_float() * 4.0 - 2.0,
            )
        };
        let tet = Tetrahedron::new(point(), point(), point(), point());

        if tet.volume() > 0.1 {
            return tet;
        }
    }
}

/// A random unit vector.
pub fn random_direction(rng: &mut oorandom::Rand64) -> Vector<Real> {
    loop {
        let dir = Vector::from_fn(|_, _| rng.rand_float() * 2.0 - 1.0);
        let norm = dir.norm();

        if norm > 0.1 && norm <= 1.0 {
            return dir / norm;
        }
    }
}
