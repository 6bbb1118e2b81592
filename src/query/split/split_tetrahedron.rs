use crate::math::{Point, Real};
use crate::query::SplitResult;
use crate::shape::{Plane, Tetrahedron, Triangle};
use arrayvec::ArrayVec;

/// Logical description of the location of the vertices of a tetrahedron relative to a plane.
///
/// Vertex indices follow the order `[a, b, c, d]` of the tetrahedron, and every index list is
/// sorted in increasing order. A vertex is inside if its signed distance to the plane is
/// positive or zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TetrahedronPlaneLocation {
    /// All the vertices are outside.
    Outside,
    /// Only the vertex `inside` is inside.
    OneInside {
        /// The inside vertex.
        inside: usize,
        /// The outside vertices.
        outside: [usize; 3],
    },
    /// Two vertices are inside and two are outside.
    TwoInside {
        /// The inside vertices.
        inside: [usize; 2],
        /// The outside vertices.
        outside: [usize; 2],
    },
    /// Only the vertex `outside` is outside.
    ThreeInside {
        /// The inside vertices.
        inside: [usize; 3],
        /// The outside vertex.
        outside: usize,
    },
    /// All the vertices are inside.
    Inside,
}

impl TetrahedronPlaneLocation {
    /// Classifies the four vertices from their signed distances to the plane.
    pub fn from_signed_distances(dists: &[Real; 4]) -> Self {
        let mut inside = ArrayVec::<usize, 4>::new();
        let mut outside = ArrayVec::<usize, 4>::new();

        for (i, dist) in dists.iter().enumerate() {
            if *dist >= 0.0 {
                inside.push(i);
            } else {
                outside.push(i);
            }
        }

        match inside.len() {
            0 => Self::Outside,
            1 => Self::OneInside {
                inside: inside[0],
                outside: [outside[0], outside[1], outside[2]],
            },
            2 => Self::TwoInside {
                inside: [inside[0], inside[1]],
                outside: [outside[0], outside[1]],
            },
            3 => Self::ThreeInside {
                inside: [inside[0], inside[1], inside[2]],
                outside: outside[0],
            },
            _ => Self::Inside,
        }
    }

    /// The number of vertices lying inside.
    pub fn num_inside(&self) -> usize {
        match self {
            Self::Outside => 0,
            Self::OneInside { .. } => 1,
            Self::TwoInside { .. } => 2,
            Self::ThreeInside { .. } => 3,
            Self::Inside => 4,
        }
    }
}

/// The part of a tetrahedron lying inside a plane.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TetrahedronClip {
    /// Tetrahedra exactly covering the inside part of the clipped tetrahedron.
    pub tets: ArrayVec<Tetrahedron, 3>,
    /// Triangles covering the section of the tetrahedron by the plane.
    ///
    /// They are oriented with their normal pointing away from the inside part.
    pub cut: ArrayVec<Triangle, 2>,
}

impl TetrahedronClip {
    /// The volume of the inside part.
    pub fn volume(&self) -> Real {
        self.tets.iter().map(|tet| tet.volume()).sum()
    }
}

impl Tetrahedron {
    /// The signed distances from each vertex to `plane`, in the order `[a, b, c, d]`.
    #[inline]
    pub fn plane_signed_distances(&self, plane: &Plane) -> [Real; 4] {
        self.vertices().map(|pt| plane.signed_distance(&pt))
    }

    /// Locates the vertices of this tetrahedron relative to `plane`.
    #[inline]
    pub fn locate_plane(&self, plane: &Plane) -> TetrahedronPlaneLocation {
        TetrahedronPlaneLocation::from_signed_distances(&self.plane_signed_distances(plane))
    }

    /// Computes the part of this tetrahedron lying inside `plane`.
    ///
    /// The inside part is decomposed into at most three tetrahedra, and the section by the
    /// plane into at most two triangles. Clipping by `plane` and by `plane.flipped()` yields
    /// two sets of tetrahedra with volumes adding up to the volume of `self`.
    pub fn clip_by_plane(&self, plane: &Plane) -> TetrahedronClip {
        let mut result = TetrahedronClip::default();
        self.clip_by_plane_with(plane, |tet| result.tets.push(tet), |tri| result.cut.push(tri));
        result
    }

    /// Computes the part of this tetrahedron lying inside `plane`, appending the resulting
    /// tetrahedra to `tets` and the section triangles to `cut`.
    pub fn clip_by_plane_to(
        &self,
        plane: &Plane,
        tets: &mut Vec<Tetrahedron>,
        cut: &mut Vec<Triangle>,
    ) {
        self.clip_by_plane_with(plane, |tet| tets.push(tet), |tri| cut.push(tri));
    }

    /// Splits this tetrahedron by `plane`.
    ///
    /// The first element of [`SplitResult::Pair`] is the part outside of the plane, the second
    /// is the part inside of it.
    pub fn split_by_plane(&self, plane: &Plane) -> SplitResult<TetrahedronClip> {
        match self.locate_plane(plane) {
            TetrahedronPlaneLocation::Inside => SplitResult::Positive,
            TetrahedronPlaneLocation::Outside => SplitResult::Negative,
            _ => SplitResult::Pair(
                self.clip_by_plane(&plane.flipped()),
                self.clip_by_plane(plane),
            ),
        }
    }

    fn clip_by_plane_with(
        &self,
        plane: &Plane,
        mut push_tet: impl FnMut(Tetrahedron),
        mut push_tri: impl FnMut(Triangle),
    ) {
        let pts = self.vertices();
        let dists = self.plane_signed_distances(plane);
        let intersection = |i: usize, j: usize| edge_plane_intersection(&pts, &dists, i, j);

        let mut push_cut = |tri: Triangle| {
            if plane.normal.dot(&tri.scaled_normal()) > 0.0 {
                push_tri(tri.reversed())
            } else {
                push_tri(tri)
            }
        };

        match TetrahedronPlaneLocation::from_signed_distances(&dists) {
            TetrahedronPlaneLocation::Outside => {}
            TetrahedronPlaneLocation::Inside => push_tet(*self),
            TetrahedronPlaneLocation::OneInside {
                inside: a,
                outside: [b, c, d],
            } => {
                let (pab, pac, pad) = (intersection(a, b), intersection(a, c), intersection(a, d));
                push_tet(Tetrahedron::new(pts[a], pab, pac, pad));
                push_cut(Triangle::new(pab, pac, pad));
            }
            TetrahedronPlaneLocation::TwoInside {
                inside: [a, b],
                outside: [c, d],
            } => {
                let (pac, pad) = (intersection(a, c), intersection(a, d));
                let (pbc, pbd) = (intersection(b, c), intersection(b, d));
                // The quadrilateral section (pac, pbc, pbd, pad) is split along the
                // diagonal pad-pbc, the same one used by the prism decomposition.
                prism_tets([pts[a], pac, pad, pts[b], pbc, pbd], &mut push_tet);
                push_cut(Triangle::new(pac, pad, pbc));
                push_cut(Triangle::new(pad, pbc, pbd));
            }
            TetrahedronPlaneLocation::ThreeInside {
                inside: [a, b, c],
                outside: d,
            } => {
                let (pad, pbd, pcd) = (intersection(a, d), intersection(b, d), intersection(c, d));
                prism_tets([pts[a], pts[b], pts[c], pad, pbd, pcd], &mut push_tet);
                push_cut(Triangle::new(pad, pbd, pcd));
            }
        }
    }
}

/// The intersection between the plane and the edge joining the vertices `i` and `j`.
///
/// The vertices are always interpolated from the lowest index to the highest one so that
/// clipping by a plane and by its flipped counterpart compute bitwise-identical points.
#[inline]
fn edge_plane_intersection(
    pts: &[Point<Real>; 4],
    dists: &[Real; 4],
    i: usize,
    j: usize,
) -> Point<Real> {
    let (i, j) = if i < j { (i, j) } else { (j, i) };
    // One distance is >= 0 and the other < 0 so the denominator is never zero.
    let t = dists[i] / (dists[i] - dists[j]);
    pts[i] + (pts[j] - pts[i]) * t
}

/// Decomposes the triangular prism with bottom `(p0, p1, p2)`, top `(p3, p4, p5)` and lateral
/// edges `p0p3`, `p1p4`, `p2p5` into three tetrahedra.
///
/// The lateral quadrilaterals are split along the diagonals `p1p3`, `p2p4` and `p2p3`.
#[inline]
fn prism_tets(p: [Point<Real>; 6], push_tet: &mut impl FnMut(Tetrahedron)) {
    push_tet(Tetrahedron::new(p[0], p[1], p[2], p[3]));
    push_tet(Tetrahedron::new(p[1], p[2], p[3], p[4]));
    push_tet(Tetrahedron::new(p[2], p[3], p[4], p[5]));
}
