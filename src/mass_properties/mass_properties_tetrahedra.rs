use crate::math::{Point, Real};
use crate::mof::MofError;
use crate::shape::Tetrahedron;
use num::Zero;

/// Computes the total volume and the volume-weighted centroid of a set of tetrahedra.
///
/// Every tetrahedron contributes its unsigned volume, so degenerate or inverted tetrahedra
/// never decrease the total. If the total volume is smaller than `epsilon`, the returned
/// centroid is the origin.
pub fn tetrahedra_volume_and_center(tets: &[Tetrahedron], epsilon: Real) -> (Real, Point<Real>) {
    let mut res = Point::origin();
    let mut vol = Real::zero();

    for tet in tets {
        let volume = tet.volume();
        res += tet.center().coords * volume;
        vol += volume;
    }

    if vol < epsilon || vol.is_zero() {
        (vol, Point::origin())
    } else {
        (vol, res / vol)
    }
}

/// Computes the total volume and the volume-weighted centroid of a set of tetrahedra.
///
/// Fails with [`MofError::EmptyRegion`] if the total volume is smaller than `epsilon`.
pub fn try_tetrahedra_volume_and_center(
    tets: &[Tetrahedron],
    epsilon: Real,
) -> Result<(Real, Point<Real>), MofError> {
    match tetrahedra_volume_and_center(tets, epsilon) {
        (volume, _) if volume < epsilon || volume.is_zero() => Err(MofError::EmptyRegion { volume }),
        result => Ok(result),
    }
}
