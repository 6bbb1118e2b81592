use crate::math::{Real, Vector};
use core::f64::consts::{PI, TAU};

/// The unit vector with polar angle `theta` (from `+z`) and azimuth `phi` (from `+x`).
#[inline]
pub fn spherical_to_cartesian(theta: Real, phi: Real) -> Vector<Real> {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    Vector::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta)
}

/// The spherical angles `(theta, phi)` of the direction `v`, with `theta ∈ [0, π]` and
/// `phi ∈ [0, 2π)`.
///
/// `v` does not need to be normalized but must not be zero.
#[inline]
pub fn cartesian_to_spherical(v: &Vector<Real>) -> (Real, Real) {
    let theta = (v.z / v.norm()).clamp(-1.0, 1.0).acos();
    let phi = v.y.atan2(v.x);
    wrap_spherical_angles(theta, phi)
}

/// Maps arbitrary angles to the canonical ranges `theta ∈ [0, π]`, `phi ∈ [0, 2π)` without
/// changing the direction they describe.
pub fn wrap_spherical_angles(theta: Real, phi: Real) -> (Real, Real) {
    let mut theta = theta.rem_euclid(TAU);
    let mut phi = phi;

    if theta > PI {
        theta = TAU - theta;
        phi += PI;
    }

    phi = phi.rem_euclid(TAU);
    if phi >= TAU {
        phi = 0.0;
    }

    (theta, phi)
}
