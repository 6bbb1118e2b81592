use crate::math::{Point, Real, Vector};

/// Computes the geometric center (centroid) of a set of points.
///
/// All points are weighted equally. This is the apex used to decompose a cell when the mesh
/// does not provide a precomputed cell center.
///
/// # Panics
///
/// Panics if the input slice is empty.
///
/// # Example
///
/// ```
/// use mof3d::utils::center;
/// use mof3d::math::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(4.0, 0.0, 0.0),
///     Point::new(0.0, 4.0, 0.0),
/// ];
///
/// let c = center(&points);
/// assert!((c.x - 4.0 / 3.0).abs() < 1e-12);
/// assert!((c.y - 4.0 / 3.0).abs() < 1e-12);
/// assert!(c.z.abs() < 1e-12);
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Point<Real> {
    assert!(
        !pts.is_empty(),
        "Cannot compute the center of less than 1 point."
    );

    let sum = pts.iter().fold(Vector::zeros(), |acc, pt| acc + pt.coords);
    Point::from(sum / pts.len() as Real)
}
