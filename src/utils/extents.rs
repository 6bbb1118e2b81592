use crate::math::{Point, Real, Vector};

/// Computes the smallest and largest projections of a set of points on `dir`.
///
/// The direction does not need to be normalized; the projections are plain dot products.
/// Returns `None` if `points` is empty.
pub fn point_cloud_extents_on_dir<'a>(
    dir: &Vector<Real>,
    points: impl IntoIterator<Item = &'a Point<Real>>,
) -> Option<(Real, Real)> {
    let mut piter = points.into_iter();
    let first = piter.next()?.coords.dot(dir);

    Some(piter.fold((first, first), |(min, max), pt| {
        let proj = pt.coords.dot(dir);
        (min.min(proj), max.max(proj))
    }))
}

/// Computes the corners `(mins, maxs)` of the axis-aligned box enclosing a set of points.
///
/// Returns `None` if `points` is empty.
pub fn point_cloud_bounds<'a>(
    points: impl IntoIterator<Item = &'a Point<Real>>,
) -> Option<(Point<Real>, Point<Real>)> {
    let mut it = points.into_iter();
    let p0 = it.next()?;
    let mut min = *p0;
    let mut max = *p0;

    for pt in it {
        min = min.inf(pt);
        max = max.sup(pt);
    }

    Some((min, max))
}
