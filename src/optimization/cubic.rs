use crate::math::Real;
use arrayvec::ArrayVec;

/// The coefficients `[c3, c2, c1, c0]` of the cubic `c3 z³ + c2 z² + c1 z + c0`.
pub type CubicCoefficients = [Real; 4];

/// Evaluates the cubic with the given coefficients at `z`.
#[inline]
pub fn evaluate_cubic(coeffs: &CubicCoefficients, z: Real) -> Real {
    ((coeffs[0] * z + coeffs[1]) * z + coeffs[2]) * z + coeffs[3]
}

/// The cubic Hermite interpolant, on the unit interval, of a function with value `f1` and
/// derivative `df1` at `alpha1`, and value `f2` and derivative `df2` at `alpha2`.
///
/// The variable `z ∈ [0, 1]` maps to `alpha1 + z * (alpha2 - alpha1)`.
pub fn hermite_cubic(
    alpha1: Real,
    alpha2: Real,
    f1: Real,
    df1: Real,
    f2: Real,
    df2: Real,
) -> CubicCoefficients {
    let delta = alpha2 - alpha1;
    let (d1, d2) = (df1 * delta, df2 * delta);

    [
        d1 + d2 - 2.0 * (f2 - f1),
        3.0 * (f2 - f1) - 2.0 * d1 - d2,
        d1,
        f1,
    ]
}

/// Minimizes, over the interval bounded by `end_a` and `end_b`, the cubic interpolating a
/// function known at `alpha1` and `alpha2` through its values and derivatives.
///
/// The interval does not need to contain `alpha1` or `alpha2`, and `end_a` may be greater
/// than `end_b`. Returns the minimizer, which always lies within the interval.
pub fn minimize_interpolating_cubic(
    end_a: Real,
    end_b: Real,
    alpha1: Real,
    alpha2: Real,
    f1: Real,
    df1: Real,
    f2: Real,
    df2: Real,
) -> Real {
    let delta = alpha2 - alpha1;

    if delta == 0.0 || !delta.is_finite() {
        return 0.5 * (end_a + end_b);
    }

    let coeffs = hermite_cubic(alpha1, alpha2, f1, df1, f2, df2);
    let za = (end_a - alpha1) / delta;
    let zb = (end_b - alpha1) / delta;
    let (lo, hi) = if za <= zb { (za, zb) } else { (zb, za) };

    let mut candidates = ArrayVec::<Real, 4>::new();
    candidates.push(lo);
    candidates.push(hi);

    // Stationary points of the cubic: 3 c3 z² + 2 c2 z + c1 = 0.
    let (a, b, c) = (3.0 * coeffs[0], 2.0 * coeffs[1], coeffs[2]);

    if a.abs() <= Real::EPSILON * (b.abs() + c.abs()) {
        if b != 0.0 {
            candidates.push(-c / b);
        }
    } else {
        let disc = b * b - 4.0 * a * c;

        if disc >= 0.0 {
            // Numerically stable quadratic roots.
            let q = -0.5 * (b + b.signum() * disc.sqrt());
            candidates.push(q / a);
            if q != 0.0 {
                candidates.push(c / q);
            }
        }
    }

    let mut best_z = lo;
    let mut best_val = evaluate_cubic(&coeffs, lo);

    for z in candidates.into_iter().skip(1) {
        if z >= lo && z <= hi {
            let val = evaluate_cubic(&coeffs, z);
            if val < best_val {
                best_val = val;
                best_z = z;
            }
        }
    }

    alpha1 + best_z * delta
}
