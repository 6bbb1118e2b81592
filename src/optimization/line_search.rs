use crate::math::Real;
use crate::optimization::{minimize_interpolating_cubic, BfgsOptions, DifferentiableFunction};
use na::SVector;

/// The outcome of a line search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineSearchStatus {
    /// A step satisfying both the sufficient-decrease and the curvature conditions was found.
    Success,
    /// The function went below the objective floor.
    ReachedFloor,
    /// The search direction does not decrease the function.
    NonDescentDirection,
    /// The evaluation budget was exhausted before an acceptable step was found.
    OutOfEvaluations,
    /// The bracketing interval became too small to be reduced further.
    NoProgress,
}

impl LineSearchStatus {
    /// Returns `true` if the returned step is an acceptable one.
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success | Self::ReachedFloor)
    }
}

/// The result of a line search.
///
/// On success, the result describes the accepted step. Otherwise it describes the point with
/// the smallest function value found along the search direction: if no trial step improved
/// on the starting point, `alpha` is zero and `value`, `gradient` are the ones of the
/// starting point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineSearchResult<const D: usize> {
    /// The step length.
    pub alpha: Real,
    /// The function value at `x + alpha * dir`.
    pub value: Real,
    /// The function gradient at `x + alpha * dir`.
    pub gradient: SVector<Real, D>,
    /// The number of function evaluations performed.
    pub evaluations: usize,
    /// The reason the line search stopped.
    pub status: LineSearchStatus,
}

#[derive(Copy, Clone)]
struct TrialPoint<const D: usize> {
    alpha: Real,
    value: Real,
    slope: Real,
    gradient: SVector<Real, D>,
}

impl<const D: usize> TrialPoint<D> {
    fn accept(self, evaluations: usize, status: LineSearchStatus) -> LineSearchResult<D> {
        LineSearchResult {
            alpha: self.alpha,
            value: self.value,
            gradient: self.gradient,
            evaluations,
            status,
        }
    }
}

/// Searches for a step length along `dir` satisfying the strong Wolfe conditions.
///
/// This is the bracketing and sectioning line search of Fletcher: an interval containing
/// acceptable steps is first bracketed, then reduced with safeguarded cubic interpolation
/// until a step satisfies
///
/// * the sufficient-decrease condition `f(α) <= f(0) + rho α f'(0)`,
/// * the curvature condition `|f'(α)| <= -sigma f'(0)`,
///
/// where `f(α)` is the value of `function` at `x + α dir`. Steps are never larger than the
/// one reaching `options.objective_floor` under the sufficient-decrease line.
///
/// `value` and `gradient` are the function value and gradient at `x`. At most
/// `max_evaluations` evaluations are performed.
pub fn line_search<const D: usize, F: DifferentiableFunction<D>>(
    function: &mut F,
    x: &SVector<Real, D>,
    value: Real,
    gradient: &SVector<Real, D>,
    dir: &SVector<Real, D>,
    initial_alpha: Real,
    max_evaluations: usize,
    options: &BfgsOptions,
) -> Result<LineSearchResult<D>, F::Error> {
    let slope0 = gradient.dot(dir);
    let mut best = LineSearchResult {
        alpha: 0.0,
        value,
        gradient: *gradient,
        evaluations: 0,
        status: LineSearchStatus::Success,
    };

    if slope0 >= 0.0 || slope0.is_nan() {
        best.status = LineSearchStatus::NonDescentDirection;
        return Ok(best);
    }

    let sufficient_decrease =
        |alpha: Real, val: Real| val <= value + alpha * options.rho * slope0;
    let curvature = |slope: Real| slope.abs() <= -options.sigma * slope0;

    // Largest step worth trying: beyond it, the sufficient-decrease line goes below the floor.
    let mu = (options.objective_floor - value) / (options.rho * slope0);
    let mut alpha = if mu > 0.0 {
        initial_alpha.min(mu)
    } else {
        initial_alpha
    };

    let mut evaluations = 0;
    let mut eval = |alpha: Real,
                    best: &mut LineSearchResult<D>,
                    evaluations: &mut usize|
     -> Result<TrialPoint<D>, F::Error> {
        let (val, grad) = function.eval(&(x + dir * alpha))?;
        *evaluations += 1;

        if val < best.value {
            best.alpha = alpha;
            best.value = val;
            best.gradient = grad;
        }

        Ok(TrialPoint {
            alpha,
            value: val,
            slope: grad.dot(dir),
            gradient: grad,
        })
    };

    let mut prev = TrialPoint {
        alpha: 0.0,
        value,
        slope: slope0,
        gradient: *gradient,
    };

    // Bracketing phase.
    let (mut lo, mut hi) = loop {
        if evaluations >= max_evaluations {
            return Ok(finish(best, evaluations, LineSearchStatus::OutOfEvaluations));
        }

        let trial = eval(alpha, &mut best, &mut evaluations)?;
        log::trace!(
            "Line search bracketing: alpha = {}, f = {}, slope = {}.",
            trial.alpha,
            trial.value,
            trial.slope
        );

        if trial.value <= options.objective_floor {
            return Ok(trial.accept(evaluations, LineSearchStatus::ReachedFloor));
        }

        if !sufficient_decrease(trial.alpha, trial.value) || trial.value >= prev.value {
            break (prev, trial);
        }

        if curvature(trial.slope) {
            return Ok(trial.accept(evaluations, LineSearchStatus::Success));
        }

        if trial.slope >= 0.0 {
            break (trial, prev);
        }

        let next = if mu > 0.0 && mu <= 2.0 * trial.alpha - prev.alpha {
            mu
        } else {
            let far = trial.alpha + options.tau1 * (trial.alpha - prev.alpha);
            minimize_interpolating_cubic(
                2.0 * trial.alpha - prev.alpha,
                if mu > 0.0 { far.min(mu) } else { far },
                prev.alpha,
                trial.alpha,
                prev.value,
                prev.slope,
                trial.value,
                trial.slope,
            )
        };

        prev = trial;
        alpha = next;
    };

    // Sectioning phase: `lo` always satisfies the sufficient-decrease condition and has the
    // lowest value seen inside of the bracket.
    loop {
        if evaluations >= max_evaluations {
            return Ok(finish(best, evaluations, LineSearchStatus::OutOfEvaluations));
        }

        let width = hi.alpha - lo.alpha;
        if width.abs() <= Real::EPSILON * lo.alpha.abs().max(hi.alpha.abs()) {
            return Ok(finish(best, evaluations, LineSearchStatus::NoProgress));
        }

        let alpha = minimize_interpolating_cubic(
            lo.alpha + options.tau2 * width,
            hi.alpha - options.tau3 * width,
            lo.alpha,
            hi.alpha,
            lo.value,
            lo.slope,
            hi.value,
            hi.slope,
        );
        let trial = eval(alpha, &mut best, &mut evaluations)?;
        log::trace!(
            "Line search sectioning: alpha = {}, f = {}, slope = {}.",
            trial.alpha,
            trial.value,
            trial.slope
        );

        if trial.value <= options.objective_floor {
            return Ok(trial.accept(evaluations, LineSearchStatus::ReachedFloor));
        }

        if !sufficient_decrease(trial.alpha, trial.value) || trial.value >= lo.value {
            hi = trial;
        } else {
            if curvature(trial.slope) {
                return Ok(trial.accept(evaluations, LineSearchStatus::Success));
            }

            if (hi.alpha - lo.alpha) * trial.slope >= 0.0 {
                hi = lo;
            }

            lo = trial;
        }
    }
}

fn finish<const D: usize>(
    mut best: LineSearchResult<D>,
    evaluations: usize,
    status: LineSearchStatus,
) -> LineSearchResult<D> {
    best.evaluations = evaluations;
    best.status = status;
    best
}
