use crate::math::Real;
use crate::optimization::{line_search, DifferentiableFunction, LineSearchStatus};
use na::{SMatrix, SVector};

/// Parameters of the BFGS minimizer and of its line search.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BfgsOptions {
    /// Sufficient-decrease constant of the line search, in `(0, 1/2)`.
    pub rho: Real,
    /// Curvature constant of the line search, in `(rho, 1)`.
    pub sigma: Real,
    /// Factor bounding how far the bracketing phase can extrapolate.
    pub tau1: Real,
    /// Fraction of the bracket excluded near its first end during sectioning.
    pub tau2: Real,
    /// Fraction of the bracket excluded near its second end during sectioning.
    pub tau3: Real,
    /// The minimization stops once the gradient norm is at most this value.
    pub gradient_tolerance: Real,
    /// The minimization stops once the function value is at most this value.
    pub objective_floor: Real,
    /// The maximum number of function evaluations, line searches included.
    pub max_evaluations: usize,
    /// The length of the first step tried along the steepest-descent direction.
    pub initial_step: Real,
}

impl Default for BfgsOptions {
    fn default() -> Self {
        Self {
            rho: 0.01,
            sigma: 0.1,
            tau1: 9.0,
            tau2: 0.1,
            tau3: 0.5,
            gradient_tolerance: 1.0e-10,
            objective_floor: -Real::INFINITY,
            max_evaluations: 200,
            initial_step: 1.0,
        }
    }
}

/// The reason a BFGS minimization stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BfgsStatus {
    /// The gradient norm went below the tolerance.
    Converged,
    /// The function value went below the objective floor.
    ReachedFloor,
    /// The evaluation budget was exhausted.
    OutOfEvaluations,
    /// The line search could not improve on the current point.
    LineSearchFailed(LineSearchStatus),
}

impl BfgsStatus {
    /// Returns `true` if the minimization met one of its convergence criteria.
    pub fn is_converged(self) -> bool {
        matches!(self, Self::Converged | Self::ReachedFloor)
    }
}

/// The result of a BFGS minimization: the best point found and how it was reached.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BfgsResult<const D: usize> {
    /// The best point found.
    pub x: SVector<Real, D>,
    /// The function value at `x`.
    pub value: Real,
    /// The function gradient at `x`.
    pub gradient: SVector<Real, D>,
    /// The number of quasi-Newton iterations performed.
    pub iterations: usize,
    /// The number of function evaluations performed.
    pub evaluations: usize,
    /// The reason the minimization stopped.
    pub status: BfgsStatus,
}

/// A quasi-Newton minimizer maintaining an approximation of the inverse Hessian.
///
/// Each iteration searches along `-H g`, where `g` is the gradient and `H` the current
/// inverse-Hessian approximation, with the line search of [`line_search`]. `H` is then
/// updated from the step `s` and the gradient change `y` with the BFGS formula
/// `H ← (I - ρ s yᵀ) H (I - ρ y sᵀ) + ρ s sᵀ`, `ρ = 1 / (yᵀ s)`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bfgs {
    /// The minimizer parameters.
    pub options: BfgsOptions,
}

impl Bfgs {
    /// A minimizer with the given options.
    pub fn new(options: BfgsOptions) -> Self {
        Self { options }
    }

    /// Minimizes `function` starting from `x0`.
    ///
    /// Running out of evaluations is not an error: the best point found is returned with
    /// [`BfgsStatus::OutOfEvaluations`]. Errors raised by `function` abort the minimization.
    pub fn minimize<const D: usize, F: DifferentiableFunction<D>>(
        &self,
        function: &mut F,
        x0: &SVector<Real, D>,
    ) -> Result<BfgsResult<D>, F::Error> {
        let opts = &self.options;
        let identity = SMatrix::<Real, D, D>::identity();

        let (value, gradient) = function.eval(x0)?;
        let mut result = BfgsResult {
            x: *x0,
            value,
            gradient,
            iterations: 0,
            evaluations: 1,
            status: BfgsStatus::OutOfEvaluations,
        };
        let mut inv_hessian = identity;

        loop {
            if result.value <= opts.objective_floor {
                result.status = BfgsStatus::ReachedFloor;
                break;
            }

            if result.gradient.norm() <= opts.gradient_tolerance {
                result.status = BfgsStatus::Converged;
                break;
            }

            if result.evaluations >= opts.max_evaluations {
                result.status = BfgsStatus::OutOfEvaluations;
                break;
            }

            let mut dir = -(inv_hessian * result.gradient);
            if result.gradient.dot(&dir) >= 0.0 {
                // The approximation lost its positive-definiteness.
                log::debug!("BFGS: non-descent direction, resetting the inverse Hessian.");
                inv_hessian = identity;
                dir = -result.gradient;
            }

            let initial_alpha = if result.iterations == 0 {
                (opts.initial_step / dir.norm()).min(1.0)
            } else {
                1.0
            };

            let ls = line_search(
                function,
                &result.x,
                result.value,
                &result.gradient,
                &dir,
                initial_alpha,
                opts.max_evaluations - result.evaluations,
                opts,
            )?;
            result.evaluations += ls.evaluations;

            if ls.alpha == 0.0 {
                result.status = match ls.status {
                    LineSearchStatus::OutOfEvaluations => BfgsStatus::OutOfEvaluations,
                    status => BfgsStatus::LineSearchFailed(status),
                };
                break;
            }

            let s = dir * ls.alpha;
            let y = ls.gradient - result.gradient;
            result.x += s;
            result.value = ls.value;
            result.gradient = ls.gradient;
            result.iterations += 1;

            log::trace!(
                "BFGS iteration {}: f = {}, |g| = {}.",
                result.iterations,
                result.value,
                result.gradient.norm()
            );

            let sy = s.dot(&y);
            // Skip the update if it would not keep the approximation positive-definite.
            if sy > Real::EPSILON * s.norm() * y.norm() {
                if result.iterations == 1 {
                    inv_hessian = identity * (sy / y.norm_squared());
                }

                let rho = 1.0 / sy;
                let left = identity - s * y.transpose() * rho;
                let right = identity - y * s.transpose() * rho;
                inv_hessian = left * inv_hessian * right + s * s.transpose() * rho;
            }

            match ls.status {
                LineSearchStatus::ReachedFloor => {
                    result.status = BfgsStatus::ReachedFloor;
                    break;
                }
                LineSearchStatus::OutOfEvaluations => {
                    result.status = BfgsStatus::OutOfEvaluations;
                    break;
                }
                _ => {}
            }
        }

        if !result.status.is_converged() {
            log::debug!(
                "BFGS stopped without converging ({:?}) after {} evaluations: f = {}, |g| = {}.",
                result.status,
                result.evaluations,
                result.value,
                result.gradient.norm()
            );
        }

        Ok(result)
    }
}
