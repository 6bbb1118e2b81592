use crate::math::Real;
use na::SVector;

/// A function of `D` real variables that can be evaluated together with its gradient.
///
/// Evaluation may fail, in which case the minimizers abort and forward the error. Any
/// closure `FnMut(&SVector<Real, D>) -> Result<(Real, SVector<Real, D>), E>` implements
/// this trait.
pub trait DifferentiableFunction<const D: usize> {
    /// The error returned when the function cannot be evaluated.
    type Error;

    /// Evaluates the function and its gradient at `x`.
    fn eval(&mut self, x: &SVector<Real, D>) -> Result<(Real, SVector<Real, D>), Self::Error>;
}

impl<const D: usize, E, F> DifferentiableFunction<D> for F
where
    F: FnMut(&SVector<Real, D>) -> Result<(Real, SVector<Real, D>), E>,
{
    type Error = E;

    #[inline]
    fn eval(&mut self, x: &SVector<Real, D>) -> Result<(Real, SVector<Real, D>), E> {
        self(x)
    }
}
