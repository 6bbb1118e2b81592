//! Unconstrained minimization of smooth functions of a few variables.
//!
//! The minimizers of this module are independent from any geometry: they work on any
//! [`DifferentiableFunction`] of a fixed-size vector.

pub use self::bfgs::{Bfgs, BfgsOptions, BfgsResult, BfgsStatus};
pub use self::cubic::{
    evaluate_cubic, hermite_cubic, minimize_interpolating_cubic, CubicCoefficients,
};
pub use self::differentiable_function::DifferentiableFunction;
pub use self::line_search::{line_search, LineSearchResult, LineSearchStatus};

mod bfgs;
mod cubic;
mod differentiable_function;
mod line_search;
