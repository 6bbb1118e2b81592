use crate::math::Real;
use crate::optimization::BfgsOptions;

/// Configuration of a [`MomentOfFluid`](crate::mof::MomentOfFluid) reconstructor.
///
/// Tolerances on lengths and volumes are relative: they are multiplied by the length of the
/// cell being reconstructed (the largest extent of its bounding box) or its cube.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MofOptions {
    /// The bisection stops once the achieved volume fraction is within this distance of the
    /// target fraction.
    pub fraction_tolerance: Real,
    /// The maximum number of bisection steps of
    /// [`MomentOfFluid::match_fraction`](crate::mof::MomentOfFluid::match_fraction).
    pub max_bisection_iterations: usize,
    /// Volumes smaller than this value, times the cube of the cell length, are considered
    /// empty.
    pub volume_epsilon: Real,
    /// Normals given by the caller must have a norm within this distance of 1.
    pub unit_normal_tolerance: Real,
    /// The angular step, in radians, of the central finite differences approximating the
    /// gradient of the centroid objective.
    pub finite_difference_step: Real,
    /// Fractions within this distance of 0 or 1 are treated as empty or full cells.
    pub trivial_fraction_tolerance: Real,
    /// Options of the orientation search.
    ///
    /// The minimized function is the squared centroid distance divided by the squared cell
    /// length, so `bfgs.objective_floor` and `bfgs.gradient_tolerance` are relative too.
    pub bfgs: BfgsOptions,
}

impl Default for MofOptions {
    fn default() -> Self {
        Self {
            fraction_tolerance: 1.0e-12,
            max_bisection_iterations: 100,
            volume_epsilon: 1.0e-14,
            unit_normal_tolerance: 1.0e-6,
            finite_difference_step: 1.0e-6,
            trivial_fraction_tolerance: 0.0,
            bfgs: BfgsOptions {
                objective_floor: 1.0e-16,
                ..BfgsOptions::default()
            },
        }
    }
}
