use crate::math::{Point, Real, UnitVector, Vector};
use crate::mof::{FractionMatch, FractionMatchStatus, MofError, MofWorkspace, MomentOfFluid};
use crate::optimization::{Bfgs, BfgsStatus};
use crate::shape::{CellMesh, Plane};
use crate::utils;
use na::{Unit, Vector2};

/// The quantities an interface plane must reproduce in one cell.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CentroidObjective {
    /// The index of the cell.
    pub cell: usize,
    /// The volume fraction of the material inside the plane.
    pub fraction: Real,
    /// The centroid of the material.
    pub ref_center: Point<Real>,
}

/// The centroid objective and its gradient for one plane orientation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FunctionalEvaluation {
    /// The squared distance between the achieved and the reference centroids.
    pub value: Real,
    /// The derivatives of `value` with respect to the spherical angles `(theta, phi)`.
    pub gradient: Vector2<Real>,
    /// The centroid of the part of the cell inside the plane.
    pub center: Point<Real>,
    /// The offset of the plane matching the volume fraction.
    pub offset: Real,
    /// How the volume fraction matching of `offset` terminated.
    pub fraction_status: FractionMatchStatus,
}

/// The interface plane reconstructed in one cell.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CentroidOptimization {
    /// The normal of the plane, pointing toward the material.
    pub normal: UnitVector<Real>,
    /// The offset of the plane: the material is where `normal · x >= offset`.
    pub offset: Real,
    /// The centroid of the part of the cell inside the plane.
    pub center: Point<Real>,
    /// The volume fraction enclosed by the plane.
    pub fraction: Real,
    /// The squared distance between `center` and the reference centroid.
    pub objective: Real,
    /// The number of quasi-Newton iterations.
    pub iterations: usize,
    /// The number of objective evaluations.
    pub evaluations: usize,
    /// The reason the orientation search stopped.
    pub status: BfgsStatus,
    /// How the volume fraction matching of the final plane terminated.
    pub fraction_status: FractionMatchStatus,
}

impl CentroidOptimization {
    /// Returns `true` if the orientation search met one of its convergence criteria and the
    /// final plane matches the volume fraction within tolerance.
    #[inline]
    pub fn is_converged(&self) -> bool {
        self.status.is_converged() && self.fraction_status.is_converged()
    }

    /// Returns `self` if it is converged, and [`MofError::NotConverged`] otherwise.
    pub fn converged(self) -> Result<Self, MofError> {
        if self.is_converged() {
            Ok(self)
        } else {
            Err(MofError::NotConverged {
                iterations: self.evaluations,
            })
        }
    }

    /// The reconstructed plane.
    #[inline]
    pub fn plane(&self) -> Plane {
        Plane::new(self.normal, self.offset)
    }
}

impl<M: CellMesh + ?Sized> MomentOfFluid<'_, M> {
    /// Evaluates the centroid objective of the plane orientation `angles = (theta, phi)`.
    ///
    /// The plane offset is matched to `objective.fraction`, then the objective is the squared
    /// distance between the centroid of the clipped cell and `objective.ref_center`. Its
    /// gradient is approximated by central finite differences on both angles.
    pub fn evaluate_functional(
        &self,
        ws: &mut MofWorkspace,
        objective: &CentroidObjective,
        angles: &Vector2<Real>,
    ) -> Result<FunctionalEvaluation, MofError> {
        let h = self.options.finite_difference_step;
        let (theta, phi) = (angles.x, angles.y);

        let (value, matched) = self.centroid_distance(ws, objective, theta, phi)?;
        let (theta_plus, _) = self.centroid_distance(ws, objective, theta + h, phi)?;
        let (theta_minus, _) = self.centroid_distance(ws, objective, theta - h, phi)?;
        let (phi_plus, _) = self.centroid_distance(ws, objective, theta, phi + h)?;
        let (phi_minus, _) = self.centroid_distance(ws, objective, theta, phi - h)?;

        Ok(FunctionalEvaluation {
            value,
            gradient: Vector2::new(theta_plus - theta_minus, phi_plus - phi_minus) / (2.0 * h),
            center: matched.center,
            offset: matched.offset,
            fraction_status: matched.status,
        })
    }

    /// Reconstructs the interface plane of the `cell`-th cell from the volume `fraction` and
    /// the centroid `ref_center` of the material.
    ///
    /// The orientation search starts from the normal pointing from the cell centroid to
    /// `ref_center`, and minimizes the squared centroid distance with [`Bfgs`]. Exhausting
    /// the evaluation budget is not an error: the best plane found is returned with a
    /// non-converged status.
    ///
    /// The fraction must lie strictly between 0 and 1 (up to
    /// [`MofOptions::trivial_fraction_tolerance`](crate::mof::MofOptions)): empty and full
    /// cells have no interface.
    pub fn optimize_centroid(
        &self,
        ws: &mut MofWorkspace,
        cell: usize,
        fraction: Real,
        ref_center: &Point<Real>,
    ) -> Result<CentroidOptimization, MofError> {
        let trivial = self.options.trivial_fraction_tolerance;
        if !(fraction > trivial && fraction < 1.0 - trivial) {
            return Err(MofError::InvalidFraction(fraction));
        }

        self.decompose_cell(ws, cell)?;

        let length = ws.cell_length;
        let scale = 1.0 / (length * length);
        let start = Unit::try_new(*ref_center - ws.cell_center, length * 1.0e-12)
            .unwrap_or_else(Vector::z_axis);
        let (theta, phi) = utils::cartesian_to_spherical(&start);

        let objective = CentroidObjective {
            cell,
            fraction,
            ref_center: *ref_center,
        };
        let mut functional = |angles: &Vector2<Real>| {
            let eval = self.evaluate_functional(ws, &objective, angles)?;
            Ok::<_, MofError>((eval.value * scale, eval.gradient * scale))
        };

        let result =
            Bfgs::new(self.options.bfgs).minimize(&mut functional, &Vector2::new(theta, phi))?;

        let (theta, phi) = utils::wrap_spherical_angles(result.x.x, result.x.y);
        let normal = Unit::new_normalize(utils::spherical_to_cartesian(theta, phi));
        let matched = self.match_fraction(ws, cell, fraction, &normal, None)?;

        if !result.status.is_converged() {
            log::debug!(
                "Cell {}: the orientation search stopped without converging ({:?}).",
                cell,
                result.status
            );
        }

        if !matched.is_converged() {
            log::debug!(
                "Cell {}: the final plane misses the volume fraction {} ({:?}, fraction = {}).",
                cell,
                fraction,
                matched.status,
                matched.fraction
            );
        }

        Ok(CentroidOptimization {
            normal,
            offset: matched.offset,
            center: matched.center,
            fraction: matched.fraction,
            objective: (matched.center - *ref_center).norm_squared(),
            iterations: result.iterations,
            evaluations: result.evaluations,
            status: result.status,
            fraction_status: matched.status,
        })
    }

    fn centroid_distance(
        &self,
        ws: &mut MofWorkspace,
        objective: &CentroidObjective,
        theta: Real,
        phi: Real,
    ) -> Result<(Real, FractionMatch), MofError> {
        let normal = utils::spherical_to_cartesian(theta, phi);
        let matched =
            self.match_fraction(ws, objective.cell, objective.fraction, &normal, None)?;

        if !matched.is_converged() {
            log::debug!(
                "Cell {}: fraction matching did not converge at (theta, phi) = ({}, {}): {:?}.",
                objective.cell,
                theta,
                phi,
                matched.status
            );
        }

        Ok(((matched.center - objective.ref_center).norm_squared(), matched))
    }
}
