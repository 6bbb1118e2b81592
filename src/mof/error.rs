use crate::math::Real;

/// Errors raised by the interface reconstruction.
///
/// Running out of iterations is not an error by itself: the fraction matcher and the centroid
/// optimizer return their best result with a status flag. [`MofError::NotConverged`] is only
/// produced when a caller asks for a converged result explicitly.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MofError {
    /// A face of the cell has less than three vertices, so the cell cannot be decomposed.
    #[error("the face {face} of the cell {cell} has {num_vertices} vertices, at least 3 are needed.")]
    DegenerateFace {
        /// The cell being decomposed.
        cell: usize,
        /// The offending face.
        face: usize,
        /// The number of vertices of that face.
        num_vertices: usize,
    },
    /// The cell index does not exist in the mesh.
    #[error("the cell {cell} does not exist, the mesh has {num_cells} cells.")]
    CellOutOfBounds {
        /// The requested cell.
        cell: usize,
        /// The number of cells of the mesh.
        num_cells: usize,
    },
    /// A region expected to have a volume is (almost) empty.
    #[error("the region is empty (volume {volume}).")]
    EmptyRegion {
        /// The volume of the region.
        volume: Real,
    },
    /// An iterative solver exhausted its budget without meeting its tolerance.
    #[error("no convergence after {iterations} iterations.")]
    NotConverged {
        /// The number of iterations (or function evaluations) performed.
        iterations: usize,
    },
    /// A volume fraction outside of `[0, 1]`.
    #[error("the volume fraction {0} is not in [0, 1].")]
    InvalidFraction(Real),
    /// A normal that should be unit-length is not.
    #[error("the normal has a norm of {0} instead of 1.")]
    NonUnitNormal(Real),
    /// Search bounds with `min > max` or non-finite values.
    #[error("invalid search bounds [{min}, {max}].")]
    InvalidBounds {
        /// The lower bound.
        min: Real,
        /// The upper bound.
        max: Real,
    },
    /// The per-cell inputs of a batch reconstruction have different lengths.
    #[error("{fractions} volume fractions were given for {ref_centers} reference centroids.")]
    LengthMismatch {
        /// The number of volume fractions.
        fractions: usize,
        /// The number of reference centroids.
        ref_centers: usize,
    },
}
