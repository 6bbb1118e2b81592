use crate::math::{Point, Real};
use crate::mof::{CentroidOptimization, MofError, MofWorkspace, MomentOfFluid};
use crate::shape::{CellMesh, Plane};

/// The interface reconstructed in one cell.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellInterface {
    /// The cell contains no material.
    Empty,
    /// The cell is filled with material.
    Full,
    /// The cell is cut by an interface plane.
    Mixed(CentroidOptimization),
    /// The reconstruction of this cell failed.
    Failed {
        /// The reason of the failure.
        error: MofError,
    },
}

impl CellInterface {
    /// The interface plane, for mixed cells.
    pub fn plane(&self) -> Option<Plane> {
        match self {
            Self::Mixed(result) => Some(result.plane()),
            _ => None,
        }
    }

    /// Returns `true` if the reconstruction of this cell failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// The interfaces reconstructed in a set of cells.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InterfaceReconstruction {
    /// The interface of each cell, in cell order.
    pub cells: Vec<CellInterface>,
}

impl InterfaceReconstruction {
    /// The indices of the cells whose reconstruction failed, with the reason of the failure.
    pub fn failed_cells(&self) -> impl Iterator<Item = (usize, &MofError)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| match cell {
            CellInterface::Failed { error } => Some((i, error)),
            _ => None,
        })
    }

    /// The number of cells cut by an interface plane.
    pub fn num_mixed(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| matches!(cell, CellInterface::Mixed(_)))
            .count()
    }

    /// The number of mixed cells whose orientation search converged.
    pub fn num_converged(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| matches!(cell, CellInterface::Mixed(result) if result.is_converged()))
            .count()
    }
}

impl<M: CellMesh + ?Sized> MomentOfFluid<'_, M> {
    /// Reconstructs the interface of the cells `0..fractions.len()`.
    ///
    /// `fractions[i]` and `ref_centers[i]` are the volume fraction and the centroid of the
    /// material in the `i`-th cell. Cells with a fraction of 0 or 1 are empty or full and
    /// skip the reconstruction.
    ///
    /// The failure of one cell does not stop the others: it is recorded as
    /// [`CellInterface::Failed`]. The only error of the whole batch is a length mismatch
    /// between `fractions` and `ref_centers`.
    pub fn construct_interface(
        &self,
        ws: &mut MofWorkspace,
        fractions: &[Real],
        ref_centers: &[Point<Real>],
    ) -> Result<InterfaceReconstruction, MofError> {
        if fractions.len() != ref_centers.len() {
            return Err(MofError::LengthMismatch {
                fractions: fractions.len(),
                ref_centers: ref_centers.len(),
            });
        }

        let trivial = self.options.trivial_fraction_tolerance;
        let mut cells = Vec::with_capacity(fractions.len());

        for (cell, (fraction, ref_center)) in fractions.iter().zip(ref_centers).enumerate() {
            let interface = if let Err(error) = self.check_fraction(*fraction) {
                CellInterface::Failed { error }
            } else if *fraction <= trivial {
                CellInterface::Empty
            } else if *fraction >= 1.0 - trivial {
                CellInterface::Full
            } else {
                match self.optimize_centroid(ws, cell, *fraction, ref_center) {
                    Ok(result) => CellInterface::Mixed(result),
                    Err(error) => CellInterface::Failed { error },
                }
            };

            if let CellInterface::Failed { error } = &interface {
                log::warn!("Interface reconstruction failed for the cell {}: {}", cell, error);
            }

            cells.push(interface);
        }

        let result = InterfaceReconstruction { cells };
        log::info!(
            "Reconstructed the interface of {} cells: {} mixed ({} converged), {} failed.",
            result.cells.len(),
            result.num_mixed(),
            result.num_converged(),
            result.failed_cells().count()
        );

        Ok(result)
    }
}
