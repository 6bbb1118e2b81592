use crate::math::{Point, Real, UnitVector, Vector};
use crate::mof::{MofError, MofWorkspace, MomentOfFluid};
use crate::shape::{CellMesh, Plane};
use crate::utils;

/// An interval of plane offsets searched by
/// [`MomentOfFluid::match_fraction`](crate::mof::MomentOfFluid::match_fraction).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OffsetBounds {
    /// The smallest offset.
    pub min: Real,
    /// The largest offset.
    pub max: Real,
}

impl OffsetBounds {
    /// The interval `[min, max]`.
    pub fn new(min: Real, max: Real) -> Self {
        Self { min, max }
    }
}

/// How a volume fraction matching terminated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FractionMatchStatus {
    /// The achieved fraction is within tolerance of the target.
    Converged,
    /// The target was 0 or 1, no search was needed.
    Trivial,
    /// The iteration cap was reached before the tolerance was met.
    OutOfIterations,
    /// The search interval could not be narrowed any further before the tolerance was met.
    ///
    /// This happens when the target is not reachable from within the search bounds.
    Stalled,
}

impl FractionMatchStatus {
    /// Returns `true` if the result satisfies the requested tolerance.
    pub fn is_converged(self) -> bool {
        matches!(self, Self::Converged | Self::Trivial)
    }
}

/// The plane offset matching a volume fraction along a fixed normal.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FractionMatch {
    /// The plane offset. It always lies within the search bounds.
    pub offset: Real,
    /// The centroid of the part of the cell inside the plane.
    pub center: Point<Real>,
    /// The volume fraction achieved by `offset`.
    pub fraction: Real,
    /// The width of the search interval.
    pub span: Real,
    /// The number of bisection steps performed.
    pub iterations: usize,
    /// The reason the search stopped.
    pub status: FractionMatchStatus,
}

impl FractionMatch {
    /// Returns `true` if the achieved fraction is within tolerance of the target.
    #[inline]
    pub fn is_converged(&self) -> bool {
        self.status.is_converged()
    }

    /// Returns `self` if it is converged, and [`MofError::NotConverged`] otherwise.
    pub fn converged(self) -> Result<Self, MofError> {
        if self.is_converged() {
            Ok(self)
        } else {
            Err(MofError::NotConverged {
                iterations: self.iterations,
            })
        }
    }
}

impl<M: CellMesh + ?Sized> MomentOfFluid<'_, M> {
    /// Finds the offset of the plane with the given `normal` enclosing the volume `fraction`
    /// of the `cell`-th cell.
    ///
    /// The part of the cell inside the plane `normal · x >= offset` shrinks as the offset
    /// grows, so the offset is found by bisection. The search interval is `bounds` if given,
    /// and the range of the projections of the cell vertices on `normal` otherwise.
    ///
    /// Fractions 0 and 1 are answered without bisection: the offset is then the upper
    /// (resp. lower) bound of the search interval and the centroid is the origin (resp. the
    /// cell centroid).
    ///
    /// Exhausting the bisection budget is not an error: the best offset found is returned
    /// with a non-converged [`FractionMatchStatus`].
    pub fn match_fraction(
        &self,
        ws: &mut MofWorkspace,
        cell: usize,
        fraction: Real,
        normal: &Vector<Real>,
        bounds: Option<OffsetBounds>,
    ) -> Result<FractionMatch, MofError> {
        self.check_fraction(fraction)?;
        let normal = self.check_normal(normal)?;

        if let Some(b) = bounds {
            if !(b.min <= b.max) || !b.min.is_finite() || !b.max.is_finite() {
                return Err(MofError::InvalidBounds {
                    min: b.min,
                    max: b.max,
                });
            }
        }

        self.decompose_cell(ws, cell)?;

        let (mut lo, mut hi) = match bounds {
            Some(b) => (b.min, b.max),
            None => {
                let vertices = ws.tet_decomp.iter().flat_map(|t| [&t.a, &t.b, &t.c, &t.d]);
                utils::point_cloud_extents_on_dir(&normal, vertices).ok_or(
                    MofError::EmptyRegion {
                        volume: ws.cell_volume,
                    },
                )?
            }
        };
        let span = hi - lo;
        let trivial = self.options.trivial_fraction_tolerance;

        if fraction <= trivial {
            return Ok(FractionMatch {
                offset: hi,
                center: Point::origin(),
                fraction: 0.0,
                span,
                iterations: 0,
                status: FractionMatchStatus::Trivial,
            });
        }

        if fraction >= 1.0 - trivial {
            return Ok(FractionMatch {
                offset: lo,
                center: ws.cell_center,
                fraction: 1.0,
                span,
                iterations: 0,
                status: FractionMatchStatus::Trivial,
            });
        }

        let max_iterations = self.options.max_bisection_iterations.max(1);
        let mut iteration = 1;
        let mut current = self.probe(ws, &normal, 0.5 * (lo + hi), fraction, span, iteration);
        let mut best = current;

        let status = loop {
            let (error, candidate) = current;

            if error < best.0 {
                best = current;
            }

            if error <= self.options.fraction_tolerance {
                return Ok(candidate);
            }

            if candidate.fraction > fraction {
                lo = candidate.offset;
            } else {
                hi = candidate.offset;
            }

            let next = 0.5 * (lo + hi);
            if next <= lo || next >= hi {
                break FractionMatchStatus::Stalled;
            }

            if iteration >= max_iterations {
                break FractionMatchStatus::OutOfIterations;
            }

            iteration += 1;
            current = self.probe(ws, &normal, next, fraction, span, iteration);
        };

        let mut result = best.1;
        result.iterations = iteration;
        result.status = status;

        log::debug!(
            "Fraction matching stopped without converging ({:?}) after {} iterations: \
             target = {}, fraction = {}, offset = {}.",
            status,
            iteration,
            fraction,
            result.fraction,
            result.offset
        );

        Ok(result)
    }

    /// Evaluates the plane `normal · x >= offset` and its distance to the target fraction.
    fn probe(
        &self,
        ws: &mut MofWorkspace,
        normal: &UnitVector<Real>,
        offset: Real,
        target: Real,
        span: Real,
        iteration: usize,
    ) -> (Real, FractionMatch) {
        let eval = self.evaluate_cached(ws, &Plane::new(*normal, offset));

        log::trace!(
            "Fraction matching, iteration {}: offset = {}, fraction = {}.",
            iteration,
            offset,
            eval.fraction
        );

        let result = FractionMatch {
            offset,
            center: eval.center,
            fraction: eval.fraction,
            span,
            iterations: iteration,
            status: FractionMatchStatus::Converged,
        };

        ((eval.fraction - target).abs(), result)
    }
}
