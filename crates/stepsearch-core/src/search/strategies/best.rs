use crate::{
    error::Result,
    oracle::Oracle,
    search::result::{LineSearchResult, Termination},
    types::{DVector, Scalar},
};
use log::{debug, warn};
use num_traits::Float;

/// Delegates to the oracle's exact directional minimizer.
///
/// The step is accepted when it is finite and non-negative. The oracle call
/// counts as one function evaluation.
pub(crate) fn best<T, O>(
    oracle: &O,
    point: &DVector<T>,
    direction: &DVector<T>,
) -> Result<LineSearchResult<T>>
where
    T: Scalar,
    O: Oracle<T> + ?Sized,
{
    let result = match oracle.minimize_directional(point, direction)? {
        Some((step, _)) if Float::is_finite(step) && step >= T::zero() => {
            LineSearchResult::success(step, Termination::Delegated)
        }
        Some((step, _)) if !Float::is_finite(step) => {
            warn!("Best: oracle returned a non-finite step ({})", step);
            LineSearchResult::failure(Termination::NonFinite)
        }
        Some((step, _)) => {
            debug!("Best: oracle returned a negative step ({})", step);
            LineSearchResult::failure(Termination::NoMinimizer)
        }
        None => {
            debug!("Best: oracle has no minimizer along the direction");
            LineSearchResult::failure(Termination::NoMinimizer)
        }
    };
    Ok(result.with_counts(1, 1, 0))
}
