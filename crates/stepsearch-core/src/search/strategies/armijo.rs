use crate::{
    config::SearchConfig,
    error::Result,
    oracle::Oracle,
    search::{
        line::{sufficient_decrease, LineFunction},
        observer::{SearchObserver, SearchPhase},
        result::{LineSearchResult, Termination},
    },
    types::Scalar,
};
use log::{debug, trace, warn};
use num_traits::Float;

/// Backtracking line search with the Armijo sufficient decrease condition.
///
/// Starting with `initial`:
/// 1. If φ(α) ≤ φ(0) + c₁·α·φ′(0), accept α.
/// 2. Otherwise α ← ρ·α.
/// 3. Give up once α < `min_step`.
///
/// Needs φ′ only at the origin, and terminates after
/// O(log(α₀ / min_step)) evaluations.
pub(crate) fn armijo<T, O>(
    config: &SearchConfig<T>,
    line: &mut LineFunction<'_, T, O>,
    initial: T,
    observer: &mut dyn SearchObserver<T>,
) -> Result<LineSearchResult<T>>
where
    T: Scalar,
    O: Oracle<T> + ?Sized,
{
    let phi0 = line.phi0()?;
    let dphi0 = line.dphi0()?;
    if !Float::is_finite(phi0) || !Float::is_finite(dphi0) {
        warn!("Armijo: non-finite value at the origin (phi0 = {}, dphi0 = {})", phi0, dphi0);
        return Ok(line.finish(None, Termination::NonFinite, 0));
    }
    if dphi0 >= T::zero() {
        debug!("Armijo: direction is not a descent direction (dphi0 = {})", dphi0);
    }

    let mut alpha = initial;
    let mut iterations = 0;
    loop {
        iterations += 1;
        let phi = line.phi(alpha)?;
        observer.on_trial(SearchPhase::Backtracking, alpha, phi);
        trace!("Armijo: i: {:>2}  a: {}  v: {}", iterations, alpha, phi);

        if sufficient_decrease(phi, phi0, dphi0, config.c1, alpha) {
            return Ok(line.finish(Some(alpha), Termination::Accepted, iterations));
        }

        alpha = alpha * config.rho;
        if alpha < config.min_step {
            debug!("Armijo: exiting after step underflow ({} < {})", alpha, config.min_step);
            return Ok(line.finish(None, Termination::StepUnderflow, iterations));
        }
    }
}
