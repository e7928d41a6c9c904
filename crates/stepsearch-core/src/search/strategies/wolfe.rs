use crate::{
    config::SearchConfig,
    error::Result,
    oracle::Oracle,
    search::{
        line::{strong_curvature, sufficient_decrease, LineFunction},
        observer::{SearchObserver, SearchPhase},
        result::{LineSearchResult, Termination},
    },
    types::Scalar,
};
use log::{debug, trace, warn};
use num_traits::Float;

/// Interval known to contain steps satisfying the strong Wolfe conditions.
///
/// `low` is the endpoint with the smallest φ seen so far and satisfies
/// sufficient decrease; `high` may lie on either side of it.
#[derive(Debug, Clone, Copy)]
struct Bracket<T> {
    low: T,
    phi_low: T,
    high: T,
}

/// Strong Wolfe line search (Nocedal & Wright, Algorithm 3.5).
///
/// The bracketing phase doubles the step until one of three things happens:
/// - φ(α) violates sufficient decrease, or is not below φ(0) after the
///   first trial: zoom on `[α_prev, α]`;
/// - the strong curvature condition holds: accept α;
/// - φ′(α) ≥ 0: zoom on `[α, α_prev]`.
///
/// A non-finite φ(α) is treated as a step that is too large.
pub(crate) fn wolfe<T, O>(
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
        warn!("Wolfe: non-finite value at the origin (phi0 = {}, dphi0 = {})", phi0, dphi0);
        return Ok(line.finish(None, Termination::NonFinite, 0));
    }
    if dphi0 >= T::zero() {
        debug!("Wolfe: direction is not a descent direction (dphi0 = {})", dphi0);
    }

    let two = <T as Scalar>::from_f64(2.0);
    let mut alpha_prev = T::zero();
    let mut phi_prev = phi0;
    let mut alpha = initial;
    let mut iterations = 0;

    for iteration in 0..config.max_iterations {
        if alpha > config.max_step {
            debug!("Wolfe: exiting after exceeding max step ({} > {})", alpha, config.max_step);
            return Ok(line.finish(None, Termination::MaxStep, iterations));
        }

        iterations += 1;
        let phi = line.phi(alpha)?;
        observer.on_trial(SearchPhase::Bracketing, alpha, phi);
        trace!("Wolfe: i: {:>2}  a: {}  v: {}", iterations, alpha, phi);

        if !Float::is_finite(phi)
            || !sufficient_decrease(phi, phi0, dphi0, config.c1, alpha)
            || (iteration > 0 && phi >= phi0)
        {
            let bracket = Bracket {
                low: alpha_prev,
                phi_low: phi_prev,
                high: alpha,
            };
            return zoom(config, line, bracket, iterations, observer);
        }

        let dphi = line.dphi(alpha)?;
        if !Float::is_finite(dphi) {
            warn!("Wolfe: non-finite slope at a = {}", alpha);
            return Ok(line.finish(None, Termination::NonFinite, iterations));
        }

        if strong_curvature(dphi, dphi0, config.c2) {
            return Ok(line.finish(Some(alpha), Termination::Accepted, iterations));
        }

        if dphi >= T::zero() {
            let bracket = Bracket {
                low: alpha,
                phi_low: phi,
                high: alpha_prev,
            };
            return zoom(config, line, bracket, iterations, observer);
        }

        alpha_prev = alpha;
        phi_prev = phi;
        alpha = alpha * two;
    }

    debug!("Wolfe: bracketing exhausted {} iterations", config.max_iterations);
    Ok(line.finish(None, Termination::MaxIterations, iterations))
}

/// Bisection of a bracket until a strong Wolfe step is found.
///
/// φ(low) is carried along with the bracket and updated whenever `low`
/// moves, so the comparison is always against the value at the current
/// low endpoint.
fn zoom<T, O>(
    config: &SearchConfig<T>,
    line: &mut LineFunction<'_, T, O>,
    mut bracket: Bracket<T>,
    mut iterations: usize,
    observer: &mut dyn SearchObserver<T>,
) -> Result<LineSearchResult<T>>
where
    T: Scalar,
    O: Oracle<T> + ?Sized,
{
    let phi0 = line.phi0()?;
    let dphi0 = line.dphi0()?;
    let half = <T as Scalar>::from_f64(0.5);

    for _ in 0..config.max_zoom_iterations {
        let width = <T as Float>::abs(bracket.high - bracket.low);
        if width < config.interval_tolerance {
            debug!(
                "Wolfe: bracket collapsed to [{}, {}] (width {})",
                bracket.low, bracket.high, width
            );
            return Ok(line.finish(None, Termination::BracketCollapsed, iterations));
        }
        observer.on_bracket(bracket.low, bracket.high);

        iterations += 1;
        let alpha = (bracket.low + bracket.high) * half;
        let phi = line.phi(alpha)?;
        observer.on_trial(SearchPhase::Zoom, alpha, phi);
        trace!(
            "Zoom: i: {:>2}  a: {}  v: {}  [{}, {}]",
            iterations,
            alpha,
            phi,
            bracket.low,
            bracket.high
        );

        if !Float::is_finite(phi)
            || !sufficient_decrease(phi, phi0, dphi0, config.c1, alpha)
            || phi >= bracket.phi_low
        {
            bracket.high = alpha;
            continue;
        }

        let dphi = line.dphi(alpha)?;
        if !Float::is_finite(dphi) {
            warn!("Zoom: non-finite slope at a = {}", alpha);
            return Ok(line.finish(None, Termination::NonFinite, iterations));
        }

        if strong_curvature(dphi, dphi0, config.c2) {
            return Ok(line.finish(Some(alpha), Termination::Accepted, iterations));
        }

        if dphi * (bracket.high - bracket.low) >= T::zero() {
            bracket.high = bracket.low;
        }
        bracket.low = alpha;
        bracket.phi_low = phi;
    }

    debug!("Zoom: exhausted {} iterations", config.max_zoom_iterations);
    Ok(line.finish(None, Termination::MaxIterations, iterations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::QuadraticOracle;
    use crate::search::observer::{NoOpObserver, TraceObserver};
    use crate::types::DVector;
    use crate::utils::test_utils::{LinearOracle, NonFiniteOracle};

    fn sum_of_squares() -> QuadraticOracle<f64> {
        QuadraticOracle::scaled_identity(1, 2.0)
    }

    fn run(
        config: &SearchConfig<f64>,
        oracle: &dyn Oracle<f64>,
        x: f64,
        d: f64,
        initial: f64,
        trace: &mut TraceObserver<f64>,
    ) -> LineSearchResult<f64> {
        let point = DVector::from_vec(vec![x]);
        let direction = DVector::from_vec(vec![d]);
        let mut line = LineFunction::new(oracle, &point, &direction);
        wolfe(config, &mut line, initial, trace).unwrap()
    }

    #[test]
    fn test_accepts_initial_step() {
        let mut trace = TraceObserver::new();
        let result = run(&SearchConfig::wolfe(), &sum_of_squares(), 2.0, -1.0, 1.0, &mut trace);

        assert_eq!(result.step_size, Some(1.0));
        assert_eq!(result.termination, Termination::Accepted);
        assert_eq!(result.iterations, 1);
        assert!(trace.trial_steps(SearchPhase::Zoom).is_empty());
    }

    #[test]
    fn test_zoom_after_overshoot() {
        // φ(α) = (2 - α)^2; α = 10 overshoots, zoom bisects [0, 10]
        let mut trace = TraceObserver::new();
        let result = run(&SearchConfig::wolfe(), &sum_of_squares(), 2.0, -1.0, 10.0, &mut trace);

        assert_eq!(result.step_size, Some(2.5));
        assert_eq!(trace.trial_steps(SearchPhase::Bracketing), vec![10.0]);
        assert_eq!(trace.trial_steps(SearchPhase::Zoom), vec![5.0, 2.5]);
        assert_eq!(result.iterations, 3);
    }

    #[test]
    fn test_zoom_flips_bracket() {
        // With c2 = 0.1, α = 2.5 passes decrease but its slope is positive,
        // so the bracket becomes [2.5, 0]
        let config = SearchConfig::wolfe().with_c2(0.1);
        let mut trace = TraceObserver::new();
        let result = run(&config, &sum_of_squares(), 2.0, -1.0, 10.0, &mut trace);

        assert_eq!(result.step_size, Some(1.875));
        assert_eq!(trace.trial_steps(SearchPhase::Zoom), vec![5.0, 2.5, 1.25, 1.875]);
    }

    #[test]
    fn test_doubles_until_bracketed() {
        // φ(α) = (100 - α)^2, slope too steep until α is close to 100
        let mut trace = TraceObserver::new();
        let result = run(&SearchConfig::wolfe(), &sum_of_squares(), 100.0, -1.0, 1.0, &mut trace);

        assert_eq!(
            trace.trial_steps(SearchPhase::Bracketing),
            vec![1.0, 2.0, 4.0, 8.0, 16.0]
        );
        assert_eq!(result.step_size, Some(16.0));
    }

    #[test]
    fn test_unbounded_hits_max_step() {
        let oracle = LinearOracle::new(DVector::from_vec(vec![-1.0]));
        let mut trace = TraceObserver::new();
        let result = run(&SearchConfig::wolfe(), &oracle, 0.0, 1.0, 1.0, &mut trace);

        assert_eq!(result.step_size, None);
        assert_eq!(result.termination, Termination::MaxStep);
        // 1, 2, ..., 2^19 are tried; 2^20 > 1e6
        assert_eq!(result.iterations, 20);
    }

    #[test]
    fn test_iteration_cap() {
        let oracle = LinearOracle::new(DVector::from_vec(vec![-1.0]));
        let config = SearchConfig::wolfe().with_max_iterations(5);
        let mut trace = TraceObserver::new();
        let result = run(&config, &oracle, 0.0, 1.0, 1.0, &mut trace);

        assert_eq!(result.termination, Termination::MaxIterations);
        assert_eq!(result.iterations, 5);
    }

    #[test]
    fn test_zoom_iteration_cap() {
        let config = SearchConfig::wolfe().with_max_zoom_iterations(1);
        let mut trace = TraceObserver::new();
        let result = run(&config, &sum_of_squares(), 2.0, -1.0, 10.0, &mut trace);

        assert_eq!(result.termination, Termination::MaxIterations);
        assert_eq!(trace.trial_steps(SearchPhase::Zoom), vec![5.0]);
    }

    #[test]
    fn test_bracket_collapse() {
        // [0, 10] is bisected once to [0, 5], which is below the tolerance
        let config = SearchConfig::wolfe().with_interval_tolerance(6.0);
        let point = DVector::from_vec(vec![2.0]);
        let direction = DVector::from_vec(vec![-1.0]);
        let oracle = sum_of_squares();
        let mut line = LineFunction::new(&oracle, &point, &direction);

        let result = wolfe(&config, &mut line, 10.0, &mut NoOpObserver).unwrap();
        assert_eq!(result.step_size, None);
        assert_eq!(result.termination, Termination::BracketCollapsed);
        assert_eq!(result.iterations, 2);
    }

    #[test]
    fn test_non_finite_values_shrink_the_step() {
        // f is NaN for x < 0; α = 8 lands there and is bisected back
        let oracle = NonFiniteOracle::below(0.0);
        let mut trace = TraceObserver::new();
        let result = run(&SearchConfig::wolfe(), &oracle, 1.0, -1.0, 8.0, &mut trace);

        assert_eq!(result.step_size, Some(1.0));
        assert_eq!(trace.trial_steps(SearchPhase::Zoom), vec![4.0, 2.0, 1.0]);
    }

    #[test]
    fn test_non_finite_slope() {
        let oracle = NonFiniteOracle::gradient_below(0.5);
        let mut trace = TraceObserver::new();
        let result = run(&SearchConfig::wolfe(), &oracle, 1.0, -1.0, 1.0, &mut trace);

        assert_eq!(result.step_size, None);
        assert_eq!(result.termination, Termination::NonFinite);
    }
}
