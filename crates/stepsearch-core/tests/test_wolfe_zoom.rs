//! Tests for the Wolfe bracketing phase and its zoom refinement.
//!
//! Observers are used to look inside the search: every zoom trial must lie
//! in the bracket announced just before it, and every loop must stop on
//! objectives that give it no reason to.

use stepsearch_core::{
    config::SearchConfig,
    error::Result,
    oracle::{Oracle, QuadraticOracle},
    search::{LineSearch, SearchObserver, SearchPhase, StepSearcher, Termination, TraceObserver},
    types::DVector,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// f(x) = Σ sin(3xᵢ) + 0.5·xᵢ², with many local minima.
#[derive(Debug, Clone)]
struct Wavy;

impl Oracle<f64> for Wavy {
    fn value(&self, point: &DVector<f64>) -> Result<f64> {
        Ok(point.iter().map(|&x| (3.0 * x).sin() + 0.5 * x * x).sum())
    }

    fn directional_gradient(&self, point: &DVector<f64>, direction: &DVector<f64>) -> Result<f64> {
        Ok(point
            .iter()
            .zip(direction.iter())
            .map(|(&x, &d)| (3.0 * (3.0 * x).cos() + x) * d)
            .sum())
    }
}

/// f(x) = -Σ xᵢ, unbounded below.
#[derive(Debug, Clone)]
struct Downhill;

impl Oracle<f64> for Downhill {
    fn value(&self, point: &DVector<f64>) -> Result<f64> {
        Ok(-point.sum())
    }

    fn directional_gradient(&self, _point: &DVector<f64>, direction: &DVector<f64>) -> Result<f64> {
        Ok(-direction.sum())
    }
}

/// Finite values, but the slope is NaN wherever `x[0] < 1.5`.
#[derive(Debug, Clone)]
struct BrokenSlope;

impl Oracle<f64> for BrokenSlope {
    fn value(&self, point: &DVector<f64>) -> Result<f64> {
        Ok(point.dot(point))
    }

    fn directional_gradient(&self, point: &DVector<f64>, direction: &DVector<f64>) -> Result<f64> {
        if point[0] < 1.5 {
            Ok(f64::NAN)
        } else {
            Ok(2.0 * point.dot(direction))
        }
    }
}

/// Infinite everywhere except at the starting point.
#[derive(Debug, Clone)]
struct Cliff;

impl Oracle<f64> for Cliff {
    fn value(&self, point: &DVector<f64>) -> Result<f64> {
        if point[0] == 2.0 {
            Ok(4.0)
        } else {
            Ok(f64::INFINITY)
        }
    }

    fn directional_gradient(&self, _point: &DVector<f64>, direction: &DVector<f64>) -> Result<f64> {
        Ok(4.0 * direction[0])
    }
}

/// Checks each zoom trial against the bracket announced before it.
#[derive(Debug, Default)]
struct ContainmentObserver {
    bracket: Option<(f64, f64)>,
    zoom_trials: usize,
    violations: Vec<(f64, f64, f64)>,
}

impl SearchObserver<f64> for ContainmentObserver {
    fn on_bracket(&mut self, low: f64, high: f64) {
        self.bracket = Some((low, high));
    }

    fn on_trial(&mut self, phase: SearchPhase, alpha: f64, _value: f64) {
        if phase != SearchPhase::Zoom {
            return;
        }
        self.zoom_trials += 1;
        match self.bracket {
            Some((low, high)) if alpha >= low.min(high) && alpha <= low.max(high) => {}
            Some((low, high)) => self.violations.push((alpha, low, high)),
            None => self.violations.push((alpha, f64::NAN, f64::NAN)),
        }
    }
}

#[test]
fn test_zoom_trials_stay_in_bracket() {
    init_logging();
    let mut zoomed = 0;

    for start in [-3.0, -1.7, -0.4, 0.3, 1.1, 2.6, 4.0] {
        for alpha0 in [0.5, 1.0, 4.0, 20.0] {
            let x = DVector::from_vec(vec![start]);
            let slope = Wavy.directional_gradient(&x, &DVector::from_vec(vec![1.0])).unwrap();
            let d = DVector::from_vec(vec![-slope]);
            if slope == 0.0 {
                continue;
            }

            let config = SearchConfig::wolfe().with_alpha0(alpha0).with_c2(0.1);
            let searcher = StepSearcher::new(config).unwrap();
            let mut observer = ContainmentObserver::default();
            let result = searcher
                .search_with_observer(&Wavy, &x, &d, None, &mut observer)
                .unwrap();

            assert!(
                observer.violations.is_empty(),
                "start {} alpha0 {}: {:?}",
                start,
                alpha0,
                observer.violations
            );
            assert!(result.iterations >= 1);
            zoomed += observer.zoom_trials;
        }
    }
    assert!(zoomed > 0);
}

#[test]
fn test_zoom_keeps_low_endpoint_value() {
    init_logging();
    // φ(α) = (2 - α)^2 with c2 = 0.1: the second bracket is [2.5, 0] and
    // φ(1.25) must be compared against φ(2.5) = 0.25, not φ(0)
    let x = DVector::from_vec(vec![2.0]);
    let d = DVector::from_vec(vec![-1.0]);
    let quadratic = QuadraticOracle::<f64>::scaled_identity(1, 2.0);

    let config = SearchConfig::wolfe().with_alpha0(10.0).with_c2(0.1);
    let searcher = StepSearcher::new(config).unwrap();
    let mut trace = TraceObserver::new();
    let result = searcher
        .search_with_observer(&quadratic, &x, &d, None, &mut trace)
        .unwrap();

    assert_eq!(trace.trial_steps(SearchPhase::Zoom), vec![5.0, 2.5, 1.25, 1.875]);
    assert_eq!(result.step_size, Some(1.875));
    // φ′ at 0, 2.5 and 1.875 only: 1.25 is rejected on its value
    assert_eq!(result.gradient_evals, 3);
}

#[test]
fn test_bracketing_compares_against_origin_value() {
    init_logging();
    // Along d = -1 from x = 2.7, φ(2) > φ(1) but φ(2) is still well below
    // φ(0) and satisfies both Wolfe conditions, so it is accepted directly
    let x = DVector::from_vec(vec![2.7]);
    let d = DVector::from_vec(vec![-1.0]);

    let searcher = StepSearcher::new(SearchConfig::wolfe()).unwrap();
    let mut trace = TraceObserver::new();
    let result = searcher
        .search_with_observer(&Wavy, &x, &d, None, &mut trace)
        .unwrap();

    assert_eq!(trace.trial_steps(SearchPhase::Bracketing), vec![1.0, 2.0]);
    assert!(trace.trial_steps(SearchPhase::Zoom).is_empty());
    assert_eq!(result.termination, Termination::Accepted);
    assert_eq!(result.step_size, Some(2.0));
}

#[test]
fn test_unbounded_objective_stops_at_max_step() {
    init_logging();
    let x = DVector::from_vec(vec![0.0, 0.0]);
    let d = DVector::from_vec(vec![1.0, 1.0]);

    let searcher = StepSearcher::new(SearchConfig::wolfe()).unwrap();
    let result = searcher.search(&Downhill, &x, &d, None).unwrap();
    assert_eq!(result.step_size, None);
    assert_eq!(result.termination, Termination::MaxStep);

    let searcher = StepSearcher::new(SearchConfig::wolfe().with_max_step(100.0)).unwrap();
    let mut trace = TraceObserver::new();
    let result = searcher
        .search_with_observer(&Downhill, &x, &d, None, &mut trace)
        .unwrap();
    assert_eq!(result.termination, Termination::MaxStep);
    assert_eq!(
        trace.trial_steps(SearchPhase::Bracketing),
        vec![1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0]
    );
}

#[test]
fn test_unbounded_objective_stops_at_iteration_cap() {
    init_logging();
    let x = DVector::from_vec(vec![0.0]);
    let d = DVector::from_vec(vec![1.0]);

    let searcher = StepSearcher::new(SearchConfig::wolfe().with_max_iterations(3)).unwrap();
    let result = searcher.search(&Downhill, &x, &d, None).unwrap();
    assert_eq!(result.step_size, None);
    assert_eq!(result.termination, Termination::MaxIterations);
    assert_eq!(result.iterations, 3);
}

#[test]
fn test_non_finite_slope_stops_search() {
    init_logging();
    let x = DVector::from_vec(vec![2.0]);
    let d = DVector::from_vec(vec![-1.0]);

    let searcher = StepSearcher::new(SearchConfig::wolfe()).unwrap();
    let result = searcher.search(&BrokenSlope, &x, &d, None).unwrap();
    assert_eq!(result.step_size, None);
    assert_eq!(result.termination, Termination::NonFinite);
}

#[test]
fn test_infinite_values_end_in_collapse_or_cap() {
    init_logging();
    let x = DVector::from_vec(vec![2.0]);
    let d = DVector::from_vec(vec![-1.0]);

    let searcher = StepSearcher::new(SearchConfig::wolfe()).unwrap();
    let result = searcher.search(&Cliff, &x, &d, None).unwrap();
    assert_eq!(result.step_size, None);
    assert_eq!(result.termination, Termination::BracketCollapsed);

    let searcher = StepSearcher::new(SearchConfig::wolfe().with_max_zoom_iterations(5)).unwrap();
    let result = searcher.search(&Cliff, &x, &d, None).unwrap();
    assert_eq!(result.termination, Termination::MaxIterations);
    assert_eq!(result.iterations, 6);
}
