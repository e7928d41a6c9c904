//! Step-size selection along a search direction.
//!
//! This module implements the line searches used inside iterative
//! optimization methods (gradient descent, Newton, quasi-Newton). Given a
//! point, a direction and an [`Oracle`], a search picks a step length that
//! satisfies the configured sufficiency condition.
//!
//! # Mathematical Foundation
//!
//! ## Line Search Problem
//!
//! Given:
//! - A point x ∈ ℝⁿ
//! - A search direction d ∈ ℝⁿ, normally a descent direction (∇f(x)·d < 0)
//! - An objective function f: ℝⁿ → ℝ
//!
//! Find a step size α > 0 that gives enough decrease of
//! φ(α) = f(x + α d).
//!
//! ### Armijo Condition (Sufficient Decrease)
//! φ(α) ≤ φ(0) + c₁ α φ′(0)
//!
//! where 0 < c₁ < 1 (typically c₁ = 10⁻⁴).
//!
//! ### Strong Wolfe Conditions
//! 1. Armijo: φ(α) ≤ φ(0) + c₁ α φ′(0)
//! 2. Strong curvature: |φ′(α)| ≤ -c₂ φ′(0)
//!
//! where 0 < c₁ < c₂ < 1, typically c₂ = 0.9 for quasi-Newton methods.
//!
//! # Strategies
//!
//! | Method     | Oracle calls                 | Guarantees                       |
//! |------------|------------------------------|----------------------------------|
//! | `Constant` | none                         | returns `c`                      |
//! | `Armijo`   | φ per trial, φ′(0) once      | sufficient decrease              |
//! | `Wolfe`    | φ and φ′ per trial           | strong Wolfe conditions          |
//! | `Best`     | `minimize_directional` once  | whatever the oracle guarantees   |
//!
//! Failing to find a step is not an error. The result then carries
//! `step_size: None` and a [`Termination`] explaining why.
//!
//! # Example
//!
//! ```
//! use stepsearch_core::prelude::*;
//!
//! // f(x) = xᵀx
//! let oracle = QuadraticOracle::<f64>::scaled_identity(1, 2.0);
//! let point = DVector::from_vec(vec![2.0]);
//! let direction = DVector::from_vec(vec![-1.0]);
//!
//! let searcher = StepSearcher::new(SearchConfig::wolfe()).unwrap();
//! let result = searcher.search(&oracle, &point, &direction, None).unwrap();
//! assert_eq!(result.step_size, Some(1.0));
//! assert_eq!(result.termination, Termination::Accepted);
//! ```

pub mod line;
pub mod observer;
pub mod result;
mod strategies;

pub use line::{strong_curvature, sufficient_decrease, LineFunction};
pub use observer::{NoOpObserver, SearchObserver, SearchPhase, TraceEvent, TraceObserver};
pub use result::{LineSearchResult, Termination};

use crate::{
    config::{SearchConfig, SearchMethod},
    error::{Result, SearchError},
    oracle::Oracle,
    types::{DVector, Scalar},
};
use log::debug;
use num_traits::Float;
use std::fmt::Debug;

/// Trait for step-size searches.
pub trait LineSearch<T>: Debug
where
    T: Scalar,
{
    /// Searches along `direction` from `point`, reporting progress to
    /// `observer`.
    ///
    /// `previous_step` is the step accepted at the previous outer
    /// iteration, if any. Searches may use it as a warm start.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::DimensionMismatch` when `point` and
    /// `direction` differ in length, and propagates oracle failures.
    /// Not finding a step is reported in the result, not as an error.
    fn search_with_observer<O>(
        &self,
        oracle: &O,
        point: &DVector<T>,
        direction: &DVector<T>,
        previous_step: Option<T>,
        observer: &mut dyn SearchObserver<T>,
    ) -> Result<LineSearchResult<T>>
    where
        O: Oracle<T> + ?Sized;

    /// Searches without an observer.
    fn search<O>(
        &self,
        oracle: &O,
        point: &DVector<T>,
        direction: &DVector<T>,
        previous_step: Option<T>,
    ) -> Result<LineSearchResult<T>>
    where
        O: Oracle<T> + ?Sized,
    {
        self.search_with_observer(oracle, point, direction, previous_step, &mut NoOpObserver)
    }

    /// Returns only the step, `None` meaning "no step found".
    fn step<O>(
        &self,
        oracle: &O,
        point: &DVector<T>,
        direction: &DVector<T>,
        previous_step: Option<T>,
    ) -> Result<Option<T>>
    where
        O: Oracle<T> + ?Sized,
    {
        Ok(self.search(oracle, point, direction, previous_step)?.step_size)
    }

    /// Returns the name of this search.
    fn name(&self) -> &str;
}

/// Line search dispatching on [`SearchConfig::method`].
///
/// Holds only a validated configuration, so one searcher can be shared
/// across threads and reused for any number of searches.
#[derive(Debug, Clone, PartialEq)]
pub struct StepSearcher<T>
where
    T: Scalar,
{
    config: SearchConfig<T>,
}

impl<T> StepSearcher<T>
where
    T: Scalar,
{
    /// Creates a searcher from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Configuration` if a constant used by the
    /// configured method is out of range.
    pub fn new(config: SearchConfig<T>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a searcher with default constants for a method given by name.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Configuration` for an unknown method name.
    pub fn from_method_name(name: &str) -> Result<Self> {
        Self::new(SearchConfig::from_method_name(name)?)
    }

    /// The configuration of this searcher.
    pub fn config(&self) -> &SearchConfig<T> {
        &self.config
    }

    /// The configured method.
    pub fn method(&self) -> SearchMethod {
        self.config.method
    }

    /// First trial step of Armijo and Wolfe.
    ///
    /// With warm start enabled a finite positive `previous_step` replaces
    /// `alpha0`, capped at `max_step`. Armijo configs leave it off unless
    /// asked.
    pub fn initial_step(&self, previous_step: Option<T>) -> T {
        match previous_step {
            Some(step) if self.config.warm_start && Float::is_finite(step) && step > T::zero() => {
                Float::min(step, self.config.max_step)
            }
            _ => self.config.alpha0,
        }
    }

    fn dispatch<O>(
        &self,
        oracle: &O,
        point: &DVector<T>,
        direction: &DVector<T>,
        previous_step: Option<T>,
        observer: &mut dyn SearchObserver<T>,
    ) -> Result<LineSearchResult<T>>
    where
        O: Oracle<T> + ?Sized,
    {
        match self.config.method {
            SearchMethod::Constant => Ok(strategies::constant(&self.config)),
            SearchMethod::Armijo => {
                let initial = self.initial_step(previous_step);
                let mut line = LineFunction::new(oracle, point, direction);
                strategies::armijo(&self.config, &mut line, initial, observer)
            }
            SearchMethod::Wolfe => {
                let initial = self.initial_step(previous_step);
                let mut line = LineFunction::new(oracle, point, direction);
                strategies::wolfe(&self.config, &mut line, initial, observer)
            }
            SearchMethod::Best => strategies::best(oracle, point, direction),
        }
    }
}

impl<T> LineSearch<T> for StepSearcher<T>
where
    T: Scalar,
{
    fn search_with_observer<O>(
        &self,
        oracle: &O,
        point: &DVector<T>,
        direction: &DVector<T>,
        previous_step: Option<T>,
        observer: &mut dyn SearchObserver<T>,
    ) -> Result<LineSearchResult<T>>
    where
        O: Oracle<T> + ?Sized,
    {
        // Constant never looks at the vectors
        if self.config.method != SearchMethod::Constant && point.len() != direction.len() {
            return Err(SearchError::dimension_mismatch(point.len(), direction.len()));
        }

        observer.on_search_start(self.config.method);
        let result = self.dispatch(oracle, point, direction, previous_step, observer)?;
        observer.on_search_end(&result);

        debug!(
            "{}: {} after {} iterations ({} values, {} slopes), step = {:?}",
            self.config.method,
            result.termination,
            result.iterations,
            result.function_evals,
            result.gradient_evals,
            result.step_size
        );
        Ok(result)
    }

    fn name(&self) -> &str {
        self.config.method.name()
    }
}
