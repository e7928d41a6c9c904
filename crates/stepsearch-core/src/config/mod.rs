//! Configuration of a line search.
//!
//! A [`SearchConfig`] is an immutable value object holding the method
//! selector and every constant the strategies read. It is validated once when
//! a [`StepSearcher`](crate::search::StepSearcher) is built; a searcher never
//! fails on configuration afterwards.
//!
//! # Parameter Guidelines
//!
//! ## Gradient descent
//! ```rust
//! # use stepsearch_core::prelude::*;
//! let config = SearchConfig::<f64>::armijo(); // c₁ = 10⁻⁴, halve on failure
//! ```
//!
//! ## Quasi-Newton methods
//! ```rust
//! # use stepsearch_core::prelude::*;
//! let config = SearchConfig::<f64>::wolfe(); // c₁ = 10⁻⁴, c₂ = 0.9
//! ```
//!
//! ## From a method name
//! ```rust
//! # use stepsearch_core::prelude::*;
//! let config = SearchConfig::<f64>::from_method_name("Armijo")?.with_alpha0(0.5);
//! assert_eq!(config.method, SearchMethod::Armijo);
//! assert!(SearchConfig::<f64>::from_method_name("Unknown").is_err());
//! # Ok::<(), stepsearch_core::error::SearchError>(())
//! ```

use crate::{
    error::{Result, SearchError},
    types::Scalar,
};
use num_traits::Float;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The step-size selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchMethod {
    /// Fixed step `c`, no oracle calls.
    Constant,
    /// Backtracking until the sufficient decrease condition holds.
    Armijo,
    /// Bracketing and zoom until the strong Wolfe conditions hold.
    Wolfe,
    /// Exact minimization along the ray, delegated to the oracle.
    Best,
}

impl SearchMethod {
    /// All recognised methods.
    pub const ALL: [SearchMethod; 4] = [
        SearchMethod::Constant,
        SearchMethod::Armijo,
        SearchMethod::Wolfe,
        SearchMethod::Best,
    ];

    /// Canonical name of the method.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Constant => "Constant",
            Self::Armijo => "Armijo",
            Self::Wolfe => "Wolfe",
            Self::Best => "Best",
        }
    }
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchMethod {
    type Err = SearchError;

    /// Parses a method name, case-insensitively.
    ///
    /// Besides the canonical names, `fixed`, `backtracking`, `strong-wolfe`
    /// and `exact` are accepted.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "constant" | "fixed" => Ok(Self::Constant),
            "armijo" | "backtracking" => Ok(Self::Armijo),
            "wolfe" | "strong-wolfe" | "strong_wolfe" => Ok(Self::Wolfe),
            "best" | "exact" => Ok(Self::Best),
            _ => Err(SearchError::unknown_method(s)),
        }
    }
}

/// Parameters of a line search.
///
/// # Wolfe Condition Constants
/// - **c₁**: sufficient decrease, φ(α) ≤ φ(0) + c₁·α·φ′(0), range (0, 1)
/// - **c₂**: curvature, |φ′(α)| ≤ -c₂·φ′(0), range (c₁, 1)
///
/// # Hardening
/// `min_step`, `max_step`, `max_iterations`, `max_zoom_iterations` and
/// `interval_tolerance` bound every loop so that a search always terminates,
/// even for a non-descent direction or a noisy oracle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig<T>
where
    T: Scalar,
{
    /// Strategy used by the searcher
    pub method: SearchMethod,

    /// Armijo parameter c₁ ∈ (0,1)
    pub c1: T,

    /// Wolfe curvature parameter c₂ ∈ (c₁,1), Wolfe only
    pub c2: T,

    /// Initial step size α₀ > 0
    pub alpha0: T,

    /// Fixed step returned by the Constant strategy
    pub c: T,

    /// Backtracking reduction factor ρ ∈ (0,1), Armijo only
    pub rho: T,

    /// Step size below which backtracking reports failure
    pub min_step: T,

    /// Step size ceiling for the bracketing phase
    pub max_step: T,

    /// Maximum number of bracketing iterations
    pub max_iterations: usize,

    /// Maximum number of zoom iterations
    pub max_zoom_iterations: usize,

    /// Bracket width below which zoom reports failure
    pub interval_tolerance: T,

    /// Start from the previous step when one is given
    ///
    /// On by default for Wolfe only; Armijo starts at α₀ unless enabled.
    pub warm_start: bool,
}

impl<T> Default for SearchConfig<T>
where
    T: Scalar,
{
    fn default() -> Self {
        Self {
            method: SearchMethod::Wolfe,
            c1: <T as Scalar>::from_f64(1e-4),
            c2: <T as Scalar>::from_f64(0.9),
            alpha0: T::one(),
            c: T::one(),
            rho: <T as Scalar>::from_f64(0.5),
            min_step: T::MIN_STEP_SIZE,
            max_step: T::MAX_STEP_SIZE,
            max_iterations: 50,
            max_zoom_iterations: 100,
            interval_tolerance: <T as Scalar>::from_f64(1e-12),
            warm_start: true,
        }
    }
}

impl<T> SearchConfig<T>
where
    T: Scalar,
{
    /// Creates default parameters for the given method.
    pub fn new(method: SearchMethod) -> Self {
        Self {
            method,
            warm_start: method == SearchMethod::Wolfe,
            ..Self::default()
        }
    }

    /// Parses a method name and returns its default parameters.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Configuration` if the name is not recognised.
    pub fn from_method_name(name: &str) -> Result<Self> {
        name.parse().map(Self::new)
    }

    /// Fixed step size `c`.
    pub fn constant(c: T) -> Self {
        Self {
            c,
            ..Self::new(SearchMethod::Constant)
        }
    }

    /// Backtracking with c₁ = 10⁻⁴ and ρ = 0.5.
    pub fn armijo() -> Self {
        Self::new(SearchMethod::Armijo)
    }

    /// Strong Wolfe with c₁ = 10⁻⁴ and c₂ = 0.9.
    pub fn wolfe() -> Self {
        Self::new(SearchMethod::Wolfe)
    }

    /// Exact minimization delegated to the oracle.
    pub fn best() -> Self {
        Self::new(SearchMethod::Best)
    }

    /// Sets the sufficient decrease constant.
    pub fn with_c1(mut self, c1: T) -> Self {
        self.c1 = c1;
        self
    }

    /// Sets the curvature constant.
    pub fn with_c2(mut self, c2: T) -> Self {
        self.c2 = c2;
        self
    }

    /// Sets the initial step size.
    pub fn with_alpha0(mut self, alpha0: T) -> Self {
        self.alpha0 = alpha0;
        self
    }

    /// Sets the fixed step of the Constant strategy.
    pub fn with_constant_step(mut self, c: T) -> Self {
        self.c = c;
        self
    }

    /// Sets the backtracking reduction factor.
    pub fn with_rho(mut self, rho: T) -> Self {
        self.rho = rho;
        self
    }

    /// Sets the backtracking floor.
    pub fn with_min_step(mut self, min_step: T) -> Self {
        self.min_step = min_step;
        self
    }

    /// Sets the bracketing ceiling.
    pub fn with_max_step(mut self, max_step: T) -> Self {
        self.max_step = max_step;
        self
    }

    /// Sets the bracketing iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the zoom iteration cap.
    pub fn with_max_zoom_iterations(mut self, max_zoom_iterations: usize) -> Self {
        self.max_zoom_iterations = max_zoom_iterations;
        self
    }

    /// Sets the zoom bracket-width floor.
    pub fn with_interval_tolerance(mut self, interval_tolerance: T) -> Self {
        self.interval_tolerance = interval_tolerance;
        self
    }

    /// Enables or disables warm starting from the previous step.
    pub fn with_warm_start(mut self, warm_start: bool) -> Self {
        self.warm_start = warm_start;
        self
    }

    /// Validates the parameters read by the configured method.
    ///
    /// Constants the method never reads are not checked, so e.g. a Constant
    /// configuration may carry any `c2`.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Configuration` if:
    /// - `c` is not finite and positive (Constant)
    /// - `c1 ∉ (0, 1)`, `alpha0` is not finite and positive or
    ///   `max_step <= alpha0` (Armijo, Wolfe)
    /// - `rho ∉ (0, 1)` or `min_step` is not positive (Armijo)
    /// - `c2 ∉ (c1, 1)`, `interval_tolerance <= 0`
    ///   or an iteration cap is zero (Wolfe)
    pub fn validate(&self) -> Result<()> {
        match self.method {
            SearchMethod::Constant => {
                if !is_positive(self.c) {
                    return Err(invalid("Constant step must be finite and positive", "c", self.c));
                }
            }
            SearchMethod::Best => {}
            SearchMethod::Armijo | SearchMethod::Wolfe => {
                if !(self.c1 > T::zero() && self.c1 < T::one()) {
                    return Err(invalid("Armijo constant c1 must be in (0, 1)", "c1", self.c1));
                }
                if !is_positive(self.alpha0) {
                    return Err(invalid(
                        "Initial step size must be finite and positive",
                        "alpha0",
                        self.alpha0,
                    ));
                }
                if !(self.max_step > self.alpha0) {
                    return Err(invalid(
                        "Maximum step size must be greater than alpha0",
                        "max_step",
                        self.max_step,
                    ));
                }
            }
        }

        if self.method == SearchMethod::Armijo {
            if !(self.rho > T::zero() && self.rho < T::one()) {
                return Err(invalid("Backtracking factor rho must be in (0, 1)", "rho", self.rho));
            }
            if !is_positive(self.min_step) {
                return Err(invalid(
                    "Minimum step size must be finite and positive",
                    "min_step",
                    self.min_step,
                ));
            }
        }

        if self.method == SearchMethod::Wolfe {
            if !(self.c2 > self.c1 && self.c2 < T::one()) {
                return Err(invalid("Wolfe constant c2 must satisfy c1 < c2 < 1", "c2", self.c2));
            }
            if !is_positive(self.interval_tolerance) {
                return Err(invalid(
                    "Interval tolerance must be finite and positive",
                    "interval_tolerance",
                    self.interval_tolerance,
                ));
            }
            if self.max_iterations == 0 {
                return Err(SearchError::configuration(
                    "Maximum iterations must be at least 1",
                    "max_iterations",
                    "0",
                ));
            }
            if self.max_zoom_iterations == 0 {
                return Err(SearchError::configuration(
                    "Maximum zoom iterations must be at least 1",
                    "max_zoom_iterations",
                    "0",
                ));
            }
        }

        Ok(())
    }
}

fn is_positive<T: Scalar>(x: T) -> bool {
    <T as Float>::is_finite(x) && x > T::zero()
}

fn invalid<T: Scalar>(reason: &str, parameter: &str, value: T) -> SearchError {
    SearchError::configuration(reason, parameter, value.to_string())
}
