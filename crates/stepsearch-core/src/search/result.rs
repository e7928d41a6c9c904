//! Outcome of a line search.

use crate::types::Scalar;
use std::fmt;

/// Why a search stopped.
///
/// The first three variants carry a step; every other variant is the
/// "no step found" signal. None of them is an error: the caller decides
/// whether to switch methods, shrink `alpha0` or stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// Sufficient decrease (Armijo) or strong Wolfe conditions hold.
    Accepted,
    /// The Constant strategy returned its fixed step.
    Fixed,
    /// The oracle supplied the exact minimizer.
    Delegated,
    /// Backtracking shrank the step below `min_step`.
    StepUnderflow,
    /// An iteration cap was reached while bracketing or zooming.
    MaxIterations,
    /// Bracketing doubled the step beyond `max_step`.
    MaxStep,
    /// The zoom bracket became narrower than `interval_tolerance`.
    BracketCollapsed,
    /// The oracle produced a non-finite value or derivative.
    NonFinite,
    /// The oracle has no exact minimizer along the direction.
    NoMinimizer,
}

impl Termination {
    /// True for terminations that carry a step.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Accepted | Self::Fixed | Self::Delegated)
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Accepted => "step accepted",
            Self::Fixed => "fixed step",
            Self::Delegated => "exact minimizer from oracle",
            Self::StepUnderflow => "step size underflow",
            Self::MaxIterations => "maximum iterations reached",
            Self::MaxStep => "maximum step size exceeded",
            Self::BracketCollapsed => "bracket collapsed",
            Self::NonFinite => "non-finite oracle output",
            Self::NoMinimizer => "no exact minimizer",
        };
        f.write_str(msg)
    }
}

/// Result of a line search.
///
/// `step_size` is `Some` exactly when `termination.is_success()`; the step is
/// then finite and non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSearchResult<T>
where
    T: Scalar,
{
    /// The accepted step size, or `None` if no step was found
    pub step_size: Option<T>,

    /// Reason the search stopped
    pub termination: Termination,

    /// Number of trial steps examined (bracketing, backtracking and zoom)
    pub iterations: usize,

    /// Number of objective evaluations, φ(0) included
    pub function_evals: usize,

    /// Number of directional derivative evaluations, φ′(0) included
    pub gradient_evals: usize,
}

impl<T> LineSearchResult<T>
where
    T: Scalar,
{
    /// A result carrying `step`.
    pub fn success(step: T, termination: Termination) -> Self {
        debug_assert!(termination.is_success());
        debug_assert!(<T as num_traits::Float>::is_finite(step) && step >= T::zero());
        Self {
            step_size: Some(step),
            termination,
            iterations: 0,
            function_evals: 0,
            gradient_evals: 0,
        }
    }

    /// A "no step found" result.
    pub fn failure(termination: Termination) -> Self {
        debug_assert!(!termination.is_success());
        Self {
            step_size: None,
            termination,
            iterations: 0,
            function_evals: 0,
            gradient_evals: 0,
        }
    }

    /// Attaches iteration and evaluation counts.
    pub fn with_counts(mut self, iterations: usize, function_evals: usize, gradient_evals: usize) -> Self {
        self.iterations = iterations;
        self.function_evals = function_evals;
        self.gradient_evals = gradient_evals;
        self
    }

    /// True if a step was found.
    pub fn is_success(&self) -> bool {
        self.step_size.is_some()
    }

    /// The step, if one was found.
    pub fn step(&self) -> Option<T> {
        self.step_size
    }
}
