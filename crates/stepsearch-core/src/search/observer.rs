//! Observer support for line searches.
//!
//! This module provides a trait for monitoring a search as it runs: which
//! steps it tries, which bracket zoom is refining, and how it ends. The
//! strategies also emit `log` records; observers are the programmatic
//! counterpart.

use crate::config::SearchMethod;
use crate::search::result::{LineSearchResult, Termination};
use crate::types::Scalar;

/// Phase of a search in which a trial step is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchPhase {
    /// Armijo backtracking.
    Backtracking,
    /// Wolfe expansion looking for a bracket.
    Bracketing,
    /// Bisection inside a bracket.
    Zoom,
}

/// Trait for line search observers.
///
/// Every method has a no-op default, so an observer only implements the
/// events it cares about.
pub trait SearchObserver<T: Scalar> {
    /// Called once before the strategy runs.
    fn on_search_start(&mut self, method: SearchMethod) {
        let _ = method; // Unused by default
    }

    /// Called after φ has been evaluated at a trial step.
    fn on_trial(&mut self, phase: SearchPhase, alpha: T, value: T) {
        let _ = (phase, alpha, value); // Unused by default
    }

    /// Called at the start of each zoom iteration with the current bracket.
    ///
    /// `low` is the endpoint with the smallest known φ; it may be larger
    /// than `high`.
    fn on_bracket(&mut self, low: T, high: T) {
        let _ = (low, high); // Unused by default
    }

    /// Called once with the final result.
    fn on_search_end(&mut self, result: &LineSearchResult<T>) {
        let _ = result; // Unused by default
    }
}

/// An observer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl<T: Scalar> SearchObserver<T> for NoOpObserver {
    // Use default implementations
}

/// A single event recorded by [`TraceObserver`].
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent<T> {
    /// The search started.
    Start {
        /// Method of the search
        method: SearchMethod,
    },
    /// φ was evaluated at `alpha`.
    Trial {
        /// Phase of the evaluation
        phase: SearchPhase,
        /// Trial step
        alpha: T,
        /// φ(alpha)
        value: T,
    },
    /// Zoom is about to bisect `[low, high]`.
    Bracket {
        /// Endpoint with the smallest known φ
        low: T,
        /// Other endpoint
        high: T,
    },
    /// The search ended.
    End {
        /// Why it ended
        termination: Termination,
        /// Accepted step, if any
        step: Option<T>,
    },
}

/// An observer that records every event in order.
#[derive(Debug, Clone, Default)]
pub struct TraceObserver<T> {
    events: Vec<TraceEvent<T>>,
}

impl<T: Scalar> TraceObserver<T> {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// All recorded events.
    pub fn events(&self) -> &[TraceEvent<T>] {
        &self.events
    }

    /// Trial steps of the given phase, in evaluation order.
    pub fn trial_steps(&self, phase: SearchPhase) -> Vec<T> {
        self.events
            .iter()
            .filter_map(|event| match event {
                TraceEvent::Trial { phase: p, alpha, .. } if *p == phase => Some(*alpha),
                _ => None,
            })
            .collect()
    }

    /// Forget all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<T: Scalar> SearchObserver<T> for TraceObserver<T> {
    fn on_search_start(&mut self, method: SearchMethod) {
        self.events.push(TraceEvent::Start { method });
    }

    fn on_trial(&mut self, phase: SearchPhase, alpha: T, value: T) {
        self.events.push(TraceEvent::Trial { phase, alpha, value });
    }

    fn on_bracket(&mut self, low: T, high: T) {
        self.events.push(TraceEvent::Bracket { low, high });
    }

    fn on_search_end(&mut self, result: &LineSearchResult<T>) {
        self.events.push(TraceEvent::End {
            termination: result.termination,
            step: result.step_size,
        });
    }
}
