//! Core traits and strategies for step-size selection.
//!
//! This crate provides the line searches used inside iterative optimization
//! methods. A search receives a point, a direction and an objective
//! [`Oracle`](oracle::Oracle), and returns a step length satisfying the
//! configured condition, or an explicit "no step found" result.
//!
//! # Key Concepts
//!
//! - **Oracle**: The objective as seen by a search (values, directional
//!   derivatives, optionally an exact minimizer along a ray)
//! - **Configuration**: Method selector plus the constants each method reads
//! - **Strategies**: Constant, Armijo backtracking, strong Wolfe with zoom,
//!   and exact minimization delegated to the oracle
//! - **Observers**: Hooks for watching trial steps and brackets
//!
//! # Modules
//!
//! - [`config`]: Method selector and search constants
//! - [`error`]: Error types
//! - [`oracle`]: Oracle interface and reference oracles
//! - [`search`]: The searcher, its results and observers
//! - [`types`]: Scalar trait and vector alias

pub mod config;
pub mod core;
pub mod search;

#[cfg(any(test, feature = "test-utils"))]
pub mod utils;

pub use crate::core::{error, oracle, types};

// Re-export commonly used items at the crate root
pub use error::{Result, SearchError};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use stepsearch_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{SearchConfig, SearchMethod};
    pub use crate::error::{Result, SearchError};
    pub use crate::oracle::{CountingOracle, Oracle, QuadraticOracle};
    pub use crate::search::{
        LineSearch, LineSearchResult, NoOpObserver, SearchObserver, SearchPhase, StepSearcher,
        Termination, TraceEvent, TraceObserver,
    };
    pub use crate::types::{DVector, Scalar};
}
