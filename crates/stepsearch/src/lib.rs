//! Step-size selection for iterative optimization.
//!
//! `stepsearch` picks the step length α along a search direction d at a
//! point x, so that an outer method (gradient descent, Newton,
//! quasi-Newton) can move to x + α·d. Four methods are available:
//!
//! - **Constant**: a fixed step, no objective evaluations
//! - **Armijo**: backtracking until sufficient decrease holds
//! - **Wolfe**: bracketing and bisection until the strong Wolfe conditions hold
//! - **Best**: exact minimization along the ray, supplied by the objective
//!
//! # Example
//!
//! ```
//! use stepsearch::prelude::*;
//!
//! // f(x) = 0.5 * ||x||^2
//! let oracle = QuadraticOracle::<f64>::simple(3);
//! let x = DVector::from_vec(vec![1.0, -2.0, 0.5]);
//! let d = -oracle.gradient(&x)?;
//!
//! let searcher = StepSearcher::new(SearchConfig::from_method_name("Armijo")?)?;
//! let result = searcher.search(&oracle, &x, &d, None)?;
//! assert_eq!(result.step_size, Some(1.0));
//!
//! // The exact minimizer of a quadratic along -∇f is known in closed form
//! let exact = StepSearcher::new(SearchConfig::best())?;
//! assert_eq!(exact.step(&oracle, &x, &d, None)?, Some(1.0));
//! # Ok::<(), SearchError>(())
//! ```

pub use stepsearch_core::*;

pub use nalgebra;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use stepsearch_core::prelude::*;
}
