//! Error types for step-size selection.
//!
//! Ordinary non-convergence of a search is not an error: it is reported as a
//! [`LineSearchResult`](crate::search::LineSearchResult) without a step. The
//! variants below cover misconfiguration, malformed inputs and failures
//! reported by the oracle itself.

use thiserror::Error;

/// Errors that can occur while configuring or running a line search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// Invalid search configuration.
    ///
    /// This error occurs when a method name is not recognised or when a
    /// constant is outside its admissible range (e.g. `c2 <= c1`).
    #[error("Invalid search configuration: {reason} ({parameter} = {value})")]
    Configuration {
        /// Description of the configuration error
        reason: String,
        /// Name of the invalid parameter
        parameter: String,
        /// Value that was invalid
        value: String,
    },

    /// Dimension mismatch between the point and the search direction.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension
        expected: String,
        /// Actual dimension
        actual: String,
    },

    /// The oracle failed to evaluate the objective or its derivative.
    #[error("Oracle evaluation failed: {reason}")]
    Oracle {
        /// Description of the failure
        reason: String,
    },
}

impl SearchError {
    /// Create a Configuration error.
    pub fn configuration<S1, S2, S3>(reason: S1, parameter: S2, value: S3) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self::Configuration {
            reason: reason.into(),
            parameter: parameter.into(),
            value: value.into(),
        }
    }

    /// Create the Configuration error for a method name that is not recognised.
    pub fn unknown_method<S: Into<String>>(name: S) -> Self {
        Self::configuration("unknown line search method", "method", name)
    }

    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch<S1, S2>(expected: S1, actual: S2) -> Self
    where
        S1: std::fmt::Display,
        S2: std::fmt::Display,
    {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create an Oracle error with a custom reason.
    pub fn oracle<S: Into<String>>(reason: S) -> Self {
        Self::Oracle {
            reason: reason.into(),
        }
    }

    /// Returns true for misconfiguration errors.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

/// Result type alias for operations that can produce a [`SearchError`].
pub type Result<T> = std::result::Result<T, SearchError>;
