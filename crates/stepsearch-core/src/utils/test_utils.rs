//! Synthetic oracles for exercising edge cases of the searches.

#![cfg(any(test, feature = "test-utils"))]

use crate::{
    error::{Result, SearchError},
    oracle::Oracle,
    types::DVector,
};

/// f(x) = bᵀx, unbounded below along any d with bᵀd < 0.
#[derive(Debug, Clone)]
pub struct LinearOracle {
    slope: DVector<f64>,
}

impl LinearOracle {
    /// Creates the oracle with gradient `slope`.
    pub fn new(slope: DVector<f64>) -> Self {
        Self { slope }
    }
}

impl Oracle<f64> for LinearOracle {
    fn value(&self, point: &DVector<f64>) -> Result<f64> {
        Ok(self.slope.dot(point))
    }

    fn directional_gradient(&self, _point: &DVector<f64>, direction: &DVector<f64>) -> Result<f64> {
        Ok(self.slope.dot(direction))
    }
}

/// f(x) = xᵀx, returning NaN wherever `x[0]` is below a threshold.
///
/// Values and slopes have separate thresholds, so a test can make only
/// one of them misbehave.
#[derive(Debug, Clone)]
pub struct NonFiniteOracle {
    value_threshold: f64,
    gradient_threshold: f64,
}

impl NonFiniteOracle {
    /// NaN values and slopes at every point.
    pub fn everywhere() -> Self {
        Self {
            value_threshold: f64::INFINITY,
            gradient_threshold: f64::INFINITY,
        }
    }

    /// NaN values and slopes where `x[0] < threshold`.
    pub fn below(threshold: f64) -> Self {
        Self {
            value_threshold: threshold,
            gradient_threshold: threshold,
        }
    }

    /// Finite values everywhere, NaN slopes where `x[0] < threshold`.
    pub fn gradient_below(threshold: f64) -> Self {
        Self {
            value_threshold: f64::NEG_INFINITY,
            gradient_threshold: threshold,
        }
    }
}

impl Oracle<f64> for NonFiniteOracle {
    fn value(&self, point: &DVector<f64>) -> Result<f64> {
        if point[0] < self.value_threshold {
            return Ok(f64::NAN);
        }
        Ok(point.dot(point))
    }

    fn directional_gradient(&self, point: &DVector<f64>, direction: &DVector<f64>) -> Result<f64> {
        if point[0] < self.gradient_threshold {
            return Ok(f64::NAN);
        }
        Ok(2.0 * point.dot(direction))
    }
}

/// f(x) = xᵀx with a canned answer for `minimize_directional`.
#[derive(Debug, Clone)]
pub struct FixedMinimizerOracle {
    minimizer: Option<(f64, f64)>,
}

impl FixedMinimizerOracle {
    /// Creates the oracle; `minimizer` is returned as is.
    pub fn new(minimizer: Option<(f64, f64)>) -> Self {
        Self { minimizer }
    }
}

impl Oracle<f64> for FixedMinimizerOracle {
    fn value(&self, point: &DVector<f64>) -> Result<f64> {
        Ok(point.dot(point))
    }

    fn directional_gradient(&self, point: &DVector<f64>, direction: &DVector<f64>) -> Result<f64> {
        Ok(2.0 * point.dot(direction))
    }

    fn minimize_directional(
        &self,
        _point: &DVector<f64>,
        _direction: &DVector<f64>,
    ) -> Result<Option<(f64, f64)>> {
        Ok(self.minimizer)
    }
}

/// An oracle whose every operation fails.
#[derive(Debug, Clone, Copy)]
pub struct FailingOracle;

impl Oracle<f64> for FailingOracle {
    fn value(&self, _point: &DVector<f64>) -> Result<f64> {
        Err(SearchError::oracle("value unavailable"))
    }

    fn directional_gradient(&self, _point: &DVector<f64>, _direction: &DVector<f64>) -> Result<f64> {
        Err(SearchError::oracle("gradient unavailable"))
    }

    fn minimize_directional(
        &self,
        _point: &DVector<f64>,
        _direction: &DVector<f64>,
    ) -> Result<Option<(f64, f64)>> {
        Err(SearchError::oracle("minimizer unavailable"))
    }
}
