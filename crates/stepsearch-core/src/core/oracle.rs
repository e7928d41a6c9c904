//! Oracle interface consumed by the line searches.
//!
//! An oracle is the capability set a line search needs from the objective:
//! function values, directional derivatives and, optionally, an exact
//! minimizer along a ray. The concrete numerical model behind it is
//! irrelevant to the searches.
//!
//! # Design Philosophy
//!
//! - Every operation returns a [`Result`] so an oracle can report its own
//!   failure instead of producing garbage values.
//! - Only `value` and `directional_gradient` are required; the remaining
//!   operations have sensible defaults.
//! - Evaluations are assumed pure: a search may call them in any order.

use crate::{
    error::{Result, SearchError},
    types::{DVector, Scalar},
};
use nalgebra::DMatrix;
use std::cell::Cell;
use std::fmt::Debug;

/// Trait for objective oracles queried by a line search.
///
/// For a point `x`, a direction `d` and a step `α`, the searches study
/// φ(α) = f(x + α·d) through the operations below.
pub trait Oracle<T>: Debug
where
    T: Scalar,
{
    /// Evaluates the objective at a point.
    fn value(&self, point: &DVector<T>) -> Result<T>;

    /// Evaluates the objective along a ray.
    ///
    /// Called with `point = x + α·d` and `direction = d`. Oracles that can
    /// reuse work along a fixed direction (e.g. cached matrix-vector
    /// products) override this.
    ///
    /// # Default Implementation
    ///
    /// Ignores the direction and calls [`Oracle::value`].
    fn directional_value(&self, point: &DVector<T>, direction: &DVector<T>) -> Result<T> {
        let _ = direction;
        self.value(point)
    }

    /// Computes the directional derivative ∇f(point)·direction.
    fn directional_gradient(&self, point: &DVector<T>, direction: &DVector<T>) -> Result<T>;

    /// Exact minimizer of φ along `direction` starting from `point`.
    ///
    /// Returns `(step, value)` when a minimizer is known.
    ///
    /// # Default Implementation
    ///
    /// Returns `Ok(None)`: no closed form is available.
    fn minimize_directional(
        &self,
        point: &DVector<T>,
        direction: &DVector<T>,
    ) -> Result<Option<(T, T)>> {
        let _ = (point, direction);
        Ok(None)
    }
}

/// A quadratic objective f(x) = 0.5 * xᵀAx + bᵀx + c.
///
/// The exact minimizer along a direction is available in closed form, which
/// makes this oracle suitable for the `Best` strategy as well as tests and
/// benchmarks.
#[derive(Debug, Clone)]
pub struct QuadraticOracle<T>
where
    T: Scalar,
{
    /// The quadratic form matrix (should be symmetric)
    pub a: DMatrix<T>,
    /// The linear term
    pub b: DVector<T>,
    /// The constant term
    pub c: T,
}

impl<T> QuadraticOracle<T>
where
    T: Scalar,
{
    /// Creates a new quadratic oracle.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::DimensionMismatch` if `a` is not square or does
    /// not match the length of `b`.
    pub fn new(a: DMatrix<T>, b: DVector<T>, c: T) -> Result<Self> {
        if a.nrows() != a.ncols() {
            return Err(SearchError::dimension_mismatch(
                format!("square matrix ({0}, {0})", a.nrows()),
                format!("({}, {})", a.nrows(), a.ncols()),
            ));
        }
        if a.nrows() != b.len() {
            return Err(SearchError::dimension_mismatch(a.nrows(), b.len()));
        }
        Ok(Self { a, b, c })
    }

    /// Creates a simple quadratic with identity matrix: f(x) = 0.5 * ||x||^2
    pub fn simple(dim: usize) -> Self {
        Self::scaled_identity(dim, T::one())
    }

    /// Creates f(x) = 0.5 * scale * ||x||^2.
    ///
    /// `scaled_identity(n, 2.0)` is the plain sum of squares xᵀx.
    pub fn scaled_identity(dim: usize, scale: T) -> Self {
        Self {
            a: DMatrix::identity(dim, dim) * scale,
            b: DVector::zeros(dim),
            c: T::zero(),
        }
    }

    /// Dimension of the parameter space.
    pub fn dim(&self) -> usize {
        self.b.len()
    }

    fn check_dim(&self, v: &DVector<T>) -> Result<()> {
        if v.len() != self.dim() {
            return Err(SearchError::dimension_mismatch(self.dim(), v.len()));
        }
        Ok(())
    }

    /// Gradient Ax + b.
    pub fn gradient(&self, point: &DVector<T>) -> Result<DVector<T>> {
        self.check_dim(point)?;
        Ok(&self.a * point + &self.b)
    }
}

impl<T> Oracle<T> for QuadraticOracle<T>
where
    T: Scalar,
{
    fn value(&self, point: &DVector<T>) -> Result<T> {
        self.check_dim(point)?;
        let ax = &self.a * point;
        let quad_term = point.dot(&ax) * <T as Scalar>::from_f64(0.5);
        let linear_term = self.b.dot(point);
        Ok(quad_term + linear_term + self.c)
    }

    fn directional_gradient(&self, point: &DVector<T>, direction: &DVector<T>) -> Result<T> {
        self.check_dim(direction)?;
        Ok(self.gradient(point)?.dot(direction))
    }

    fn minimize_directional(
        &self,
        point: &DVector<T>,
        direction: &DVector<T>,
    ) -> Result<Option<(T, T)>> {
        self.check_dim(direction)?;
        // φ(α) = f(x) + α·g·d + 0.5·α²·dᵀAd
        let curvature = direction.dot(&(&self.a * direction));
        if curvature <= T::zero() {
            return Ok(None);
        }
        let slope = self.directional_gradient(point, direction)?;
        let step = -slope / curvature;
        if step < T::zero() {
            return Ok(None);
        }
        let value = self.value(&(point + direction * step))?;
        Ok(Some((step, value)))
    }
}

/// Wrapper to count oracle evaluations for testing and debugging.
#[derive(Debug)]
pub struct CountingOracle<O> {
    /// The underlying oracle
    pub inner: O,
    value_count: Cell<usize>,
    gradient_count: Cell<usize>,
    minimize_count: Cell<usize>,
}

impl<O> CountingOracle<O> {
    /// Creates a new counting wrapper around an oracle.
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            value_count: Cell::new(0),
            gradient_count: Cell::new(0),
            minimize_count: Cell::new(0),
        }
    }

    /// Resets all counters to zero.
    pub fn reset_counts(&self) {
        self.value_count.set(0);
        self.gradient_count.set(0);
        self.minimize_count.set(0);
    }

    /// Returns the current counts as (values, directional gradients, minimizations).
    ///
    /// `value` and `directional_value` share the first counter.
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.value_count.get(),
            self.gradient_count.get(),
            self.minimize_count.get(),
        )
    }

    /// Total number of oracle calls of any kind.
    pub fn total_calls(&self) -> usize {
        let (v, g, m) = self.counts();
        v + g + m
    }
}

impl<T, O> Oracle<T> for CountingOracle<O>
where
    T: Scalar,
    O: Oracle<T>,
{
    fn value(&self, point: &DVector<T>) -> Result<T> {
        self.value_count.set(self.value_count.get() + 1);
        self.inner.value(point)
    }

    fn directional_value(&self, point: &DVector<T>, direction: &DVector<T>) -> Result<T> {
        self.value_count.set(self.value_count.get() + 1);
        self.inner.directional_value(point, direction)
    }

    fn directional_gradient(&self, point: &DVector<T>, direction: &DVector<T>) -> Result<T> {
        self.gradient_count.set(self.gradient_count.get() + 1);
        self.inner.directional_gradient(point, direction)
    }

    fn minimize_directional(
        &self,
        point: &DVector<T>,
        direction: &DVector<T>,
    ) -> Result<Option<(T, T)>> {
        self.minimize_count.set(self.minimize_count.get() + 1);
        self.inner.minimize_directional(point, direction)
    }
}
