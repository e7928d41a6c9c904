//! The one-dimensional restriction φ(α) = f(x + α·d) of an oracle.

use crate::{
    error::Result,
    oracle::Oracle,
    search::result::{LineSearchResult, Termination},
    types::{DVector, Scalar},
};

/// Evaluator of φ and φ′ along a fixed ray, valid for one search call.
///
/// φ(0) and φ′(0) are computed lazily and cached; every other evaluation
/// goes to the oracle. The trial point `x + α·d` is written into a buffer
/// owned by the evaluator, so a search allocates a single vector.
#[derive(Debug)]
pub struct LineFunction<'a, T, O>
where
    T: Scalar,
    O: Oracle<T> + ?Sized,
{
    oracle: &'a O,
    point: &'a DVector<T>,
    direction: &'a DVector<T>,
    trial: DVector<T>,
    phi0: Option<T>,
    dphi0: Option<T>,
    function_evals: usize,
    gradient_evals: usize,
}

impl<'a, T, O> LineFunction<'a, T, O>
where
    T: Scalar,
    O: Oracle<T> + ?Sized,
{
    /// Restricts `oracle` to the ray through `point` along `direction`.
    ///
    /// The caller is responsible for `point` and `direction` having the
    /// same length.
    pub fn new(oracle: &'a O, point: &'a DVector<T>, direction: &'a DVector<T>) -> Self {
        Self {
            oracle,
            point,
            direction,
            trial: point.clone(),
            phi0: None,
            dphi0: None,
            function_evals: 0,
            gradient_evals: 0,
        }
    }

    fn move_to(&mut self, alpha: T) {
        self.trial.copy_from(self.point);
        self.trial.axpy(alpha, self.direction, T::one());
    }

    /// φ(0) = f(x), evaluated at most once.
    pub fn phi0(&mut self) -> Result<T> {
        if let Some(value) = self.phi0 {
            return Ok(value);
        }
        self.function_evals += 1;
        let value = self.oracle.value(self.point)?;
        self.phi0 = Some(value);
        Ok(value)
    }

    /// φ′(0) = ∇f(x)·d, evaluated at most once.
    pub fn dphi0(&mut self) -> Result<T> {
        if let Some(slope) = self.dphi0 {
            return Ok(slope);
        }
        self.gradient_evals += 1;
        let slope = self.oracle.directional_gradient(self.point, self.direction)?;
        self.dphi0 = Some(slope);
        Ok(slope)
    }

    /// φ(α) = f(x + α·d).
    pub fn phi(&mut self, alpha: T) -> Result<T> {
        self.move_to(alpha);
        self.function_evals += 1;
        self.oracle.directional_value(&self.trial, self.direction)
    }

    /// φ′(α) = ∇f(x + α·d)·d.
    pub fn dphi(&mut self, alpha: T) -> Result<T> {
        self.move_to(alpha);
        self.gradient_evals += 1;
        self.oracle.directional_gradient(&self.trial, self.direction)
    }

    /// Number of φ evaluations so far.
    pub fn function_evals(&self) -> usize {
        self.function_evals
    }

    /// Number of φ′ evaluations so far.
    pub fn gradient_evals(&self) -> usize {
        self.gradient_evals
    }

    /// Builds a result carrying this evaluator's counts.
    pub fn finish(&self, step: Option<T>, termination: Termination, iterations: usize) -> LineSearchResult<T> {
        let result = match step {
            Some(alpha) => LineSearchResult::success(alpha, termination),
            None => LineSearchResult::failure(termination),
        };
        result.with_counts(iterations, self.function_evals, self.gradient_evals)
    }
}

/// Sufficient decrease test φ(α) ≤ φ(0) + c₁·α·φ′(0).
///
/// A non-finite φ(α) never satisfies it.
pub fn sufficient_decrease<T: Scalar>(phi_alpha: T, phi0: T, dphi0: T, c1: T, alpha: T) -> bool {
    phi_alpha <= phi0 + c1 * alpha * dphi0
}

/// Strong curvature test |φ′(α)| ≤ -c₂·φ′(0).
pub fn strong_curvature<T: Scalar>(dphi_alpha: T, dphi0: T, c2: T) -> bool {
    <T as num_traits::Float>::abs(dphi_alpha) <= -c2 * dphi0
}
