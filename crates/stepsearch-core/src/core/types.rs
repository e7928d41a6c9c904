//! Type definitions and aliases for step-size selection.
//!
//! This module provides the numeric trait shared by every strategy, the
//! vector alias used for points and directions, and the default step bounds
//! of a search.

use nalgebra::{Dyn, OVector, RealField, Scalar as NalgebraScalar};
use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// Trait for scalar types used in line searches (f32 or f64).
///
/// This trait combines all the necessary numeric traits required
/// by the search strategies.
pub trait Scalar:
    NalgebraScalar
    + RealField
    + Float
    + FromPrimitive
    + Display
    + Debug
    + Default
    + Copy
    + Send
    + Sync
    + 'static
{
    /// Ceiling on the step size reached while bracketing.
    const MAX_STEP_SIZE: Self;

    /// Floor below which backtracking gives up.
    const MIN_STEP_SIZE: Self;

    /// Convert from f64 (for constants).
    ///
    /// # Panics
    ///
    /// Panics if the conversion fails, which cannot happen for f32 and f64.
    fn from_f64(v: f64) -> Self {
        <Self as FromPrimitive>::from_f64(v).expect("Failed to convert from f64")
    }
}

impl Scalar for f32 {
    const MAX_STEP_SIZE: Self = 1e3;
    const MIN_STEP_SIZE: Self = 1e-12;
}

impl Scalar for f64 {
    const MAX_STEP_SIZE: Self = 1e6;
    const MIN_STEP_SIZE: Self = 1e-12;
}

/// Type alias for a dynamically-sized vector.
pub type DVector<T> = OVector<T, Dyn>;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_step_bounds() {
        assert!(f32::MIN_STEP_SIZE > 0.0);
        assert!(f32::MIN_STEP_SIZE < f32::MAX_STEP_SIZE);
        assert_eq!(f64::MIN_STEP_SIZE, 1e-12);
        assert_eq!(f64::MAX_STEP_SIZE, 1e6);
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(<f64 as Scalar>::from_f64(1e-4), 1e-4);
        assert_relative_eq!(<f32 as Scalar>::from_f64(0.9), 0.9_f32);
    }
}
