//! Utility types for tests and benchmarks.

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
