//! Core traits and types for step-size selection.

pub mod error;
pub mod oracle;
pub mod types;

// Re-export core types
pub use error::*;
pub use oracle::*;
pub use types::*;
