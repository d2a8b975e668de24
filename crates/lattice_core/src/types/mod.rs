//! Core error types for the lattice pricing stack.
//!
//! This module provides:
//! - `error`: Structured error types for lattice construction, pricing, and replication
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`LatticeError`] from `error`

pub mod error;

// Re-export commonly used types at module level
pub use error::LatticeError;
