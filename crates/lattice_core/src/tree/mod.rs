//! Triangular lattice containers.
//!
//! This module provides:
//! - `lattice`: The recombining-tree container shared by every pricing stage
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Lattice`] from `lattice`

pub mod lattice;

// Re-export commonly used types at module level
pub use lattice::Lattice;
