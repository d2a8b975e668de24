//! Instrument definitions.
//!
//! This module provides:
//! - `european`: The European call option payoff
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`EuropeanCall`] from `european`

pub mod european;

// Re-export commonly used types at module level
pub use european::EuropeanCall;
