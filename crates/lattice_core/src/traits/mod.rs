//! Core traits for payoff evaluation and generic numerics.
//!
//! This module defines fundamental abstractions for:
//! - Generic floating-point operations (`Float` trait)
//! - Terminal payoff evaluation (`Payoff` trait)
//!
//! All traits are designed for static dispatch so the pricing kernels
//! monomorphise to straight-line float code.

/// Generic floating-point trait for numeric computations.
///
/// This trait provides a unified interface over the standard floating-point
/// types (`f64`, `f32`) so models and pricing kernels are written once.
///
/// # Examples
/// ```
/// use lattice_core::traits::Float;
///
/// fn one_period_discount<T: Float>(rate: T) -> T {
///     T::one() / (T::one() + rate)
/// }
///
/// let df: f64 = one_period_discount(0.05);
/// assert!((df - 0.952381).abs() < 1e-6);
/// ```
pub use num_traits::Float;

pub mod payoff;

// Re-export commonly used types at module level
pub use payoff::Payoff;
