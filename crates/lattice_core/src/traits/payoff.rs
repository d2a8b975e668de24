//! Trait for terminal payoff functions.
//!
//! The payoff is the one polymorphic seam of the pricing pipeline: swapping
//! the payoff function changes the instrument being priced without touching
//! lattice construction, backward induction, or replication.

use num_traits::Float;

/// Trait for functions mapping a terminal underlying price to a claim value.
///
/// # Type Parameters
/// * `T` - Floating-point type (f32 or f64)
///
/// # Design Philosophy
///
/// Implementations are plain value types (a strike wrapper, a closure) that
/// get monomorphised into the evaluation loop. Use static dispatch; the
/// pipeline never needs `Box<dyn Payoff>`.
///
/// ```
/// use lattice_core::traits::Payoff;
///
/// struct DigitalCall {
///     strike: f64,
/// }
///
/// impl Payoff<f64> for DigitalCall {
///     fn value(&self, underlying: f64) -> f64 {
///         if underlying > self.strike {
///             1.0
///         } else {
///             0.0
///         }
///     }
/// }
///
/// let payoff = DigitalCall { strike: 100.0 };
/// assert_eq!(payoff.value(101.0), 1.0);
/// assert_eq!(payoff.value(99.0), 0.0);
/// ```
///
/// # Invariants
/// - The method must be pure (no side effects, deterministic)
pub trait Payoff<T: Float> {
    /// Evaluate the claim value for a terminal underlying price.
    fn value(&self, underlying: T) -> T;
}

/// Any `Fn(T) -> T` closure is a payoff.
///
/// # Examples
/// ```
/// use lattice_core::traits::Payoff;
///
/// let put = |s: f64| (90.0 - s).max(0.0);
/// assert_eq!(put.value(81.0), 9.0);
/// assert_eq!(put.value(121.0), 0.0);
/// ```
impl<T: Float, F: Fn(T) -> T> Payoff<T> for F {
    fn value(&self, underlying: T) -> T {
        self(underlying)
    }
}
