//! European call option.
//!
//! The only instrument the lattice engine ships. Exercise happens at the
//! terminal level only, so the instrument is nothing more than its payoff
//! function; other European payoffs plug into the same
//! [`Payoff`](lattice_core::traits::Payoff) seam without touching the
//! pipeline.

use lattice_core::traits::Payoff;
use num_traits::Float;

/// European call option: pays `max(S - K, 0)` at expiry.
///
/// The strike may be any real number; a negative strike simply makes the
/// call pay `S - K` on every node of a positive lattice.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use lattice_core::traits::Payoff;
/// use lattice_models::instruments::EuropeanCall;
///
/// let call = EuropeanCall::new(100.0_f64);
/// assert_eq!(call.strike(), 100.0);
/// assert_eq!(call.value(121.0), 21.0);
/// assert_eq!(call.value(81.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EuropeanCall<T: Float> {
    /// Strike price
    strike: T,
}

impl<T: Float> EuropeanCall<T> {
    /// Construct a call with the given strike.
    #[inline]
    pub fn new(strike: T) -> Self {
        Self { strike }
    }

    /// Return the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }
}

impl<T: Float> Payoff<T> for EuropeanCall<T> {
    #[inline]
    fn value(&self, underlying: T) -> T {
        (underlying - self.strike).max(T::zero())
    }
}
