//! Single-period two-branch stock model.
//!
//! The smallest instance of the binomial model: a spot price today and two
//! possible prices one period ahead. It exists alongside the multi-period
//! lattice because the one-step replication algebra is easiest to state,
//! test, and teach here, and the multi-period engine applies exactly this
//! algebra at every node.

use super::binomial::BinomialFactors;
use lattice_core::traits::Payoff;
use num_traits::Float;

/// Stock over a single period: spot today, `up * spot` or `down * spot`
/// one period ahead.
///
/// The spot price is taken as given and not validated; a zero spot is
/// rejected only where it matters, by the replication solver dividing by it.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use lattice_models::models::{BinomialFactors, OnePeriodStock};
///
/// let factors = BinomialFactors::new(1.1_f64, 0.9).unwrap();
/// let stock = OnePeriodStock::new(100.0, factors);
///
/// assert_eq!(stock.up_value(), 110.0);
/// assert_eq!(stock.down_value(), 90.0);
/// assert_eq!(stock.terminal_values(), [110.0, 90.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OnePeriodStock<T: Float> {
    /// Spot price at time zero
    spot: T,
    /// Branch factors for the single step
    factors: BinomialFactors<T>,
}

impl<T: Float> OnePeriodStock<T> {
    /// Construct a one-period stock from a spot price and branch factors.
    #[inline]
    pub fn new(spot: T, factors: BinomialFactors<T>) -> Self {
        Self { spot, factors }
    }

    /// Return the spot price at time zero.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Return the branch factors.
    #[inline]
    pub fn factors(&self) -> &BinomialFactors<T> {
        &self.factors
    }

    /// Return the price after an up-move.
    #[inline]
    pub fn up_value(&self) -> T {
        self.factors.apply_up(self.spot)
    }

    /// Return the price after a down-move.
    #[inline]
    pub fn down_value(&self) -> T {
        self.factors.apply_down(self.spot)
    }

    /// Return both terminal prices, up branch first.
    #[inline]
    pub fn terminal_values(&self) -> [T; 2] {
        [self.up_value(), self.down_value()]
    }

    /// Evaluate a payoff on both terminal prices, up branch first.
    ///
    /// # Example
    ///
    /// ```
    /// use lattice_models::instruments::EuropeanCall;
    /// use lattice_models::models::{BinomialFactors, OnePeriodStock};
    ///
    /// let factors = BinomialFactors::new(1.1_f64, 0.9).unwrap();
    /// let stock = OnePeriodStock::new(100.0, factors);
    /// let call = EuropeanCall::new(100.0);
    ///
    /// assert_eq!(stock.payoffs(&call), [10.0, 0.0]);
    /// ```
    pub fn payoffs<P: Payoff<T>>(&self, payoff: &P) -> [T; 2] {
        [
            payoff.value(self.up_value()),
            payoff.value(self.down_value()),
        ]
    }
}
