//! Riskless money-market account.
//!
//! One unit invested at time zero grows by the simple per-period rate `r`,
//! so it is worth `(1 + r)^i` after `i` periods. The bond is the discounting
//! leg of every pricing formula in the stack; its validation (`1 + r > 0`)
//! is what keeps those formulas well defined.

use lattice_core::types::LatticeError;
use num_traits::Float;

/// Riskless bond accruing a simple rate per period.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use lattice_models::models::Bond;
///
/// let bond = Bond::new(0.05_f64).unwrap();
/// assert_eq!(bond.gross_rate(), 1.05);
/// assert_eq!(bond.value_at(0), 1.0);
/// assert!((bond.value_at(2) - 1.1025).abs() < 1e-12);
///
/// // A rate of -100% or worse leaves nothing to discount with.
/// assert!(Bond::new(-1.0_f64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bond<T: Float> {
    /// Simple interest rate per period
    rate: T,
}

impl<T: Float> Bond<T> {
    /// Construct a bond with the given simple per-period rate.
    ///
    /// Negative rates are valid as long as the gross rate `1 + rate` stays
    /// strictly positive.
    ///
    /// # Errors
    ///
    /// * [`LatticeError::NonFiniteParameter`] - `rate` is NaN or infinite
    /// * [`LatticeError::NonPositiveGrossRate`] - `1 + rate <= 0`
    pub fn new(rate: T) -> Result<Self, LatticeError> {
        if !rate.is_finite() {
            return Err(LatticeError::NonFiniteParameter {
                name: "rate",
                value: rate.to_f64().unwrap_or(f64::NAN),
            });
        }
        let gross = T::one() + rate;
        if gross <= T::zero() {
            return Err(LatticeError::NonPositiveGrossRate {
                rate: rate.to_f64().unwrap_or(f64::NAN),
                gross: gross.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self { rate })
    }

    /// Return the simple per-period rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Return the gross rate `1 + rate`. Strictly positive by construction.
    #[inline]
    pub fn gross_rate(&self) -> T {
        T::one() + self.rate
    }

    /// Return the one-period discount factor `1 / (1 + rate)`.
    #[inline]
    pub fn discount_factor(&self) -> T {
        T::one() / self.gross_rate()
    }

    /// Return the value after `period` periods of one unit invested at time
    /// zero: `(1 + rate)^period`.
    #[inline]
    pub fn value_at(&self, period: usize) -> T {
        self.gross_rate().powi(period as i32)
    }

    /// Return the value path over `periods` periods: `periods + 1` entries
    /// starting at 1, each the previous entry grown by the gross rate.
    ///
    /// # Example
    ///
    /// ```
    /// use lattice_models::models::Bond;
    ///
    /// let bond = Bond::new(0.05_f64).unwrap();
    /// let path = bond.value_path(2);
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(path[0], 1.0);
    /// assert_eq!(path[1], 1.05);
    /// ```
    pub fn value_path(&self, periods: usize) -> Vec<T> {
        let gross = self.gross_rate();
        let mut path = Vec::with_capacity(periods + 1);
        let mut value = T::one();
        path.push(value);
        for _ in 0..periods {
            value = value * gross;
            path.push(value);
        }
        path
    }
}
