//! Binomial branch factors.
//!
//! One step of the model moves a price `s` to either `up * s` or
//! `down * s`. The pair drives lattice construction, the risk-neutral
//! weight, and every hedge formula, all of which divide by `up - down`.
//! Validation therefore happens once, at construction: a value of
//! [`BinomialFactors`] that exists satisfies `up > down > 0` with both
//! factors finite, and nothing downstream re-checks it.

use lattice_core::types::LatticeError;
use num_traits::Float;

/// Validated up/down branch factors of a binomial model.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use lattice_models::models::BinomialFactors;
///
/// let factors = BinomialFactors::new(1.1_f64, 0.9).unwrap();
/// assert_eq!(factors.up(), 1.1);
/// assert_eq!(factors.down(), 0.9);
/// assert!((factors.spread() - 0.2).abs() < 1e-12);
///
/// // Equal factors collapse the tree and are rejected outright.
/// assert!(BinomialFactors::new(1.05_f64, 1.05).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BinomialFactors<T: Float> {
    /// Multiplier applied on an up-move
    up: T,
    /// Multiplier applied on a down-move
    down: T,
}

impl<T: Float> BinomialFactors<T> {
    /// Construct validated branch factors.
    ///
    /// # Arguments
    ///
    /// * `up` - Up-move multiplier
    /// * `down` - Down-move multiplier
    ///
    /// # Errors
    ///
    /// * [`LatticeError::InvalidFactors`] - either factor is NaN or
    ///   infinite, or the ordering `up > down > 0` does not hold
    /// * [`LatticeError::DegenerateFactors`] - `up == down`, which collapses
    ///   the tree to a single path and zeroes every `up - down` divisor
    pub fn new(up: T, down: T) -> Result<Self, LatticeError> {
        if !up.is_finite() || !down.is_finite() {
            return Err(LatticeError::InvalidFactors {
                up: up.to_f64().unwrap_or(f64::NAN),
                down: down.to_f64().unwrap_or(f64::NAN),
            });
        }
        if up == down {
            return Err(LatticeError::DegenerateFactors {
                value: up.to_f64().unwrap_or(f64::NAN),
            });
        }
        if up < down || down <= T::zero() {
            return Err(LatticeError::InvalidFactors {
                up: up.to_f64().unwrap_or(f64::NAN),
                down: down.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self { up, down })
    }

    /// Return the up-move multiplier.
    #[inline]
    pub fn up(&self) -> T {
        self.up
    }

    /// Return the down-move multiplier.
    #[inline]
    pub fn down(&self) -> T {
        self.down
    }

    /// Return `up - down`. Strictly positive by construction.
    #[inline]
    pub fn spread(&self) -> T {
        self.up - self.down
    }

    /// Apply the up-move to a price.
    #[inline]
    pub fn apply_up(&self, price: T) -> T {
        self.up * price
    }

    /// Apply the down-move to a price.
    #[inline]
    pub fn apply_down(&self, price: T) -> T {
        self.down * price
    }

    /// Return the risk-neutral up-move weight for a gross rate `1 + r`:
    ///
    /// ```text
    /// q = ((1 + r) - down) / (up - down)
    /// ```
    ///
    /// Under this weighting the discounted stock price is a martingale.
    /// `q` lies in `(0, 1)` exactly when `down < 1 + r < up` (no
    /// arbitrage). The multi-period backward recursion deliberately does
    /// not use it and averages child values unweighted; `q` is surfaced
    /// for callers who want the standard weighting.
    ///
    /// # Arguments
    ///
    /// * `gross_rate` - The per-period gross rate `1 + r`, e.g.
    ///   [`Bond::gross_rate`](super::bond::Bond::gross_rate)
    ///
    /// # Example
    ///
    /// ```
    /// use lattice_models::models::BinomialFactors;
    ///
    /// let factors = BinomialFactors::new(1.1_f64, 0.9).unwrap();
    /// let q = factors.risk_neutral_up_weight(1.05);
    /// assert!((q - 0.75).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn risk_neutral_up_weight(&self, gross_rate: T) -> T {
        (gross_rate - self.down) / self.spread()
    }
}
