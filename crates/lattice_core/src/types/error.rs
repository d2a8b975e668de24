//! Error types for structured error handling.
//!
//! This module provides:
//! - `LatticeError`: Errors from lattice construction, backward pricing, and
//!   portfolio replication
//!
//! Every failure in the pricing stack is deterministic: it is caused by the
//! inputs of the request in progress, never by a transient condition, so no
//! variant is retryable and no operation returns a partial result.

use thiserror::Error;

/// Categorised lattice pricing errors.
///
/// Provides structured error handling for lattice construction, backward
/// induction, and replication with descriptive context for each failure mode.
/// Floating-point payloads are stored as `f64` regardless of the generic
/// numeric type used by the computation.
///
/// # Variants
/// - `DegenerateFactors`: Up and down factors are equal
/// - `InvalidFactors`: Factors violate `up > down > 0`
/// - `NonPositiveGrossRate`: `1 + rate` is not strictly positive
/// - `NonFiniteParameter`: A request parameter is NaN or infinite
/// - `MissingParameter`: A required request parameter was never set
/// - `TooManyPeriods`: Requested period count exceeds the engine bound
/// - `ZeroStockPrice`: A stock node used as a hedge divisor is zero
/// - `ShapeMismatch`: A container does not line up with its lattice
///
/// # Examples
/// ```
/// use lattice_core::types::LatticeError;
///
/// let err = LatticeError::DegenerateFactors { value: 1.05 };
/// assert_eq!(
///     format!("{}", err),
///     "Degenerate branch factors: up and down both equal 1.05"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LatticeError {
    /// Up and down factors are equal, so every `(up - down)` divisor is zero
    /// and the tree no longer branches.
    #[error("Degenerate branch factors: up and down both equal {value}")]
    DegenerateFactors {
        /// The shared factor value
        value: f64,
    },

    /// Factors violate the ordering `up > down > 0` (or are not finite).
    #[error("Invalid branch factors: expected up > down > 0, got up = {up}, down = {down}")]
    InvalidFactors {
        /// The up factor provided
        up: f64,
        /// The down factor provided
        down: f64,
    },

    /// The per-period gross rate `1 + rate` is zero or negative, so
    /// discounting is undefined.
    #[error("Non-positive gross rate: 1 + {rate} = {gross}")]
    NonPositiveGrossRate {
        /// The simple per-period rate provided
        rate: f64,
        /// The resulting gross rate `1 + rate`
        gross: f64,
    },

    /// A request parameter is NaN or infinite.
    #[error("Parameter '{name}' is not finite: {value}")]
    NonFiniteParameter {
        /// Parameter name
        name: &'static str,
        /// The offending value
        value: f64,
    },

    /// A required request parameter was never set on the builder.
    #[error("Parameter '{name}' must be specified")]
    MissingParameter {
        /// Parameter name
        name: &'static str,
    },

    /// Requested period count exceeds the supported maximum.
    #[error("Period count {periods} exceeds the supported maximum {max}")]
    TooManyPeriods {
        /// Requested number of periods
        periods: usize,
        /// Maximum supported number of periods
        max: usize,
    },

    /// A stock price used as a divisor in the stock-holding formula is zero,
    /// so the hedge ratio at that node is undefined.
    #[error("Zero stock price at node ({period}, {node}): hedge ratio is undefined")]
    ZeroStockPrice {
        /// Period index of the offending node
        period: usize,
        /// Node index within the period
        node: usize,
    },

    /// A container does not line up with the lattice it is paired with.
    /// This is a programming-contract violation, not a user input error.
    #[error("Shape mismatch in {context}: expected {expected} entries, found {found}")]
    ShapeMismatch {
        /// What was being aligned when the mismatch was detected
        context: &'static str,
        /// Expected entry count
        expected: usize,
        /// Actual entry count
        found: usize,
    },
}
