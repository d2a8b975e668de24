//! Terminal payoff evaluation.
//!
//! Maps the terminal level of a stock lattice through a claim's payoff
//! function. This is the only stage where the instrument enters the
//! pipeline; everything downstream works on plain claim values.

use lattice_core::traits::{Float, Payoff};
use lattice_core::tree::Lattice;

/// Evaluate `payoff` at every terminal node of `lattice`.
///
/// Node order is preserved: entry `j` of the result is the claim value at
/// node `(periods, j)`, so the output feeds
/// [`backward_induction`](crate::induction::backward_induction) directly.
///
/// # Example
///
/// ```rust
/// use lattice_models::instruments::EuropeanCall;
/// use lattice_models::models::BinomialFactors;
/// use lattice_pricing::builder::build_stock_lattice;
/// use lattice_pricing::payoff::terminal_payoff;
///
/// let factors = BinomialFactors::new(1.1, 0.9).unwrap();
/// let stock = build_stock_lattice(100.0, &factors, 2).unwrap();
/// let call = EuropeanCall::new(100.0);
///
/// let terminal = terminal_payoff(&stock, &call);
///
/// assert_eq!(terminal.len(), 3);
/// assert!((terminal[0] - 21.0).abs() < 1e-9);
/// assert_eq!(terminal[1], 0.0);
/// assert_eq!(terminal[2], 0.0);
/// ```
pub fn terminal_payoff<T: Float, P: Payoff<T>>(lattice: &Lattice<T>, payoff: &P) -> Vec<T> {
    lattice
        .terminal()
        .iter()
        .map(|&price| payoff.value(price))
        .collect()
}
