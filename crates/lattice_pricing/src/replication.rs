//! Per-node replicating portfolios.
//!
//! Applies the one-step hedge algebra of
//! [`lattice_models::models::ReplicatingPortfolio`] at every interior node of
//! the tree. The hedge held at node `(i, j)` replicates the claim values at
//! its two children `(i+1, j)` and `(i+1, j+1)`:
//!
//! ```text
//! y[i][j] = (V[i+1][j] - V[i+1][j+1]) / (S[i][j] * (up - down))
//! x[i][j] = (up * V[i+1][j+1] - down * V[i+1][j]) / ((1 + r) * (up - down))
//! ```
//!
//! where `x` is the bond holding and `y` the stock holding. The value lattice
//! is an explicit parameter so the hedge step cannot run before pricing has;
//! the shape of the pair is verified here because the two lattices may have
//! been produced independently.

use lattice_core::traits::Float;
use lattice_core::tree::Lattice;
use lattice_core::types::LatticeError;
use lattice_models::models::{BinomialFactors, Bond};

/// Hedge holdings at a single node: `bond_units` bonds and `stock_units`
/// shares.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HedgeRatios<T: Float> {
    /// Number of riskless bonds held at the node
    pub bond_units: T,
    /// Number of shares held at the node
    pub stock_units: T,
}

/// Hedge holdings for every interior node of a tree, as two parallel
/// triangles.
///
/// For a `T`-period tree there are `T` hedge levels (0..T-1), level `i`
/// holding `i + 1` entries; the terminal level needs no hedge because the
/// claim has paid off. A zero-period tree has no interior nodes and yields
/// an empty portfolio lattice.
///
/// # Example
///
/// ```
/// use lattice_models::instruments::EuropeanCall;
/// use lattice_models::models::{BinomialFactors, Bond};
/// use lattice_pricing::builder::build_stock_lattice;
/// use lattice_pricing::induction::backward_induction;
/// use lattice_pricing::payoff::terminal_payoff;
/// use lattice_pricing::replication::replicate_portfolio;
///
/// let factors = BinomialFactors::new(1.1, 0.9).unwrap();
/// let bond = Bond::new(0.05).unwrap();
/// let stock = build_stock_lattice(100.0, &factors, 2).unwrap();
/// let terminal = terminal_payoff(&stock, &EuropeanCall::new(100.0));
/// let values = backward_induction(&stock, &terminal, &bond).unwrap();
///
/// let holdings = replicate_portfolio(&stock, &values, &factors, &bond).unwrap();
///
/// let root = holdings.node(0, 0).unwrap();
/// assert!((root.stock_units - 0.5).abs() < 1e-12);
/// assert!((root.bond_units - (-42.857142857142854)).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PortfolioLattice<T: Float> {
    /// Bond holdings per level; level `i` holds `i + 1` entries
    bond_units: Vec<Vec<T>>,
    /// Stock holdings per level, same shape as `bond_units`
    stock_units: Vec<Vec<T>>,
}

impl<T: Float> PortfolioLattice<T> {
    /// Return the number of hedge levels (the tree's period count).
    #[inline]
    pub fn periods(&self) -> usize {
        self.bond_units.len()
    }

    /// Return the bond-holding triangle, outermost index is the period.
    #[inline]
    pub fn bond_units(&self) -> &[Vec<T>] {
        &self.bond_units
    }

    /// Return the stock-holding triangle, outermost index is the period.
    #[inline]
    pub fn stock_units(&self) -> &[Vec<T>] {
        &self.stock_units
    }

    /// Return both holdings at node `(period, index)`, or `None` out of
    /// range.
    #[inline]
    pub fn node(&self, period: usize, index: usize) -> Option<HedgeRatios<T>> {
        let bond_units = *self.bond_units.get(period)?.get(index)?;
        let stock_units = *self.stock_units.get(period)?.get(index)?;
        Some(HedgeRatios {
            bond_units,
            stock_units,
        })
    }
}

/// Compute the replicating portfolio at every interior node.
///
/// `stock` and `values` must be the same shape; `values` is the lattice
/// produced by [`backward_induction`](crate::induction::backward_induction)
/// over `stock`. Holding the returned portfolio at node `(i, j)` and
/// liquidating one period later reproduces `values` at both children
/// exactly.
///
/// # Errors
///
/// * [`LatticeError::ShapeMismatch`] - `stock` and `values` differ in
///   period count
/// * [`LatticeError::ZeroStockPrice`] - a stock node is zero, so the stock
///   holding there is undefined
pub fn replicate_portfolio<T: Float>(
    stock: &Lattice<T>,
    values: &Lattice<T>,
    factors: &BinomialFactors<T>,
    bond: &Bond<T>,
) -> Result<PortfolioLattice<T>, LatticeError> {
    let periods = stock.periods();
    if values.periods() != periods {
        return Err(LatticeError::ShapeMismatch {
            context: "value lattice",
            expected: periods + 1,
            found: values.periods() + 1,
        });
    }

    let up = factors.up();
    let down = factors.down();
    let spread = factors.spread();
    let gross = bond.gross_rate();

    let mut bond_units = Vec::with_capacity(periods);
    let mut stock_units = Vec::with_capacity(periods);

    // Pair stock level i with value level i + 1; the zip stops before the
    // terminal stock level, which needs no hedge.
    let child_levels = values.levels().iter().skip(1);
    for (period, (prices, children)) in stock.levels().iter().zip(child_levels).enumerate() {
        let mut bonds = Vec::with_capacity(period + 1);
        let mut stocks = Vec::with_capacity(period + 1);
        for (index, &price) in prices.iter().enumerate() {
            if price == T::zero() {
                return Err(LatticeError::ZeroStockPrice {
                    period,
                    node: index,
                });
            }
            let value_up = children[index];
            let value_down = children[index + 1];

            stocks.push((value_up - value_down) / (price * spread));
            bonds.push((up * value_down - down * value_up) / (gross * spread));
        }
        bond_units.push(bonds);
        stock_units.push(stocks);
    }

    Ok(PortfolioLattice {
        bond_units,
        stock_units,
    })
}
