//! Backward induction over claim values.
//!
//! Rolls terminal claim values back to the root one period at a time. The
//! parent of the adjacent children `(i+1, j)` and `(i+1, j+1)` is their
//! unweighted average, discounted one period at the bond's gross rate:
//!
//! ```text
//! V[i][j] = (V[i+1][j] + V[i+1][j+1]) / 2 / (1 + r)
//! ```
//!
//! Both branches are weighted equally here. The risk-neutral up weight
//! `q = ((1 + r) - down) / (up - down)` is deliberately not involved; it is
//! exposed separately through
//! [`BinomialFactors::risk_neutral_up_weight`](lattice_models::models::BinomialFactors::risk_neutral_up_weight)
//! and through the engine report, and the two valuations coincide only when
//! `q = 1/2`. The per-node hedges in [`crate::replication`] replicate the
//! lattice values produced by this recursion, not the `q`-weighted ones.

use lattice_core::traits::Float;
use lattice_core::tree::Lattice;
use lattice_core::types::LatticeError;
use lattice_models::models::Bond;

/// Roll `terminal` claim values back to the root of `lattice`.
///
/// Returns the full value lattice. It has the same shape as `lattice`, its
/// terminal level is `terminal` itself, and its root is the claim value at
/// time zero. With a single-entry `terminal` (zero periods) the value is the
/// payoff itself, undiscounted.
///
/// # Arguments
///
/// * `lattice` - Stock lattice fixing the shape of the recursion
/// * `terminal` - Claim value at each terminal node, in node order
/// * `bond` - Riskless bond providing the per-period discount
///
/// # Errors
///
/// Returns [`LatticeError::ShapeMismatch`] if `terminal` does not hold
/// exactly one value per terminal node of `lattice`.
///
/// # Example
///
/// ```rust
/// use lattice_models::models::{BinomialFactors, Bond};
/// use lattice_pricing::builder::build_stock_lattice;
/// use lattice_pricing::induction::backward_induction;
///
/// let factors = BinomialFactors::new(1.1, 0.9).unwrap();
/// let bond = Bond::new(0.05).unwrap();
/// let stock = build_stock_lattice(100.0, &factors, 2).unwrap();
///
/// let values = backward_induction(&stock, &[21.0, 0.0, 0.0], &bond).unwrap();
///
/// assert!((values.node(1, 0).unwrap() - 10.0).abs() < 1e-12);
/// assert!((values.root() - 4.761904761904762).abs() < 1e-12);
/// ```
pub fn backward_induction<T: Float>(
    lattice: &Lattice<T>,
    terminal: &[T],
    bond: &Bond<T>,
) -> Result<Lattice<T>, LatticeError> {
    let width = lattice.periods() + 1;
    if terminal.len() != width {
        return Err(LatticeError::ShapeMismatch {
            context: "terminal payoff",
            expected: width,
            found: terminal.len(),
        });
    }

    let two = T::one() + T::one();
    let gross = bond.gross_rate();

    // Levels are produced terminal-first, then reversed into lattice order.
    let mut levels: Vec<Vec<T>> = Vec::with_capacity(width);
    levels.push(terminal.to_vec());
    while levels[levels.len() - 1].len() > 1 {
        let children = &levels[levels.len() - 1];
        let parents: Vec<T> = children
            .windows(2)
            .map(|pair| (pair[0] + pair[1]) / two / gross)
            .collect();
        levels.push(parents);
    }
    levels.reverse();

    Lattice::from_levels(levels)
}
