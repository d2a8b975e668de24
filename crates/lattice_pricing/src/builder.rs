//! Stock lattice construction.
//!
//! Builds the recombining tree of forward stock prices from a spot price and
//! validated branch factors. Level `i` holds `i + 1` nodes; node `(i, j)` is
//! the price reached by `i - j` up-moves and `j` down-moves:
//!
//! ```text
//! S[i][j] = spot * up^(i - j) * down^j
//! ```
//!
//! Because an up-then-down path and a down-then-up path recombine, each node
//! is computed once from its move counts rather than by walking paths. With
//! `up > down > 0` this also emits every level in strictly descending order,
//! so node `(i, 0)` is the all-up price and node `(i, i)` the all-down price.

use lattice_core::traits::Float;
use lattice_core::tree::Lattice;
use lattice_core::types::LatticeError;
use lattice_models::models::BinomialFactors;

/// Build the recombining stock lattice for `periods` periods.
///
/// The result has `periods + 1` levels. Level 0 is the single spot node;
/// each level is ordered from the all-up node down to the all-down node.
/// With `periods = 0` the lattice degenerates to the spot alone.
///
/// # Arguments
///
/// * `spot` - Stock price at time zero
/// * `factors` - Validated up/down branch factors
/// * `periods` - Number of branching periods
///
/// # Errors
///
/// Returns [`LatticeError::NonFiniteParameter`] if `spot` is NaN or infinite.
///
/// # Example
///
/// ```rust
/// use lattice_models::models::BinomialFactors;
/// use lattice_pricing::builder::build_stock_lattice;
///
/// let factors = BinomialFactors::new(1.1, 0.9).unwrap();
/// let lattice = build_stock_lattice(100.0, &factors, 2).unwrap();
///
/// assert_eq!(lattice.periods(), 2);
/// assert_eq!(lattice.root(), 100.0);
/// assert!((lattice.node(2, 1).unwrap() - 99.0).abs() < 1e-9);
/// ```
pub fn build_stock_lattice<T: Float>(
    spot: T,
    factors: &BinomialFactors<T>,
    periods: usize,
) -> Result<Lattice<T>, LatticeError> {
    if !spot.is_finite() {
        return Err(LatticeError::NonFiniteParameter {
            name: "spot",
            value: spot.to_f64().unwrap_or(f64::NAN),
        });
    }

    let mut levels = Vec::with_capacity(periods + 1);
    for period in 0..=periods {
        let mut level = Vec::with_capacity(period + 1);
        for down_moves in 0..=period {
            let up_moves = period - down_moves;
            let growth =
                factors.up().powi(up_moves as i32) * factors.down().powi(down_moves as i32);
            level.push(spot * growth);
        }
        levels.push(level);
    }

    Lattice::from_levels(levels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_factors() -> BinomialFactors<f64> {
        BinomialFactors::new(1.1, 0.9).unwrap()
    }

    // ========================================================================
    // Shape Tests
    // ========================================================================

    #[test]
    fn test_level_widths_grow_by_one() {
        let lattice = build_stock_lattice(100.0, &reference_factors(), 5).unwrap();

        assert_eq!(lattice.periods(), 5);
        for (period, level) in lattice.levels().iter().enumerate() {
            assert_eq!(level.len(), period + 1);
        }
    }

    #[test]
    fn test_zero_periods_is_spot_only() {
        let lattice = build_stock_lattice(42.0, &reference_factors(), 0).unwrap();

        assert_eq!(lattice.periods(), 0);
        assert_eq!(lattice.root(), 42.0);
        assert_eq!(lattice.terminal(), &[42.0]);
    }

    // ========================================================================
    // Node Value Tests
    // ========================================================================

    #[test]
    fn test_two_period_reference_values() {
        let lattice = build_stock_lattice(100.0, &reference_factors(), 2).unwrap();

        assert_eq!(lattice.root(), 100.0);
        assert_relative_eq!(lattice.node(1, 0).unwrap(), 110.0, max_relative = 1e-12);
        assert_relative_eq!(lattice.node(1, 1).unwrap(), 90.0, max_relative = 1e-12);
        assert_relative_eq!(lattice.node(2, 0).unwrap(), 121.0, max_relative = 1e-12);
        assert_relative_eq!(lattice.node(2, 1).unwrap(), 99.0, max_relative = 1e-12);
        assert_relative_eq!(lattice.node(2, 2).unwrap(), 81.0, max_relative = 1e-12);
    }

    #[test]
    fn test_recombined_node_matches_both_paths() {
        let factors = BinomialFactors::new(1.25, 0.8).unwrap();
        let lattice = build_stock_lattice(64.0, &factors, 2).unwrap();

        // up * down == down * up, so the middle node is the spot again.
        assert_relative_eq!(lattice.node(2, 1).unwrap(), 64.0, max_relative = 1e-12);
    }

    #[test]
    fn test_levels_strictly_descending() {
        let lattice = build_stock_lattice(100.0, &reference_factors(), 8).unwrap();

        for level in lattice.levels() {
            for pair in level.windows(2) {
                assert!(pair[0] > pair[1], "expected {} > {}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_child_nodes_apply_factors_to_parent() {
        let factors = reference_factors();
        let lattice = build_stock_lattice(100.0, &factors, 6).unwrap();

        for period in 0..lattice.periods() {
            for (index, &parent) in lattice.level(period).unwrap().iter().enumerate() {
                let up_child = lattice.node(period + 1, index).unwrap();
                let down_child = lattice.node(period + 1, index + 1).unwrap();
                assert_relative_eq!(up_child, factors.apply_up(parent), max_relative = 1e-12);
                assert_relative_eq!(down_child, factors.apply_down(parent), max_relative = 1e-12);
            }
        }
    }

    // ========================================================================
    // Validation Tests
    // ========================================================================

    #[test]
    fn test_non_finite_spot_rejected() {
        let err = build_stock_lattice(f64::NAN, &reference_factors(), 2).unwrap_err();
        assert!(matches!(
            err,
            LatticeError::NonFiniteParameter { name: "spot", .. }
        ));

        let err = build_stock_lattice(f64::INFINITY, &reference_factors(), 2).unwrap_err();
        assert!(matches!(
            err,
            LatticeError::NonFiniteParameter { name: "spot", .. }
        ));
    }

    #[test]
    fn test_zero_spot_builds_zero_lattice() {
        // A zero spot is representable; it only becomes an error when a
        // hedge ratio is requested at such a node.
        let lattice = build_stock_lattice(0.0, &reference_factors(), 3).unwrap();
        for level in lattice.levels() {
            assert!(level.iter().all(|&s| s == 0.0));
        }
    }
}
