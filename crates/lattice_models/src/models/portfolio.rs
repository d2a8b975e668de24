//! One-period replicating portfolio.
//!
//! A claim paying `claim_up` after an up-move and `claim_down` after a
//! down-move is replicated by holding `x` bonds and `y` shares satisfying
//!
//! ```text
//! x * (1 + r) + y * up   * spot = claim_up
//! x * (1 + r) + y * down * spot = claim_down
//! ```
//!
//! The system has a unique solution whenever `up != down` and the spot is
//! non-zero; both conditions are discharged by the parameter types except
//! the spot, which is checked here.

use super::binomial::BinomialFactors;
use super::bond::Bond;
use super::one_period::OnePeriodStock;
use lattice_core::types::LatticeError;
use num_traits::Float;

/// Holdings of a one-period hedge: `bond_units` riskless bonds and
/// `stock_units` shares.
///
/// A negative `bond_units` is a loan; the reference call-hedge borrows.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use lattice_models::models::{BinomialFactors, Bond, OnePeriodStock, ReplicatingPortfolio};
///
/// let factors = BinomialFactors::new(1.1_f64, 0.9).unwrap();
/// let stock = OnePeriodStock::new(100.0, factors);
/// let bond = Bond::new(0.05).unwrap();
///
/// // Hedge a call struck at 100: terminal payoffs are [10, 0].
/// let hedge = ReplicatingPortfolio::replicating(&stock, &bond, [10.0, 0.0]).unwrap();
/// assert!((hedge.stock_units() - 0.5).abs() < 1e-12);
/// assert!((hedge.bond_units() - (-42.857142857142854)).abs() < 1e-9);
/// assert!(hedge.replicates(&stock, &bond, [10.0, 0.0], 1e-9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReplicatingPortfolio<T: Float> {
    /// Number of riskless bonds held (face value 1 at time zero)
    bond_units: T,
    /// Number of shares held
    stock_units: T,
}

impl<T: Float> ReplicatingPortfolio<T> {
    /// Construct a portfolio with explicit holdings.
    #[inline]
    pub fn new(bond_units: T, stock_units: T) -> Self {
        Self {
            bond_units,
            stock_units,
        }
    }

    /// Solve for the holdings that replicate a one-period claim.
    ///
    /// `claim` is `[claim_up, claim_down]`, up branch first, matching
    /// [`OnePeriodStock::payoffs`]. The solution is
    ///
    /// ```text
    /// stock_units = (claim_up - claim_down) / (spot * (up - down))
    /// bond_units  = (up * claim_down - down * claim_up) / ((1 + r) * (up - down))
    /// ```
    ///
    /// # Errors
    ///
    /// * [`LatticeError::ZeroStockPrice`] - the spot price is zero, so the
    ///   stock holding is undefined
    pub fn replicating(
        stock: &OnePeriodStock<T>,
        bond: &Bond<T>,
        claim: [T; 2],
    ) -> Result<Self, LatticeError> {
        let spot = stock.spot();
        if spot == T::zero() {
            return Err(LatticeError::ZeroStockPrice { period: 0, node: 0 });
        }
        let factors = stock.factors();
        let spread = factors.spread();
        let [claim_up, claim_down] = claim;

        let stock_units = (claim_up - claim_down) / (spot * spread);
        let bond_units = (factors.up() * claim_down - factors.down() * claim_up)
            / (bond.gross_rate() * spread);

        Ok(Self {
            bond_units,
            stock_units,
        })
    }

    /// Return the number of bonds held.
    #[inline]
    pub fn bond_units(&self) -> T {
        self.bond_units
    }

    /// Return the number of shares held.
    #[inline]
    pub fn stock_units(&self) -> T {
        self.stock_units
    }

    /// Return the portfolio value at time zero (bond price is 1).
    #[inline]
    pub fn value_at_start(&self, stock: &OnePeriodStock<T>) -> T {
        self.bond_units + self.stock_units * stock.spot()
    }

    /// Return the portfolio value on both branches one period ahead, up
    /// branch first.
    #[inline]
    pub fn values_at_end(&self, stock: &OnePeriodStock<T>, bond: &Bond<T>) -> [T; 2] {
        let grown_bond = self.bond_units * bond.gross_rate();
        [
            grown_bond + self.stock_units * stock.up_value(),
            grown_bond + self.stock_units * stock.down_value(),
        ]
    }

    /// Check whether the portfolio reproduces `claim` on both branches
    /// within an absolute `tolerance` per branch.
    pub fn replicates(
        &self,
        stock: &OnePeriodStock<T>,
        bond: &Bond<T>,
        claim: [T; 2],
        tolerance: T,
    ) -> bool {
        let end = self.values_at_end(stock, bond);
        (end[0] - claim[0]).abs() <= tolerance && (end[1] - claim[1]).abs() <= tolerance
    }
}

/// Price a one-period claim as its discounted risk-neutral expectation:
///
/// ```text
/// value = (q * claim_up + (1 - q) * claim_down) / (1 + r)
/// ```
///
/// with `q` the risk-neutral up-move weight. This equals the cost of the
/// replicating portfolio, and it is *not* the rule the multi-period engine
/// uses (the engine averages the children unweighted); the two agree only
/// when `q = 1/2`.
///
/// # Example
///
/// ```
/// use lattice_models::models::{risk_neutral_claim_value, BinomialFactors, Bond, OnePeriodStock};
///
/// let factors = BinomialFactors::new(1.1_f64, 0.9).unwrap();
/// let stock = OnePeriodStock::new(100.0, factors);
/// let bond = Bond::new(0.05).unwrap();
///
/// let value = risk_neutral_claim_value(&stock, &bond, [10.0, 0.0]);
/// assert!((value - 7.142857142857143).abs() < 1e-12);
/// ```
pub fn risk_neutral_claim_value<T: Float>(
    stock: &OnePeriodStock<T>,
    bond: &Bond<T>,
    claim: [T; 2],
) -> T {
    let q = stock.factors().risk_neutral_up_weight(bond.gross_rate());
    let [claim_up, claim_down] = claim;
    (q * claim_up + (T::one() - q) * claim_down) * bond.discount_factor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_setup() -> (OnePeriodStock<f64>, Bond<f64>) {
        let factors = BinomialFactors::new(1.1, 0.9).unwrap();
        (OnePeriodStock::new(100.0, factors), Bond::new(0.05).unwrap())
    }

    // ========================================
    // Solver Tests
    // ========================================

    #[test]
    fn test_replicating_reference_claim() {
        let (stock, bond) = reference_setup();
        let hedge = ReplicatingPortfolio::replicating(&stock, &bond, [10.0, 0.0]).unwrap();

        assert_relative_eq!(hedge.stock_units(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(hedge.bond_units(), -42.857142857142854, epsilon = 1e-9);
    }

    #[test]
    fn test_replicating_matches_both_branches() {
        let (stock, bond) = reference_setup();
        let claim = [10.0, 0.0];
        let hedge = ReplicatingPortfolio::replicating(&stock, &bond, claim).unwrap();

        let end = hedge.values_at_end(&stock, &bond);
        assert_relative_eq!(end[0], claim[0], epsilon = 1e-9);
        assert_relative_eq!(end[1], claim[1], epsilon = 1e-9);
        assert!(hedge.replicates(&stock, &bond, claim, 1e-9));
    }

    #[test]
    fn test_replicating_zero_spot_is_rejected() {
        let factors = BinomialFactors::new(1.1, 0.9).unwrap();
        let stock = OnePeriodStock::new(0.0, factors);
        let bond = Bond::new(0.05).unwrap();

        let result = ReplicatingPortfolio::replicating(&stock, &bond, [1.0, 0.0]);
        assert_eq!(
            result.unwrap_err(),
            LatticeError::ZeroStockPrice { period: 0, node: 0 }
        );
    }

    #[test]
    fn test_riskless_claim_needs_no_stock() {
        let (stock, bond) = reference_setup();
        // A claim paying 21 on both branches is a loan, not a hedge.
        let hedge = ReplicatingPortfolio::replicating(&stock, &bond, [21.0, 21.0]).unwrap();

        assert_relative_eq!(hedge.stock_units(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(hedge.bond_units(), 20.0, epsilon = 1e-9);
    }

    // ========================================
    // Valuation Tests
    // ========================================

    #[test]
    fn test_manual_portfolio_values() {
        let (stock, bond) = reference_setup();
        let portfolio = ReplicatingPortfolio::new(2.0, 1.0);

        assert_relative_eq!(portfolio.value_at_start(&stock), 102.0, epsilon = 1e-12);
        let end = portfolio.values_at_end(&stock, &bond);
        assert_relative_eq!(end[0], 112.1, epsilon = 1e-9);
        assert_relative_eq!(end[1], 92.1, epsilon = 1e-9);
    }

    #[test]
    fn test_manual_portfolio_does_not_replicate_call() {
        let (stock, bond) = reference_setup();
        let portfolio = ReplicatingPortfolio::new(2.0, 1.0);
        assert!(!portfolio.replicates(&stock, &bond, [10.0, 0.0], 1e-9));
    }

    #[test]
    fn test_hedge_cost_equals_risk_neutral_value() {
        let (stock, bond) = reference_setup();
        let claim = [10.0, 0.0];
        let hedge = ReplicatingPortfolio::replicating(&stock, &bond, claim).unwrap();

        assert_relative_eq!(
            hedge.value_at_start(&stock),
            risk_neutral_claim_value(&stock, &bond, claim),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_risk_neutral_claim_value_reference() {
        let (stock, bond) = reference_setup();
        // q = 0.75, so (0.75 * 10) / 1.05.
        assert_relative_eq!(
            risk_neutral_claim_value(&stock, &bond, [10.0, 0.0]),
            7.142857142857143,
            epsilon = 1e-12
        );
    }

    // ========================================
    // Property Tests
    // ========================================

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        type ModelInputs = (f64, BinomialFactors<f64>, Bond<f64>, [f64; 2]);

        /// Strategy producing (spot, factors, bond, claim) with valid
        /// factors and a strictly positive gross rate.
        fn model_inputs() -> impl Strategy<Value = ModelInputs> {
            (
                1.0f64..1000.0,
                0.2f64..0.95,
                0.05f64..1.0,
                -0.2f64..0.5,
                0.0f64..100.0,
                0.0f64..100.0,
            )
                .prop_map(|(spot, down, rise, rate, claim_up, claim_down)| {
                    let factors = BinomialFactors::new(down + rise, down).unwrap();
                    let bond = Bond::new(rate).unwrap();
                    (spot, factors, bond, [claim_up, claim_down])
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(512))]

            #[test]
            fn prop_hedge_replicates_both_branches(
                (spot, factors, bond, claim) in model_inputs()
            ) {
                let stock = OnePeriodStock::new(spot, factors);
                let hedge =
                    ReplicatingPortfolio::replicating(&stock, &bond, claim).unwrap();
                let end = hedge.values_at_end(&stock, &bond);

                prop_assert!((end[0] - claim[0]).abs() < 1e-8);
                prop_assert!((end[1] - claim[1]).abs() < 1e-8);
            }

            #[test]
            fn prop_hedge_cost_is_discounted_q_expectation(
                (spot, factors, bond, claim) in model_inputs()
            ) {
                let stock = OnePeriodStock::new(spot, factors);
                let hedge =
                    ReplicatingPortfolio::replicating(&stock, &bond, claim).unwrap();

                let cost = hedge.value_at_start(&stock);
                let value = risk_neutral_claim_value(&stock, &bond, claim);
                prop_assert!((cost - value).abs() < 1e-8);
            }
        }
    }
}
