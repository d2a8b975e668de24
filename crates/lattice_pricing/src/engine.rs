//! Pricing request, facade, and report.
//!
//! The stage kernels in [`builder`](crate::builder), [`payoff`](crate::payoff),
//! [`induction`](crate::induction), and [`replication`](crate::replication)
//! each do one thing; this module chains them. A [`PricingRequest`] is
//! validated once at `build()`, so the facade runs the four stages without
//! re-checking anything, and the [`PricingReport`] it returns carries every
//! intermediate triangle alongside the headline price.

use lattice_core::traits::Float;
use lattice_core::tree::Lattice;
use lattice_core::types::LatticeError;
use lattice_models::instruments::EuropeanCall;
use lattice_models::models::{BinomialFactors, Bond};

use crate::builder::build_stock_lattice;
use crate::induction::backward_induction;
use crate::payoff::terminal_payoff;
use crate::replication::{replicate_portfolio, PortfolioLattice};

/// Maximum number of periods a request may ask for.
///
/// The pipeline is O(T^2) in time and memory; the bound keeps a single
/// request from monopolising the process. Kernels called directly are not
/// bounded.
pub const MAX_PERIODS: usize = 4096;

/// Validated pricing request for a European call on a binomial tree.
///
/// Construct through [`PricingRequest::builder`]; a request that exists has
/// finite spot and strike, factors satisfying `up > down > 0`, a gross rate
/// `1 + r > 0`, and a period count within [`MAX_PERIODS`].
///
/// # Examples
///
/// ```rust
/// use lattice_pricing::engine::PricingRequest;
///
/// let request = PricingRequest::builder()
///     .spot(100.0)
///     .strike(100.0)
///     .up(1.1)
///     .down(0.9)
///     .rate(0.05)
///     .periods(2)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.spot(), 100.0);
/// assert_eq!(request.periods(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricingRequest<T: Float> {
    /// Stock price at time zero
    spot: T,
    /// Call strike price
    strike: T,
    /// Validated branch factors
    factors: BinomialFactors<T>,
    /// Riskless bond providing the per-period discount
    bond: Bond<T>,
    /// Number of branching periods
    periods: usize,
}

impl<T: Float> PricingRequest<T> {
    /// Creates a new request builder.
    #[inline]
    pub fn builder() -> PricingRequestBuilder<T> {
        PricingRequestBuilder::default()
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the branch factors.
    #[inline]
    pub fn factors(&self) -> &BinomialFactors<T> {
        &self.factors
    }

    /// Returns the riskless bond.
    #[inline]
    pub fn bond(&self) -> &Bond<T> {
        &self.bond
    }

    /// Returns the number of periods.
    #[inline]
    pub fn periods(&self) -> usize {
        self.periods
    }
}

/// Fluent builder for [`PricingRequest`].
///
/// All six parameters are required; `build()` reports the first missing one.
#[derive(Debug, Clone)]
pub struct PricingRequestBuilder<T: Float> {
    spot: Option<T>,
    strike: Option<T>,
    up: Option<T>,
    down: Option<T>,
    rate: Option<T>,
    periods: Option<usize>,
}

impl<T: Float> Default for PricingRequestBuilder<T> {
    fn default() -> Self {
        Self {
            spot: None,
            strike: None,
            up: None,
            down: None,
            rate: None,
            periods: None,
        }
    }
}

impl<T: Float> PricingRequestBuilder<T> {
    /// Sets the spot price.
    #[inline]
    pub fn spot(mut self, spot: T) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the strike price.
    #[inline]
    pub fn strike(mut self, strike: T) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Sets the up-move factor.
    #[inline]
    pub fn up(mut self, up: T) -> Self {
        self.up = Some(up);
        self
    }

    /// Sets the down-move factor.
    #[inline]
    pub fn down(mut self, down: T) -> Self {
        self.down = Some(down);
        self
    }

    /// Sets the simple per-period rate.
    #[inline]
    pub fn rate(mut self, rate: T) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the number of periods.
    #[inline]
    pub fn periods(mut self, periods: usize) -> Self {
        self.periods = Some(periods);
        self
    }

    /// Validates the parameters and builds the request.
    ///
    /// # Errors
    ///
    /// * [`LatticeError::MissingParameter`] - a required parameter was never
    ///   set (reported in declaration order)
    /// * [`LatticeError::NonFiniteParameter`] - spot or strike is NaN or
    ///   infinite
    /// * [`LatticeError::DegenerateFactors`] / [`LatticeError::InvalidFactors`] -
    ///   via [`BinomialFactors::new`]
    /// * [`LatticeError::NonPositiveGrossRate`] - via [`Bond::new`]
    /// * [`LatticeError::TooManyPeriods`] - more than [`MAX_PERIODS`] periods
    pub fn build(self) -> Result<PricingRequest<T>, LatticeError> {
        let spot = self
            .spot
            .ok_or(LatticeError::MissingParameter { name: "spot" })?;
        let strike = self
            .strike
            .ok_or(LatticeError::MissingParameter { name: "strike" })?;
        let up = self
            .up
            .ok_or(LatticeError::MissingParameter { name: "up" })?;
        let down = self
            .down
            .ok_or(LatticeError::MissingParameter { name: "down" })?;
        let rate = self
            .rate
            .ok_or(LatticeError::MissingParameter { name: "rate" })?;
        let periods = self
            .periods
            .ok_or(LatticeError::MissingParameter { name: "periods" })?;

        if !spot.is_finite() {
            return Err(LatticeError::NonFiniteParameter {
                name: "spot",
                value: spot.to_f64().unwrap_or(f64::NAN),
            });
        }
        if !strike.is_finite() {
            return Err(LatticeError::NonFiniteParameter {
                name: "strike",
                value: strike.to_f64().unwrap_or(f64::NAN),
            });
        }
        if periods > MAX_PERIODS {
            return Err(LatticeError::TooManyPeriods {
                periods,
                max: MAX_PERIODS,
            });
        }

        let factors = BinomialFactors::new(up, down)?;
        let bond = Bond::new(rate)?;

        Ok(PricingRequest {
            spot,
            strike,
            factors,
            bond,
            periods,
        })
    }
}

/// Full output of a pricing run.
///
/// Carries the headline price, the risk-neutral up weight surfaced as a side
/// value, and every triangle the pipeline produced, so callers can inspect
/// any node without re-running a stage.
///
/// Note that `up_weight` is reported but not used by the backward recursion,
/// which averages child values unweighted; see
/// [`backward_induction`](crate::induction::backward_induction).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricingReport<T: Float> {
    /// Claim value at time zero (root of `values`)
    pub price: T,
    /// Risk-neutral up-move weight `q = ((1 + r) - down) / (up - down)`
    pub up_weight: T,
    /// Stock price at every node
    pub stock: Lattice<T>,
    /// Claim value at every node; terminal level is the payoff
    pub values: Lattice<T>,
    /// Replicating-portfolio holdings at every interior node
    pub holdings: PortfolioLattice<T>,
}

/// Facade chaining the four pricing stages over one request.
///
/// # Examples
///
/// ```rust
/// use lattice_pricing::engine::{BinomialPricer, PricingRequest};
///
/// let request = PricingRequest::builder()
///     .spot(100.0)
///     .strike(100.0)
///     .up(1.1)
///     .down(0.9)
///     .rate(0.05)
///     .periods(2)
///     .build()
///     .unwrap();
///
/// let report = BinomialPricer::new(request).price().unwrap();
///
/// assert!((report.price - 4.761904761904762).abs() < 1e-12);
/// assert!((report.up_weight - 0.75).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct BinomialPricer<T: Float> {
    request: PricingRequest<T>,
}

impl<T: Float> BinomialPricer<T> {
    /// Creates a pricer for a validated request.
    #[inline]
    pub fn new(request: PricingRequest<T>) -> Self {
        Self { request }
    }

    /// Returns the request being priced.
    #[inline]
    pub fn request(&self) -> &PricingRequest<T> {
        &self.request
    }

    /// Runs lattice construction, payoff evaluation, backward induction, and
    /// replication, and assembles the report.
    ///
    /// # Errors
    ///
    /// [`LatticeError::ZeroStockPrice`] if the spot is zero (every request
    /// precondition besides that is discharged at `build()`).
    pub fn price(&self) -> Result<PricingReport<T>, LatticeError> {
        let request = &self.request;
        let factors = request.factors();
        let bond = request.bond();

        let stock = build_stock_lattice(request.spot(), factors, request.periods())?;
        let call = EuropeanCall::new(request.strike());
        let terminal = terminal_payoff(&stock, &call);
        let values = backward_induction(&stock, &terminal, bond)?;
        let holdings = replicate_portfolio(&stock, &values, factors, bond)?;

        Ok(PricingReport {
            price: values.root(),
            up_weight: factors.risk_neutral_up_weight(bond.gross_rate()),
            stock,
            values,
            holdings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_request() -> PricingRequest<f64> {
        PricingRequest::builder()
            .spot(100.0)
            .strike(100.0)
            .up(1.1)
            .down(0.9)
            .rate(0.05)
            .periods(2)
            .build()
            .unwrap()
    }

    // ========================================================================
    // Builder Tests
    // ========================================================================

    #[test]
    fn test_build_valid_request() {
        let request = reference_request();
        assert_eq!(request.spot(), 100.0);
        assert_eq!(request.strike(), 100.0);
        assert_eq!(request.factors().up(), 1.1);
        assert_eq!(request.bond().rate(), 0.05);
        assert_eq!(request.periods(), 2);
    }

    #[test]
    fn test_build_reports_first_missing_parameter() {
        let err = PricingRequest::<f64>::builder().build().unwrap_err();
        assert_eq!(err, LatticeError::MissingParameter { name: "spot" });

        let err = PricingRequest::builder().spot(100.0).build().unwrap_err();
        assert_eq!(err, LatticeError::MissingParameter { name: "strike" });

        let err = PricingRequest::builder()
            .spot(100.0)
            .strike(100.0)
            .up(1.1)
            .down(0.9)
            .rate(0.05)
            .build()
            .unwrap_err();
        assert_eq!(err, LatticeError::MissingParameter { name: "periods" });
    }

    #[test]
    fn test_build_rejects_non_finite_spot_and_strike() {
        let err = PricingRequest::builder()
            .spot(f64::NAN)
            .strike(100.0)
            .up(1.1)
            .down(0.9)
            .rate(0.05)
            .periods(2)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            LatticeError::NonFiniteParameter { name: "spot", .. }
        ));

        let err = PricingRequest::builder()
            .spot(100.0)
            .strike(f64::INFINITY)
            .up(1.1)
            .down(0.9)
            .rate(0.05)
            .periods(2)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            LatticeError::NonFiniteParameter { name: "strike", .. }
        ));
    }

    #[test]
    fn test_build_rejects_degenerate_factors() {
        let err = PricingRequest::builder()
            .spot(100.0)
            .strike(100.0)
            .up(1.05)
            .down(1.05)
            .rate(0.05)
            .periods(2)
            .build()
            .unwrap_err();
        assert_eq!(err, LatticeError::DegenerateFactors { value: 1.05 });
    }

    #[test]
    fn test_build_rejects_bad_rate() {
        let err = PricingRequest::builder()
            .spot(100.0)
            .strike(100.0)
            .up(1.1)
            .down(0.9)
            .rate(-1.0)
            .periods(2)
            .build()
            .unwrap_err();
        assert!(matches!(err, LatticeError::NonPositiveGrossRate { .. }));
    }

    #[test]
    fn test_build_enforces_period_bound() {
        let err = PricingRequest::builder()
            .spot(100.0)
            .strike(100.0)
            .up(1.1)
            .down(0.9)
            .rate(0.05)
            .periods(MAX_PERIODS + 1)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            LatticeError::TooManyPeriods {
                periods: MAX_PERIODS + 1,
                max: MAX_PERIODS,
            }
        );

        // Exactly at the bound is fine.
        assert!(PricingRequest::builder()
            .spot(100.0)
            .strike(100.0)
            .up(1.1)
            .down(0.9)
            .rate(0.05)
            .periods(MAX_PERIODS)
            .build()
            .is_ok());
    }

    #[test]
    fn test_zero_spot_builds_but_fails_at_pricing() {
        // Spot positivity is recommended, not required; the failure surfaces
        // from the replication stage, identified by node.
        let request = PricingRequest::builder()
            .spot(0.0)
            .strike(100.0)
            .up(1.1)
            .down(0.9)
            .rate(0.05)
            .periods(2)
            .build()
            .unwrap();

        let err = BinomialPricer::new(request).price().unwrap_err();
        assert_eq!(err, LatticeError::ZeroStockPrice { period: 0, node: 0 });
    }

    // ========================================================================
    // Facade Tests
    // ========================================================================

    #[test]
    fn test_reference_scenario_report() {
        let report = BinomialPricer::new(reference_request()).price().unwrap();

        assert_relative_eq!(report.price, 4.761904761904762, max_relative = 1e-12);
        assert_relative_eq!(report.up_weight, 0.75, max_relative = 1e-12);

        let level2 = report.stock.level(2).unwrap();
        assert_relative_eq!(level2[0], 121.0, max_relative = 1e-12);
        assert_relative_eq!(level2[1], 99.0, max_relative = 1e-12);
        assert_relative_eq!(level2[2], 81.0, max_relative = 1e-12);

        let terminal = report.values.terminal();
        assert_relative_eq!(terminal[0], 21.0, max_relative = 1e-12);
        assert_eq!(terminal[1], 0.0);
        assert_eq!(terminal[2], 0.0);
        assert_eq!(report.holdings.periods(), 2);
    }

    #[test]
    fn test_report_price_is_value_root() {
        let report = BinomialPricer::new(reference_request()).price().unwrap();
        assert_eq!(report.price, report.values.root());
    }

    #[test]
    fn test_zero_periods_prices_intrinsic() {
        let request = PricingRequest::builder()
            .spot(142.0)
            .strike(100.0)
            .up(1.1)
            .down(0.9)
            .rate(0.05)
            .periods(0)
            .build()
            .unwrap();

        let report = BinomialPricer::new(request).price().unwrap();

        assert_eq!(report.price, 42.0);
        assert_eq!(report.holdings.periods(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_report_serialises_to_json() {
        let report = BinomialPricer::new(reference_request()).price().unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"price\""));
        assert!(json.contains("\"up_weight\""));
        assert!(json.contains("\"holdings\""));
    }
}
