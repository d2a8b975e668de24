//! Market models for discrete-time binomial pricing.
//!
//! This module provides:
//! - `binomial`: Validated up/down branch factors and the risk-neutral weight
//! - `bond`: The riskless money-market account at a simple per-period rate
//! - `one_period`: The two-branch single-period stock model
//! - `portfolio`: The one-period replicating portfolio
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`BinomialFactors`] from `binomial`
//! - [`Bond`] from `bond`
//! - [`OnePeriodStock`] from `one_period`
//! - [`ReplicatingPortfolio`] and [`risk_neutral_claim_value`] from `portfolio`

pub mod binomial;
pub mod bond;
pub mod one_period;
pub mod portfolio;

// Re-export commonly used types at module level
pub use binomial::BinomialFactors;
pub use bond::Bond;
pub use one_period::OnePeriodStock;
pub use portfolio::{risk_neutral_claim_value, ReplicatingPortfolio};
