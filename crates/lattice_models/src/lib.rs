//! # Lattice Models (L2: Market Objects)
//!
//! Market models and instruments for binomial lattice pricing.
//!
//! This crate provides:
//! - Validated binomial branch factors (`models::BinomialFactors`)
//! - The riskless money-market account (`models::Bond`)
//! - The one-period stock model and its replicating portfolio
//!   (`models::OnePeriodStock`, `models::ReplicatingPortfolio`)
//! - Instrument payoffs (`instruments::EuropeanCall`)
//!
//! ## Design Principles
//!
//! - **Validated construction**: a model value that exists is usable; the
//!   degenerate inputs of the error taxonomy are rejected by `new`, never
//!   re-checked inside pricing formulas
//! - **Generic numerics**: everything is written once over `T: Float`
//! - **Static dispatch** for payoff evaluation

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod instruments;
pub mod models;

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
