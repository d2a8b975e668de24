//! # Lattice Pricing Engine (L3: Pricing)
//!
//! Multi-period binomial pricing of European claims with per-node
//! replicating-portfolio hedges.
//!
//! ## Pipeline
//!
//! The engine is a chain of four stage kernels, each usable on its own,
//! plus an orchestrating facade:
//!
//! ```text
//! BinomialPricer
//! ├── builder::build_stock_lattice       spot + factors -> stock lattice
//! ├── payoff::terminal_payoff            stock lattice  -> terminal claims
//! ├── induction::backward_induction      terminal       -> value lattice
//! └── replication::replicate_portfolio   stock + values -> hedge lattice
//! ```
//!
//! Every stage consumes and produces plain data ([`lattice_core::tree::Lattice`]
//! and slices), so intermediate results can be inspected, serialised, or fed
//! into a stage from elsewhere.
//!
//! ## Usage Example
//!
//! ```rust
//! use lattice_pricing::engine::{BinomialPricer, PricingRequest};
//!
//! let request = PricingRequest::builder()
//!     .spot(100.0)
//!     .strike(100.0)
//!     .up(1.1)
//!     .down(0.9)
//!     .rate(0.05)
//!     .periods(2)
//!     .build()
//!     .unwrap();
//!
//! let report = BinomialPricer::new(request).price().unwrap();
//!
//! assert!((report.price - 4.761904761904762).abs() < 1e-9);
//! assert_eq!(report.stock.periods(), 2);
//! assert_eq!(report.holdings.periods(), 2);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for [`engine::PricingReport`] and the
//!   lattices it carries

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod builder;
pub mod engine;
pub mod induction;
pub mod payoff;
pub mod replication;
