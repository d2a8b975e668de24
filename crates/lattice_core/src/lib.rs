//! # lattice_core: Foundation Layer for Binomial Lattice Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! lattice_core is the bottom layer of the 3-layer architecture, providing:
//! - The triangular lattice container shared by every pricing stage (`tree::Lattice`)
//! - The polymorphic payoff seam (`traits::Payoff`)
//! - The error taxonomy for the whole pricing stack (`types::LatticeError`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other lattice_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error type derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use lattice_core::tree::Lattice;
//!
//! // A two-period recombining tree: one node, two nodes, three nodes.
//! let lattice = Lattice::from_levels(vec![
//!     vec![100.0],
//!     vec![110.0, 90.0],
//!     vec![121.0, 99.0, 81.0],
//! ])
//! .unwrap();
//!
//! assert_eq!(lattice.periods(), 2);
//! assert_eq!(lattice.root(), 100.0);
//! assert_eq!(lattice.node(1, 1), Some(90.0));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for the lattice containers

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod traits;
pub mod tree;
pub mod types;
