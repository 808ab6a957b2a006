//! # ql-methods
//!
//! Lattice methods: recombining binomial trees for a lognormal underlying
//! and backward-induction pricing on them, with or without early exercise.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Binomial trees and backward induction.
pub mod lattice;

pub use lattice::{price_american, price_european, BinomialTree, TreeInputs, TreeKind};
