//! # ql-termstructures
//!
//! Flat yield curves and flat Black volatility surfaces built from shared
//! market quotes.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `TermStructure`: base trait for all term structures.
pub mod term_structure;

/// `YieldTermStructure`: yield / interest-rate term structures.
pub mod yield_term_structure;

/// `FlatForward`: constant-rate yield curve.
pub mod flat_forward;

/// `BlackVolTermStructure` and `BlackConstantVol`.
pub mod black_vol_term_structure;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use black_vol_term_structure::{BlackConstantVol, BlackVolTermStructure};
pub use flat_forward::FlatForward;
pub use term_structure::{TermStructure, TermStructureData};
pub use yield_term_structure::YieldTermStructure;
