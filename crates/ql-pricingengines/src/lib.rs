//! # ql-pricingengines
//!
//! Pricing engines for vanilla options and zero-coupon bonds.
//!
//! ## Engines
//!
//! - [`black_scholes_merton`]: closed form for European options
//! - [`barone_adesi_whaley`]: quadratic approximation for American options
//! - [`binomial`]: CRR / Jarrow-Rudd / Leisen-Reimer trees, with
//!   [`price_american_converged`] refining the step count
//! - [`zero_coupon_bond_npv`] and [`DiscountingBondEngine`]: discounted
//!   cash flows on a yield curve
//!
//! [`price_european`] and [`price_american`] dispatch a [`PricingMethod`]
//! on an [`OptionContract`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analytic_european_engine;
pub mod barone_adesi_whaley_engine;
pub mod binomial_engine;
pub mod contract;
pub mod discounting_bond_engine;
pub mod numeric_greeks;
pub mod pricer;

pub use analytic_european_engine::black_scholes_merton;
pub use barone_adesi_whaley_engine::{barone_adesi_whaley, barone_adesi_whaley_value};
pub use binomial_engine::{
    binomial, binomial_value, price_american_converged, ConvergedPrice,
    DEFAULT_CONVERGENCE_TOLERANCE,
};
pub use contract::{BlackScholesInputs, OptionContract, PricingMethod};
pub use discounting_bond_engine::{
    clean_price, discount_factor, zero_coupon_bond_npv, DiscountingBondEngine,
};
pub use numeric_greeks::bump_greeks;
pub use pricer::{price_american, price_european};
