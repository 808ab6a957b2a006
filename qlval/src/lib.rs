//! # qlval
//!
//! Vanilla option pricing and fixed-income valuation.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `ql-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use qlval::prelude::*;
//! use std::sync::Arc;
//!
//! let today = Date::from_ymd(2023, 8, 2)?;
//! let curve: Arc<dyn YieldTermStructure> =
//!     Arc::new(FlatForward::continuous(today, 0.05, Actual365Fixed)?);
//! let vol: Arc<dyn BlackVolTermStructure> =
//!     Arc::new(BlackConstantVol::from_value(today, 0.20, Actual365Fixed)?);
//! let process = BlackScholesProcess::new(
//!     SimpleQuote::new("spot", 100.0).into_handle(),
//!     Handle::from_arc(curve),
//!     Handle::from_arc(vol),
//! )?;
//! let option = VanillaOption::european(OptionType::Call, 95.0, Date::from_ymd(2023, 8, 15)?);
//! let contract = OptionContract::new(option, process, today);
//!
//! let result = price_european(&contract, PricingMethod::Analytic)?;
//! assert!((result.value - 5.301977612282741).abs() < 1e-6);
//! # Ok::<(), qlval::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use ql_core as core;

/// Dates, calendars, day counters and interest rates.
pub use ql_time as time;

/// Normal distribution functions.
pub use ql_math as math;

/// Market quotes.
pub use ql_quotes as quotes;

/// Flat yield curves and volatility surfaces.
pub use ql_termstructures as termstructures;

/// The Black-Scholes-Merton process.
pub use ql_processes as processes;

/// Binomial lattices.
pub use ql_methods as methods;

/// Cash flows, leg discounting and annuities.
pub use ql_cashflows as cashflows;

/// Options and bonds.
pub use ql_instruments as instruments;

/// Pricing engines.
pub use ql_pricingengines as pricingengines;

/// The types most valuations need.
pub mod prelude {
    pub use ql_cashflows::{annuity_pv, annuity_pv_inclusive};
    pub use ql_core::{Compounding, Error, Handle, Real, Result};
    pub use ql_instruments::{Exercise, Greeks, OptionType, PricingResult, VanillaOption, ZeroCouponBond};
    pub use ql_methods::TreeKind;
    pub use ql_pricingengines::{
        clean_price, discount_factor, price_american, price_american_converged, price_european,
        zero_coupon_bond_npv, OptionContract, PricingMethod,
    };
    pub use ql_processes::BlackScholesProcess;
    pub use ql_quotes::SimpleQuote;
    pub use ql_termstructures::{
        BlackConstantVol, BlackVolTermStructure, FlatForward, TermStructure, YieldTermStructure,
    };
    pub use ql_time::{
        day_count, year_fraction, Actual360, Actual365Fixed, ActualActualIsda, BusinessDayConvention,
        Calendar, Date, DayCountConvention, DayCounter, Frequency, InterestRate, Target, Thirty360,
    };
}
