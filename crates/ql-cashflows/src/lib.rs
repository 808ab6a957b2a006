//! # ql-cashflows
//!
//! Cash flows, legs, and the discounting helpers that value them: leg NPV
//! against a yield curve or a flat rate, and annuity present values.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cashflow;
pub mod cashflows;

pub use cashflow::{CashFlow, Leg, Redemption, SimpleCashFlow};
pub use cashflows::{
    annuity_pv, annuity_pv_inclusive, maturity_date, next_cashflow_date, npv_curve, npv_yield,
};
