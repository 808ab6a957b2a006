//! Cash-flow analysis functions.
//!
//! Static utility functions that operate on a `Leg`:
//! - `npv_curve` / `npv_yield`: present value at a settlement date
//! - `annuity_pv` / `annuity_pv_inclusive`: level payments at whole years
//! - `maturity_date`, `next_cashflow_date`

use crate::cashflow::Leg;
use ql_core::errors::Result;
use ql_core::{ensure_finite, ensure_param, Integer, Real};
use ql_termstructures::YieldTermStructure;
use ql_time::{Date, InterestRate};

// ── Leg queries ──────────────────────────────────────────────────────────────

/// The maturity (last payment) date of a leg.
pub fn maturity_date(leg: &Leg) -> Option<Date> {
    leg.iter().map(|cf| cf.date()).max()
}

/// The date of the next cash flow on or after `ref_date`.
pub fn next_cashflow_date(leg: &Leg, ref_date: Date) -> Option<Date> {
    leg.iter()
        .filter(|cf| !cf.has_occurred(ref_date))
        .map(|cf| cf.date())
        .min()
}

// ── NPV ──────────────────────────────────────────────────────────────────────

/// Net present value of a leg at `settlement_date` using a yield curve.
///
/// Each pending flow is discounted from its payment date back to the
/// settlement date; flows that have already occurred contribute nothing.
pub fn npv_curve(
    leg: &Leg,
    yield_curve: &dyn YieldTermStructure,
    settlement_date: Date,
) -> Result<Real> {
    let mut result = 0.0;
    for cf in leg.iter().filter(|cf| !cf.has_occurred(settlement_date)) {
        result += cf.amount() * yield_curve.discount_between(settlement_date, cf.date())?;
    }
    Ok(ensure_finite!(result, "leg npv"))
}

/// Net present value of a leg at a flat yield.
pub fn npv_yield(leg: &Leg, yield_rate: &InterestRate, settlement_date: Date) -> Result<Real> {
    let mut result = 0.0;
    for cf in leg.iter().filter(|cf| !cf.has_occurred(settlement_date)) {
        result += cf.amount() * yield_rate.discount_factor(settlement_date, cf.date())?;
    }
    Ok(ensure_finite!(result, "leg npv"))
}

// ── Annuities ────────────────────────────────────────────────────────────────

/// Present value of `num_periods` level payments made at the end of each
/// year: `Σ_{i=1..n} payment · DF(i)`.
///
/// # Errors
/// `InvalidParameter` (`num_periods`) if `num_periods` is negative.
pub fn annuity_pv(payment: Real, rate: &InterestRate, num_periods: Integer) -> Result<Real> {
    ensure_param!(num_periods >= 0, "num_periods", "must be non-negative, got {num_periods}");
    sum_discounted(payment, rate, 1..=num_periods)
}

/// Like [`annuity_pv`], but also counts a payment today:
/// `Σ_{i=0..n} payment · DF(i)`, `n + 1` terms.
pub fn annuity_pv_inclusive(
    payment: Real,
    rate: &InterestRate,
    num_periods: Integer,
) -> Result<Real> {
    ensure_param!(num_periods >= 0, "num_periods", "must be non-negative, got {num_periods}");
    sum_discounted(payment, rate, 0..=num_periods)
}

fn sum_discounted(
    payment: Real,
    rate: &InterestRate,
    periods: impl Iterator<Item = Integer>,
) -> Result<Real> {
    ensure_param!(payment.is_finite(), "payment", "must be finite, got {payment}");
    let mut total = 0.0;
    for i in periods {
        total += payment * rate.discount_factor_time(Real::from(i))?;
    }
    Ok(ensure_finite!(total, "annuity present value"))
}
