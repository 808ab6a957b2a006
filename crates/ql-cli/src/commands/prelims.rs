//! Fixed-income preliminaries: compounding, a zero-coupon bond, an annuity
//! and a day count.

use crate::config::{BondConfig, RateConfig, ScenarioConfig};
use crate::error::Result;
use qlval::prelude::*;
use std::sync::Arc;
use tracing::info;

/// Results of the fixed-income examples.
#[derive(Debug, Clone, PartialEq)]
pub struct Prelims {
    pub compound_factor: Real,
    pub bond_npv: Real,
    pub annuity_periods: i32,
    pub annuity_pv: Real,
    pub day_count_from: Date,
    pub day_count_to: Date,
    pub day_count: Real,
}

fn interest_rate(cfg: &RateConfig) -> Result<InterestRate> {
    Ok(InterestRate::with_day_counter(
        cfg.rate,
        cfg.day_counter()?.day_counter(),
        cfg.compounding()?,
        cfg.frequency()?,
    )?)
}

/// NPV of the configured zero-coupon bond on a flat curve settling with it.
pub fn bond_npv(cfg: &BondConfig) -> Result<Real> {
    let calendar: Arc<dyn Calendar> = Arc::new(Target);
    let issue = cfg.issue_date()?;
    let bond = ZeroCouponBond::new(
        cfg.settlement_days,
        calendar.clone(),
        cfg.face_amount,
        cfg.maturity()?,
        cfg.convention()?,
        cfg.redemption,
        issue,
    )?;
    let curve = FlatForward::with_settlement_days(
        issue,
        cfg.settlement_days,
        calendar,
        SimpleQuote::new("bond-yield", cfg.yield_rate).into_handle(),
        cfg.day_counter()?.day_counter(),
        Compounding::Continuous,
        Frequency::Annual,
    )?;
    info!(
        settlement = %bond.settlement_date()?,
        payment = %bond.payment_date()?,
        yield_rate = cfg.yield_rate,
        "discounting zero-coupon bond"
    );
    Ok(zero_coupon_bond_npv(&bond, &curve)?)
}

/// Compute every fixed-income example of the scenario.
pub fn compute(cfg: &ScenarioConfig) -> Result<Prelims> {
    let rate = interest_rate(&cfg.rate)?;
    info!(rate = %rate, "compounding");
    let day_count_from = cfg.rate.day_count_from()?;
    let day_count_to = cfg.rate.day_count_to()?;
    Ok(Prelims {
        compound_factor: rate.compound_factor_time(1.0)?,
        bond_npv: bond_npv(&cfg.bond)?,
        annuity_periods: cfg.rate.annuity_periods,
        annuity_pv: annuity_pv_inclusive(cfg.rate.payment, &rate, cfg.rate.annuity_periods)?,
        day_count_from,
        day_count_to,
        day_count: day_count(day_count_from, day_count_to, cfg.rate.day_counter()?),
    })
}

/// Run the prelims command
pub fn run(cfg: &ScenarioConfig) -> Result<()> {
    let p = compute(cfg)?;
    println!("Compound factor for one year: {}", p.compound_factor);
    println!("Zero Coupon Bond NPV: {}", p.bond_npv);
    println!("Present Annuity for {} Years: {}", p.annuity_periods, p.annuity_pv);
    println!(
        "Day count from {} to {}: {}",
        p.day_count_from, p.day_count_to, p.day_count
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_scenario_figures() {
        let p = compute(&ScenarioConfig::default()).unwrap();
        assert_abs_diff_eq!(p.compound_factor, 1.0509453369140622, epsilon = 1e-12);
        assert_abs_diff_eq!(p.bond_npv, 100.0 * (-0.05 * 728.0 / 365.0_f64).exp(), epsilon = 1e-12);
        assert_abs_diff_eq!(p.annuity_pv, 5.318186216903704, epsilon = 1e-12);
        assert_eq!(p.day_count, 364.0);
    }

    #[test]
    fn day_count_prints_long_dates() {
        let p = compute(&ScenarioConfig::default()).unwrap();
        assert_eq!(p.day_count_from.to_string(), "January 1st, 2023");
        assert_eq!(p.day_count_to.to_string(), "December 31st, 2023");
    }
}
