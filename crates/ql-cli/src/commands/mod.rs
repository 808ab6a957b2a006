//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod american;
pub mod european;
pub mod prelims;

use crate::config::OptionConfig;
use crate::error::Result;
use qlval::prelude::*;
use std::sync::Arc;

/// Build a priced contract from the option section of the scenario.
///
/// Both curves are anchored at the valuation date and share its day
/// counter. `american` grants exercise on any day up to maturity.
pub fn build_contract(cfg: &OptionConfig, american: bool) -> Result<OptionContract> {
    let today = cfg.valuation_date()?;
    let maturity = cfg.maturity()?;
    let day_counter = cfg.day_counter()?.day_counter();
    let option_type = cfg.option_type()?;

    let flat = |id: &str, rate: Real| -> Result<Handle<dyn YieldTermStructure>> {
        let curve: Arc<dyn YieldTermStructure> = Arc::new(FlatForward::new(
            today,
            SimpleQuote::new(id, rate).into_handle(),
            day_counter.clone(),
            Compounding::Continuous,
            Frequency::Annual,
        )?);
        Ok(Handle::from_arc(curve))
    };
    let vol: Arc<dyn BlackVolTermStructure> = Arc::new(BlackConstantVol::new(
        today,
        SimpleQuote::new("volatility", cfg.volatility).into_handle(),
        day_counter.clone(),
    )?);
    let process = BlackScholesProcess::merton(
        SimpleQuote::new("spot", cfg.spot).into_handle(),
        flat("risk-free", cfg.rate)?,
        flat("dividend", cfg.dividend)?,
        Handle::from_arc(vol),
    )?;

    let option = if american {
        VanillaOption::american(option_type, cfg.strike, today, maturity)?
    } else {
        VanillaOption::european(option_type, cfg.strike, maturity)
    };
    Ok(OptionContract::new(option, process, today))
}
