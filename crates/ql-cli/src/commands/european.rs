//! European option command.

use super::build_contract;
use crate::config::OptionConfig;
use crate::error::Result;
use qlval::prelude::*;
use tracing::info;

/// Closed-form value of the configured European option.
pub fn value(cfg: &OptionConfig) -> Result<PricingResult> {
    let contract = build_contract(cfg, false)?;
    info!(
        option_type = %cfg.option_type,
        spot = cfg.spot,
        strike = cfg.strike,
        rate = cfg.rate,
        volatility = cfg.volatility,
        maturity = %cfg.maturity()?,
        "pricing European option"
    );
    Ok(price_european(&contract, PricingMethod::Analytic)?)
}

/// Run the european command
pub fn run(cfg: &OptionConfig) -> Result<()> {
    let result = value(cfg)?;
    println!("European Option Price: {}", result.value);
    Ok(())
}
