//! American option command.

use super::build_contract;
use crate::config::OptionConfig;
use crate::error::Result;
use clap::ValueEnum;
use qlval::prelude::*;
use tracing::{debug, info};

/// Engine used for the American option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AmericanMethod {
    /// Barone-Adesi-Whaley approximation.
    Baw,
    /// Binomial tree.
    Binomial,
}

/// Binomial settings for the American command.
#[derive(Debug, Clone, Copy)]
pub struct TreeSettings {
    pub kind: TreeKind,
    /// Fixed step count; the count is refined until convergence when unset.
    pub steps: Option<usize>,
    pub tolerance: f64,
}

/// Value and Greeks of the configured American option.
pub fn value(cfg: &OptionConfig, method: AmericanMethod, tree: TreeSettings) -> Result<PricingResult> {
    let contract = build_contract(cfg, true)?;
    info!(
        option_type = %cfg.option_type,
        spot = cfg.spot,
        strike = cfg.strike,
        rate = cfg.rate,
        dividend = cfg.dividend,
        volatility = cfg.volatility,
        maturity = %cfg.maturity()?,
        ?method,
        "pricing American option"
    );
    let result = match (method, tree.steps) {
        (AmericanMethod::Baw, _) => price_american(&contract, PricingMethod::BaroneAdesiWhaley)?,
        (AmericanMethod::Binomial, Some(steps)) => price_american(
            &contract,
            PricingMethod::Binomial {
                tree: tree.kind,
                steps,
            },
        )?,
        (AmericanMethod::Binomial, None) => {
            let converged = price_american_converged(&contract, tree.kind, tree.tolerance)?;
            debug!(tree = %tree.kind, steps = converged.steps, "binomial price converged");
            converged.result
        }
    };
    Ok(result)
}

/// Run the american command
pub fn run(cfg: &OptionConfig, method: AmericanMethod, tree: TreeSettings) -> Result<()> {
    let result = value(cfg, method, tree)?;
    println!("American Option Price: {}", result.value);
    if let Some(g) = result.greeks {
        println!("Delta: {}", g.delta);
        println!("Gamma: {}", g.gamma);
        println!("Theta: {}", g.theta);
        println!("Vega: {}", g.vega);
        println!("Rho: {}", g.rho);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn settings(steps: Option<usize>) -> TreeSettings {
        TreeSettings {
            kind: TreeKind::LeisenReimer,
            steps,
            tolerance: 1e-4,
        }
    }

    #[test]
    fn approximation_and_tree_agree_on_the_default_scenario() {
        let cfg = OptionConfig::default();
        let baw = value(&cfg, AmericanMethod::Baw, settings(None)).unwrap();
        let tree = value(&cfg, AmericanMethod::Binomial, settings(Some(301))).unwrap();
        assert!(baw.value >= 5.301977612282741 - 1e-9);
        assert_abs_diff_eq!(baw.value, tree.value, epsilon = 1e-2);
        assert!(baw.greeks.is_some() && tree.greeks.is_some());
    }

    #[test]
    fn dividend_paying_put_by_converged_tree() {
        let cfg = OptionConfig {
            option_type: "put".into(),
            dividend: 0.02,
            ..OptionConfig::default()
        };
        let res = value(&cfg, AmericanMethod::Binomial, settings(None)).unwrap();
        assert!(res.value > 0.0);
        assert!(res.greeks.unwrap().delta < 0.0);
    }
}
