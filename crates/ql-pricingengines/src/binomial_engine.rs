//! Binomial-tree vanilla option engine.
//!
//! Rolls the payoff back through a [`BinomialTree`] with a per-step
//! discount of `exp(−r·Δt)`. Early exercise is tested on every node for
//! American options.

use crate::analytic_european_engine;
use crate::contract::{BlackScholesInputs, OptionContract};
use crate::numeric_greeks::bump_greeks;
use ql_core::errors::{Error, Result};
use ql_core::{ensure_finite, ensure_param, Real, Size};
use ql_instruments::{Payoff, PricingResult};
use ql_methods::{price_american, price_european, BinomialTree, TreeKind};

/// Step count the convergence search starts from.
pub const CONVERGENCE_START_STEPS: Size = 64;
/// Upper bound on the step count of the convergence search.
pub const CONVERGENCE_MAX_STEPS: Size = 1 << 14;
/// Default tolerance between successive prices of the convergence search.
pub const DEFAULT_CONVERGENCE_TOLERANCE: Real = 1e-4;

/// Binomial value of a vanilla option.
///
/// A degenerate distribution (no time or no volatility left) is priced
/// without a tree, at the discounted forward intrinsic value (or immediate
/// exercise if that is worth more and `american` is set).
///
/// # Errors
/// `InvalidParameter` for a zero step count; `NumericalInstability` if the
/// tree's probabilities leave `[0, 1]` or the value is not finite.
pub fn binomial_value(
    inputs: &BlackScholesInputs,
    kind: TreeKind,
    steps: Size,
    american: bool,
) -> Result<Real> {
    ensure_param!(steps > 0, "steps", "must be positive, got {steps}");
    if inputs.is_degenerate() {
        return Ok(degenerate(inputs, american).value);
    }

    let tree = BinomialTree::new(kind, &inputs.tree_inputs(), steps, inputs.strike)?;
    let discount = (-inputs.rate * tree.dt()).exp();
    let payoff = inputs.payoff();
    let exercise = |s: Real| payoff.value(s);
    let value = if american {
        price_american(&tree, &exercise, discount)
    } else {
        price_european(&tree, &exercise, discount)
    };
    Ok(ensure_finite!(value, "binomial value"))
}

/// Binomial value with bump-and-reprice Greeks.
///
/// # Errors
/// As [`binomial_value`].
pub fn binomial(
    inputs: &BlackScholesInputs,
    kind: TreeKind,
    steps: Size,
    american: bool,
) -> Result<PricingResult> {
    if inputs.is_degenerate() {
        return degenerate(inputs, american).checked();
    }
    let pricer = |i: &BlackScholesInputs| binomial_value(i, kind, steps, american);
    let value = pricer(inputs)?;
    let greeks = bump_greeks(inputs, value, pricer)?;
    PricingResult::from_value(value).with_greeks(greeks).checked()
}

fn degenerate(inputs: &BlackScholesInputs, american: bool) -> PricingResult {
    if american {
        analytic_european_engine::degenerate_american(inputs)
    } else {
        analytic_european_engine::degenerate(inputs)
    }
}

/// An American price from a step count the tree has converged at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergedPrice {
    /// Value and Greeks at the converged step count.
    pub result: PricingResult,
    /// Number of steps of the final tree.
    pub steps: Size,
}

/// Price an American option on trees of doubling size until two
/// successive values differ by less than `tolerance`.
///
/// Starts at [`CONVERGENCE_START_STEPS`] and gives up beyond
/// [`CONVERGENCE_MAX_STEPS`]. Greeks are computed on the final tree.
///
/// # Errors
/// `InvalidParameter` for a non-positive tolerance or invalid contract
/// inputs; `NumericalInstability` if the values have not converged at the
/// step bound.
pub fn price_american_converged(
    contract: &OptionContract,
    kind: TreeKind,
    tolerance: Real,
) -> Result<ConvergedPrice> {
    ensure_param!(
        tolerance.is_finite() && tolerance > 0.0,
        "tolerance",
        "must be positive, got {tolerance}"
    );
    let inputs = contract.inputs()?;
    let mut steps = CONVERGENCE_START_STEPS;
    let mut previous = binomial_value(&inputs, kind, steps, true)?;
    while steps < CONVERGENCE_MAX_STEPS {
        steps *= 2;
        let value = binomial_value(&inputs, kind, steps, true)?;
        if (value - previous).abs() < tolerance {
            return Ok(ConvergedPrice {
                result: binomial(&inputs, kind, steps, true)?,
                steps,
            });
        }
        previous = value;
    }
    Err(Error::NumericalInstability {
        context: "binomial convergence",
        reason: format!("successive prices still differ by more than {tolerance} at {steps} steps"),
    })
}
