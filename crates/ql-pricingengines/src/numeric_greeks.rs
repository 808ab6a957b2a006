//! Bump-and-reprice Greeks for engines without closed-form sensitivities.

use crate::contract::BlackScholesInputs;
use ql_core::errors::Result;
use ql_core::{Real, Time};
use ql_instruments::Greeks;

/// Relative spot bump for delta and gamma.
pub const SPOT_BUMP: Real = 1e-4;
/// Absolute volatility bump for vega.
pub const VOL_BUMP: Real = 1e-4;
/// Absolute rate bump for rho.
pub const RATE_BUMP: Real = 1e-4;
/// Valuation-date shift for theta: one calendar day.
pub const THETA_SHIFT: Time = 1.0 / 365.0;

/// Finite-difference Greeks of `pricer` around `inputs`.
///
/// `value` is the unbumped price. Delta, gamma and rho use central
/// differences. Vega falls back to a forward difference when the
/// volatility is smaller than the bump, and theta does the same when less
/// than a day is left.
///
/// # Errors
/// Propagates any error of `pricer` on a bumped scenario, and
/// `NumericalInstability` if a sensitivity is not finite.
pub fn bump_greeks<F>(inputs: &BlackScholesInputs, value: Real, pricer: F) -> Result<Greeks>
where
    F: Fn(&BlackScholesInputs) -> Result<Real>,
{
    let h = inputs.spot * SPOT_BUMP;
    let up = pricer(&inputs.with_spot(inputs.spot + h))?;
    let down = pricer(&inputs.with_spot(inputs.spot - h))?;
    let delta = (up - down) / (2.0 * h);
    let gamma = (up - 2.0 * value + down) / (h * h);

    let sigma = inputs.volatility;
    let vega = if sigma >= VOL_BUMP {
        let up = pricer(&inputs.with_volatility(sigma + VOL_BUMP))?;
        let down = pricer(&inputs.with_volatility(sigma - VOL_BUMP))?;
        (up - down) / (2.0 * VOL_BUMP)
    } else {
        (pricer(&inputs.with_volatility(sigma + VOL_BUMP))? - value) / VOL_BUMP
    };

    let r = inputs.rate;
    let rho = (pricer(&inputs.with_rate(r + RATE_BUMP))? - pricer(&inputs.with_rate(r - RATE_BUMP))?)
        / (2.0 * RATE_BUMP);

    // Theta is ∂V/∂t: moving the valuation date forward shortens maturity.
    let t = inputs.time;
    let longer = pricer(&inputs.with_time(t + THETA_SHIFT))?;
    let theta = if t >= THETA_SHIFT {
        -(longer - pricer(&inputs.with_time(t - THETA_SHIFT))?) / (2.0 * THETA_SHIFT)
    } else {
        -(longer - value) / THETA_SHIFT
    };

    Greeks {
        delta,
        gamma,
        theta,
        vega,
        rho,
    }
    .checked()
}
