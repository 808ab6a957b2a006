//! Barone-Adesi-Whaley American option approximation.
//!
//! Fast quadratic approximation of the early-exercise premium of American
//! vanilla options (Barone-Adesi & Whaley, 1987). The premium is
//! `A·(S/S*)^Q` below (calls) or above (puts) the critical price `S*`, where
//! immediate exercise becomes optimal.

use crate::analytic_european_engine::{black_scholes_merton, degenerate_american};
use crate::contract::BlackScholesInputs;
use crate::numeric_greeks::bump_greeks;
use ql_core::errors::{Error, Result};
use ql_core::{ensure_finite, Real};
use ql_instruments::{OptionType, PricingResult};
use ql_math::distributions::{normal_cdf, normal_pdf};

/// Critical-price convergence tolerance, relative to the strike.
pub const TOLERANCE: Real = 1e-6;
/// Maximum number of critical-price iterations.
pub const MAX_ITERATIONS: usize = 100;

/// Barone-Adesi-Whaley value of an American option, with bump-and-reprice
/// Greeks.
///
/// A call on an asset with a non-positive dividend yield, or a put with a
/// non-positive rate, is never exercised early, so its European value and
/// analytic Greeks are returned.
///
/// # Errors
/// `NumericalInstability` if the critical price does not converge or a
/// result is not finite.
pub fn barone_adesi_whaley(inputs: &BlackScholesInputs) -> Result<PricingResult> {
    if !has_premium(inputs) {
        return black_scholes_merton(inputs);
    }
    if inputs.is_degenerate() {
        return degenerate_american(inputs).checked();
    }
    let value = barone_adesi_whaley_value(inputs)?;
    let greeks = bump_greeks(inputs, value, barone_adesi_whaley_value)?;
    PricingResult::from_value(value).with_greeks(greeks).checked()
}

/// Barone-Adesi-Whaley value only, floored at the intrinsic and European
/// values.
///
/// # Errors
/// As [`barone_adesi_whaley`].
pub fn barone_adesi_whaley_value(inputs: &BlackScholesInputs) -> Result<Real> {
    let european = black_scholes_merton(inputs)?.value;
    let floor = european.max(inputs.intrinsic());
    if inputs.is_degenerate() || !has_premium(inputs) {
        return Ok(floor);
    }

    let quad = Quadratic::new(inputs);
    let s_star = critical_price(inputs, &quad)?;
    let spot = inputs.spot;
    let strike = inputs.strike;
    let d1 = quad.d1(s_star);
    let q = quad.exponent(inputs.option_type, quad.big_k);

    let value = match inputs.option_type {
        OptionType::Call => {
            if spot < s_star {
                let a = (s_star / q) * (1.0 - quad.dq * normal_cdf(d1));
                european + a * (spot / s_star).powf(q)
            } else {
                spot - strike
            }
        }
        OptionType::Put => {
            if spot > s_star {
                let a = -(s_star / q) * (1.0 - quad.dq * normal_cdf(-d1));
                european + a * (spot / s_star).powf(q)
            } else {
                strike - spot
            }
        }
    };
    Ok(ensure_finite!(value, "Barone-Adesi-Whaley value").max(floor))
}

/// Early exercise of a call only pays when the asset yields something, and
/// of a put only when cash earns interest.
fn has_premium(inputs: &BlackScholesInputs) -> bool {
    match inputs.option_type {
        OptionType::Call => inputs.dividend_discount() < 1.0,
        OptionType::Put => inputs.risk_free_discount() < 1.0,
    }
}

/// Quantities shared by the critical-price search and the premium.
struct Quadratic {
    strike: Real,
    variance: Real,
    std_dev: Real,
    dr: Real,
    dq: Real,
    n: Real,
    big_k: Real,
}

impl Quadratic {
    fn new(inputs: &BlackScholesInputs) -> Self {
        let std_dev = inputs.std_dev();
        let variance = std_dev * std_dev;
        let dr = inputs.risk_free_discount();
        let dq = inputs.dividend_discount();
        let big_k = if (1.0 - dr).abs() > 1e-12 {
            -2.0 * dr.ln() / (variance * (1.0 - dr))
        } else {
            2.0 / variance
        };
        Self {
            strike: inputs.strike,
            variance,
            std_dev,
            dr,
            dq,
            n: 2.0 * (dq / dr).ln() / variance,
            big_k,
        }
    }

    /// Positive root for calls, negative root for puts.
    fn exponent(&self, option_type: OptionType, coefficient: Real) -> Real {
        let nm1 = self.n - 1.0;
        let root = (nm1 * nm1 + 4.0 * coefficient).sqrt();
        (-nm1 + option_type.sign() * root) / 2.0
    }

    fn d1(&self, s: Real) -> Real {
        let forward = s * self.dq / self.dr;
        ((forward / self.strike).ln() + 0.5 * self.variance) / self.std_dev
    }

    /// Discounted Black value of the European option at spot `s`.
    fn european(&self, option_type: OptionType, s: Real) -> Real {
        let phi = option_type.sign();
        let forward = s * self.dq / self.dr;
        let d1 = self.d1(s);
        let d2 = d1 - self.std_dev;
        self.dr * phi * (forward * normal_cdf(phi * d1) - self.strike * normal_cdf(phi * d2))
    }

    /// Exercise value minus the approximated continuation value at spot
    /// `s`, and its derivative in `s`.
    fn boundary(&self, option_type: OptionType, q: Real, s: Real) -> (Real, Real) {
        let d1 = self.d1(s);
        match option_type {
            OptionType::Call => {
                let nd1 = normal_cdf(d1);
                let rhs = self.european(option_type, s) + (1.0 - self.dq * nd1) * s / q;
                let slope = self.dq * nd1 * (1.0 - 1.0 / q)
                    + (1.0 - self.dq * normal_pdf(d1) / self.std_dev) / q;
                (s - self.strike - rhs, 1.0 - slope)
            }
            OptionType::Put => {
                let nd1 = normal_cdf(-d1);
                let rhs = self.european(option_type, s) - (1.0 - self.dq * nd1) * s / q;
                let slope = -self.dq * nd1 * (1.0 - 1.0 / q)
                    - (1.0 + self.dq * normal_pdf(-d1) / self.std_dev) / q;
                (self.strike - s - rhs, -1.0 - slope)
            }
        }
    }
}

/// Solve for the critical price `S*`.
///
/// Newton iteration seeded with the Barone-Adesi-Whaley asymptotic
/// estimate and kept inside a bracket of the root: `(0, K]` for puts,
/// `[K, S_hi]` for calls. A step leaving the bracket bisects it instead.
fn critical_price(inputs: &BlackScholesInputs, quad: &Quadratic) -> Result<Real> {
    let option_type = inputs.option_type;
    let strike = quad.strike;
    let q = quad.exponent(option_type, quad.big_k);
    let (mut lo, mut hi) = match option_type {
        OptionType::Call => (strike, call_upper_bound(quad, q)?),
        OptionType::Put => (0.0, strike),
    };
    let seed = seed(quad, option_type);
    let mut si = if seed > lo && seed < hi {
        seed
    } else {
        0.5 * (lo + hi)
    };

    for _ in 0..MAX_ITERATIONS {
        let (excess, slope) = quad.boundary(option_type, q, si);
        if (excess / strike).abs() <= TOLERANCE || hi - lo <= f64::EPSILON * strike {
            return Ok(si);
        }
        // Signed so that the bracket runs from negative to positive.
        if option_type.sign() * excess < 0.0 {
            lo = si;
        } else {
            hi = si;
        }
        let newton = si - excess / slope;
        si = if newton.is_finite() && newton > lo && newton < hi {
            newton
        } else {
            0.5 * (lo + hi)
        };
    }
    Err(Error::NumericalInstability {
        context: "Barone-Adesi-Whaley critical price",
        reason: format!("no convergence after {MAX_ITERATIONS} iterations"),
    })
}

/// Barone-Adesi-Whaley starting estimate of `S*`, not necessarily finite.
fn seed(quad: &Quadratic, option_type: OptionType) -> Real {
    let strike = quad.strike;
    let bt = (quad.dq / quad.dr).ln();
    let m = -2.0 * quad.dr.ln() / quad.variance;
    let qu = quad.exponent(option_type, m);
    let su = strike / (1.0 - 1.0 / qu);
    match option_type {
        OptionType::Call => {
            let h = -(bt + 2.0 * quad.std_dev) * strike / (su - strike);
            strike + (su - strike) * (1.0 - h.exp())
        }
        OptionType::Put => {
            let h = (bt - 2.0 * quad.std_dev) * strike / (strike - su);
            su + (strike - su) * h.exp()
        }
    }
}

/// A spot above the call's critical price, found by doubling from `2K`.
fn call_upper_bound(quad: &Quadratic, q: Real) -> Result<Real> {
    let mut s = 2.0 * quad.strike;
    for _ in 0..MAX_ITERATIONS {
        let (excess, _) = quad.boundary(OptionType::Call, q, s);
        if excess > 0.0 {
            return Ok(s);
        }
        s *= 2.0;
    }
    Err(Error::NumericalInstability {
        context: "Barone-Adesi-Whaley critical price",
        reason: format!("no call exercise boundary below {s}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn inputs(option_type: OptionType, spot: Real, r: Real, q: Real, sigma: Real, t: Real) -> BlackScholesInputs {
        BlackScholesInputs::new(option_type, spot, 100.0, r, q, sigma, t).unwrap()
    }

    #[test]
    fn american_put_exceeds_european() {
        let i = inputs(OptionType::Put, 100.0, 0.05, 0.0, 0.25, 1.0);
        let american = barone_adesi_whaley(&i).unwrap();
        let european = black_scholes_merton(&i).unwrap();
        assert!(american.value > european.value, "{} vs {}", american.value, european.value);
        let g = american.greeks.unwrap();
        assert!(g.delta < 0.0 && g.delta > -1.0);
        assert!(g.gamma > 0.0);
        assert!(g.vega > 0.0);
    }

    #[test]
    fn call_without_dividends_is_european() {
        let i = inputs(OptionType::Call, 100.0, 0.05, 0.0, 0.2, 1.0);
        assert_eq!(barone_adesi_whaley(&i).unwrap(), black_scholes_merton(&i).unwrap());
    }

    #[test]
    fn call_with_dividends_carries_a_premium() {
        let i = inputs(OptionType::Call, 100.0, 0.03, 0.07, 0.3, 1.0);
        let american = barone_adesi_whaley_value(&i).unwrap();
        let european = black_scholes_merton(&i).unwrap().value;
        assert!(american > european);
    }

    #[test]
    fn deep_in_the_money_put_is_exercised() {
        let i = inputs(OptionType::Put, 50.0, 0.10, 0.0, 0.25, 1.0);
        assert_abs_diff_eq!(barone_adesi_whaley_value(&i).unwrap(), 50.0, epsilon = 1e-12);
    }

    #[test]
    fn critical_price_solves_the_boundary_condition() {
        let i = inputs(OptionType::Put, 100.0, 0.06, 0.0, 0.3, 0.5);
        let quad = Quadratic::new(&i);
        let s_star = critical_price(&i, &quad).unwrap();
        assert!(s_star < 100.0 && s_star > 50.0, "S* = {s_star}");
        // Just above S* the premium branch meets the exercise value.
        let above = s_star * (1.0 + 1e-9);
        let at = barone_adesi_whaley_value(&i.with_spot(above)).unwrap();
        assert_abs_diff_eq!(at, 100.0 - above, epsilon = 1e-3);
    }

    #[test]
    fn put_without_interest_is_european() {
        let i = inputs(OptionType::Put, 100.0, 0.0, 0.0, 0.2, 1.0);
        let american = barone_adesi_whaley(&i).unwrap();
        assert_eq!(american, black_scholes_merton(&i).unwrap());
        assert_abs_diff_eq!(american.value, 7.965567455405804, epsilon = 1e-9);
    }

    #[test]
    fn put_with_a_tiny_rate_stays_close_to_european() {
        // The rho bump crosses zero here.
        let i = inputs(OptionType::Put, 100.0, 5e-5, 0.0, 0.2, 1.0);
        let american = barone_adesi_whaley(&i).unwrap();
        let european = black_scholes_merton(&i).unwrap().value;
        assert!(american.value >= european);
        assert_abs_diff_eq!(american.value, european, epsilon = 1e-2);
        assert!(american.greeks.unwrap().rho.is_finite());
    }

    #[test]
    fn high_yield_low_volatility_call_prices() {
        let i = inputs(OptionType::Call, 100.0, 0.05, 0.2, 0.05, 1.0);
        let american = barone_adesi_whaley(&i).unwrap();
        let european = black_scholes_merton(&i).unwrap().value;
        assert!(american.value >= european);
        assert!(american.greeks.is_some());
        let long = inputs(OptionType::Call, 100.0, 0.05, 0.2, 0.2, 10.0);
        assert!(barone_adesi_whaley_value(&long).unwrap() >= black_scholes_merton(&long).unwrap().value);
    }

    #[test]
    fn critical_price_lies_on_the_exercise_side_of_the_strike() {
        for (r, q, sigma, t) in [(0.05, 0.2, 0.05, 1.0), (0.1, 0.02, 0.01, 10.0), (1e-4, 0.1, 0.3, 5.0)] {
            let call = inputs(OptionType::Call, 100.0, r, q, sigma, t);
            let s_call = critical_price(&call, &Quadratic::new(&call)).unwrap();
            assert!(s_call >= 100.0, "call S* = {s_call}");
            let put = inputs(OptionType::Put, 100.0, r, q, sigma, t);
            let s_put = critical_price(&put, &Quadratic::new(&put)).unwrap();
            assert!(s_put > 0.0 && s_put <= 100.0, "put S* = {s_put}");
        }
    }

    #[test]
    fn expiry_day_is_intrinsic() {
        let i = inputs(OptionType::Put, 90.0, 0.05, 0.0, 0.2, 0.0);
        assert_eq!(barone_adesi_whaley_value(&i).unwrap(), 10.0);
    }
}
