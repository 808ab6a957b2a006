//! Analytic European option engine (Black-Scholes-Merton).
//!
//! Prices European vanilla options using the closed-form Black-Scholes-Merton
//! formula with a continuous dividend yield. Computes the value and the
//! first/second-order Greeks.

use crate::contract::BlackScholesInputs;
use ql_core::errors::Result;
use ql_instruments::{Greeks, PricingResult};
use ql_math::distributions::{normal_cdf, normal_pdf};

/// Black-Scholes-Merton value and Greeks of a European option.
///
/// $$C = S e^{-qT} N(d_1) - K e^{-rT} N(d_2)$$
/// $$P = K e^{-rT} N(-d_2) - S e^{-qT} N(-d_1)$$
///
/// where $d_{1,2} = \frac{\ln(S/K) + (r - q \pm \sigma^2/2)T}{\sigma\sqrt{T}}$.
///
/// When `T = 0` or `σ√T` is negligible the value is the discounted
/// intrinsic value of the forward and the Greeks take their limits.
///
/// # Errors
/// `NumericalInstability` if the value or a Greek is not finite.
pub fn black_scholes_merton(inputs: &BlackScholesInputs) -> Result<PricingResult> {
    if inputs.is_degenerate() {
        return degenerate(inputs).checked();
    }

    let phi = inputs.option_type.sign();
    let (spot, strike) = (inputs.spot, inputs.strike);
    let (r, q, sigma, t) = (inputs.rate, inputs.dividend, inputs.volatility, inputs.time);
    let sqrt_t = t.sqrt();
    let std_dev = inputs.std_dev();
    let df_r = inputs.risk_free_discount();
    let df_q = inputs.dividend_discount();

    let d1 = ((spot / strike).ln() + (r - q + 0.5 * sigma * sigma) * t) / std_dev;
    let d2 = d1 - std_dev;

    let nd1 = normal_cdf(phi * d1);
    let nd2 = normal_cdf(phi * d2);
    let npd1 = normal_pdf(d1);

    let value = phi * (spot * df_q * nd1 - strike * df_r * nd2);
    let greeks = Greeks {
        delta: phi * df_q * nd1,
        gamma: df_q * npd1 / (spot * std_dev),
        theta: -(spot * df_q * npd1 * sigma) / (2.0 * sqrt_t) - phi * r * strike * df_r * nd2
            + phi * q * spot * df_q * nd1,
        // Per 1.0 absolute vol and rate, not per 1%.
        vega: spot * df_q * npd1 * sqrt_t,
        rho: phi * strike * t * df_r * nd2,
    };

    // Rounding can leave a deep out-of-the-money value a hair below zero.
    PricingResult::from_value(value.max(0.0))
        .with_greeks(greeks)
        .checked()
}

/// Value and limit Greeks when the terminal distribution is a point mass.
pub(crate) fn degenerate(inputs: &BlackScholesInputs) -> PricingResult {
    let phi = inputs.option_type.sign();
    let df_r = inputs.risk_free_discount();
    let df_q = inputs.dividend_discount();
    let forward_value = phi * (inputs.spot * df_q - inputs.strike * df_r);
    if forward_value <= 0.0 {
        return PricingResult::from_value(0.0).with_greeks(Greeks::default());
    }
    let greeks = Greeks {
        delta: phi * df_q,
        gamma: 0.0,
        theta: phi * (inputs.dividend * inputs.spot * df_q - inputs.rate * inputs.strike * df_r),
        vega: 0.0,
        rho: phi * inputs.strike * inputs.time * df_r,
    };
    PricingResult::from_value(forward_value).with_greeks(greeks)
}

/// As [`degenerate`], but with the right to exercise immediately.
pub(crate) fn degenerate_american(inputs: &BlackScholesInputs) -> PricingResult {
    let european = degenerate(inputs);
    let intrinsic = inputs.intrinsic();
    if european.value >= intrinsic {
        return european;
    }
    let greeks = Greeks {
        delta: inputs.option_type.sign(),
        ..Greeks::default()
    };
    PricingResult::from_value(intrinsic).with_greeks(greeks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ql_core::Real;
    use ql_instruments::OptionType;

    fn inputs(option_type: OptionType, spot: Real, strike: Real, r: Real, q: Real, sigma: Real, t: Real) -> BlackScholesInputs {
        BlackScholesInputs::new(option_type, spot, strike, r, q, sigma, t).unwrap()
    }

    #[test]
    fn bs_call_price() {
        // S=100, K=100, r=5%, q=0%, σ=20%, T=1
        let res = black_scholes_merton(&inputs(OptionType::Call, 100.0, 100.0, 0.05, 0.0, 0.20, 1.0)).unwrap();
        let g = res.greeks.unwrap();
        assert_abs_diff_eq!(res.value, 10.450583572185565, epsilon = 1e-9);
        assert!(g.delta > 0.5 && g.delta < 0.8, "delta = {}", g.delta);
        assert!(g.gamma > 0.0);
        assert!(g.vega > 0.0);
        assert!(g.rho > 0.0);
        assert!(g.theta < 0.0);
    }

    #[test]
    fn short_dated_call_and_put() {
        let t = 13.0 / 365.0;
        let call = black_scholes_merton(&inputs(OptionType::Call, 100.0, 95.0, 0.05, 0.0, 0.2, t)).unwrap();
        let put = black_scholes_merton(&inputs(OptionType::Put, 100.0, 95.0, 0.05, 0.0, 0.2, t)).unwrap();
        assert_abs_diff_eq!(call.value, 5.301977612282741, epsilon = 1e-9);
        assert_abs_diff_eq!(put.value, 0.13295007872930853, epsilon = 1e-9);
    }

    #[test]
    fn put_call_parity_with_dividends() {
        let (s, k, r, q, t) = (100.0, 105.0, 0.08, 0.03, 0.5);
        let call = black_scholes_merton(&inputs(OptionType::Call, s, k, r, q, 0.25, t)).unwrap();
        let put = black_scholes_merton(&inputs(OptionType::Put, s, k, r, q, 0.25, t)).unwrap();
        let parity = call.value - s * (-q * t).exp() + k * (-r * t).exp();
        assert_abs_diff_eq!(put.value, parity, epsilon = 1e-10);
        // Deltas differ by the dividend discount.
        let (dc, dp) = (call.greeks.unwrap().delta, put.greeks.unwrap().delta);
        assert_abs_diff_eq!(dc - dp, (-q * t).exp(), epsilon = 1e-12);
    }

    #[test]
    fn zero_vol_is_discounted_forward_intrinsic() {
        let res = black_scholes_merton(&inputs(OptionType::Call, 100.0, 95.0, 0.05, 0.01, 0.0, 1.0)).unwrap();
        let expected = 100.0 * (-0.01_f64).exp() - 95.0 * (-0.05_f64).exp();
        assert_abs_diff_eq!(res.value, expected, epsilon = 1e-12);
        let g = res.greeks.unwrap();
        assert_abs_diff_eq!(g.delta, (-0.01_f64).exp(), epsilon = 1e-15);
        assert_eq!(g.gamma, 0.0);
        assert_eq!(g.vega, 0.0);
    }

    #[test]
    fn expiry_day_out_of_the_money_is_worthless() {
        let res = black_scholes_merton(&inputs(OptionType::Put, 100.0, 95.0, 0.05, 0.0, 0.2, 0.0)).unwrap();
        assert_eq!(res.value, 0.0);
        assert_eq!(res.greeks, Some(Greeks::default()));
    }

    #[test]
    fn expiry_day_in_the_money_is_intrinsic() {
        let res = black_scholes_merton(&inputs(OptionType::Put, 90.0, 95.0, 0.05, 0.0, 0.2, 0.0)).unwrap();
        assert_eq!(res.value, 5.0);
        assert_eq!(res.greeks.unwrap().delta, -1.0);
    }
}
