//! Model-independent properties of the option engines.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use ql_instruments::OptionType;
use ql_methods::TreeKind;
use ql_pricingengines::{
    barone_adesi_whaley, barone_adesi_whaley_value, binomial_value, black_scholes_merton,
    BlackScholesInputs,
};

fn inputs(
    option_type: OptionType,
    (spot, strike, rate, dividend, volatility, time): (f64, f64, f64, f64, f64, f64),
) -> BlackScholesInputs {
    BlackScholesInputs::new(option_type, spot, strike, rate, dividend, volatility, time).unwrap()
}

type Market = (f64, f64, f64, f64, f64, f64);

/// Spot, strike, rate, dividend, volatility and maturity, including zero
/// carry, high yields, low volatility and long maturities.
fn market() -> impl Strategy<Value = Market> {
    (
        50.0f64..150.0,
        50.0f64..150.0,
        prop_oneof![Just(0.0), 0.0f64..0.10],
        prop_oneof![Just(0.0), 0.0f64..0.20],
        0.01f64..0.6,
        0.05f64..10.0,
    )
}

/// Markets on which every binomial tree has valid branch probabilities.
fn tree_market() -> impl Strategy<Value = Market> {
    (
        50.0f64..150.0,
        50.0f64..150.0,
        0.0f64..0.10,
        0.0f64..0.06,
        0.1f64..0.6,
        0.05f64..3.0,
    )
}

proptest! {
    #[test]
    fn put_call_parity(m in market()) {
        let (spot, strike, rate, dividend, _, time) = m;
        let call = black_scholes_merton(&inputs(OptionType::Call, m)).unwrap().value;
        let put = black_scholes_merton(&inputs(OptionType::Put, m)).unwrap().value;
        let forward = spot * (-dividend * time).exp() - strike * (-rate * time).exp();
        prop_assert!((call - put - forward).abs() < 1e-9, "C - P = {}, forward = {forward}", call - put);
    }

    #[test]
    fn values_are_non_negative_and_bounded(m in market()) {
        let (spot, strike, ..) = m;
        let call = black_scholes_merton(&inputs(OptionType::Call, m)).unwrap().value;
        let put = black_scholes_merton(&inputs(OptionType::Put, m)).unwrap().value;
        prop_assert!((0.0..=spot).contains(&call));
        prop_assert!((0.0..=strike).contains(&put));
    }

    #[test]
    fn american_is_worth_at_least_european(
        m in market(),
        option_type in prop::sample::select(vec![OptionType::Call, OptionType::Put]),
    ) {
        let i = inputs(option_type, m);
        let european = black_scholes_merton(&i).unwrap().value;
        let american = barone_adesi_whaley(&i).unwrap();
        prop_assert!(american.value >= european, "{} < {european}", american.value);
        prop_assert!(american.value >= i.intrinsic() - 1e-9);
        prop_assert!(american.greeks.is_some());
        let value = barone_adesi_whaley_value(&i).unwrap();
        prop_assert!((value - american.value).abs() < 1e-9);
    }

    #[test]
    fn american_tree_dominates_european_tree(
        m in tree_market(),
        kind in prop::sample::select(vec![
            TreeKind::CoxRossRubinstein,
            TreeKind::JarrowRudd,
            TreeKind::LeisenReimer,
        ]),
    ) {
        let i = inputs(OptionType::Put, m);
        let european = binomial_value(&i, kind, 101, false).unwrap();
        let american = binomial_value(&i, kind, 101, true).unwrap();
        prop_assert!(american >= european - 1e-12);
    }

    #[test]
    fn vanishing_maturity_converges_to_intrinsic(
        spot in 50.0f64..150.0,
        strike in 50.0f64..150.0,
        volatility in 0.0f64..0.6,
    ) {
        for option_type in [OptionType::Call, OptionType::Put] {
            let i = inputs(option_type, (spot, strike, 0.05, 0.02, volatility, 1e-14));
            let value = black_scholes_merton(&i).unwrap().value;
            prop_assert!((value - i.intrinsic()).abs() < 1e-6, "{value} vs {}", i.intrinsic());
        }
    }
}

#[test]
fn greeks_are_finite_on_expiry_day() {
    for option_type in [OptionType::Call, OptionType::Put] {
        for spot in [90.0, 100.0, 110.0] {
            let i = inputs(option_type, (spot, 100.0, 0.05, 0.0, 0.2, 0.0));
            let res = barone_adesi_whaley(&i).unwrap();
            let g = res.greeks.unwrap();
            assert!(g.delta.is_finite() && g.gamma.is_finite() && g.theta.is_finite());
            assert_abs_diff_eq!(res.value, i.intrinsic(), epsilon = 1e-15);
        }
    }
}

#[test]
fn leisen_reimer_matches_closed_form() {
    let i = inputs(OptionType::Put, (100.0, 110.0, 0.03, 0.01, 0.3, 2.0));
    let exact = black_scholes_merton(&i).unwrap().value;
    assert_abs_diff_eq!(binomial_value(&i, TreeKind::LeisenReimer, 401, false).unwrap(), exact, epsilon = 1e-4);
}
