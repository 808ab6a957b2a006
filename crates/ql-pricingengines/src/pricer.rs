//! Entry points dispatching a [`PricingMethod`] on an [`OptionContract`].

use crate::analytic_european_engine::black_scholes_merton;
use crate::barone_adesi_whaley_engine::barone_adesi_whaley;
use crate::binomial_engine::binomial;
use crate::contract::{OptionContract, PricingMethod};
use ql_core::errors::{Error, Result};
use ql_core::ensure_param;
use ql_instruments::{ExerciseType, PricingResult};

/// Value and Greeks of the contract's option exercised at maturity only.
///
/// The exercise right of the contract is ignored, so an American contract
/// is priced as its European counterpart. `BaroneAdesiWhaley` has no
/// premium to add without early exercise and gives the closed-form value;
/// `Binomial` rolls back without early exercise and bumps for Greeks.
///
/// # Errors
/// `InvalidParameter` for invalid contract inputs or a zero step count;
/// `NumericalInstability` if the result is not finite.
pub fn price_european(contract: &OptionContract, method: PricingMethod) -> Result<PricingResult> {
    method.validate()?;
    let inputs = contract.inputs()?;
    match method {
        PricingMethod::Analytic | PricingMethod::BaroneAdesiWhaley => black_scholes_merton(&inputs),
        PricingMethod::Binomial { tree, steps } => binomial(&inputs, tree, steps, false),
    }
}

/// Value and Greeks of an American option.
///
/// # Errors
/// `InvalidParameter` for a European exercise (`exercise`), the `Analytic`
/// method (`method`), invalid contract inputs or a zero step count;
/// `NumericalInstability` if an iteration fails or the result is not finite.
pub fn price_american(contract: &OptionContract, method: PricingMethod) -> Result<PricingResult> {
    let exercise_type = contract.option().exercise().exercise_type();
    ensure_param!(
        exercise_type == ExerciseType::American,
        "exercise",
        "expected an American exercise, got {exercise_type}"
    );
    match method {
        PricingMethod::Analytic => Err(Error::InvalidParameter {
            field: "method",
            reason: "no closed form for American exercise".into(),
        }),
        PricingMethod::BaroneAdesiWhaley => barone_adesi_whaley(&contract.inputs()?),
        PricingMethod::Binomial { tree, steps } => {
            method.validate()?;
            binomial(&contract.inputs()?, tree, steps, true)
        }
    }
}
