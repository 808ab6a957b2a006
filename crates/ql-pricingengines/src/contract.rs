//! Pricing requests and the scalar inputs extracted from them.
//!
//! An [`OptionContract`] bundles an option with its market data and an
//! explicit valuation date. Engines never read the curves directly: they
//! work on [`BlackScholesInputs`], the flat scalars implied by the contract
//! over `[valuation_date, maturity]`.

use ql_core::errors::Result;
use ql_core::{ensure_param, Rate, Real, Size, Time, Volatility};
use ql_instruments::{Instrument, OptionType, PlainVanillaPayoff, Payoff, VanillaOption};
use ql_methods::{TreeInputs, TreeKind};
use ql_processes::BlackScholesProcess;
use ql_time::Date;
use std::fmt;

/// Below this standard deviation the option is priced as a forward.
pub(crate) const DEGENERATE_STD_DEV: Real = 1e-15;

/// An option, its market and the date it is valued on.
#[derive(Debug, Clone)]
pub struct OptionContract {
    option: VanillaOption,
    process: BlackScholesProcess,
    valuation_date: Date,
}

impl OptionContract {
    /// Bundle an option with its process and valuation date.
    pub fn new(option: VanillaOption, process: BlackScholesProcess, valuation_date: Date) -> Self {
        Self {
            option,
            process,
            valuation_date,
        }
    }

    /// The option.
    pub fn option(&self) -> &VanillaOption {
        &self.option
    }

    /// The underlying process.
    pub fn process(&self) -> &BlackScholesProcess {
        &self.process
    }

    /// The valuation date.
    pub fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    /// Extract and validate the flat Black-Scholes inputs.
    ///
    /// Time to maturity is measured with the volatility surface's day
    /// counter; the rates are the continuous rates reproducing each curve's
    /// discount factor over `[valuation_date, maturity]`.
    ///
    /// # Errors
    /// `InvalidParameter` for a non-positive strike or spot, a negative
    /// volatility, or a maturity before the valuation date. `NullValue` if a
    /// market handle is empty.
    pub fn inputs(&self) -> Result<BlackScholesInputs> {
        let maturity = self.option.maturity_date();
        ensure_param!(
            maturity >= self.valuation_date,
            "maturity",
            "{maturity} precedes valuation date {}",
            self.valuation_date
        );
        let strike = self.option.strike();
        let vol_surface = self.process.volatility()?;
        let time = vol_surface
            .day_counter()
            .year_fraction(self.valuation_date, maturity);
        let rate = self
            .process
            .risk_free_rate(self.valuation_date, maturity, time)?;
        let dividend = self
            .process
            .dividend_yield(self.valuation_date, maturity, time)?;
        BlackScholesInputs::new(
            self.option.option_type(),
            self.process.spot()?,
            strike,
            rate,
            dividend,
            self.process.black_vol(maturity, strike)?,
            time,
        )
    }
}

/// How an option is to be priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingMethod {
    /// Closed-form Black-Scholes-Merton (European exercise only).
    Analytic,
    /// Barone-Adesi-Whaley quadratic approximation.
    BaroneAdesiWhaley,
    /// Backward induction on a binomial tree.
    Binomial {
        /// Tree parametrisation.
        tree: TreeKind,
        /// Number of time steps.
        steps: Size,
    },
}

impl PricingMethod {
    pub(crate) fn validate(&self) -> Result<()> {
        if let PricingMethod::Binomial { steps, .. } = self {
            ensure_param!(*steps > 0, "steps", "must be positive, got {steps}");
        }
        Ok(())
    }
}

impl fmt::Display for PricingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingMethod::Analytic => write!(f, "analytic"),
            PricingMethod::BaroneAdesiWhaley => write!(f, "Barone-Adesi-Whaley"),
            PricingMethod::Binomial { tree, steps } => write!(f, "binomial ({tree}, {steps} steps)"),
        }
    }
}

/// Flat model inputs for a vanilla option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholesInputs {
    /// Call or put.
    pub option_type: OptionType,
    /// Spot price of the underlying.
    pub spot: Real,
    /// Strike price.
    pub strike: Real,
    /// Continuous risk-free rate.
    pub rate: Rate,
    /// Continuous dividend yield.
    pub dividend: Rate,
    /// Black volatility.
    pub volatility: Volatility,
    /// Time to maturity in years.
    pub time: Time,
}

impl BlackScholesInputs {
    /// Validated inputs.
    ///
    /// # Errors
    /// `InvalidParameter` naming the first field outside its domain.
    pub fn new(
        option_type: OptionType,
        spot: Real,
        strike: Real,
        rate: Rate,
        dividend: Rate,
        volatility: Volatility,
        time: Time,
    ) -> Result<Self> {
        ensure_param!(
            strike.is_finite() && strike > 0.0,
            "strike",
            "must be positive, got {strike}"
        );
        ensure_param!(spot.is_finite() && spot > 0.0, "spot", "must be positive, got {spot}");
        ensure_param!(
            volatility.is_finite() && volatility >= 0.0,
            "volatility",
            "must be non-negative, got {volatility}"
        );
        ensure_param!(
            time.is_finite() && time >= 0.0,
            "maturity",
            "time to maturity must be non-negative, got {time}"
        );
        ensure_param!(rate.is_finite(), "rate", "must be finite, got {rate}");
        ensure_param!(dividend.is_finite(), "dividend", "must be finite, got {dividend}");
        Ok(Self {
            option_type,
            spot,
            strike,
            rate,
            dividend,
            volatility,
            time,
        })
    }

    /// The payoff these inputs price.
    pub fn payoff(&self) -> PlainVanillaPayoff {
        PlainVanillaPayoff::new(self.option_type, self.strike)
    }

    /// Payoff of immediate exercise at the current spot.
    pub fn intrinsic(&self) -> Real {
        self.payoff().value(self.spot)
    }

    /// `exp(−rT)`.
    pub fn risk_free_discount(&self) -> Real {
        (-self.rate * self.time).exp()
    }

    /// `exp(−qT)`.
    pub fn dividend_discount(&self) -> Real {
        (-self.dividend * self.time).exp()
    }

    /// `σ√T`.
    pub fn std_dev(&self) -> Real {
        self.volatility * self.time.sqrt()
    }

    /// Whether the lognormal distribution has collapsed to a point.
    pub fn is_degenerate(&self) -> bool {
        self.time == 0.0 || self.std_dev() < DEGENERATE_STD_DEV
    }

    /// Parameters for a binomial tree over the option's life.
    pub fn tree_inputs(&self) -> TreeInputs {
        TreeInputs {
            spot: self.spot,
            rate: self.rate,
            dividend: self.dividend,
            volatility: self.volatility,
            maturity: self.time,
        }
    }

    pub(crate) fn with_spot(self, spot: Real) -> Self {
        Self { spot, ..self }
    }

    pub(crate) fn with_volatility(self, volatility: Volatility) -> Self {
        Self { volatility, ..self }
    }

    pub(crate) fn with_rate(self, rate: Rate) -> Self {
        Self { rate, ..self }
    }

    pub(crate) fn with_time(self, time: Time) -> Self {
        Self { time, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ql_core::Handle;
    use ql_quotes::SimpleQuote;
    use ql_termstructures::{BlackConstantVol, BlackVolTermStructure, FlatForward, YieldTermStructure};
    use ql_time::{Actual360, Actual365Fixed};
    use std::sync::Arc;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn contract(strike: Real, spot: Real, vol: Volatility) -> OptionContract {
        let today = date(2023, 8, 2);
        let rf: Arc<dyn YieldTermStructure> =
            Arc::new(FlatForward::continuous(today, 0.05, Actual360).unwrap());
        let bv: Arc<dyn BlackVolTermStructure> =
            Arc::new(BlackConstantVol::from_value(today, vol, Actual365Fixed).unwrap());
        let process = BlackScholesProcess::new(
            SimpleQuote::new("spot", spot).into_handle(),
            Handle::from_arc(rf),
            Handle::from_arc(bv),
        )
        .unwrap();
        let option = VanillaOption::european(OptionType::Call, strike, date(2023, 8, 15));
        OptionContract::new(option, process, today)
    }

    #[test]
    fn time_uses_vol_day_counter_and_rate_reproduces_curve_discount() {
        let inputs = contract(95.0, 100.0, 0.2).inputs().unwrap();
        assert_abs_diff_eq!(inputs.time, 13.0 / 365.0, epsilon = 1e-15);
        // Act/360 curve discount expressed over an Act/365F year fraction.
        let df = (-0.05 * 13.0 / 360.0_f64).exp();
        assert_abs_diff_eq!(inputs.risk_free_discount(), df, epsilon = 1e-14);
        assert_eq!(inputs.dividend, 0.0);
    }

    #[test]
    fn invalid_inputs_name_their_field() {
        let err = contract(0.0, 100.0, 0.2).inputs().unwrap_err();
        assert_eq!(err.field(), Some("strike"));
        let err = contract(95.0, 0.0, 0.2).inputs().unwrap_err();
        assert_eq!(err.field(), Some("spot"));
    }

    #[test]
    fn maturity_before_valuation_is_rejected() {
        let c = contract(95.0, 100.0, 0.2);
        let late = OptionContract::new(*c.option(), c.process().clone(), date(2023, 8, 16));
        assert_eq!(late.inputs().unwrap_err().field(), Some("maturity"));
    }

    #[test]
    fn negative_volatility_is_rejected() {
        let err = BlackScholesInputs::new(OptionType::Put, 100.0, 95.0, 0.05, 0.0, -0.1, 1.0)
            .unwrap_err();
        assert_eq!(err.field(), Some("volatility"));
    }

    #[test]
    fn zero_step_binomial_is_rejected() {
        let m = PricingMethod::Binomial {
            tree: TreeKind::CoxRossRubinstein,
            steps: 0,
        };
        assert_eq!(m.validate().unwrap_err().field(), Some("steps"));
        assert!(PricingMethod::Analytic.validate().is_ok());
    }
}
