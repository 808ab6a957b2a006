//! Black-Scholes-Merton process.
//!
//! `dS/S = (r − q) dt + σ dW`
//!
//! where `r` is the risk-free rate, `q` is the continuous dividend yield and
//! `σ` is read from a Black volatility surface. Each market input is held
//! through a [`Handle`] so that several processes can share one quote or
//! curve.

use ql_core::errors::Result;
use ql_core::{ensure_param, Handle, Rate, Real, Time, Volatility};
use ql_quotes::{handle_value, Quote};
use ql_termstructures::{BlackVolTermStructure, FlatForward, TermStructure, YieldTermStructure};
use ql_time::{Actual365Fixed, Date};
use std::sync::Arc;

/// A Black-Scholes-Merton stochastic process.
#[derive(Debug, Clone)]
pub struct BlackScholesProcess {
    spot: Handle<dyn Quote>,
    risk_free: Handle<dyn YieldTermStructure>,
    dividend: Handle<dyn YieldTermStructure>,
    volatility: Handle<dyn BlackVolTermStructure>,
}

impl BlackScholesProcess {
    /// A process without dividends: the dividend curve is a zero-rate flat
    /// curve anchored at the risk-free curve's reference date.
    ///
    /// # Errors
    /// `NullValue` if any handle is empty.
    pub fn new(
        spot: Handle<dyn Quote>,
        risk_free: Handle<dyn YieldTermStructure>,
        volatility: Handle<dyn BlackVolTermStructure>,
    ) -> Result<Self> {
        let reference = risk_free.try_get()?.reference_date();
        let zero = FlatForward::continuous(reference, 0.0, Actual365Fixed)?;
        let zero: Arc<dyn YieldTermStructure> = Arc::new(zero);
        Self::merton(spot, risk_free, Handle::from_arc(zero), volatility)
    }

    /// A process with a continuous dividend yield curve.
    ///
    /// # Errors
    /// `NullValue` if any handle is empty.
    pub fn merton(
        spot: Handle<dyn Quote>,
        risk_free: Handle<dyn YieldTermStructure>,
        dividend: Handle<dyn YieldTermStructure>,
        volatility: Handle<dyn BlackVolTermStructure>,
    ) -> Result<Self> {
        handle_value(&spot)?;
        risk_free.try_get()?;
        dividend.try_get()?;
        volatility.try_get()?;
        Ok(Self {
            spot,
            risk_free,
            dividend,
            volatility,
        })
    }

    /// Current value of the underlying.
    pub fn spot(&self) -> Result<Real> {
        handle_value(&self.spot)
    }

    /// The risk-free curve.
    pub fn risk_free(&self) -> Result<&dyn YieldTermStructure> {
        self.risk_free.try_get()
    }

    /// The dividend-yield curve.
    pub fn dividend(&self) -> Result<&dyn YieldTermStructure> {
        self.dividend.try_get()
    }

    /// The Black volatility surface.
    pub fn volatility(&self) -> Result<&dyn BlackVolTermStructure> {
        self.volatility.try_get()
    }

    /// Black volatility for `maturity` at `strike`.
    pub fn black_vol(&self, maturity: Date, strike: Real) -> Result<Volatility> {
        Ok(self.volatility()?.black_vol(maturity, strike))
    }

    /// Continuously-compounded rate `r` over `[from, to]` such that
    /// `exp(−r·t)` equals the curve's discount between the two dates, with
    /// `t` measured by `time`.
    ///
    /// Falls back to the instantaneous zero rate when `t` is zero.
    pub fn risk_free_rate(&self, from: Date, to: Date, t: Time) -> Result<Rate> {
        implied_continuous_rate(self.risk_free()?, from, to, t)
    }

    /// Continuous dividend yield over `[from, to]`, as for
    /// [`risk_free_rate`](Self::risk_free_rate).
    pub fn dividend_yield(&self, from: Date, to: Date, t: Time) -> Result<Rate> {
        implied_continuous_rate(self.dividend()?, from, to, t)
    }
}

fn implied_continuous_rate(
    curve: &dyn YieldTermStructure,
    from: Date,
    to: Date,
    t: Time,
) -> Result<Rate> {
    ensure_param!(t.is_finite() && t >= 0.0, "time", "must be non-negative, got {t}");
    if t == 0.0 {
        return curve.zero_rate_continuous(curve.time_from_reference(from));
    }
    let df = curve.discount_between(from, to)?;
    Ok(-df.ln() / t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ql_core::Compounding;
    use ql_quotes::SimpleQuote;
    use ql_termstructures::BlackConstantVol;
    use ql_time::Frequency;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn curve(rate: Rate) -> Handle<dyn YieldTermStructure> {
        let c: Arc<dyn YieldTermStructure> =
            Arc::new(FlatForward::continuous(date(2025, 1, 2), rate, Actual365Fixed).unwrap());
        Handle::from_arc(c)
    }

    fn vol(sigma: Volatility) -> Handle<dyn BlackVolTermStructure> {
        let v: Arc<dyn BlackVolTermStructure> =
            Arc::new(BlackConstantVol::from_value(date(2025, 1, 2), sigma, Actual365Fixed).unwrap());
        Handle::from_arc(v)
    }

    fn make_bsm() -> BlackScholesProcess {
        BlackScholesProcess::merton(
            SimpleQuote::new("spot", 100.0).into_handle(),
            curve(0.05),
            curve(0.02),
            vol(0.20),
        )
        .unwrap()
    }

    #[test]
    fn market_inputs_are_exposed() {
        let p = make_bsm();
        assert_eq!(p.spot().unwrap(), 100.0);
        assert_eq!(p.black_vol(date(2026, 1, 2), 95.0).unwrap(), 0.20);
    }

    #[test]
    fn rates_are_recovered_from_discount_factors() {
        let p = make_bsm();
        let (from, to) = (date(2025, 1, 2), date(2026, 1, 2));
        let t = 1.0;
        assert_abs_diff_eq!(p.risk_free_rate(from, to, t).unwrap(), 0.05, epsilon = 1e-14);
        assert_abs_diff_eq!(p.dividend_yield(from, to, t).unwrap(), 0.02, epsilon = 1e-14);
    }

    #[test]
    fn compounded_curve_gives_equivalent_continuous_rate() {
        let c: Arc<dyn YieldTermStructure> = Arc::new(FlatForward::new(
            date(2025, 1, 2),
            SimpleQuote::new("r", 0.05).into_handle(),
            Arc::new(Actual365Fixed),
            Compounding::Compounded,
            Frequency::Annual,
        )
        .unwrap());
        let p = BlackScholesProcess::new(
            SimpleQuote::new("spot", 100.0).into_handle(),
            Handle::from_arc(c),
            vol(0.2),
        )
        .unwrap();
        let r = p.risk_free_rate(date(2025, 1, 2), date(2026, 1, 2), 1.0).unwrap();
        assert_abs_diff_eq!(r, 1.05_f64.ln(), epsilon = 1e-14);
    }

    #[test]
    fn zero_time_uses_instantaneous_rate() {
        let p = make_bsm();
        let d = date(2025, 1, 2);
        assert_abs_diff_eq!(p.risk_free_rate(d, d, 0.0).unwrap(), 0.05, epsilon = 1e-12);
    }

    #[test]
    fn no_dividend_process_has_zero_yield() {
        let p = BlackScholesProcess::new(
            SimpleQuote::new("spot", 100.0).into_handle(),
            curve(0.05),
            vol(0.2),
        )
        .unwrap();
        let q = p.dividend_yield(date(2025, 1, 2), date(2027, 1, 2), 2.0).unwrap();
        assert_eq!(q, 0.0);
    }

    #[test]
    fn empty_handles_are_rejected() {
        let err = BlackScholesProcess::new(
            SimpleQuote::empty("spot").into_handle(),
            curve(0.05),
            vol(0.2),
        )
        .unwrap_err();
        assert_eq!(err, ql_core::Error::NullValue);
        assert!(BlackScholesProcess::new(
            SimpleQuote::new("spot", 100.0).into_handle(),
            Handle::null(),
            vol(0.2),
        )
        .is_err());
    }
}
