//! `BlackVolTermStructure`: Black-volatility term structures.
//!
//! Provides the `BlackVolTermStructure` trait and `BlackConstantVol`, a flat
//! surface read from a shared quote.

use crate::term_structure::{TermStructure, TermStructureData};
use ql_core::errors::Result;
use ql_core::{ensure_param, Handle, Real, Time, Volatility};
use ql_quotes::{handle_value, Quote, SimpleQuote};
use ql_time::{Calendar, Date, DayCounter, NullCalendar};
use std::sync::Arc;

/// A Black-volatility term structure.
pub trait BlackVolTermStructure: TermStructure {
    /// Black volatility for time `t` and strike `strike`.
    fn black_vol_time(&self, t: Time, strike: Real) -> Volatility;

    /// Black variance `σ²·t` for time `t` and strike `strike`.
    fn black_variance_time(&self, t: Time, strike: Real) -> Real {
        let vol = self.black_vol_time(t, strike);
        vol * vol * t
    }

    /// Black volatility for a date and strike.
    fn black_vol(&self, date: Date, strike: Real) -> Volatility {
        self.black_vol_time(self.time_from_reference(date), strike)
    }
}

// ── BlackConstantVol ──────────────────────────────────────────────────────────

/// A flat (constant) Black volatility surface.
///
/// `σ(t, K) = constant` for all `t` and all strikes `K`.
#[derive(Debug, Clone)]
pub struct BlackConstantVol {
    data: TermStructureData,
    quote: Handle<dyn Quote>,
    volatility: Volatility,
}

impl BlackConstantVol {
    /// Create a constant Black vol surface from a quote.
    ///
    /// # Errors
    /// `NullValue` on an empty quote; `InvalidParameter` (`volatility`) on a
    /// negative or non-finite value.
    pub fn new(
        reference_date: Date,
        quote: Handle<dyn Quote>,
        day_counter: Arc<dyn DayCounter>,
    ) -> Result<Self> {
        let volatility = handle_value(&quote)?;
        ensure_param!(
            volatility.is_finite() && volatility >= 0.0,
            "volatility",
            "must be non-negative, got {volatility}"
        );
        Ok(Self {
            data: TermStructureData::new(reference_date, Arc::new(NullCalendar), day_counter),
            quote,
            volatility,
        })
    }

    /// Create a constant surface from a plain volatility value.
    pub fn from_value(
        reference_date: Date,
        volatility: Volatility,
        day_counter: impl DayCounter + 'static,
    ) -> Result<Self> {
        Self::new(
            reference_date,
            SimpleQuote::new("flat-vol", volatility).into_handle(),
            Arc::new(day_counter),
        )
    }

    /// Replace the calendar.
    pub fn with_calendar(mut self, calendar: Arc<dyn Calendar>) -> Self {
        self.data.calendar = calendar;
        self
    }

    /// The quote the surface was built from.
    pub fn quote(&self) -> &Handle<dyn Quote> {
        &self.quote
    }

    /// The constant volatility value.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }
}

impl TermStructure for BlackConstantVol {
    fn reference_date(&self) -> Date {
        self.data.reference_date
    }

    fn day_counter(&self) -> &dyn DayCounter {
        &*self.data.day_counter
    }

    fn calendar(&self) -> &dyn Calendar {
        &*self.data.calendar
    }
}

impl BlackVolTermStructure for BlackConstantVol {
    fn black_vol_time(&self, _t: Time, _strike: Real) -> Volatility {
        self.volatility
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ql_time::{Actual365Fixed, Target};

    fn ref_date() -> Date {
        Date::from_ymd(2023, 8, 2).unwrap()
    }

    #[test]
    fn constant_vol_value() {
        let surface = BlackConstantVol::from_value(ref_date(), 0.20, Actual365Fixed).unwrap();
        assert_eq!(surface.black_vol_time(1.0, 100.0), 0.20);
        assert_eq!(surface.black_vol_time(5.0, 50.0), 0.20);
        let d = Date::from_ymd(2024, 8, 2).unwrap();
        assert_eq!(surface.black_vol(d, 95.0), 0.20);
    }

    #[test]
    fn constant_vol_variance() {
        let surface = BlackConstantVol::from_value(ref_date(), 0.20, Actual365Fixed).unwrap();
        assert_abs_diff_eq!(surface.black_variance_time(2.0, 100.0), 0.08, epsilon = 1e-15);
    }

    #[test]
    fn negative_vol_rejected() {
        let err = BlackConstantVol::from_value(ref_date(), -0.1, Actual365Fixed).unwrap_err();
        assert_eq!(err.field(), Some("volatility"));
    }

    #[test]
    fn calendar_is_replaceable() {
        let surface = BlackConstantVol::from_value(ref_date(), 0.2, Actual365Fixed)
            .unwrap()
            .with_calendar(Arc::new(Target));
        assert_eq!(surface.calendar().name(), "TARGET");
    }
}
