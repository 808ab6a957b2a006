//! `FlatForward`: a yield term structure with a constant rate.
//!
//! The rate is read once from a shared quote and kept together with its
//! compounding convention, so discount factors follow that convention
//! exactly rather than going through a continuous-rate approximation.

use crate::term_structure::{TermStructure, TermStructureData};
use crate::yield_term_structure::YieldTermStructure;
use ql_core::errors::Result;
use ql_core::{ensure_param, Compounding, DiscountFactor, Handle, Natural, Rate, Time};
use ql_quotes::{handle_value, Quote, SimpleQuote};
use ql_time::{Calendar, Date, DayCounter, Frequency, InterestRate, NullCalendar};
use std::sync::Arc;

/// A flat (constant) yield term structure.
///
/// `P(t) = 1 / compound_factor(t)` under the curve's own conventions.
#[derive(Debug, Clone)]
pub struct FlatForward {
    data: TermStructureData,
    quote: Handle<dyn Quote>,
    rate: InterestRate,
}

impl FlatForward {
    /// Create a flat curve anchored at `reference_date`.
    ///
    /// # Errors
    /// `NullValue` if the quote handle is empty; `InvalidParameter` if the
    /// compounding/frequency pair is invalid.
    pub fn new(
        reference_date: Date,
        quote: Handle<dyn Quote>,
        day_counter: Arc<dyn DayCounter>,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Result<Self> {
        let value = handle_value(&quote)?;
        let rate =
            InterestRate::with_day_counter(value, Arc::clone(&day_counter), compounding, frequency)?;
        Ok(Self {
            data: TermStructureData::new(reference_date, Arc::new(NullCalendar), day_counter),
            quote,
            rate,
        })
    }

    /// Create a continuously-compounded flat curve from a plain rate.
    pub fn continuous(
        reference_date: Date,
        rate: Rate,
        day_counter: impl DayCounter + 'static,
    ) -> Result<Self> {
        Self::new(
            reference_date,
            SimpleQuote::new("flat-rate", rate).into_handle(),
            Arc::new(day_counter),
            Compounding::Continuous,
            Frequency::NoFrequency,
        )
    }

    /// Create a flat curve whose reference date is `settlement_days`
    /// business days after `valuation_date` on `calendar`.
    pub fn with_settlement_days(
        valuation_date: Date,
        settlement_days: Natural,
        calendar: Arc<dyn Calendar>,
        quote: Handle<dyn Quote>,
        day_counter: Arc<dyn DayCounter>,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Result<Self> {
        ensure_param!(
            settlement_days <= i32::MAX as Natural,
            "settlement_days",
            "{settlement_days} is out of range"
        );
        let reference_date =
            calendar.advance_business_days(valuation_date, settlement_days as i32)?;
        let mut curve = Self::new(reference_date, quote, day_counter, compounding, frequency)?;
        curve.data.calendar = calendar;
        Ok(curve)
    }

    /// The quote the curve was built from.
    pub fn quote(&self) -> &Handle<dyn Quote> {
        &self.quote
    }

    /// The flat rate with its conventions.
    pub fn rate(&self) -> &InterestRate {
        &self.rate
    }
}

impl TermStructure for FlatForward {
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

impl YieldTermStructure for FlatForward {
    fn discount_time(&self, t: Time) -> Result<DiscountFactor> {
        self.rate.discount_factor_time(t)
    }

    fn discount_between(&self, from: Date, to: Date) -> Result<DiscountFactor> {
        self.rate.discount_factor(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ql_time::{Actual365Fixed, Target};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn continuous_discount() {
        let curve = FlatForward::continuous(date(2025, 1, 2), 0.05, Actual365Fixed).unwrap();
        assert_eq!(curve.discount_time(0.0).unwrap(), 1.0);
        assert_abs_diff_eq!(curve.discount_time(1.0).unwrap(), (-0.05_f64).exp(), epsilon = 1e-15);
        assert_abs_diff_eq!(curve.discount_time(10.0).unwrap(), (-0.5_f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn compounded_discount_follows_convention() {
        let curve = FlatForward::new(
            date(2025, 1, 2),
            SimpleQuote::new("r", 0.05).into_handle(),
            Arc::new(Actual365Fixed),
            Compounding::Compounded,
            Frequency::Annual,
        )
        .unwrap();
        assert_abs_diff_eq!(curve.discount_time(2.0).unwrap(), 1.0 / 1.1025, epsilon = 1e-15);
        assert_abs_diff_eq!(curve.zero_rate_continuous(3.0).unwrap(), 1.05_f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn simple_compounding_is_not_exponential() {
        let curve = FlatForward::new(
            date(2025, 1, 2),
            SimpleQuote::new("r", 0.05).into_handle(),
            Arc::new(Actual365Fixed),
            Compounding::Simple,
            Frequency::NoFrequency,
        )
        .unwrap();
        assert_abs_diff_eq!(curve.discount_time(2.0).unwrap(), 1.0 / 1.1, epsilon = 1e-15);
    }

    #[test]
    fn discount_between_same_date_is_one() {
        let curve = FlatForward::continuous(date(2025, 1, 2), 0.05, Actual365Fixed).unwrap();
        let d = date(2030, 6, 1);
        assert_eq!(curve.discount_between(d, d).unwrap(), 1.0);
        assert!(curve.discount_between(d, date(2030, 5, 1)).is_err());
    }

    #[test]
    fn settlement_days_move_reference_date() {
        let curve = FlatForward::with_settlement_days(
            date(2021, 12, 31),
            2,
            Arc::new(Target),
            SimpleQuote::new("r", 0.05).into_handle(),
            Arc::new(Actual365Fixed),
            Compounding::Continuous,
            Frequency::NoFrequency,
        )
        .unwrap();
        assert_eq!(curve.reference_date(), date(2022, 1, 4));
        assert_eq!(curve.calendar().name(), "TARGET");
    }

    #[test]
    fn shared_quote_feeds_two_curves() {
        let quote = SimpleQuote::new("EUR-flat", 0.03).into_handle();
        let a = FlatForward::new(
            date(2025, 1, 2),
            quote.clone(),
            Arc::new(Actual365Fixed),
            Compounding::Continuous,
            Frequency::NoFrequency,
        )
        .unwrap();
        let b = FlatForward::new(
            date(2026, 1, 2),
            quote.clone(),
            Arc::new(Actual365Fixed),
            Compounding::Compounded,
            Frequency::Quarterly,
        )
        .unwrap();
        assert!(a.quote().ptr_eq(b.quote()));
        assert_eq!(a.rate().rate(), b.rate().rate());
    }

    #[test]
    fn empty_quote_is_rejected() {
        let err = FlatForward::new(
            date(2025, 1, 2),
            SimpleQuote::empty("r").into_handle(),
            Arc::new(Actual365Fixed),
            Compounding::Continuous,
            Frequency::NoFrequency,
        )
        .unwrap_err();
        assert_eq!(err, ql_core::Error::NullValue);
    }
}
