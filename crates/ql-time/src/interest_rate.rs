//! Interest rate with compounding and day-counting conventions.
//!
//! An `InterestRate` bundles a rate value with a `DayCounter`, a
//! `Compounding` convention, and a `Frequency`. It computes compound
//! factors, discount factors, and equivalent rates. The conventions are
//! always explicit: nothing here assumes continuous compounding.

use crate::date::Date;
use crate::day_counter::DayCounter;
use crate::frequency::Frequency;
use ql_core::errors::{Error, Result};
use ql_core::{ensure_param, Compounding, DiscountFactor, Rate, Real, Time};
use std::sync::Arc;

/// An interest rate with associated compounding and day-counting conventions.
#[derive(Debug, Clone)]
pub struct InterestRate {
    rate: Rate,
    dc: Arc<dyn DayCounter>,
    compounding: Compounding,
    frequency: Frequency,
}

impl InterestRate {
    /// Create a new interest rate.
    ///
    /// # Arguments
    /// * `rate`: the annual rate as a decimal (e.g. 0.05 = 5%)
    /// * `dc`: day counter for year-fraction calculations
    /// * `compounding`: compounding convention
    /// * `frequency`: compounding frequency (ignored for Simple and Continuous)
    ///
    /// # Errors
    /// `InvalidParameter` on a non-finite rate, or on `Compounded` with a
    /// frequency that has no positive number of periods per year.
    pub fn new(
        rate: Rate,
        dc: impl DayCounter + 'static,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Result<Self> {
        Self::with_day_counter(rate, Arc::new(dc), compounding, frequency)
    }

    /// Create a new interest rate from a shared day counter.
    pub fn with_day_counter(
        rate: Rate,
        dc: Arc<dyn DayCounter>,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Result<Self> {
        ensure_param!(rate.is_finite(), "rate", "must be finite, got {rate}");
        if compounding == Compounding::Compounded {
            let periods = frequency.periods_per_year().unwrap_or(0);
            ensure_param!(
                periods > 0,
                "frequency",
                "compounded rates need a positive number of periods per year, got {frequency}"
            );
        }
        Ok(Self {
            rate,
            dc,
            compounding,
            frequency,
        })
    }

    /// The rate value.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// The day counter.
    pub fn day_counter(&self) -> &dyn DayCounter {
        &*self.dc
    }

    /// The compounding convention.
    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    /// The compounding frequency.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Compound factor over a period of `t` years.
    ///
    /// # Errors
    /// `InvalidParameter` if `t` is negative or not finite;
    /// `NumericalInstability` if the factor is non-positive or not finite
    /// (e.g. `1 + r·t ≤ 0` under simple compounding).
    pub fn compound_factor_time(&self, t: Time) -> Result<Real> {
        ensure_param!(t.is_finite() && t >= 0.0, "time", "must be non-negative, got {t}");
        if t == 0.0 {
            return Ok(1.0);
        }
        let factor = match self.compounding {
            Compounding::Simple => 1.0 + self.rate * t,
            Compounding::Compounded => {
                let m = self.periods_per_year();
                (1.0 + self.rate / m).powf(m * t)
            }
            Compounding::Continuous => (self.rate * t).exp(),
        };
        if !(factor.is_finite() && factor > 0.0) {
            return Err(Error::NumericalInstability {
                context: "compound factor",
                reason: format!("factor {factor} for rate {} over {t} years", self.rate),
            });
        }
        Ok(factor)
    }

    /// Compound factor between two dates, using this rate's day counter.
    pub fn compound_factor(&self, d1: Date, d2: Date) -> Result<Real> {
        ensure_param!(d2 >= d1, "to", "{d2} precedes {d1}");
        self.compound_factor_time(self.dc.year_fraction(d1, d2))
    }

    /// Discount factor over a period of `t` years: `1 / compound_factor`.
    pub fn discount_factor_time(&self, t: Time) -> Result<DiscountFactor> {
        Ok(1.0 / self.compound_factor_time(t)?)
    }

    /// Discount factor between two dates.
    pub fn discount_factor(&self, d1: Date, d2: Date) -> Result<DiscountFactor> {
        Ok(1.0 / self.compound_factor(d1, d2)?)
    }

    fn periods_per_year(&self) -> Real {
        // `new` guarantees a positive count for compounded rates.
        self.frequency.periods_per_year().unwrap_or(1).max(1) as Real
    }
}

impl std::fmt::Display for InterestRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}% {} {}", self.rate * 100.0, self.dc.name(), self.compounding)?;
        if self.compounding == Compounding::Compounded {
            write!(f, " {}", self.frequency)?;
        }
        Ok(())
    }
}
