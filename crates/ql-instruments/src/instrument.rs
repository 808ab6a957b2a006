//! `Instrument` trait and pricing results.
//!
//! Instruments are plain descriptions; pricing engines take them together
//! with market data and an explicit valuation date and return a
//! [`PricingResult`].

use ql_core::errors::Result;
use ql_core::{ensure_finite, Real};
use ql_time::Date;

/// First-order sensitivities of an option value.
///
/// Theta is per year (`∂V/∂t` with calendar time running forward); vega and
/// rho are per unit change of volatility and rate.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Greeks {
    /// `∂V/∂S`.
    pub delta: Real,
    /// `∂²V/∂S²`.
    pub gamma: Real,
    /// `∂V/∂t`.
    pub theta: Real,
    /// `∂V/∂σ`.
    pub vega: Real,
    /// `∂V/∂r`.
    pub rho: Real,
}

impl Greeks {
    /// Fail with `NumericalInstability` if any sensitivity is not finite.
    pub fn checked(self) -> Result<Self> {
        ensure_finite!(self.delta, "delta");
        ensure_finite!(self.gamma, "gamma");
        ensure_finite!(self.theta, "theta");
        ensure_finite!(self.vega, "vega");
        ensure_finite!(self.rho, "rho");
        Ok(self)
    }
}

/// Value of an instrument and, where computed, its Greeks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingResult {
    /// Present value.
    pub value: Real,
    /// Sensitivities, if the engine produced them.
    pub greeks: Option<Greeks>,
}

impl PricingResult {
    /// A result carrying only a value.
    pub fn from_value(value: Real) -> Self {
        Self {
            value,
            greeks: None,
        }
    }

    /// Attach Greeks.
    pub fn with_greeks(mut self, greeks: Greeks) -> Self {
        self.greeks = Some(greeks);
        self
    }

    /// Fail with `NumericalInstability` if the value or any Greek is not
    /// finite.
    pub fn checked(self) -> Result<Self> {
        ensure_finite!(self.value, "value");
        if let Some(g) = self.greeks {
            g.checked()?;
        }
        Ok(self)
    }
}

/// A financial instrument with a final date.
pub trait Instrument: std::fmt::Debug + Send + Sync {
    /// The last date on which the instrument pays or can be exercised.
    fn maturity_date(&self) -> Date;

    /// Whether the instrument has expired as of `valuation_date`.
    ///
    /// An instrument maturing on the valuation date is still alive.
    fn is_expired(&self, valuation_date: Date) -> bool {
        self.maturity_date() < valuation_date
    }
}
