//! Vanilla option instrument.

use crate::exercise::Exercise;
use crate::instrument::Instrument;
use crate::payoff::{OptionType, PlainVanillaPayoff};
use ql_core::errors::Result;
use ql_core::Real;
use ql_time::Date;

/// A plain vanilla option on a single underlying asset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanillaOption {
    payoff: PlainVanillaPayoff,
    exercise: Exercise,
}

impl VanillaOption {
    /// Create a new vanilla option.
    pub fn new(payoff: PlainVanillaPayoff, exercise: Exercise) -> Self {
        Self { payoff, exercise }
    }

    /// A European call or put.
    pub fn european(option_type: OptionType, strike: Real, maturity: Date) -> Self {
        Self::new(
            PlainVanillaPayoff::new(option_type, strike),
            Exercise::european(maturity),
        )
    }

    /// An American call or put exercisable in `[earliest, maturity]`.
    pub fn american(
        option_type: OptionType,
        strike: Real,
        earliest: Date,
        maturity: Date,
    ) -> Result<Self> {
        Ok(Self::new(
            PlainVanillaPayoff::new(option_type, strike),
            Exercise::american(earliest, maturity)?,
        ))
    }

    /// The same contract with another exercise right.
    pub fn with_exercise(self, exercise: Exercise) -> Self {
        Self { exercise, ..self }
    }

    /// The strike price.
    pub fn strike(&self) -> Real {
        self.payoff.strike
    }

    /// The option type (call/put).
    pub fn option_type(&self) -> OptionType {
        self.payoff.option_type
    }

    /// The payoff.
    pub fn payoff(&self) -> &PlainVanillaPayoff {
        &self.payoff
    }

    /// The exercise.
    pub fn exercise(&self) -> &Exercise {
        &self.exercise
    }
}

impl Instrument for VanillaOption {
    fn maturity_date(&self) -> Date {
        self.exercise.maturity()
    }
}
