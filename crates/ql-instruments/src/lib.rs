//! # ql-instruments
//!
//! Instrument descriptions: vanilla options (payoff plus exercise) and
//! zero-coupon bonds, together with the result types pricing engines fill.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod bond;
pub mod exercise;
pub mod instrument;
pub mod option;
pub mod payoff;

pub use bond::ZeroCouponBond;
pub use exercise::{Exercise, ExerciseType};
pub use instrument::{Greeks, Instrument, PricingResult};
pub use option::VanillaOption;
pub use payoff::{OptionType, Payoff, PlainVanillaPayoff};
