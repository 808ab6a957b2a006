//! Scenario configuration.
//!
//! Every field has a default reproducing the example valuations, so the
//! driver runs without a file. A TOML file may override any subset:
//!
//! ```toml
//! [option]
//! type = "put"
//! spot = 102.5
//! maturity = "2023-09-15"
//!
//! [rate]
//! compounding = "continuous"
//! ```

use crate::error::{CliError, Result};
use chrono::{Datelike, NaiveDate};
use qlval::core::Compounding;
use qlval::instruments::OptionType;
use qlval::time::{BusinessDayConvention, Date, DayCountConvention, Frequency};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

const OPTION_VALUATION_DATE: (u16, u8, u8) = (2023, 8, 2);
const OPTION_MATURITY: (u16, u8, u8) = (2023, 8, 15);
const BOND_ISSUE_DATE: (u16, u8, u8) = (2021, 12, 31);
const BOND_MATURITY: (u16, u8, u8) = (2023, 12, 31);
const DAY_COUNT_FROM: (u16, u8, u8) = (2023, 1, 1);
const DAY_COUNT_TO: (u16, u8, u8) = (2023, 12, 31);

/// The full scenario: one option, one bond and one interest rate.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Option market and contract.
    pub option: OptionConfig,
    /// Zero-coupon bond and its flat yield.
    pub bond: BondConfig,
    /// Interest rate, annuity and day-count examples.
    pub rate: RateConfig,
}

impl ScenarioConfig {
    /// Load a scenario file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_toml(&std::fs::read_to_string(path)?),
            None => Ok(Self::default()),
        }
    }

    /// Parse a scenario from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CliError::Config(e.to_string()))
    }
}

/// A vanilla option on a flat market.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OptionConfig {
    /// `call` or `put`.
    #[serde(rename = "type")]
    pub option_type: String,
    pub spot: f64,
    pub strike: f64,
    /// Continuously compounded risk-free rate.
    pub rate: f64,
    /// Continuous dividend yield.
    pub dividend: f64,
    pub volatility: f64,
    pub valuation_date: Option<NaiveDate>,
    pub maturity: Option<NaiveDate>,
    pub day_counter: String,
}

impl Default for OptionConfig {
    fn default() -> Self {
        Self {
            option_type: "call".into(),
            spot: 100.0,
            strike: 95.0,
            rate: 0.05,
            dividend: 0.0,
            volatility: 0.20,
            valuation_date: None,
            maturity: None,
            day_counter: "Actual365Fixed".into(),
        }
    }
}

impl OptionConfig {
    pub fn option_type(&self) -> Result<OptionType> {
        parse(&self.option_type)
    }

    pub fn day_counter(&self) -> Result<DayCountConvention> {
        parse(&self.day_counter)
    }

    pub fn valuation_date(&self) -> Result<Date> {
        date_or(self.valuation_date, OPTION_VALUATION_DATE)
    }

    pub fn maturity(&self) -> Result<Date> {
        date_or(self.maturity, OPTION_MATURITY)
    }
}

/// A zero-coupon bond discounted on a flat, continuously compounded yield.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BondConfig {
    pub face_amount: f64,
    pub redemption: f64,
    /// Flat yield of the discount curve.
    #[serde(rename = "yield")]
    pub yield_rate: f64,
    pub settlement_days: u32,
    pub issue_date: Option<NaiveDate>,
    pub maturity: Option<NaiveDate>,
    pub convention: String,
    pub day_counter: String,
}

impl Default for BondConfig {
    fn default() -> Self {
        Self {
            face_amount: 100.0,
            redemption: 100.0,
            yield_rate: 0.05,
            settlement_days: 2,
            issue_date: None,
            maturity: None,
            convention: "Following".into(),
            day_counter: "Actual365Fixed".into(),
        }
    }
}

impl BondConfig {
    pub fn convention(&self) -> Result<BusinessDayConvention> {
        parse(&self.convention)
    }

    pub fn day_counter(&self) -> Result<DayCountConvention> {
        parse(&self.day_counter)
    }

    pub fn issue_date(&self) -> Result<Date> {
        date_or(self.issue_date, BOND_ISSUE_DATE)
    }

    pub fn maturity(&self) -> Result<Date> {
        date_or(self.maturity, BOND_MATURITY)
    }
}

/// An interest rate with its annuity and day-count examples.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RateConfig {
    pub rate: f64,
    pub compounding: String,
    pub frequency: String,
    pub day_counter: String,
    /// Payment of each annuity period.
    pub payment: f64,
    pub annuity_periods: i32,
    pub day_count_from: Option<NaiveDate>,
    pub day_count_to: Option<NaiveDate>,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            rate: 0.05,
            compounding: "compounded".into(),
            frequency: "quarterly".into(),
            day_counter: "Actual365Fixed".into(),
            payment: 1.0,
            annuity_periods: 5,
            day_count_from: None,
            day_count_to: None,
        }
    }
}

impl RateConfig {
    pub fn compounding(&self) -> Result<Compounding> {
        parse(&self.compounding)
    }

    pub fn frequency(&self) -> Result<Frequency> {
        parse(&self.frequency)
    }

    pub fn day_counter(&self) -> Result<DayCountConvention> {
        parse(&self.day_counter)
    }

    pub fn day_count_from(&self) -> Result<Date> {
        date_or(self.day_count_from, DAY_COUNT_FROM)
    }

    pub fn day_count_to(&self) -> Result<Date> {
        date_or(self.day_count_to, DAY_COUNT_TO)
    }
}

/// Convert a calendar date to a library date.
fn to_date(date: NaiveDate) -> Result<Date> {
    let year = u16::try_from(date.year())
        .map_err(|_| CliError::InvalidDate(format!("{date}: year out of range")))?;
    Date::from_ymd(year, date.month() as u8, date.day() as u8)
        .map_err(|e| CliError::InvalidDate(format!("{date}: {e}")))
}

fn parse<T>(s: &str) -> Result<T>
where
    T: FromStr<Err = qlval::core::Error>,
{
    s.parse().map_err(|e: qlval::core::Error| CliError::Config(e.to_string()))
}

/// `date`, or the library date `(year, month, day)` when unset.
fn date_or(date: Option<NaiveDate>, (year, month, day): (u16, u8, u8)) -> Result<Date> {
    match date {
        Some(date) => to_date(date),
        None => Date::from_ymd(year, month, day)
            .map_err(|e| CliError::InvalidDate(format!("{year}-{month}-{day}: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_the_example_programs() {
        let cfg = ScenarioConfig::default();
        assert_eq!(cfg.option.option_type().unwrap(), OptionType::Call);
        assert_eq!(cfg.option.day_counter().unwrap(), DayCountConvention::Actual365Fixed);
        assert_eq!(cfg.bond.convention().unwrap(), BusinessDayConvention::Following);
        assert_eq!(cfg.rate.compounding().unwrap(), Compounding::Compounded);
        assert_eq!(cfg.rate.frequency().unwrap(), Frequency::Quarterly);
        assert_eq!(cfg.option.maturity().unwrap(), Date::from_ymd(2023, 8, 15).unwrap());
    }

    #[test]
    fn every_default_date_resolves() {
        let cfg = ScenarioConfig::default();
        let dates = [
            cfg.option.valuation_date(),
            cfg.option.maturity(),
            cfg.bond.issue_date(),
            cfg.bond.maturity(),
            cfg.rate.day_count_from(),
            cfg.rate.day_count_to(),
        ];
        let dates: Vec<Date> = dates.into_iter().collect::<Result<_>>().unwrap();
        assert_eq!(dates[0], Date::from_ymd(2023, 8, 2).unwrap());
        assert_eq!(dates[2], Date::from_ymd(2021, 12, 31).unwrap());
        assert_eq!(dates[5], Date::from_ymd(2023, 12, 31).unwrap());
    }

    #[test]
    fn malformed_date_is_a_config_error() {
        let err = ScenarioConfig::from_toml("[bond]\nmaturity = \"2023-02-30\"\n").unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn partial_file_overrides_only_what_it_names() {
        let cfg = ScenarioConfig::from_toml(
            r#"
            [option]
            type = "put"
            maturity = "2023-09-15"

            [bond]
            yield = 0.04
            "#,
        )
        .unwrap();
        assert_eq!(cfg.option.option_type().unwrap(), OptionType::Put);
        assert_eq!(cfg.option.maturity().unwrap(), Date::from_ymd(2023, 9, 15).unwrap());
        assert_eq!(cfg.option.valuation_date().unwrap(), Date::from_ymd(2023, 8, 2).unwrap());
        assert_eq!(cfg.option.strike, 95.0);
        assert_eq!(cfg.bond.yield_rate, 0.04);
        assert_eq!(cfg.rate, RateConfig::default());
    }

    #[test]
    fn unknown_fields_and_bad_values_are_config_errors() {
        let err = ScenarioConfig::from_toml("[option]\nspto = 1.0\n").unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        let cfg = ScenarioConfig::from_toml("[rate]\ncompounding = \"daily\"\n").unwrap();
        assert!(matches!(cfg.rate.compounding(), Err(CliError::Config(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ScenarioConfig::load(Some(Path::new("/nonexistent/qlval.toml"))).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
