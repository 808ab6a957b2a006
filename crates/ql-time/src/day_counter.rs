//! `DayCounter` trait and built-in day-count conventions.
//!
//! A day counter turns a pair of dates into a day count and a year
//! fraction. Every convention here returns zero for identical dates and is
//! non-decreasing as the end date advances.

use crate::date::{days_in_year, Date};
use ql_core::errors::Error;
use ql_core::{Real, Time};
use std::sync::Arc;

/// A convention for counting days and the fraction of a year between two
/// dates.
pub trait DayCounter: std::fmt::Debug + Send + Sync {
    /// Human-readable name of this convention (e.g. `"Actual/365 (Fixed)"`).
    fn name(&self) -> &str;

    /// Number of days between `d1` and `d2` according to this convention.
    fn day_count(&self, d1: Date, d2: Date) -> i64;

    /// Fraction of a year between `d1` and `d2`.
    fn year_fraction(&self, d1: Date, d2: Date) -> Time;
}

/// Actual/365 (Fixed): `actual_days / 365`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual365Fixed;

impl DayCounter for Actual365Fixed {
    fn name(&self) -> &str {
        "Actual/365 (Fixed)"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        (d2 - d1) as i64
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 365.0
    }
}

/// Actual/360: `actual_days / 360`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual360;

impl DayCounter for Actual360 {
    fn name(&self) -> &str {
        "Actual/360"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        (d2 - d1) as i64
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 360.0
    }
}

/// 30/360 Bond Basis.
///
/// `day_count = 360(Y2−Y1) + 30(M2−M1) + (D2−D1)` where D1 = 31 becomes 30,
/// and D2 = 31 becomes 30 when D1 is 30 or 31.
#[derive(Debug, Clone, Copy, Default)]
pub struct Thirty360;

impl DayCounter for Thirty360 {
    fn name(&self) -> &str {
        "30/360 (Bond Basis)"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        let (y1, m1) = (d1.year() as i64, d1.month() as i64);
        let (y2, m2) = (d2.year() as i64, d2.month() as i64);
        let mut dd1 = d1.day_of_month() as i64;
        let mut dd2 = d2.day_of_month() as i64;

        if dd1 == 31 {
            dd1 = 30;
        }
        if dd2 == 31 && dd1 >= 30 {
            dd2 = 30;
        }

        360 * (y2 - y1) + 30 * (m2 - m1) + (dd2 - dd1)
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 360.0
    }
}

/// Actual/Actual (ISDA).
///
/// The period is split at year boundaries; each piece is divided by the
/// length (365 or 366) of the year it falls in.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActualActualIsda;

impl DayCounter for ActualActualIsda {
    fn name(&self) -> &str {
        "Actual/Actual (ISDA)"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        (d2 - d1) as i64
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        if d1 == d2 {
            return 0.0;
        }
        if d1 > d2 {
            return -self.year_fraction(d2, d1);
        }
        let (y1, y2) = (d1.year(), d2.year());
        // Whole years strictly between the two dates count as one each.
        let mut sum = (y2 - y1) as Real - 1.0;
        let start_of_next = d1.day_of_year() as Real - 1.0;
        sum += (days_in_year(y1) as Real - start_of_next) / days_in_year(y1) as Real;
        sum += (d2.day_of_year() as Real - 1.0) / days_in_year(y2) as Real;
        sum
    }
}

/// The named day-count conventions supported by [`day_count`] and
/// [`year_fraction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCountConvention {
    /// Actual/365 (Fixed).
    Actual365Fixed,
    /// Actual/360.
    Actual360,
    /// 30/360 Bond Basis.
    Thirty360,
    /// Actual/Actual (ISDA).
    ActualActualIsda,
}

impl DayCountConvention {
    /// Every supported convention.
    pub const ALL: [DayCountConvention; 4] = [
        DayCountConvention::Actual365Fixed,
        DayCountConvention::Actual360,
        DayCountConvention::Thirty360,
        DayCountConvention::ActualActualIsda,
    ];

    /// A shareable day counter implementing this convention.
    pub fn day_counter(self) -> Arc<dyn DayCounter> {
        match self {
            DayCountConvention::Actual365Fixed => Arc::new(Actual365Fixed),
            DayCountConvention::Actual360 => Arc::new(Actual360),
            DayCountConvention::Thirty360 => Arc::new(Thirty360),
            DayCountConvention::ActualActualIsda => Arc::new(ActualActualIsda),
        }
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.day_counter().name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "actual365fixed" | "act365f" | "act365" => Ok(DayCountConvention::Actual365Fixed),
            "actual360" | "act360" => Ok(DayCountConvention::Actual360),
            "thirty360" | "30360" => Ok(DayCountConvention::Thirty360),
            "actualactualisda" | "actactisda" => Ok(DayCountConvention::ActualActualIsda),
            _ => Err(Error::InvalidArgument(format!(
                "unknown day-count convention '{s}'"
            ))),
        }
    }
}

/// Day count between `from` and `to` under `convention`.
pub fn day_count(from: Date, to: Date, convention: DayCountConvention) -> Real {
    convention.day_counter().day_count(from, to) as Real
}

/// Year fraction between `from` and `to` under `convention`.
pub fn year_fraction(from: Date, to: Date, convention: DayCountConvention) -> Time {
    convention.day_counter().year_fraction(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn actual365_fixed() {
        let dc = Actual365Fixed;
        let d1 = date(2023, 1, 1);
        let d2 = date(2024, 1, 1);
        assert_eq!(dc.day_count(d1, d2), 365);
        assert!((dc.year_fraction(d1, d2) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn thirty360_month_end() {
        let dc = Thirty360;
        assert_eq!(dc.day_count(date(2023, 1, 1), date(2024, 1, 1)), 360);
        assert_eq!(dc.day_count(date(2023, 1, 30), date(2023, 1, 31)), 0);
        assert_eq!(dc.day_count(date(2023, 1, 29), date(2023, 1, 31)), 2);
        assert_eq!(dc.day_count(date(2023, 1, 31), date(2023, 2, 1)), 1);
    }

    #[test]
    fn actual_actual_isda_across_leap_year() {
        let dc = ActualActualIsda;
        let yf = dc.year_fraction(date(2003, 11, 1), date(2004, 5, 1));
        let expected = 61.0 / 365.0 + 121.0 / 366.0;
        assert!((yf - expected).abs() < 1e-12);
    }

    #[test]
    fn free_functions_dispatch_on_convention() {
        let (from, to) = (date(2023, 1, 1), date(2023, 12, 31));
        assert_eq!(day_count(from, to, DayCountConvention::Actual365Fixed), 364.0);
        assert_eq!(day_count(from, to, DayCountConvention::Thirty360), 360.0);
        assert!((year_fraction(from, to, DayCountConvention::Actual360) - 364.0 / 360.0).abs() < 1e-12);
    }

    #[test]
    fn parse_convention() {
        assert_eq!(
            "Actual/365 (Fixed)".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Actual365Fixed
        );
        assert_eq!("30/360".parse::<DayCountConvention>().unwrap(), DayCountConvention::Thirty360);
        assert!("bus/252".parse::<DayCountConvention>().is_err());
    }
}
