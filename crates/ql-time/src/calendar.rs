//! `Calendar` trait and the weekend-only implementations.
//!
//! A calendar knows which dates are business days and can adjust dates
//! according to a [`BusinessDayConvention`]. Holiday rules are a pluggable
//! collaborator: valuation code takes a `&dyn Calendar` and never inspects
//! holidays itself.

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use ql_core::errors::Result;

/// A financial calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"TARGET"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` falls on a weekend in this calendar.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Adjust `date` according to the given business-day convention.
    ///
    /// Fails only if the adjustment walks off the valid date range.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Result<Date> {
        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => roll(self, date, 1),
            BusinessDayConvention::Preceding => roll(self, date, -1),
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = roll(self, date, 1)?;
                if adjusted.month() != date.month() {
                    roll(self, date, -1)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = roll(self, date, -1)?;
                if adjusted.month() != date.month() {
                    roll(self, date, 1)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::Nearest => {
                if self.is_business_day(date) {
                    return Ok(date);
                }
                let fwd = roll(self, date, 1)?;
                let bwd = roll(self, date, -1)?;
                if fwd - date <= date - bwd {
                    Ok(fwd)
                } else {
                    Ok(bwd)
                }
            }
        }
    }

    /// Advance `date` by `n` business days (backwards if `n < 0`).
    ///
    /// With `n == 0` the date is returned unchanged, even on a holiday.
    fn advance_business_days(&self, mut date: Date, n: i32) -> Result<Date> {
        let step: i32 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.abs();
        while remaining > 0 {
            date = date.add_days(step)?;
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }
        Ok(date)
    }

    /// Count the number of business days between `d1` (exclusive) and `d2`
    /// (inclusive). Returns a negative number if `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        let (start, end, sign) = if d2 >= d1 { (d1, d2, 1) } else { (d2, d1, -1) };
        let count = (start.serial() + 1..=end.serial())
            .filter_map(|s| Date::from_serial(s).ok())
            .filter(|d| self.is_business_day(*d))
            .count() as i32;
        sign * count
    }
}

/// Step from `date` in direction `step` until a business day is reached.
fn roll<C: Calendar + ?Sized>(cal: &C, mut date: Date, step: i32) -> Result<Date> {
    while cal.is_holiday(date) {
        date = date.add_days(step)?;
    }
    Ok(date)
}

/// A null calendar: every day is a business day.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCalendar;

impl Calendar for NullCalendar {
    fn name(&self) -> &str {
        "Null"
    }

    fn is_business_day(&self, _date: Date) -> bool {
        true
    }

    fn is_weekend(&self, _date: Date) -> bool {
        false
    }
}

/// A calendar that treats only Saturdays and Sundays as non-business days.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}
