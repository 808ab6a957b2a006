//! # ql-time
//!
//! Dates, calendars, day counters, business-day conventions, and interest
//! rates with explicit compounding.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Calendar trait and built-in implementations.
pub mod calendar;

/// Holiday calendars.
pub mod calendars;

/// `Date` type.
pub mod date;

/// `DayCounter` trait and built-in day-count conventions.
pub mod day_counter;

/// Compounding frequency.
pub mod frequency;

/// `InterestRate`: a rate with day-count and compounding conventions.
pub mod interest_rate;

/// `TimeUnit`: days, weeks, months, years.
pub mod time_unit;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{Calendar, NullCalendar, WeekendsOnly};
pub use calendars::Target;
pub use date::Date;
pub use day_counter::{
    day_count, year_fraction, Actual360, Actual365Fixed, ActualActualIsda, DayCountConvention,
    DayCounter, Thirty360,
};
pub use frequency::Frequency;
pub use interest_rate::InterestRate;
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
