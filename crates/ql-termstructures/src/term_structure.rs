//! `TermStructure`: base trait for all term structures.
//!
//! Every term structure has a **reference date**, a **day counter**, and a
//! **calendar**. The reference date is fixed at construction; there is no
//! global evaluation date to follow.

use ql_core::Time;
use ql_time::{Calendar, Date, DayCounter};
use std::sync::Arc;

/// Base trait for all term structures.
pub trait TermStructure: std::fmt::Debug + Send + Sync {
    /// The date from which time is measured.
    fn reference_date(&self) -> Date;

    /// The day counter used for date → time-fraction conversions.
    fn day_counter(&self) -> &dyn DayCounter;

    /// The calendar used for date adjustments.
    fn calendar(&self) -> &dyn Calendar;

    /// Convert a date to a year fraction relative to the reference date.
    fn time_from_reference(&self, date: Date) -> Time {
        self.day_counter().year_fraction(self.reference_date(), date)
    }
}

/// Common data shared by the flat term structures.
#[derive(Debug, Clone)]
pub struct TermStructureData {
    /// Reference date.
    pub reference_date: Date,
    /// Calendar for date adjustments.
    pub calendar: Arc<dyn Calendar>,
    /// Day counter for time calculations.
    pub day_counter: Arc<dyn DayCounter>,
}

impl TermStructureData {
    /// Create a new data bundle.
    pub fn new(
        reference_date: Date,
        calendar: Arc<dyn Calendar>,
        day_counter: Arc<dyn DayCounter>,
    ) -> Self {
        Self {
            reference_date,
            calendar,
            day_counter,
        }
    }
}
