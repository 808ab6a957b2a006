//! TARGET (Trans-European Automated Real-time Gross Settlement) calendar.

use crate::calendar::Calendar;
use crate::date::{day_of_year, Date};

/// TARGET calendar, the settlement calendar of the euro area.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Good Friday and Easter Monday (from 2000)
/// * Labour Day (May 1, from 2000)
/// * Christmas Day and Boxing Day (Dec 25–26)
/// * December 31 in 1998, 1999 and 2001
#[derive(Debug, Clone, Copy, Default)]
pub struct Target;

impl Calendar for Target {
    fn name(&self) -> &str {
        "TARGET"
    }

    fn is_business_day(&self, date: Date) -> bool {
        if self.is_weekend(date) {
            return false;
        }
        let (y, m, d) = (date.year(), date.month(), date.day_of_month());
        let dd = date.day_of_year();
        let em = easter_monday(y);

        let holiday = (d == 1 && m == 1)
            || (y >= 2000 && (dd + 3 == em || dd == em))
            || (y >= 2000 && d == 1 && m == 5)
            || (m == 12 && (d == 25 || d == 26))
            || (m == 12 && d == 31 && matches!(y, 1998 | 1999 | 2001));
        !holiday
    }
}

/// Day of the year (1-based) of Easter Monday in `year`, Gregorian rule.
pub fn easter_monday(year: u16) -> u16 {
    let y = year as i32;
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    day_of_year(year, month as u8, day as u8) + 1
}
