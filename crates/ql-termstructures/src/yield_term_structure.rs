//! `YieldTermStructure`: yield / interest-rate term structures.
//!
//! A yield curve answers one question, the discount factor at a time; zero
//! rates and date-to-date discount factors are derived from it.

use crate::term_structure::TermStructure;
use ql_core::errors::{Error, Result};
use ql_core::{ensure_param, DiscountFactor, Rate, Time};
use ql_time::Date;

/// Time step used for the zero-rate limit at `t = 0`.
const DT: Time = 1.0e-4;

/// A yield (interest-rate) term structure.
pub trait YieldTermStructure: TermStructure {
    /// Discount factor for a time `t ≥ 0` measured from the reference date.
    fn discount_time(&self, t: Time) -> Result<DiscountFactor>;

    /// Discount factor for a date on or after the reference date.
    fn discount_date(&self, date: Date) -> Result<DiscountFactor> {
        self.discount_time(self.time_from_reference(date))
    }

    /// Discount factor from `from` to `to` (`to ≥ from`), i.e. the price at
    /// `from` of one unit paid at `to`. Equals 1 when the dates coincide.
    fn discount_between(&self, from: Date, to: Date) -> Result<DiscountFactor> {
        ensure_param!(to >= from, "to", "{to} precedes {from}");
        if from == to {
            return Ok(1.0);
        }
        let df_from = self.discount_date(from)?;
        let df_to = self.discount_date(to)?;
        if df_from <= 0.0 {
            return Err(Error::NumericalInstability {
                context: "discount ratio",
                reason: format!("non-positive discount factor {df_from} at {from}"),
            });
        }
        Ok(df_to / df_from)
    }

    /// Continuously-compounded zero rate for time `t`.
    fn zero_rate_continuous(&self, t: Time) -> Result<Rate> {
        let t = if t > 0.0 { t } else { DT };
        let df = self.discount_time(t)?;
        if !(df > 0.0 && df.is_finite()) {
            return Err(Error::NumericalInstability {
                context: "zero rate",
                reason: format!("discount factor {df} at t = {t}"),
            });
        }
        Ok(-df.ln() / t)
    }
}
