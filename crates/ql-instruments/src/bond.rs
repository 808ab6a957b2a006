//! Zero-coupon bond.
//!
//! A zero-coupon bond pays a single redemption on its (adjusted) maturity
//! date and nothing in between.

use crate::instrument::Instrument;
use ql_cashflows::{CashFlow, Leg, Redemption};
use ql_core::errors::Result;
use ql_core::{ensure_param, Natural, Real};
use ql_time::{BusinessDayConvention, Calendar, Date};
use std::sync::Arc;

/// A bond paying `redemption` once at maturity.
#[derive(Debug, Clone)]
pub struct ZeroCouponBond {
    settlement_days: Natural,
    calendar: Arc<dyn Calendar>,
    face_amount: Real,
    maturity: Date,
    convention: BusinessDayConvention,
    redemption: Real,
    issue_date: Date,
}

impl ZeroCouponBond {
    /// Create a zero-coupon bond.
    ///
    /// # Errors
    /// `InvalidParameter` if the face amount is not positive, the redemption
    /// is negative, or maturity precedes the issue date.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        settlement_days: Natural,
        calendar: Arc<dyn Calendar>,
        face_amount: Real,
        maturity: Date,
        convention: BusinessDayConvention,
        redemption: Real,
        issue_date: Date,
    ) -> Result<Self> {
        ensure_param!(
            face_amount.is_finite() && face_amount > 0.0,
            "face_amount",
            "must be positive, got {face_amount}"
        );
        ensure_param!(
            redemption.is_finite() && redemption >= 0.0,
            "redemption",
            "must be non-negative, got {redemption}"
        );
        ensure_param!(
            maturity >= issue_date,
            "maturity",
            "{maturity} precedes issue date {issue_date}"
        );
        ensure_param!(
            settlement_days <= i32::MAX as Natural,
            "settlement_days",
            "{settlement_days} is out of range"
        );
        Ok(Self {
            settlement_days,
            calendar,
            face_amount,
            maturity,
            convention,
            redemption,
            issue_date,
        })
    }

    /// Settlement date: the issue date advanced by the settlement days on
    /// the bond's calendar.
    pub fn settlement_date(&self) -> Result<Date> {
        self.calendar
            .advance_business_days(self.issue_date, self.settlement_days as i32)
    }

    /// Payment date: maturity adjusted by the bond's business-day
    /// convention.
    pub fn payment_date(&self) -> Result<Date> {
        self.calendar.adjust(self.maturity, self.convention)
    }

    /// The bond's cash flows: a single redemption on the payment date.
    pub fn cashflows(&self) -> Result<Leg> {
        let redemption: Arc<dyn CashFlow> =
            Arc::new(Redemption::new(self.redemption, self.payment_date()?));
        Ok(vec![redemption])
    }

    /// Number of settlement days.
    pub fn settlement_days(&self) -> Natural {
        self.settlement_days
    }

    /// Settlement calendar.
    pub fn calendar(&self) -> &dyn Calendar {
        &*self.calendar
    }

    /// Face (notional) amount.
    pub fn face_amount(&self) -> Real {
        self.face_amount
    }

    /// Redemption amount paid at maturity.
    pub fn redemption(&self) -> Real {
        self.redemption
    }

    /// Unadjusted maturity.
    pub fn maturity(&self) -> Date {
        self.maturity
    }

    /// Issue date.
    pub fn issue_date(&self) -> Date {
        self.issue_date
    }

    /// Business-day convention applied to maturity.
    pub fn convention(&self) -> BusinessDayConvention {
        self.convention
    }
}

impl Instrument for ZeroCouponBond {
    fn maturity_date(&self) -> Date {
        self.maturity
    }
}
