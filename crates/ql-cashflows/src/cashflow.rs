//! `CashFlow` trait and the fixed-amount flows.
//!
//! A cash flow is an amount of money paid or received at a specific date.

use ql_core::Real;
use ql_time::Date;
use std::fmt;
use std::sync::Arc;

/// An amount paid on a date.
pub trait CashFlow: fmt::Debug + Send + Sync {
    /// The date on which this cash flow is paid.
    fn date(&self) -> Date;

    /// The amount of cash paid on the payment date.
    fn amount(&self) -> Real;

    /// Whether this cash flow has already occurred relative to `ref_date`.
    /// Uses a strict "less-than" comparison: a flow on `ref_date` has NOT
    /// yet occurred.
    fn has_occurred(&self, ref_date: Date) -> bool {
        self.date() < ref_date
    }
}

/// A sequence of cash flows, shared so that legs can be cloned cheaply.
pub type Leg = Vec<Arc<dyn CashFlow>>;

/// A fixed amount at a fixed date.
#[derive(Debug, Clone)]
pub struct SimpleCashFlow {
    /// The payment amount.
    pub amount: Real,
    /// The payment date.
    pub date: Date,
}

impl SimpleCashFlow {
    /// Create a new simple cash flow.
    pub fn new(amount: Real, date: Date) -> Self {
        Self { amount, date }
    }
}

impl CashFlow for SimpleCashFlow {
    fn date(&self) -> Date {
        self.date
    }

    fn amount(&self) -> Real {
        self.amount
    }
}

/// Repayment of a bond's principal.
#[derive(Debug, Clone)]
pub struct Redemption {
    /// The redemption amount.
    pub amount: Real,
    /// The redemption date.
    pub date: Date,
}

impl Redemption {
    /// Create a new redemption cash flow.
    pub fn new(amount: Real, date: Date) -> Self {
        Self { amount, date }
    }
}

impl CashFlow for Redemption {
    fn date(&self) -> Date {
        self.date
    }

    fn amount(&self) -> Real {
        self.amount
    }
}
