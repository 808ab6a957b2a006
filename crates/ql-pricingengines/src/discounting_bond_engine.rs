//! Discounting bond pricing engine.
//!
//! Prices bonds by discounting their pending cash flows on a yield curve
//! from the bond's settlement date:
//!
//! $$\text{NPV} = \sum_{i : t_i \ge t_\text{settle}} c_i \cdot d(t_\text{settle}, t_i)$$

use ql_cashflows::npv_curve;
use ql_core::errors::Result;
use ql_core::{DiscountFactor, Handle, Real};
use ql_instruments::{PricingResult, ZeroCouponBond};
use ql_termstructures::YieldTermStructure;
use ql_time::Date;

/// Discount factor of `curve` between two dates.
///
/// # Errors
/// `InvalidParameter` if `to` precedes `from`.
pub fn discount_factor(
    curve: &dyn YieldTermStructure,
    from: Date,
    to: Date,
) -> Result<DiscountFactor> {
    curve.discount_between(from, to)
}

/// NPV of a zero-coupon bond as of its settlement date.
///
/// A redemption paid before settlement has occurred and is worth nothing.
///
/// # Errors
/// Calendar errors while deriving the settlement or payment date, and
/// `NumericalInstability` if the discounted value is not finite.
pub fn zero_coupon_bond_npv(bond: &ZeroCouponBond, curve: &dyn YieldTermStructure) -> Result<Real> {
    let settlement = bond.settlement_date()?;
    npv_curve(&bond.cashflows()?, curve, settlement)
}

/// Clean price per 100 of face amount.
///
/// A zero-coupon bond accrues no coupon, so this is the NPV rescaled.
///
/// # Errors
/// As [`zero_coupon_bond_npv`].
pub fn clean_price(bond: &ZeroCouponBond, curve: &dyn YieldTermStructure) -> Result<Real> {
    Ok(zero_coupon_bond_npv(bond, curve)? * 100.0 / bond.face_amount())
}

/// Discounting engine bound to a shared discount curve.
#[derive(Debug, Clone)]
pub struct DiscountingBondEngine {
    discount_curve: Handle<dyn YieldTermStructure>,
}

impl DiscountingBondEngine {
    /// Create a new engine with the given discount curve.
    pub fn new(discount_curve: Handle<dyn YieldTermStructure>) -> Self {
        Self { discount_curve }
    }

    /// The discount curve.
    pub fn discount_curve(&self) -> &Handle<dyn YieldTermStructure> {
        &self.discount_curve
    }

    /// Price `bond` on the engine's curve.
    ///
    /// # Errors
    /// `NullValue` for an empty curve handle, otherwise as
    /// [`zero_coupon_bond_npv`].
    pub fn calculate(&self, bond: &ZeroCouponBond) -> Result<PricingResult> {
        let npv = zero_coupon_bond_npv(bond, self.discount_curve.try_get()?)?;
        PricingResult::from_value(npv).checked()
    }
}
