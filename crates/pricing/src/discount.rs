//! Membership, bulk and coupon discounts.

use tariff_invoicing::Invoice;

use crate::config::RateTable;
use crate::result::Warning;

/// Computes the total discount granted on an invoice.
#[derive(Debug, Clone, Copy)]
pub struct DiscountEngine<'a> {
    rates: &'a RateTable,
}

impl<'a> DiscountEngine<'a> {
    pub fn new(rates: &'a RateTable) -> Self {
        Self { rates }
    }

    /// Total discount for `invoice` given its `subtotal`.
    ///
    /// A listed membership tier earns its percentage; otherwise a subtotal
    /// above the bulk threshold earns the flat bulk amount. The two never
    /// stack. A known coupon adds its percentage on top of either; an unknown
    /// one pushes [`Warning::UnknownCoupon`] and contributes nothing.
    ///
    /// The result is not capped at the subtotal.
    pub fn discount(&self, invoice: &Invoice, subtotal: f64, warnings: &mut Vec<Warning>) -> f64 {
        let mut discount = 0.0;

        match self.rates.membership_rate(invoice.membership.as_deref()) {
            Some(rate) => discount += subtotal * rate,
            None if subtotal > self.rates.bulk_threshold => discount += self.rates.bulk_discount,
            None => {}
        }

        if let Some(code) = invoice.coupon_code() {
            match self.rates.coupon_rate(code) {
                Some(rate) => discount += subtotal * rate,
                None => {
                    tracing::debug!(coupon = code, "coupon not recognized");
                    warnings.push(Warning::UnknownCoupon);
                }
            }
        }

        discount
    }
}
