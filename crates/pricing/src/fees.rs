//! Subtotal, fragile surcharge and shipping.

use tariff_invoicing::LineItem;

use crate::config::RateTable;

/// Computes the pre-discount figures of an invoice.
#[derive(Debug, Clone, Copy)]
pub struct FeeCalculator<'a> {
    rates: &'a RateTable,
}

impl<'a> FeeCalculator<'a> {
    pub fn new(rates: &'a RateTable) -> Self {
        Self { rates }
    }

    /// Sum of `unit_price × qty`, accumulated in item order.
    pub fn subtotal(&self, items: &[LineItem]) -> f64 {
        items.iter().map(LineItem::line_total).fold(0.0, |acc, line| acc + line)
    }

    /// Per-unit surcharge over fragile lines; zero when none are fragile.
    pub fn fragile_fee(&self, items: &[LineItem]) -> f64 {
        items
            .iter()
            .filter(|item| item.fragile)
            .map(|item| self.rates.fragile_fee_per_unit * item.qty as f64)
            .fold(0.0, |acc, fee| acc + fee)
    }

    /// Fee of the first tier whose threshold exceeds the subtotal.
    ///
    /// Tiers are not cumulative. A subtotal at or above every threshold ships
    /// free.
    pub fn shipping_fee(&self, country: &str, subtotal: f64) -> f64 {
        self.rates
            .shipping_tiers(country)
            .iter()
            .find(|tier| subtotal < tier.threshold)
            .map_or(0.0, |tier| tier.fee)
    }
}
