//! Country tax stage.

use crate::config::RateTable;

/// Applies the destination country's flat tax rate.
#[derive(Debug, Clone, Copy)]
pub struct TaxCalculator<'a> {
    rates: &'a RateTable,
}

impl<'a> TaxCalculator<'a> {
    pub fn new(rates: &'a RateTable) -> Self {
        Self { rates }
    }

    /// Tax on `taxable_amount`, floored at zero before the rate is applied.
    pub fn tax(&self, country: &str, taxable_amount: f64) -> f64 {
        taxable_amount.max(0.0) * self.rates.tax_rate(country)
    }
}
