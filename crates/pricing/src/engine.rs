//! The compute-total pipeline.

use std::sync::Arc;

use tariff_core::{EngineResult, PricingError, Problem};
use tariff_invoicing::Invoice;

use crate::config::RateTable;
use crate::discount::DiscountEngine;
use crate::fees::FeeCalculator;
use crate::result::{PriceBreakdown, PricingResult, Warning};
use crate::tax::TaxCalculator;
use crate::validator::Validator;

/// Prices invoices against a fixed [`RateTable`].
///
/// The engine holds no per-request state; clone it or share it across threads
/// freely. Every call allocates its own warnings.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    rates: Arc<RateTable>,
}

impl PricingEngine {
    pub fn new(rates: RateTable) -> Self {
        Self {
            rates: Arc::new(rates),
        }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Structural problems of `invoice`, without pricing it.
    pub fn validate(&self, invoice: Option<&Invoice>) -> Vec<Problem> {
        Validator::validate(invoice)
    }

    /// Compute the payable total of a valid invoice.
    ///
    /// Fails with [`PricingError::Validation`] carrying every structural
    /// problem when the invoice is malformed; no partial result is produced.
    pub fn compute_total(&self, invoice: &Invoice) -> EngineResult<PricingResult> {
        self.compute(Some(invoice))
    }

    /// Like [`compute_total`](Self::compute_total), for hosts that may have
    /// received no invoice at all.
    pub fn compute(&self, invoice: Option<&Invoice>) -> EngineResult<PricingResult> {
        let problems = Validator::validate(invoice);
        match invoice {
            Some(invoice) if problems.is_empty() => Ok(self.price(invoice)),
            _ => {
                tracing::warn!(
                    invoice_id = invoice.map(|i| i.invoice_id.as_str()),
                    problems = problems.len(),
                    "invoice rejected"
                );
                Err(PricingError::validation(problems))
            }
        }
    }

    fn price(&self, invoice: &Invoice) -> PricingResult {
        let rates = self.rates.as_ref();
        let fees = FeeCalculator::new(rates);
        let mut warnings = Vec::new();

        let subtotal = fees.subtotal(&invoice.items);
        let fragile_fee = fees.fragile_fee(&invoice.items);
        let shipping = fees.shipping_fee(&invoice.country, subtotal);
        tracing::debug!(
            invoice_id = %invoice.invoice_id,
            subtotal,
            fragile_fee,
            shipping,
            "fees computed"
        );

        let discount = DiscountEngine::new(rates).discount(invoice, subtotal, &mut warnings);
        let tax = TaxCalculator::new(rates).tax(&invoice.country, subtotal - discount);
        tracing::debug!(invoice_id = %invoice.invoice_id, discount, tax, "discount and tax computed");

        let total = (subtotal + shipping + fragile_fee + tax - discount).max(0.0);

        // Independent of which discount branch fired.
        if subtotal > rates.upgrade_hint_threshold && !rates.is_member(invoice.membership.as_deref())
        {
            warnings.push(Warning::ConsiderMembershipUpgrade);
        }

        tracing::debug!(
            invoice_id = %invoice.invoice_id,
            total,
            warnings = warnings.len(),
            "invoice priced"
        );

        PricingResult {
            total,
            warnings,
            breakdown: PriceBreakdown {
                subtotal,
                fragile_fee,
                shipping,
                discount,
                tax,
                total,
            },
        }
    }
}
