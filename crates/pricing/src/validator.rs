//! Structural validation of incoming invoices.

use tariff_core::Problem;
use tariff_invoicing::Invoice;

/// Checks the structural invariants of an invoice before it is priced.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    /// Collect every structural problem, in detection order.
    ///
    /// An empty result means the invoice is valid. Checks do not short-circuit,
    /// except that an absent invoice reports only itself and an invoice with
    /// no items skips the per-item checks.
    pub fn validate(invoice: Option<&Invoice>) -> Vec<Problem> {
        let Some(invoice) = invoice else {
            return vec![Problem::InvoiceMissing];
        };

        let mut problems = Vec::new();
        if invoice.invoice_id.is_empty() {
            problems.push(Problem::MissingInvoiceId);
        }
        if invoice.customer_id.is_empty() {
            problems.push(Problem::MissingCustomerId);
        }
        if invoice.items.is_empty() {
            problems.push(Problem::NoItems);
            return problems;
        }

        for item in &invoice.items {
            if item.sku.is_empty() {
                problems.push(Problem::MissingSku);
            }
            if item.qty <= 0 {
                problems.push(Problem::InvalidQty {
                    sku: item.sku.clone(),
                });
            }
            if item.unit_price < 0.0 {
                problems.push(Problem::InvalidPrice {
                    sku: item.sku.clone(),
                });
            }
            if !item.category.is_known() {
                problems.push(Problem::UnknownCategory {
                    sku: item.sku.clone(),
                });
            }
        }

        problems
    }
}
