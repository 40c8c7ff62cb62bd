//! Domain error model.

use thiserror::Error;

/// Result type used across the pricing pipeline.
pub type EngineResult<T> = Result<T, PricingError>;

/// A single structural problem found while validating an invoice.
///
/// The `Display` output is the human-readable message surfaced to callers;
/// problems are reported in detection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// No invoice was supplied at all.
    InvoiceMissing,
    MissingInvoiceId,
    MissingCustomerId,
    /// The invoice has no line items (per-item checks are skipped).
    NoItems,
    MissingSku,
    InvalidQty { sku: String },
    InvalidPrice { sku: String },
    UnknownCategory { sku: String },
}

impl core::fmt::Display for Problem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Problem::InvoiceMissing => f.write_str("Invoice is missing"),
            Problem::MissingInvoiceId => f.write_str("Missing invoice_id"),
            Problem::MissingCustomerId => f.write_str("Missing customer_id"),
            Problem::NoItems => f.write_str("Invoice must contain items"),
            Problem::MissingSku => f.write_str("Item sku is missing"),
            Problem::InvalidQty { sku } => write!(f, "Invalid qty for {sku}"),
            Problem::InvalidPrice { sku } => write!(f, "Invalid price for {sku}"),
            Problem::UnknownCategory { sku } => write!(f, "Unknown category for {sku}"),
        }
    }
}

impl serde::Serialize for Problem {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Structural rejection of an invoice.
///
/// Holds every problem detected, in order. The message is the problems joined
/// with `"; "`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", join_problems(.problems))]
pub struct ValidationError {
    pub problems: Vec<Problem>,
}

impl ValidationError {
    pub fn new(problems: Vec<Problem>) -> Self {
        Self { problems }
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }
}

fn join_problems(problems: &[Problem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Pipeline-level error.
///
/// Validation is the only way pricing can fail: unknown countries, coupons and
/// membership tiers resolve to defaults or warnings instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl PricingError {
    pub fn validation(problems: Vec<Problem>) -> Self {
        Self::Validation(ValidationError::new(problems))
    }

    /// Problems carried by this error.
    pub fn problems(&self) -> &[Problem] {
        match self {
            PricingError::Validation(e) => e.problems(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problems_render_their_messages() {
        assert_eq!(Problem::InvoiceMissing.to_string(), "Invoice is missing");
        assert_eq!(Problem::NoItems.to_string(), "Invoice must contain items");
        assert_eq!(
            Problem::UnknownCategory { sku: "A-1".into() }.to_string(),
            "Unknown category for A-1"
        );
    }

    #[test]
    fn validation_error_joins_in_detection_order() {
        let err = PricingError::validation(vec![
            Problem::MissingInvoiceId,
            Problem::InvalidQty { sku: "X".into() },
        ]);
        assert_eq!(err.to_string(), "Missing invoice_id; Invalid qty for X");
        assert_eq!(err.problems().len(), 2);
    }

    #[test]
    fn problems_serialize_as_strings() {
        let json = serde_json::to_string(&vec![Problem::MissingSku]).unwrap();
        assert_eq!(json, r#"["Item sku is missing"]"#);
    }
}
