//! Invoicing input model.
//!
//! This crate describes the invoices handed to the pricing engine: identifiers,
//! destination country, membership, coupon and line items. It is plain data
//! (no IO, no pricing rules); structural checks live in the pricing validator.

pub mod invoice;

pub use invoice::{Category, Invoice, LineItem};
