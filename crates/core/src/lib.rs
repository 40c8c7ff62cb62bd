//! `tariff-core`: shared building blocks for the pricing workspace.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{EngineResult, PricingError, Problem, ValidationError};
pub use id::{CustomerId, InvoiceId};
pub use value_object::ValueObject;
