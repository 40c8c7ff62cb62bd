//! Invoice pricing rules engine.
//!
//! Prices an [`Invoice`](tariff_invoicing::Invoice) in four ordered stages:
//! structural validation, fees (subtotal, fragile surcharge, shipping),
//! discounts (membership or bulk, plus coupon) and tax. Each stage is pure
//! and reads the shared, immutable [`RateTable`]; the only per-call state is
//! the warnings collected along the way.
//!
//! ```ignore
//! let engine = PricingEngine::new(RateTable::default());
//! let result = engine.compute_total(&invoice)?;
//! println!("{} ({:?})", result.total, result.warning_messages());
//! ```

pub mod config;
pub mod discount;
pub mod engine;
pub mod fees;
pub mod result;
pub mod tax;
pub mod validator;

pub use config::{ConfigError, CountryTable, RateTable, ShippingTier};
pub use discount::DiscountEngine;
pub use engine::PricingEngine;
pub use fees::FeeCalculator;
pub use result::{PriceBreakdown, PricingResult, Warning};
pub use tax::TaxCalculator;
pub use validator::Validator;
