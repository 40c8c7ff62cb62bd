//! Rate tables used by every pricing stage.
//!
//! A [`RateTable`] is built once (from the built-in defaults, a JSON rates
//! file, or the `with_*` builders) and never mutated afterwards. Engines share
//! it behind an `Arc`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tariff_core::ValueObject;

/// Error raised while loading a rates file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read rates file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid rates definition: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A shipping tier: `fee` applies when the subtotal is strictly below `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShippingTier {
    pub threshold: f64,
    pub fee: f64,
}

impl ShippingTier {
    pub const fn new(threshold: f64, fee: f64) -> Self {
        Self { threshold, fee }
    }
}

impl ValueObject for ShippingTier {}

/// Per-country values with an explicit fallback for unknown countries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryTable<T> {
    pub default: T,
    #[serde(default)]
    pub by_country: BTreeMap<String, T>,
}

impl<T> CountryTable<T> {
    pub fn new(default: T) -> Self {
        Self {
            default,
            by_country: BTreeMap::new(),
        }
    }

    pub fn with(mut self, country: impl Into<String>, value: T) -> Self {
        self.by_country.insert(country.into(), value);
        self
    }

    /// Value configured for exactly this country, if any.
    pub fn get(&self, country: &str) -> Option<&T> {
        self.by_country.get(country)
    }

    /// Value for this country, falling back to the default entry.
    pub fn resolve(&self, country: &str) -> &T {
        self.get(country).unwrap_or(&self.default)
    }
}

/// Immutable pricing configuration.
///
/// Every field has a built-in default; a rates file only needs to list the
/// tables it overrides. A table that is overridden must be complete (a
/// country table must carry its own `default`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateTable {
    /// Ordered shipping tiers per country.
    pub shipping: CountryTable<Vec<ShippingTier>>,
    /// Flat tax rate per country (0.08 = 8%).
    pub tax: CountryTable<f64>,
    /// Discount rate per membership tier.
    pub membership_rates: BTreeMap<String, f64>,
    /// Discount rate per coupon code.
    pub coupon_rates: BTreeMap<String, f64>,
    pub fragile_fee_per_unit: f64,
    /// Non-member subtotals strictly above this get `bulk_discount`.
    pub bulk_threshold: f64,
    pub bulk_discount: f64,
    /// Non-member subtotals strictly above this get an upgrade hint.
    pub upgrade_hint_threshold: f64,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            shipping: CountryTable::new(vec![ShippingTier::new(200.0, 25.0)])
                .with("TH", vec![ShippingTier::new(500.0, 60.0)])
                .with("JP", vec![ShippingTier::new(4000.0, 600.0)])
                .with(
                    "US",
                    vec![ShippingTier::new(100.0, 15.0), ShippingTier::new(300.0, 8.0)],
                ),
            tax: CountryTable::new(0.05)
                .with("TH", 0.07)
                .with("JP", 0.10)
                .with("US", 0.08),
            membership_rates: BTreeMap::from([
                ("gold".to_string(), 0.03),
                ("platinum".to_string(), 0.05),
            ]),
            coupon_rates: BTreeMap::from([
                ("WELCOME10".to_string(), 0.10),
                ("VIP20".to_string(), 0.20),
                ("STUDENT5".to_string(), 0.05),
            ]),
            fragile_fee_per_unit: 5.0,
            bulk_threshold: 3000.0,
            bulk_discount: 20.0,
            upgrade_hint_threshold: 10000.0,
        }
    }
}

impl RateTable {
    /// Parse a JSON rates definition; omitted fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn shipping_tiers(&self, country: &str) -> &[ShippingTier] {
        self.shipping.resolve(country)
    }

    pub fn tax_rate(&self, country: &str) -> f64 {
        *self.tax.resolve(country)
    }

    /// Discount rate of a membership tier, `None` when the tier is not listed.
    pub fn membership_rate(&self, tier: Option<&str>) -> Option<f64> {
        tier.and_then(|t| self.membership_rates.get(t)).copied()
    }

    /// Whether the tier is a key of the membership table, regardless of its rate.
    pub fn is_member(&self, tier: Option<&str>) -> bool {
        self.membership_rate(tier).is_some()
    }

    pub fn coupon_rate(&self, code: &str) -> Option<f64> {
        self.coupon_rates.get(code).copied()
    }

    pub fn with_shipping(mut self, country: impl Into<String>, tiers: Vec<ShippingTier>) -> Self {
        self.shipping.by_country.insert(country.into(), tiers);
        self
    }

    pub fn with_default_shipping(mut self, tiers: Vec<ShippingTier>) -> Self {
        self.shipping.default = tiers;
        self
    }

    pub fn with_tax_rate(mut self, country: impl Into<String>, rate: f64) -> Self {
        self.tax.by_country.insert(country.into(), rate);
        self
    }

    pub fn with_default_tax_rate(mut self, rate: f64) -> Self {
        self.tax.default = rate;
        self
    }

    pub fn with_membership_rate(mut self, tier: impl Into<String>, rate: f64) -> Self {
        self.membership_rates.insert(tier.into(), rate);
        self
    }

    pub fn with_coupon(mut self, code: impl Into<String>, rate: f64) -> Self {
        self.coupon_rates.insert(code.into(), rate);
        self
    }

    pub fn with_fragile_fee_per_unit(mut self, fee: f64) -> Self {
        self.fragile_fee_per_unit = fee;
        self
    }

    pub fn with_bulk_discount(mut self, threshold: f64, amount: f64) -> Self {
        self.bulk_threshold = threshold;
        self.bulk_discount = amount;
        self
    }

    pub fn with_upgrade_hint_threshold(mut self, threshold: f64) -> Self {
        self.upgrade_hint_threshold = threshold;
        self
    }
}
