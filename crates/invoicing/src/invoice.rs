use serde::{Deserialize, Deserializer, Serialize};

use tariff_core::{CustomerId, InvoiceId, ValueObject};

/// Product category of a line item.
///
/// Any category string outside the known set is kept as `Unrecognized` so that
/// validation can report it against the offending sku instead of failing to
/// decode the whole invoice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Book,
    Food,
    Electronics,
    Other,
    Unrecognized(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Book => "book",
            Category::Food => "food",
            Category::Electronics => "electronics",
            Category::Other => "other",
            Category::Unrecognized(raw) => raw,
        }
    }

    /// Whether this is one of the allowed categories.
    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Unrecognized(_))
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        match value {
            "book" => Category::Book,
            "food" => Category::Food,
            "electronics" => Category::Electronics,
            "other" => Category::Other,
            raw => Category::Unrecognized(raw.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::from(value.as_str())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode an explicit `null` the same way as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One purchased product line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sku: String,
    pub category: Category,
    /// Price per unit, currency-agnostic.
    pub unit_price: f64,
    pub qty: i64,
    #[serde(default)]
    pub fragile: bool,
}

impl LineItem {
    pub fn new(sku: impl Into<String>, category: impl Into<Category>, unit_price: f64, qty: i64) -> Self {
        Self {
            sku: sku.into(),
            category: category.into(),
            unit_price,
            qty,
            fragile: false,
        }
    }

    /// Mark the line as fragile (subject to the per-unit fragile surcharge).
    pub fn fragile(mut self) -> Self {
        self.fragile = true;
        self
    }

    /// `unit_price × qty`.
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.qty as f64
    }
}

impl ValueObject for LineItem {}

/// One pricing request.
///
/// Identifiers and items missing from a JSON payload, or sent as `null`,
/// decode as empty; the validator reports them rather than the decoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(default, deserialize_with = "null_as_default")]
    pub invoice_id: InvoiceId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_id: CustomerId,
    /// Destination country code (e.g. "US", "JP").
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default)]
    pub membership: Option<String>,
    #[serde(default)]
    pub coupon: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<LineItem>,
}

impl Invoice {
    pub fn new(
        invoice_id: impl Into<InvoiceId>,
        customer_id: impl Into<CustomerId>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            invoice_id: invoice_id.into(),
            customer_id: customer_id.into(),
            country: country.into(),
            membership: None,
            coupon: None,
            items: Vec::new(),
        }
    }

    pub fn with_membership(mut self, tier: impl Into<String>) -> Self {
        self.membership = Some(tier.into());
        self
    }

    pub fn with_coupon(mut self, code: impl Into<String>) -> Self {
        self.coupon = Some(code.into());
        self
    }

    pub fn with_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = LineItem>) -> Self {
        self.items.extend(items);
        self
    }

    /// The coupon code with surrounding whitespace removed.
    ///
    /// Returns `None` when no coupon was given or it is blank.
    pub fn coupon_code(&self) -> Option<&str> {
        self.coupon
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}

impl ValueObject for Invoice {}
