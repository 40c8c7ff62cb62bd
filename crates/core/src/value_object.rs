//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. Line
/// items, invoices and price breakdowns are all values: two line items with
/// the same sku, price and quantity price identically.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct ShippingTier {
///     threshold: f64,
///     fee: f64,
/// }
///
/// impl ValueObject for ShippingTier {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
