//! Output of a successful pricing run.

use serde::{Serialize, Serializer};

use tariff_core::ValueObject;

/// Advisory emitted while pricing. Never blocks the computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Warning {
    /// A non-blank coupon code is not in the coupon table.
    UnknownCoupon,
    /// A non-member spent past the upgrade hint threshold.
    ConsiderMembershipUpgrade,
}

impl Warning {
    pub fn message(&self) -> &'static str {
        match self {
            Warning::UnknownCoupon => "Unknown coupon",
            Warning::ConsiderMembershipUpgrade => "Consider membership upgrade",
        }
    }
}

impl core::fmt::Display for Warning {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Warning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Every intermediate figure of a pricing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub subtotal: f64,
    pub fragile_fee: f64,
    pub shipping: f64,
    pub discount: f64,
    pub tax: f64,
    pub total: f64,
}

impl ValueObject for PriceBreakdown {}

/// Final payable total plus the warnings raised, in detection order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingResult {
    pub total: f64,
    pub warnings: Vec<Warning>,
    pub breakdown: PriceBreakdown,
}

impl PricingResult {
    pub fn warning_messages(&self) -> Vec<&'static str> {
        self.warnings.iter().map(Warning::message).collect()
    }

    pub fn has_warning(&self, warning: Warning) -> bool {
        self.warnings.contains(&warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_render_as_messages() {
        assert_eq!(Warning::UnknownCoupon.to_string(), "Unknown coupon");
        assert_eq!(
            Warning::ConsiderMembershipUpgrade.to_string(),
            "Consider membership upgrade"
        );
    }

    #[test]
    fn result_serializes_warnings_as_strings() {
        let result = PricingResult {
            total: 278.0,
            warnings: vec![Warning::UnknownCoupon, Warning::UnknownCoupon],
            breakdown: PriceBreakdown {
                total: 278.0,
                ..PriceBreakdown::default()
            },
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["total"], 278.0);
        assert_eq!(
            json["warnings"],
            serde_json::json!(["Unknown coupon", "Unknown coupon"])
        );
        assert_eq!(json["breakdown"]["total"], 278.0);
    }
}
