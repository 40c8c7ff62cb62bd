//! Black-box pricing scenarios driven through the public API and JSON payloads.

use tariff_core::{PricingError, Problem};
use tariff_invoicing::{Invoice, LineItem};
use tariff_pricing::{PricingEngine, RateTable, ShippingTier, Warning};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn decode(json: &str) -> Invoice {
    serde_json::from_str(json).expect("invoice json")
}

#[test]
fn us_order_under_free_shipping_threshold() {
    let invoice = decode(
        r#"{
            "invoice_id": "INV-1001",
            "customer_id": "C-42",
            "country": "US",
            "membership": "none",
            "coupon": null,
            "items": [
                { "sku": "DESK-01", "category": "other", "unit_price": 250.0, "qty": 1 }
            ]
        }"#,
    );

    let result = PricingEngine::default().compute_total(&invoice).unwrap();

    assert_close(result.total, 278.0);
    assert!(result.warnings.is_empty());
}

#[test]
fn gold_member_with_welcome_coupon() {
    let invoice = Invoice::new("INV-1002", "C-7", "TH")
        .with_membership("gold")
        .with_coupon("WELCOME10")
        .with_item(LineItem::new("BOOK-9", "book", 100.0, 10));

    let result = PricingEngine::default().compute_total(&invoice).unwrap();

    // subtotal 1000, no TH shipping (>= 500), discount 130, tax 870 * 0.07
    assert_close(result.breakdown.discount, 130.0);
    assert_eq!(result.breakdown.shipping, 0.0);
    assert_close(result.total, 1000.0 - 130.0 + 870.0 * 0.07);
}

#[test]
fn bogus_coupon_only_warns() {
    let invoice = Invoice::new("INV-1003", "C-8", "US")
        .with_coupon("BOGUS")
        .with_item(LineItem::new("PEN", "other", 2.0, 10));

    let result = PricingEngine::default().compute_total(&invoice).unwrap();

    assert_eq!(result.warning_messages(), vec!["Unknown coupon"]);
    assert_eq!(result.breakdown.discount, 0.0);
}

#[test]
fn big_spender_without_listed_membership_gets_hint_and_bulk_discount() {
    let invoice = Invoice::new("INV-1004", "C-9", "JP")
        .with_membership("silver")
        .with_item(LineItem::new("RACK", "electronics", 6000.0, 2));

    let result = PricingEngine::default().compute_total(&invoice).unwrap();

    assert!(result.has_warning(Warning::ConsiderMembershipUpgrade));
    assert_eq!(result.breakdown.discount, 20.0);
}

#[test]
fn rejected_invoice_reports_every_problem() {
    let invoice = decode(
        r#"{
            "customer_id": "C-10",
            "country": "US",
            "items": [
                { "sku": "ABC", "category": "book", "unit_price": 5.0, "qty": 0 }
            ]
        }"#,
    );

    let err = PricingEngine::default().compute_total(&invoice).unwrap_err();

    assert_eq!(err.to_string(), "Missing invoice_id; Invalid qty for ABC");
    match err {
        PricingError::Validation(e) => assert_eq!(
            e.problems,
            vec![Problem::MissingInvoiceId, Problem::InvalidQty { sku: "ABC".into() }]
        ),
    }
}

#[test]
fn unknown_category_is_reported_not_decoded_away() {
    let invoice = decode(
        r#"{
            "invoice_id": "INV-1005",
            "customer_id": "C-11",
            "country": "US",
            "items": [
                { "sku": "TOY-1", "category": "toys", "unit_price": 5.0, "qty": 1, "fragile": true }
            ]
        }"#,
    );

    let err = PricingEngine::default().compute_total(&invoice).unwrap_err();

    assert_eq!(err.to_string(), "Unknown category for TOY-1");
}

#[test]
fn custom_rates_file_drives_pricing() {
    let rates = RateTable::from_json_str(
        r#"{
            "shipping": { "default": [ { "threshold": 50, "fee": 4.5 } ] },
            "tax": { "default": 0.0, "by_country": { "DE": 0.19 } },
            "fragile_fee_per_unit": 1.0
        }"#,
    )
    .unwrap();
    let engine = PricingEngine::new(rates);
    let invoice = Invoice::new("INV-1006", "C-12", "DE")
        .with_item(LineItem::new("CUP", "food", 10.0, 3).fragile());

    let result = engine.compute_total(&invoice).unwrap();

    assert_eq!(result.breakdown.shipping, 4.5);
    assert_eq!(result.breakdown.fragile_fee, 3.0);
    assert_close(result.total, 30.0 + 4.5 + 3.0 + 30.0 * 0.19);
}

#[test]
fn builder_overrides_replace_defaults() {
    let rates = RateTable::default()
        .with_shipping("US", vec![ShippingTier::new(1000.0, 12.0)])
        .with_tax_rate("US", 0.0)
        .with_bulk_discount(100.0, 5.0)
        .with_upgrade_hint_threshold(150.0);
    let invoice = Invoice::new("INV-1007", "C-13", "US")
        .with_item(LineItem::new("LAMP", "other", 200.0, 1));

    let result = PricingEngine::new(rates).compute_total(&invoice).unwrap();

    assert_close(result.total, 200.0 + 12.0 - 5.0);
    assert_eq!(result.warnings, vec![Warning::ConsiderMembershipUpgrade]);
}

#[test]
fn null_identifiers_and_items_are_rejected_by_validation() {
    let engine = PricingEngine::default();

    let invoice = decode(
        r#"{
            "invoice_id": null,
            "customer_id": "C-14",
            "country": "US",
            "items": [
                { "sku": "PEN", "category": "other", "unit_price": 2.0, "qty": 1 }
            ]
        }"#,
    );
    let err = engine.compute_total(&invoice).unwrap_err();
    assert_eq!(err.to_string(), "Missing invoice_id");

    let invoice = decode(
        r#"{ "invoice_id": "INV-1008", "customer_id": "C-14", "country": "US", "items": null }"#,
    );
    let err = engine.compute_total(&invoice).unwrap_err();
    assert_eq!(err.to_string(), "Invoice must contain items");
}
