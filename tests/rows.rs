// tests/rows.rs
use serde_json::json;

use satsite::catalog::{Countries, Service};
use satsite::render::{Layout, RenderCtx};
use satsite::rows::build_rows;

fn svc(v: serde_json::Value) -> Service {
    serde_json::from_value(v).unwrap()
}

fn countries() -> Countries {
    Countries::from_pairs([("US", "United States")])
}

#[test]
fn rows_come_out_in_schema_order_for_the_category() {
    let c = countries();
    let ctx = RenderCtx { countries: &c, region: None, layout: Layout::Wide };
    let strike = svc(json!({
        "name": "Strike",
        "category": "buy",
        "fees": "1% flat",
        "custodial": true,
        "founded": 2019
    }));
    let rows = build_rows(&[&strike], Some("buy"), &ctx);
    let keys: Vec<&str> = rows.iter().map(|r| r.key).collect();
    assert_eq!(keys, vec!["fees", "availability", "custodial", "founded"]);
}

#[test]
fn category_whitelist_hides_fields_the_category_never_shows() {
    let c = countries();
    let ctx = RenderCtx { countries: &c, region: None, layout: Layout::Wide };
    // Wallets ("store") don't show fees or payment methods.
    let wallet = svc(json!({
        "name": "Blue Wallet",
        "category": "store",
        "fees": "free",
        "payment_methods": ["Card"],
        "open_source": true
    }));
    let rows = build_rows(&[&wallet], Some("store"), &ctx);
    let keys: Vec<&str> = rows.iter().map(|r| r.key).collect();
    assert!(!keys.contains(&"fees"));
    assert!(!keys.contains(&"payment_methods"));
    assert!(keys.contains(&"open_source"));
}

#[test]
fn row_survives_when_only_one_service_has_data() {
    let c = countries();
    let ctx = RenderCtx { countries: &c, region: None, layout: Layout::Narrow };
    let with_kyc = svc(json!({"name": "A", "category": "buy", "kyc": true}));
    let without = svc(json!({"name": "B", "category": "buy"}));
    let rows = build_rows(&[&with_kyc, &without], Some("buy"), &ctx);

    let kyc = rows.iter().find(|r| r.key == "kyc").expect("kyc row must survive");
    assert_eq!(kyc.cells.len(), 2);
    assert_eq!(kyc.cells[0], "Yes");
    assert_eq!(kyc.cells[1], "", "missing data renders as a blank cell");
}

#[test]
fn row_is_dropped_when_no_service_has_data() {
    let c = countries();
    let ctx = RenderCtx { countries: &c, region: None, layout: Layout::Narrow };
    let a = svc(json!({"name": "A", "category": "buy"}));
    let b = svc(json!({"name": "B", "category": "buy"}));
    let rows = build_rows(&[&a, &b], Some("buy"), &ctx);
    assert!(rows.iter().all(|r| r.key != "fees"));
    assert!(rows.iter().all(|r| r.key != "founder"));
}

#[test]
fn availability_row_always_survives() {
    let c = countries();
    let ctx = RenderCtx { countries: &c, region: None, layout: Layout::Narrow };
    let a = svc(json!({"name": "A", "category": "buy"}));
    let b = svc(json!({"name": "B", "category": "buy"}));
    let rows = build_rows(&[&a, &b], Some("buy"), &ctx);
    let avail = rows.iter().find(|r| r.key == "availability").unwrap();
    assert!(avail.cells.iter().all(|cell| cell == "Availability unknown"));
}

#[test]
fn stacked_labels_carry_main_and_sub_lines() {
    let c = countries();
    let ctx = RenderCtx { countries: &c, region: None, layout: Layout::Wide };
    let strike = svc(json!({"name": "Strike", "category": "buy", "fees": "1%"}));
    let rows = build_rows(&[&strike], Some("buy"), &ctx);
    let fees = rows.iter().find(|r| r.key == "fees").unwrap();
    assert!(fees.label.contains("Fees"));
    assert!(fees.label.contains(r#"<span class="label-sub">Processing fees</span>"#));
}

#[test]
fn unknown_category_shows_all_fields_with_data() {
    let c = countries();
    let ctx = RenderCtx { countries: &c, region: None, layout: Layout::Wide };
    let odd = svc(json!({
        "name": "Oddball",
        "category": "mining",
        "open_source": true,
        "lightning": false
    }));
    let rows = build_rows(&[&odd], Some("mining"), &ctx);
    let keys: Vec<&str> = rows.iter().map(|r| r.key).collect();
    // Fallback is the full schema, so both flags show even though no
    // whitelist lists them together with everything else.
    assert!(keys.contains(&"open_source"));
    assert!(keys.contains(&"lightning"));
}
