//! Row-to-record assembly.

use catalog_ingest::RawProduct;
use catalog_model::UnitType;
use catalog_transform::{build_product, build_products};

fn raw_row() -> RawProduct {
    RawProduct {
        name: "Arroz Integral 5kg".to_string(),
        barcode: Some("7891234567895.0".to_string()),
        promo_price: Some("19,90".to_string()),
        price: Some("24,90".to_string()),
        active: Some("true".to_string()),
        internal_code: Some("4321".to_string()),
        stock: Some("12".to_string()),
        promo_period: Some("31-MAR-24".to_string()),
    }
}

#[test]
fn assembles_every_field_from_its_column() {
    let product = build_product(&raw_row());
    assert_eq!(product.internal_code.as_deref(), Some("4321"));
    assert_eq!(product.name, "Arroz Integral 5kg");
    assert_eq!(product.unit_type, UnitType::Uni);
    assert_eq!(product.price, Some(24.9));
    assert!(product.visible);
    assert_eq!(product.stock, Some(12.0));
    assert_eq!(product.barcodes, vec!["7891234567895"]);
    assert_eq!(product.promo_price, Some(19.9));
    assert_eq!(product.weight, Some(5.0));
    assert_eq!(product.length, None);
    assert_eq!(product.promo_start_at, None);
    assert_eq!(product.promo_end_at.as_deref(), Some("2024-03-31T00:00:00"));
}

#[test]
fn malformed_cells_degrade_to_null_without_erroring() {
    let raw = RawProduct {
        name: "Queijo kg".to_string(),
        barcode: Some("999".to_string()),
        promo_price: Some("0".to_string()),
        price: Some("abc".to_string()),
        active: None,
        internal_code: None,
        stock: Some("??".to_string()),
        promo_period: Some("31-XYZ-24".to_string()),
    };
    let product = build_product(&raw);
    assert_eq!(product.unit_type, UnitType::Kg);
    assert!(product.barcodes.is_empty());
    assert_eq!(product.promo_price, None);
    assert_eq!(product.price, None);
    assert!(!product.visible);
    assert_eq!(product.stock, None);
    assert_eq!(product.promo_end_at, None);
}

#[test]
fn preserves_row_order_and_is_deterministic() {
    let mut second = raw_row();
    second.name = "Detergente".to_string();
    let rows = vec![raw_row(), second];

    let first_pass = build_products(&rows);
    let second_pass = build_products(&rows);

    assert_eq!(first_pass.len(), 2);
    assert_eq!(first_pass[0].name, "Arroz Integral 5kg");
    assert_eq!(first_pass[1].name, "Detergente");
    // Idempotent: same input, byte-identical output.
    assert_eq!(
        serde_json::to_string(&first_pass).expect("serialize"),
        serde_json::to_string(&second_pass).expect("serialize")
    );
}
