//! Batch file output.

use catalog_model::{BatchPayload, CanonicalProduct, ProductBatch, UnitType};
use catalog_output::write_batches;

fn batch(sequence: usize) -> ProductBatch {
    ProductBatch {
        sequence,
        payload: BatchPayload {
            products: vec![CanonicalProduct {
                internal_code: Some("1".to_string()),
                name: "Pão de Açúcar".to_string(),
                unit_type: UnitType::Kg,
                price: Some(8.5),
                visible: true,
                stock: None,
                barcodes: Vec::new(),
                promo_price: None,
                weight: None,
                length: None,
                width: None,
                height: None,
                promo_end_at: None,
                promo_start_at: None,
            }],
        },
    }
}

#[test]
fn writes_one_file_per_batch_by_sequence() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let target = dir.path().join("batches");
    let paths = write_batches(&[batch(1), batch(2)], &target).expect("write batches");

    assert_eq!(paths.len(), 2);
    assert!(target.join("batch_1.json").is_file());
    assert!(target.join("batch_2.json").is_file());
}

#[test]
fn files_hold_the_payload_shape_with_utf8_intact() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let paths = write_batches(&[batch(1)], dir.path()).expect("write batches");

    let content = std::fs::read_to_string(&paths[0]).expect("read batch file");
    let payload: BatchPayload = serde_json::from_str(&content).expect("parse batch file");
    assert_eq!(payload.products.len(), 1);
    assert_eq!(payload.products[0].name, "Pão de Açúcar");
    // Non-ASCII is written verbatim, not escaped.
    assert!(content.contains("Pão de Açúcar"));
}

#[test]
fn no_batches_still_creates_the_directory() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let target = dir.path().join("empty");
    let paths = write_batches(&[], &target).expect("write nothing");
    assert!(paths.is_empty());
    assert!(target.is_dir());
}
