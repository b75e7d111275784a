//! End-to-end pipeline: export file in, batch files out.

use std::io::Write;

use catalog_cli::pipeline::{batch, ingest, transform, write};
use catalog_model::{BatchPayload, UnitType};

const HEADER: &str = "Nome;Código de barras;Promocao;Preço regular;ativo;Código interno;estoque;Data termino promocao\n";

fn write_export(rows: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create export file");
    file.write_all(HEADER.as_bytes()).expect("write header");
    for row in rows {
        writeln!(file, "{row}").expect("write row");
    }
    file
}

#[test]
fn export_flows_through_to_batch_files() {
    let export = write_export(&[
        "Arroz Integral 5kg;7891234567895.0;0;24,90;true;101;12;31-MAR-24",
        "Queijo kg;;19,90;59,90;true;102;3.5;2024-03-01/2024-03-31",
        "Detergente;1234567;0;2,99;false;103;40;",
    ]);
    let out_dir = tempfile::tempdir().expect("create output dir");

    let rows = ingest(export.path()).expect("ingest");
    assert_eq!(rows.len(), 3);

    let products = transform(&rows);
    assert_eq!(products[0].unit_type, UnitType::Uni);
    assert_eq!(products[1].unit_type, UnitType::Kg);
    assert_eq!(products[2].unit_type, UnitType::Kg);

    let batches = batch(products);
    assert_eq!(batches.len(), 1);

    let paths = write(&batches, out_dir.path()).expect("write batches");
    assert_eq!(paths, vec![out_dir.path().join("batch_1.json")]);

    let content = std::fs::read_to_string(&paths[0]).expect("read batch file");
    let payload: BatchPayload = serde_json::from_str(&content).expect("parse batch file");
    assert_eq!(payload.products.len(), 3);

    let rice = &payload.products[0];
    assert_eq!(rice.barcodes, vec!["7891234567895"]);
    assert_eq!(rice.price, Some(24.9));
    assert_eq!(rice.promo_price, None);
    assert_eq!(rice.weight, Some(5.0));
    assert_eq!(rice.promo_end_at.as_deref(), Some("2024-03-31T00:00:00"));
    assert_eq!(rice.promo_start_at, None);

    let cheese = &payload.products[1];
    assert!(cheese.barcodes.is_empty());
    assert_eq!(cheese.promo_price, Some(19.9));
    assert_eq!(cheese.promo_start_at.as_deref(), Some("2024-03-01T00:00:00"));
    assert_eq!(cheese.promo_end_at.as_deref(), Some("2024-03-31T00:00:00"));

    let detergent = &payload.products[2];
    assert!(!detergent.visible);
    // 7 digits is not a valid EAN length.
    assert!(detergent.barcodes.is_empty());
    assert_eq!(detergent.stock, Some(40.0));
}

#[test]
fn ingest_rejects_wrong_schema() {
    let mut file = tempfile::NamedTempFile::new().expect("create file");
    file.write_all(b"foo;bar\n1;2\n").expect("write file");
    assert!(ingest(file.path()).is_err());
}
