//! Sync pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read the semicolon-delimited export
//! 2. **Transform**: normalize every row into a canonical record
//! 3. **Batch**: partition records into 1000-product submission units
//! 4. **Write**: persist each batch as a JSON file
//! 5. **Submit**: PUT each batch to the catalog API (optional)
//!
//! Each stage takes the output of the previous stage and returns typed
//! results; stages 1-4 are composed here, submission stays in
//! `catalog-submit` and is wired up only by the command layer.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use catalog_ingest::{RawProduct, read_catalog};
use catalog_model::{CanonicalProduct, ProductBatch, UnitType};
use catalog_output::{build_batches, write_batches};
use catalog_transform::build_products;

/// Stage 1: read the export into raw rows.
pub fn ingest(catalog: &Path) -> Result<Vec<RawProduct>> {
    let span = info_span!("ingest");
    let _guard = span.enter();
    let rows = read_catalog(catalog)
        .with_context(|| format!("ingest catalog {}", catalog.display()))?;
    info!(rows = rows.len(), "read catalog export");
    Ok(rows)
}

/// Stage 2: normalize raw rows into canonical records.
pub fn transform(rows: &[RawProduct]) -> Vec<CanonicalProduct> {
    let span = info_span!("transform");
    let _guard = span.enter();
    let products = build_products(rows);
    let by_weight = products
        .iter()
        .filter(|product| product.unit_type == UnitType::Kg)
        .count();
    debug!(
        products = products.len(),
        by_weight,
        per_unit = products.len() - by_weight,
        "normalized records"
    );
    products
}

/// Stage 3: partition records into submission batches.
pub fn batch(products: Vec<CanonicalProduct>) -> Vec<ProductBatch> {
    let batches = build_batches(products);
    info!(batches = batches.len(), "partitioned into batches");
    batches
}

/// Stage 4: write batch files under `output_dir`.
pub fn write(batches: &[ProductBatch], output_dir: &Path) -> Result<Vec<PathBuf>> {
    let span = info_span!("write");
    let _guard = span.enter();
    write_batches(batches, output_dir).context("write batch files")
}
