//! Assembles canonical records from raw export rows.

use catalog_ingest::RawProduct;
use catalog_model::CanonicalProduct;

use crate::name::{extract_measures, infer_unit_type};
use crate::normalize::{
    normalize_barcode, normalize_internal_code, normalize_price, normalize_promo_price,
    normalize_stock, normalize_visibility,
};
use crate::promo::parse_promo_period;

/// Builds one canonical record from one raw row.
///
/// Applies every field normalizer plus the name-driven inference and the
/// promotion parser; the source-only columns do not survive into the
/// output. Deterministic: the same row always yields the same record.
pub fn build_product(raw: &RawProduct) -> CanonicalProduct {
    let measures = extract_measures(&raw.name);
    let (promo_start_at, promo_end_at) = parse_promo_period(raw.promo_period.as_deref());
    CanonicalProduct {
        internal_code: normalize_internal_code(raw.internal_code.as_deref()),
        name: raw.name.clone(),
        unit_type: infer_unit_type(&raw.name),
        price: normalize_price(raw.price.as_deref()),
        visible: normalize_visibility(raw.active.as_deref()),
        stock: normalize_stock(raw.stock.as_deref()),
        barcodes: normalize_barcode(raw.barcode.as_deref()),
        promo_price: normalize_promo_price(raw.promo_price.as_deref()),
        weight: measures.weight,
        length: measures.length,
        width: measures.width,
        height: measures.height,
        promo_end_at,
        promo_start_at,
    }
}

/// Builds the full record set, preserving source row order.
pub fn build_products(rows: &[RawProduct]) -> Vec<CanonicalProduct> {
    rows.iter().map(build_product).collect()
}
