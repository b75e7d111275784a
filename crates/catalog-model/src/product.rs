//! Canonical product record.

use serde::{Deserialize, Serialize};

use crate::unit::UnitType;

/// The normalized, API-ready representation of one product.
///
/// Field declaration order is the output contract order expected by the
/// catalog API; serde emits fields in declaration order, so reordering
/// these fields is a breaking change.
///
/// Every field is derived from exactly one source column (`unit_type` and
/// the measures come from the name column); no cross-field validation is
/// performed. Malformed source values surface as `None`, never as errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalProduct {
    /// Retailer-internal product code, stringified as-is.
    pub internal_code: Option<String>,
    /// Raw product name, unchanged from the source.
    pub name: String,
    /// Selling-unit type inferred from the name.
    pub unit_type: UnitType,
    /// Regular price, rounded to 2 decimal places.
    pub price: Option<f64>,
    /// Whether the product is visible in the store.
    pub visible: bool,
    /// Stock quantity.
    pub stock: Option<f64>,
    /// Zero or one validated EAN barcode. A sequence only because the API
    /// payload shape demands one; never holds more than one entry.
    pub barcodes: Vec<String>,
    /// Promotional price; `None` means no promotion.
    pub promo_price: Option<f64>,
    /// Weight in kilograms, extracted from the name.
    pub weight: Option<f64>,
    /// First dimension from the name, unit taken at face value.
    pub length: Option<f64>,
    /// Second dimension from the name.
    pub width: Option<f64>,
    /// Third dimension from the name, if present.
    pub height: Option<f64>,
    /// Promotion end, ISO 8601 without offset.
    pub promo_end_at: Option<String>,
    /// Promotion start, ISO 8601 without offset.
    pub promo_start_at: Option<String>,
}
