//! Row normalization for the catalog export.
//!
//! This crate is the core of the pipeline: pure, deterministic functions
//! that turn one raw export row into one API-ready record.
//!
//! - **normalize**: per-column field normalizers (barcode, prices, stock, ...)
//! - **name**: unit-type inference and measure extraction from product names
//! - **promo**: promotion date / date-range parsing
//! - **builder**: per-row orchestration into `CanonicalProduct`
//!
//! Everything here is total: malformed input degrades to `None` (or an
//! empty barcode list), never to an error. A bad row must not stop the run.

pub mod builder;
pub mod name;
pub mod normalize;
pub mod promo;

pub use builder::{build_product, build_products};
pub use name::{FALLBACK_WORD_COUNT, Measures, UnitRule, extract_measures, infer_unit_type, unit_rules};
pub use promo::parse_promo_period;
