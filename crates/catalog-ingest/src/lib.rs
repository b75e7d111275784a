//! Reading the semicolon-delimited product export.
//!
//! The export is a Portuguese-language retail catalog dump. This crate only
//! gets the rows off disk; all normalization lives in `catalog-transform`.
//! Per-cell problems degrade to `None` downstream, but structural problems
//! (unreadable file, missing columns) are hard errors here.

mod csv_source;

pub use csv_source::{RawProduct, read_catalog};
