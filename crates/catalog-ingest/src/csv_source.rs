use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;

/// Source columns of the export, by their Portuguese headers.
const EXPECTED_HEADERS: &[&str] = &[
    "Nome",
    "Código de barras",
    "Promocao",
    "Preço regular",
    "ativo",
    "Código interno",
    "estoque",
    "Data termino promocao",
];

/// One row of the product export, untouched except for header matching.
///
/// Empty cells deserialize to `None`; every field except the name is
/// optional because the export routinely leaves them blank.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawProduct {
    /// Free-text product name (`Nome`).
    #[serde(rename = "Nome")]
    pub name: String,
    /// Barcode, numeric and possibly fractional due to spreadsheet storage.
    #[serde(rename = "Código de barras")]
    pub barcode: Option<String>,
    /// Promotional price with comma decimal separator; `"0"` means none.
    #[serde(rename = "Promocao")]
    pub promo_price: Option<String>,
    /// Regular price with comma decimal separator.
    #[serde(rename = "Preço regular")]
    pub price: Option<String>,
    /// Boolean-shaped visibility flag.
    #[serde(rename = "ativo")]
    pub active: Option<String>,
    /// Retailer-internal product code.
    #[serde(rename = "Código interno")]
    pub internal_code: Option<String>,
    /// Stock quantity.
    #[serde(rename = "estoque")]
    pub stock: Option<String>,
    /// Promotion end date (`31-MAR-24`) or ISO range joined by `/`.
    #[serde(rename = "Data termino promocao")]
    pub promo_period: Option<String>,
}

/// Reads the full export into memory, preserving source row order.
///
/// # Errors
///
/// Fails on unreadable input, a header row missing expected columns, or a
/// structurally malformed record. Malformed cell *values* are not checked
/// here.
pub fn read_catalog(path: &Path) -> Result<Vec<RawProduct>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .from_path(path)
        .with_context(|| format!("open catalog export {}", path.display()))?;

    let headers = normalize_headers(
        reader
            .headers()
            .with_context(|| format!("read headers from {}", path.display()))?,
    );
    for expected in EXPECTED_HEADERS {
        if !headers.iter().any(|header| header == *expected) {
            bail!(
                "catalog export {} is missing column '{expected}'",
                path.display()
            );
        }
    }
    reader.set_headers(headers);

    let mut rows = Vec::new();
    for (index, record) in reader.deserialize::<RawProduct>().enumerate() {
        let row = record.with_context(|| {
            format!("parse row {} of {}", index + 2, path.display())
        })?;
        rows.push(row);
    }
    Ok(rows)
}

/// Trims whitespace and a UTF-8 BOM from header cells so that serde's
/// header matching is not defeated by export quirks.
fn normalize_headers(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .map(|header| header.trim().trim_matches('\u{feff}').to_string())
        .collect()
}
