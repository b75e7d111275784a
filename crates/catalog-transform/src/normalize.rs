//! Per-column field normalizers.
//!
//! Each normalizer is a total function from one raw cell to one canonical
//! field. Missing or malformed input maps to `None` / an empty sequence.

/// Barcode: numeric storage → validated EAN digit string.
///
/// Spreadsheet storage turns barcodes into floats (`7891234567895.0`), so
/// the value is parsed as a number and truncated to its integer part
/// before validation. Only digit lengths 8, 12, and 13 (EAN-8/12/13) are
/// accepted; anything else yields an empty sequence. At most one barcode
/// is ever produced.
pub fn normalize_barcode(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let Ok(value) = raw.trim().parse::<f64>() else {
        return Vec::new();
    };
    if !value.is_finite() || value < 0.0 {
        return Vec::new();
    }
    let digits = format!("{}", value.trunc() as i64);
    if matches!(digits.len(), 8 | 12 | 13) {
        vec![digits]
    } else {
        Vec::new()
    }
}

/// Regular price: comma decimal separator, rounded to 2 decimal places.
pub fn normalize_price(raw: Option<&str>) -> Option<f64> {
    let value = raw?.trim().replace(',', ".").parse::<f64>().ok()?;
    Some(round2(value))
}

/// Promotional price: like [`normalize_price`], but the literal `"0"`
/// means "no promotion" and yields `None`.
pub fn normalize_promo_price(raw: Option<&str>) -> Option<f64> {
    let trimmed = raw?.trim();
    if trimmed == "0" {
        return None;
    }
    normalize_price(Some(trimmed))
}

/// Internal code: stringified as-is, no numeric reformatting.
pub fn normalize_internal_code(raw: Option<&str>) -> Option<String> {
    raw.map(|code| code.trim().to_string())
        .filter(|code| !code.is_empty())
}

/// Stock quantity as a plain decimal.
pub fn normalize_stock(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok()
}

/// Visibility flag: the source column is boolean-shaped text.
pub fn normalize_visibility(raw: Option<&str>) -> bool {
    match raw {
        Some(value) => {
            let trimmed = value.trim();
            trimmed.eq_ignore_ascii_case("true") || trimmed == "1"
        }
        None => false,
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
