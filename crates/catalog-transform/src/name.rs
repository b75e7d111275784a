//! Name-driven inference: selling-unit type and physical measures.
//!
//! All matching runs on a normalized copy of the name (diacritics folded,
//! lowercased); the record keeps the original spelling.

use std::sync::LazyLock;

use regex::Regex;

use catalog_model::UnitType;

/// Explicit packaging token anywhere in the name.
static EXPLICIT_UNIT_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(un|unid|unidade|pct|pacote|cx|caixa|frasco|galao)\b")
        .expect("invalid unit token regex")
});

/// Number immediately followed by a volume unit (`350ml`, `2l`).
static QUANTIFIED_VOLUME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(ml|l)\b").expect("invalid volume regex"));

/// Number immediately followed by a weight unit (`5kg`, `90g`).
static QUANTIFIED_WEIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(kg|g)\b").expect("invalid quantified weight regex"));

/// Standalone weight token with no preceding number (`queijo kg`).
static BARE_WEIGHT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(kg|g)\b").expect("invalid bare weight regex"));

/// Weight with its value captured. The source heuristic used a `(?<!\d)`
/// lookbehind to avoid matching the tail of a longer number; the regex
/// crate has no lookbehind, so the guard is a consumed non-digit prefix.
/// First-match semantics are identical.
static WEIGHT_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9])(\d+(?:[.,]\d+)?)\s*(kg|g)\b").expect("invalid weight value regex")
});

/// `30cm x 20cm` or `30cm/20cm/10cm`: two dimensions with an optional third.
static DIMENSIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(\d+(?:[.,]\d+)?)\s*(cm|m)\s*[/xX]\s*(\d+(?:[.,]\d+)?)\s*(cm|m)(?:\s*[/xX]\s*(\d+(?:[.,]\d+)?)\s*(cm|m))?",
    )
    .expect("invalid dimensions regex")
});

/// One step of the unit-type rule chain.
///
/// The chain is an ordered priority list; the first matching rule wins.
/// Rule order is load-bearing: an explicit quantity (`5kg`) must classify
/// as a packaged unit before the bare-token rule can claim bulk sale.
pub struct UnitRule {
    /// Human-readable description, for the `rules` listing.
    pub label: &'static str,
    /// Pattern source, for the `rules` listing.
    pub pattern: &'static str,
    regex: &'static LazyLock<Regex>,
    pub outcome: UnitType,
}

static UNIT_RULES: [UnitRule; 4] = [
    UnitRule {
        label: "explicit packaging token",
        pattern: r"\b(un|unid|unidade|pct|pacote|cx|caixa|frasco|galao)\b",
        regex: &EXPLICIT_UNIT_TOKEN,
        outcome: UnitType::Uni,
    },
    UnitRule {
        label: "quantified volume",
        pattern: r"\d+(ml|l)\b",
        regex: &QUANTIFIED_VOLUME,
        outcome: UnitType::Uni,
    },
    UnitRule {
        label: "quantified weight",
        pattern: r"\d+(kg|g)\b",
        regex: &QUANTIFIED_WEIGHT,
        outcome: UnitType::Uni,
    },
    UnitRule {
        label: "bare weight token",
        pattern: r"\b(kg|g)\b",
        regex: &BARE_WEIGHT_TOKEN,
        outcome: UnitType::Kg,
    },
];

/// Number of whitespace tokens at or above which an unmarked name is
/// assumed to be a packaged product.
pub const FALLBACK_WORD_COUNT: usize = 4;

/// The unit-type rule chain in evaluation order, for display.
pub fn unit_rules() -> &'static [UnitRule] {
    &UNIT_RULES
}

/// Infers whether a product is sold per unit or by weight from its name.
///
/// Evaluates the ordered rule chain; if nothing matches, names with
/// [`FALLBACK_WORD_COUNT`] or more words default to `UNI`, shorter ones
/// to `KG`.
pub fn infer_unit_type(name: &str) -> UnitType {
    let clean = fold_name(name);
    for rule in &UNIT_RULES {
        if rule.regex.is_match(&clean) {
            return rule.outcome;
        }
    }
    if clean.split_whitespace().count() >= FALLBACK_WORD_COUNT {
        UnitType::Uni
    } else {
        UnitType::Kg
    }
}

/// Physical measures extracted from a product name.
///
/// Weight is in kilograms; the dimensions keep whatever value appears in
/// the name, with no cm/m conversion. That asymmetry comes from the
/// source heuristics and is preserved on purpose.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Measures {
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

/// Extracts weight and dimensions from a product name.
///
/// Weight and dimension extraction are independent; either, both, or
/// neither may succeed. Only the first weight match counts; `g` values
/// are scaled to kilograms and rounded to 3 decimal places.
pub fn extract_measures(name: &str) -> Measures {
    let clean = fold_name(name);
    let mut measures = Measures::default();

    if let Some(caps) = WEIGHT_VALUE.captures(&clean) {
        if let Some(value) = parse_decimal(&caps[1]) {
            let kilograms = if &caps[2] == "g" { value / 1000.0 } else { value };
            measures.weight = Some(crate::normalize::round3(kilograms));
        }
    }

    if let Some(caps) = DIMENSIONS.captures(&clean) {
        measures.length = parse_decimal(&caps[1]);
        measures.width = parse_decimal(&caps[3]);
        if let Some(third) = caps.get(5) {
            measures.height = parse_decimal(third.as_str());
        }
    }

    measures
}

/// Lowercases and strips the diacritics that occur in Portuguese catalog
/// text, so `GALÃO` matches the `galao` token.
fn fold_name(name: &str) -> String {
    name.to_lowercase().chars().map(fold_char).collect()
}

fn fold_char(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        _ => ch,
    }
}

fn parse_decimal(value: &str) -> Option<f64> {
    value.replace(',', ".").parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_portuguese_diacritics() {
        assert_eq!(fold_name("GALÃO de Água"), "galao de agua");
        assert_eq!(fold_name("Pêssego"), "pessego");
    }

    #[test]
    fn rule_chain_order_is_stable() {
        let labels: Vec<&str> = unit_rules().iter().map(|rule| rule.label).collect();
        assert_eq!(
            labels,
            [
                "explicit packaging token",
                "quantified volume",
                "quantified weight",
                "bare weight token",
            ]
        );
    }
}
