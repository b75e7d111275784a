//! Selling-unit classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a product is sold: per discrete unit or by weight.
///
/// The catalog API expects the literal strings `"UNI"` and `"KG"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    /// Sold per discrete unit (packaged goods).
    #[serde(rename = "UNI")]
    Uni,
    /// Sold by weight (bulk goods).
    #[serde(rename = "KG")]
    Kg,
}

impl UnitType {
    /// Returns the wire representation used by the catalog API.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitType::Uni => "UNI",
            UnitType::Kg => "KG",
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UnitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "UNI" => Ok(UnitType::Uni),
            "KG" => Ok(UnitType::Kg),
            _ => Err(format!("unknown unit type: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_representation() {
        assert_eq!(UnitType::Uni.as_str(), "UNI");
        assert_eq!(UnitType::Kg.to_string(), "KG");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("uni".parse::<UnitType>(), Ok(UnitType::Uni));
        assert_eq!(" kg ".parse::<UnitType>(), Ok(UnitType::Kg));
        assert!("caixa".parse::<UnitType>().is_err());
    }
}
