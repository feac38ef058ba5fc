use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of the latest price move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variation {
    Positive,
    Negative,
}

impl Variation {
    /// Strictly positive changes are `Positive`; zero counts as `Negative`.
    pub fn from_change(price_change: Decimal) -> Self {
        if price_change > Decimal::ZERO {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

/// Dashboard tile for one instrument, computed fresh on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSummary {
    /// Display name with the provider annotation stripped
    pub stock_name: String,
    pub stock_code: String,
    /// Latest adjusted close
    pub current_value: Decimal,
    /// Fixed two-decimal string, e.g. "10.00"
    pub price_change: String,
    /// Fixed two-decimal string, e.g. "-9.09"
    pub percent_change: String,
    /// Long human-readable refresh time
    pub last_updated: String,
    pub previous_close: Decimal,
    pub variation: Variation,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_variation_from_change() {
        assert_eq!(Variation::from_change(dec!(0.01)), Variation::Positive);
        assert_eq!(Variation::from_change(dec!(0)), Variation::Negative);
        assert_eq!(Variation::from_change(dec!(-3.2)), Variation::Negative);
    }

    #[test]
    fn test_variation_as_str_matches_wire_name() {
        for variation in [Variation::Positive, Variation::Negative] {
            let json = serde_json::to_value(variation).unwrap();
            assert_eq!(json, variation.as_str());
        }
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = StockSummary {
            stock_name: "Apple Inc".to_string(),
            stock_code: "AAPL".to_string(),
            current_value: dec!(110),
            price_change: "10.00".to_string(),
            percent_change: "10.00".to_string(),
            last_updated: "Tuesday, March 27th, 2018, 9:46 PM UTC+0".to_string(),
            previous_close: dec!(100),
            variation: Variation::Positive,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["stockName"], "Apple Inc");
        assert_eq!(json["stockCode"], "AAPL");
        assert_eq!(json["currentValue"], 110.0);
        assert_eq!(json["priceChange"], "10.00");
        assert_eq!(json["previousClose"], 100.0);
        assert_eq!(json["variation"], "positive");
    }
}
