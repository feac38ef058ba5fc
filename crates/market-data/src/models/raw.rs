//! Raw provider payloads.
//!
//! The provider returns each trading day as a heterogeneous JSON array. Only
//! two positions matter to us, and this is the only place that knows them.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::errors::{Result, StockDataError};

/// Position of the trading date in a raw row.
pub const DATE_INDEX: usize = 0;

/// Position of the adjusted closing price in a raw row.
pub const ADJUSTED_CLOSE_INDEX: usize = 11;

/// Minimum number of columns a well-formed row carries.
pub const MIN_ROW_LEN: usize = ADJUSTED_CLOSE_INDEX + 1;

/// One trading day as returned by the provider, decoded down to the fields we use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawStockRow {
    date: String,
    adjusted_close: Decimal,
}

impl RawStockRow {
    /// Create a row from already decoded values.
    pub fn new(date: impl Into<String>, adjusted_close: Decimal) -> Self {
        Self {
            date: date.into(),
            adjusted_close,
        }
    }

    /// Decode a row from its positional JSON columns.
    pub fn from_values(values: &[Value]) -> Result<Self> {
        if values.len() < MIN_ROW_LEN {
            return Err(StockDataError::MalformedRow(format!(
                "expected at least {} columns, got {}",
                MIN_ROW_LEN,
                values.len()
            )));
        }

        let date = values[DATE_INDEX].as_str().ok_or_else(|| {
            StockDataError::MalformedRow(format!(
                "date column is not a string: {}",
                values[DATE_INDEX]
            ))
        })?;

        let adjusted_close = match &values[ADJUSTED_CLOSE_INDEX] {
            Value::Number(n) => parse_decimal(&n.to_string()),
            _ => None,
        }
        .ok_or_else(|| {
            StockDataError::MalformedRow(format!(
                "adjusted close column is not a number: {}",
                values[ADJUSTED_CLOSE_INDEX]
            ))
        })?;

        Ok(Self::new(date, adjusted_close))
    }

    /// Trading date string, as sent by the provider.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Closing price adjusted for splits and dividends.
    pub fn adjusted_close(&self) -> Decimal {
        self.adjusted_close
    }
}

impl<'de> Deserialize<'de> for RawStockRow {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<Value>::deserialize(deserializer)?;
        Self::from_values(&values).map_err(serde::de::Error::custom)
    }
}

/// Rows for one instrument, oldest first.
pub type RawStockSeries = Vec<RawStockRow>;

/// One instrument's full record: metadata plus its daily series.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RawStockDataset {
    /// Ticker code, e.g. "AAPL"
    pub dataset_code: String,

    /// Display name, usually with a provider annotation in parentheses
    pub name: String,

    /// Daily rows, oldest first
    pub data: RawStockSeries,

    /// When the provider last refreshed this dataset
    pub refreshed_at: String,
}

/// The provider's outer wrapper around a dataset.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DatasetEnvelope {
    pub dataset: RawStockDataset,
}

impl DatasetEnvelope {
    pub fn new(dataset: RawStockDataset) -> Self {
        Self { dataset }
    }
}

/// Numbers arrive as JSON literals; exponent notation needs the scientific parser.
fn parse_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn quandl_row(date: &str, adjusted_close: Value) -> Value {
        json!([
            date, 170.0, 172.0, 169.5, 171.0, 1000.0, 0.0, 1.0, 170.0, 172.0, 169.5,
            adjusted_close, 1000.0
        ])
    }

    #[test]
    fn test_decode_row() {
        let row: RawStockRow = serde_json::from_value(quandl_row("2018-03-27", json!(168.34)))
            .unwrap();
        assert_eq!(row.date(), "2018-03-27");
        assert_eq!(row.adjusted_close(), dec!(168.34));
    }

    #[test]
    fn test_decode_row_integer_close() {
        let row: RawStockRow =
            serde_json::from_value(quandl_row("2018-03-27", json!(110))).unwrap();
        assert_eq!(row.adjusted_close(), dec!(110));
    }

    #[test]
    fn test_decode_row_too_short() {
        let values = vec![json!("2018-03-27"), json!(1.0)];
        let err = RawStockRow::from_values(&values).unwrap_err();
        assert_eq!(
            err,
            StockDataError::MalformedRow("expected at least 12 columns, got 2".to_string())
        );
    }

    #[test]
    fn test_decode_row_null_close() {
        let result: std::result::Result<RawStockRow, _> =
            serde_json::from_value(quandl_row("2018-03-27", Value::Null));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("adjusted close column is not a number"));
    }

    #[test]
    fn test_decode_row_non_string_date() {
        let mut values = vec![json!(0.0); MIN_ROW_LEN];
        values[DATE_INDEX] = json!(20180327);
        let err = RawStockRow::from_values(&values).unwrap_err();
        assert_eq!(err.code(), "MALFORMED_ROW");
    }

    #[test]
    fn test_decode_envelope_ignores_unknown_fields() {
        let payload = json!({
            "dataset": {
                "id": 9775409,
                "dataset_code": "AAPL",
                "database_code": "WIKI",
                "name": "Apple Inc (AAPL) Prices, Dividends, Splits and Trading Volume",
                "refreshed_at": "2018-03-27T21:46:11.036Z",
                "column_names": ["Date", "Open"],
                "frequency": "daily",
                "data": [quandl_row("2018-03-26", json!(172.77))]
            }
        });

        let envelope: DatasetEnvelope = serde_json::from_value(payload).unwrap();
        assert_eq!(envelope.dataset.dataset_code, "AAPL");
        assert_eq!(envelope.dataset.data.len(), 1);
        assert_eq!(envelope.dataset.data[0].adjusted_close(), dec!(172.77));
    }

    #[test]
    fn test_parse_decimal_scientific() {
        assert_eq!(parse_decimal("1e-7"), Some(dec!(0.0000001)));
        assert_eq!(parse_decimal("not a number"), None);
    }
}
