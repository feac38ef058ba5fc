use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One chart point, serialized as `[epochMillis, price]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeriesPoint(pub i64, pub Decimal);

impl ChartSeriesPoint {
    pub fn new(timestamp_millis: i64, price: Decimal) -> Self {
        Self(timestamp_millis, price)
    }

    /// Milliseconds since the Unix epoch
    pub fn timestamp_millis(&self) -> i64 {
        self.0
    }

    pub fn price(&self) -> Decimal {
        self.1
    }
}

/// A named price series ready for the chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Dataset code of the instrument
    pub name: String,

    /// Points in the same order as the raw rows
    pub data: Vec<ChartSeriesPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_point_serializes_as_pair() {
        let point = ChartSeriesPoint::new(1522108800000, dec!(172.75));
        let json = serde_json::to_value(point).unwrap();
        assert_eq!(json, serde_json::json!([1522108800000i64, 172.75]));
    }

    #[test]
    fn test_series_shape() {
        let series = ChartSeries {
            name: "AAPL".to_string(),
            data: vec![ChartSeriesPoint::new(0, dec!(1.5))],
        };
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json["name"], "AAPL");
        assert_eq!(json["data"][0][0], 0);
        assert_eq!(json["data"][0][1], 1.5);
    }
}
