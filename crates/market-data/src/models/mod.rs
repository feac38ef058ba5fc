//! Stock data models
//!
//! - `raw` - Provider payloads (DatasetEnvelope, RawStockDataset, RawStockRow)
//! - `chart` - Chart output (ChartSeries, ChartSeriesPoint)
//! - `summary` - Dashboard tile output (StockSummary, Variation)

mod chart;
mod raw;
mod summary;

pub use chart::{ChartSeries, ChartSeriesPoint};
pub use raw::{
    DatasetEnvelope, RawStockDataset, RawStockRow, RawStockSeries, ADJUSTED_CLOSE_INDEX,
    DATE_INDEX, MIN_ROW_LEN,
};
pub use summary::{StockSummary, Variation};
