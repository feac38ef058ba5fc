//! Stockboard Market Data Crate
//!
//! Normalizes daily stock datasets from the market-data provider into the two
//! shapes the dashboard renders.
//!
//! # Overview
//!
//! ```text
//! +------------------+
//! | DatasetEnvelope  |  (provider payload, one per instrument)
//! +------------------+
//!          |
//!          +------------------------------+
//!          v                              v
//! +------------------+          +------------------+
//! |   ChartSeries    |          |   StockSummary   |
//! | [[millis,price]] |          |  (dashboard tile)|
//! +------------------+          +------------------+
//!          \                              /
//!           +------------+---------------+
//!                        v
//!               +------------------+
//!               |    Dashboard     |  (per-instrument failure isolation)
//!               +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`DatasetEnvelope`] / [`RawStockDataset`] / [`RawStockRow`] - Provider input
//! - [`ChartSeries`] / [`ChartSeriesPoint`] - Chart output
//! - [`StockSummary`] / [`Variation`] - Tile output
//! - [`StockDataError`] - Failures raised by the transformer
//!
//! # Entry Points
//!
//! - [`get_required_stock_props`] - batch of datasets to chart series
//! - [`get_stock_item_properties`] - one dataset to a summary tile
//! - [`DashboardService`] - both, over a whole board

pub mod dashboard;
pub mod errors;
pub mod models;
pub mod transform;

pub use errors::StockDataError;

pub use models::{
    ChartSeries, ChartSeriesPoint, DatasetEnvelope, RawStockDataset, RawStockRow,
    RawStockSeries, StockSummary, Variation,
};

pub use transform::{
    current_closing_price, current_price_change, daily_percent_change, formatted_stock_name,
    get_required_stock_props, get_stock_codes_from_props, get_stock_item_properties,
    is_stock_list_empty, is_stock_present, last_update_time, previous_closing_price,
};

pub use dashboard::{Dashboard, DashboardService, DashboardServiceTrait, TileError, TileOutcome};
