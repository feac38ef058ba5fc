//! Stock record transformer.
//!
//! Pure functions that read raw provider rows and produce the two output
//! shapes: chart series and dashboard tiles. Nothing here holds state or does
//! I/O, and inputs are only ever borrowed.
//!
//! - [`prices`] - closing prices, price change and percent change
//! - [`naming`] - display name cleanup
//! - [`codes`] - dataset code helpers
//! - [`time`] - refresh time correction and row date parsing
//! - [`chart`] - chart series conversion
//! - [`summary`] - per-instrument tile aggregation

pub mod chart;
pub mod codes;
pub mod naming;
pub mod prices;
pub mod summary;
pub mod time;

pub use chart::{chart_series_for, get_required_stock_props};
pub use codes::{get_stock_codes_from_props, is_stock_list_empty, is_stock_present};
pub use naming::formatted_stock_name;
pub use prices::{
    current_closing_price, current_price_change, daily_percent_change, fixed2,
    previous_closing_price, round2,
};
pub use summary::get_stock_item_properties;
pub use time::{corrected_timestamp, epoch_millis, last_update_time};
