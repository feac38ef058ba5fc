//! Dashboard aggregation.
//!
//! Runs the transformer over a whole board. Unlike the transformer entry
//! points, a board keeps going when one instrument fails: the failure is
//! reported in that instrument's tile so it can render a fallback.

use async_trait::async_trait;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, StockDataError};
use crate::models::{ChartSeries, DatasetEnvelope, StockSummary};
use crate::transform::{
    chart_series_for, get_required_stock_props, get_stock_codes_from_props,
    get_stock_item_properties,
};

/// Error details carried by a failed tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileError {
    pub code: String,
    pub message: String,
}

impl From<&StockDataError> for TileError {
    fn from(err: &StockDataError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

/// Outcome of building one instrument's tile: a summary or an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileOutcome {
    pub stock_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<StockSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<TileError>,
}

impl TileOutcome {
    pub fn ready(summary: StockSummary) -> Self {
        Self {
            stock_code: summary.stock_code.clone(),
            summary: Some(summary),
            error: None,
        }
    }

    pub fn failed(stock_code: impl Into<String>, err: &StockDataError) -> Self {
        Self {
            stock_code: stock_code.into(),
            summary: None,
            error: Some(TileError::from(err)),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.summary.is_some()
    }
}

/// Chart series, tiles and codes for a set of instruments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Series for every instrument whose rows converted cleanly
    pub series: Vec<ChartSeries>,
    /// One tile per instrument, in input order
    pub tiles: Vec<TileOutcome>,
    /// Dataset codes in input order
    pub codes: Vec<String>,
}

/// Service seam used by transport layers.
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    /// Chart series for every dataset; `None` when no collection was supplied.
    async fn chart_series(
        &self,
        datasets: Option<&[DatasetEnvelope]>,
    ) -> Result<Option<Vec<ChartSeries>>>;

    /// Tile for a single dataset.
    async fn summary(&self, envelope: &DatasetEnvelope) -> Result<StockSummary>;

    /// Full board with per-instrument failure isolation.
    async fn dashboard(&self, datasets: &[DatasetEnvelope]) -> Dashboard;
}

/// Stateless implementation over the transformer functions.
#[derive(Debug, Clone, Default)]
pub struct DashboardService;

impl DashboardService {
    pub fn new() -> Self {
        Self
    }

    fn build(datasets: &[DatasetEnvelope]) -> Dashboard {
        let mut board = Dashboard {
            series: Vec::with_capacity(datasets.len()),
            tiles: Vec::with_capacity(datasets.len()),
            codes: get_stock_codes_from_props(datasets),
        };

        for envelope in datasets {
            let code = &envelope.dataset.dataset_code;
            let chart = chart_series_for(envelope);
            let summary = get_stock_item_properties(envelope);

            let tile = match (&chart, summary) {
                (_, Err(err)) => {
                    warn!("Tile for {} failed: {}", code, err);
                    TileOutcome::failed(code.as_str(), &err)
                }
                (Err(err), Ok(_)) => {
                    warn!("Chart series for {} failed: {}", code, err);
                    TileOutcome::failed(code.as_str(), err)
                }
                (Ok(_), Ok(summary)) => {
                    debug!(
                        "Tile for {} ready: {} {}",
                        code,
                        summary.variation.as_str(),
                        summary.price_change
                    );
                    TileOutcome::ready(summary)
                }
            };
            board.tiles.push(tile);

            if let Ok(series) = chart {
                board.series.push(series);
            }
        }

        debug!(
            "Built dashboard: {} series, {}/{} tiles ready",
            board.series.len(),
            board.tiles.iter().filter(|t| t.is_ready()).count(),
            board.tiles.len()
        );

        board
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn chart_series(
        &self,
        datasets: Option<&[DatasetEnvelope]>,
    ) -> Result<Option<Vec<ChartSeries>>> {
        match get_required_stock_props(datasets) {
            Some(pending) => pending.await.map(Some),
            None => Ok(None),
        }
    }

    async fn summary(&self, envelope: &DatasetEnvelope) -> Result<StockSummary> {
        get_stock_item_properties(envelope)
    }

    async fn dashboard(&self, datasets: &[DatasetEnvelope]) -> Dashboard {
        Self::build(datasets)
    }
}
