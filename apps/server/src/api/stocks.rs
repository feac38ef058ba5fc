use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use stockboard_market_data::{
    get_stock_codes_from_props, is_stock_list_empty, is_stock_present, ChartSeries, Dashboard,
    DatasetEnvelope, StockSummary,
};

/// Chart series for a batch of datasets. A `null` body yields `null`.
async fn chart_series(
    State(state): State<Arc<AppState>>,
    Json(datasets): Json<Option<Vec<DatasetEnvelope>>>,
) -> ApiResult<Json<Option<Vec<ChartSeries>>>> {
    let series = state
        .dashboard_service
        .chart_series(datasets.as_deref())
        .await?;
    Ok(Json(series))
}

async fn summary(
    State(state): State<Arc<AppState>>,
    Json(envelope): Json<DatasetEnvelope>,
) -> ApiResult<Json<StockSummary>> {
    let summary = state.dashboard_service.summary(&envelope).await?;
    Ok(Json(summary))
}

async fn dashboard(
    State(state): State<Arc<AppState>>,
    Json(datasets): Json<Vec<DatasetEnvelope>>,
) -> ApiResult<Json<Dashboard>> {
    let board = state.dashboard_service.dashboard(&datasets).await;
    Ok(Json(board))
}

#[derive(Deserialize)]
struct CodesRequest {
    datasets: Vec<DatasetEnvelope>,
    #[serde(default)]
    candidate: Option<String>,
}

#[derive(Serialize)]
struct CodesResponse {
    codes: Vec<String>,
    empty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    present: Option<bool>,
}

/// Codes on the board, and whether a candidate is already among them.
async fn codes(Json(body): Json<CodesRequest>) -> ApiResult<Json<CodesResponse>> {
    let codes = get_stock_codes_from_props(&body.datasets);
    let present = match body.candidate.as_deref().map(str::trim) {
        Some("") => {
            return Err(ApiError::BadRequest(
                "candidate must not be blank".to_string(),
            ))
        }
        Some(candidate) => Some(is_stock_present(codes.as_slice(), candidate)),
        None => None,
    };
    Ok(Json(CodesResponse {
        empty: is_stock_list_empty(&body.datasets),
        codes,
        present,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stocks/chart", post(chart_series))
        .route("/stocks/summary", post(summary))
        .route("/stocks/dashboard", post(dashboard))
        .route("/stocks/codes", post(codes))
}
