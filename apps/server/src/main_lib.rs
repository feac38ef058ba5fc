use std::sync::Arc;

use crate::config::{Config, LogFormat};
use stockboard_market_data::{DashboardService, DashboardServiceTrait};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub dashboard_service: Arc<dyn DashboardServiceTrait>,
}

pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    tracing::debug!(
        "Building state (timeout {:?}, cors {:?})",
        config.request_timeout,
        config.cors_allow
    );
    let dashboard_service: Arc<dyn DashboardServiceTrait> = Arc::new(DashboardService::new());
    Arc::new(AppState { dashboard_service })
}
