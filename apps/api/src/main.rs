mod analytics;
mod config;
mod display;
mod errors;
mod matches;
mod matching_client;
mod models;
mod narrative;
mod routes;
mod state;

use anyhow::Result;
use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::matches::store::MatchStore;
use crate::matching_client::{HttpMatchingService, MatchingService, UnconfiguredMatchingService};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Screener API v{}", env!("CARGO_PKG_VERSION"));

    let matching: Arc<dyn MatchingService> = match &config.matching_service_url {
        Some(url) => {
            info!("Matching service: {url}");
            Arc::new(HttpMatchingService::new(url, config.matching_timeout)?)
        }
        None => {
            warn!("MATCHING_SERVICE_URL not set; only ingested match sets can be analysed");
            Arc::new(UnconfiguredMatchingService)
        }
    };

    let state = AppState {
        config: config.clone(),
        matching,
        store: MatchStore::new(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allowed_origins));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}
