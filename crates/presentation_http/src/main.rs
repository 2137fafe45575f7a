//! Transit stop finder HTTP server
//!
//! Main entry point: loads configuration, wires the integration clients
//! into the application services, and serves the API.

use std::sync::Arc;

use application::{GeocoderService, StopFinderService, SuggestionService};
use integration_geocoding::MapboxGeocodingClient;
use integration_transit::MbtaTransitClient;
use presentation_http::{AppConfig, routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stopfinder_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🚇 Transit stop finder v{} starting...", env!("CARGO_PKG_VERSION"));

    // Missing credentials are fatal here, not per request
    let config = AppConfig::from_env()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        "Configuration loaded"
    );

    // Initialize upstream clients
    let geocoding = Arc::new(
        MapboxGeocodingClient::new(&config.mapbox)
            .map_err(|e| anyhow::anyhow!("Failed to initialize geocoding client: {e}"))?,
    );
    let transit = Arc::new(
        MbtaTransitClient::new(&config.mbta)
            .map_err(|e| anyhow::anyhow!("Failed to initialize transit client: {e}"))?,
    );

    // Initialize services
    let geocoder = GeocoderService::new(geocoding.clone());
    let stop_finder = StopFinderService::new(geocoder, transit)
        .with_fallback_page_limit(config.mbta.fallback_page_limit);
    let suggestions =
        SuggestionService::new(geocoding).with_page_limit(config.mapbox.page_limit);

    let state = AppState {
        stop_finder: Arc::new(stop_finder),
        suggestions: Arc::new(suggestions),
    };

    // Build router
    let app = routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve on ctrl-c for graceful shutdown
async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    info!("Shutdown signal received");
}
