// Main entry point - Dependency injection and server setup
use std::{sync::Arc, time::Duration};

use axum::{routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use battery_dashboard::application::dashboard_service::DashboardService;
use battery_dashboard::application::event_source::ChargingEventSource;
use battery_dashboard::application::refresh::spawn_refresh;
use battery_dashboard::infrastructure::config::{load_dashboard_config, SourceSettings};
use battery_dashboard::infrastructure::file_event_source::FileEventSource;
use battery_dashboard::infrastructure::http_event_source::HttpEventSource;
use battery_dashboard::presentation::app_state::AppState;
use battery_dashboard::presentation::handlers::{get_dashboard, get_recent_events, health_check};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Create event source (infrastructure layer)
    let source = build_event_source(&config.source)?;
    tracing::info!("Reading charging events from {}", source.describe());

    // Create service and start load cycles (application layer)
    let service = DashboardService::new(source, config.refresh.recent_events);
    let (cycles, _refresher) = spawn_refresh(service, config.refresh.interval());

    let state = Arc::new(AppState {
        cycles,
        recent_events: config.refresh.recent_events,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/recent", get(get_recent_events))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.server.bind).await?;
    tracing::info!("Starting battery-dashboard service on {}", config.server.bind);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn build_event_source(settings: &SourceSettings) -> anyhow::Result<Arc<dyn ChargingEventSource>> {
    Ok(match settings {
        SourceSettings::Http { url, timeout_secs } => Arc::new(HttpEventSource::new(
            url.clone(),
            Duration::from_secs(*timeout_secs),
        )?),
        SourceSettings::File { path } => Arc::new(FileEventSource::new(path.clone())),
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
