//! Standalone API proxy (without Dioxus frontend)
//! Use this to serve the browser bundle from any origin against a backend
//! that is not reachable from the browser directly.
//!
//! Run with: BACKEND_URL=http://localhost:8080 PORT=3001 cargo run --bin server --features server

use axum::{routing::any, Extension, Router};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use hello_dashboard::config::DashboardConfig;
use hello_dashboard::handlers::{proxy_handler, ProxyState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = DashboardConfig::from_env();
    let proxy = ProxyState::new(&config.backend_url)?;
    tracing::info!(backend_url = %config.backend_url, "Starting Hello proxy (standalone)...");

    // Read port from environment (default: 3001)
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    // NOTE: Axum 0.8 uses {*path} syntax for wildcards
    let app = Router::new()
        .route("/api/{*path}", any(proxy_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(Extension(proxy)),
        );

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    tracing::info!("Proxy running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
