//! Hello dashboard - Main Entry Point
//!
//! Server build: serves the Dioxus application and proxies `/api/*` to the backend.
//! Uses dioxus::serve() pattern for dx serve compatibility.

use hello_dashboard::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    // IMPORTANT: Use dioxus::server::axum, NOT axum directly
    use dioxus::server::axum::{routing::any, Extension};
    use hello_dashboard::config::DashboardConfig;
    use hello_dashboard::handlers::{proxy_handler, ProxyState};

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = DashboardConfig::from_env();
    tracing::info!(backend_url = %config.backend_url, "Starting Hello dashboard...");

    let proxy = match ProxyState::new(&config.backend_url) {
        Ok(proxy) => proxy,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    dioxus::serve(move || {
        let proxy = proxy.clone();
        async move {
            // NOTE: Axum 0.8 uses {*path} syntax for wildcards
            let router = dioxus::server::router(App)
                .route("/api/{*path}", any(proxy_handler))
                .layer(Extension(proxy));

            Ok(router)
        }
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] Hello dashboard - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
