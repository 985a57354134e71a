//! Vitrine server - catalog/order HTTP API.
//!
//! Serves the product catalog (filtering, search, pagination), category and
//! color reference lists, product images, and accepts order submissions.
//! Backed by two JSON documents on disk: the catalog (read-only) and the
//! order log (rewritten after each accepted order).

#![cfg_attr(not(test), forbid(unsafe_code))]

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitrine_server::config::ServerConfig;
use vitrine_server::state::AppState;
use vitrine_server::store::{CatalogStore, OrderLog};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vitrine_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Open the backing JSON documents
    let catalog = CatalogStore::open(config.catalog_path.clone(), config.reload_per_request)
        .await
        .expect("Failed to load catalog document");
    let orders = OrderLog::open(config.orders_path.clone())
        .await
        .expect("Failed to load order log");

    let addr = config.socket_addr();
    let state = AppState::new(config, catalog, orders);
    let app = vitrine_server::app(state);

    tracing::info!("vitrine listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
