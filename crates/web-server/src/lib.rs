use axum::{routing::get, Router};
use database::Store;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod probes;
pub mod views;

/// The shared application state that all handlers can access.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Store,
}

/// Builds the application routes around the given state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(probes::health))
        .route("/api/products", get(handlers::get_products))
        .route("/api/error", get(probes::forced_error))
        .route("/api/slow", get(probes::slow))
        .fallback(handlers::not_found)
        .with_state(state)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the web server.
///
/// The store must already be established (and seeded) by the caller. Returns
/// once a shutdown signal has been received and in-flight requests have drained.
pub async fn run_server(addr: SocketAddr, store: Store) -> anyhow::Result<()> {
    let app = build_router(Arc::new(AppState { store }));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Server starting.");
    tracing::info!("Open http://localhost:{} in your browser", addr.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped.");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler.");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler.");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::warn!("Received Ctrl+C, shutting down."),
        _ = terminate => tracing::warn!("Received SIGTERM, shutting down."),
    }
}
