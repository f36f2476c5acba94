//! HTTP API and page
//!
//! Routes:
//! - `GET /` practice page
//! - `GET /health`
//! - `GET /api/languages`, `GET /api/problems`, `GET /api/problems/{id}`
//! - `POST /api/run`, `POST /api/grade`, `POST /api/trace`

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use crate::http::error::{ApiError, ServerError};
pub use crate::http::handlers::{HealthResponse, INDEX_HTML, LanguagesResponse};

mod body;
mod error;
mod handlers;

use crate::runner::Runner;

/// Build the router with all routes and middleware
pub fn router(runner: Arc<Runner>) -> Router {
    let server = runner.config().server.clone();

    let mut router = Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/languages", get(handlers::languages))
        .route("/api/problems", get(handlers::problems))
        .route("/api/problems/{id}", get(handlers::problem))
        .route("/api/run", post(handlers::run))
        .route("/api/grade", post(handlers::grade))
        .route("/api/trace", post(handlers::trace))
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(runner);

    if server.cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

/// Bind `server.bind_addr` and serve until `shutdown` resolves
pub async fn serve<F>(runner: Runner, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = runner.config().server.bind_addr;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let local_addr = listener.local_addr().map_err(ServerError::Serve)?;

    info!(
        languages = runner.config().languages.len(),
        problems = runner.catalog().len(),
        "adaptive-ide listening on http://{local_addr}"
    );

    axum::serve(listener, router(Arc::new(runner)))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)?;

    info!("server shut down gracefully");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for Ctrl+C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!("failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
