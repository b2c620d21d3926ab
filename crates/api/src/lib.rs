//! Chirpy HTTP API server.
//!
//! Serves the chirp validation endpoint, the admin hit-counter pages, a
//! health probe, and the static site under `/app/*`, with structured logging
//! (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod hits;
pub mod middleware;
pub mod routes;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use hits::HitCounter;

/// Shared application state handed to handlers and middleware.
///
/// Constructed once at startup and injected behind an `Arc`; there is no
/// package-level singleton.
#[derive(Debug, Default)]
pub struct AppState {
    /// Visit counter for the static site.
    pub hits: HitCounter,
}

/// Creates the Axum application router with all routes and shared state.
///
/// `public_dir` is the filesystem root of the static site nested at `/app`.
/// Only static-site requests pass through the hit-counting middleware; the
/// API and admin routes leave the counter untouched.
pub fn create_app(
    state: Arc<AppState>,
    metrics_handle: PrometheusHandle,
    public_dir: &Path,
) -> Router {
    let exporter_router = Router::new()
        .route("/metrics", get(routes::metrics::export))
        .with_state(metrics_handle);

    let static_site = ServiceBuilder::new()
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::track_hits,
        ))
        .service(ServeDir::new(public_dir));

    Router::new()
        .route("/api/healthz", get(routes::health::check))
        .route("/api/validate_chirp", post(routes::chirps::validate))
        .route("/admin/metrics", get(routes::admin::metrics))
        .route("/admin/reset", post(routes::admin::reset))
        .nest_service("/app", static_site)
        .with_state(state)
        .merge(exporter_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
