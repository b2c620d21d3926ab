//! Admin endpoints for the site hit counter.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;

use crate::AppState;

/// GET /admin/metrics — HTML page reporting the visit count.
///
/// Reading the page leaves the counter untouched; only `/app/*` traffic is
/// counted.
pub async fn metrics(State(state): State<Arc<AppState>>) -> Html<String> {
    let hits = state.hits.current();

    Html(format!(
        "<html>\n  <body>\n    <h1>Welcome, Chirpy Admin</h1>\n    <p>Chirpy has been visited {hits} times!</p>\n  </body>\n</html>"
    ))
}

/// POST /admin/reset — sets the visit count back to zero.
#[tracing::instrument(skip(state))]
pub async fn reset(State(state): State<Arc<AppState>>) -> &'static str {
    state.hits.reset();
    tracing::info!("hit counter reset");

    "Hits: reset to 0"
}
