//! Hit-counting middleware for the static site.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::AppState;

/// Counts a request against the shared hit counter, then delegates to the
/// wrapped service unconditionally.
pub async fn track_hits(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    state.hits.record();
    metrics::counter!("chirpy_fileserver_hits_total").increment(1);

    next.run(request).await
}
