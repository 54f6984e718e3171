//! HTTP request handlers
//!
//! Implementation of the documentation page endpoint for the axum adapter.

use crate::render::{RAPIDOC_TEMPLATE, RequestContext};
use crate::server::app::AppState;
use axum::{
    extract::{OriginalUri, State},
    http::StatusCode,
    response::Html,
};

/// Serve the documentation page
///
/// GET at the configured route. Renders the page template from the current
/// settings; a stored invalid enum attribute fails the request with a 500.
pub async fn docs_page(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Html<String>, (StatusCode, String)> {
    let base_path = base_path_for(uri.path(), &state.settings.path);
    let ctx = RequestContext::new(base_path);
    tracing::debug!("Serving documentation page, base path: '{}'", ctx.base_path());

    match state.settings.render_page(RAPIDOC_TEMPLATE, &ctx) {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            tracing::error!("Failed to render documentation page: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render documentation page: {}", e),
            ))
        }
    }
}

/// Recover the mount prefix from the original request path
///
/// Nested routers strip their prefix before handlers run; the original URI
/// still carries it, so the prefix is the original path minus the configured
/// route suffix.
pub(crate) fn base_path_for(request_path: &str, route: &str) -> String {
    request_path
        .strip_suffix(route)
        .unwrap_or("")
        .trim_end_matches('/')
        .to_string()
}
