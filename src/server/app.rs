//! Axum application setup
//!
//! Creates the axum router serving the documentation page at the configured
//! route, with request tracing and permissive CORS.

use crate::settings::RapiDocSettings;
use axum::{Router, routing::get};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Viewer settings, configured at startup and read per request
    pub settings: Arc<RapiDocSettings>,
}

/// Create an axum router serving the documentation page
///
/// The page is mounted at `settings.path`. The settings are expected to be
/// fully configured before this call; they are shared immutably afterwards.
pub fn create_app(settings: RapiDocSettings) -> Router {
    let route = settings.path.clone();
    let state = AppState {
        settings: Arc::new(settings),
    };

    Router::new()
        .route(&route, get(super::handlers::docs_page))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_app() {
        let settings = RapiDocSettings::new();
        let _app = create_app(settings);
    }

    #[test]
    fn test_create_app_with_custom_route() {
        let mut settings = RapiDocSettings::new();
        settings.path = "/docs".to_string();
        let _app = create_app(settings);
    }
}
